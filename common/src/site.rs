//! サイト全体の静的データ（site.json）
//!
//! プロフィール・職歴・学歴・資格・プロジェクト・読書リスト・
//! キャリアパス・技術スタック・訪問国をまとめて持つ。

use crate::error::{Error, Result};
use crate::tech::TechCategory;
use crate::travel::Travels;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteData {
    pub name: String,
    pub initials: String,
    pub url: String,
    pub location: String,
    pub description: String,
    pub summary: String,
    pub avatar_url: String,
    pub skills: Vec<String>,
    pub navbar: Vec<NavLink>,
    pub contact: Contact,
    pub work: Vec<WorkEntry>,
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<Certification>,
    pub projects: Vec<Project>,
    pub books: Vec<BookTheme>,
    pub career_path: Vec<CareerStage>,
    pub tech_stack: Vec<TechCategory>,
    pub travels: Travels,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub href: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub email: String,
    pub tel: String,
    pub social: Vec<SocialLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub navbar: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkEntry {
    pub company: String,
    pub href: String,
    pub location: String,
    pub title: String,
    pub logo_url: String,
    pub start: String,
    pub end: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub school: String,
    pub href: String,
    pub degree: String,
    pub logo_url: String,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub issuer: String,
    pub href: String,
    pub title: String,
    pub logo_url: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectLink {
    #[serde(rename = "type")]
    pub kind: String,
    pub href: String,
}

/// プロジェクトカード
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub title: String,
    pub href: String,
    /// 公開先のURL（印刷時にカード内へ表記）
    pub link: String,
    pub dates: String,
    pub active: bool,
    pub description: String,
    pub technologies: Vec<String>,
    pub links: Vec<ProjectLink>,
    pub image: String,
    pub video: String,
    /// スライドショー用の画像
    pub images: Vec<String>,
}

/// カードの表示メディア
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectMedia<'a> {
    Slideshow(&'a [String]),
    Video(&'a str),
    Image(&'a str),
    None,
}

impl Project {
    /// 画像リスト → 動画 → 単一画像 の優先順
    pub fn media(&self) -> ProjectMedia<'_> {
        if !self.images.is_empty() {
            ProjectMedia::Slideshow(&self.images)
        } else if !self.video.is_empty() {
            ProjectMedia::Video(&self.video)
        } else if !self.image.is_empty() {
            ProjectMedia::Image(&self.image)
        } else {
            ProjectMedia::None
        }
    }

    /// 印刷用のリンク表記（"https://" と "www." と最初の "/" を除く）
    ///
    /// `link` が空なら None。カードの遷移先 `href` は使わない。
    pub fn link_label(&self) -> Option<String> {
        if self.link.trim().is_empty() {
            return None;
        }
        Some(
            self.link
                .replacen("https://", "", 1)
                .replacen("www.", "", 1)
                .replacen('/', "", 1),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Book {
    pub number: u32,
    pub title: String,
    pub author: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookTheme {
    pub theme: String,
    pub books: Vec<Book>,
}

impl BookTheme {
    /// タイトル未記入のプレースホルダを除いた一覧
    pub fn listed(&self) -> Vec<&Book> {
        self.books.iter().filter(|b| !b.title.trim().is_empty()).collect()
    }
}

/// タイムライン表示用（最後の項目は縦線を出さない）
pub fn with_last_flag<T>(items: &[T]) -> impl Iterator<Item = (&T, bool)> {
    let last = items.len().saturating_sub(1);
    items.iter().enumerate().map(move |(i, item)| (item, i == last))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerStage {
    pub title: String,
    pub description: String,
}

impl SiteData {
    pub fn from_json(json: &str) -> Result<Self> {
        let data: SiteData = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    /// 最低限の整合性チェック
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Content("name is empty".into()));
        }
        for project in &self.projects {
            if project.title.trim().is_empty() {
                return Err(Error::Content("project without title".into()));
            }
        }
        let unknown = self.travels.unknown_codes();
        if !unknown.is_empty() {
            return Err(Error::Content(format!(
                "visited countries missing from country table: {}",
                unknown.join(", ")
            )));
        }
        Ok(())
    }

    /// ナビバーに出すSNSリンク
    pub fn navbar_social(&self) -> impl Iterator<Item = &SocialLink> {
        self.contact.social.iter().filter(|s| s.navbar)
    }

    /// 読書リスト全体でプレースホルダを除いた冊数
    pub fn listed_book_count(&self) -> usize {
        self.books.iter().map(|t| t.listed().len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> Project {
        Project {
            title: "Serverless Portfolio".into(),
            href: "https://www.github.com/someone/portfolio".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_media_priority() {
        let mut p = project();
        assert_eq!(p.media(), ProjectMedia::None);

        p.image = "/one.png".into();
        assert_eq!(p.media(), ProjectMedia::Image("/one.png"));

        p.video = "/demo.mp4".into();
        assert_eq!(p.media(), ProjectMedia::Video("/demo.mp4"));

        p.images = vec!["/a.png".into(), "/b.png".into()];
        assert!(matches!(p.media(), ProjectMedia::Slideshow(images) if images.len() == 2));
    }

    #[test]
    fn test_link_label_uses_link_not_href() {
        let mut p = project();
        assert_eq!(p.link_label(), None);

        p.link = "https://www.mycv.example.com/".into();
        assert_eq!(p.link_label().as_deref(), Some("mycv.example.com"));
    }

    #[test]
    fn test_link_label_from_json() {
        let json = r#"{"title": "Site", "href": "https://github.com/x/site", "link": "https://x.dev/app"}"#;
        let p: Project = serde_json::from_str(json).unwrap();
        assert_eq!(p.link_label().as_deref(), Some("x.devapp"));
    }

    #[test]
    fn test_book_theme_skips_placeholders() {
        let theme = BookTheme {
            theme: "Leadership".into(),
            books: vec![
                Book { number: 1, title: "Atomic Habits".into(), author: "James Clear".into() },
                Book { number: 2, title: "".into(), author: "".into() },
                Book { number: 3, title: "  ".into(), author: ".".into() },
            ],
        };
        let listed = theme.listed();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].number, 1);
    }

    #[test]
    fn test_with_last_flag() {
        let stages = ["Chemist", "Sales", "DevOps"];
        let flags: Vec<_> = with_last_flag(&stages).map(|(_, last)| last).collect();
        assert_eq!(flags, vec![false, false, true]);
        assert_eq!(with_last_flag::<&str>(&[]).count(), 0);
    }

    #[test]
    fn test_site_data_minimal_json() {
        let json = r#"{"name": "Someone", "skills": ["Rust"]}"#;
        let data = SiteData::from_json(json).expect("読み込み失敗");
        assert_eq!(data.name, "Someone");
        assert!(data.projects.is_empty());
        assert!(data.travels.visited.is_empty());
    }

    #[test]
    fn test_site_data_rejects_unknown_country() {
        let json = r#"{"name": "Someone", "travels": {"visited": ["GBR"]}}"#;
        let result = SiteData::from_json(json);
        assert!(matches!(result, Err(Error::Content(msg)) if msg.contains("GBR")));
    }

    #[test]
    fn test_site_data_rejects_empty_name() {
        assert!(SiteData::from_json("{}").is_err());
    }

    #[test]
    fn test_project_deserialize() {
        let json = r#"{
            "title": "Multi-Cloud VM",
            "dates": "Jun 2025",
            "active": true,
            "technologies": ["Terraform"],
            "links": [{"type": "Source", "href": "https://github.com/x/y"}]
        }"#;
        let p: Project = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(p.active);
        assert_eq!(p.links[0].kind, "Source");
        assert_eq!(p.media(), ProjectMedia::None);
    }
}
