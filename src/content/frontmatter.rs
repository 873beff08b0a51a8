//! Markdown投稿のフロントマター解析
//!
//! ```text
//! ---
//! title: "Hello"
//! publishedAt: "2024-01-10"
//! summary: "First post"
//! tags:
//!   - rust
//!   - web
//! ---
//! 本文...
//! ```
//!
//! `---` の間はYAMLとして読む。知らないキーは無視する。

use portfolio_common::{parse_timestamp, ContentItem};
use serde::Deserialize;

/// tags はリストでもカンマ区切りの文字列でもよい
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Tags {
    List(Vec<String>),
    Joined(String),
}

impl Tags {
    fn into_vec(self) -> Vec<String> {
        let tags = match self {
            Tags::List(tags) => tags,
            Tags::Joined(joined) => joined.split(',').map(str::to_string).collect(),
        };
        tags.into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect()
    }
}

/// フロントマターの各フィールドと本文
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontMatter {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub tags: Option<Tags>,
    #[serde(skip)]
    pub body: String,
}

/// `---` で囲まれたブロックを切り出してYAMLとして読む
pub fn split(text: &str) -> Result<FrontMatter, String> {
    let text = text.trim_start_matches('\u{feff}');
    let mut lines = text.lines();

    match lines.next() {
        Some(first) if first.trim_end() == "---" => {}
        _ => return Err("先頭に --- がありません".into()),
    }

    let mut block = Vec::new();
    let mut closed = false;
    for line in lines.by_ref() {
        if line.trim_end() == "---" {
            closed = true;
            break;
        }
        block.push(line);
    }

    if !closed {
        return Err("閉じる --- がありません".into());
    }

    let block = block.join("\n");
    let mut fm = if block.trim().is_empty() {
        FrontMatter::default()
    } else {
        serde_yaml::from_str::<FrontMatter>(&block).map_err(|e| format!("YAMLが不正: {}", e))?
    };
    fm.body = lines.collect::<Vec<_>>().join("\n");
    Ok(fm)
}

impl FrontMatter {
    /// ContentItem に変換（slug はファイル名から）
    pub fn into_item(self, slug: &str) -> Result<ContentItem, String> {
        let title = self
            .title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or("title がありません")?;

        let raw_date = self.published_at.ok_or("publishedAt がありません")?;
        let published_at =
            parse_timestamp(&raw_date).ok_or_else(|| format!("publishedAt が不正: {}", raw_date))?;

        let summary = self.summary.unwrap_or_default();
        let tags = self.tags.map(Tags::into_vec).unwrap_or_default();

        Ok(ContentItem::new(slug, title, summary, published_at).with_tags(tags))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POST: &str = "---\ntitle: \"Hello: World\"\npublishedAt: '2024-01-10'\nsummary: First post\ntags: [\"rust\", 'web', cli]\n---\n# Heading\n\nBody text";

    #[test]
    fn test_split_and_convert() {
        let fm = split(POST).expect("解析失敗");
        assert_eq!(fm.body, "# Heading\n\nBody text");

        let item = fm.into_item("hello-world").expect("変換失敗");
        assert_eq!(item.slug, "hello-world");
        assert_eq!(item.title, "Hello: World");
        assert_eq!(item.summary, "First post");
        assert_eq!(item.tags, vec!["rust", "web", "cli"]);
        assert_eq!(item.published_at.format("%Y-%m-%d").to_string(), "2024-01-10");
    }

    #[test]
    fn test_block_list_tags() {
        let text = "---\ntitle: Hello\npublishedAt: 2024-01-10\ntags:\n  - rust\n  - web\n---\nbody";
        let item = split(text).expect("解析失敗").into_item("hello").expect("変換失敗");
        assert_eq!(item.title, "Hello");
        assert_eq!(item.tags, vec!["rust", "web"]);
    }

    #[test]
    fn test_trailing_comment_is_ignored() {
        let text = "---\ntitle: Hello # draft\npublishedAt: 2024-01-10 # moved\n---\n";
        let item = split(text).expect("解析失敗").into_item("hello").expect("変換失敗");
        assert_eq!(item.title, "Hello");
        assert_eq!(item.published_at.format("%Y-%m-%d").to_string(), "2024-01-10");
    }

    #[test]
    fn test_comma_separated_tags() {
        let text = "---\ntitle: X\npublishedAt: 2024-01-01\ntags: a, b ,, c\n---\n";
        let item = split(text).unwrap().into_item("x").unwrap();
        assert_eq!(item.tags, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unknown_keys_and_multiline_summary() {
        let text = "---\ntitle: X\ndraft: true\nimage: /cover.png\npublishedAt: 2024-01-01\nsummary: >\n  first line\n  second line\n---\n";
        let item = split(text).unwrap().into_item("x").unwrap();
        assert_eq!(item.summary.trim_end(), "first line second line");
    }

    #[test]
    fn test_empty_tag_list() {
        let text = "---\ntitle: X\npublishedAt: 2024-01-01\ntags: []\n---\n";
        assert!(split(text).unwrap().into_item("x").unwrap().tags.is_empty());
    }

    #[test]
    fn test_invalid_yaml() {
        let err = split("---\ntitle: [unclosed\n---\n").unwrap_err();
        assert!(err.contains("YAML"));
    }

    #[test]
    fn test_missing_opening_delimiter() {
        assert!(split("title: x\n---\n").is_err());
    }

    #[test]
    fn test_missing_closing_delimiter() {
        assert!(split("---\ntitle: x\n").is_err());
    }

    #[test]
    fn test_missing_title() {
        let fm = split("---\npublishedAt: 2024-01-01\n---\n").unwrap();
        assert!(fm.into_item("x").unwrap_err().contains("title"));
    }

    #[test]
    fn test_bad_date() {
        let fm = split("---\ntitle: X\npublishedAt: soon\n---\n").unwrap();
        assert!(fm.into_item("x").unwrap_err().contains("publishedAt"));
    }

    #[test]
    fn test_untagged_post() {
        let fm = split("---\ntitle: X\npublishedAt: 2024-01-01T10:00:00\n---\n").unwrap();
        let item = fm.into_item("x").unwrap();
        assert!(item.tags.is_empty());
        assert_eq!(item.summary, "");
    }
}
