//! コンテンツの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - ContentItem: 投稿1件（読み込み時に生成され、以後は変更しない）
//! - PostIndex: posts.json の中身（新しい順に並んだ投稿一覧）

use crate::error::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 投稿1件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub slug: String,
    pub title: String,

    #[serde(default)]
    pub summary: String,

    /// 公開日時（日付のみの場合は 00:00:00）
    #[serde(with = "timestamp")]
    pub published_at: NaiveDateTime,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl ContentItem {
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        summary: impl Into<String>,
        published_at: NaiveDateTime,
    ) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            summary: summary.into(),
            published_at,
            tags: Vec::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// 公開日（日単位の比較用）
    pub fn published_on(&self) -> NaiveDate {
        self.published_at.date()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// 表示用タグ（重複除去、出現順）
    pub fn display_tags(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.tags
            .iter()
            .map(String::as_str)
            .filter(|t| seen.insert(*t))
            .collect()
    }

    /// 表示用日付（例: "January 10, 2024"）
    pub fn display_date(&self) -> String {
        self.published_at.format("%B %-d, %Y").to_string()
    }
}

/// 公開日時文字列をパース
///
/// 受け付ける形式:
/// - `2024-01-10`
/// - `2024-01-10T09:30:00` / `2024-01-10 09:30:00`
/// - RFC3339（`2024-01-10T09:30:00Z`, `+09:00` 等）。日付は書いた側のローカル日付を採用
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }

    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// 公開日時を文字列化（時刻が 00:00:00 なら日付のみ）
pub fn format_timestamp(value: &NaiveDateTime) -> String {
    if value.time().num_seconds_from_midnight() == 0 {
        value.format("%Y-%m-%d").to_string()
    } else {
        value.format("%Y-%m-%dT%H:%M:%S").to_string()
    }
}

mod timestamp {
    use chrono::NaiveDateTime;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_timestamp(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid publishedAt: {}", raw)))
    }
}

/// posts.json の中身
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostIndex {
    pub posts: Vec<ContentItem>,
}

impl PostIndex {
    /// slugの重複を検査して生成
    pub fn new(posts: Vec<ContentItem>) -> Result<Self> {
        let mut seen = HashSet::new();
        for post in &posts {
            if post.slug.trim().is_empty() {
                return Err(Error::Content(format!("empty slug: {}", post.title)));
            }
            if !seen.insert(post.slug.as_str()) {
                return Err(Error::Content(format!("duplicate slug: {}", post.slug)));
            }
        }
        Ok(Self { posts })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let index: PostIndex = serde_json::from_str(json)?;
        Self::new(index.posts)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 新しい順に並べ替え（同日時は元の順序を維持）
    pub fn sort_newest_first(&mut self) {
        self.posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(slug: &str, date: &str) -> ContentItem {
        ContentItem::new(slug, slug.to_uppercase(), "", parse_timestamp(date).unwrap())
    }

    #[test]
    fn test_parse_timestamp_date_only() {
        let ts = parse_timestamp("2024-01-10").expect("パース失敗");
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        assert_eq!(ts.time().num_seconds_from_midnight(), 0);
    }

    #[test]
    fn test_parse_timestamp_variants() {
        assert!(parse_timestamp("2024-01-10T09:30:00").is_some());
        assert!(parse_timestamp("2024-01-10 09:30:00").is_some());
        assert!(parse_timestamp("2024-01-10T09:30").is_some());

        // オフセット付きはローカル日付を採用
        let ts = parse_timestamp("2024-01-10T23:30:00-05:00").unwrap();
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
    }

    #[test]
    fn test_parse_timestamp_invalid() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("   ").is_none());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("2024-13-40").is_none());
    }

    #[test]
    fn test_content_item_deserialize() {
        let json = r#"{
            "slug": "hello-world",
            "title": "Hello World",
            "summary": "First post",
            "publishedAt": "2024-06-01",
            "tags": ["rust", "web"]
        }"#;

        let item: ContentItem = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(item.slug, "hello-world");
        assert_eq!(item.published_on(), NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert!(item.has_tag("rust"));
        assert!(!item.has_tag("Rust"));
    }

    #[test]
    fn test_content_item_deserialize_missing_optional_fields() {
        let json = r#"{"slug": "a", "title": "A", "publishedAt": "2024-06-01T10:00:00"}"#;

        let item: ContentItem = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(item.summary, "");
        assert!(item.tags.is_empty());
    }

    #[test]
    fn test_content_item_rejects_bad_date() {
        let json = r#"{"slug": "a", "title": "A", "publishedAt": "someday"}"#;
        let result = serde_json::from_str::<ContentItem>(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_content_item_serialize_camel_case() {
        let item = item("a", "2024-06-01").with_tags(["x"]);
        let json = serde_json::to_string(&item).expect("シリアライズ失敗");
        assert!(json.contains("\"publishedAt\":\"2024-06-01\""));
        assert!(json.contains("\"tags\":[\"x\"]"));

        let untagged = serde_json::to_string(&self::item("b", "2024-06-01T08:15:00")).unwrap();
        assert!(!untagged.contains("tags"));
        assert!(untagged.contains("2024-06-01T08:15:00"));
    }

    #[test]
    fn test_display_tags_dedup() {
        let item = item("a", "2024-01-01").with_tags(["rust", "web", "rust", "cli", "web"]);
        assert_eq!(item.display_tags(), vec!["rust", "web", "cli"]);
    }

    #[test]
    fn test_display_date() {
        assert_eq!(item("a", "2024-01-05").display_date(), "January 5, 2024");
    }

    #[test]
    fn test_post_index_duplicate_slug() {
        let result = PostIndex::new(vec![item("a", "2024-01-01"), item("a", "2024-02-01")]);
        assert!(matches!(result, Err(Error::Content(msg)) if msg.contains("duplicate slug")));
    }

    #[test]
    fn test_post_index_sort_newest_first_is_stable() {
        let mut index = PostIndex::new(vec![
            item("old", "2023-05-01"),
            item("same-1", "2024-01-01"),
            item("new", "2024-03-01"),
            item("same-2", "2024-01-01"),
        ])
        .unwrap();

        index.sort_newest_first();
        let slugs: Vec<_> = index.posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["new", "same-1", "same-2", "old"]);
    }

    #[test]
    fn test_post_index_from_json() {
        let json = r#"{"posts": [
            {"slug": "b", "title": "Beta", "publishedAt": "2024-02-01"},
            {"slug": "a", "title": "Alpha", "publishedAt": "2024-01-10", "tags": ["x"]}
        ]}"#;

        let index = PostIndex::from_json(json).expect("読み込み失敗");
        assert_eq!(index.len(), 2);
        assert_eq!(index.posts[1].tags, vec!["x"]);
    }
}
