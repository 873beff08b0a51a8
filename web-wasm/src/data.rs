//! 静的データの読み込み
//!
//! data/ 以下のJSONをビルド時に埋め込む。壊れていればコンソールに出して空データで続行。

use portfolio_common::{ContentItem, PostIndex, SiteData};

const SITE_JSON: &str = include_str!("../../data/site.json");
const POSTS_JSON: &str = include_str!("../../data/posts.json");

pub fn site_data() -> SiteData {
    SiteData::from_json(SITE_JSON).unwrap_or_else(|e| {
        gloo::console::error!(format!("site.json の読み込みに失敗: {}", e));
        SiteData::default()
    })
}

pub fn posts() -> Vec<ContentItem> {
    PostIndex::from_json(POSTS_JSON)
        .map(|index| index.posts)
        .unwrap_or_else(|e| {
            gloo::console::error!(format!("posts.json の読み込みに失敗: {}", e));
            Vec::new()
        })
}
