//! 技術スタック表示
//!
//! 通常はロゴを横スクロールで流し、ボタンでカテゴリ別の一覧に切り替える。

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechItem {
    pub name: String,
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechCategory {
    pub category: String,
    #[serde(default)]
    pub items: Vec<TechItem>,
}

/// 表示モード
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TechView {
    #[default]
    Marquee,
    Grid,
}

impl TechView {
    pub fn toggled(self) -> Self {
        match self {
            TechView::Marquee => TechView::Grid,
            TechView::Grid => TechView::Marquee,
        }
    }
}

/// 全カテゴリを平坦化
pub fn flatten(categories: &[TechCategory]) -> Vec<&TechItem> {
    categories.iter().flat_map(|c| c.items.iter()).collect()
}

/// 横スクロール用（継ぎ目なくループさせるため2周分）
pub fn marquee_items(categories: &[TechCategory]) -> Vec<&TechItem> {
    let flat = flatten(categories);
    flat.iter().chain(flat.iter()).copied().collect()
}
