//! 投稿フィルタ
//!
//! 検索文字列・カテゴリ・期間の3条件をANDで評価し、
//! 元の並び順を保ったまま表示対象を絞り込む。
//! 入出力もエラーもなく、該当なしは空のVecを返す。

use crate::types::ContentItem;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// 「絞り込みなし」を表すカテゴリ名
pub const ALL_CATEGORY: &str = "All";

/// カテゴリ選択
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Tag(String),
}

impl CategoryFilter {
    /// UIのボタンラベルから変換（"All" はセンチネル）
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORY {
            CategoryFilter::All
        } else {
            CategoryFilter::Tag(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORY,
            CategoryFilter::Tag(tag) => tag,
        }
    }

    pub fn matches(&self, item: &ContentItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Tag(tag) => item.has_tag(tag),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 期間（両端含む、日単位）
///
/// from > to でもエラーにはしない。結果が空になるだけ。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// 入力欄の文字列から生成。空文字・不正な日付は「境界なし」
    pub fn parse(from: &str, to: &str) -> Self {
        Self {
            from: parse_bound(from),
            to: parse_bound(to),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }

    pub fn matches(&self, item: &ContentItem) -> bool {
        self.contains(item.published_on())
    }
}

/// 日付境界のパース（`YYYY-MM-DD`、前後の空白は無視）
pub fn parse_bound(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// 期間プリセット
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatePreset {
    #[default]
    AllTime,
    Last30Days,
    Last7Days,
}

impl DatePreset {
    pub const ALL: [DatePreset; 3] = [DatePreset::AllTime, DatePreset::Last30Days, DatePreset::Last7Days];

    pub fn label(&self) -> &'static str {
        match self {
            DatePreset::AllTime => "All time",
            DatePreset::Last30Days => "Last 30 days",
            DatePreset::Last7Days => "Last 7 days",
        }
    }

    /// today を基準にした期間（下限のみ、両端含む）
    pub fn range(&self, today: NaiveDate) -> DateRange {
        match self {
            DatePreset::AllTime => DateRange::default(),
            DatePreset::Last30Days => DateRange::new(Some(today - Duration::days(30)), None),
            DatePreset::Last7Days => DateRange::new(Some(today - Duration::days(7)), None),
        }
    }
}

impl std::str::FromStr for DatePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" | "all-time" | "alltime" => Ok(DatePreset::AllTime),
            "30d" | "30" | "last-30-days" => Ok(DatePreset::Last30Days),
            "7d" | "7" | "last-7-days" => Ok(DatePreset::Last7Days),
            _ => Err(format!("Unknown preset: {}. Use all, 30d, or 7d", s)),
        }
    }
}

/// フィルタ条件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search: String,
    pub category: CategoryFilter,
    pub range: DateRange,
}

/// フィルタ条件の更新イベント
#[derive(Debug, Clone, PartialEq)]
pub enum FilterEvent {
    Search(String),
    SelectCategory(CategoryFilter),
    SetFrom(String),
    SetTo(String),
    ApplyPreset { preset: DatePreset, today: NaiveDate },
    Reset,
}

impl FilterState {
    /// 何も絞り込まない状態か
    pub fn is_noop(&self) -> bool {
        self.search.is_empty() && self.category == CategoryFilter::All && self.range.is_unbounded()
    }

    /// イベントを適用した新しい状態を返す
    pub fn apply(mut self, event: FilterEvent) -> Self {
        match event {
            FilterEvent::Search(search) => self.search = search,
            FilterEvent::SelectCategory(category) => self.category = category,
            FilterEvent::SetFrom(raw) => self.range.from = parse_bound(&raw),
            FilterEvent::SetTo(raw) => self.range.to = parse_bound(&raw),
            FilterEvent::ApplyPreset { preset, today } => self.range = preset.range(today),
            FilterEvent::Reset => return Self::default(),
        }
        self
    }

    /// 大文字小文字を無視してタイトルまたは概要に含まれるか
    pub fn matches_text(&self, item: &ContentItem) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        item.title.to_lowercase().contains(&needle) || item.summary.to_lowercase().contains(&needle)
    }

    pub fn matches(&self, item: &ContentItem) -> bool {
        self.matches_text(item) && self.category.matches(item) && self.range.matches(item)
    }
}

/// 表示対象を絞り込む（元の順序を維持）
pub fn filter_items<'a>(items: &'a [ContentItem], state: &FilterState) -> Vec<&'a ContentItem> {
    items.iter().filter(|item| state.matches(item)).collect()
}

/// 所有権付きで絞り込む（UI側のメモ化用）
pub fn filter_owned(items: &[ContentItem], state: &FilterState) -> Vec<ContentItem> {
    filter_items(items, state).into_iter().cloned().collect()
}

/// 選択可能なカテゴリ一覧
///
/// 先頭は必ず All。以降は全投稿のタグを出現順に重複なく並べる。
pub fn derive_categories(items: &[ContentItem]) -> Vec<CategoryFilter> {
    let mut seen = HashSet::new();
    let tags = items
        .iter()
        .flat_map(|item| item.tags.iter())
        .filter(|tag| seen.insert(tag.as_str()))
        .map(|tag| CategoryFilter::Tag(tag.clone()));

    std::iter::once(CategoryFilter::All).chain(tags).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::parse_timestamp;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn post(slug: &str, title: &str, summary: &str, published: &str, tags: &[&str]) -> ContentItem {
        ContentItem::new(slug, title, summary, parse_timestamp(published).unwrap())
            .with_tags(tags.iter().copied())
    }

    fn alpha_beta() -> Vec<ContentItem> {
        vec![
            post("alpha", "Alpha", "first", "2024-01-10", &["x"]),
            post("beta", "Beta", "second", "2024-02-01", &["y"]),
        ]
    }

    fn slugs(items: &[&ContentItem]) -> Vec<String> {
        items.iter().map(|i| i.slug.clone()).collect()
    }

    #[test]
    fn test_category_filter_scenario() {
        let items = alpha_beta();
        let state = FilterState {
            category: CategoryFilter::Tag("x".into()),
            ..Default::default()
        };
        assert_eq!(slugs(&filter_items(&items, &state)), vec!["alpha"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let items = alpha_beta();
        let state = FilterState::default().apply(FilterEvent::Search("alp".into()));
        assert_eq!(slugs(&filter_items(&items, &state)), vec!["alpha"]);

        let state = FilterState::default().apply(FilterEvent::Search("ALP".into()));
        assert_eq!(slugs(&filter_items(&items, &state)), vec!["alpha"]);
    }

    #[test]
    fn test_search_matches_summary() {
        let items = alpha_beta();
        let state = FilterState::default().apply(FilterEvent::Search("SECOND".into()));
        assert_eq!(slugs(&filter_items(&items, &state)), vec!["beta"]);
    }

    #[test]
    fn test_date_range_scenario() {
        let items = alpha_beta();
        let state = FilterState::default()
            .apply(FilterEvent::SetFrom("2024-01-15".into()))
            .apply(FilterEvent::SetTo("2024-02-15".into()));
        assert_eq!(slugs(&filter_items(&items, &state)), vec!["beta"]);
    }

    #[test]
    fn test_noop_filter_is_identity() {
        let items = vec![
            post("c", "Gamma", "", "2022-03-01", &[]),
            post("a", "Alpha", "", "2024-01-10", &["x"]),
            post("b", "Beta", "", "2023-02-01", &["y", "x"]),
        ];
        let state = FilterState::default();
        assert!(state.is_noop());

        let result = filter_owned(&items, &state);
        assert_eq!(result, items);
    }

    #[test]
    fn test_result_preserves_input_order() {
        let items = vec![
            post("z", "Rust z", "", "2021-01-01", &[]),
            post("m", "Go m", "", "2024-01-01", &[]),
            post("a", "Rust a", "", "2023-01-01", &[]),
            post("k", "rust k", "", "2022-01-01", &[]),
        ];
        let state = FilterState::default().apply(FilterEvent::Search("rust".into()));
        assert_eq!(slugs(&filter_items(&items, &state)), vec!["z", "a", "k"]);
    }

    #[test]
    fn test_untagged_never_matches_specific_category() {
        let items = vec![post("u", "Untagged", "", "2024-01-01", &[])];
        let state = FilterState::default().apply(FilterEvent::SelectCategory(CategoryFilter::Tag("x".into())));
        assert!(filter_items(&items, &state).is_empty());

        let all = FilterState::default().apply(FilterEvent::SelectCategory(CategoryFilter::All));
        assert_eq!(filter_items(&items, &all).len(), 1);
    }

    #[test]
    fn test_date_bounds_inclusive_at_day_granularity() {
        let items = vec![
            post("start", "Start", "", "2024-01-15T00:00:00", &[]),
            post("end", "End", "", "2024-02-15T23:59:59", &[]),
            post("before", "Before", "", "2024-01-14T23:59:59", &[]),
            post("after", "After", "", "2024-02-16T00:00:00", &[]),
        ];
        let state = FilterState {
            range: DateRange::new(Some(date("2024-01-15")), Some(date("2024-02-15"))),
            ..Default::default()
        };
        assert_eq!(slugs(&filter_items(&items, &state)), vec!["start", "end"]);
    }

    #[test]
    fn test_same_day_bounds() {
        let items = vec![post("noon", "Noon", "", "2024-03-03T12:00:00", &[])];
        let state = FilterState {
            range: DateRange::parse("2024-03-03", "2024-03-03"),
            ..Default::default()
        };
        assert_eq!(filter_items(&items, &state).len(), 1);
    }

    #[test]
    fn test_inverted_range_yields_empty() {
        let items = alpha_beta();
        let state = FilterState {
            range: DateRange::parse("2024-03-01", "2024-01-01"),
            ..Default::default()
        };
        assert!(filter_items(&items, &state).is_empty());
    }

    #[test]
    fn test_invalid_bounds_do_not_exclude() {
        let range = DateRange::parse("", "not a date");
        assert!(range.is_unbounded());

        let items = alpha_beta();
        let state = FilterState::default()
            .apply(FilterEvent::SetFrom("2024-99-99".into()))
            .apply(FilterEvent::SetTo("".into()));
        assert_eq!(filter_items(&items, &state).len(), 2);
    }

    #[test]
    fn test_open_ended_ranges() {
        let items = alpha_beta();
        let from_only = FilterState {
            range: DateRange::parse("2024-01-11", ""),
            ..Default::default()
        };
        assert_eq!(slugs(&filter_items(&items, &from_only)), vec!["beta"]);

        let to_only = FilterState {
            range: DateRange::parse("", "2024-01-10"),
            ..Default::default()
        };
        assert_eq!(slugs(&filter_items(&items, &to_only)), vec!["alpha"]);
    }

    #[test]
    fn test_predicates_are_conjunctive() {
        let items = vec![
            post("a", "Rust tips", "", "2024-01-10", &["rust"]),
            post("b", "Rust news", "", "2024-01-10", &["news"]),
            post("c", "Rust tips 2", "", "2023-01-10", &["rust"]),
        ];
        let state = FilterState {
            search: "rust".into(),
            category: CategoryFilter::Tag("rust".into()),
            range: DateRange::parse("2024-01-01", ""),
        };
        assert_eq!(slugs(&filter_items(&items, &state)), vec!["a"]);
    }

    #[test]
    fn test_derive_categories() {
        let items = vec![
            post("a", "A", "", "2024-01-01", &["rust", "web"]),
            post("b", "B", "", "2024-01-02", &[]),
            post("c", "C", "", "2024-01-03", &["web", "cloud", "rust"]),
        ];
        let categories = derive_categories(&items);
        let labels: Vec<_> = categories.iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["All", "rust", "web", "cloud"]);
    }

    #[test]
    fn test_derive_categories_empty_list() {
        assert_eq!(derive_categories(&[]), vec![CategoryFilter::All]);
    }

    #[test]
    fn test_derive_categories_no_duplicates() {
        let items = vec![
            post("a", "A", "", "2024-01-01", &["x", "x", "y"]),
            post("b", "B", "", "2024-01-02", &["y", "x"]),
        ];
        let categories = derive_categories(&items);
        let unique: HashSet<_> = categories.iter().collect();
        assert_eq!(unique.len(), categories.len());
        assert_eq!(categories[0], CategoryFilter::All);
    }

    #[test]
    fn test_category_label_roundtrip() {
        assert_eq!(CategoryFilter::from_label("All"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_label("rust"), CategoryFilter::Tag("rust".into()));
        assert_eq!(CategoryFilter::Tag("rust".into()).to_string(), "rust");
    }

    #[test]
    fn test_presets() {
        let today = date("2024-03-31");
        assert!(DatePreset::AllTime.range(today).is_unbounded());

        let last7 = DatePreset::Last7Days.range(today);
        assert_eq!(last7.from, Some(date("2024-03-24")));
        assert_eq!(last7.to, None);
        assert!(last7.contains(date("2024-03-24")));
        assert!(!last7.contains(date("2024-03-23")));

        let last30 = DatePreset::Last30Days.range(today);
        assert_eq!(last30.from, Some(date("2024-03-01")));
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!("7d".parse::<DatePreset>().unwrap(), DatePreset::Last7Days);
        assert_eq!("ALL".parse::<DatePreset>().unwrap(), DatePreset::AllTime);
        assert!("90d".parse::<DatePreset>().is_err());
    }

    #[test]
    fn test_apply_preset_and_reset() {
        let today = date("2024-02-10");
        let state = FilterState::default()
            .apply(FilterEvent::Search("beta".into()))
            .apply(FilterEvent::ApplyPreset { preset: DatePreset::Last30Days, today });
        assert_eq!(state.range.from, Some(date("2024-01-11")));
        assert!(!state.is_noop());

        let reset = state.apply(FilterEvent::Reset);
        assert!(reset.is_noop());
    }
}
