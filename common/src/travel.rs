//! 訪問国マップのデータ
//!
//! 訪問国コード（ISO 3166-1 alpha-3）と国名・地域の表は
//! site.json から読み込み、コンポーネントに渡す。

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

const OTHER_REGION: &str = "Other";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryInfo {
    pub name: String,
    #[serde(default)]
    pub region: String,
}

/// 訪問国の設定
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Travels {
    /// 訪問国コード（表示順）
    #[serde(default)]
    pub visited: Vec<String>,

    /// コード → 国情報
    #[serde(default)]
    pub countries: BTreeMap<String, CountryInfo>,
}

/// 地域ごとの訪問国名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionGroup {
    pub region: String,
    pub countries: Vec<String>,
}

impl Travels {
    pub fn is_visited(&self, code: &str) -> bool {
        self.visited.iter().any(|c| c.eq_ignore_ascii_case(code))
    }

    pub fn country(&self, code: &str) -> Option<&CountryInfo> {
        self.countries.get(&code.to_ascii_uppercase())
    }

    /// 訪問国を地域ごとにまとめる（地域・国とも初出順、表にないコードは除外）
    pub fn by_region(&self) -> Vec<RegionGroup> {
        let mut groups: Vec<RegionGroup> = Vec::new();
        let mut seen = HashSet::new();

        for code in &self.visited {
            if !seen.insert(code.to_ascii_uppercase()) {
                continue;
            }
            let Some(info) = self.country(code) else {
                continue;
            };
            let region = if info.region.trim().is_empty() {
                OTHER_REGION
            } else {
                info.region.as_str()
            };

            match groups.iter_mut().find(|g| g.region == region) {
                Some(group) => group.countries.push(info.name.clone()),
                None => groups.push(RegionGroup {
                    region: region.to_string(),
                    countries: vec![info.name.clone()],
                }),
            }
        }

        groups
    }

    /// 表に載っていない訪問国コード
    pub fn unknown_codes(&self) -> Vec<&str> {
        self.visited
            .iter()
            .filter(|code| self.country(code).is_none())
            .map(String::as_str)
            .collect()
    }
}
