//! Portfolio Common Library
//!
//! CLIとWeb(WASM)で共有される型とウィジェットのロジック

pub mod types;
pub mod error;
pub mod filter;
pub mod runner;
pub mod widgets;
pub mod tech;
pub mod travel;
pub mod site;

pub use types::{ContentItem, PostIndex, parse_timestamp};
pub use error::{Error, Result};
pub use filter::{
    CategoryFilter, DatePreset, DateRange, FilterEvent, FilterState,
    derive_categories, filter_items, filter_owned, ALL_CATEGORY,
};
pub use runner::{
    RunOutcome, RunRejected, RunnerCell, RunnerState, ScriptBuffer, ScriptEngine,
    ScriptFailure, ScriptRunner, execute,
};
pub use widgets::{Slideshow, back_to_top_visible, SLIDESHOW_INTERVAL_MS};
pub use tech::{TechCategory, TechItem, TechView};
pub use travel::{CountryInfo, RegionGroup, Travels};
pub use site::{Project, ProjectMedia, SiteData};
