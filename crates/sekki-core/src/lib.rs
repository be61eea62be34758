//! # sekki-core
//!
//! Find the current sekki, one of the 24 traditional East-Asian
//! micro-seasons, for a calendar date.
//!
//! Each season starts on a fixed month and day every year. Given an ordered
//! catalog of the 24 seasons and a reference date, this library picks the
//! season in effect and tells the caller when to ask again.
//!
//! ## Features
//!
//! - **Bundled Catalog**: The 24 seasons ship inside the library and are
//!   parsed once per process.
//! - **Never Fails**: A corrupt dataset degrades to an empty catalog, a bad
//!   start date skips one season, and an empty catalog resolves to a blank
//!   sentinel.
//! - **Detail Levels**: Minimal, medium and full output, shaped for a widget
//!   or an app view, without affecting which season is chosen.
//! - **Daily Refresh**: The next checkpoint is always the following day.
//!
//! ## Example
//!
//! ```rust
//! use sekki_core::prelude::*;
//!
//! let date = parse_reference_date("2024-02-10").unwrap();
//! let resolution = resolve(Catalog::bundled(), date, DetailLevel::Full, DisplayMode::Widget);
//!
//! println!("{} ({})", resolution.season.id, resolution.season.kanji);
//! println!("Check again on {}", resolution.next_checkpoint);
//! ```

pub mod catalog;
pub mod error;
pub mod models;
pub mod parse;
pub mod render;
pub mod resolve;
pub mod timeline;
pub mod tz;

// Re-export commonly used types at the crate root
pub use catalog::{Catalog, SEKKI_COUNT};
pub use error::{Result, SekkiError};
pub use models::{
    DetailLevel, DisplayMode, ListedSeason, Resolution, SeasonRecord, SeasonView, SeasonsData,
    Timeline, TimelineEntry,
};
pub use parse::parse_reference_date;
pub use resolve::{list_seasons, next_checkpoint, resolve, resolve_season, try_resolve_season};

/// Prelude module for convenient imports.
///
/// ```
/// use sekki_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::catalog::Catalog;
    pub use crate::error::{Result, SekkiError};
    pub use crate::models::*;
    pub use crate::parse::parse_reference_date;
    pub use crate::render::{card_text, widget_text};
    pub use crate::resolve::{list_seasons, next_checkpoint, resolve, resolve_season};
    pub use crate::timeline::{placeholder, timeline};
    pub use crate::tz::{parse_tz, today_in};
}
