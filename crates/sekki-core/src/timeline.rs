//! Widget refresh timelines.
//!
//! A widget host asks for a timeline, shows its entries, and asks again once
//! `refresh_after` is reached. Each timeline carries a single entry for the
//! requested day.

use chrono::NaiveDate;

use crate::catalog::Catalog;
use crate::models::{DetailLevel, DisplayMode, SeasonView, Timeline, TimelineEntry};
use crate::resolve::{next_checkpoint, resolve};

/// Id shown while the real season is still being resolved.
pub const PLACEHOLDER_ID: &str = "Loading";

/// Build the timeline for `date`: one full-detail entry, refreshed the next
/// day.
pub fn timeline(catalog: &Catalog, date: NaiveDate) -> Timeline {
    Timeline {
        entries: vec![snapshot(catalog, date)],
        refresh_after: next_checkpoint(date),
    }
}

/// A single full-detail entry for `date`.
pub fn snapshot(catalog: &Catalog, date: NaiveDate) -> TimelineEntry {
    let resolution = resolve(catalog, date, DetailLevel::Full, DisplayMode::Widget);
    TimelineEntry {
        date,
        season: resolution.season,
    }
}

/// An entry to show before any data is available.
pub fn placeholder(date: NaiveDate) -> TimelineEntry {
    TimelineEntry {
        date,
        season: SeasonView {
            id: PLACEHOLDER_ID.to_string(),
            ..SeasonView::default()
        },
    }
}
