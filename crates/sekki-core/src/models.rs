//! Core data types for sekki.
//!
//! This module defines the primary types used throughout the library:
//! - [`SeasonRecord`] - One season as stored in the dataset
//! - [`SeasonsData`] - The dataset document wrapping the ordered records
//! - [`DetailLevel`] - How much of a season to expose
//! - [`DisplayMode`] - Which surface is asking (widget or app)
//! - [`SeasonView`] - A season shaped for output
//! - [`Resolution`] - Complete result of a resolution query
//! - [`ListedSeason`] - One row of the full season listing
//! - [`Timeline`] / [`TimelineEntry`] - Widget-style refresh timeline

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One of the 24 seasons, exactly as it appears in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonRecord {
    /// Short display name (e.g. "Risshun").
    pub id: String,
    /// Ideographic label (e.g. "立春").
    pub kanji: String,
    /// Alternate short label, only present in newer datasets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Short supplementary text. May be empty.
    pub notes: String,
    /// Long-form text. May be empty.
    pub description: String,
    /// Annual start as a month-day string, `MM-DD`.
    pub start_date: String,
}

/// The dataset document: a single `sekki` array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonsData {
    pub sekki: Vec<SeasonRecord>,
}

/// Amount of descriptive data returned for a resolved season.
///
/// The detail level only omits fields; it never changes which season
/// is selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailLevel {
    /// Id and kanji only.
    Minimal,
    /// Adds notes (widget) or title (app).
    Medium,
    /// Everything the record carries.
    #[default]
    Full,
}

impl std::fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetailLevel::Minimal => write!(f, "minimal"),
            DetailLevel::Medium => write!(f, "medium"),
            DetailLevel::Full => write!(f, "full"),
        }
    }
}

/// The surface a season is being shaped for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Home-screen widget: medium detail carries the notes.
    #[default]
    Widget,
    /// Full app view: medium detail carries the title.
    App,
}

impl std::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayMode::Widget => write!(f, "widget"),
            DisplayMode::App => write!(f, "app"),
        }
    }
}

/// A season shaped for output at some detail level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeasonView {
    pub id: String,
    pub kanji: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SeasonView {
    /// The "no season" sentinel: empty identifiers, no optional fields.
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns `true` for the "no season" sentinel.
    pub fn is_none(&self) -> bool {
        self.id.is_empty() && self.kanji.is_empty()
    }
}

/// Complete result of resolving the season for one reference date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// The reference date that was resolved.
    pub date: NaiveDate,
    /// The detail level used for shaping.
    pub detail: DetailLevel,
    /// The active season, or the sentinel for an empty catalog.
    pub season: SeasonView,
    /// When the caller should resolve again.
    pub next_checkpoint: NaiveDate,
}

/// One season in the full listing, flagged when it is the active one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedSeason {
    pub start_date: String,
    pub current: bool,
    #[serde(flatten)]
    pub season: SeasonView,
}

/// A single widget timeline entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub date: NaiveDate,
    pub season: SeasonView,
}

/// A widget timeline: the entries to show and when to ask again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    pub entries: Vec<TimelineEntry>,
    pub refresh_after: NaiveDate,
}
