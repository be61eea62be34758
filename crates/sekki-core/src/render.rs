//! Plain-text rendering of shaped seasons.

use crate::models::{DetailLevel, SeasonView};

const CURRENT_MARKER: &str = " — NOW";

/// Text for a home-screen widget of the size matching `detail`.
///
/// - Minimal: the id
/// - Medium: id, then notes
/// - Full: kanji, id, then notes
///
/// Missing fields render as empty text.
pub fn widget_text(view: &SeasonView, detail: DetailLevel) -> String {
    let notes = view.notes.as_deref().unwrap_or("");

    match detail {
        DetailLevel::Minimal => view.id.clone(),
        DetailLevel::Medium => format!("{} \n{}", view.id, notes),
        DetailLevel::Full => format!("{} \n{} \n{}", view.kanji, view.id, notes),
    }
}

/// A card for the season listing: a kanji header (marked when current), the
/// id, then the description when present.
pub fn card_text(view: &SeasonView, current: bool) -> String {
    let mut lines = Vec::with_capacity(3);

    let marker = if current { CURRENT_MARKER } else { "" };
    lines.push(format!("{}{}", view.kanji, marker));
    lines.push(view.id.clone());

    if let Some(description) = view.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(description.to_string());
    }

    lines.join("\n")
}
