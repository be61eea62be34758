//! Season resolution.
//!
//! Resolution picks the single active season for a reference date:
//! 1. Anchor every record's `MM-DD` start to the reference year, skipping
//!    records whose start cannot be anchored
//! 2. Walk the catalog in stored order, keeping the last record whose start
//!    is on or before the reference date
//! 3. Stop at a record starting exactly on the reference date
//! 4. If nothing qualified, fall back to the last record in the catalog
//!
//! Step 4 stands in for "the final season of the previous year is still
//! running". It does not compute previous-year dates, so it only gives the
//! true answer when the catalog is ordered by start date.

use chrono::{Datelike, Days, NaiveDate};
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{Result, SekkiError};
use crate::models::{DetailLevel, DisplayMode, ListedSeason, Resolution, SeasonRecord, SeasonView};
use crate::parse::season_start_in_year;

/// Find the active season for `date`.
///
/// Returns `None` only when the catalog is empty.
///
/// # Examples
///
/// ```
/// use sekki_core::catalog::Catalog;
/// use sekki_core::resolve::resolve_season;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
/// let season = resolve_season(Catalog::bundled(), date).unwrap();
///
/// assert_eq!(season.id, "Risshun");
/// ```
pub fn resolve_season(catalog: &Catalog, date: NaiveDate) -> Option<&SeasonRecord> {
    let year = date.year();
    let mut most_recent = None;

    for record in catalog.records() {
        let start = match season_start_in_year(record, year) {
            Ok(start) => start,
            Err(e) => {
                debug!(error = %e, "Skipping season");
                continue;
            }
        };

        if start <= date {
            most_recent = Some(record);
            if start == date {
                break;
            }
        }
    }

    most_recent.or_else(|| catalog.last())
}

/// Like [`resolve_season`], reporting an empty catalog as
/// [`SekkiError::EmptyCatalog`].
pub fn try_resolve_season(catalog: &Catalog, date: NaiveDate) -> Result<&SeasonRecord> {
    resolve_season(catalog, date).ok_or(SekkiError::EmptyCatalog)
}

/// Resolve and shape the active season for `date`.
///
/// An empty catalog yields the [`SeasonView::none`] sentinel rather than an
/// error.
pub fn resolve(
    catalog: &Catalog,
    date: NaiveDate,
    detail: DetailLevel,
    mode: DisplayMode,
) -> Resolution {
    let season = match try_resolve_season(catalog, date) {
        Ok(record) => shape(record, detail, mode),
        Err(e) => {
            debug!(error = %e, %date, "No season to resolve");
            SeasonView::none()
        }
    };

    Resolution {
        date,
        detail,
        season,
        next_checkpoint: next_checkpoint(date),
    }
}

/// The next date on which the caller should resolve again.
///
/// Always one calendar day later; transitions are picked up by resolving
/// daily rather than by computing the next start date.
pub fn next_checkpoint(date: NaiveDate) -> NaiveDate {
    date.checked_add_days(Days::new(1)).unwrap_or(NaiveDate::MAX)
}

/// Shape a record for output. Only omits fields.
pub fn shape(record: &SeasonRecord, detail: DetailLevel, mode: DisplayMode) -> SeasonView {
    let mut view = SeasonView {
        id: record.id.clone(),
        kanji: record.kanji.clone(),
        ..SeasonView::default()
    };

    match (detail, mode) {
        (DetailLevel::Minimal, _) => {}
        (DetailLevel::Medium, DisplayMode::Widget) => {
            view.notes = Some(record.notes.clone());
        }
        (DetailLevel::Medium, DisplayMode::App) => {
            view.title = record.title.clone();
        }
        (DetailLevel::Full, _) => {
            view.title = record.title.clone();
            view.notes = Some(record.notes.clone());
            view.description = Some(record.description.clone());
        }
    }

    view
}

/// Every season in catalog order, with the active one flagged.
///
/// Seasons are matched to the active one by `id`.
pub fn list_seasons(
    catalog: &Catalog,
    date: NaiveDate,
    detail: DetailLevel,
    mode: DisplayMode,
) -> Vec<ListedSeason> {
    let current_id = resolve_season(catalog, date).map(|record| record.id.as_str());

    catalog
        .records()
        .iter()
        .map(|record| ListedSeason {
            start_date: record.start_date.clone(),
            current: current_id == Some(record.id.as_str()),
            season: shape(record, detail, mode),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn record(id: &str, start: &str) -> SeasonRecord {
        SeasonRecord {
            id: id.to_string(),
            kanji: format!("{id}-kanji"),
            title: Some(format!("{id} title")),
            notes: format!("{id} notes"),
            description: format!("{id} description"),
            start_date: start.to_string(),
        }
    }

    fn catalog(entries: &[(&str, &str)]) -> Catalog {
        Catalog::new(entries.iter().map(|(id, start)| record(id, start)).collect())
    }

    /// A..X starting with "A" on 02-04 and ending with "X" on 01-05.
    fn scenario_catalog() -> Catalog {
        let starts = [
            "02-04", "03-05", "03-20", "04-04", "04-20", "05-05", "05-21", "06-05", "06-21",
            "07-07", "07-22", "08-07", "08-23", "09-07", "09-22", "10-08", "10-23", "11-07",
            "11-22", "12-07", "12-21", "12-25", "12-28", "01-05",
        ];
        let ids: Vec<String> = (b'A'..=b'X').map(|c| (c as char).to_string()).collect();
        Catalog::new(
            ids.iter()
                .zip(starts)
                .map(|(id, start)| record(id, start))
                .collect(),
        )
    }

    #[test]
    fn picks_most_recent_start() {
        let catalog = Catalog::bundled();

        assert_eq!(resolve_season(catalog, ymd(2024, 2, 10)).unwrap().id, "Risshun");
        assert_eq!(resolve_season(catalog, ymd(2024, 6, 20)).unwrap().id, "Bōshu");
        assert_eq!(resolve_season(catalog, ymd(2024, 12, 31)).unwrap().id, "Tōji");
    }

    #[test]
    fn exact_start_selects_that_season() {
        let catalog = Catalog::bundled();

        assert_eq!(resolve_season(catalog, ymd(2024, 2, 4)).unwrap().id, "Risshun");
        assert_eq!(resolve_season(catalog, ymd(2024, 2, 3)).unwrap().id, "Daikan");
        assert_eq!(resolve_season(catalog, ymd(2025, 1, 5)).unwrap().id, "Shōkan");
    }

    #[test]
    fn before_first_start_wraps_to_last_record() {
        let catalog = Catalog::bundled();

        assert_eq!(resolve_season(catalog, ymd(2024, 1, 1)).unwrap().id, "Tōji");
        assert_eq!(resolve_season(catalog, ymd(2025, 1, 4)).unwrap().id, "Tōji");
    }

    #[test]
    fn scenario_exact_match_and_wrap_around() {
        let catalog = scenario_catalog();
        assert_eq!(catalog.len(), 24);

        assert_eq!(resolve_season(&catalog, ymd(2024, 2, 4)).unwrap().id, "A");
        assert_eq!(resolve_season(&catalog, ymd(2024, 1, 1)).unwrap().id, "X");
    }

    #[test]
    fn later_qualifying_record_wins() {
        // X starts 01-05, which is also on or before 02-10, and is stored last.
        let catalog = scenario_catalog();
        assert_eq!(resolve_season(&catalog, ymd(2024, 2, 10)).unwrap().id, "X");

        let catalog = catalog_with_a_only_reachable();
        assert_eq!(resolve_season(&catalog, ymd(2024, 2, 10)).unwrap().id, "A");
    }

    fn catalog_with_a_only_reachable() -> Catalog {
        catalog(&[("A", "02-04"), ("B", "03-05"), ("C", "06-21")])
    }

    #[test]
    fn exact_match_stops_the_scan() {
        // Both start on or before 03-01, but the scan stops at the exact match.
        let catalog = catalog(&[("Late", "03-01"), ("Early", "01-01")]);
        assert_eq!(resolve_season(&catalog, ymd(2024, 3, 1)).unwrap().id, "Late");
        assert_eq!(resolve_season(&catalog, ymd(2024, 3, 2)).unwrap().id, "Early");
    }

    #[test]
    fn malformed_entry_is_skipped() {
        let catalog = catalog(&[("A", "01-05"), ("B", "02-xx"), ("C", "03-05")]);

        assert_eq!(resolve_season(&catalog, ymd(2024, 2, 10)).unwrap().id, "A");
        assert_eq!(resolve_season(&catalog, ymd(2024, 3, 10)).unwrap().id, "C");
    }

    #[test]
    fn malformed_last_entry_still_serves_as_fallback() {
        let catalog = catalog(&[("A", "03-05"), ("B", "bogus")]);
        assert_eq!(resolve_season(&catalog, ymd(2024, 1, 1)).unwrap().id, "B");
    }

    #[test]
    fn leap_day_start_is_skipped_in_common_years() {
        let catalog = catalog(&[("A", "01-05"), ("Leap", "02-29")]);

        assert_eq!(resolve_season(&catalog, ymd(2024, 3, 1)).unwrap().id, "Leap");
        assert_eq!(resolve_season(&catalog, ymd(2023, 3, 1)).unwrap().id, "A");
    }

    #[test]
    fn five_digit_years_resolve_like_any_other() {
        let catalog = Catalog::bundled();

        assert_eq!(resolve_season(catalog, ymd(12345, 2, 10)).unwrap().id, "Risshun");
        assert_eq!(resolve_season(catalog, ymd(99999, 7, 22)).unwrap().id, "Taisho");
        assert_eq!(resolve_season(catalog, ymd(-44, 2, 10)).unwrap().id, "Risshun");
        assert_eq!(resolve_season(catalog, ymd(12345, 1, 1)).unwrap().id, "Tōji");
    }

    #[test]
    fn empty_catalog_resolves_to_sentinel() {
        let catalog = Catalog::empty();
        let date = ymd(2024, 2, 10);

        assert!(resolve_season(&catalog, date).is_none());
        assert!(matches!(
            try_resolve_season(&catalog, date),
            Err(SekkiError::EmptyCatalog)
        ));

        let resolution = resolve(&catalog, date, DetailLevel::Full, DisplayMode::Widget);
        assert!(resolution.season.is_none());
        assert_eq!(resolution.season, SeasonView::none());
        assert_eq!(resolution.next_checkpoint, ymd(2024, 2, 11));
    }

    #[test]
    fn every_day_of_a_leap_year_resolves() {
        let catalog = Catalog::bundled();
        let mut date = ymd(2024, 1, 1);

        while date.year() == 2024 {
            assert!(resolve_season(catalog, date).is_some(), "no season for {date}");
            date = next_checkpoint(date);
        }
    }

    #[test]
    fn resolution_is_idempotent() {
        let catalog = Catalog::bundled();
        let date = ymd(2024, 8, 23);

        let first = resolve(catalog, date, DetailLevel::Full, DisplayMode::App);
        let second = resolve(catalog, date, DetailLevel::Full, DisplayMode::App);
        assert_eq!(first, second);
    }

    #[test]
    fn detail_level_does_not_change_selection() {
        let catalog = Catalog::bundled();
        let date = ymd(2024, 11, 30);

        for mode in [DisplayMode::Widget, DisplayMode::App] {
            let views: Vec<_> = [DetailLevel::Minimal, DetailLevel::Medium, DetailLevel::Full]
                .into_iter()
                .map(|detail| resolve(catalog, date, detail, mode).season)
                .collect();

            for view in &views {
                assert_eq!(view.id, "Shōsetsu");
                assert_eq!(view.kanji, "小雪");
            }
        }
    }

    #[test]
    fn shape_minimal() {
        let view = shape(&record("A", "01-01"), DetailLevel::Minimal, DisplayMode::Widget);
        assert_eq!(view.id, "A");
        assert_eq!(view.kanji, "A-kanji");
        assert_eq!(view.title, None);
        assert_eq!(view.notes, None);
        assert_eq!(view.description, None);
    }

    #[test]
    fn shape_medium_depends_on_display_mode() {
        let record = record("A", "01-01");

        let widget = shape(&record, DetailLevel::Medium, DisplayMode::Widget);
        assert_eq!(widget.notes.as_deref(), Some("A notes"));
        assert_eq!(widget.title, None);
        assert_eq!(widget.description, None);

        let app = shape(&record, DetailLevel::Medium, DisplayMode::App);
        assert_eq!(app.title.as_deref(), Some("A title"));
        assert_eq!(app.notes, None);
        assert_eq!(app.description, None);
    }

    #[test]
    fn shape_full_keeps_empty_text() {
        let mut record = record("A", "01-01");
        record.notes.clear();
        record.title = None;

        let view = shape(&record, DetailLevel::Full, DisplayMode::Widget);
        assert_eq!(view.notes.as_deref(), Some(""));
        assert_eq!(view.title, None);
        assert_eq!(view.description.as_deref(), Some("A description"));
    }

    #[test]
    fn next_checkpoint_is_one_day_later() {
        assert_eq!(next_checkpoint(ymd(2024, 2, 28)), ymd(2024, 2, 29));
        assert_eq!(next_checkpoint(ymd(2023, 2, 28)), ymd(2023, 3, 1));
        assert_eq!(next_checkpoint(ymd(2024, 12, 31)), ymd(2025, 1, 1));
        assert_eq!(next_checkpoint(NaiveDate::MAX), NaiveDate::MAX);
    }

    #[test]
    fn list_flags_only_the_current_season() {
        let listed = list_seasons(
            Catalog::bundled(),
            ymd(2024, 2, 10),
            DetailLevel::Minimal,
            DisplayMode::App,
        );

        assert_eq!(listed.len(), 24);
        let current: Vec<_> = listed.iter().filter(|s| s.current).collect();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].season.id, "Risshun");
        assert_eq!(current[0].start_date, "02-04");
    }

    #[test]
    fn list_of_empty_catalog_is_empty() {
        let listed = list_seasons(
            &Catalog::empty(),
            ymd(2024, 2, 10),
            DetailLevel::Full,
            DisplayMode::App,
        );
        assert!(listed.is_empty());
    }

    #[test]
    fn concurrent_resolution_shares_the_catalog() {
        let catalog = Catalog::bundled();
        let date = ymd(2024, 7, 22);

        let ids: Vec<String> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| resolve_season(catalog, date).map(|r| r.id.clone())))
                .collect();
            handles
                .into_iter()
                .filter_map(|h| h.join().ok().flatten())
                .collect()
        });

        assert_eq!(ids, vec!["Taisho"; 4]);
    }
}
