use std::borrow::Cow;
use std::path::Path;

use chrono::NaiveDate;
use sekki_core::tz::{parse_tz, today_in};
use sekki_core::{Catalog, DetailLevel, DisplayMode, parse_reference_date};
use tracing::debug;

use crate::error::{CliError, CliResult};

pub fn parse_detail(s: &str) -> CliResult<DetailLevel> {
    match s.to_lowercase().as_str() {
        "minimal" => Ok(DetailLevel::Minimal),
        "medium" => Ok(DetailLevel::Medium),
        "full" => Ok(DetailLevel::Full),
        _ => Err(CliError::input(format!(
            "Invalid detail '{}'. Expected: minimal, medium, full",
            s
        ))),
    }
}

pub fn parse_mode(s: &str) -> CliResult<DisplayMode> {
    match s.to_lowercase().as_str() {
        "widget" => Ok(DisplayMode::Widget),
        "app" => Ok(DisplayMode::App),
        _ => Err(CliError::input(format!(
            "Invalid mode '{}'. Expected: widget, app",
            s
        ))),
    }
}

/// The explicit `--date`, or today in `--tz` (system local without one).
pub fn reference_date(date: Option<&str>, tz: Option<&str>) -> CliResult<NaiveDate> {
    let tz = tz.map(parse_tz).transpose()?;

    match date {
        Some(input) => Ok(parse_reference_date(input)?),
        None => {
            let today = today_in(tz);
            debug!(%today, "No date given, using today");
            Ok(today)
        }
    }
}

/// The `--catalog` file, or the bundled catalog.
///
/// A missing or corrupt file degrades to an empty catalog.
pub fn load_catalog(path: Option<&str>) -> Cow<'static, Catalog> {
    match path {
        Some(path) => Cow::Owned(Catalog::load_or_empty(Path::new(path))),
        None => Cow::Borrowed(Catalog::bundled()),
    }
}
