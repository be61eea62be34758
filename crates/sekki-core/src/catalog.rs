//! The season catalog.
//!
//! The catalog is the ordered list of season records parsed from a
//! `{ "sekki": [...] }` JSON document. The default dataset is compiled into
//! the binary; callers may also load a file with the same schema.
//!
//! Loading never re-sorts: catalog order is the order of the source
//! document, and the resolver depends on it.
//!
//! # Usage
//!
//! ```
//! use sekki_core::catalog::Catalog;
//!
//! let catalog = Catalog::bundled();
//! assert_eq!(catalog.len(), 24);
//! assert_eq!(catalog.records()[0].id, "Shōkan");
//! ```

use std::path::Path;
use std::sync::OnceLock;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, warn};

use crate::error::{Result, SekkiError};
use crate::models::{SeasonRecord, SeasonsData};

/// Number of seasons in a complete catalog.
pub const SEKKI_COUNT: usize = 24;

const BUNDLED_DATASET: &str = include_str!("../data/content.json");

/// An ordered, read-only list of season records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<SeasonRecord>,
}

impl Catalog {
    /// An empty catalog. Resolving against it yields the "no season" sentinel.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog from records, keeping their order.
    pub fn new(records: Vec<SeasonRecord>) -> Self {
        if records.len() != SEKKI_COUNT {
            debug!(
                count = records.len(),
                expected = SEKKI_COUNT,
                "Catalog does not hold the full set of seasons"
            );
        }
        Self { records }
    }

    /// Parse a catalog from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let data: SeasonsData = serde_json::from_str(json)
            .map_err(|e| SekkiError::DataUnavailable(format!("Invalid season data: {}", e)))?;
        Ok(Self::new(data.sekki))
    }

    /// Read and parse a catalog file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            SekkiError::DataUnavailable(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }

    /// Parse the bundled dataset.
    ///
    /// A corrupt dataset degrades to an empty catalog; the error is logged
    /// and never returned.
    pub fn load() -> Self {
        Self::from_json(BUNDLED_DATASET).unwrap_or_else(|e| {
            warn!(error = %e, "Bundled season data unavailable, using empty catalog");
            Self::empty()
        })
    }

    /// Read a catalog file, degrading to an empty catalog on any failure.
    pub fn load_or_empty(path: &Path) -> Self {
        Self::from_path(path).unwrap_or_else(|e| {
            warn!(error = %e, "Season data unavailable, using empty catalog");
            Self::empty()
        })
    }

    /// The bundled catalog, parsed once per process.
    pub fn bundled() -> &'static Catalog {
        static INSTANCE: OnceLock<Catalog> = OnceLock::new();
        INSTANCE.get_or_init(Self::load)
    }

    /// All records in catalog order.
    pub fn records(&self) -> &[SeasonRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The last record in catalog order.
    pub fn last(&self) -> Option<&SeasonRecord> {
        self.records.last()
    }

    /// A copy of this catalog ordered by the `MM-DD` start string.
    ///
    /// The sort is stable, so records sharing a start string keep their
    /// relative order. Malformed start strings sort lexically like any other.
    pub fn sorted_by_start_date(&self) -> Catalog {
        let mut records = self.records.clone();
        records.sort_by(|a, b| a.start_date.cmp(&b.start_date));
        Catalog { records }
    }

    /// Serialize back to a `{ "sekki": [...] }` document, indented by four
    /// spaces.
    ///
    /// Non-ASCII text is written as raw UTF-8, not `\uXXXX` escapes, so the
    /// output is not byte-identical to datasets written with ASCII-only
    /// escaping. Both forms parse to the same catalog.
    pub fn to_json_pretty(&self) -> Result<String> {
        let data = SeasonsData {
            sekki: self.records.clone(),
        };

        let mut out = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        data.serialize(&mut serializer).map_err(|e| {
            SekkiError::DataUnavailable(format!("Failed to encode season data: {}", e))
        })?;

        String::from_utf8(out).map_err(|e| {
            SekkiError::DataUnavailable(format!("Encoded season data is not UTF-8: {}", e))
        })
    }
}
