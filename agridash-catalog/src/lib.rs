//! Versioned crop metadata catalogues for the recommendation engine.
//!
//! Catalogues are JSON documents holding a format version and one entry per
//! classifier label:
//!
//! ```json
//! {
//!   "version": 1,
//!   "crops": {
//!     "rice": {
//!       "soil": "Clayey, Loamy",
//!       "season": "Kharif (Monsoon)",
//!       "cycle": "120-150 days",
//!       "notes": "Requires standing water & high rainfall.",
//!       "optimal_ranges": { "ph": [5.0, 7.9] }
//!     }
//!   }
//! }
//! ```
//!
//! A catalogue covering the 22 crops of the reference classifier ships with
//! the crate and is available through [`bundled_catalog`]. Loaders validate
//! the document up front; [`validate_coverage`] then reports labels the
//! model can emit but the catalogue does not describe.
//!
//! # Examples
//!
//! ```
//! use agridash_catalog::{bundled_catalog, validate_coverage};
//! use agridash_core::Label;
//!
//! let catalog = bundled_catalog().expect("bundled catalogue is valid");
//! let gaps = validate_coverage(&catalog, &[Label::from("rice"), Label::from("quinoa")]);
//! assert_eq!(gaps, vec![Label::from("quinoa")]);
//! ```

#![forbid(unsafe_code)]

use agridash_core::{Label, MetadataCatalog};
use agridash_fs::read_utf8_to_string;
use camino::Utf8Path;
use log::{debug, warn};

mod document;
mod error;

pub use document::{CatalogDocument, CropEntry, SUPPORTED_VERSION};
pub use error::CatalogError;

const BUNDLED_CATALOG: &str = include_str!("../data/crops.json");
const BUNDLED_ORIGIN: &str = "bundled";

/// Parse and validate a catalogue held in memory.
///
/// `origin` names the source in error messages.
///
/// # Errors
/// Returns [`CatalogError::Parse`] for malformed JSON and the validation
/// variants of [`CatalogError`] for well-formed but unusable documents.
pub fn parse_catalog(origin: &str, contents: &str) -> Result<MetadataCatalog, CatalogError> {
    let document: CatalogDocument =
        serde_json::from_str(contents).map_err(|source| CatalogError::Parse {
            origin: origin.to_owned(),
            source,
        })?;
    let catalog = document.into_catalog()?;
    debug!("loaded {} crop records from {origin}", catalog.len());
    Ok(catalog)
}

/// Read a catalogue document from `path`.
///
/// # Errors
/// Returns [`CatalogError::ReadFile`] when the file cannot be read, and the
/// errors of [`parse_catalog`] otherwise.
pub fn load_catalog(path: &Utf8Path) -> Result<MetadataCatalog, CatalogError> {
    let contents = read_utf8_to_string(path).map_err(|source| CatalogError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(path.as_str(), &contents)
}

/// Return the catalogue shipped with the crate.
///
/// # Errors
/// Returns [`CatalogError`] only if the embedded document is corrupt.
pub fn bundled_catalog() -> Result<MetadataCatalog, CatalogError> {
    parse_catalog(BUNDLED_ORIGIN, BUNDLED_CATALOG)
}

/// Report labels in `expected` that `catalog` does not describe.
///
/// Each gap is logged as a warning. Gaps are not fatal: lookups for these
/// labels yield the missing-metadata marker at request time.
#[must_use]
pub fn validate_coverage(catalog: &MetadataCatalog, expected: &[Label]) -> Vec<Label> {
    let gaps = catalog.coverage_gaps(expected);
    for label in &gaps {
        warn!("crop catalogue has no metadata for label {label}");
    }
    gaps
}
