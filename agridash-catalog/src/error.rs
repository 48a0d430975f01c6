//! Error types raised while loading crop metadata catalogues.

use agridash_core::FeatureName;
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while reading or validating a catalogue document.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Opening or reading the catalogue file failed.
    #[error("failed to read crop catalogue at {path}")]
    ReadFile {
        /// Requested catalogue path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The document was not valid catalogue JSON.
    #[error("failed to parse crop catalogue from {origin}")]
    Parse {
        /// File path, or `bundled` for the embedded document.
        origin: String,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The document declares a format version this crate cannot read.
    #[error("crop catalogue version {found} is not supported (expected {supported})")]
    UnsupportedVersion {
        /// Version declared by the document.
        found: u32,
        /// Version understood by this crate.
        supported: u32,
    },
    /// A crop entry used an empty label.
    #[error("crop catalogue contains an entry with an empty label")]
    EmptyLabel,
    /// An optimal range named a feature the classifier does not use.
    #[error("crop {crop} lists an optimal range for unknown feature `{key}`")]
    UnknownFeature {
        /// Crop whose entry is affected.
        crop: String,
        /// Key found in the document.
        key: String,
    },
    /// An optimal range was inverted or not finite.
    #[error("crop {crop} has an invalid {feature} range [{low}, {high}]")]
    InvalidRange {
        /// Crop whose entry is affected.
        crop: String,
        /// Feature the range applies to.
        feature: FeatureName,
        /// Lower bound found in the document.
        low: f64,
        /// Upper bound found in the document.
        high: f64,
    },
}
