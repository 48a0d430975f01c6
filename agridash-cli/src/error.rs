//! Error types emitted by the AgriDash CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use agridash_catalog::CatalogError;
use agridash_core::RecommendError;
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors emitted by the AgriDash CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// The requested recommendation count was zero.
    #[error("--{field} must be at least 1")]
    ZeroTopK { field: &'static str },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Opening the prediction file failed.
    #[error("failed to open prediction at {path:?}: {source}")]
    OpenPrediction {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Prediction JSON could not be decoded.
    #[error("failed to parse prediction JSON at {path:?}: {source}")]
    ParsePrediction {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Loading the crop catalogue failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// The engine rejected the prediction.
    #[error("recommendation failed: {0}")]
    Recommend(#[from] RecommendError),
    /// Serializing the recommendation failed.
    #[error("failed to serialize recommendation: {0}")]
    SerializeRecommendation(#[source] serde_json::Error),
    /// Writing the recommendation output failed.
    #[error("failed to write recommendation output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
