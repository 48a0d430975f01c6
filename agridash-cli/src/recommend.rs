//! Recommend command implementation for the AgriDash CLI.

use std::io::{BufReader, Write};
use std::num::NonZeroUsize;
use std::sync::Arc;

use agridash_catalog::{bundled_catalog, load_catalog, validate_coverage};
use agridash_core::{
    DEFAULT_TOP_K, MetadataCatalog, Prediction, RecommendationResult, SessionConfig,
    SessionContext,
};
use agridash_fs::open_utf8_file;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{ARG_CATALOG, ARG_PREDICTION, ARG_TOP_K, CliError, ENV_PREDICTION};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank a recorded model prediction, enrich the leading crops \
                 with catalogue metadata, and print the result as JSON. The \
                 prediction file holds parallel `labels` and `probabilities` \
                 arrays.",
    about = "Recommend crops from a recorded prediction"
)]
#[ortho_config(prefix = "AGRIDASH")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON file containing a prediction.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) prediction_path: Option<Utf8PathBuf>,
    /// Crop catalogue to use instead of the bundled one.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Number of crops to recommend (defaults to 3).
    #[arg(long = ARG_TOP_K, value_name = "count")]
    #[serde(default)]
    pub(crate) top_k: Option<usize>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    /// Path to the JSON prediction file.
    pub(crate) prediction_path: Utf8PathBuf,
    /// Catalogue override; `None` selects the bundled catalogue.
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Recommendations per request.
    pub(crate) top_k: NonZeroUsize,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.prediction_path, ARG_PREDICTION)?;
        if let Some(catalog) = &self.catalog {
            Self::require_existing(catalog, ARG_CATALOG)?;
        }
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match agridash_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn session_config(&self) -> SessionConfig {
        SessionConfig {
            top_k: self.top_k,
            ..SessionConfig::default()
        }
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let prediction_path = args.prediction_path.ok_or(CliError::MissingArgument {
            field: ARG_PREDICTION,
            env: ENV_PREDICTION,
        })?;
        let top_k = NonZeroUsize::new(args.top_k.unwrap_or(DEFAULT_TOP_K))
            .ok_or(CliError::ZeroTopK { field: ARG_TOP_K })?;
        Ok(Self {
            prediction_path,
            catalog: args.catalog,
            top_k,
        })
    }
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &mut stdout)
}

pub(super) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_recommend_config(args)?;
    let result = execute_recommend(&config)?;
    write_recommendation(writer, &result)
}

fn resolve_recommend_config(args: RecommendArgs) -> Result<RecommendConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn execute_recommend(config: &RecommendConfig) -> Result<RecommendationResult, CliError> {
    let prediction = load_prediction(&config.prediction_path)?;
    let catalog = load_configured_catalog(config.catalog.as_deref())?;
    let gaps = validate_coverage(&catalog, prediction.labels());
    debug!(
        "{} of {} predicted labels lack catalogue metadata",
        gaps.len(),
        prediction.labels().len()
    );
    let mut session = SessionContext::new(Arc::new(catalog), config.session_config());
    Ok(session.record_prediction(&prediction)?)
}

fn load_configured_catalog(path: Option<&Utf8Path>) -> Result<MetadataCatalog, CliError> {
    let catalog = match path {
        Some(path) => {
            debug!("loading crop catalogue from {path}");
            load_catalog(path)?
        }
        None => bundled_catalog()?,
    };
    Ok(catalog)
}

/// Loads a JSON-encoded [`Prediction`] from disk.
pub(super) fn load_prediction(path: &Utf8Path) -> Result<Prediction, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenPrediction {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParsePrediction {
        path: path.to_path_buf(),
        source,
    })
}

fn write_recommendation(
    writer: &mut dyn Write,
    result: &RecommendationResult,
) -> Result<(), CliError> {
    let payload =
        serde_json::to_string_pretty(result).map_err(CliError::SerializeRecommendation)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
