//! Deterministic collaborators and fixtures used by unit and behaviour
//! tests.

use std::time::Duration;

use crate::{
    FeatureName, FeatureNormalizer, FeatureRange, FeatureVector, Label, MetadataCatalog,
    MetadataRecord, ModelProvider, Prediction, ProviderError, ScaledFeatures,
};

/// Build labels from string slices.
#[must_use]
pub fn crop_labels(names: &[&str]) -> Vec<Label> {
    names.iter().copied().map(Label::from).collect()
}

/// Small catalogue covering a handful of common crops.
///
/// Deliberately omits `lentil` so tests can observe a metadata miss.
#[must_use]
pub fn sample_catalog() -> MetadataCatalog {
    MetadataCatalog::new()
        .with_record(
            Label::from("rice"),
            MetadataRecord::new(
                "Clayey, Loamy",
                "Kharif (Monsoon)",
                "120-150 days",
                "Requires standing water & high rainfall.",
            )
            .with_optimal_range(FeatureName::Ph, FeatureRange::new(5.0, 7.9))
            .with_optimal_range(FeatureName::Rainfall, FeatureRange::new(182.6, 298.6)),
        )
        .with_record(
            Label::from("maize"),
            MetadataRecord::new(
                "Loamy sand to clay loam",
                "Kharif, Rabi, Spring",
                "90-110 days",
                "Needs good sunlight and moderate rainfall.",
            ),
        )
        .with_record(
            Label::from("chickpea"),
            MetadataRecord::new(
                "Sandy loam, pH 6.0-7.5",
                "Spring, Fall (90-120 days)",
                "90-120 days",
                "Drought-tolerant.",
            ),
        )
}

/// Normalizer that passes measurements through unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityNormalizer;

impl FeatureNormalizer for IdentityNormalizer {
    fn normalize(&self, features: &FeatureVector) -> Result<ScaledFeatures, ProviderError> {
        Ok(ScaledFeatures::new(features.to_array().to_vec()))
    }
}

/// Normalizer that always reports itself unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingNormalizer;

impl FeatureNormalizer for FailingNormalizer {
    fn normalize(&self, _features: &FeatureVector) -> Result<ScaledFeatures, ProviderError> {
        Err(ProviderError::Unavailable {
            component: "normalizer",
            reason: "scaler parameters not loaded".to_owned(),
        })
    }
}

/// Model that returns the same prediction for every input.
#[derive(Debug, Clone)]
pub struct FixedModel {
    prediction: Prediction,
}

impl FixedModel {
    /// Serve `prediction` for every request.
    #[must_use]
    pub const fn new(prediction: Prediction) -> Self {
        Self { prediction }
    }
}

impl ModelProvider for FixedModel {
    fn classes(&self) -> &[Label] {
        self.prediction.labels()
    }

    fn predict_probabilities(
        &self,
        _scaled: &ScaledFeatures,
    ) -> Result<Prediction, ProviderError> {
        Ok(self.prediction.clone())
    }
}

/// Model that fails every request with a fixed error.
#[derive(Debug, Clone)]
pub struct FailingModel {
    error: ProviderError,
}

impl FailingModel {
    /// Fail as though the caller's timeout fired.
    #[must_use]
    pub const fn timed_out() -> Self {
        Self {
            error: ProviderError::TimedOut {
                component: "model",
                elapsed: Duration::from_secs(5),
            },
        }
    }
}

impl ModelProvider for FailingModel {
    fn classes(&self) -> &[Label] {
        &[]
    }

    fn predict_probabilities(
        &self,
        _scaled: &ScaledFeatures,
    ) -> Result<Prediction, ProviderError> {
        Err(self.error.clone())
    }
}
