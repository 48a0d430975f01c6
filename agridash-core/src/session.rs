//! One interactive session: request pipeline plus its activity history.
//!
//! A [`SessionContext`] owns exactly one [`ActivityLog`]. Sessions share only
//! the read-only [`MetadataCatalog`], so isolation between sessions follows
//! from ownership rather than convention.

use std::num::NonZeroUsize;
use std::sync::Arc;

use log::{debug, warn};
use thiserror::Error;

use crate::{
    ActivityEntry, ActivityLog, DEFAULT_TOP_K, DISPLAY_LIMIT, FeatureNormalizer, FeatureVector,
    InvalidInputError, MetadataCatalog, ModelProvider, Prediction, ProviderError,
    RecommendationResult, build,
};

/// Tunables for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Number of recommendations per request.
    pub top_k: NonZeroUsize,
    /// Maximum history entries kept; `None` keeps all of them.
    pub max_retained: Option<NonZeroUsize>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            top_k: NonZeroUsize::new(DEFAULT_TOP_K).unwrap_or(NonZeroUsize::MIN),
            max_retained: None,
        }
    }
}

/// Errors raised while serving a recommendation request.
///
/// None of these leave a trace in the activity log.
#[derive(Debug, Error)]
pub enum RecommendError {
    /// The feature normalizer failed.
    #[error("failed to normalise features")]
    Normalize {
        /// Underlying collaborator failure.
        #[source]
        source: ProviderError,
    },
    /// The model provider failed.
    #[error("failed to obtain class probabilities")]
    Predict {
        /// Underlying collaborator failure.
        #[source]
        source: ProviderError,
    },
    /// The prediction could not be ranked.
    #[error("prediction was rejected")]
    InvalidInput(#[from] InvalidInputError),
}

/// Explicit per-session state.
///
/// Requests run to completion one at a time: [`SessionContext::recommend`]
/// takes `&mut self`, and the log is only touched after a result has been
/// fully built.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use agridash_core::{Label, MetadataCatalog, Prediction, SessionConfig, SessionContext};
///
/// let mut session = SessionContext::new(Arc::new(MetadataCatalog::new()), SessionConfig::default());
/// let prediction = Prediction::new(
///     vec![Label::from("rice"), Label::from("maize")],
///     vec![0.7, 0.3],
/// );
/// session.record_prediction(&prediction).expect("aligned prediction");
/// assert_eq!(session.recent_activity()[0].summary_label(), "Rice, Maize");
/// ```
#[derive(Debug, Clone)]
pub struct SessionContext {
    catalog: Arc<MetadataCatalog>,
    config: SessionConfig,
    log: ActivityLog,
}

impl SessionContext {
    /// Start a session with an empty history.
    #[must_use]
    pub const fn new(catalog: Arc<MetadataCatalog>, config: SessionConfig) -> Self {
        Self {
            catalog,
            config,
            log: ActivityLog::with_retention(config.max_retained),
        }
    }

    /// Run the full pipeline for one set of measurements.
    ///
    /// Normalises `features`, asks `model` for probabilities, builds the
    /// result, and records it. If any step before the result is built fails,
    /// the history is left untouched.
    ///
    /// # Errors
    /// Returns [`RecommendError`] naming the failed step.
    pub fn recommend(
        &mut self,
        features: &FeatureVector,
        normalizer: &dyn FeatureNormalizer,
        model: &dyn ModelProvider,
    ) -> Result<RecommendationResult, RecommendError> {
        let scaled = normalizer.normalize(features).map_err(|source| {
            warn!("request abandoned before ranking: {source}");
            RecommendError::Normalize { source }
        })?;
        let prediction = model.predict_probabilities(&scaled).map_err(|source| {
            warn!("request abandoned before ranking: {source}");
            RecommendError::Predict { source }
        })?;
        self.record_prediction(&prediction)
    }

    /// Build and record a result for a prediction the caller already holds.
    ///
    /// # Errors
    /// Returns [`RecommendError::InvalidInput`] when the prediction is
    /// misaligned.
    pub fn record_prediction(
        &mut self,
        prediction: &Prediction,
    ) -> Result<RecommendationResult, RecommendError> {
        let result = build(
            prediction.probabilities(),
            prediction.labels(),
            self.config.top_k.get(),
            &self.catalog,
        )?;
        self.log.record(&result);
        debug!(
            "recorded recommendation ({} entries in session history)",
            self.log.len()
        );
        Ok(result)
    }

    /// Up to `n` history entries, newest first.
    #[must_use]
    pub fn recent(&self, n: usize) -> &[ActivityEntry] {
        self.log.recent(n)
    }

    /// The entries shown in the recent-activity view.
    #[must_use]
    pub fn recent_activity(&self) -> &[ActivityEntry] {
        self.recent(DISPLAY_LIMIT)
    }

    /// Read-only view of the whole history.
    #[must_use]
    pub const fn activity_log(&self) -> &ActivityLog {
        &self.log
    }

    /// Catalogue shared with other sessions.
    #[must_use]
    pub fn catalog(&self) -> &MetadataCatalog {
        &self.catalog
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> SessionConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        FailingModel, FailingNormalizer, FixedModel, IdentityNormalizer, crop_labels,
        sample_catalog,
    };
    use rstest::{fixture, rstest};

    #[fixture]
    fn session() -> SessionContext {
        SessionContext::new(Arc::new(sample_catalog()), SessionConfig::default())
    }

    #[fixture]
    fn features() -> FeatureVector {
        FeatureVector::new(90.0, 42.0, 43.0, 20.8, 82.0, 6.5, 202.9)
    }

    fn model() -> FixedModel {
        FixedModel::new(Prediction::new(
            crop_labels(&["rice", "maize", "chickpea", "lentil"]),
            vec![0.92, 0.05, 0.02, 0.01],
        ))
    }

    #[rstest]
    fn recommend_records_each_result(mut session: SessionContext, features: FeatureVector) {
        let result = session
            .recommend(&features, &IdentityNormalizer, &model())
            .expect("pipeline succeeds");

        let recent = session.recent(1);
        assert_eq!(recent.len(), 1);
        let entry = recent.first().expect("one entry");
        assert_eq!(entry.summary_label(), "Rice, Maize, Chickpea");
        assert_eq!(entry.accuracy_status(), result.accuracy_status());
    }

    #[rstest]
    fn normalizer_failure_leaves_history_untouched(
        mut session: SessionContext,
        features: FeatureVector,
    ) {
        let err = session
            .recommend(&features, &FailingNormalizer, &model())
            .expect_err("normalizer fails");
        assert!(matches!(err, RecommendError::Normalize { .. }));
        assert!(session.activity_log().is_empty());
    }

    #[rstest]
    fn model_failure_leaves_history_untouched(
        mut session: SessionContext,
        features: FeatureVector,
    ) {
        let err = session
            .recommend(&features, &IdentityNormalizer, &FailingModel::timed_out())
            .expect_err("model fails");
        assert!(matches!(err, RecommendError::Predict { .. }));
        assert!(session.activity_log().is_empty());
    }

    #[rstest]
    fn misaligned_prediction_is_not_recorded(mut session: SessionContext) {
        let prediction = Prediction::new(crop_labels(&["rice"]), vec![0.5, 0.5]);
        let err = session
            .record_prediction(&prediction)
            .expect_err("misaligned");
        assert!(matches!(err, RecommendError::InvalidInput(_)));
        assert!(session.activity_log().is_empty());
    }

    #[rstest]
    fn sessions_do_not_share_history(features: FeatureVector) {
        let catalog = Arc::new(sample_catalog());
        let mut first = SessionContext::new(Arc::clone(&catalog), SessionConfig::default());
        let second = SessionContext::new(catalog, SessionConfig::default());

        first
            .recommend(&features, &IdentityNormalizer, &model())
            .expect("pipeline succeeds");

        assert_eq!(first.activity_log().len(), 1);
        assert!(second.activity_log().is_empty());
    }

    #[rstest]
    fn configured_top_k_and_retention_apply(features: FeatureVector) {
        let config = SessionConfig {
            top_k: NonZeroUsize::MIN,
            max_retained: NonZeroUsize::new(2),
        };
        let mut session = SessionContext::new(Arc::new(sample_catalog()), config);
        for _ in 0..3 {
            let result = session
                .recommend(&features, &IdentityNormalizer, &model())
                .expect("pipeline succeeds");
            assert_eq!(result.top_recommendations().len(), 1);
        }
        assert_eq!(session.activity_log().len(), 2);
        assert_eq!(session.recent_activity().len(), 2);
    }
}
