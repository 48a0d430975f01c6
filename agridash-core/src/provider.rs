//! Seams for the external model and feature normalizer.
//!
//! The engine never trains or loads a classifier. Callers wire in a
//! [`FeatureNormalizer`] and a [`ModelProvider`]; the session drives them and
//! consumes the resulting [`Prediction`].

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{FeatureVector, InvalidInputError, Label, ScoredLabel, rank};

/// Scaled model input produced by a [`FeatureNormalizer`].
///
/// The encoding belongs to the normalizer; the engine passes it through to
/// the model untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledFeatures(Vec<f64>);

impl ScaledFeatures {
    /// Wrap scaled values.
    #[must_use]
    pub const fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Borrow the scaled values.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Consume the wrapper and return the values.
    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

/// Probability output of a classifier together with its class labels.
///
/// `probabilities[i]` belongs to `labels[i]`. Values are trusted to lie in
/// `0.0..=1.0` and to sum to one; the engine does not re-normalise them.
///
/// # Examples
/// ```
/// use agridash_core::{Label, Prediction};
///
/// let prediction = Prediction::new(
///     vec![Label::from("rice"), Label::from("maize")],
///     vec![0.3, 0.7],
/// );
/// let top = prediction.rank(1).expect("aligned prediction");
/// assert_eq!(top[0].label().as_str(), "maize");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Prediction {
    labels: Vec<Label>,
    probabilities: Vec<f64>,
}

impl Prediction {
    /// Pair class labels with their probabilities.
    ///
    /// Alignment is checked when the prediction is ranked, not here.
    #[must_use]
    pub const fn new(labels: Vec<Label>, probabilities: Vec<f64>) -> Self {
        Self {
            labels,
            probabilities,
        }
    }

    /// Class labels in model order.
    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Probabilities aligned with [`Prediction::labels`].
    #[must_use]
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Rank the prediction and keep the best `k` labels.
    ///
    /// # Errors
    /// Returns [`InvalidInputError`] when the vectors are misaligned or `k`
    /// is zero.
    pub fn rank(&self, k: usize) -> Result<Vec<ScoredLabel>, InvalidInputError> {
        rank(&self.probabilities, &self.labels, k)
    }
}

/// Failures reported by external collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The collaborator could not serve the request.
    #[error("{component} is unavailable: {reason}")]
    Unavailable {
        /// Name of the failing collaborator.
        component: &'static str,
        /// Human-readable cause.
        reason: String,
    },
    /// The caller gave up waiting on the collaborator.
    #[error("{component} did not respond within {elapsed:?}")]
    TimedOut {
        /// Name of the slow collaborator.
        component: &'static str,
        /// Time spent waiting before giving up.
        elapsed: Duration,
    },
    /// The scaled input did not have the shape the model expects.
    #[error("expected {expected} scaled features but received {actual}")]
    FeatureCount {
        /// Width the model was fitted on.
        expected: usize,
        /// Width actually supplied.
        actual: usize,
    },
}

/// Scale raw measurements into the model's input space.
///
/// Implementations must be thread-safe so one fitted normalizer can serve
/// many sessions.
pub trait FeatureNormalizer: Send + Sync {
    /// Transform `features` into model input.
    ///
    /// # Errors
    /// Returns [`ProviderError`] when the normalizer cannot run.
    fn normalize(&self, features: &FeatureVector) -> Result<ScaledFeatures, ProviderError>;
}

/// Classifier that yields one probability per class label.
///
/// Implementations must be thread-safe (`Send` + `Sync`).
pub trait ModelProvider: Send + Sync {
    /// Ordered class labels the model predicts over.
    fn classes(&self) -> &[Label];

    /// Predict class probabilities for scaled input.
    ///
    /// # Errors
    /// Returns [`ProviderError`] when the model is unavailable or the input
    /// is malformed.
    fn predict_probabilities(&self, scaled: &ScaledFeatures)
    -> Result<Prediction, ProviderError>;
}
