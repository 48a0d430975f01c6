//! Turn a probability vector into an ordered top-K list.

use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Label;

/// Errors returned by [`rank`] for malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    /// Probabilities and labels are not index-aligned.
    #[error("{probabilities} probabilities cannot be aligned with {labels} labels")]
    LengthMismatch {
        /// Number of probabilities supplied.
        probabilities: usize,
        /// Number of labels supplied.
        labels: usize,
    },
    /// The requested list length was zero.
    #[error("top-k must be at least 1")]
    NonPositiveK,
}

/// A label paired with its confidence on a `0.0..=100.0` scale.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoredLabel {
    label: Label,
    confidence: f64,
}

impl ScoredLabel {
    /// Pair a label with a confidence score.
    #[must_use]
    pub const fn new(label: Label, confidence: f64) -> Self {
        Self { label, confidence }
    }

    /// The scored label.
    #[must_use]
    pub const fn label(&self) -> &Label {
        &self.label
    }

    /// Confidence in percent.
    #[must_use]
    pub const fn confidence(&self) -> f64 {
        self.confidence
    }
}

/// Rank `labels` by probability and keep the best `k`.
///
/// Confidence is `probability * 100`. Entries are sorted by descending
/// confidence; exact ties keep their input order. A `NaN` probability ranks
/// below every other value.
///
/// # Errors
/// Returns [`InvalidInputError::LengthMismatch`] when the slices differ in
/// length and [`InvalidInputError::NonPositiveK`] when `k` is zero.
///
/// # Examples
/// ```
/// use agridash_core::{Label, rank};
///
/// let labels = [Label::from("rice"), Label::from("maize"), Label::from("lentil")];
/// let top = rank(&[0.2, 0.5, 0.3], &labels, 2).expect("valid input");
/// let names: Vec<_> = top.iter().map(|s| s.label().as_str()).collect();
/// assert_eq!(names, ["maize", "lentil"]);
/// ```
pub fn rank(
    probabilities: &[f64],
    labels: &[Label],
    k: usize,
) -> Result<Vec<ScoredLabel>, InvalidInputError> {
    if probabilities.len() != labels.len() {
        return Err(InvalidInputError::LengthMismatch {
            probabilities: probabilities.len(),
            labels: labels.len(),
        });
    }
    if k == 0 {
        return Err(InvalidInputError::NonPositiveK);
    }

    let mut scored: Vec<ScoredLabel> = labels
        .iter()
        .zip(probabilities)
        .map(|(label, &probability)| ScoredLabel::new(label.clone(), to_confidence(probability)))
        .collect();
    // `sort_by` is stable, so equal scores keep first-seen order.
    scored.sort_by(|a, b| descending(a.confidence, b.confidence));
    scored.truncate(k);
    Ok(scored)
}

#[expect(
    clippy::float_arithmetic,
    reason = "confidence is the probability expressed in percent"
)]
const fn to_confidence(probability: f64) -> f64 {
    probability * 100.0
}

fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
