//! Compose ranking, tiering, and catalogue enrichment into one result.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    AccuracyStatus, HealthStatus, InvalidInputError, Label, MetadataCatalog, MetadataLookup,
    MetadataRecord, ScoredLabel, accuracy_tier, health_tier, rank,
};

/// Number of recommendations produced when the caller does not choose.
pub const DEFAULT_TOP_K: usize = 3;

/// Catalogue data attached to a recommendation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "status", rename_all = "snake_case")
)]
pub enum Enrichment {
    /// The catalogue held a record for the label.
    Metadata(MetadataRecord),
    /// No record exists; the recommendation is still reported.
    Missing,
}

impl Enrichment {
    fn from_lookup(lookup: MetadataLookup<'_>) -> Self {
        lookup
            .record()
            .map_or(Self::Missing, |record| Self::Metadata(record.clone()))
    }

    /// Borrow the record, if present.
    #[must_use]
    pub const fn record(&self) -> Option<&MetadataRecord> {
        match self {
            Self::Metadata(record) => Some(record),
            Self::Missing => None,
        }
    }
}

/// A ranked label together with its catalogue data.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnrichedRecommendation {
    #[cfg_attr(feature = "serde", serde(flatten))]
    scored: ScoredLabel,
    enrichment: Enrichment,
}

impl EnrichedRecommendation {
    /// The label and its confidence.
    #[must_use]
    pub const fn scored(&self) -> &ScoredLabel {
        &self.scored
    }

    /// Shorthand for the recommended label.
    #[must_use]
    pub const fn label(&self) -> &Label {
        self.scored.label()
    }

    /// Shorthand for the confidence in percent.
    #[must_use]
    pub const fn confidence(&self) -> f64 {
        self.scored.confidence()
    }

    /// Catalogue data or the missing marker.
    #[must_use]
    pub const fn enrichment(&self) -> &Enrichment {
        &self.enrichment
    }
}

/// Ranked, tiered, and enriched output for one request.
///
/// The result is immutable once built.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RecommendationResult {
    top_recommendations: Vec<EnrichedRecommendation>,
    average_score: f64,
    health_status: HealthStatus,
    accuracy_status: AccuracyStatus,
}

impl RecommendationResult {
    /// Recommendations ordered from best to worst.
    #[must_use]
    pub fn top_recommendations(&self) -> &[EnrichedRecommendation] {
        &self.top_recommendations
    }

    /// The best recommendation, absent only for an empty label set.
    #[must_use]
    pub fn top(&self) -> Option<&EnrichedRecommendation> {
        self.top_recommendations.first()
    }

    /// Confidence of the best recommendation, or `0.0` when there is none.
    #[must_use]
    pub fn top_score(&self) -> f64 {
        self.top().map_or(0.0, EnrichedRecommendation::confidence)
    }

    /// Mean confidence across the returned recommendations.
    #[must_use]
    pub const fn average_score(&self) -> f64 {
        self.average_score
    }

    /// Tier derived from [`RecommendationResult::average_score`].
    #[must_use]
    pub const fn health_status(&self) -> HealthStatus {
        self.health_status
    }

    /// Tier derived from [`RecommendationResult::top_score`].
    #[must_use]
    pub const fn accuracy_status(&self) -> AccuracyStatus {
        self.accuracy_status
    }
}

/// Build a [`RecommendationResult`] from raw classifier output.
///
/// Ranks the labels, averages the top `k` scores, derives both tiers, and
/// attaches catalogue data to each entry. A label missing from the catalogue
/// is reported with [`Enrichment::Missing`] and never fails the request.
/// An empty label set yields an empty list with zero scores.
///
/// # Errors
/// Propagates [`InvalidInputError`] from [`rank`].
pub fn build(
    probabilities: &[f64],
    labels: &[Label],
    k: usize,
    catalog: &MetadataCatalog,
) -> Result<RecommendationResult, InvalidInputError> {
    let ranked = rank(probabilities, labels, k)?;
    let average_score = mean_confidence(&ranked);
    let top_score = ranked.first().map_or(0.0, ScoredLabel::confidence);

    let top_recommendations = ranked
        .into_iter()
        .map(|scored| {
            let enrichment = Enrichment::from_lookup(catalog.lookup(scored.label()));
            EnrichedRecommendation { scored, enrichment }
        })
        .collect();

    Ok(RecommendationResult {
        top_recommendations,
        average_score,
        health_status: health_tier(average_score),
        accuracy_status: accuracy_tier(top_score),
    })
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "the average divides a bounded sum by a small entry count"
)]
fn mean_confidence(ranked: &[ScoredLabel]) -> f64 {
    if ranked.is_empty() {
        return 0.0;
    }
    let total: f64 = ranked.iter().map(ScoredLabel::confidence).sum();
    total / ranked.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{crop_labels, sample_catalog};
    use rstest::rstest;

    const TOLERANCE: f64 = 1e-9;

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "tests compare floating point values"
    )]
    fn builds_the_reference_scenario() {
        let labels = crop_labels(&["rice", "maize", "chickpea", "lentil"]);
        let result = build(&[0.92, 0.05, 0.02, 0.01], &labels, 3, &sample_catalog())
            .expect("aligned input");

        let summary: Vec<(&str, f64)> = result
            .top_recommendations()
            .iter()
            .map(|r| (r.label().as_str(), r.confidence()))
            .collect();
        assert_eq!(summary.len(), 3);
        for ((label, score), (expected_label, expected_score)) in
            summary.iter().zip([("rice", 92.0), ("maize", 5.0), ("chickpea", 2.0)])
        {
            assert_eq!(*label, expected_label);
            assert!((score - expected_score).abs() < TOLERANCE);
        }
        assert!((result.average_score() - 33.0).abs() < TOLERANCE);
        assert_eq!(result.health_status(), HealthStatus::Poor);
        assert_eq!(result.accuracy_status(), AccuracyStatus::High);
    }

    #[rstest]
    fn unknown_labels_are_marked_missing_without_failing() {
        let labels = crop_labels(&["rice", "quinoa", "maize"]);
        let result =
            build(&[0.5, 0.3, 0.2], &labels, 3, &sample_catalog()).expect("aligned input");

        let missing: Vec<bool> = result
            .top_recommendations()
            .iter()
            .map(|r| r.enrichment().record().is_none())
            .collect();
        assert_eq!(missing, [false, true, false]);
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "tests compare floating point values"
    )]
    fn average_covers_only_returned_entries() {
        let labels = crop_labels(&["rice", "maize"]);
        let result = build(&[0.9, 0.1], &labels, 3, &MetadataCatalog::new()).expect("valid");
        assert_eq!(result.top_recommendations().len(), 2);
        assert!((result.average_score() - 50.0).abs() < TOLERANCE);
        assert_eq!(result.health_status(), HealthStatus::Poor);
        assert_eq!(result.accuracy_status(), AccuracyStatus::Medium);
    }

    #[rstest]
    fn high_agreement_is_excellent() {
        let labels = crop_labels(&["rice", "jute", "coconut"]);
        let result = build(&[0.95, 0.85, 0.81], &labels, 3, &sample_catalog()).expect("valid");
        assert_eq!(result.health_status(), HealthStatus::Excellent);
        assert_eq!(result.accuracy_status(), AccuracyStatus::High);
    }

    #[rstest]
    fn empty_label_set_builds_an_empty_result() {
        let result = build(&[], &[], 3, &sample_catalog()).expect("aligned empty input");
        assert!(result.top().is_none());
        assert_eq!(result.top_score(), 0.0);
        assert_eq!(result.health_status(), HealthStatus::Poor);
        assert_eq!(result.accuracy_status(), AccuracyStatus::Low);
    }

    #[rstest]
    fn ranker_errors_propagate_unchanged() {
        let labels = crop_labels(&["rice"]);
        let err = build(&[0.5, 0.5], &labels, 3, &sample_catalog()).expect_err("misaligned");
        assert_eq!(
            err,
            InvalidInputError::LengthMismatch {
                probabilities: 2,
                labels: 1,
            }
        );
    }
}
