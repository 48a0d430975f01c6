//! Property-based tests for ranking and history ordering.
//!
//! # Invariants tested
//!
//! - **Length:** `rank` returns exactly `min(k, labels.len())` entries.
//! - **Ordering:** confidences never increase down the list.
//! - **Stability:** equal confidences keep their input order.
//! - **Alignment:** mismatched inputs always fail.
//! - **History:** `recent(k)` mirrors insertion order in reverse.

use agridash_core::{
    ActivityLog, InvalidInputError, Label, MetadataCatalog, ScoredLabel, build, rank,
};
use proptest::prelude::*;

fn labels_for(count: usize) -> Vec<Label> {
    (0..count).map(|i| Label::new(format!("crop-{i}"))).collect()
}

fn input_position(scored: &ScoredLabel) -> usize {
    scored
        .label()
        .as_str()
        .trim_start_matches("crop-")
        .parse()
        .unwrap_or(usize::MAX)
}

/// Probabilities drawn from a few coarse buckets so ties are common.
fn probability_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec((0_u8..=10).prop_map(|step| f64::from(step) / 10.0), 0..30)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: the list length is bounded by both `k` and the label count.
    #[test]
    fn rank_length_is_min_of_k_and_labels(
        probabilities in probability_strategy(),
        k in 1_usize..40,
    ) {
        let labels = labels_for(probabilities.len());
        let ranked = rank(&probabilities, &labels, k).expect("aligned input");
        prop_assert_eq!(ranked.len(), k.min(labels.len()));
    }

    /// Property: confidences are non-increasing and ties keep input order.
    #[test]
    fn rank_is_sorted_and_stable(probabilities in probability_strategy()) {
        let labels = labels_for(probabilities.len());
        let ranked = rank(&probabilities, &labels, labels.len().max(1))
            .expect("aligned input");
        for pair in ranked.windows(2) {
            if let [first, second] = pair {
                prop_assert!(first.confidence() >= second.confidence());
                if first.confidence() == second.confidence() {
                    prop_assert!(input_position(first) < input_position(second));
                }
            }
        }
    }

    /// Property: misaligned inputs are always rejected.
    #[test]
    fn rank_rejects_misaligned_input(
        probabilities in probability_strategy(),
        extra in 1_usize..5,
        k in 1_usize..5,
    ) {
        let labels = labels_for(probabilities.len() + extra);
        let err = rank(&probabilities, &labels, k).expect_err("misaligned input");
        let is_mismatch = matches!(err, InvalidInputError::LengthMismatch { .. });
        prop_assert!(is_mismatch);
    }

    /// Property: history reads back newest first.
    #[test]
    fn recent_reverses_insertion_order(records in 1_usize..12, window in 1_usize..12) {
        let catalog = MetadataCatalog::new();
        let mut log = ActivityLog::new();
        for i in 0..records {
            let labels = [Label::new(format!("crop{i}"))];
            let result = build(&[1.0], &labels, 1, &catalog).expect("aligned input");
            log.record(&result);
        }

        let recent = log.recent(window);
        prop_assert_eq!(recent.len(), window.min(records));
        for (offset, entry) in recent.iter().enumerate() {
            let expected = format!("Crop{}", records - 1 - offset);
            prop_assert_eq!(entry.summary_label(), expected.as_str());
        }
    }
}
