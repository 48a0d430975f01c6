//! Session-scoped history of past recommendations.
//!
//! The log is newest-first: every [`ActivityLog::record`] call prepends one
//! entry. Storage is unbounded unless a retention cap is configured; display
//! callers read at most [`DISPLAY_LIMIT`] entries through
//! [`ActivityLog::recent`].

use std::num::NonZeroUsize;
use std::time::SystemTime;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{AccuracyStatus, RecommendationResult};

/// Number of entries shown in the recent-activity view.
pub const DISPLAY_LIMIT: usize = 5;

/// Condensed record of one past recommendation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ActivityEntry {
    summary_label: String,
    top_confidence: f64,
    average_score: f64,
    accuracy_status: AccuracyStatus,
    #[cfg_attr(feature = "serde", serde(default))]
    recorded_at: Option<SystemTime>,
}

impl ActivityEntry {
    /// Derive an entry from a result without a timestamp.
    ///
    /// # Examples
    /// ```
    /// use agridash_core::{ActivityEntry, Label, MetadataCatalog, build};
    ///
    /// let labels = [Label::from("rice"), Label::from("maize")];
    /// let result = build(&[0.6, 0.4], &labels, 3, &MetadataCatalog::new())
    ///     .expect("aligned input");
    /// let entry = ActivityEntry::from_result(&result);
    /// assert_eq!(entry.summary_label(), "Rice, Maize");
    /// assert!(entry.recorded_at().is_none());
    /// ```
    #[must_use]
    pub fn from_result(result: &RecommendationResult) -> Self {
        let summary_label = result
            .top_recommendations()
            .iter()
            .map(|recommendation| recommendation.label().capitalized())
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            summary_label,
            top_confidence: result.top_score(),
            average_score: result.average_score(),
            accuracy_status: result.accuracy_status(),
            recorded_at: None,
        }
    }

    /// Stamp the entry with the time it was recorded.
    #[must_use]
    pub fn with_timestamp(mut self, recorded_at: SystemTime) -> Self {
        self.recorded_at = Some(recorded_at);
        self
    }

    /// Capitalised top labels joined with `", "`.
    #[must_use]
    pub fn summary_label(&self) -> &str {
        &self.summary_label
    }

    /// Confidence of the top recommendation in percent.
    #[must_use]
    pub const fn top_confidence(&self) -> f64 {
        self.top_confidence
    }

    /// Mean confidence across the recommendations.
    #[must_use]
    pub const fn average_score(&self) -> f64 {
        self.average_score
    }

    /// Accuracy tier of the recommendation.
    #[must_use]
    pub const fn accuracy_status(&self) -> AccuracyStatus {
        self.accuracy_status
    }

    /// When the entry was recorded, if stamped.
    #[must_use]
    pub const fn recorded_at(&self) -> Option<SystemTime> {
        self.recorded_at
    }
}

/// Newest-first history of one session's recommendations.
///
/// # Examples
/// ```
/// use agridash_core::{ActivityLog, Label, MetadataCatalog, build};
///
/// let mut log = ActivityLog::new();
/// let labels = [Label::from("maize")];
/// let result = build(&[1.0], &labels, 3, &MetadataCatalog::new()).expect("valid");
/// log.record(&result);
/// assert_eq!(log.recent(5).len(), 1);
/// assert_eq!(log.recent(5)[0].summary_label(), "Maize");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityLog {
    entries: Vec<ActivityEntry>,
    max_retained: Option<NonZeroUsize>,
}

impl ActivityLog {
    /// Create an empty, unbounded log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty log that keeps at most `max_retained` entries.
    ///
    /// `None` keeps every entry for the lifetime of the session.
    #[must_use]
    pub const fn with_retention(max_retained: Option<NonZeroUsize>) -> Self {
        Self {
            entries: Vec::new(),
            max_retained,
        }
    }

    /// Derive an entry from `result`, stamp it with the current time, and
    /// prepend it.
    pub fn record(&mut self, result: &RecommendationResult) {
        let entry = ActivityEntry::from_result(result).with_timestamp(SystemTime::now());
        self.record_entry(entry);
    }

    /// Prepend a pre-built entry, evicting the oldest entries beyond the
    /// retention cap.
    pub fn record_entry(&mut self, entry: ActivityEntry) {
        self.entries.insert(0, entry);
        if let Some(limit) = self.max_retained {
            self.entries.truncate(limit.get());
        }
    }

    /// Return up to `n` entries, newest first.
    #[must_use]
    pub fn recent(&self, n: usize) -> &[ActivityEntry] {
        let end = n.min(self.entries.len());
        self.entries.get(..end).unwrap_or_default()
    }

    /// Number of retained entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether nothing has been recorded yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Configured retention cap.
    #[must_use]
    pub const fn max_retained(&self) -> Option<NonZeroUsize> {
        self.max_retained
    }
}
