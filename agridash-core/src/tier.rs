//! Qualitative tiers derived from confidence scores.
//!
//! Both classifiers use strict greater-than comparisons, so a score that sits
//! exactly on a threshold falls into the lower tier.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Average score above which the recommendation set is `Excellent`.
pub const EXCELLENT_ABOVE: f64 = 80.0;
/// Average score above which the recommendation set is `Moderate`.
pub const MODERATE_ABOVE: f64 = 60.0;
/// Top score above which model confidence is `High`.
pub const HIGH_ABOVE: f64 = 90.0;
/// Top score above which model confidence is `Medium`.
pub const MEDIUM_ABOVE: f64 = 70.0;

/// Overall condition of a recommendation set, from its average score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HealthStatus {
    /// Average score above 80.
    Excellent,
    /// Average score above 60 and at most 80.
    Moderate,
    /// Average score of 60 or below.
    Poor,
}

impl HealthStatus {
    /// Stable lowercase identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Moderate => "moderate",
            Self::Poor => "poor",
        }
    }

    /// Caption shown to end users.
    #[must_use]
    pub const fn caption(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent condition",
            Self::Moderate => "Moderate condition",
            Self::Poor => "Poor condition",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trust signal for the top recommendation, from its confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AccuracyStatus {
    /// Top score above 90.
    High,
    /// Top score above 70 and at most 90.
    Medium,
    /// Top score of 70 or below.
    Low,
}

impl AccuracyStatus {
    /// Stable lowercase identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Caption shown to end users.
    #[must_use]
    pub const fn caption(self) -> &'static str {
        match self {
            Self::High => "High confidence",
            Self::Medium => "Medium confidence",
            Self::Low => "Low confidence",
        }
    }
}

impl fmt::Display for AccuracyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify the average score of a recommendation set.
///
/// `NaN` compares false against every threshold and lands in `Poor`.
///
/// # Examples
/// ```
/// use agridash_core::{HealthStatus, health_tier};
///
/// assert_eq!(health_tier(80.0), HealthStatus::Moderate);
/// assert_eq!(health_tier(80.01), HealthStatus::Excellent);
/// ```
#[must_use]
pub const fn health_tier(average_score: f64) -> HealthStatus {
    if average_score > EXCELLENT_ABOVE {
        HealthStatus::Excellent
    } else if average_score > MODERATE_ABOVE {
        HealthStatus::Moderate
    } else {
        HealthStatus::Poor
    }
}

/// Classify the confidence of the top-ranked label.
///
/// # Examples
/// ```
/// use agridash_core::{AccuracyStatus, accuracy_tier};
///
/// assert_eq!(accuracy_tier(90.0), AccuracyStatus::Medium);
/// assert_eq!(accuracy_tier(90.01), AccuracyStatus::High);
/// ```
#[must_use]
pub const fn accuracy_tier(top_score: f64) -> AccuracyStatus {
    if top_score > HIGH_ABOVE {
        AccuracyStatus::High
    } else if top_score > MEDIUM_ABOVE {
        AccuracyStatus::Medium
    } else {
        AccuracyStatus::Low
    }
}
