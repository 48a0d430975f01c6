//! Core domain types for the AgriDash recommendation engine.
//!
//! The crate turns a classifier's probability output into a ranked set of
//! crop recommendations, derives qualitative health and accuracy tiers from
//! the scores, enriches each entry with catalogue metadata, and keeps a
//! per-session history of past requests.
//!
//! Model loading and feature scaling stay outside the crate. They plug in
//! through the [`ModelProvider`] and [`FeatureNormalizer`] traits.
//!
//! # Examples
//!
//! ```
//! use agridash_core::{HealthStatus, AccuracyStatus, Label, MetadataCatalog, build};
//!
//! # fn main() -> Result<(), agridash_core::InvalidInputError> {
//! let labels: Vec<Label> = ["rice", "maize", "chickpea", "lentil"]
//!     .into_iter()
//!     .map(Label::from)
//!     .collect();
//! let probabilities = [0.92, 0.05, 0.02, 0.01];
//!
//! let result = build(&probabilities, &labels, 3, &MetadataCatalog::new())?;
//! assert_eq!(result.top_recommendations().len(), 3);
//! assert_eq!(result.health_status(), HealthStatus::Poor);
//! assert_eq!(result.accuracy_status(), AccuracyStatus::High);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod activity;
pub mod features;
pub mod label;
pub mod metadata;
pub mod provider;
pub mod rank;
pub mod recommendation;
pub mod scaler;
pub mod session;
pub mod tier;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use activity::{ActivityEntry, ActivityLog, DISPLAY_LIMIT};
pub use features::{FeatureName, FeatureRange, FeatureVector};
pub use label::Label;
pub use metadata::{MetadataCatalog, MetadataLookup, MetadataRecord, RangeDeviation};
pub use provider::{FeatureNormalizer, ModelProvider, Prediction, ProviderError, ScaledFeatures};
pub use rank::{InvalidInputError, ScoredLabel, rank};
pub use recommendation::{
    DEFAULT_TOP_K, Enrichment, EnrichedRecommendation, RecommendationResult, build,
};
pub use scaler::{ScalerError, StandardScaler};
pub use session::{RecommendError, SessionConfig, SessionContext};
pub use tier::{AccuracyStatus, HealthStatus, accuracy_tier, health_tier};
