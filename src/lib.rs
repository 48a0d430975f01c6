//! Facade crate for the AgriDash crop recommendation engine.
//!
//! This crate re-exports the core ranking, tiering, and session history types
//! and exposes catalogue loading behind the `catalog` feature.

#![forbid(unsafe_code)]

pub use agridash_core::{
    AccuracyStatus, ActivityEntry, ActivityLog, DEFAULT_TOP_K, DISPLAY_LIMIT,
    EnrichedRecommendation, Enrichment, FeatureName, FeatureNormalizer, FeatureRange,
    FeatureVector, HealthStatus, InvalidInputError, Label, MetadataCatalog, MetadataLookup,
    MetadataRecord, ModelProvider, Prediction, ProviderError, RangeDeviation, RecommendError,
    RecommendationResult, ScaledFeatures, ScalerError, ScoredLabel, SessionConfig,
    SessionContext, StandardScaler, accuracy_tier, build, health_tier, rank,
};

#[cfg(feature = "test-support")]
pub use agridash_core::test_support;

#[cfg(feature = "catalog")]
pub use agridash_catalog::{
    CatalogDocument, CatalogError, CropEntry, SUPPORTED_VERSION, bundled_catalog, load_catalog,
    parse_catalog, validate_coverage,
};
