//! Static descriptive records keyed by crop label.
//!
//! The catalogue is built once and then only read. A lookup for an unknown
//! label is an expected outcome and yields [`MetadataLookup::Missing`]
//! rather than an error.

use std::collections::{BTreeMap, HashMap};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{FeatureName, FeatureRange, FeatureVector, Label};

/// Agronomic notes for one crop.
///
/// # Examples
/// ```
/// use agridash_core::{FeatureName, FeatureRange, MetadataRecord};
///
/// let record = MetadataRecord::new(
///     "Clayey, Loamy",
///     "Kharif (Monsoon)",
///     "120-150 days",
///     "Requires standing water & high rainfall.",
/// )
/// .with_optimal_range(FeatureName::Ph, FeatureRange::new(5.0, 7.9));
/// assert_eq!(record.season(), "Kharif (Monsoon)");
/// assert!(record.optimal_range(FeatureName::Ph).is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MetadataRecord {
    soil_description: String,
    season: String,
    growth_cycle: String,
    notes: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "BTreeMap::is_empty")
    )]
    optimal_ranges: BTreeMap<FeatureName, FeatureRange>,
}

impl MetadataRecord {
    /// Build a record without optimal ranges.
    #[must_use]
    pub fn new(
        soil_description: impl Into<String>,
        season: impl Into<String>,
        growth_cycle: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            soil_description: soil_description.into(),
            season: season.into(),
            growth_cycle: growth_cycle.into(),
            notes: notes.into(),
            optimal_ranges: BTreeMap::new(),
        }
    }

    /// Attach the band of values a feature typically takes for this crop.
    #[must_use]
    pub fn with_optimal_range(mut self, feature: FeatureName, range: FeatureRange) -> Self {
        self.optimal_ranges.insert(feature, range);
        self
    }

    /// Suitable soil types.
    #[must_use]
    pub fn soil_description(&self) -> &str {
        &self.soil_description
    }

    /// Sowing or growing season.
    #[must_use]
    pub fn season(&self) -> &str {
        &self.season
    }

    /// Time from sowing to harvest.
    #[must_use]
    pub fn growth_cycle(&self) -> &str {
        &self.growth_cycle
    }

    /// Free-form agronomic notes.
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Optimal band for one feature, if recorded.
    #[must_use]
    pub fn optimal_range(&self, feature: FeatureName) -> Option<FeatureRange> {
        self.optimal_ranges.get(&feature).copied()
    }

    /// All recorded optimal bands.
    #[must_use]
    pub const fn optimal_ranges(&self) -> &BTreeMap<FeatureName, FeatureRange> {
        &self.optimal_ranges
    }

    /// List measurements that fall outside this crop's optimal bands.
    ///
    /// Features without a recorded band are never reported.
    ///
    /// # Examples
    /// ```
    /// use agridash_core::{FeatureName, FeatureRange, FeatureVector, MetadataRecord};
    ///
    /// let record = MetadataRecord::new("Loam", "Rabi", "90 days", "")
    ///     .with_optimal_range(FeatureName::Ph, FeatureRange::new(6.0, 7.5));
    /// let features = FeatureVector::new(40.0, 60.0, 80.0, 18.0, 17.0, 8.2, 80.0);
    /// let deviations = record.range_fit(&features);
    /// assert_eq!(deviations.len(), 1);
    /// assert_eq!(deviations[0].feature, FeatureName::Ph);
    /// ```
    #[must_use]
    pub fn range_fit(&self, features: &FeatureVector) -> Vec<RangeDeviation> {
        self.optimal_ranges
            .iter()
            .filter_map(|(&feature, &range)| {
                let value = features.get(feature);
                (!range.contains(value)).then_some(RangeDeviation {
                    feature,
                    value,
                    range,
                })
            })
            .collect()
    }
}

/// A measurement that lies outside a crop's optimal band.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RangeDeviation {
    /// Feature that deviates.
    pub feature: FeatureName,
    /// Supplied measurement.
    pub value: f64,
    /// Band the crop prefers.
    pub range: FeatureRange,
}

/// Outcome of a catalogue lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetadataLookup<'a> {
    /// A record exists for the label.
    Found(&'a MetadataRecord),
    /// The catalogue has no record for the label.
    Missing,
}

impl<'a> MetadataLookup<'a> {
    /// Convert into an `Option`.
    #[must_use]
    pub const fn record(self) -> Option<&'a MetadataRecord> {
        match self {
            Self::Found(record) => Some(record),
            Self::Missing => None,
        }
    }

    /// Report whether the lookup missed.
    #[must_use]
    pub const fn is_missing(self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// Read-only mapping from crop label to [`MetadataRecord`].
///
/// Construct the catalogue up front with [`MetadataCatalog::with_record`] or
/// by collecting `(Label, MetadataRecord)` pairs. Share it between sessions
/// behind an `Arc`; no mutation is possible once it is handed out.
///
/// # Examples
/// ```
/// use agridash_core::{Label, MetadataCatalog, MetadataRecord};
///
/// let catalog = MetadataCatalog::new().with_record(
///     Label::from("maize"),
///     MetadataRecord::new("Loamy sand", "Kharif", "90-110 days", "Needs sun."),
/// );
/// assert!(catalog.lookup(&Label::from("maize")).record().is_some());
/// assert!(catalog.lookup(&Label::from("quinoa")).is_missing());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataCatalog {
    records: HashMap<Label, MetadataRecord>,
}

impl MetadataCatalog {
    /// Create an empty catalogue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record while building the catalogue.
    ///
    /// A later record for the same label replaces the earlier one.
    #[must_use]
    pub fn with_record(mut self, label: Label, record: MetadataRecord) -> Self {
        self.records.insert(label, record);
        self
    }

    /// Look up the record for `label`.
    #[must_use]
    pub fn lookup(&self, label: &Label) -> MetadataLookup<'_> {
        self.records
            .get(label)
            .map_or(MetadataLookup::Missing, MetadataLookup::Found)
    }

    /// Number of labels with a record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Report whether the catalogue holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Labels with a record, sorted for stable output.
    #[must_use]
    pub fn labels(&self) -> Vec<&Label> {
        let mut labels: Vec<&Label> = self.records.keys().collect();
        labels.sort();
        labels
    }

    /// Return the labels from `expected` that have no record, in input order.
    #[must_use]
    pub fn coverage_gaps(&self, expected: &[Label]) -> Vec<Label> {
        expected
            .iter()
            .filter(|label| !self.records.contains_key(*label))
            .cloned()
            .collect()
    }
}

impl FromIterator<(Label, MetadataRecord)> for MetadataCatalog {
    fn from_iter<I: IntoIterator<Item = (Label, MetadataRecord)>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn catalog() -> MetadataCatalog {
        [
            (
                Label::from("rice"),
                MetadataRecord::new("Clayey", "Kharif", "120-150 days", "Standing water."),
            ),
            (
                Label::from("lentil"),
                MetadataRecord::new("Loam", "Not specified", "Not specified", "Free-draining."),
            ),
        ]
        .into_iter()
        .collect()
    }

    #[rstest]
    fn lookup_finds_known_labels(catalog: MetadataCatalog) {
        let record = catalog
            .lookup(&Label::from("rice"))
            .record()
            .expect("rice is catalogued");
        assert_eq!(record.soil_description(), "Clayey");
    }

    #[rstest]
    fn lookup_reports_missing_labels(catalog: MetadataCatalog) {
        assert_eq!(catalog.lookup(&Label::from("quinoa")), MetadataLookup::Missing);
    }

    #[rstest]
    fn coverage_gaps_keep_input_order(catalog: MetadataCatalog) {
        let expected = [
            Label::from("teff"),
            Label::from("rice"),
            Label::from("barley"),
        ];
        assert_eq!(
            catalog.coverage_gaps(&expected),
            vec![Label::from("teff"), Label::from("barley")]
        );
    }

    #[rstest]
    fn labels_are_sorted(catalog: MetadataCatalog) {
        let labels: Vec<&str> = catalog.labels().into_iter().map(Label::as_str).collect();
        assert_eq!(labels, ["lentil", "rice"]);
    }

    #[rstest]
    fn range_fit_ignores_unrecorded_features() {
        let record = MetadataRecord::new("Loam", "Rabi", "90 days", "")
            .with_optimal_range(FeatureName::Rainfall, FeatureRange::new(60.0, 110.0))
            .with_optimal_range(FeatureName::Temperature, FeatureRange::new(18.0, 22.0));
        let features = FeatureVector::new(500.0, 0.0, 0.0, 25.0, 0.0, 0.0, 100.0);

        let deviations = record.range_fit(&features);

        assert_eq!(
            deviations,
            vec![RangeDeviation {
                feature: FeatureName::Temperature,
                value: 25.0,
                range: FeatureRange::new(18.0, 22.0),
            }]
        );
    }
}
