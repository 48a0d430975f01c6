//! On-disk shape of a crop catalogue and its conversion into the core model.

use std::collections::BTreeMap;

use agridash_core::{FeatureName, FeatureRange, Label, MetadataCatalog, MetadataRecord};
use serde::{Deserialize, Serialize};

use crate::CatalogError;

/// Catalogue format version understood by this crate.
pub const SUPPORTED_VERSION: u32 = 1;

/// Serialised catalogue: a format version plus one entry per crop label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Format version; only [`SUPPORTED_VERSION`] is accepted.
    pub version: u32,
    /// Entries keyed by classifier label.
    pub crops: BTreeMap<String, CropEntry>,
}

/// Agronomic metadata for one crop as stored in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropEntry {
    /// Suitable soil types.
    pub soil: String,
    /// Growing season.
    pub season: String,
    /// Typical time to harvest.
    pub cycle: String,
    /// Free-form cultivation notes.
    pub notes: String,
    /// `[low, high]` bands keyed by feature name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub optimal_ranges: BTreeMap<String, [f64; 2]>,
}

impl CatalogDocument {
    /// Validate the document and build the in-memory catalogue.
    ///
    /// # Errors
    /// Returns [`CatalogError`] when the version is unsupported, a label is
    /// empty, or an optimal range names an unknown feature or is malformed.
    pub fn into_catalog(self) -> Result<MetadataCatalog, CatalogError> {
        if self.version != SUPPORTED_VERSION {
            return Err(CatalogError::UnsupportedVersion {
                found: self.version,
                supported: SUPPORTED_VERSION,
            });
        }
        self.crops
            .into_iter()
            .map(|(crop, entry)| {
                let trimmed = crop.trim();
                if trimmed.is_empty() {
                    return Err(CatalogError::EmptyLabel);
                }
                let record = entry.into_record(trimmed)?;
                Ok((Label::new(trimmed), record))
            })
            .collect()
    }
}

impl CropEntry {
    fn into_record(self, crop: &str) -> Result<MetadataRecord, CatalogError> {
        let mut record = MetadataRecord::new(self.soil, self.season, self.cycle, self.notes);
        for (key, [low, high]) in self.optimal_ranges {
            let feature: FeatureName =
                key.parse().map_err(|_| CatalogError::UnknownFeature {
                    crop: crop.to_owned(),
                    key: key.clone(),
                })?;
            let range = FeatureRange::new(low, high);
            if !range.is_well_formed() {
                return Err(CatalogError::InvalidRange {
                    crop: crop.to_owned(),
                    feature,
                    low,
                    high,
                });
            }
            record = record.with_optimal_range(feature, range);
        }
        Ok(record)
    }
}

impl From<&MetadataCatalog> for CatalogDocument {
    fn from(catalog: &MetadataCatalog) -> Self {
        let crops = catalog
            .labels()
            .into_iter()
            .filter_map(|label| {
                let record = catalog.lookup(label).record()?;
                Some((label.as_str().to_owned(), CropEntry::from(record)))
            })
            .collect();
        Self {
            version: SUPPORTED_VERSION,
            crops,
        }
    }
}

impl From<&MetadataRecord> for CropEntry {
    fn from(record: &MetadataRecord) -> Self {
        Self {
            soil: record.soil_description().to_owned(),
            season: record.season().to_owned(),
            cycle: record.growth_cycle().to_owned(),
            notes: record.notes().to_owned(),
            optimal_ranges: record
                .optimal_ranges()
                .iter()
                .map(|(feature, range)| (feature.as_str().to_owned(), [range.low, range.high]))
                .collect(),
        }
    }
}
