//! Soil and climate measurements supplied with a recommendation request.
//!
//! A [`FeatureVector`] carries the seven inputs the classifier was trained
//! on. Values outside the documented domains are kept as-is; callers that
//! want to flag them can ask [`FeatureVector::out_of_domain`].

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of features consumed by the classifier.
pub const FEATURE_COUNT: usize = 7;

/// Names of the seven classifier inputs, in model column order.
///
/// # Examples
/// ```
/// use agridash_core::FeatureName;
///
/// assert_eq!(FeatureName::Nitrogen.as_str(), "N");
/// assert_eq!("rainfall".parse::<FeatureName>(), Ok(FeatureName::Rainfall));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FeatureName {
    /// Soil nitrogen content.
    #[cfg_attr(feature = "serde", serde(rename = "N"))]
    Nitrogen,
    /// Soil phosphorus content.
    #[cfg_attr(feature = "serde", serde(rename = "P"))]
    Phosphorus,
    /// Soil potassium content.
    #[cfg_attr(feature = "serde", serde(rename = "K"))]
    Potassium,
    /// Air temperature in degrees Celsius.
    #[cfg_attr(feature = "serde", serde(rename = "temperature"))]
    Temperature,
    /// Relative humidity in percent.
    #[cfg_attr(feature = "serde", serde(rename = "humidity"))]
    Humidity,
    /// Soil pH.
    #[cfg_attr(feature = "serde", serde(rename = "ph"))]
    Ph,
    /// Rainfall in millimetres.
    #[cfg_attr(feature = "serde", serde(rename = "rainfall"))]
    Rainfall,
}

impl FeatureName {
    /// All features in model column order.
    pub const ALL: [Self; FEATURE_COUNT] = [
        Self::Nitrogen,
        Self::Phosphorus,
        Self::Potassium,
        Self::Temperature,
        Self::Humidity,
        Self::Ph,
        Self::Rainfall,
    ];

    /// Return the short key used in datasets and catalogue files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nitrogen => "N",
            Self::Phosphorus => "P",
            Self::Potassium => "K",
            Self::Temperature => "temperature",
            Self::Humidity => "humidity",
            Self::Ph => "ph",
            Self::Rainfall => "rainfall",
        }
    }

    /// Zero-based column position of the feature.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Nitrogen => 0,
            Self::Phosphorus => 1,
            Self::Potassium => 2,
            Self::Temperature => 3,
            Self::Humidity => 4,
            Self::Ph => 5,
            Self::Rainfall => 6,
        }
    }

    /// Documented input domain for the feature.
    ///
    /// The engine never clamps to these bounds; they describe the range the
    /// input widgets offer.
    #[must_use]
    pub const fn domain(self) -> FeatureRange {
        let (low, high) = match self {
            Self::Nitrogen | Self::Phosphorus => (0.0, 140.0),
            Self::Potassium => (0.0, 200.0),
            Self::Temperature => (0.0, 50.0),
            Self::Humidity => (0.0, 100.0),
            Self::Ph => (0.0, 14.0),
            Self::Rainfall => (0.0, 500.0),
        };
        FeatureRange { low, high }
    }
}

impl fmt::Display for FeatureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown feature key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown feature `{key}`")]
pub struct UnknownFeatureError {
    /// Key that failed to parse.
    pub key: String,
}

impl FromStr for FeatureName {
    type Err = UnknownFeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|feature| feature.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownFeatureError { key: s.to_owned() })
    }
}

/// Inclusive numeric band `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FeatureRange {
    /// Lower bound, inclusive.
    pub low: f64,
    /// Upper bound, inclusive.
    pub high: f64,
}

impl FeatureRange {
    /// Construct a range from its bounds.
    #[must_use]
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Report whether `value` lies within the band.
    ///
    /// # Examples
    /// ```
    /// use agridash_core::FeatureRange;
    ///
    /// let range = FeatureRange::new(5.0, 7.5);
    /// assert!(range.contains(7.5));
    /// assert!(!range.contains(8.0));
    /// ```
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        (self.low..=self.high).contains(&value)
    }

    /// Report whether both bounds are finite and ordered.
    #[must_use]
    pub const fn is_well_formed(self) -> bool {
        self.low.is_finite() && self.high.is_finite() && self.low <= self.high
    }
}

/// The seven soil and climate measurements for one request.
///
/// Fields are private so a vector cannot change after construction.
///
/// # Examples
/// ```
/// use agridash_core::{FeatureName, FeatureVector};
///
/// let features = FeatureVector::new(90.0, 42.0, 43.0, 20.8, 82.0, 6.5, 202.9);
/// assert_eq!(features.get(FeatureName::Ph), 6.5);
/// assert!(features.out_of_domain().is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FeatureVector {
    #[cfg_attr(feature = "serde", serde(rename = "N"))]
    nitrogen: f64,
    #[cfg_attr(feature = "serde", serde(rename = "P"))]
    phosphorus: f64,
    #[cfg_attr(feature = "serde", serde(rename = "K"))]
    potassium: f64,
    temperature: f64,
    humidity: f64,
    ph: f64,
    rainfall: f64,
}

impl FeatureVector {
    /// Construct a vector from the seven measurements in model column order.
    #[must_use]
    pub const fn new(
        nitrogen: f64,
        phosphorus: f64,
        potassium: f64,
        temperature: f64,
        humidity: f64,
        ph: f64,
        rainfall: f64,
    ) -> Self {
        Self {
            nitrogen,
            phosphorus,
            potassium,
            temperature,
            humidity,
            ph,
            rainfall,
        }
    }

    /// Construct a vector from an array in model column order.
    #[must_use]
    pub const fn from_array(values: [f64; FEATURE_COUNT]) -> Self {
        let [nitrogen, phosphorus, potassium, temperature, humidity, ph, rainfall] = values;
        Self::new(
            nitrogen,
            phosphorus,
            potassium,
            temperature,
            humidity,
            ph,
            rainfall,
        )
    }

    /// Return the measurements in model column order.
    #[must_use]
    pub const fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.nitrogen,
            self.phosphorus,
            self.potassium,
            self.temperature,
            self.humidity,
            self.ph,
            self.rainfall,
        ]
    }

    /// Return a single measurement.
    #[must_use]
    pub const fn get(&self, feature: FeatureName) -> f64 {
        match feature {
            FeatureName::Nitrogen => self.nitrogen,
            FeatureName::Phosphorus => self.phosphorus,
            FeatureName::Potassium => self.potassium,
            FeatureName::Temperature => self.temperature,
            FeatureName::Humidity => self.humidity,
            FeatureName::Ph => self.ph,
            FeatureName::Rainfall => self.rainfall,
        }
    }

    /// List the features whose value falls outside [`FeatureName::domain`].
    #[must_use]
    pub fn out_of_domain(&self) -> Vec<FeatureName> {
        FeatureName::ALL
            .into_iter()
            .filter(|&feature| !feature.domain().contains(self.get(feature)))
            .collect()
    }
}
