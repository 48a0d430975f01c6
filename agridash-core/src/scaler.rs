//! Standardising normalizer driven by externally fitted parameters.

use thiserror::Error;

use crate::features::FEATURE_COUNT;
use crate::{FeatureName, FeatureNormalizer, FeatureVector, ProviderError, ScaledFeatures};

/// Errors raised when scaler parameters are unusable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScalerError {
    /// A mean or scale was `NaN` or infinite.
    #[error("{parameter} for feature {feature} is not finite: {value}")]
    NonFinite {
        /// Feature whose parameter is broken.
        feature: FeatureName,
        /// Either `"mean"` or `"scale"`.
        parameter: &'static str,
        /// Offending value.
        value: f64,
    },
    /// A scale of zero would divide by zero.
    #[error("scale for feature {feature} must be non-zero")]
    ZeroScale {
        /// Feature whose scale is zero.
        feature: FeatureName,
    },
}

/// Applies `(x - mean) / scale` per feature.
///
/// Means and scales come from fitting outside the engine; this type only
/// validates and applies them.
///
/// # Examples
/// ```
/// use agridash_core::{FeatureNormalizer, FeatureVector, StandardScaler};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let scaler = StandardScaler::new([50.0; 7], [10.0; 7])?;
/// let scaled = scaler.normalize(&FeatureVector::from_array([60.0; 7]))?;
/// assert_eq!(scaled.as_slice(), &[1.0; 7]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    means: [f64; FEATURE_COUNT],
    scales: [f64; FEATURE_COUNT],
}

impl StandardScaler {
    /// Validate and store fitted parameters in model column order.
    ///
    /// # Errors
    /// Returns [`ScalerError`] when any parameter is non-finite or a scale is
    /// zero.
    pub fn new(
        means: [f64; FEATURE_COUNT],
        scales: [f64; FEATURE_COUNT],
    ) -> Result<Self, ScalerError> {
        for ((feature, mean), scale) in FeatureName::ALL.into_iter().zip(means).zip(scales) {
            if !mean.is_finite() {
                return Err(ScalerError::NonFinite {
                    feature,
                    parameter: "mean",
                    value: mean,
                });
            }
            if !scale.is_finite() {
                return Err(ScalerError::NonFinite {
                    feature,
                    parameter: "scale",
                    value: scale,
                });
            }
            if scale == 0.0 {
                return Err(ScalerError::ZeroScale { feature });
            }
        }
        Ok(Self { means, scales })
    }

    /// Fitted means in model column order.
    #[must_use]
    pub const fn means(&self) -> &[f64; FEATURE_COUNT] {
        &self.means
    }

    /// Fitted scales in model column order.
    #[must_use]
    pub const fn scales(&self) -> &[f64; FEATURE_COUNT] {
        &self.scales
    }
}

impl FeatureNormalizer for StandardScaler {
    #[expect(
        clippy::float_arithmetic,
        reason = "standardisation subtracts the mean and divides by the scale"
    )]
    fn normalize(&self, features: &FeatureVector) -> Result<ScaledFeatures, ProviderError> {
        let scaled = features
            .to_array()
            .into_iter()
            .zip(self.means)
            .zip(self.scales)
            .map(|((value, mean), scale)| (value - mean) / scale)
            .collect();
        Ok(ScaledFeatures::new(scaled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "tests compare floating point values"
    )]
    fn standardises_each_column_independently() {
        let scaler = StandardScaler::new(
            [50.0, 53.0, 48.0, 25.6, 71.5, 6.5, 103.5],
            [36.9, 32.9, 50.6, 5.1, 22.3, 0.8, 55.0],
        )
        .expect("valid parameters");
        let features = FeatureVector::new(50.0, 85.9, 48.0, 30.7, 71.5, 7.3, 158.5);

        let scaled = scaler.normalize(&features).expect("scaling succeeds");

        let expected = [0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 1.0];
        for (actual, wanted) in scaled.as_slice().iter().zip(expected) {
            assert!((actual - wanted).abs() < 1e-9, "got {actual}, want {wanted}");
        }
    }

    #[rstest]
    fn rejects_zero_scale() {
        let mut scales = [1.0; FEATURE_COUNT];
        scales[5] = 0.0;
        let err = StandardScaler::new([0.0; FEATURE_COUNT], scales).expect_err("zero scale");
        assert_eq!(
            err,
            ScalerError::ZeroScale {
                feature: FeatureName::Ph
            }
        );
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_non_finite_means(#[case] bad: f64) {
        let mut means = [0.0; FEATURE_COUNT];
        means[0] = bad;
        let err = StandardScaler::new(means, [1.0; FEATURE_COUNT]).expect_err("bad mean");
        assert!(matches!(
            err,
            ScalerError::NonFinite {
                feature: FeatureName::Nitrogen,
                parameter: "mean",
                ..
            }
        ));
    }
}
