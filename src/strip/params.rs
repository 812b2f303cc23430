//! Strip parameters and their validation

use std::fmt;

use crate::error::{Result, StripError};
use crate::integration::SamplingConfiguration;

/// Ratio between angular and width resolution
const WIDTH_DIVISOR: usize = 5;

/// Validated Möbius strip parameters `(R, w, n)`
///
/// - `radius` R: center radius, finite and > 0
/// - `width` w: strip width, finite and > 0
/// - `resolution` n: angular resolution, ≥ 2
///
/// Width resolution is derived as `floor(n/5)`, clamped to at least 1 so a
/// small `n` never yields an empty width axis.
///
/// # Example
///
/// ```rust
/// use mobius_rs::strip::StripParameters;
///
/// let params = StripParameters::new(2.0, 1.0, 100)?;
/// assert_eq!(params.width_resolution(), 20);
///
/// let coarse = StripParameters::new(2.0, 1.0, 3)?;
/// assert_eq!(coarse.width_resolution(), 1);
///
/// assert!(StripParameters::new(-2.0, 1.0, 100).is_err());
/// # Ok::<(), mobius_rs::StripError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripParameters {
    radius: f64,
    width: f64,
    resolution: usize,
}

impl StripParameters {
    /// Validate and create parameters
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when `radius` or `width` is not a positive finite
    /// number, or `resolution < 2`.
    pub fn new(radius: f64, width: f64, resolution: usize) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(StripError::invalid_param(
                "radius",
                radius,
                "must be a positive finite number",
            ));
        }
        if !width.is_finite() || width <= 0.0 {
            return Err(StripError::invalid_param(
                "width",
                width,
                "must be a positive finite number",
            ));
        }
        if resolution < 2 {
            return Err(StripError::invalid_param(
                "resolution",
                resolution,
                "need at least 2 angular samples",
            ));
        }

        Ok(Self { radius, width, resolution })
    }

    /// Center radius R
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Strip width w
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Angular resolution n
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Width resolution `max(floor(n/5), 1)`
    pub fn width_resolution(&self) -> usize {
        (self.resolution / WIDTH_DIVISOR).max(1)
    }

    /// Step counts for the integrators: `(n, width_resolution)`
    pub fn sampling(&self) -> SamplingConfiguration {
        SamplingConfiguration::new(self.resolution, self.width_resolution())
    }
}

impl Default for StripParameters {
    /// R = 2, w = 1, n = 50
    fn default() -> Self {
        Self {
            radius: 2.0,
            width: 1.0,
            resolution: 50,
        }
    }
}

impl fmt::Display for StripParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R={}, w={}, n={}", self.radius, self.width, self.resolution)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_parameters() {
        let params = StripParameters::new(2.0, 1.0, 100).unwrap();
        assert_eq!(params.radius(), 2.0);
        assert_eq!(params.width(), 1.0);
        assert_eq!(params.resolution(), 100);
        assert_eq!(params.width_resolution(), 20);
    }

    #[test]
    fn test_width_resolution_floors() {
        assert_eq!(StripParameters::new(2.0, 1.0, 54).unwrap().width_resolution(), 10);
        assert_eq!(StripParameters::new(2.0, 1.0, 5).unwrap().width_resolution(), 1);
    }

    #[test]
    fn test_width_resolution_clamped_for_small_n() {
        for n in 2..5 {
            assert_eq!(StripParameters::new(2.0, 1.0, n).unwrap().width_resolution(), 1);
        }
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        for radius in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = StripParameters::new(radius, 1.0, 100).unwrap_err();
            assert!(matches!(err, StripError::InvalidParameter { name: "radius", .. }));
        }
    }

    #[test]
    fn test_rejects_non_positive_width() {
        for width in [0.0, -0.5, f64::NAN] {
            let err = StripParameters::new(2.0, width, 100).unwrap_err();
            assert!(matches!(err, StripError::InvalidParameter { name: "width", .. }));
        }
    }

    #[test]
    fn test_rejects_small_resolution() {
        for n in [0, 1] {
            let err = StripParameters::new(2.0, 1.0, n).unwrap_err();
            assert!(matches!(err, StripError::InvalidParameter { name: "resolution", .. }));
        }
    }

    #[test]
    fn test_sampling_configuration() {
        let params = StripParameters::new(2.0, 1.0, 100).unwrap();
        assert_eq!(params.sampling(), SamplingConfiguration::new(100, 20));
    }

    #[test]
    fn test_default_and_display() {
        let params = StripParameters::default();
        assert_eq!(params.to_string(), "R=2, w=1, n=50");
    }
}
