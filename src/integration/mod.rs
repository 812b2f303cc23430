//! Numerical integrators
//!
//! This module provides the trait and implementations that turn a parametric
//! surface into scalar geometric quantities.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! 1. **Surface** (`ParametricSurface`) - WHAT to integrate
//!    - Surface map and its analytic tangents
//!    - Parameter domains
//!
//! 2. **Configuration** (`SamplingConfiguration`) - HOW finely to sample
//!    - Steps along u and along v
//!
//! 3. **Integrator** (`Integrator` trait) - The numerical method
//!    - Samples the surface, reduces to one number
//!    - Independent of the surface equations
//!
//! # Module Organization
//!
//! - **`traits`**: the `Integrator` trait
//! - **`sampling`**: `SamplingConfiguration` and `linspace`
//! - **`area`**: `SurfaceAreaIntegrator` (left Riemann sum of the surface element)
//! - **`edge`**: `EdgeLengthIntegrator` (polyline length along `v = w/2`)
//!
//! # Quick Start Example
//!
//! ```rust
//! use mobius_rs::integration::{
//!     EdgeLengthIntegrator, Integrator, SamplingConfiguration, SurfaceAreaIntegrator,
//! };
//! use mobius_rs::surface::MobiusSurface;
//!
//! let surface = MobiusSurface::new(2.0, 1.0);
//! let config = SamplingConfiguration::new(100, 20);
//!
//! let area = SurfaceAreaIntegrator::new().integrate(&surface, &config)?;
//! let edge = EdgeLengthIntegrator::new().integrate(&surface, &config)?;
//!
//! assert!(area > 0.0 && edge > 0.0);
//! # Ok::<(), mobius_rs::StripError>(())
//! ```
//!
//! # Error Handling
//!
//! Integrators return [`Result`](crate::Result). Possible errors:
//! - Invalid configuration (a zero step count)
//! - Non-finite total (NaN or infinity from the surface equations)

// =================================================================================================
// Module Declarations
// =================================================================================================
mod traits;
mod sampling;
mod area;
mod edge;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// The threshold is stored in an AtomicUsize so that benchmarks and tests can
// change it at runtime. Relaxed ordering is sufficient: the value is a
// performance hint, not a synchronisation point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of grid cells above which the area sum goes parallel.
const DEFAULT_PARALLEL_THRESHOLD: usize = 4_999;

/// Runtime-configurable parallel-execution threshold.
static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// [`SurfaceAreaIntegrator`] sums sequentially when the grid has at most this
/// many cells, and hands rows to Rayon above it, but only when the crate is
/// compiled with the `parallel` feature.
///
/// # Example
///
/// ```rust
/// use mobius_rs::integration::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`.
///
/// # Example
///
/// ```rust
/// use mobius_rs::integration::{parallel_threshold, set_parallel_threshold};
///
/// let previous = parallel_threshold();
/// set_parallel_threshold(20_000);
/// assert_eq!(parallel_threshold(), 20_000);
///
/// set_parallel_threshold(previous);
/// ```
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// RAII guard that saves the current threshold on construction and restores
/// it on drop.
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
}

#[cfg(test)]
impl ThresholdGuard {
    /// Set the threshold to `new_value` and return a guard that will
    /// restore the previous value on drop.
    pub(crate) fn save(new_value: usize) -> Self {
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::Integrator;
pub use sampling::{linspace, SamplingConfiguration};
pub use area::SurfaceAreaIntegrator;
pub use edge::{sample_boundary, EdgeLengthIntegrator, EdgePolyline};

// =================================================================================================
// Helper Functions
// =================================================================================================

use crate::error::{Result, StripError};

/// Reject NaN and infinite integration results
pub(crate) fn validate_total(quantity: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(StripError::NonFinite { quantity, value });
    }
    Ok(value)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold_value() {
        assert_eq!(DEFAULT_PARALLEL_THRESHOLD, 4_999);
    }

    #[test]
    fn test_get_and_set_threshold() {
        let _guard = ThresholdGuard::save(500);
        assert_eq!(parallel_threshold(), 500);
    }

    #[test]
    #[should_panic(expected = "parallel threshold must be at least 1")]
    fn test_zero_threshold_panics() {
        set_parallel_threshold(0);
    }

    #[test]
    fn test_validate_total() {
        assert_eq!(validate_total("area", 1.5).unwrap(), 1.5);
        assert!(validate_total("area", f64::NAN).is_err());
        assert!(validate_total("area", f64::INFINITY).is_err());
    }
}
