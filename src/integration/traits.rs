//! Numerical integrator trait
//!
//! # Stability Guarantee
//!
//! - `Integrator` trait: stable, new quadratures are new implementations
//! - `SamplingConfiguration`: fields won't be removed

use crate::error::Result;
use crate::integration::SamplingConfiguration;
use crate::surface::ParametricSurface;

/// Trait for numerical integrators over a parametric surface
///
/// # Responsibility
/// Samples a [`ParametricSurface`] according to a [`SamplingConfiguration`]
/// and reduces the samples to a single scalar.
///
/// # Example
///
/// ```rust
/// use mobius_rs::integration::{Integrator, SamplingConfiguration, SurfaceAreaIntegrator};
/// use mobius_rs::surface::MobiusSurface;
///
/// let surface = MobiusSurface::new(2.0, 1.0);
/// let config = SamplingConfiguration::new(100, 20);
///
/// let area = SurfaceAreaIntegrator::new().integrate(&surface, &config)?;
/// assert!(area > 0.0);
/// # Ok::<(), mobius_rs::StripError>(())
/// ```
pub trait Integrator: Send + Sync {
    /// Integrate over `surface` with the given step counts
    ///
    /// # Errors
    /// - `InvalidParameter` when the configuration has a zero step count
    /// - `NonFinite` when the sum is NaN or infinite
    fn integrate(&self, surface: &dyn ParametricSurface, config: &SamplingConfiguration) -> Result<f64>;

    /// Integrator name (used to display and logging)
    fn name(&self) -> &str;
}
