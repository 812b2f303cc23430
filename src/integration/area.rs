//! Surface-area integrator
//!
//! # Mathematical Background
//!
//! The area of a parametric surface r(u, v) over a rectangle of parameters is
//!
//! ```text
//! A = ∫∫ |∂r/∂u × ∂r/∂v| du dv
//! ```
//!
//! This module approximates it with a left Riemann sum: the rectangle is cut
//! into `angular_steps × width_steps` cells and each cell contributes the
//! surface element at its lower-left corner times the cell area.
//!
//! ```text
//! du  = (u₁ - u₀) / N_u          dv  = (v₁ - v₀) / N_v
//! u_i = u₀ + i·du, i ∈ [0, N_u)  v_j = v₀ + j·dv, j ∈ [0, N_v)
//! A  ≈ Σ_i Σ_j |∂r/∂u × ∂r/∂v|(u_i, v_j) · du · dv
//! ```
//!
//! The right and top edges of the rectangle are never sampled, unlike the
//! mesh generator which includes both endpoints.
//!
//! # Characteristics
//!
//! - **Order**: First-order in the step sizes
//! - **Complexity**: N_u · N_v surface-element evaluations
//! - **Memory**: O(1)
//! - **Convergence**: monotone refinement toward the true area as N grows

use tracing::debug;

use crate::error::Result;
use crate::integration::{self, Integrator, SamplingConfiguration};
use crate::surface::ParametricSurface;

// =================================================================================================
// Surface Area Integrator
// =================================================================================================

/// Left-Riemann surface-area integrator
///
/// # Determinism
///
/// The sequential path sums cells row by row (u outer, v inner) into a single
/// accumulator, so repeated calls are bit-identical.
///
/// With the `parallel` feature and a grid larger than
/// [`parallel_threshold()`](crate::integration::parallel_threshold), each
/// u-row is summed sequentially and the row sums are reduced by Rayon. The
/// summation order then differs from the sequential path, which can change
/// the least-significant bits of the result (floating-point addition is not
/// associative).
///
/// # Example
///
/// ```rust
/// use mobius_rs::integration::{Integrator, SamplingConfiguration, SurfaceAreaIntegrator};
/// use mobius_rs::surface::MobiusSurface;
///
/// let integrator = SurfaceAreaIntegrator::new();
/// assert_eq!(integrator.name(), "Left Riemann Surface Area");
///
/// let area = integrator.integrate(&MobiusSurface::new(2.0, 1.0), &SamplingConfiguration::new(100, 20))?;
/// assert!(area > 12.0 && area < 13.0);
/// # Ok::<(), mobius_rs::StripError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SurfaceAreaIntegrator;

impl SurfaceAreaIntegrator {
    /// Create a new surface-area integrator
    pub fn new() -> Self {
        Self
    }
}

/// Sum of one u-row of cells
#[cfg(feature = "parallel")]
#[inline]
fn row_sum(surface: &dyn ParametricSurface, u: f64, v0: f64, du: f64, dv: f64, width_steps: usize) -> f64 {
    let mut sum = 0.0;
    for j in 0..width_steps {
        let v = v0 + j as f64 * dv;
        sum += surface.surface_element(u, v) * du * dv;
    }
    sum
}

impl Integrator for SurfaceAreaIntegrator {
    fn integrate(&self, surface: &dyn ParametricSurface, config: &SamplingConfiguration) -> Result<f64> {
        config.validate()?;

        let u_domain = surface.u_domain();
        let v_domain = surface.v_domain();

        let du = u_domain.span() / config.angular_steps as f64;
        let dv = v_domain.span() / config.width_steps as f64;

        #[cfg(feature = "parallel")]
        if config.cell_count() > integration::parallel_threshold() {
            use rayon::prelude::*;

            let area: f64 = (0..config.angular_steps)
                .into_par_iter()
                .map(|i| {
                    let u = u_domain.start + i as f64 * du;
                    row_sum(surface, u, v_domain.start, du, dv, config.width_steps)
                })
                .sum();

            debug!(surface = surface.name(), cells = config.cell_count(), area, "surface area integrated (parallel)");
            return integration::validate_total("surface area", area);
        }

        let mut area = 0.0;
        for i in 0..config.angular_steps {
            let u = u_domain.start + i as f64 * du;
            for j in 0..config.width_steps {
                let v = v_domain.start + j as f64 * dv;
                area += surface.surface_element(u, v) * du * dv;
            }
        }

        debug!(surface = surface.name(), cells = config.cell_count(), du, dv, area, "surface area integrated");
        integration::validate_total("surface area", area)
    }

    fn name(&self) -> &str {
        "Left Riemann Surface Area"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
