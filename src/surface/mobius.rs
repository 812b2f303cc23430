//! Möbius strip parametrization
//!
//! # Equations
//!
//! For center radius `R` and a point `(u, v)`, `u ∈ [0, 2π]` in radians and
//! `v ∈ [-w/2, w/2]` across the strip:
//!
//! ```text
//! x(u, v) = (R + v·cos(u/2))·cos(u)
//! y(u, v) = (R + v·cos(u/2))·sin(u)
//! z(u, v) = v·sin(u/2)
//! ```
//!
//! The half-angle `u/2` rotates the cross-section by π over one turn, which
//! is what glues the strip with a twist.
//!
//! # Partial Derivatives
//!
//! ```text
//! ∂r/∂u = ( -(R + v·cos(u/2))·sin(u) - (v/2)·sin(u/2)·cos(u),
//!            (R + v·cos(u/2))·cos(u) - (v/2)·sin(u/2)·sin(u),
//!            (v/2)·cos(u/2) )
//!
//! ∂r/∂v = ( cos(u/2)·cos(u), cos(u/2)·sin(u), sin(u/2) )
//! ```
//!
//! Both are closed-form; nothing is differentiated numerically.

use std::f64::consts::TAU;

use nalgebra::{Point3, Vector3};

use super::traits::{ParameterDomain, ParametricSurface};

/// Möbius strip surface map
///
/// The map is total: any real radius and width are accepted here, including
/// `width = 0` (the strip collapses to a circle of radius `R`). Range checks
/// belong to [`StripParameters`](crate::strip::StripParameters).
///
/// # Example
///
/// ```rust
/// use mobius_rs::surface::{MobiusSurface, ParametricSurface};
///
/// let surface = MobiusSurface::new(2.0, 1.0);
/// let p = surface.position(0.0, 0.0);
/// assert_eq!(p.x, 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MobiusSurface {
    radius: f64,
    width: f64,
}

impl MobiusSurface {
    /// Create a Möbius surface with center radius `radius` and strip width `width`
    pub fn new(radius: f64, width: f64) -> Self {
        Self { radius, width }
    }

    /// Center radius R
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Strip width w
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Distance from the z axis before rotation: R + v·cos(u/2)
    #[inline]
    fn ring(&self, u: f64, v: f64) -> f64 {
        self.radius + v * (u / 2.0).cos()
    }
}

impl ParametricSurface for MobiusSurface {
    fn position(&self, u: f64, v: f64) -> Point3<f64> {
        let ring = self.ring(u, v);
        Point3::new(ring * u.cos(), ring * u.sin(), v * (u / 2.0).sin())
    }

    fn tangent_u(&self, u: f64, v: f64) -> Vector3<f64> {
        let ring = self.ring(u, v);
        let (sin_half, cos_half) = (u / 2.0).sin_cos();
        let (sin_u, cos_u) = u.sin_cos();

        Vector3::new(
            -ring * sin_u - (v / 2.0) * sin_half * cos_u,
            ring * cos_u - (v / 2.0) * sin_half * sin_u,
            (v / 2.0) * cos_half,
        )
    }

    fn tangent_v(&self, u: f64, _v: f64) -> Vector3<f64> {
        let (sin_half, cos_half) = (u / 2.0).sin_cos();
        let (sin_u, cos_u) = u.sin_cos();

        Vector3::new(cos_half * cos_u, cos_half * sin_u, sin_half)
    }

    fn u_domain(&self) -> ParameterDomain {
        ParameterDomain::new(0.0, TAU)
    }

    fn v_domain(&self) -> ParameterDomain {
        ParameterDomain::new(-self.width / 2.0, self.width / 2.0)
    }

    fn name(&self) -> &str {
        "Mobius Strip"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
