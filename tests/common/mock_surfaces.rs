//! Surfaces with closed-form area and boundary length

use mobius_rs::surface::{ParameterDomain, ParametricSurface};
use nalgebra::{Point3, Vector3};
use std::f64::consts::{PI, TAU};

/// Open cylinder r(u, v) = (ρ cos u, ρ sin u, v), v ∈ [0, h]
///
/// |∂r/∂u × ∂r/∂v| ≡ ρ, so every Riemann sum is exact: A = 2πρh.
pub struct Cylinder {
    pub radius: f64,
    pub height: f64,
}

impl Cylinder {
    pub fn new(radius: f64, height: f64) -> Self {
        Self { radius, height }
    }

    pub fn exact_area(&self) -> f64 {
        TAU * self.radius * self.height
    }
}

impl ParametricSurface for Cylinder {
    fn position(&self, u: f64, v: f64) -> Point3<f64> {
        Point3::new(self.radius * u.cos(), self.radius * u.sin(), v)
    }

    fn tangent_u(&self, u: f64, _v: f64) -> Vector3<f64> {
        Vector3::new(-self.radius * u.sin(), self.radius * u.cos(), 0.0)
    }

    fn tangent_v(&self, _u: f64, _v: f64) -> Vector3<f64> {
        Vector3::new(0.0, 0.0, 1.0)
    }

    fn u_domain(&self) -> ParameterDomain {
        ParameterDomain::new(0.0, TAU)
    }

    fn v_domain(&self) -> ParameterDomain {
        ParameterDomain::new(0.0, self.height)
    }

    fn name(&self) -> &str {
        "Cylinder"
    }
}

/// Flat annulus r(u, v) = ((R + v) cos u, (R + v) sin u, 0), v ∈ [-w/2, w/2]
///
/// The element is R + v, linear in v: the left sum over `m` width steps
/// undershoots the exact area 2πRw by exactly πw²/m.
pub struct FlatAnnulus {
    pub radius: f64,
    pub width: f64,
}

impl FlatAnnulus {
    pub fn new(radius: f64, width: f64) -> Self {
        Self { radius, width }
    }

    pub fn exact_area(&self) -> f64 {
        TAU * self.radius * self.width
    }

    /// Circumference of the outer rim v = w/2
    pub fn exact_outer_rim(&self) -> f64 {
        2.0 * PI * (self.radius + self.width / 2.0)
    }
}

impl ParametricSurface for FlatAnnulus {
    fn position(&self, u: f64, v: f64) -> Point3<f64> {
        let r = self.radius + v;
        Point3::new(r * u.cos(), r * u.sin(), 0.0)
    }

    fn tangent_u(&self, u: f64, v: f64) -> Vector3<f64> {
        let r = self.radius + v;
        Vector3::new(-r * u.sin(), r * u.cos(), 0.0)
    }

    fn tangent_v(&self, u: f64, _v: f64) -> Vector3<f64> {
        Vector3::new(u.cos(), u.sin(), 0.0)
    }

    fn u_domain(&self) -> ParameterDomain {
        ParameterDomain::new(0.0, TAU)
    }

    fn v_domain(&self) -> ParameterDomain {
        let half = self.width / 2.0;
        ParameterDomain::new(-half, half)
    }

    fn name(&self) -> &str {
        "Flat Annulus"
    }
}
