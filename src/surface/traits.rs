//! Parametric surface trait
//!
//! This module defines the core API for parametric surfaces:
//! - `ParametricSurface`: trait for every surface map r(u, v)
//! - `ParameterDomain`: closed interval of one parameter

use nalgebra::{Point3, Vector3};

// =================================================================================================
// Parameter Domain
// =================================================================================================

/// Closed interval `[start, end]` of one surface parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterDomain {
    /// Lower bound
    pub start: f64,

    /// Upper bound
    pub end: f64,
}

impl ParameterDomain {
    /// Create a domain from its bounds
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Length of the interval (`end - start`)
    pub fn span(&self) -> f64 {
        self.end - self.start
    }
}

// =================================================================================================
// Parametric Surface Trait
// =================================================================================================

/// Trait for parametric surfaces r(u, v) → ℝ³
///
/// # Responsibility
/// Evaluates the surface map and its two analytic partial derivatives.
/// Does NOT integrate anything (that's the Integrator's job).
///
/// The surface provides the "geometry" (equations), the Integrator provides
/// the "numerics" (how the domain is sampled and summed).
///
/// # Contract
/// Implementations are pure functions of `(u, v)`: no side effects, no
/// error conditions, the same input always yields the same output.
pub trait ParametricSurface: Send + Sync {
    /// Position r(u, v)
    fn position(&self, u: f64, v: f64) -> Point3<f64>;

    /// Tangent along u: ∂r/∂u
    fn tangent_u(&self, u: f64, v: f64) -> Vector3<f64>;

    /// Tangent along v: ∂r/∂v
    fn tangent_v(&self, u: f64, v: f64) -> Vector3<f64>;

    /// Domain of the first parameter
    fn u_domain(&self) -> ParameterDomain;

    /// Domain of the second parameter
    fn v_domain(&self) -> ParameterDomain;

    /// Name of the surface (used to display and logging)
    fn name(&self) -> &str;

    /// Surface element |∂r/∂u × ∂r/∂v|
    ///
    /// Local area density used by surface integration.
    fn surface_element(&self, u: f64, v: f64) -> f64 {
        self.tangent_u(u, v).cross(&self.tangent_v(u, v)).norm()
    }

    /// Value of `v` at which the boundary curve is traced
    ///
    /// Defaults to the upper end of the v domain.
    fn boundary_v(&self) -> f64 {
        self.v_domain().end
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // Unit square in the z = 0 plane
    struct Plane;

    impl ParametricSurface for Plane {
        fn position(&self, u: f64, v: f64) -> Point3<f64> {
            Point3::new(u, v, 0.0)
        }

        fn tangent_u(&self, _u: f64, _v: f64) -> Vector3<f64> {
            Vector3::x()
        }

        fn tangent_v(&self, _u: f64, _v: f64) -> Vector3<f64> {
            Vector3::y()
        }

        fn u_domain(&self) -> ParameterDomain {
            ParameterDomain::new(0.0, 1.0)
        }

        fn v_domain(&self) -> ParameterDomain {
            ParameterDomain::new(-0.5, 0.5)
        }

        fn name(&self) -> &str {
            "Plane"
        }
    }

    #[test]
    fn test_domain_span() {
        let domain = ParameterDomain::new(-0.5, 1.5);
        assert_eq!(domain.span(), 2.0);
    }

    #[test]
    fn test_default_surface_element() {
        assert_eq!(Plane.surface_element(0.3, 0.1), 1.0);
    }

    #[test]
    fn test_default_boundary_is_upper_v() {
        assert_eq!(Plane.boundary_v(), 0.5);
    }
}
