//! Möbius strip model
//!
//! `MobiusStrip` ties the validated parameters, the surface map and the
//! generated mesh together, and exposes the two integrated quantities.
//!
//! # Example
//!
//! ```rust
//! use mobius_rs::strip::MobiusStrip;
//!
//! let strip = MobiusStrip::new(2.0, 1.0, 100)?;
//! assert_eq!(strip.mesh().shape(), (100, 20));
//!
//! let summary = strip.summary()?;
//! println!("{summary}");
//! # Ok::<(), mobius_rs::StripError>(())
//! ```

use std::fmt;

use tracing::info;

use crate::error::Result;
use crate::integration::{
    sample_boundary, EdgeLengthIntegrator, EdgePolyline, Integrator, SurfaceAreaIntegrator,
};
use crate::strip::{Mesh, ParameterGrid, StripParameters};
use crate::surface::MobiusSurface;

/// Number of points in the edge overlay handed to renderers
pub const EDGE_OVERLAY_SAMPLES: usize = 100;

// =================================================================================================
// Mobius Strip
// =================================================================================================

/// A Möbius strip sampled at a fixed resolution
///
/// The mesh is generated once at construction and never mutated. Surface
/// area and edge length are re-integrated on every call; nothing is cached.
#[derive(Debug, Clone)]
pub struct MobiusStrip {
    params: StripParameters,
    surface: MobiusSurface,
    mesh: Mesh,
}

impl MobiusStrip {
    /// Validate the parameters and generate the mesh
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when `radius ≤ 0`, `width ≤ 0`, either is not
    /// finite, or `resolution < 2`.
    pub fn new(radius: f64, width: f64, resolution: usize) -> Result<Self> {
        Ok(Self::from_parameters(StripParameters::new(radius, width, resolution)?))
    }

    /// Build from already validated parameters
    pub fn from_parameters(params: StripParameters) -> Self {
        let surface = MobiusSurface::new(params.radius(), params.width());
        let mesh = Mesh::generate(&surface, ParameterGrid::for_strip(&params));

        Self { params, surface, mesh }
    }

    /// Parameters the strip was built from
    pub fn parameters(&self) -> &StripParameters {
        &self.params
    }

    /// The underlying surface map
    pub fn surface(&self) -> &MobiusSurface {
        &self.surface
    }

    /// The mesh generated at construction
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Regenerate the mesh from the parameters
    ///
    /// Always equal to [`mesh()`](Self::mesh); returned as a fresh value.
    pub fn generate_mesh(&self) -> Mesh {
        Mesh::generate(&self.surface, ParameterGrid::for_strip(&self.params))
    }

    /// Surface area by left Riemann sum of |∂r/∂u × ∂r/∂v|
    pub fn surface_area(&self) -> Result<f64> {
        SurfaceAreaIntegrator::new().integrate(&self.surface, &self.params.sampling())
    }

    /// Length of the `v = w/2` edge over one turn `u ∈ [0, 2π]`
    ///
    /// See [`EdgeLengthIntegrator`] for why only one lap is traced.
    pub fn edge_length(&self) -> Result<f64> {
        EdgeLengthIntegrator::new().integrate(&self.surface, &self.params.sampling())
    }

    /// Edge polyline for visualization, `samples` points over `[0, 2π]`
    pub fn edge_polyline(&self, samples: usize) -> EdgePolyline {
        sample_boundary(&self.surface, samples)
    }

    /// Compute both quantities and bundle them with the parameters
    pub fn summary(&self) -> Result<StripSummary> {
        let surface_area = self.surface_area()?;
        let edge_length = self.edge_length()?;

        info!(
            radius = self.params.radius(),
            width = self.params.width(),
            resolution = self.params.resolution(),
            surface_area,
            edge_length,
            "strip summary computed"
        );

        Ok(StripSummary {
            params: self.params,
            surface_area,
            edge_length,
        })
    }
}

impl Default for MobiusStrip {
    /// R = 2, w = 1, n = 50
    fn default() -> Self {
        Self::from_parameters(StripParameters::default())
    }
}

// =================================================================================================
// Summary
// =================================================================================================

/// Integrated quantities of a strip
///
/// `Display` renders the human-readable report, figures to 4 decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripSummary {
    /// Parameters the quantities were computed from
    pub params: StripParameters,

    /// Surface area (square units)
    pub surface_area: f64,

    /// Edge length (units)
    pub edge_length: f64,
}

impl fmt::Display for StripSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mobius Strip Properties:")?;
        writeln!(f, "-----------------------")?;
        writeln!(f, "Radius (R): {}", self.params.radius())?;
        writeln!(f, "Width (w): {}", self.params.width())?;
        writeln!(f, "Resolution (n): {}", self.params.resolution())?;
        writeln!(f, "Surface Area: {:.4} square units", self.surface_area)?;
        write!(f, "Edge Length: {:.4} units", self.edge_length)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StripError;

    #[test]
    fn test_construction_generates_mesh() {
        let strip = MobiusStrip::new(2.0, 1.0, 100).unwrap();
        assert_eq!(strip.mesh().shape(), (100, 20));
        assert_eq!(strip.generate_mesh(), *strip.mesh());
    }

    #[test]
    fn test_invalid_construction() {
        assert!(matches!(
            MobiusStrip::new(2.0, 0.0, 100),
            Err(StripError::InvalidParameter { name: "width", .. })
        ));
    }

    #[test]
    fn test_quantities_positive_and_finite() {
        let strip = MobiusStrip::new(2.0, 1.0, 100).unwrap();
        let area = strip.surface_area().unwrap();
        let edge = strip.edge_length().unwrap();

        assert!(area.is_finite() && area > 0.0);
        assert!(edge.is_finite() && edge > 0.0);
    }

    #[test]
    fn test_summary_is_deterministic() {
        let strip = MobiusStrip::new(2.0, 1.0, 100).unwrap();
        let first = strip.summary().unwrap();
        let second = strip.summary().unwrap();

        assert_eq!(first.surface_area.to_bits(), second.surface_area.to_bits());
        assert_eq!(first.edge_length.to_bits(), second.edge_length.to_bits());
    }

    #[test]
    fn test_summary_report_format() {
        let summary = StripSummary {
            params: StripParameters::new(2.0, 1.0, 100).unwrap(),
            surface_area: 12.345678,
            edge_length: 13.0,
        };

        let report = summary.to_string();
        assert!(report.starts_with("Mobius Strip Properties:\n-----------------------\n"));
        assert!(report.contains("Radius (R): 2\n"));
        assert!(report.contains("Width (w): 1\n"));
        assert!(report.contains("Resolution (n): 100\n"));
        assert!(report.contains("Surface Area: 12.3457 square units\n"));
        assert!(report.ends_with("Edge Length: 13.0000 units"));
    }

    #[test]
    fn test_edge_polyline_overlay() {
        let strip = MobiusStrip::default();
        let edge = strip.edge_polyline(EDGE_OVERLAY_SAMPLES);
        assert_eq!(edge.len(), 100);
    }

    #[test]
    fn test_default_strip() {
        let strip = MobiusStrip::default();
        assert_eq!(strip.parameters().resolution(), 50);
        assert_eq!(strip.mesh().shape(), (50, 10));
    }
}
