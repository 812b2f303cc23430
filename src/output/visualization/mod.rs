//! Visualization of strip meshes
//!
//! Renderers are collaborators of the numerical core: they receive the mesh
//! arrays and an edge polyline and produce an artifact. The core never
//! depends on a drawing library.
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`)
//! - **strip_plot**: plotters 3D renderer (`StripPlotter`)
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use mobius_rs::output::visualization::{PlotConfig, Renderer, StripPlotter};
//! use mobius_rs::strip::{MobiusStrip, EDGE_OVERLAY_SAMPLES};
//!
//! let strip = MobiusStrip::new(2.0, 1.0, 100)?;
//! let edge = strip.edge_polyline(EDGE_OVERLAY_SAMPLES);
//!
//! // Single panel
//! StripPlotter::new(PlotConfig::surface("Mobius Strip")).render(strip.mesh(), &edge, "strip.png".as_ref())?;
//!
//! // Surface and wireframe side by side
//! StripPlotter::default().render_side_by_side(strip.mesh(), &edge, "mobius_strip.png".as_ref())?;
//! ```

use std::path::Path;

use crate::integration::EdgePolyline;
use crate::strip::Mesh;

pub mod config;
pub mod strip_plot;

pub use config::{PlotConfig, NO_TITLE, TEAL};
pub use strip_plot::StripPlotter;

/// Abstraction trait for anything that turns a mesh into a rendered artifact.
///
/// # Associated type `Error`
///
/// Each renderer manages its own errors via the associated type, so a caller
/// can react to the concrete failure without boxing.
pub trait Renderer {
    /// Error type specific to this renderer.
    type Error: std::error::Error;

    /// Render `mesh` with the `edge` overlay into `path`.
    fn render(&self, mesh: &Mesh, edge: &EdgePolyline, path: &Path) -> Result<(), Self::Error>;
}
