//! Output module for strip meshes
//!
//! Collaborators that consume the computed mesh; none of them is needed to
//! compute surface area or edge length.
//!
//! - **Visualization**: PNG/SVG figures using plotters
//! - **Export**: CSV dump of the mesh for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Renderer trait, PlotConfig, StripPlotter
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   └── strip_plot.rs
//! └── export/             ← Exporter trait, CsvExporter
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use mobius_rs::output::{CsvExporter, Exporter, PlotConfig, Renderer, StripPlotter};
//! use mobius_rs::strip::{MobiusStrip, EDGE_OVERLAY_SAMPLES};
//!
//! let strip = MobiusStrip::new(2.0, 1.0, 100)?;
//! let edge = strip.edge_polyline(EDGE_OVERLAY_SAMPLES);
//!
//! StripPlotter::new(PlotConfig::default()).render(strip.mesh(), &edge, "strip.png".as_ref())?;
//! CsvExporter::default().export_mesh(strip.mesh(), "mesh.csv".as_ref())?;
//! ```

pub mod visualization;
pub mod export;

// Re-export commonly used items for convenience
pub use visualization::{PlotConfig, Renderer, StripPlotter};

pub use export::{CsvConfig, CsvExporter, Exporter};
