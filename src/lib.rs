//! mobius-rs: Möbius Strip Geometry
//!
//! Samples a Möbius strip from its parametric equations and integrates two
//! geometric quantities over the parameter domain: surface area and edge
//! length. Rendering and export are separate collaborators that consume the
//! computed mesh.
//!
//! # Architecture
//!
//! mobius-rs keeps geometry and numerics apart:
//!
//! 1. **Separation of Geometry and Numerics**
//!    - Surfaces define equations (what to integrate)
//!    - Integrators provide methods (how to sample and sum)
//!
//! 2. **Collaborators at the edge**
//!    - The numerical core never depends on a drawing backend
//!    - Renderers and exporters only see the mesh and an edge polyline
//!
//! # Quick Start
//!
//! ```rust
//! use mobius_rs::strip::MobiusStrip;
//!
//! # fn main() -> Result<(), mobius_rs::StripError> {
//! // 1. Build the strip (validates parameters, generates the mesh)
//! let strip = MobiusStrip::new(2.0, 1.0, 100)?;
//! assert_eq!(strip.mesh().shape(), (100, 20));
//!
//! // 2. Integrate
//! let area = strip.surface_area()?;
//! let edge = strip.edge_length()?;
//! assert!(area > 0.0 && edge > 0.0);
//!
//! // 3. Report
//! println!("{}", strip.summary()?);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`surface`]: Parametric surfaces (equations and analytic tangents)
//! - [`integration`]: Numerical integrators (surface area, edge length)
//! - [`strip`]: Strip parameters, mesh generation, summary
//! - [`output`]: Visualization and export collaborators
//!
//! # Features
//!
//! - `parallel`: sums surface-area rows with Rayon above a runtime threshold

pub mod error;

// Core modules
pub mod surface;
pub mod integration;
pub mod strip;

pub mod output;

pub use error::{Result, StripError};

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use mobius_rs::prelude::*;
    //! ```
    pub use crate::error::{Result, StripError};
    pub use crate::integration::{EdgeLengthIntegrator,
                                 EdgePolyline,
                                 Integrator,
                                 SamplingConfiguration,
                                 SurfaceAreaIntegrator};
    pub use crate::strip::{Mesh,
                           MobiusStrip,
                           ParameterGrid,
                           StripParameters,
                           StripSummary};
    pub use crate::surface::{MobiusSurface,
                             ParametricSurface};
}
