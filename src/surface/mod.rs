//! Parametric surfaces
//!
//! This module provides the trait and the implementation of the surface map
//! that everything else in the crate samples.
//!
//! # Core Concepts
//!
//! - **Parametric map**: r(u, v) from the 2D parameter domain to ℝ³
//! - **Tangent vectors**: the analytic partials ∂r/∂u and ∂r/∂v
//! - **Surface element**: |∂r/∂u × ∂r/∂v|, the local area density
//!
//! # Architecture
//!
//! Surfaces are **separate from numerical integrators**:
//! - The surface provides the **equations** (geometry)
//! - The integrator provides the **method** (sampling and summation)
//!
//! # Example
//!
//! ```rust
//! use mobius_rs::surface::{MobiusSurface, ParametricSurface};
//!
//! let surface = MobiusSurface::new(2.0, 1.0);
//!
//! // Surface element at u = 0, v = 0 equals the radius
//! let element = surface.surface_element(0.0, 0.0);
//! assert!((element - 2.0).abs() < 1e-12);
//! ```
//!
//! # Available Surfaces
//!
//! - **Möbius strip**: [`MobiusSurface`]

pub mod traits;
pub mod mobius;

pub use mobius::MobiusSurface;
pub use traits::{ParameterDomain, ParametricSurface};
