//! Möbius strip model
//!
//! The strip is the crate's main entry point: it validates `(R, w, n)`,
//! generates the mesh handed to renderers, and runs the integrators.
//!
//! # Organization
//!
//! - **params**: `StripParameters` (validation, derived width resolution)
//! - **mesh**: `ParameterGrid` and `Mesh` (three coordinate arrays)
//! - **model**: `MobiusStrip` and `StripSummary`
//!
//! # Resolution
//!
//! | Axis | Samples | Mesh range | Integration range |
//! |------|---------|------------|-------------------|
//! | u    | `n`     | `[0, 2π]`  | `[0, 2π)`         |
//! | v    | `max(floor(n/5), 1)` | `[-w/2, w/2]` | `[-w/2, w/2)` |
//!
//! The mesh includes both ends of each axis; the area sum never samples the
//! upper ends. The edge sum samples `n + 1` points over `[0, 2π]`.

pub mod params;
pub mod mesh;
pub mod model;

pub use params::StripParameters;
pub use mesh::{Mesh, ParameterGrid};
pub use model::{MobiusStrip, StripSummary, EDGE_OVERLAY_SAMPLES};
