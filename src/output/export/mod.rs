//! Export module for strip meshes.
//!
//! # Architecture
//!
//! This module defines the [`Exporter`] trait that abstracts the export format.
//! Each format is an independent implementation in its own sub-module, so a
//! new format means a new file, never a change to existing ones.
//!
//! # Available formats
//!
//! | Format  | Module     |
//! |---------|------------|
//! | CSV     | [`csv`]    |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use mobius_rs::output::export::{CsvExporter, Exporter};
//!
//! CsvExporter::default().export_mesh(strip.mesh(), "mesh.csv".as_ref())?;
//! ```

pub mod csv;

pub use csv::{CsvConfig, CsvExporter, CsvMetadata};

use std::path::Path;

use crate::strip::Mesh;

/// Abstraction trait for all export formats.
///
/// # Associated type `Error`
///
/// Each format manages its own errors via the associated type.
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Exports every mesh point with its grid indices and parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the path is invalid or the directory does not exist
    /// - `mesh` contains no point
    fn export_mesh(&self, mesh: &Mesh, path: &Path) -> Result<(), Self::Error>;
}
