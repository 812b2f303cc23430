//! CSV export of strip meshes
//!
//! One row per mesh point, compatible with spreadsheets, pandas or MATLAB.
//!
//! # Quick Example
//!
//! ```rust,ignore
//! use mobius_rs::output::export::{CsvConfig, CsvExporter, Exporter};
//!
//! let strip = MobiusStrip::new(2.0, 1.0, 10)?;
//! CsvExporter::default().export_mesh(strip.mesh(), "mesh.csv".as_ref())?;
//! ```
//!
//! **Output** (`mesh.csv`):
//! ```csv
//! i,j,u,v,x,y,z
//! 0,0,0.000000,-0.500000,1.500000,0.000000,-0.000000
//! 0,1,0.000000,0.500000,2.500000,0.000000,0.000000
//! ...
//! ```
//!
//! ## With Metadata
//!
//! ```csv
//! # Mobius Strip Mesh
//! # Generated: 2026-02-11T15:30:00+00:00
//! # Radius: 2
//! # Width: 1
//! # Resolution: 10
//! #
//! i,j,u,v,x,y,z
//! ...
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use super::Exporter;
use crate::error::{Result, StripError};
use crate::strip::{Mesh, StripParameters};

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust,ignore
/// let config = CsvConfig {
///     delimiter: ';',
///     precision: 10,
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Debug)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            precision: 6,
            include_metadata: false,
            metadata: None,
        }
    }
}

impl CsvConfig {
    /// Create config with high precision (12 decimal places)
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// Only non-None fields are written.
#[derive(Clone, Debug, Default)]
pub struct CsvMetadata {
    /// Center radius R
    pub radius: Option<f64>,

    /// Strip width w
    pub width: Option<f64>,

    /// Angular resolution n
    pub resolution: Option<usize>,

    /// Surface area, when already computed
    pub surface_area: Option<f64>,

    /// Edge length, when already computed
    pub edge_length: Option<f64>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Metadata carrying the strip parameters
    pub fn from_parameters(params: &StripParameters) -> Self {
        Self {
            radius: Some(params.radius()),
            width: Some(params.width()),
            resolution: Some(params.resolution()),
            ..Default::default()
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments
fn write_metadata_header<W: Write>(out: &mut W, metadata: &CsvMetadata) -> std::io::Result<()> {
    writeln!(out, "# Mobius Strip Mesh")?;

    let now = chrono::Utc::now();
    writeln!(out, "# Generated: {}", now.to_rfc3339())?;

    if let Some(radius) = metadata.radius {
        writeln!(out, "# Radius: {}", radius)?;
    }
    if let Some(width) = metadata.width {
        writeln!(out, "# Width: {}", width)?;
    }
    if let Some(resolution) = metadata.resolution {
        writeln!(out, "# Resolution: {}", resolution)?;
    }
    if let Some(area) = metadata.surface_area {
        writeln!(out, "# Surface Area: {}", area)?;
    }
    if let Some(length) = metadata.edge_length {
        writeln!(out, "# Edge Length: {}", length)?;
    }
    for (key, value) in &metadata.custom {
        writeln!(out, "# {}: {}", key, value)?;
    }

    writeln!(out, "#")?;
    Ok(())
}

// =============================================================================
// CSV Exporter
// =============================================================================

/// CSV implementation of [`Exporter`]
#[derive(Clone, Debug, Default)]
pub struct CsvExporter {
    /// Export configuration
    pub config: CsvConfig,
}

impl CsvExporter {
    /// Create an exporter with the given configuration
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }

    /// Write the mesh rows to any writer
    pub fn write_mesh<W: Write>(&self, mesh: &Mesh, out: &mut W) -> Result<()> {
        let d = self.config.delimiter;
        let p = self.config.precision;

        if self.config.include_metadata
            && let Some(metadata) = &self.config.metadata
        {
            write_metadata_header(out, metadata)?;
        }

        writeln!(out, "i{d}j{d}u{d}v{d}x{d}y{d}z")?;

        let grid = mesh.grid();
        for ((i, j), point) in mesh.points() {
            writeln!(
                out,
                "{i}{d}{j}{d}{:.p$}{d}{:.p$}{d}{:.p$}{d}{:.p$}{d}{:.p$}",
                grid.u()[i],
                grid.v()[j],
                point.x,
                point.y,
                point.z,
            )?;
        }

        Ok(())
    }
}

impl Exporter for CsvExporter {
    type Error = StripError;

    fn export_mesh(&self, mesh: &Mesh, path: &Path) -> Result<()> {
        let (rows, cols) = mesh.shape();
        if rows == 0 || cols == 0 {
            return Err(StripError::invalid_param("mesh", format!("{rows}x{cols}"), "mesh is empty"));
        }

        let mut out = BufWriter::new(File::create(path)?);
        self.write_mesh(mesh, &mut out)?;
        out.flush()?;

        debug!(path = %path.display(), rows = rows * cols, "mesh exported to CSV");
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strip::MobiusStrip;

    fn export_to_string(exporter: &CsvExporter, mesh: &Mesh) -> String {
        let mut buffer = Vec::new();
        exporter.write_mesh(mesh, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_header_and_row_count() {
        let strip = MobiusStrip::new(2.0, 1.0, 10).unwrap();
        let csv = export_to_string(&CsvExporter::default(), strip.mesh());

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "i,j,u,v,x,y,z");
        assert_eq!(lines.len(), 1 + 10 * 2);
    }

    #[test]
    fn test_first_row_values() {
        let strip = MobiusStrip::new(2.0, 1.0, 10).unwrap();
        let csv = export_to_string(&CsvExporter::default(), strip.mesh());

        // u = 0, v = -0.5 → (1.5, 0, 0)
        let row = csv.lines().nth(1).unwrap();
        assert!(row.starts_with("0,0,0.000000,-0.500000,1.500000,0.000000,"));
    }

    #[test]
    fn test_custom_delimiter_and_precision() {
        let strip = MobiusStrip::new(2.0, 1.0, 10).unwrap();
        let exporter = CsvExporter::new(CsvConfig::default().delimiter(';').precision(2));
        let csv = export_to_string(&exporter, strip.mesh());

        assert_eq!(csv.lines().next().unwrap(), "i;j;u;v;x;y;z");
        assert!(csv.lines().nth(1).unwrap().starts_with("0;0;0.00;-0.50;1.50;"));
    }

    #[test]
    fn test_metadata_header() {
        let strip = MobiusStrip::new(2.0, 1.0, 10).unwrap();
        let mut metadata = CsvMetadata::from_parameters(strip.parameters());
        metadata.add_custom("Note".to_string(), "test".to_string());

        let exporter = CsvExporter::new(CsvConfig::high_precision().with_metadata(metadata));
        let csv = export_to_string(&exporter, strip.mesh());

        assert!(csv.starts_with("# Mobius Strip Mesh\n# Generated: "));
        assert!(csv.contains("# Radius: 2\n"));
        assert!(csv.contains("# Resolution: 10\n"));
        assert!(csv.contains("# Note: test\n"));
        assert!(csv.contains("#\ni,j,u,v,x,y,z\n"));
    }

    #[test]
    fn test_export_to_file() {
        let strip = MobiusStrip::new(2.0, 1.0, 20).unwrap();
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("mesh.csv");

        CsvExporter::default().export_mesh(strip.mesh(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1 + 20 * 4);
    }

    #[test]
    fn test_export_into_missing_directory_fails() {
        let strip = MobiusStrip::new(2.0, 1.0, 20).unwrap();
        let path = Path::new("/nonexistent-dir/mesh.csv");

        let result = CsvExporter::default().export_mesh(strip.mesh(), path);
        assert!(matches!(result, Err(StripError::Io(_))));
    }
}
