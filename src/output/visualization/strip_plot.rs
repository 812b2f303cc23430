//! 3D strip rendering with plotters
//!
//! Draws a [`Mesh`] as filled cells (or a wireframe) on a 3D cartesian chart
//! and overlays the edge polyline in red. PNG or SVG is picked from the file
//! extension.
//!
//! # Axes
//!
//! plotters' 3D charts put their second axis vertically, so points are
//! handed over as `(x, z, y)` to keep the strip's z axis up. All three axes
//! share one symmetric range so the strip is not distorted.
//!
//! # Example
//!
//! ```rust,ignore
//! use mobius_rs::output::visualization::{PlotConfig, Renderer, StripPlotter};
//! use mobius_rs::strip::{MobiusStrip, EDGE_OVERLAY_SAMPLES};
//!
//! let strip = MobiusStrip::new(2.0, 1.0, 100)?;
//! let edge = strip.edge_polyline(EDGE_OVERLAY_SAMPLES);
//!
//! StripPlotter::new(PlotConfig::default()).render(strip.mesh(), &edge, "strip.png".as_ref())?;
//! ```

use std::error::Error;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::debug;

use super::config::{NO_TITLE, PlotConfig};
use super::Renderer;
use crate::error::{Result, StripError};
use crate::integration::EdgePolyline;
use crate::strip::Mesh;

type Point = (f64, f64, f64);

// =================================================================================================
// Strip Plotter
// =================================================================================================

/// plotters-backed [`Renderer`]
#[derive(Clone, Debug, Default)]
pub struct StripPlotter {
    config: PlotConfig,
}

impl StripPlotter {
    /// Create a plotter with the given configuration
    pub fn new(config: PlotConfig) -> Self {
        Self { config }
    }

    /// Current configuration
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Render the filled surface (left) next to the wireframe (right)
    ///
    /// The left panel uses this plotter's configuration; the right panel the
    /// same configuration in wireframe mode, titled "Mobius Strip (Wireframe)".
    /// The image is twice as wide as a single panel.
    pub fn render_side_by_side(&self, mesh: &Mesh, edge: &EdgePolyline, path: &Path) -> Result<()> {
        check_drawable(mesh)?;

        let panels = [
            PlotConfig {
                wireframe: false,
                ..self.config.clone()
            },
            PlotConfig {
                wireframe: true,
                title: PlotConfig::wireframe(NO_TITLE).title,
                ..self.config.clone()
            },
        ];
        let size = (self.config.width * 2, self.config.height);

        let outcome = match extension(path) {
            "svg" => draw_panels(SVGBackend::new(path, size).into_drawing_area(), mesh, edge, &panels),
            _ => draw_panels(BitMapBackend::new(path, size).into_drawing_area(), mesh, edge, &panels),
        };
        outcome.map_err(|e| StripError::Render(e.to_string()))?;

        debug!(path = %path.display(), "side-by-side figure written");
        Ok(())
    }
}

impl Renderer for StripPlotter {
    type Error = StripError;

    fn render(&self, mesh: &Mesh, edge: &EdgePolyline, path: &Path) -> Result<()> {
        check_drawable(mesh)?;

        let panels = std::slice::from_ref(&self.config);
        let size = (self.config.width, self.config.height);

        let outcome = match extension(path) {
            "svg" => draw_panels(SVGBackend::new(path, size).into_drawing_area(), mesh, edge, panels),
            _ => draw_panels(BitMapBackend::new(path, size).into_drawing_area(), mesh, edge, panels),
        };
        outcome.map_err(|e| StripError::Render(e.to_string()))?;

        debug!(path = %path.display(), wireframe = self.config.wireframe, "strip figure written");
        Ok(())
    }
}

// =================================================================================================
// Helper Functions
// =================================================================================================

fn check_drawable(mesh: &Mesh) -> Result<()> {
    let (rows, cols) = mesh.shape();
    if rows == 0 || cols == 0 {
        return Err(StripError::Render("mesh is empty".to_string()));
    }
    Ok(())
}

/// File extension, PNG when missing
fn extension(path: &Path) -> &str {
    path.extension().and_then(|s| s.to_str()).unwrap_or("png")
}

/// Split `root` into one column per panel, draw each, then save
fn draw_panels<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    mesh: &Mesh,
    edge: &EdgePolyline,
    panels: &[PlotConfig],
) -> std::result::Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let background = panels.first().map(|c| c.background).unwrap_or(WHITE);
    root.fill(&background)?;

    let areas = root.split_evenly((1, panels.len().max(1)));
    for (area, config) in areas.iter().zip(panels) {
        draw_strip(area, mesh, edge, config)?;
    }

    root.present()?;
    Ok(())
}

/// Plotters point for a strip point (z goes on the vertical axis)
#[inline]
fn to_chart(x: f64, y: f64, z: f64) -> Point {
    (x, z, y)
}

/// Symmetric half-extent covering the mesh and the edge
fn half_extent(mesh: &Mesh, edge: &EdgePolyline) -> f64 {
    let mesh_extent = [mesh.x(), mesh.y(), mesh.z()]
        .iter()
        .map(|m| m.amax())
        .fold(0.0, f64::max);
    let edge_extent = edge
        .points()
        .iter()
        .map(|p| p.coords.amax())
        .fold(0.0, f64::max);

    mesh_extent.max(edge_extent).max(1e-10) * 1.05
}

/// Draw one strip panel on `area`
fn draw_strip<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    mesh: &Mesh,
    edge: &EdgePolyline,
    config: &PlotConfig,
) -> std::result::Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let half = half_extent(mesh, edge);
    let (x, y, z) = (mesh.x(), mesh.y(), mesh.z());
    let (rows, cols) = mesh.shape();

    let mut chart = ChartBuilder::on(area)
        .caption(&config.title, ("sans-serif", 30).into_font())
        .margin(10)
        .build_cartesian_3d(-half..half, -half..half, -half..half)?;

    chart.with_projection(|mut pb| {
        pb.pitch = config.elevation.to_radians();
        pb.yaw = config.azimuth.to_radians();
        pb.scale = 0.8;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.15))
        .max_light_lines(3)
        .draw()?;

    let at = |i: usize, j: usize| to_chart(x[(i, j)], y[(i, j)], z[(i, j)]);

    if config.wireframe {
        let style = config.surface_color.mix(config.alpha).stroke_width(1);

        // Lines of constant u, then lines of constant v
        chart.draw_series(
            (0..rows).map(|i| PathElement::new((0..cols).map(|j| at(i, j)).collect::<Vec<_>>(), style)),
        )?;
        chart.draw_series(
            (0..cols).map(|j| PathElement::new((0..rows).map(|i| at(i, j)).collect::<Vec<_>>(), style)),
        )?;
    } else if rows > 1 && cols > 1 {
        let fill = config.surface_color.mix(config.alpha).filled();
        let outline = config.mesh_line_color.mix(0.5).stroke_width(1);

        let cells = (0..rows - 1).flat_map(|i| (0..cols - 1).map(move |j| (i, j)));
        let quads: Vec<Vec<Point>> = cells
            .map(|(i, j)| vec![at(i, j), at(i + 1, j), at(i + 1, j + 1), at(i, j + 1)])
            .collect();

        chart.draw_series(quads.iter().map(|quad| Polygon::new(quad.clone(), fill)))?;
        chart.draw_series(quads.iter().map(|quad| {
            let mut ring = quad.clone();
            ring.push(quad[0]);
            PathElement::new(ring, outline)
        }))?;
    } else {
        // A single width sample has no cells: show the sampled curve
        let style = config.surface_color.mix(config.alpha).stroke_width(2);
        chart.draw_series(std::iter::once(PathElement::new(
            mesh.points().map(|(_, p)| to_chart(p.x, p.y, p.z)).collect::<Vec<_>>(),
            style,
        )))?;
    }

    let edge_color = config.edge_color;
    chart
        .draw_series(LineSeries::new(
            edge.points().iter().map(|p| to_chart(p.x, p.y, p.z)),
            edge_color.stroke_width(config.edge_line_width),
        ))?
        .label("Edge")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], edge_color));

    chart
        .configure_series_labels()
        .background_style(config.background.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strip::{MobiusStrip, EDGE_OVERLAY_SAMPLES};

    fn small_strip() -> MobiusStrip {
        MobiusStrip::new(2.0, 1.0, 20).unwrap()
    }

    #[test]
    fn test_half_extent_covers_strip() {
        let strip = small_strip();
        let edge = strip.edge_polyline(EDGE_OVERLAY_SAMPLES);
        let half = half_extent(strip.mesh(), &edge);

        // Outer rim reaches R + w/2 = 2.5
        assert!(half >= 2.5);
        assert!(half < 3.0);
    }

    #[test]
    fn test_to_chart_puts_z_up() {
        assert_eq!(to_chart(1.0, 2.0, 3.0), (1.0, 3.0, 2.0));
    }

    #[test]
    fn test_render_png() {
        let strip = small_strip();
        let edge = strip.edge_polyline(EDGE_OVERLAY_SAMPLES);
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("strip.png");

        let plotter = StripPlotter::new(PlotConfig::default().size(320, 240));
        plotter.render(strip.mesh(), &edge, &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_render_wireframe_svg() {
        let strip = small_strip();
        let edge = strip.edge_polyline(EDGE_OVERLAY_SAMPLES);
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("strip.svg");

        let plotter = StripPlotter::new(PlotConfig::wireframe(NO_TITLE).size(320, 240));
        plotter.render(strip.mesh(), &edge, &path).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn test_render_side_by_side() {
        let strip = small_strip();
        let edge = strip.edge_polyline(EDGE_OVERLAY_SAMPLES);
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("combined.png");

        let plotter = StripPlotter::new(PlotConfig::default().size(320, 240));
        plotter.render_side_by_side(strip.mesh(), &edge, &path).unwrap();
        assert!(path.exists());
    }
}
