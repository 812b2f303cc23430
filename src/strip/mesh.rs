//! Parameter grid and mesh generation
//!
//! The mesh is the surface sampled at every pair of the parameter grid:
//!
//! ```text
//! u: n values over [u₀, u₁]  (both ends, the seam is duplicated)
//! v: m values over [v₀, v₁]  (both ends)
//!
//! x[i, j], y[i, j], z[i, j] = r(u_i, v_j)
//! ```
//!
//! Rows follow u, columns follow v. The last row (u = 2π for a strip)
//! coincides visually with the first one, mirrored across the strip.

use nalgebra::{DMatrix, Point3};
use tracing::debug;

use crate::integration::linspace;
use crate::surface::ParametricSurface;
use crate::strip::StripParameters;

// =================================================================================================
// Parameter Grid
// =================================================================================================

/// The two ordered parameter sequences sampled by the mesh
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterGrid {
    u: Vec<f64>,
    v: Vec<f64>,
}

impl ParameterGrid {
    /// Evenly spaced grid over the surface domains with `u_count × v_count` samples
    pub fn over(surface: &dyn ParametricSurface, u_count: usize, v_count: usize) -> Self {
        let u_domain = surface.u_domain();
        let v_domain = surface.v_domain();

        Self {
            u: linspace(u_domain.start, u_domain.end, u_count),
            v: linspace(v_domain.start, v_domain.end, v_count),
        }
    }

    /// Grid for a strip: `n` values of u over `[0, 2π]`, `width_resolution`
    /// values of v over `[-w/2, w/2]`
    pub fn for_strip(params: &StripParameters) -> Self {
        let half = params.width() / 2.0;

        Self {
            u: linspace(0.0, std::f64::consts::TAU, params.resolution()),
            v: linspace(-half, half, params.width_resolution()),
        }
    }

    /// Angular samples
    pub fn u(&self) -> &[f64] {
        &self.u
    }

    /// Width samples
    pub fn v(&self) -> &[f64] {
        &self.v
    }

    /// `(u.len(), v.len())`
    pub fn shape(&self) -> (usize, usize) {
        (self.u.len(), self.v.len())
    }
}

// =================================================================================================
// Mesh
// =================================================================================================

/// Three coordinate arrays of identical shape `(u samples, v samples)`
///
/// Immutable once generated.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    grid: ParameterGrid,
    x: DMatrix<f64>,
    y: DMatrix<f64>,
    z: DMatrix<f64>,
}

impl Mesh {
    /// Evaluate `surface` at every grid pair
    ///
    /// # Example
    ///
    /// ```rust
    /// use mobius_rs::strip::{Mesh, ParameterGrid, StripParameters};
    /// use mobius_rs::surface::MobiusSurface;
    ///
    /// let params = StripParameters::new(2.0, 1.0, 100)?;
    /// let surface = MobiusSurface::new(params.radius(), params.width());
    /// let mesh = Mesh::generate(&surface, ParameterGrid::for_strip(&params));
    ///
    /// assert_eq!(mesh.shape(), (100, 20));
    /// # Ok::<(), mobius_rs::StripError>(())
    /// ```
    pub fn generate(surface: &dyn ParametricSurface, grid: ParameterGrid) -> Self {
        let (rows, cols) = grid.shape();

        let mut x = DMatrix::zeros(rows, cols);
        let mut y = DMatrix::zeros(rows, cols);
        let mut z = DMatrix::zeros(rows, cols);

        for (i, &u) in grid.u.iter().enumerate() {
            for (j, &v) in grid.v.iter().enumerate() {
                let p = surface.position(u, v);
                x[(i, j)] = p.x;
                y[(i, j)] = p.y;
                z[(i, j)] = p.z;
            }
        }

        debug!(surface = surface.name(), rows, cols, "mesh generated");

        Self { grid, x, y, z }
    }

    /// The parameter grid the mesh was sampled on
    pub fn grid(&self) -> &ParameterGrid {
        &self.grid
    }

    /// X coordinates
    pub fn x(&self) -> &DMatrix<f64> {
        &self.x
    }

    /// Y coordinates
    pub fn y(&self) -> &DMatrix<f64> {
        &self.y
    }

    /// Z coordinates
    pub fn z(&self) -> &DMatrix<f64> {
        &self.z
    }

    /// `(rows, cols)`, shared by the three arrays
    pub fn shape(&self) -> (usize, usize) {
        self.x.shape()
    }

    /// Point at grid index `(i, j)`
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub fn point(&self, i: usize, j: usize) -> Point3<f64> {
        Point3::new(self.x[(i, j)], self.y[(i, j)], self.z[(i, j)])
    }

    /// All points in row-major order (u outer, v inner) with their indices
    pub fn points(&self) -> impl Iterator<Item = ((usize, usize), Point3<f64>)> + '_ {
        let (rows, cols) = self.shape();
        (0..rows).flat_map(move |i| (0..cols).map(move |j| ((i, j), self.point(i, j))))
    }

    /// Axis-aligned bounds `(min, max)` over all points, `None` for an empty mesh
    pub fn bounds(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        if self.x.is_empty() {
            return None;
        }
        Some((
            Point3::new(self.x.min(), self.y.min(), self.z.min()),
            Point3::new(self.x.max(), self.y.max(), self.z.max()),
        ))
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MobiusSurface;
    use std::f64::consts::TAU;

    fn strip_mesh(radius: f64, width: f64, n: usize) -> Mesh {
        let params = StripParameters::new(radius, width, n).unwrap();
        let surface = MobiusSurface::new(radius, width);
        Mesh::generate(&surface, ParameterGrid::for_strip(&params))
    }

    #[test]
    fn test_grid_for_strip() {
        let params = StripParameters::new(2.0, 1.0, 100).unwrap();
        let grid = ParameterGrid::for_strip(&params);

        assert_eq!(grid.shape(), (100, 20));
        assert_eq!(grid.u()[0], 0.0);
        assert_eq!(grid.u()[99], TAU);
        assert_eq!(grid.v()[0], -0.5);
        assert_eq!(grid.v()[19], 0.5);
    }

    #[test]
    fn test_grid_over_matches_for_strip() {
        let params = StripParameters::new(2.0, 1.0, 40).unwrap();
        let surface = MobiusSurface::new(2.0, 1.0);

        assert_eq!(ParameterGrid::over(&surface, 40, 8), ParameterGrid::for_strip(&params));
    }

    #[test]
    fn test_all_arrays_share_shape() {
        let mesh = strip_mesh(2.0, 1.0, 100);
        assert_eq!(mesh.shape(), (100, 20));
        assert_eq!(mesh.x().shape(), mesh.y().shape());
        assert_eq!(mesh.y().shape(), mesh.z().shape());
    }

    #[test]
    fn test_mesh_values_match_surface() {
        let mesh = strip_mesh(2.0, 1.0, 30);
        let surface = MobiusSurface::new(2.0, 1.0);

        for ((i, j), p) in mesh.points() {
            let expected = surface.position(mesh.grid().u()[i], mesh.grid().v()[j]);
            assert_eq!(p, expected);
        }
        assert_eq!(mesh.points().count(), 30 * 6);
    }

    #[test]
    fn test_z_antisymmetric_across_width() {
        let mesh = strip_mesh(2.0, 1.0, 100);
        let (rows, cols) = mesh.shape();

        for i in 0..rows {
            for j in 0..cols {
                let mirrored = mesh.z()[(i, cols - 1 - j)];
                assert!((mesh.z()[(i, j)] + mirrored).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_seam_rows_coincide_mirrored() {
        let mesh = strip_mesh(2.0, 1.0, 50);
        let (rows, cols) = mesh.shape();

        for j in 0..cols {
            let start = mesh.point(0, cols - 1 - j);
            let end = mesh.point(rows - 1, j);
            assert!((start - end).norm() < 1e-12);
        }
    }

    #[test]
    fn test_single_width_sample() {
        let mesh = strip_mesh(2.0, 1.0, 4);
        assert_eq!(mesh.shape(), (4, 1));
        assert_eq!(mesh.grid().v(), &[-0.5]);
    }

    #[test]
    fn test_bounds() {
        let mesh = strip_mesh(2.0, 1.0, 100);
        let (min, max) = mesh.bounds().unwrap();

        assert!(max.x <= 2.5 + 1e-12 && min.x >= -2.5 - 1e-12);
        assert!(max.z <= 0.5 + 1e-12 && min.z >= -0.5 - 1e-12);
    }
}
