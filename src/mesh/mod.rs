//! Tessellation of evaluated surface grids

use crate::precision::CONFUSION;
use crate::surface::SurfaceGrid;
use crate::{PondeError, Result};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriangleMesh {
    pub vertices: Vec<[f64; 3]>,
    pub normals: Vec<[f64; 3]>,
    pub triangles: Vec<[usize; 3]>,
}

/// Triangulate an evaluated surface grid.
///
/// One vertex per grid cell, in row-major order, so vertex `i * cols + j`
/// is the point at φ row `i` and θ column `j`. Each quad of neighbouring
/// cells is split into two triangles.
///
/// Normals are the normalised cross product of the grid differences
/// along θ and along φ (central inside the grid, one-sided on its
/// border). Where that product vanishes the radial direction is used.
///
/// # Errors
/// Returns `InvalidRange` if the grid has fewer than two rows or columns.
///
/// # Example
/// ```
/// use ponde::{build_grid, triangulate_grid, AngleRange};
///
/// let theta = AngleRange::full_turn(16)?;
/// let phi = AngleRange::full_turn(8)?;
/// let grid = build_grid(&theta, &phi, 9.0, 4.0)?;
/// let mesh = triangulate_grid(&grid)?;
///
/// assert_eq!(mesh.vertices.len(), 16 * 8);
/// assert_eq!(mesh.triangles.len(), 2 * 15 * 7);
/// # Ok::<(), ponde::PondeError>(())
/// ```
pub fn triangulate_grid(grid: &SurfaceGrid) -> Result<TriangleMesh> {
    let (rows, cols) = grid.shape();
    if rows < 2 || cols < 2 {
        return Err(PondeError::InvalidRange(format!(
            "Triangulation needs at least a 2x2 grid, got {}x{}",
            rows, cols
        )));
    }

    let at = |i: usize, j: usize| -> Vector3<f64> {
        Vector3::new(grid.x.at(i, j), grid.y.at(i, j), grid.z.at(i, j))
    };

    let mut vertices = Vec::with_capacity(rows * cols);
    let mut normals = Vec::with_capacity(rows * cols);
    let mut triangles = Vec::with_capacity(2 * (rows - 1) * (cols - 1));

    // Create vertex grid
    for i in 0..rows {
        for j in 0..cols {
            let p = at(i, j);

            let d_theta = at(i, (j + 1).min(cols - 1)) - at(i, j.saturating_sub(1));
            let d_phi = at((i + 1).min(rows - 1), j) - at(i.saturating_sub(1), j);
            let normal = d_theta
                .cross(&d_phi)
                .try_normalize(CONFUSION)
                .unwrap_or_else(|| radial_direction(&p));

            vertices.push([p.x, p.y, p.z]);
            normals.push([normal.x, normal.y, normal.z]);
        }
    }

    // Each quad is subdivided into two triangles
    for i in 0..rows - 1 {
        for j in 0..cols - 1 {
            let v0 = i * cols + j;
            let v1 = i * cols + j + 1;
            let v2 = (i + 1) * cols + j;
            let v3 = (i + 1) * cols + j + 1;

            triangles.push([v0, v1, v2]);
            triangles.push([v1, v3, v2]);
        }
    }

    debug!(
        vertices = vertices.len(),
        triangles = triangles.len(),
        "triangulated surface grid"
    );

    Ok(TriangleMesh {
        vertices,
        normals,
        triangles,
    })
}

fn radial_direction(p: &Vector3<f64>) -> Vector3<f64> {
    Vector3::new(p.x, p.y, 0.0)
        .try_normalize(CONFUSION)
        .unwrap_or_else(Vector3::z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::AngleRange;
    use crate::surface::build_grid;

    fn sample_grid(n: usize, m: usize) -> SurfaceGrid {
        let theta = AngleRange::full_turn(n).unwrap();
        let phi = AngleRange::full_turn(m).unwrap();
        build_grid(&theta, &phi, 9.0, 4.0).unwrap()
    }

    #[test]
    fn test_mesh_counts() {
        let mesh = triangulate_grid(&sample_grid(12, 9)).unwrap();
        assert_eq!(mesh.vertices.len(), 12 * 9);
        assert_eq!(mesh.normals.len(), mesh.vertices.len());
        assert_eq!(mesh.triangles.len(), 2 * 11 * 8);
        assert!(mesh
            .triangles
            .iter()
            .all(|t| t.iter().all(|&v| v < mesh.vertices.len())));
    }

    #[test]
    fn test_normals_are_unit_length() {
        let mesh = triangulate_grid(&sample_grid(20, 20)).unwrap();
        for n in &mesh.normals {
            let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert!((len - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_outer_equator_normal_points_outward() {
        let grid = sample_grid(40, 41);
        let mesh = triangulate_grid(&grid).unwrap();
        // row 0 is phi = 0 (outer equator); column 5 is inside a lobe
        let j = 5;
        let p = mesh.vertices[j];
        let n = mesh.normals[j];
        let radial = p[0] * n[0] + p[1] * n[1];
        assert!(radial > 0.0, "normal {:?} at {:?} should face outward", n, p);
    }

    #[test]
    fn test_degenerate_grid_rejected() {
        let theta = AngleRange::full_turn(1).unwrap();
        let phi = AngleRange::full_turn(5).unwrap();
        let grid = build_grid(&theta, &phi, 9.0, 4.0).unwrap();
        assert!(matches!(
            triangulate_grid(&grid),
            Err(PondeError::InvalidRange(_))
        ));
    }
}
