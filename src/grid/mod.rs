//! Row-major 2D arrays and the outer-product mesh

use crate::angle::AngleRange;
use crate::{PondeError, Result};
use serde::{Deserialize, Serialize};

/// Dense 2D array stored row by row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid2<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Grid2<T> {
    /// Build a grid from row-major data.
    ///
    /// # Errors
    /// Returns `InvalidRange` if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(PondeError::InvalidRange(format!(
                "Grid of shape ({}, {}) needs {} values, got {}",
                rows,
                cols,
                rows * cols,
                data.len()
            )));
        }
        Ok(Grid2 { rows, cols, data })
    }

    /// Build a grid by evaluating `f(row, col)` for every cell.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Grid2 { rows, cols, data }
    }

    /// (rows, cols)
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// One row as a slice.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row < self.rows {
            let start = row * self.cols;
            Some(&self.data[start..start + self.cols])
        } else {
            None
        }
    }

    /// Flat row-major view of the data.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Elementwise map into a grid of the same shape.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid2<U> {
        Grid2 {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<T: Copy> Grid2<T> {
    /// Copy of the value at `(row, col)`.
    ///
    /// # Panics
    /// Panics if the index is out of bounds.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> T {
        assert!(row < self.rows && col < self.cols, "Grid index out of bounds");
        self.data[row * self.cols + col]
    }
}

/// Outer-product mesh of two angle ranges.
///
/// With `theta` of length N and `phi` of length M, both grids have shape
/// (M, N): row `i` belongs to `phi[i]` and column `j` to `theta[j]`.
/// So `theta_mesh[i][j] = theta[j]` and `phi_mesh[i][j] = phi[i]`.
pub fn meshgrid(theta: &AngleRange, phi: &AngleRange) -> (Grid2<f64>, Grid2<f64>) {
    let rows = phi.len();
    let cols = theta.len();
    let t = theta.values();
    let p = phi.values();

    let theta_mesh = Grid2::from_fn(rows, cols, |_, j| t[j]);
    let phi_mesh = Grid2::from_fn(rows, cols, |i, _| p[i]);
    (theta_mesh, phi_mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec_shape_mismatch() {
        assert!(Grid2::from_vec(2, 3, vec![0.0; 5]).is_err());
        let g = Grid2::from_vec(2, 3, vec![0.0; 6]).unwrap();
        assert_eq!(g.shape(), (2, 3));
    }

    #[test]
    fn test_row_major_indexing() {
        let g = Grid2::from_fn(2, 3, |i, j| (i * 10 + j) as f64);
        assert_eq!(g.at(1, 2), 12.0);
        assert_eq!(g.row(1).unwrap(), &[10.0, 11.0, 12.0]);
        assert_eq!(g.get(2, 0), None);
        assert!(g.row(2).is_none());
    }

    #[test]
    fn test_map_keeps_shape() {
        let g = Grid2::from_fn(3, 4, |i, j| (i + j) as f64);
        let doubled = g.map(|v| v * 2.0);
        assert_eq!(doubled.shape(), (3, 4));
        assert_eq!(doubled.at(2, 3), 10.0);
    }

    #[test]
    fn test_meshgrid_orientation() {
        let theta = AngleRange::from_values(vec![0.0, 1.0, 2.0]).unwrap();
        let phi = AngleRange::from_values(vec![10.0, 20.0]).unwrap();
        let (tm, pm) = meshgrid(&theta, &phi);

        assert_eq!(tm.shape(), (2, 3));
        assert_eq!(pm.shape(), (2, 3));
        // theta varies along columns, phi along rows
        assert_eq!(tm.row(0).unwrap(), &[0.0, 1.0, 2.0]);
        assert_eq!(tm.row(1).unwrap(), &[0.0, 1.0, 2.0]);
        assert_eq!(pm.row(0).unwrap(), &[10.0, 10.0, 10.0]);
        assert_eq!(pm.row(1).unwrap(), &[20.0, 20.0, 20.0]);
    }
}
