//! Intermediate value tables
//!
//! Three columns per row: θ, φ and f(θ). A table either pairs the two
//! angle ranges sample by sample, or is read off one row of the mesh.

use crate::angle::{fold, AngleRange};
use crate::grid::Grid2;
use crate::{PondeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Column names, in order.
pub const COLUMNS: [&str; 3] = ["theta", "phi", "f_theta"];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleRow {
    pub theta: f64,
    pub phi: f64,
    pub f_theta: f64,
}

impl AngleRow {
    #[inline]
    fn column(&self, idx: usize) -> f64 {
        match idx {
            0 => self.theta,
            1 => self.phi,
            _ => self.f_theta,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AngleTable {
    pub rows: Vec<AngleRow>,
}

impl AngleTable {
    /// Pair `theta[i]` with `phi[i]` and `f(theta[i])`.
    ///
    /// # Errors
    /// Returns `InvalidRange` if the ranges differ in length.
    pub fn new(theta: &AngleRange, phi: &AngleRange) -> Result<Self> {
        if theta.len() != phi.len() {
            return Err(PondeError::InvalidRange(format!(
                "Table needs equal-length ranges, got theta={} phi={}",
                theta.len(),
                phi.len()
            )));
        }

        let rows = theta
            .iter()
            .zip(phi.iter())
            .map(|(t, p)| AngleRow {
                theta: t,
                phi: p,
                f_theta: fold(t),
            })
            .collect();
        Ok(AngleTable { rows })
    }

    /// Read one row of the θ/φ mesh.
    ///
    /// # Errors
    /// Returns `InvalidRange` if the meshes differ in shape or `row` is out
    /// of bounds.
    pub fn from_mesh_row(theta_mesh: &Grid2<f64>, phi_mesh: &Grid2<f64>, row: usize) -> Result<Self> {
        if theta_mesh.shape() != phi_mesh.shape() {
            return Err(PondeError::InvalidRange(format!(
                "Mesh shapes differ: {:?} vs {:?}",
                theta_mesh.shape(),
                phi_mesh.shape()
            )));
        }
        let (thetas, phis) = match (theta_mesh.row(row), phi_mesh.row(row)) {
            (Some(t), Some(p)) => (t, p),
            _ => {
                return Err(PondeError::InvalidRange(format!(
                    "Mesh row {} out of bounds ({} rows)",
                    row,
                    theta_mesh.rows()
                )))
            }
        };

        let rows = thetas
            .iter()
            .zip(phis)
            .map(|(&t, &p)| AngleRow {
                theta: t,
                phi: p,
                f_theta: fold(t),
            })
            .collect();
        Ok(AngleTable { rows })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row index of the maximum of each column, or `None` for an empty
    /// table or an all-NaN column. The first maximum wins on ties.
    pub fn column_max(&self) -> [Option<usize>; 3] {
        let mut out = [None; 3];
        for (col, slot) in out.iter_mut().enumerate() {
            let mut best: Option<(usize, f64)> = None;
            for (idx, row) in self.rows.iter().enumerate() {
                let v = row.column(col);
                if v.is_nan() {
                    continue;
                }
                match best {
                    Some((_, b)) if v <= b => {}
                    _ => best = Some((idx, v)),
                }
            }
            *slot = best.map(|(idx, _)| idx);
        }
        out
    }
}

impl fmt::Display for AngleTable {
    /// Fixed-width rendering; column maxima are marked with `*`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let maxima = self.column_max();
        writeln!(f, "{:>5}  {:>12}  {:>12}  {:>12}", "", COLUMNS[0], COLUMNS[1], COLUMNS[2])?;
        for (idx, row) in self.rows.iter().enumerate() {
            write!(f, "{:>5}", idx)?;
            for col in 0..3 {
                let mark = if maxima[col] == Some(idx) { '*' } else { ' ' };
                write!(f, "  {:>11.6}{}", row.column(col), mark)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
