//! Lobed-ring surface evaluation
//!
//! The surface is a ring of radius `a` swept by a tube whose cross
//! section is modulated by the folded angle:
//!
//! ```text
//! r(θ) = sqrt(b² - a² sin² f(θ))
//! x = (a cos f(θ) + cos φ · r(θ)) cos θ
//! y = (a cos f(θ) + cos φ · r(θ)) sin θ
//! z = sin φ · r(θ)
//! ```

use crate::angle::{fold, AngleRange};
use crate::grid::{meshgrid, Grid2};
use crate::precision::min_shape_ratio;
use crate::{PondeError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Ring radius `a` and lobe radius `b`.
///
/// Values from [`ShapeConstants::new`] satisfy `a > 0`, `b > 0` and
/// `b / a > sin(π/8)`, which keeps the radicand non-negative everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeConstants {
    a: f64,
    b: f64,
}

impl ShapeConstants {
    /// Validate and create shape constants.
    ///
    /// # Errors
    /// Returns `ShapeConstants` if either value is not finite and positive,
    /// or if `b / a <= sin(π/8)`.
    ///
    /// # Example
    /// ```
    /// use ponde::ShapeConstants;
    ///
    /// assert!(ShapeConstants::new(9.0, 4.0).is_ok());
    /// assert!(ShapeConstants::new(10.0, 1.0).is_err());
    /// ```
    pub fn new(a: f64, b: f64) -> Result<Self> {
        let reject = |reason: String| PondeError::ShapeConstants { a, b, reason };

        if !a.is_finite() || !b.is_finite() {
            return Err(reject("constants must be finite".into()));
        }
        if a <= 0.0 || b <= 0.0 {
            return Err(reject("constants must be positive".into()));
        }
        let ratio = b / a;
        if ratio <= min_shape_ratio() {
            return Err(reject(format!(
                "b/a = {:.6} must exceed sin(pi/8) = {:.6}",
                ratio,
                min_shape_ratio()
            )));
        }

        Ok(ShapeConstants { a, b })
    }

    /// Create shape constants that are only checked for being finite and
    /// positive. The ratio bound is left to the per-cell guard of
    /// [`SurfaceEvaluator::build_grid`].
    ///
    /// # Errors
    /// Returns `ShapeConstants` if either value is not finite and positive.
    pub fn positive(a: f64, b: f64) -> Result<Self> {
        if !a.is_finite() || !b.is_finite() || a <= 0.0 || b <= 0.0 {
            return Err(PondeError::ShapeConstants {
                a,
                b,
                reason: "constants must be finite and positive".into(),
            });
        }
        Ok(ShapeConstants { a, b })
    }

    /// True when `b / a > sin(π/8)`.
    #[inline]
    pub fn is_admissible(&self) -> bool {
        self.b / self.a > min_shape_ratio()
    }

    #[inline]
    pub const fn a(&self) -> f64 {
        self.a
    }

    #[inline]
    pub const fn b(&self) -> f64 {
        self.b
    }
}

/// Coordinate grids of the surface, shape (M, N) with rows along φ and
/// columns along θ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceGrid {
    pub theta: AngleRange,
    pub phi: AngleRange,
    pub x: Grid2<f64>,
    pub y: Grid2<f64>,
    pub z: Grid2<f64>,
}

impl SurfaceGrid {
    /// (M, N) = (phi samples, theta samples)
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.x.shape()
    }

    /// Surface point at mesh cell `(row, col)`.
    pub fn point(&self, row: usize, col: usize) -> Option<[f64; 3]> {
        Some([
            *self.x.get(row, col)?,
            *self.y.get(row, col)?,
            *self.z.get(row, col)?,
        ])
    }

    /// All surface points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = [f64; 3]> + '_ {
        self.x
            .as_slice()
            .iter()
            .zip(self.y.as_slice())
            .zip(self.z.as_slice())
            .map(|((&x, &y), &z)| [x, y, z])
    }
}

/// Evaluates the lobed-ring surface for fixed shape constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceEvaluator {
    shape: ShapeConstants,
}

impl SurfaceEvaluator {
    pub fn new(shape: ShapeConstants) -> Self {
        SurfaceEvaluator { shape }
    }

    #[inline]
    pub fn shape(&self) -> ShapeConstants {
        self.shape
    }

    /// `b² - a² sin² f(θ)`; non-negative for validated constants.
    #[inline]
    pub fn radicand(&self, theta: f64) -> f64 {
        radicand(self.shape.a, self.shape.b, fold(theta))
    }

    /// Tube radius at θ, or `None` where the radicand is negative.
    pub fn radius(&self, theta: f64) -> Option<f64> {
        let q = self.radicand(theta);
        (q >= 0.0).then(|| q.sqrt())
    }

    /// Single surface point.
    ///
    /// # Errors
    /// Returns `InvalidRange` if θ or φ is not finite, and `Domain` if the
    /// radicand at θ is negative or NaN. The point is reported as cell (0, 0) of a
    /// 1×1 mesh.
    pub fn point_at(&self, theta: f64, phi: f64) -> Result<[f64; 3]> {
        if !theta.is_finite() || !phi.is_finite() {
            return Err(PondeError::InvalidRange(format!(
                "Angles must be finite, got theta={} phi={}",
                theta, phi
            )));
        }
        let f = fold(theta);
        let q = radicand(self.shape.a, self.shape.b, f);
        if q < 0.0 || q.is_nan() {
            return Err(PondeError::Domain {
                a: self.shape.a,
                b: self.shape.b,
                row: 0,
                col: 0,
                violations: 1,
            });
        }
        Ok(cartesian(self.shape.a, theta, phi, f, q.sqrt()))
    }

    /// Evaluate the surface over the mesh of `theta` (columns) and `phi` (rows).
    ///
    /// Both ranges must be non-empty with finite samples (`InvalidRange`).
    /// Every cell's radicand is checked before any coordinate is produced.
    /// If any cell is negative the call fails with `Domain`, naming the
    /// first offending cell and the total count; no partial grid is
    /// returned.
    pub fn build_grid(&self, theta: &AngleRange, phi: &AngleRange) -> Result<SurfaceGrid> {
        theta.validate()?;
        phi.validate()?;

        let (a, b) = (self.shape.a, self.shape.b);
        let (theta_mesh, phi_mesh) = meshgrid(theta, phi);
        let f_mesh = theta_mesh.map(|&t| fold(t));
        let q_mesh = f_mesh.map(|&f| radicand(a, b, f));

        let mut first_bad = None;
        let mut violations = 0;
        for (idx, &q) in q_mesh.as_slice().iter().enumerate() {
            if q < 0.0 || q.is_nan() {
                violations += 1;
                if first_bad.is_none() {
                    first_bad = Some(idx);
                }
            }
        }
        if let Some(idx) = first_bad {
            let cols = q_mesh.cols();
            return Err(PondeError::Domain {
                a,
                b,
                row: idx / cols,
                col: idx % cols,
                violations,
            });
        }

        let (rows, cols) = theta_mesh.shape();
        let mut xs = Vec::with_capacity(rows * cols);
        let mut ys = Vec::with_capacity(rows * cols);
        let mut zs = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                let r = q_mesh.at(i, j).sqrt();
                let [x, y, z] = cartesian(a, theta_mesh.at(i, j), phi_mesh.at(i, j), f_mesh.at(i, j), r);
                xs.push(x);
                ys.push(y);
                zs.push(z);
            }
        }

        debug!(rows, cols, a, b, "evaluated lobed-ring surface grid");

        Ok(SurfaceGrid {
            theta: theta.clone(),
            phi: phi.clone(),
            x: Grid2::from_vec(rows, cols, xs)?,
            y: Grid2::from_vec(rows, cols, ys)?,
            z: Grid2::from_vec(rows, cols, zs)?,
        })
    }
}

/// Evaluate the surface for raw constants `a`, `b`.
///
/// Validates the constants first, then meshes.
///
/// # Example
/// ```
/// use ponde::{build_grid, AngleRange};
///
/// let theta = AngleRange::full_turn(100)?;
/// let phi = AngleRange::full_turn(100)?;
/// let grid = build_grid(&theta, &phi, 9.0, 4.0)?;
/// assert_eq!(grid.shape(), (100, 100));
/// # Ok::<(), ponde::PondeError>(())
/// ```
pub fn build_grid(theta: &AngleRange, phi: &AngleRange, a: f64, b: f64) -> Result<SurfaceGrid> {
    let shape = ShapeConstants::new(a, b)?;
    SurfaceEvaluator::new(shape).build_grid(theta, phi)
}

#[inline]
fn radicand(a: f64, b: f64, f: f64) -> f64 {
    let s = f.sin();
    b * b - a * a * s * s
}

#[inline]
fn cartesian(a: f64, theta: f64, phi: f64, f: f64, r: f64) -> [f64; 3] {
    let ring = a * f.cos() + phi.cos() * r;
    [ring * theta.cos(), ring * theta.sin(), phi.sin() * r]
}
