//! Axis-aligned bounding box of an evaluated surface
//!
//! Used to check the surface against the cubic view volume it is
//! plotted into.

use crate::surface::SurfaceGrid;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// 3D bounding box with an optional gap.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurfaceBounds {
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
    zmin: f64,
    zmax: f64,
    gap: f64,
    void: bool,
}

impl Default for SurfaceBounds {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfaceBounds {
    /// Creates an empty bounding box (void)
    pub fn new() -> Self {
        SurfaceBounds {
            xmin: f64::MAX,
            xmax: f64::NEG_INFINITY,
            ymin: f64::MAX,
            ymax: f64::NEG_INFINITY,
            zmin: f64::MAX,
            zmax: f64::NEG_INFINITY,
            gap: 0.0,
            void: true,
        }
    }

    /// Tight box around every point of the grid.
    pub fn from_grid(grid: &SurfaceGrid) -> Self {
        let mut bounds = Self::new();
        for [x, y, z] in grid.points() {
            bounds.update_point(x, y, z);
        }
        bounds
    }

    #[inline]
    pub fn is_void(&self) -> bool {
        self.void
    }

    /// Updates this box to contain the given point. NaN coordinates are ignored.
    pub fn update_point(&mut self, x: f64, y: f64, z: f64) {
        if x.is_nan() || y.is_nan() || z.is_nan() {
            return;
        }
        if self.void {
            self.xmin = x;
            self.xmax = x;
            self.ymin = y;
            self.ymax = y;
            self.zmin = z;
            self.zmax = z;
            self.void = false;
        } else {
            self.xmin = self.xmin.min(x);
            self.xmax = self.xmax.max(x);
            self.ymin = self.ymin.min(y);
            self.ymax = self.ymax.max(y);
            self.zmin = self.zmin.min(z);
            self.zmax = self.zmax.max(z);
        }
    }

    /// Enlarges the box gap
    pub fn enlarge(&mut self, tol: f64) {
        self.gap = self.gap.max(tol.abs());
    }

    /// Returns the bounds including gap: (xmin, ymin, zmin, xmax, ymax, zmax)
    pub fn get(&self) -> (f64, f64, f64, f64, f64, f64) {
        (
            self.xmin - self.gap,
            self.ymin - self.gap,
            self.zmin - self.gap,
            self.xmax + self.gap,
            self.ymax + self.gap,
            self.zmax + self.gap,
        )
    }

    /// Returns the minimum corner
    pub fn corner_min(&self) -> Point3<f64> {
        let (xmin, ymin, zmin, _, _, _) = self.get();
        Point3::new(xmin, ymin, zmin)
    }

    /// Returns the maximum corner
    pub fn corner_max(&self) -> Point3<f64> {
        let (_, _, _, xmax, ymax, zmax) = self.get();
        Point3::new(xmax, ymax, zmax)
    }

    /// Returns the center of this box, or None if void
    pub fn center(&self) -> Option<Point3<f64>> {
        if self.is_void() {
            return None;
        }
        Some(nalgebra::center(&self.corner_min(), &self.corner_max()))
    }

    /// Returns true if a point is inside this box
    pub fn contains(&self, p: &Point3<f64>) -> bool {
        if self.is_void() {
            return false;
        }
        let (xmin, ymin, zmin, xmax, ymax, zmax) = self.get();
        p.x >= xmin && p.x <= xmax && p.y >= ymin && p.y <= ymax && p.z >= zmin && p.z <= zmax
    }

    /// True if the box lies inside the cube `[-extent, extent]³`.
    pub fn fits_within_cube(&self, extent: f64) -> bool {
        if self.is_void() {
            return true;
        }
        let e = extent.abs();
        let (xmin, ymin, zmin, xmax, ymax, zmax) = self.get();
        [xmin, ymin, zmin].iter().all(|&v| v >= -e) && [xmax, ymax, zmax].iter().all(|&v| v <= e)
    }

    /// Smallest cube half-width centred at the origin that holds the box.
    pub fn max_abs_extent(&self) -> f64 {
        if self.is_void() {
            return 0.0;
        }
        let (xmin, ymin, zmin, xmax, ymax, zmax) = self.get();
        [xmin, ymin, zmin, xmax, ymax, zmax]
            .iter()
            .fold(0.0_f64, |acc, v| acc.max(v.abs()))
    }
}
