//! ponde: lobed-ring parametric surface kernel
//!
//! Evaluates the pon-de-ring surface over a (θ, φ) mesh, tabulates the
//! intermediate values, tessellates the result and exports it.

pub mod precision;
pub mod angle;
pub mod grid;
pub mod surface;
pub mod table;
pub mod bnd;
pub mod mesh;
pub mod visualization;
pub mod io;
pub mod config;

// Re-exports for convenience
pub use angle::{fold, fold_all, AngleRange};
pub use grid::{meshgrid, Grid2};
pub use surface::{build_grid, ShapeConstants, SurfaceEvaluator, SurfaceGrid};
pub use table::AngleTable;
pub use bnd::SurfaceBounds;
pub use mesh::{triangulate_grid, TriangleMesh};
pub use visualization::{Rgb, SurfaceStyle};
pub use config::RenderConfig;

/// Result type for ponde operations
pub type Result<T> = std::result::Result<T, PondeError>;

#[derive(Debug, thiserror::Error)]
pub enum PondeError {
    #[error("Invalid shape constants a={a}, b={b}: {reason}")]
    ShapeConstants { a: f64, b: f64, reason: String },

    #[error(
        "Negative radicand for a={a}, b={b} at cell ({row}, {col}); {violations} cell(s) violate b^2 >= a^2 sin^2 f(theta)"
    )]
    Domain {
        a: f64,
        b: f64,
        row: usize,
        col: usize,
        violations: usize,
    },

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
