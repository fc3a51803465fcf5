pub mod check;
pub mod export;
pub mod grid;
pub mod table;

use anyhow::Result;
use ponde::{RenderConfig, SurfaceBounds, SurfaceEvaluator, SurfaceGrid};
use tracing::warn;

/// Evaluate the configured surface and warn when it leaves the view volume.
pub(crate) fn evaluate(config: &RenderConfig) -> Result<SurfaceGrid> {
    let (theta, phi) = config.ranges()?;
    let grid = SurfaceEvaluator::new(config.shape()?).build_grid(&theta, &phi)?;

    let bounds = SurfaceBounds::from_grid(&grid);
    if !bounds.fits_within_cube(config.view_extent) {
        warn!(
            extent = bounds.max_abs_extent(),
            view_extent = config.view_extent,
            "surface extends past the view volume and will be clipped"
        );
    }
    Ok(grid)
}
