use anyhow::Result;
use ponde::{RenderConfig, SurfaceBounds};

pub fn run(config: &RenderConfig) -> Result<()> {
    let grid = super::evaluate(config)?;
    let (rows, cols) = grid.shape();
    let bounds = SurfaceBounds::from_grid(&grid);
    let (xmin, ymin, zmin, xmax, ymax, zmax) = bounds.get();

    println!("Surface grid (a = {}, b = {})", config.a, config.b);
    println!("  Shape:    {} x {} (phi rows x theta columns)", rows, cols);
    println!("  X range:  [{:.4}, {:.4}]", xmin, xmax);
    println!("  Y range:  [{:.4}, {:.4}]", ymin, ymax);
    println!("  Z range:  [{:.4}, {:.4}]", zmin, zmax);
    println!(
        "  Fits view volume ±{}: {}",
        config.view_extent,
        if bounds.fits_within_cube(config.view_extent) { "yes" } else { "no" }
    );

    Ok(())
}
