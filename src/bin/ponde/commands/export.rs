use anyhow::{Context, Result};
use ponde::io::{write_grid_json, write_obj, write_ply};
use ponde::{triangulate_grid, RenderConfig};
use std::path::Path;
use tracing::info;

use crate::cli::Format;

pub fn run(config: &RenderConfig, format: Format, out: &Path) -> Result<()> {
    let grid = super::evaluate(config)?;

    let written = match format {
        Format::Json => write_grid_json(&grid, out),
        Format::Obj => write_obj(&triangulate_grid(&grid)?, &config.shape()?, out),
        Format::Ply => write_ply(&triangulate_grid(&grid)?, &config.style()?, out),
    };
    written.with_context(|| format!("failed to write {}", out.display()))?;

    info!(?format, path = %out.display(), "exported surface");
    Ok(())
}
