use anyhow::{Context, Result};
use ponde::io::write_table_csv;
use ponde::{meshgrid, AngleTable, RenderConfig};
use std::path::Path;

pub fn run(config: &RenderConfig, mesh_row: Option<usize>, csv: Option<&Path>) -> Result<()> {
    let (theta, phi) = config.ranges()?;
    let table = match mesh_row {
        Some(row) => {
            let (theta_mesh, phi_mesh) = meshgrid(&theta, &phi);
            AngleTable::from_mesh_row(&theta_mesh, &phi_mesh, row)?
        }
        None => AngleTable::new(&theta, &phi)?,
    };

    match csv {
        Some(path) => {
            write_table_csv(&table, path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(rows = table.len(), path = %path.display(), "wrote table");
        }
        None => print!("{}", table),
    }

    Ok(())
}
