//! File export for meshes, tables and grids

pub mod obj;
pub mod ply;

pub use obj::{write_obj, write_obj_to};
pub use ply::{write_ply, write_ply_to};

use crate::surface::SurfaceGrid;
use crate::table::{AngleTable, COLUMNS};
use crate::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write an angle table as CSV with header `theta,phi,f_theta`.
pub fn write_table_csv<P: AsRef<Path>>(table: &AngleTable, path: P) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    write_table_csv_to(table, &mut file)?;
    file.flush()?;
    Ok(())
}

/// Write CSV text to any writer. Values use full round-trip precision.
pub fn write_table_csv_to<W: Write>(table: &AngleTable, out: &mut W) -> Result<()> {
    writeln!(out, "{}", COLUMNS.join(","))?;
    for row in &table.rows {
        writeln!(out, "{},{},{}", row.theta, row.phi, row.f_theta)?;
    }
    Ok(())
}

/// Serialize a surface grid to JSON.
pub fn write_grid_json<P: AsRef<Path>>(grid: &SurfaceGrid, path: P) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut file, grid)?;
    file.flush()?;
    Ok(())
}

/// Read back a grid written by [`write_grid_json`].
pub fn read_grid_json<P: AsRef<Path>>(path: P) -> Result<SurfaceGrid> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::AngleRange;

    #[test]
    fn test_table_csv() {
        let theta = AngleRange::full_turn(4).unwrap();
        let phi = AngleRange::full_turn(4).unwrap();
        let table = AngleTable::new(&theta, &phi).unwrap();

        let mut buf = Vec::new();
        write_table_csv_to(&table, &mut buf).unwrap();
        let content = String::from_utf8(buf).unwrap();
        let mut lines = content.lines();

        assert_eq!(lines.next(), Some("theta,phi,f_theta"));
        assert_eq!(lines.next(), Some("0,0,0"));
        assert_eq!(content.lines().count(), 5);
    }
}
