//! Polygon File Format (PLY) mesh export

use crate::mesh::TriangleMesh;
use crate::visualization::SurfaceStyle;
use crate::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a triangle mesh to PLY (Polygon File Format) in ASCII format
///
/// Every vertex carries the style colour, so viewers that honour vertex
/// colours show the surface in the chosen colour.
///
/// # Format
/// ```text
/// ply
/// format ascii 1.0
/// element vertex N
/// property float x
/// property float y
/// property float z
/// property uchar red
/// property uchar green
/// property uchar blue
/// element face M
/// property list uchar int vertex_indices
/// end_header
/// ```
pub fn write_ply<P: AsRef<Path>>(mesh: &TriangleMesh, style: &SurfaceStyle, path: P) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    write_ply_to(mesh, style, &mut file)?;
    file.flush()?;
    Ok(())
}

/// Write PLY text to any writer.
pub fn write_ply_to<W: Write>(mesh: &TriangleMesh, style: &SurfaceStyle, out: &mut W) -> Result<()> {
    let color = style.color;

    writeln!(out, "ply")?;
    writeln!(out, "format ascii 1.0")?;
    writeln!(out, "comment exported by ponde, color {}", color)?;
    writeln!(out, "element vertex {}", mesh.vertices.len())?;
    writeln!(out, "property float x")?;
    writeln!(out, "property float y")?;
    writeln!(out, "property float z")?;
    writeln!(out, "property uchar red")?;
    writeln!(out, "property uchar green")?;
    writeln!(out, "property uchar blue")?;
    writeln!(out, "element face {}", mesh.triangles.len())?;
    writeln!(out, "property list uchar int vertex_indices")?;
    writeln!(out, "end_header")?;

    for vertex in &mesh.vertices {
        writeln!(
            out,
            "{:.6} {:.6} {:.6} {} {} {}",
            vertex[0], vertex[1], vertex[2], color.r, color.g, color.b
        )?;
    }

    for &[i, j, k] in &mesh.triangles {
        writeln!(out, "3 {} {} {}", i, j, k)?;
    }

    Ok(())
}
