//! Wavefront OBJ mesh export

use crate::mesh::TriangleMesh;
use crate::surface::ShapeConstants;
use crate::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a tessellated ring to Wavefront OBJ.
///
/// The mesh is emitted as one object named after its shape constants
/// (`o ring_a9_b4`), followed by `v` positions, `vn` normals when there is
/// one per vertex, and 1-indexed `f` faces.
///
/// # Example
/// ```rust,no_run
/// use ponde::{build_grid, triangulate_grid, AngleRange, ShapeConstants};
/// use ponde::io::write_obj;
///
/// let theta = AngleRange::full_turn(100)?;
/// let phi = AngleRange::full_turn(100)?;
/// let mesh = triangulate_grid(&build_grid(&theta, &phi, 9.0, 4.0)?)?;
/// write_obj(&mesh, &ShapeConstants::new(9.0, 4.0)?, "ring.obj")?;
/// # Ok::<(), ponde::PondeError>(())
/// ```
pub fn write_obj<P: AsRef<Path>>(mesh: &TriangleMesh, shape: &ShapeConstants, path: P) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    write_obj_to(mesh, shape, &mut file)?;
    file.flush()?;
    Ok(())
}

/// Object name for a ring, e.g. `ring_a9_b4` or `ring_a9.5_b4`.
pub fn object_name(shape: &ShapeConstants) -> String {
    format!("ring_a{}_b{}", shape.a(), shape.b())
}

/// Write OBJ text to any writer.
pub fn write_obj_to<W: Write>(mesh: &TriangleMesh, shape: &ShapeConstants, out: &mut W) -> Result<()> {
    writeln!(out, "# ponde lobed ring, a = {}, b = {}", shape.a(), shape.b())?;
    writeln!(
        out,
        "# {} vertices, {} triangles",
        mesh.vertices.len(),
        mesh.triangles.len()
    )?;
    writeln!(out, "o {}", object_name(shape))?;

    for [x, y, z] in &mesh.vertices {
        writeln!(out, "v {:.6} {:.6} {:.6}", x, y, z)?;
    }

    let per_vertex_normals = !mesh.normals.is_empty() && mesh.normals.len() == mesh.vertices.len();
    if per_vertex_normals {
        for [x, y, z] in &mesh.normals {
            writeln!(out, "vn {:.6} {:.6} {:.6}", x, y, z)?;
        }
    }

    let corner = |v: usize| {
        if per_vertex_normals {
            format!("{0}//{0}", v + 1)
        } else {
            (v + 1).to_string()
        }
    };
    for &[i, j, k] in &mesh.triangles {
        writeln!(out, "f {} {} {}", corner(i), corner(j), corner(k))?;
    }

    Ok(())
}
