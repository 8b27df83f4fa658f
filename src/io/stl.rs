use crate::float_types::Real;
use crate::mesh::Mesh;
use crate::mesh::vertex::Vertex;
use nalgebra::Vector3;
use std::fmt::Write as _;
use std::io::Cursor;

/// Facet normal of a triangle from its winding, falling back to the stored
/// vertex normal for slivers.
fn facet_normal(tri: &[Vertex; 3]) -> Vector3<Real> {
    let n = (tri[1].pos - tri[0].pos).cross(&(tri[2].pos - tri[0].pos));
    n.try_normalize(Real::EPSILON).unwrap_or(tri[0].normal)
}

/// Convert a [`Mesh`] to an **ASCII STL** string with the given `name`.
///
/// ```rust
/// # use pegbox::{io::stl::to_stl_ascii, mesh::Mesh};
/// let text = to_stl_ascii(&Mesh::cuboid(1.0, 1.0, 1.0), "cube");
/// assert!(text.starts_with("solid cube"));
/// ```
pub fn to_stl_ascii(mesh: &Mesh, name: &str) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = writeln!(out, "solid {name}");

    for tri in mesh.triangles() {
        let n = facet_normal(&tri);
        let _ = writeln!(out, "  facet normal {:.6} {:.6} {:.6}", n.x, n.y, n.z);
        out.push_str("    outer loop\n");
        for v in &tri {
            let p = v.pos;
            let _ = writeln!(out, "      vertex {:.6} {:.6} {:.6}", p.x, p.y, p.z);
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    }

    let _ = writeln!(out, "endsolid {name}");
    out
}

/// Convert a [`Mesh`] to a **binary STL** byte vector.
///
/// Binary STL has no room for a solid name in the body, so none is taken.
///
/// ```rust
/// # use pegbox::{io::stl::to_stl_binary, mesh::Mesh};
/// let bytes = to_stl_binary(&Mesh::cuboid(1.0, 1.0, 1.0))?;
/// assert_eq!(bytes.len(), 84 + 12 * 50);
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn to_stl_binary(mesh: &Mesh) -> std::io::Result<Vec<u8>> {
    use stl_io::{Normal, Triangle, Vertex as StlVertex, write_stl};

    let triangles: Vec<Triangle> = mesh
        .triangles()
        .into_iter()
        .map(|tri| {
            let n = facet_normal(&tri);
            Triangle {
                normal: Normal::new([n.x as f32, n.y as f32, n.z as f32]),
                vertices: tri.map(|v| StlVertex::new([v.pos.x as f32, v.pos.y as f32, v.pos.z as f32])),
            }
        })
        .collect();

    let mut cursor = Cursor::new(Vec::new());
    write_stl(&mut cursor, triangles.iter())?;
    Ok(cursor.into_inner())
}

impl Mesh {
    pub fn to_stl_ascii(&self, name: &str) -> String {
        self::to_stl_ascii(self, name)
    }

    pub fn to_stl_binary(&self) -> std::io::Result<Vec<u8>> {
        self::to_stl_binary(self)
    }
}
