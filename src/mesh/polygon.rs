//! Convex planar polygons, the faces of a [`Mesh`](crate::mesh::Mesh)

use crate::float_types::Real;
use crate::float_types::parry3d::bounding_volume::Aabb;
use crate::mesh::plane::Plane;
use crate::mesh::vertex::Vertex;
use nalgebra::{Point3, Vector3};
use std::sync::OnceLock;

/// A convex, planar polygon with cached plane and bounding box.
#[derive(Debug, Clone)]
pub struct Polygon {
    pub vertices: Vec<Vertex>,
    pub plane: Plane,
    bounding_box: OnceLock<Aabb>,
}

impl Polygon {
    /// Create a polygon, deriving its plane from the vertex ring.
    pub fn new(vertices: Vec<Vertex>) -> Self {
        let plane = Plane::from_vertices(&vertices);
        Self::with_plane(vertices, plane)
    }

    /// Create a polygon lying on an already known plane (split fragments).
    pub const fn with_plane(vertices: Vec<Vertex>, plane: Plane) -> Self {
        Polygon {
            vertices,
            plane,
            bounding_box: OnceLock::new(),
        }
    }

    /// Create a polygon from bare positions; every vertex gets the face normal.
    pub fn from_points(points: &[Point3<Real>]) -> Self {
        let mut vertices: Vec<Vertex> = points
            .iter()
            .map(|p| Vertex::new(*p, Vector3::zeros()))
            .collect();
        let plane = Plane::from_vertices(&vertices);
        for v in &mut vertices {
            v.normal = plane.normal();
        }
        Self::with_plane(vertices, plane)
    }

    /// Reverse winding and flip every normal and the plane.
    pub fn flip(&mut self) {
        self.vertices.reverse();
        for v in &mut self.vertices {
            v.flip();
        }
        self.plane.flip();
        self.bounding_box = OnceLock::new();
    }

    /// Bounding box of the vertices, computed once.
    pub fn bounding_box(&self) -> Aabb {
        *self.bounding_box.get_or_init(|| {
            let mut mins = Point3::new(Real::MAX, Real::MAX, Real::MAX);
            let mut maxs = Point3::new(-Real::MAX, -Real::MAX, -Real::MAX);
            for v in &self.vertices {
                mins = mins.inf(&v.pos);
                maxs = maxs.sup(&v.pos);
            }
            Aabb::new(mins, maxs)
        })
    }

    /// Fan triangulation; valid because polygons are convex.
    pub fn triangulate(&self) -> Vec<[Vertex; 3]> {
        let Some(first) = self.vertices.first() else {
            return Vec::new();
        };
        self.vertices
            .windows(2)
            .skip(1)
            .map(|pair| [*first, pair[0], pair[1]])
            .collect()
    }

    /// Surface area of the polygon.
    pub fn area(&self) -> Real {
        self.triangulate()
            .iter()
            .map(|[a, b, c]| 0.5 * (b.pos - a.pos).cross(&(c.pos - a.pos)).norm())
            .sum()
    }

    /// This polygon's contribution to the enclosed volume of a closed mesh
    /// (divergence theorem over the fan triangles).
    pub fn signed_volume(&self) -> Real {
        self.triangulate()
            .iter()
            .map(|[a, b, c]| a.pos.coords.dot(&b.pos.coords.cross(&c.pos.coords)) / 6.0)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn flip_reverses_plane_and_winding() {
        let mut tri = Polygon::from_points(&[
            Point3::origin(),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]);
        let first = tri.vertices[0].pos;
        tri.flip();
        assert_relative_eq!(tri.plane.normal(), -Vector3::z());
        assert_eq!(tri.vertices[2].pos, first);
        assert_relative_eq!(tri.vertices[0].normal, -Vector3::z());
    }

    #[test]
    fn fan_triangulation_of_pentagon() {
        let pts: Vec<Point3<Real>> = (0..5)
            .map(|i| {
                let a = i as Real * std::f64::consts::TAU / 5.0;
                Point3::new(a.cos(), a.sin(), 0.0)
            })
            .collect();
        let poly = Polygon::from_points(&pts);
        assert_eq!(poly.triangulate().len(), 3);
        let bb = poly.bounding_box();
        assert_relative_eq!(bb.maxs.x, 1.0, epsilon = 1e-12);
    }
}
