//! Oriented planes and polygon classification against them

use crate::float_types::{Real, tolerance};
use crate::mesh::polygon::Polygon;
use crate::mesh::vertex::Vertex;
use nalgebra::{Point3, Vector3};

// Classification bit flags, OR-ed together across a polygon's vertices.
pub const COPLANAR: i8 = 0;
pub const FRONT: i8 = 1;
pub const BACK: i8 = 2;
pub const SPANNING: i8 = 3;

/// A plane `normal · p = w` with a unit normal.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    normal: Vector3<Real>,
    w: Real,
}

/// Result of [`Plane::split_polygon`]: `(coplanar_front, coplanar_back, front, back)`.
pub type SplitPolygon = (Vec<Polygon>, Vec<Polygon>, Vec<Polygon>, Vec<Polygon>);

impl Plane {
    /// Plane with the given (not necessarily unit) normal through the point
    /// `normal.normalize() * offset`. Returns `None` for a zero normal.
    pub fn from_normal(normal: Vector3<Real>, offset: Real) -> Option<Self> {
        let len = normal.norm();
        if len <= Real::EPSILON {
            return None;
        }
        Some(Plane {
            normal: normal / len,
            w: offset,
        })
    }

    /// Best-fit plane of a planar ring, oriented by its winding.
    ///
    /// Uses Newell's method, which is stable for rings with nearly collinear
    /// leading vertices (common after repeated splitting). Degenerate rings
    /// get a +Z plane through their first vertex.
    pub fn from_vertices(vertices: &[Vertex]) -> Self {
        let n = vertices.len();
        let normal = (0..n).fold(Vector3::zeros(), |acc, i| {
            let a = vertices[i].pos;
            let b = vertices[(i + 1) % n].pos;
            acc + Vector3::new(
                (a.y - b.y) * (a.z + b.z),
                (a.z - b.z) * (a.x + b.x),
                (a.x - b.x) * (a.y + b.y),
            )
        });

        let anchor = vertices.first().map_or_else(Point3::origin, |v| v.pos);
        let len = normal.norm();
        let normal = if len > Real::EPSILON {
            normal / len
        } else {
            Vector3::z()
        };
        Plane {
            normal,
            w: normal.dot(&anchor.coords),
        }
    }

    pub const fn normal(&self) -> Vector3<Real> {
        self.normal
    }

    pub const fn offset(&self) -> Real {
        self.w
    }

    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    /// Signed distance of `point` from the plane, positive on the front side.
    pub fn signed_distance(&self, point: &Point3<Real>) -> Real {
        self.normal.dot(&point.coords) - self.w
    }

    /// Classify a point as [`FRONT`], [`BACK`] or [`COPLANAR`].
    pub fn orient_point(&self, point: &Point3<Real>) -> i8 {
        let t = self.signed_distance(point);
        let eps = tolerance();
        if t < -eps {
            BACK
        } else if t > eps {
            FRONT
        } else {
            COPLANAR
        }
    }

    /// OR of the classifications of every vertex of `polygon`.
    pub fn classify_polygon(&self, polygon: &Polygon) -> i8 {
        polygon
            .vertices
            .iter()
            .fold(COPLANAR, |acc, v| acc | self.orient_point(&v.pos))
    }

    /// Split `polygon` by this plane into four buckets:
    /// `(coplanar_front, coplanar_back, front, back)`.
    ///
    /// Coplanar polygons go to the front bucket when their normal agrees
    /// with this plane's normal. Spanning polygons are cut along the plane;
    /// fragments with fewer than 3 vertices are dropped.
    pub fn split_polygon(&self, polygon: &Polygon) -> SplitPolygon {
        let mut coplanar_front = Vec::new();
        let mut coplanar_back = Vec::new();
        let mut front = Vec::new();
        let mut back = Vec::new();

        let types: Vec<i8> = polygon
            .vertices
            .iter()
            .map(|v| self.orient_point(&v.pos))
            .collect();
        let polygon_type = types.iter().fold(COPLANAR, |acc, &t| acc | t);

        match polygon_type {
            COPLANAR => {
                if self.normal.dot(&polygon.plane.normal()) > 0.0 {
                    coplanar_front.push(polygon.clone());
                } else {
                    coplanar_back.push(polygon.clone());
                }
            },
            FRONT => front.push(polygon.clone()),
            BACK => back.push(polygon.clone()),
            _ => {
                let count = polygon.vertices.len();
                let mut split_front = Vec::with_capacity(count + 1);
                let mut split_back = Vec::with_capacity(count + 1);

                for i in 0..count {
                    let j = (i + 1) % count;
                    let (type_i, type_j) = (types[i], types[j]);
                    let (vi, vj) = (&polygon.vertices[i], &polygon.vertices[j]);

                    if type_i != BACK {
                        split_front.push(*vi);
                    }
                    if type_i != FRONT {
                        split_back.push(*vi);
                    }

                    if (type_i | type_j) == SPANNING {
                        let denom = self.normal.dot(&(vj.pos - vi.pos));
                        if denom.abs() > Real::EPSILON {
                            let t = (self.w - self.normal.dot(&vi.pos.coords)) / denom;
                            let v = vi.interpolate(vj, t);
                            split_front.push(v);
                            split_back.push(v);
                        }
                    }
                }

                if split_front.len() >= 3 {
                    front.push(Polygon::with_plane(split_front, polygon.plane.clone()));
                }
                if split_back.len() >= 3 {
                    back.push(Polygon::with_plane(split_back, polygon.plane.clone()));
                }
            },
        }

        (coplanar_front, coplanar_back, front, back)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square_at_z(z: Real) -> Polygon {
        Polygon::from_points(&[
            Point3::new(-1.0, -1.0, z),
            Point3::new(1.0, -1.0, z),
            Point3::new(1.0, 1.0, z),
            Point3::new(-1.0, 1.0, z),
        ])
    }

    #[test]
    fn newell_normal_follows_winding() {
        let poly = square_at_z(2.0);
        assert_relative_eq!(poly.plane.normal(), Vector3::z());
        assert_relative_eq!(poly.plane.offset(), 2.0);
    }

    #[test]
    fn orient_point_sides() {
        let plane = Plane::from_normal(Vector3::x(), 1.0).unwrap();
        assert_eq!(plane.orient_point(&Point3::new(2.0, 0.0, 0.0)), FRONT);
        assert_eq!(plane.orient_point(&Point3::new(0.0, 5.0, 0.0)), BACK);
        assert_eq!(plane.orient_point(&Point3::new(1.0, -3.0, 9.0)), COPLANAR);
    }

    #[test]
    fn split_spanning_square() {
        let plane = Plane::from_normal(Vector3::x(), 0.0).unwrap();
        let (cf, cb, front, back) = plane.split_polygon(&square_at_z(0.0));
        assert!(cf.is_empty() && cb.is_empty());
        assert_eq!(front.len(), 1);
        assert_eq!(back.len(), 1);
        assert_relative_eq!(front[0].area(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(back[0].area(), 2.0, epsilon = 1e-12);
        assert!(front[0].vertices.iter().all(|v| v.pos.x >= -1e-12));
    }

    #[test]
    fn split_coplanar_by_orientation() {
        let plane = Plane::from_normal(-Vector3::z(), 0.0).unwrap();
        let (cf, cb, _, _) = plane.split_polygon(&square_at_z(0.0));
        assert!(cf.is_empty());
        assert_eq!(cb.len(), 1);
    }

    #[test]
    fn zero_normal_has_no_plane() {
        assert!(Plane::from_normal(Vector3::zeros(), 1.0).is_none());
    }
}
