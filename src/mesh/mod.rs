//! `Mesh`: a closed polygon soup combined through BSP-tree boolean operations

use crate::errors::KernelError;
use crate::float_types::{
    PI, Real,
    parry3d::bounding_volume::{Aabb, BoundingVolume},
};
use nalgebra::{Matrix4, Point3, Rotation3, Translation3, Vector3};
use std::sync::OnceLock;

pub mod bsp;
pub mod extrude;
pub mod manifold;
pub mod plane;
pub mod polygon;
pub mod shapes;
pub mod vertex;

pub use manifold::ManifoldReport;

use bsp::Node;
use plane::Plane;
use polygon::Polygon;
use vertex::Vertex;

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    /// Convex planar faces; together they bound a closed volume.
    pub polygons: Vec<Polygon>,

    /// Lazily calculated AABB that spans `polygons`.
    bounding_box: OnceLock<Aabb>,
}

impl Mesh {
    pub const fn new() -> Self {
        Mesh {
            polygons: Vec::new(),
            bounding_box: OnceLock::new(),
        }
    }

    /// Build a Mesh from an existing polygon list
    pub fn from_polygons(polygons: Vec<Polygon>) -> Self {
        Mesh {
            polygons,
            bounding_box: OnceLock::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Split polygons into (may_touch, cannot_touch) using bounding‑box tests
    fn partition_polys(polys: &[Polygon], other_bb: &Aabb) -> (Vec<Polygon>, Vec<Polygon>) {
        polys
            .iter()
            .cloned()
            .partition(|p| p.bounding_box().intersects(other_bb))
    }

    /// Return a new Mesh representing union of the two Meshes.
    ///
    /// ```text
    /// let c = a.union(b);
    ///     +-------+            +-------+
    ///     |       |            |       |
    ///     |   a   |            |   c   |
    ///     |    +--+----+   =   |       +----+
    ///     +----+--+    |       +----+       |
    ///          |   b   |            |   c   |
    ///          |       |            |       |
    ///          +-------+            +-------+
    /// ```
    pub fn union(&self, other: &Mesh) -> Mesh {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        // avoid splitting obvious non‑intersecting faces
        let (a_clip, a_passthru) = Self::partition_polys(&self.polygons, &other.bounding_box());
        let (b_clip, b_passthru) = Self::partition_polys(&other.polygons, &self.bounding_box());

        let mut a = Node::from_polygons(&a_clip);
        let mut b = Node::from_polygons(&b_clip);

        a.clip_to(&b);
        b.clip_to(&a);
        b.invert();
        b.clip_to(&a);
        b.invert();
        a.build(&b.all_polygons());

        let mut polygons = a.all_polygons();
        polygons.extend(a_passthru);
        polygons.extend(b_passthru);
        Mesh::from_polygons(polygons)
    }

    /// Return a new Mesh representing the difference of the two Meshes.
    ///
    /// ```text
    /// let c = a.difference(b);
    ///     +-------+            +-------+
    ///     |       |            |       |
    ///     |   a   |            |   c   |
    ///     |    +--+----+   =   |    +--+
    ///     +----+--+    |       +----+
    ///          |   b   |
    ///          |       |
    ///          +-------+
    /// ```
    pub fn difference(&self, other: &Mesh) -> Mesh {
        if self.is_empty() || other.is_empty() {
            return self.clone();
        }
        let (a_clip, a_passthru) = Self::partition_polys(&self.polygons, &other.bounding_box());
        let (b_clip, _b_passthru) = Self::partition_polys(&other.polygons, &self.bounding_box());

        let mut a = Node::from_polygons(&a_clip);
        let mut b = Node::from_polygons(&b_clip);

        a.invert();
        a.clip_to(&b);
        b.clip_to(&a);
        b.invert();
        b.clip_to(&a);
        b.invert();
        a.build(&b.all_polygons());
        a.invert();

        let mut polygons = a.all_polygons();
        polygons.extend(a_passthru);
        Mesh::from_polygons(polygons)
    }

    /// Return a new Mesh representing the intersection of the two Meshes.
    ///
    /// ```text
    /// let c = a.intersection(b);
    ///     +-------+
    ///     |       |
    ///     |   a   |
    ///     |    +--+----+   =   +--+
    ///     +----+--+    |       +--+
    ///          |   b   |
    ///          |       |
    ///          +-------+
    /// ```
    pub fn intersection(&self, other: &Mesh) -> Mesh {
        if self.is_empty() || other.is_empty() {
            return Mesh::new();
        }
        let (a_clip, _) = Self::partition_polys(&self.polygons, &other.bounding_box());
        let (b_clip, _) = Self::partition_polys(&other.polygons, &self.bounding_box());

        let mut a = Node::from_polygons(&a_clip);
        let mut b = Node::from_polygons(&b_clip);

        a.invert();
        b.clip_to(&a);
        b.invert();
        a.clip_to(&b);
        b.clip_to(&a);
        a.build(&b.all_polygons());
        a.invert();

        Mesh::from_polygons(a.all_polygons())
    }

    /// Apply an arbitrary 3D transform (as a 4x4 matrix) to the mesh.
    ///
    /// Faces are flat, so vertex normals are re-derived from each transformed
    /// face. A transform with a negative determinant (a reflection) would
    /// turn the mesh inside out; vertex order is reversed in that case so
    /// faces keep pointing outward.
    ///
    /// ## Errors
    /// [`KernelError::SingularTransform`] if `mat` has no inverse.
    pub fn transform(&self, mat: &Matrix4<Real>) -> Result<Mesh, KernelError> {
        if mat.try_inverse().is_none() {
            return Err(KernelError::SingularTransform);
        }
        let reflects = mat.fixed_view::<3, 3>(0, 0).clone_owned().determinant() < 0.0;

        let mut polygons = Vec::with_capacity(self.polygons.len());
        for poly in &self.polygons {
            let mut positions = poly
                .vertices
                .iter()
                .map(|v| {
                    Point3::from_homogeneous(mat * v.pos.to_homogeneous())
                        .ok_or(KernelError::SingularTransform)
                })
                .collect::<Result<Vec<_>, _>>()?;
            if reflects {
                positions.reverse();
            }
            polygons.push(Polygon::from_points(&positions));
        }

        Ok(Mesh::from_polygons(polygons))
    }

    /// Keep the part of the mesh in front of the plane `normal · p = offset`.
    ///
    /// Implemented as an intersection with a cube that has one face on the
    /// plane and extends along `normal` well past the mesh bounds.
    ///
    /// ## Errors
    /// [`KernelError::DegeneratePlane`] for a zero-length normal.
    pub fn trim_by_plane(&self, normal: &Vector3<Real>, offset: Real) -> Result<Mesh, KernelError> {
        let plane = Plane::from_normal(*normal, offset).ok_or(KernelError::DegeneratePlane)?;
        if self.is_empty() {
            return Ok(Mesh::new());
        }

        let bb = self.bounding_box();
        let reach = bb.mins.coords.amax().max(bb.maxs.coords.amax()) + offset.abs();
        let size = 4.0 * reach + 2.0;

        // half-space slab: bottom face on z = 0, centred in XY
        let slab = Mesh::cuboid(size, size, size)
            .transform(&Translation3::new(-0.5 * size, -0.5 * size, 0.0).to_homogeneous())?;

        let n = plane.normal();
        let rotation = Rotation3::rotation_between(&Vector3::z(), &n)
            .unwrap_or_else(|| Rotation3::from_axis_angle(&Vector3::x_axis(), PI));
        let placement = Translation3::from(n * plane.offset()).to_homogeneous() * rotation.to_homogeneous();

        Ok(self.intersection(&slab.transform(&placement)?))
    }

    /// Returns a [`parry3d::bounding_volume::Aabb`] indicating the 3D bounds of all `polygons`.
    pub fn bounding_box(&self) -> Aabb {
        *self.bounding_box.get_or_init(|| {
            if self.polygons.is_empty() {
                return Aabb::new(Point3::origin(), Point3::origin());
            }
            self.polygons
                .iter()
                .map(Polygon::bounding_box)
                .reduce(|acc, bb| acc.merged(&bb))
                .unwrap_or_else(|| Aabb::new(Point3::origin(), Point3::origin()))
        })
    }

    /// Enclosed volume, by the divergence theorem. Exact for closed meshes
    /// even when BSP splitting left T-junctions behind.
    pub fn volume(&self) -> Real {
        self.polygons.iter().map(Polygon::signed_volume).sum()
    }

    /// Total surface area.
    pub fn surface_area(&self) -> Real {
        self.polygons.iter().map(Polygon::area).sum()
    }

    /// All polygons fan-triangulated, for export and rendering collaborators.
    pub fn triangles(&self) -> Vec<[Vertex; 3]> {
        self.polygons.iter().flat_map(Polygon::triangulate).collect()
    }
}
