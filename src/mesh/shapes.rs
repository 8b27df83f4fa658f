//! Primitive solids built directly from polygons

use crate::float_types::Real;
use crate::mesh::Mesh;
use crate::mesh::polygon::Polygon;
use nalgebra::Point3;

impl Mesh {
    /// Axis-aligned box with one corner at the origin and the opposite
    /// corner at `(width, depth, height)`.
    ///
    /// ```
    /// # use pegbox::mesh::Mesh;
    /// let slab = Mesh::cuboid(2.0, 3.0, 4.0);
    /// assert_eq!(slab.polygons.len(), 6);
    /// ```
    pub fn cuboid(width: Real, depth: Real, height: Real) -> Mesh {
        let p = |x: Real, y: Real, z: Real| Point3::new(x * width, y * depth, z * height);

        // (corner indices into the unit cube, counter-clockwise seen from outside)
        let faces: [[[Real; 3]; 4]; 6] = [
            [[0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 1.0], [0.0, 1.0, 0.0]], // -X
            [[1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [1.0, 1.0, 1.0], [1.0, 0.0, 1.0]], // +X
            [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 1.0], [0.0, 0.0, 1.0]], // -Y
            [[0.0, 1.0, 0.0], [0.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, 0.0]], // +Y
            [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0], [1.0, 0.0, 0.0]], // -Z
            [[0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [1.0, 1.0, 1.0], [0.0, 1.0, 1.0]], // +Z
        ];

        let polygons = faces
            .iter()
            .map(|face| {
                let points: Vec<Point3<Real>> =
                    face.iter().map(|&[x, y, z]| p(x, y, z)).collect();
                Polygon::from_points(&points)
            })
            .collect();

        Mesh::from_polygons(polygons)
    }
}
