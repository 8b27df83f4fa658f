//! Linear extrusion of a [`CrossSection`] into a closed [`Mesh`]

use crate::errors::KernelError;
use crate::float_types::Real;
use crate::mesh::Mesh;
use crate::mesh::polygon::Polygon;
use crate::section::CrossSection;
use geo::TriangulateEarcut;
use nalgebra::{Point2, Point3};

impl Mesh {
    /// Extrude `section` (lying in the XY plane) along +Z from `z = 0` to
    /// `z = height`.
    ///
    /// The section is validated first; a clockwise ring is reversed so the
    /// result always faces outward. Side walls are one quad per outline edge,
    /// caps are ear-cut triangles so concave outlines (the clip hook) stay
    /// convex per face.
    ///
    /// ## Errors
    /// - [`KernelError::InvalidHeight`] for a non-positive or non-finite height
    /// - anything [`CrossSection::validate`] reports
    ///
    /// ## Example
    /// ```
    /// # use pegbox::{mesh::Mesh, section::CrossSection};
    /// let slab = Mesh::extrude(&CrossSection::rounded_rectangle(10.0, 4.0, 1.0, 8), 2.0)?;
    /// assert!((slab.bounding_box().maxs.z - 2.0).abs() < 1e-12);
    /// # Ok::<(), pegbox::errors::KernelError>(())
    /// ```
    pub fn extrude(section: &CrossSection, height: Real) -> Result<Mesh, KernelError> {
        if !height.is_finite() || height <= 0.0 {
            return Err(KernelError::InvalidHeight(height));
        }

        let ring = section.validate()?;
        let ring = if ring.is_counter_clockwise() {
            ring
        } else {
            ring.reversed()
        };
        let points = ring.points();
        let n = points.len();

        let at = |p: &Point2<Real>, z: Real| Point3::new(p.x, p.y, z);

        let mut polygons = Vec::with_capacity(n + 2 * n);

        // Walls: edge i → i+1 runs counter-clockwise, so (a, b, b↑, a↑)
        // has its normal on the outside.
        for i in 0..n {
            let a = &points[i];
            let b = &points[(i + 1) % n];
            polygons.push(Polygon::from_points(&[
                at(a, 0.0),
                at(b, 0.0),
                at(b, height),
                at(a, height),
            ]));
        }

        for [a, b, c] in cap_triangles(&ring) {
            // top cap faces +Z, bottom cap -Z
            polygons.push(Polygon::from_points(&[at(&a, height), at(&b, height), at(&c, height)]));
            polygons.push(Polygon::from_points(&[at(&c, 0.0), at(&b, 0.0), at(&a, 0.0)]));
        }

        Ok(Mesh::from_polygons(polygons))
    }
}

/// Ear-cut triangulation of a validated ring, every triangle counter-clockwise.
fn cap_triangles(ring: &CrossSection) -> Vec<[Point2<Real>; 3]> {
    let triangulation = ring.to_geo().earcut_triangles_raw();
    let vertices = triangulation.vertices;
    let vertex = |i: usize| Point2::new(vertices[2 * i], vertices[2 * i + 1]);

    triangulation
        .triangle_indices
        .chunks_exact(3)
        .filter_map(|tri| {
            let (a, b, c) = (vertex(tri[0]), vertex(tri[1]), vertex(tri[2]));
            let cross = (b - a).perp(&(c - a));
            if cross.abs() <= Real::EPSILON {
                None
            } else if cross > 0.0 {
                Some([a, b, c])
            } else {
                Some([a, c, b])
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn extruded_square_is_a_box() {
        let square = CrossSection::from_coords(&[[0.0, 0.0], [2.0, 0.0], [2.0, 3.0], [0.0, 3.0]]);
        let mesh = Mesh::extrude(&square, 4.0).unwrap();
        assert_eq!(mesh.polygons.len(), 4 + 2 * 2);
        assert_relative_eq!(mesh.volume(), 24.0, epsilon = 1e-9);
        assert_relative_eq!(mesh.surface_area(), 2.0 * (6.0 + 8.0 + 12.0), epsilon = 1e-9);
    }

    #[test]
    fn clockwise_input_still_faces_outward() {
        let square = CrossSection::from_coords(&[[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]]);
        let mesh = Mesh::extrude(&square, 1.0).unwrap();
        assert_relative_eq!(mesh.volume(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn concave_clip_profile_extrudes() {
        let clip = CrossSection::clip_profile();
        let mesh = Mesh::extrude(&clip, 12.0).unwrap();
        assert_relative_eq!(mesh.volume(), clip.signed_area() * 12.0, epsilon = 1e-9);
    }

    #[test]
    fn rejects_bad_height_and_degenerate_section() {
        let square = CrossSection::from_coords(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
        assert_eq!(Mesh::extrude(&square, 0.0).unwrap_err(), KernelError::InvalidHeight(0.0));
        let line = CrossSection::from_coords(&[[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]]);
        assert_eq!(Mesh::extrude(&line, 1.0).unwrap_err(), KernelError::ZeroArea);
        // a zero-width slot collapses to two distinct points
        let sliver = CrossSection::hole(10.0, 0.0, 45.0);
        assert_eq!(Mesh::extrude(&sliver, 1.0).unwrap_err(), KernelError::TooFewPoints(2));
    }
}
