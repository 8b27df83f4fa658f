use crate::errors::KernelError;
use crate::float_types::Real;
use crate::float_types::parry3d::bounding_volume::Aabb;
use crate::section::CrossSection;
use nalgebra::{Matrix3, Matrix4, Rotation3, Translation3, Vector3};
use std::fmt::Debug;

/// The capability set the enclosure pipeline needs from a solid modeller.
///
/// Layout and assembly code is written against this trait only, so it can
/// run on the in-crate BSP mesh ([`crate::kernel::BspKernel`]) or on a
/// test double that counts or fails operations.
///
/// Every fallible operation reports a [`KernelError`]; solids handed to a
/// boolean must be closed.
pub trait GeometryKernel: Send + Sync {
    type Solid: Clone + Debug + Send + Sync;

    /// Extrude a cross-section in the XY plane along +Z from `z = 0` to `height`.
    fn extrude(&self, section: &CrossSection, height: Real) -> Result<Self::Solid, KernelError>;

    /// Apply a 4×4 affine transform.
    fn transform(
        &self,
        solid: &Self::Solid,
        matrix: &Matrix4<Real>,
    ) -> Result<Self::Solid, KernelError>;

    fn union(&self, a: &Self::Solid, b: &Self::Solid) -> Result<Self::Solid, KernelError>;

    fn difference(&self, a: &Self::Solid, b: &Self::Solid) -> Result<Self::Solid, KernelError>;

    /// Keep the part of `solid` on the side of the plane `normal · p = offset`
    /// that `normal` points to.
    fn trim_by_plane(
        &self,
        solid: &Self::Solid,
        normal: &Vector3<Real>,
        offset: Real,
    ) -> Result<Self::Solid, KernelError>;

    /// Axis-aligned box with one corner at the origin.
    fn cube(&self, size: &Vector3<Real>) -> Result<Self::Solid, KernelError>;

    fn bounding_box(&self, solid: &Self::Solid) -> Aabb;

    fn volume(&self, solid: &Self::Solid) -> Real;

    /// Returns `solid` translated by x, y, and z.
    fn translate(
        &self,
        solid: &Self::Solid,
        x: Real,
        y: Real,
        z: Real,
    ) -> Result<Self::Solid, KernelError> {
        self.transform(solid, &Translation3::new(x, y, z).to_homogeneous())
    }

    /// Rotates `solid` by x_deg, y_deg, z_deg (applied X, then Y, then Z).
    fn rotate(
        &self,
        solid: &Self::Solid,
        x_deg: Real,
        y_deg: Real,
        z_deg: Real,
    ) -> Result<Self::Solid, KernelError> {
        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), x_deg.to_radians());
        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), y_deg.to_radians());
        let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), z_deg.to_radians());
        self.transform(solid, &(rz * ry * rx).to_homogeneous())
    }

    /// Reflect `solid` about the plane `normal · p = offset`.
    ///
    /// `normal` need not be unit length; `offset` is measured along the
    /// normalised normal.
    fn mirror(
        &self,
        solid: &Self::Solid,
        normal: &Vector3<Real>,
        offset: Real,
    ) -> Result<Self::Solid, KernelError> {
        let len = normal.norm();
        if len <= Real::EPSILON {
            return Err(KernelError::DegeneratePlane);
        }
        let n = normal / len;
        let shift = n * offset;

        // R = I - 2 n n^T, conjugated by the shift that moves the plane to the origin
        let mut reflect = Matrix4::identity();
        reflect
            .fixed_view_mut::<3, 3>(0, 0)
            .copy_from(&(Matrix3::identity() - 2.0 * n * n.transpose()));
        let matrix = Translation3::from(shift).to_homogeneous()
            * reflect
            * Translation3::from(-shift).to_homogeneous();

        self.transform(solid, &matrix)
    }

    /// Union every solid in `solids`, left to right.
    /// Returns `Ok(None)` for an empty input.
    fn union_all(&self, solids: Vec<Self::Solid>) -> Result<Option<Self::Solid>, KernelError> {
        let mut solids = solids.into_iter();
        let Some(mut acc) = solids.next() else {
            return Ok(None);
        };
        for solid in solids {
            acc = self.union(&acc, &solid)?;
        }
        Ok(Some(acc))
    }
}
