//! Test support library
//! Provides kernel doubles and small helpers shared by the integration tests.

#![allow(dead_code)]

use nalgebra::{Matrix4, Vector3};
use pegbox::{
    CrossSection, GeometryKernel, KernelError,
    config::BoxParameters,
    float_types::{Real, parry3d::bounding_volume::Aabb},
    kernel::BspKernel,
    mesh::Mesh,
};
use proptest::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Returns the bounding box as `[min_x, min_y, min_z, max_x, max_y, max_z]`.
pub fn bounds(aabb: &Aabb) -> [Real; 6] {
    [
        aabb.mins.x,
        aabb.mins.y,
        aabb.mins.z,
        aabb.maxs.x,
        aabb.maxs.y,
        aabb.maxs.z,
    ]
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Element-wise [`approx_eq`] over two bounding boxes.
pub fn bounds_eq(a: &Aabb, b: &Aabb, eps: Real) -> bool {
    bounds(a)
        .iter()
        .zip(bounds(b).iter())
        .all(|(x, y)| approx_eq(*x, *y, eps))
}

/// Valid boxes from 20 mm to 250 mm a side, with any corner radius up to
/// half the smaller footprint side.
pub fn box_parameters() -> impl Strategy<Value = BoxParameters> {
    (20.0..250.0f64, 20.0..250.0f64, 15.0..200.0f64, 0.0..1.0f64, 0.8..4.0f64).prop_map(
        |(width, depth, height, radius_share, wall)| {
            let radius = radius_share * 0.5 * width.min(depth);
            BoxParameters::default()
                .with_size(width, depth, height)
                .with_corner_radius(radius)
                .with_walls(wall, wall.min(height - 1.0))
        },
    )
}

/// BSP kernel whose plane trim always fails, as a broken backend would.
#[derive(Debug, Default)]
pub struct TrimFailsKernel;

impl GeometryKernel for TrimFailsKernel {
    type Solid = Mesh;

    fn extrude(&self, section: &CrossSection, height: Real) -> Result<Mesh, KernelError> {
        BspKernel.extrude(section, height)
    }

    fn transform(&self, solid: &Mesh, matrix: &Matrix4<Real>) -> Result<Mesh, KernelError> {
        BspKernel.transform(solid, matrix)
    }

    fn union(&self, a: &Mesh, b: &Mesh) -> Result<Mesh, KernelError> {
        BspKernel.union(a, b)
    }

    fn difference(&self, a: &Mesh, b: &Mesh) -> Result<Mesh, KernelError> {
        BspKernel.difference(a, b)
    }

    fn trim_by_plane(&self, _: &Mesh, _: &Vector3<Real>, _: Real) -> Result<Mesh, KernelError> {
        Err(KernelError::Backend("trim is not available".to_string()))
    }

    fn cube(&self, size: &Vector3<Real>) -> Result<Mesh, KernelError> {
        BspKernel.cube(size)
    }

    fn bounding_box(&self, solid: &Mesh) -> Aabb {
        BspKernel.bounding_box(solid)
    }

    fn volume(&self, solid: &Mesh) -> Real {
        BspKernel.volume(solid)
    }
}

/// BSP kernel that counts the operations it performs.
#[derive(Debug, Default)]
pub struct CountingKernel {
    pub extrusions: AtomicUsize,
    pub unions: AtomicUsize,
    pub differences: AtomicUsize,
    pub trims: AtomicUsize,
}

impl CountingKernel {
    pub fn differences(&self) -> usize {
        self.differences.load(Ordering::SeqCst)
    }

    pub fn extrusions(&self) -> usize {
        self.extrusions.load(Ordering::SeqCst)
    }

    pub fn trims(&self) -> usize {
        self.trims.load(Ordering::SeqCst)
    }
}

impl GeometryKernel for CountingKernel {
    type Solid = Mesh;

    fn extrude(&self, section: &CrossSection, height: Real) -> Result<Mesh, KernelError> {
        self.extrusions.fetch_add(1, Ordering::SeqCst);
        BspKernel.extrude(section, height)
    }

    fn transform(&self, solid: &Mesh, matrix: &Matrix4<Real>) -> Result<Mesh, KernelError> {
        BspKernel.transform(solid, matrix)
    }

    fn union(&self, a: &Mesh, b: &Mesh) -> Result<Mesh, KernelError> {
        self.unions.fetch_add(1, Ordering::SeqCst);
        BspKernel.union(a, b)
    }

    fn difference(&self, a: &Mesh, b: &Mesh) -> Result<Mesh, KernelError> {
        self.differences.fetch_add(1, Ordering::SeqCst);
        BspKernel.difference(a, b)
    }

    fn trim_by_plane(
        &self,
        solid: &Mesh,
        normal: &Vector3<Real>,
        offset: Real,
    ) -> Result<Mesh, KernelError> {
        self.trims.fetch_add(1, Ordering::SeqCst);
        BspKernel.trim_by_plane(solid, normal, offset)
    }

    fn cube(&self, size: &Vector3<Real>) -> Result<Mesh, KernelError> {
        BspKernel.cube(size)
    }

    fn bounding_box(&self, solid: &Mesh) -> Aabb {
        BspKernel.bounding_box(solid)
    }

    fn volume(&self, solid: &Mesh) -> Real {
        BspKernel.volume(solid)
    }
}
