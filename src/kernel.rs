//! The in-crate BSP kernel and the process-wide handle to it.
//!
//! The handle is created on first use. Concurrent first callers all await
//! the same initialisation; later callers get the stored `&'static`
//! reference straight away.
//!
//! # Example
//!
//! ```no_run
//! use pegbox::config::{BoxParameters, GeneratorConfig};
//! use pegbox::kernel::generate_shared;
//!
//! # async fn run() -> Result<(), pegbox::errors::GenerateError> {
//! let generated = generate_shared(&BoxParameters::default(), &GeneratorConfig::default()).await?;
//! println!("{} vent slots", generated.vents.hole_count());
//! # Ok(())
//! # }
//! ```

use crate::assembly::{Generated, generate};
use crate::config::{BoxParameters, GeneratorConfig};
use crate::errors::{GenerateError, KernelError};
use crate::float_types::parry3d::bounding_volume::Aabb;
use crate::float_types::{Real, tolerance};
use crate::mesh::Mesh;
use crate::section::CrossSection;
use crate::traits::GeometryKernel;
use nalgebra::{Matrix4, Vector3};
use std::future::Future;
use tokio::sync::OnceCell;
use tracing::info;

/// [`GeometryKernel`] over [`Mesh`], using BSP-tree booleans.
#[derive(Debug, Default, Clone, Copy)]
pub struct BspKernel;

impl GeometryKernel for BspKernel {
    type Solid = Mesh;

    fn extrude(&self, section: &CrossSection, height: Real) -> Result<Mesh, KernelError> {
        Mesh::extrude(section, height)
    }

    fn transform(&self, solid: &Mesh, matrix: &Matrix4<Real>) -> Result<Mesh, KernelError> {
        solid.transform(matrix)
    }

    fn union(&self, a: &Mesh, b: &Mesh) -> Result<Mesh, KernelError> {
        Ok(a.union(b))
    }

    fn difference(&self, a: &Mesh, b: &Mesh) -> Result<Mesh, KernelError> {
        Ok(a.difference(b))
    }

    fn trim_by_plane(
        &self,
        solid: &Mesh,
        normal: &Vector3<Real>,
        offset: Real,
    ) -> Result<Mesh, KernelError> {
        solid.trim_by_plane(normal, offset)
    }

    fn cube(&self, size: &Vector3<Real>) -> Result<Mesh, KernelError> {
        if let Some(bad) = size.iter().find(|s| !s.is_finite() || **s <= 0.0) {
            return Err(KernelError::InvalidHeight(*bad));
        }
        Ok(Mesh::cuboid(size.x, size.y, size.z))
    }

    fn bounding_box(&self, solid: &Mesh) -> Aabb {
        solid.bounding_box()
    }

    fn volume(&self, solid: &Mesh) -> Real {
        solid.volume()
    }
}

/// A value that is initialised at most once, asynchronously, on first use.
#[derive(Debug)]
pub struct KernelCell<K> {
    cell: OnceCell<K>,
}

impl<K> KernelCell<K> {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::const_new(),
        }
    }

    /// The stored value, running `init` if this is the first call.
    ///
    /// Callers arriving while `init` is running wait for it instead of
    /// starting a second initialisation.
    pub async fn get_or_init<F, Fut>(&self, init: F) -> &K
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = K>,
    {
        self.cell.get_or_init(init).await
    }

    /// The stored value, if initialisation has finished.
    pub fn get(&self) -> Option<&K> {
        self.cell.get()
    }
}

impl<K> Default for KernelCell<K> {
    fn default() -> Self {
        Self::new()
    }
}

static SHARED_KERNEL: KernelCell<BspKernel> = KernelCell::new();

/// The process-wide kernel.
pub async fn shared_kernel() -> &'static BspKernel {
    SHARED_KERNEL
        .get_or_init(|| async {
            info!("Initialising BSP geometry kernel (tolerance {:e})", tolerance());
            BspKernel
        })
        .await
}

/// [`generate`] on the shared kernel.
pub async fn generate_shared(
    params: &BoxParameters,
    config: &GeneratorConfig,
) -> Result<Generated<Mesh>, GenerateError> {
    let kernel = shared_kernel().await;
    generate(kernel, params, config)
}
