//! Pegboard clip pairs and their attachment to the shell

use crate::config::BoxParameters;
use crate::errors::KernelError;
use crate::float_types::Real;
use crate::layout::ClipPlacementPlan;
use crate::section::CrossSection;
use crate::traits::GeometryKernel;
use nalgebra::Vector3;
use tracing::debug;

/// A left/right clip pair in clip-local coordinates: `y = 0` is the back
/// face, the hooks point towards −Y, the underside is `z = 0`. Both clips
/// are extruded to `height`.
///
/// A chamfered pair keeps only `y + z >= 0`, turning its underside into a
/// 45° overhang that prints without support.
pub fn clip_pair<K: GeometryKernel>(
    kernel: &K,
    height: Real,
    chamfered: bool,
) -> Result<K::Solid, KernelError> {
    let right = kernel.extrude(&CrossSection::clip_profile(), height)?;
    let left = kernel.extrude(&CrossSection::clip_profile_left(), height)?;
    let pair = kernel.union(&right, &left)?;

    if chamfered {
        kernel.trim_by_plane(&pair, &Vector3::new(0.0, 1.0, 1.0), 0.0)
    } else {
        Ok(pair)
    }
}

/// Union every clip pair of `plan` onto `shell`.
///
/// The two pair variants are built once and reused for every cell. Any
/// failure aborts: a box without its clips cannot be mounted.
pub fn attach_clips<K: GeometryKernel>(
    kernel: &K,
    shell: &K::Solid,
    plan: &ClipPlacementPlan,
    params: &BoxParameters,
) -> Result<K::Solid, KernelError> {
    let variant = |chamfer: bool| {
        plan.placements
            .iter()
            .any(|p| p.chamfered == chamfer)
            .then(|| clip_pair(kernel, plan.clip_height, chamfer))
            .transpose()
    };
    let plain = variant(false)?;
    let chamfered = variant(true)?;

    let mut solid = shell.clone();
    let back = -0.5 * params.depth;

    for placement in &plan.placements {
        let pair = if placement.chamfered { &chamfered } else { &plain };
        let Some(pair) = pair else {
            continue;
        };
        let placed = kernel.translate(pair, placement.x_offset, back, placement.z_offset)?;
        solid = kernel.union(&solid, &placed)?;
    }

    debug!(
        "Attached {} clip pairs in {} columns x {} levels",
        plan.len(),
        plan.columns.len(),
        plan.levels
    );
    Ok(solid)
}
