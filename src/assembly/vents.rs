//! Builds the vent cutter: every slot and the ribbed floor opening as one solid

use crate::config::{BoxParameters, GeneratorConfig};
use crate::errors::KernelError;
use crate::float_types::Real;
use crate::layout::{BottomCutoutPlan, HoleLayoutPlan, VentPlan};
use crate::section::CrossSection;
use crate::traits::GeometryKernel;
use nalgebra::{Translation3, Vector3};
use tracing::debug;

/// All slots of one face, unioned, placed on the face.
///
/// Each slot is extruded along the face normal through `wall + 2 * overshoot`
/// so it starts `overshoot` outside the outer surface and ends `overshoot`
/// inside the cavity. Returns `Ok(None)` for a face without slots.
pub fn build_face_holes<K: GeometryKernel>(
    kernel: &K,
    plan: &HoleLayoutPlan,
    params: &BoxParameters,
    config: &GeneratorConfig,
) -> Result<Option<K::Solid>, KernelError> {
    if plan.is_empty() {
        return Ok(None);
    }

    let vents = &config.vents;
    let depth = params.wall_thickness + 2.0 * vents.overshoot;
    let profile = plan.footprint.profile(vents.tilt_degrees);

    let holes = plan
        .positions
        .iter()
        .map(|p| kernel.extrude(&profile.translate(p.x, p.y), depth))
        .collect::<Result<Vec<_>, _>>()?;

    let Some(local) = kernel.union_all(holes)? else {
        return Ok(None);
    };

    // slide the slab so it spans w ∈ [-(wall + overshoot), overshoot]
    let sink = Translation3::new(0.0, 0.0, -(params.wall_thickness + vents.overshoot));
    let placement = plan.face.frame(params) * sink.to_homogeneous();

    debug!(
        "Built {} vent slots on the {:?} face",
        plan.positions.len(),
        plan.face
    );
    kernel.transform(&local, &placement).map(Some)
}

/// The floor opening with its ribs left standing.
pub fn build_bottom_cutout<K: GeometryKernel>(
    kernel: &K,
    plan: &BottomCutoutPlan,
    config: &GeneratorConfig,
) -> Result<K::Solid, KernelError> {
    let overshoot = config.vents.overshoot;
    let outline = CrossSection::rounded_rectangle(
        plan.width,
        plan.depth,
        plan.corner_radius,
        config.arc_segments,
    );
    let height = plan.z_max - plan.z_min;
    let cutout = kernel.translate(&kernel.extrude(&outline, height)?, 0.0, 0.0, plan.z_min)?;

    // ribs reach past the cutout on every side they cross
    let rib_size = Vector3::new(
        plan.rib_width,
        plan.depth + 2.0 * overshoot,
        height + 2.0 * overshoot,
    );
    let ribs = plan
        .ribs
        .iter()
        .map(|&x| {
            let rib = kernel.cube(&rib_size)?;
            kernel.translate(
                &rib,
                x - 0.5 * plan.rib_width,
                -0.5 * rib_size.y,
                plan.z_min - overshoot,
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        "Built {:.1}x{:.1} mm floor cutout with {} ribs",
        plan.width,
        plan.depth,
        plan.ribs.len()
    );
    match kernel.union_all(ribs)? {
        Some(ribs) => kernel.difference(&cutout, &ribs),
        None => Ok(cutout),
    }
}

/// Where the stand-in cutter goes when there is nothing to cut.
pub fn placeholder_offset(params: &BoxParameters) -> Real {
    params.width.max(params.depth).max(params.height) * 10.0 + 1000.0
}

/// Union of every opening in `plan`.
///
/// When no face and no floor opening produced anything, a unit cube far
/// outside the box is returned, so the following difference is a no-op
/// instead of a difference against nothing.
pub fn build_vents<K: GeometryKernel>(
    kernel: &K,
    plan: &VentPlan,
    params: &BoxParameters,
    config: &GeneratorConfig,
) -> Result<K::Solid, KernelError> {
    let mut parts = Vec::with_capacity(plan.faces.len() + 1);
    for face in &plan.faces {
        if let Some(holes) = build_face_holes(kernel, face, params, config)? {
            parts.push(holes);
        }
    }
    if let Some(bottom) = &plan.bottom {
        parts.push(build_bottom_cutout(kernel, bottom, config)?);
    }

    match kernel.union_all(parts)? {
        Some(cutter) => Ok(cutter),
        None => {
            let far = placeholder_offset(params);
            debug!("No vents fit, using a placeholder cutter at {far} mm");
            let unit = kernel.cube(&Vector3::new(1.0, 1.0, 1.0))?;
            kernel.translate(&unit, far, far, far)
        },
    }
}
