//! The hollow shell, with vents subtracted when they can be built

use crate::assembly::Outcome;
use crate::assembly::vents::build_vents;
use crate::config::{BoxParameters, GeneratorConfig};
use crate::errors::{GenerateError, KernelError};
use crate::layout::{RoundedRect, ShellPlan, VentPlan};
use crate::section::CrossSection;
use crate::traits::GeometryKernel;
use tracing::{debug, warn};

fn outline(rect: &RoundedRect, segments: usize) -> CrossSection {
    CrossSection::rounded_rectangle(rect.width, rect.depth, rect.corner_radius, segments)
}

/// Outer body minus cavity. The cavity cutter reaches `overshoot` past the
/// rim so the open top is cut cleanly.
pub fn build_shell<K: GeometryKernel>(
    kernel: &K,
    plan: &ShellPlan,
    config: &GeneratorConfig,
) -> Result<K::Solid, KernelError> {
    let outer = kernel.extrude(&outline(&plan.outer, config.arc_segments), plan.height)?;

    let (floor, rim) = plan.cavity_z;
    let cavity = kernel.extrude(
        &outline(&plan.cavity, config.arc_segments),
        rim - floor + config.vents.overshoot,
    )?;
    let cavity = kernel.translate(&cavity, 0.0, 0.0, floor)?;

    debug!(
        "Shell {:.1}x{:.1}x{:.1} mm, cavity {:.1}x{:.1} mm from z={:.1}",
        plan.outer.width, plan.outer.depth, plan.height, plan.cavity.width, plan.cavity.depth, floor
    );
    kernel.difference(&outer, &cavity)
}

/// Shell minus vents for already computed plans.
///
/// A vent failure is not an error: it is logged and the bare shell comes
/// back as [`Outcome::Degraded`].
pub(crate) fn assemble<K: GeometryKernel>(
    kernel: &K,
    shell_plan: &ShellPlan,
    vent_plan: &VentPlan,
    params: &BoxParameters,
    config: &GeneratorConfig,
) -> Result<Outcome<K::Solid>, GenerateError> {
    let shell = build_shell(kernel, shell_plan, config).map_err(GenerateError::Shell)?;

    let vented = build_vents(kernel, vent_plan, params, config)
        .and_then(|cutter| kernel.difference(&shell, &cutter));

    Ok(match vented {
        Ok(solid) => Outcome::Complete(solid),
        Err(cause) => {
            warn!("Vent construction failed: {}, keeping the shell without vents", cause);
            Outcome::Degraded {
                solid: shell,
                cause,
            }
        },
    })
}

/// The vented shell for `params`, centred on its bottom face.
///
/// # Errors
///
/// [`GenerateError::Shell`] when the outer body or the cavity cannot be
/// built, for example because the corner radius exceeds half the width.
pub fn base<K: GeometryKernel>(
    kernel: &K,
    params: &BoxParameters,
    config: &GeneratorConfig,
) -> Result<Outcome<K::Solid>, GenerateError> {
    assemble(
        kernel,
        &ShellPlan::compute(params),
        &VentPlan::compute(params, config),
        params,
        config,
    )
}
