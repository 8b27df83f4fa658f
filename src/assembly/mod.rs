//! Turns layout plans into solids through a [`GeometryKernel`].
//!
//! A generation pass has three results:
//!
//! - `Ok(Outcome::Complete(solid))`: shell, vents and clips all built
//! - `Ok(Outcome::Degraded { solid, cause })`: the vents could not be built
//!   and were left out; `cause` says why
//! - `Err(GenerateError)`: the shell or the clips failed, nothing usable
//!
//! Passes are pure functions of their inputs and share no state, so a
//! caller may run several at once and keep whichever result it wants.

use crate::config::{BoxParameters, GeneratorConfig};
use crate::errors::{GenerateError, KernelError};
use crate::layout::{ClipPlacementPlan, ShellPlan, VentPlan};
use crate::traits::GeometryKernel;
use tracing::info;

pub mod base;
pub mod clips;
pub mod vents;

pub use base::{base, build_shell};
pub use clips::{attach_clips, clip_pair};
pub use vents::build_vents;

/// A solid, with or without its vents.
#[derive(Debug, Clone)]
pub enum Outcome<S> {
    Complete(S),
    /// Vent construction failed; `solid` is the same box without vents.
    Degraded { solid: S, cause: KernelError },
}

impl<S> Outcome<S> {
    pub const fn solid(&self) -> &S {
        match self {
            Outcome::Complete(solid) | Outcome::Degraded { solid, .. } => solid,
        }
    }

    pub const fn is_degraded(&self) -> bool {
        matches!(self, Outcome::Degraded { .. })
    }

    /// Transform the solid, keeping the degradation cause.
    pub fn try_map<T, E>(self, f: impl FnOnce(S) -> Result<T, E>) -> Result<Outcome<T>, E> {
        Ok(match self {
            Outcome::Complete(solid) => Outcome::Complete(f(solid)?),
            Outcome::Degraded { solid, cause } => Outcome::Degraded {
                solid: f(solid)?,
                cause,
            },
        })
    }
}

/// The finished box together with the plans it was built from.
#[derive(Debug, Clone)]
pub struct Generated<S> {
    pub outcome: Outcome<S>,
    pub shell: ShellPlan,
    pub vents: VentPlan,
    pub clips: ClipPlacementPlan,
}

/// Build the complete box: vented shell, clips on the back, and the whole
/// thing moved so the back face lies on `y = 0`.
///
/// # Errors
///
/// - [`GenerateError::Shell`] when the shell cannot be built
/// - [`GenerateError::Clips`] when a clip pair cannot be built or attached
///
/// # Example
///
/// ```no_run
/// use pegbox::assembly::generate;
/// use pegbox::config::{BoxParameters, GeneratorConfig};
/// use pegbox::kernel::BspKernel;
///
/// let generated = generate(&BspKernel, &BoxParameters::default(), &GeneratorConfig::draft())?;
/// assert!(!generated.outcome.is_degraded());
/// # Ok::<(), pegbox::errors::GenerateError>(())
/// ```
pub fn generate<K: GeometryKernel>(
    kernel: &K,
    params: &BoxParameters,
    config: &GeneratorConfig,
) -> Result<Generated<K::Solid>, GenerateError> {
    let shell = ShellPlan::compute(params);
    let vents = VentPlan::compute(params, config);
    let clips = ClipPlacementPlan::compute(params, &config.clips);

    let outcome = base::assemble(kernel, &shell, &vents, params, config)?.try_map(|solid| {
        let clipped = attach_clips(kernel, &solid, &clips, params)?;
        kernel.translate(&clipped, 0.0, 0.5 * params.depth, 0.0)
    });
    let outcome = outcome.map_err(GenerateError::Clips)?;

    info!(
        "Generated {:.1}x{:.1}x{:.1} mm box: {} vent slots, {} clip pairs{}",
        params.width,
        params.depth,
        params.height,
        vents.hole_count(),
        clips.len(),
        if outcome.is_degraded() { " (vents omitted)" } else { "" }
    );

    Ok(Generated {
        outcome,
        shell,
        vents,
        clips,
    })
}
