// Bounding volumes come from parry, matched to our scalar width.
pub use parry3d_f64 as parry3d;

// Our Real scalar type:
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Lazily-initialized tolerance used by plane classification and point
/// de-duplication. Coordinates are millimetres, so the default is far below
/// any printable feature. It can be overridden at build time through the env
/// var `PEGBOX_TOLERANCE` (e.g. `PEGBOX_TOLERANCE=1e-6 cargo build`).
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

#[inline]
const fn default_tolerance() -> Real {
    1e-5
}

/// Returns the current tolerance.
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        if let Some(environment_variable) = option_env!("PEGBOX_TOLERANCE") {
            if let Ok(value) = Real::from_str(environment_variable) {
                return value.max(Real::EPSILON);
            }
        }
        default_tolerance()
    })
}

/// Archimedes' constant (π)
pub const PI: Real = core::f64::consts::PI;
/// π/2
pub const FRAC_PI_2: Real = core::f64::consts::FRAC_PI_2;
