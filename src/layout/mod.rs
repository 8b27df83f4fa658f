//! Pure layout arithmetic: where the shell, vents and clips go.
//!
//! Nothing in this module touches a geometry kernel, so every plan can be
//! inspected and tested without building a solid.

pub mod axis;
pub mod clips;
pub mod shell;
pub mod vents;

pub use axis::{AxisLayout, AxisLayoutRequest};
pub use clips::{ClipPlacement, ClipPlacementPlan};
pub use shell::{RoundedRect, ShellPlan};
pub use vents::{BottomCutoutPlan, Face, HoleFootprint, HoleLayoutPlan, VentPlan};
