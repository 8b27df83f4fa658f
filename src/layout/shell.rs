//! Outer body and cavity of the hollow shell

use crate::config::BoxParameters;
use crate::float_types::Real;

/// A centred rounded rectangle in the XY plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRect {
    pub width: Real,
    pub depth: Real,
    pub corner_radius: Real,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellPlan {
    /// Outline of the outer body, extruded from `z = 0` to `height`.
    pub outer: RoundedRect,
    pub height: Real,
    /// Outline of the cavity.
    pub cavity: RoundedRect,
    /// Z range of the cavity: the top of the floor up to the rim.
    pub cavity_z: (Real, Real),
}

impl ShellPlan {
    /// The cavity is the outer outline shrunk by the wall on every side;
    /// its corner radius shrinks by the wall too, floored at 0.
    pub fn compute(params: &BoxParameters) -> Self {
        let wall = params.wall_thickness;
        Self {
            outer: RoundedRect {
                width: params.width,
                depth: params.depth,
                corner_radius: params.corner_radius,
            },
            height: params.height,
            cavity: RoundedRect {
                width: params.width - 2.0 * wall,
                depth: params.depth - 2.0 * wall,
                corner_radius: (params.corner_radius - wall).max(0.0),
            },
            cavity_z: (params.bottom_thickness, params.height),
        }
    }
}
