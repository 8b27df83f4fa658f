//! Vent layout: slot grids on the side faces and the ribbed floor cutout.
//!
//! Everything here is plain arithmetic on [`BoxParameters`]; the solids are
//! built from these plans by [`crate::assembly::vents`].
//!
//! Coordinates follow the base shell: origin at the centre of the bottom
//! face, Z up, left = −X, right = +X, front = +Y, back = −Y.

use crate::config::{BoxParameters, GeneratorConfig, VentConfig};
use crate::float_types::Real;
use crate::layout::axis::AxisLayoutRequest;
use crate::section::CrossSection;
use nalgebra::{Matrix4, Point2, Vector2, Vector3};

/// The four vertical faces of the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Left,
    Right,
    Front,
    /// Faces the pegboard; never perforated.
    Back,
}

impl Face {
    /// Faces that receive vent slots, in the order they are built.
    pub const PERFORATED: [Face; 3] = [Face::Left, Face::Right, Face::Front];

    pub const fn is_perforated(self) -> bool {
        !matches!(self, Face::Back)
    }

    /// Unit vector pointing out of the box.
    pub fn outward(self) -> Vector3<Real> {
        match self {
            Face::Left => -Vector3::x(),
            Face::Right => Vector3::x(),
            Face::Front => Vector3::y(),
            Face::Back => -Vector3::y(),
        }
    }

    /// In-plane horizontal axis of the face frame, chosen so that
    /// `horizontal × Z = outward`.
    pub fn horizontal(self) -> Vector3<Real> {
        self.outward().cross(&Vector3::z()).scale(-1.0)
    }

    /// Full outer length of the face along its horizontal axis.
    pub const fn length(self, params: &BoxParameters) -> Real {
        match self {
            Face::Left | Face::Right => params.depth,
            Face::Front | Face::Back => params.width,
        }
    }

    /// Distance from the box axis to the outer surface of the face.
    pub const fn distance(self, params: &BoxParameters) -> Real {
        match self {
            Face::Left | Face::Right => params.width * 0.5,
            Face::Front | Face::Back => params.depth * 0.5,
        }
    }

    /// Frame mapping face-local `(u, v, w)` to box coordinates.
    ///
    /// `u` runs along [`Self::horizontal`], `v` is Z and `w` points out of
    /// the box; `w = 0` is the outer surface. The frame is right handed, so
    /// solids keep their orientation when placed with it.
    pub fn frame(self, params: &BoxParameters) -> Matrix4<Real> {
        let u = self.horizontal();
        let w = self.outward();
        let origin = w * self.distance(params);
        Matrix4::new(
            u.x, 0.0, w.x, origin.x, //
            u.y, 0.0, w.y, origin.y, //
            u.z, 1.0, w.z, origin.z, //
            0.0, 0.0, 0.0, 1.0,
        )
    }
}

/// Slot size before tilting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoleFootprint {
    pub long: Real,
    pub short: Real,
}

impl HoleFootprint {
    /// Slot size for `params`, falling back to the configured default.
    pub fn for_box(params: &BoxParameters, vents: &VentConfig) -> Self {
        Self {
            long: params.vent_hole_width.unwrap_or(vents.hole_long),
            short: params.vent_hole_height.unwrap_or(vents.hole_short),
        }
    }

    /// The slot outline, tilted, centred at the origin.
    pub fn profile(&self, tilt_degrees: Real) -> CrossSection {
        CrossSection::hole(self.long, self.short, tilt_degrees)
    }
}

/// Slot centres on one face.
#[derive(Debug, Clone, PartialEq)]
pub struct HoleLayoutPlan {
    pub face: Face,
    pub footprint: HoleFootprint,
    /// Extent of the tilted slot along `(u, v)`, the size fed to the axis solver.
    pub extent: Vector2<Real>,
    /// Slot centres as `(u, z)`: `u` along the face, `z` above the bed.
    pub positions: Vec<Point2<Real>>,
}

impl HoleLayoutPlan {
    /// Cross the horizontal and vertical axis layouts of `face` into a grid.
    pub fn compute(face: Face, params: &BoxParameters, vents: &VentConfig) -> Self {
        let footprint = HoleFootprint::for_box(params, vents);
        let extent = footprint.profile(vents.tilt_degrees).extents();

        if !face.is_perforated() {
            return Self {
                face,
                footprint,
                extent,
                positions: Vec::new(),
            };
        }

        // only the flat stretch between the rounded corners
        let flat = face.length(params) - 2.0 * params.corner_radius;
        let across = AxisLayoutRequest::with_vents(flat, extent.x, vents).solve();

        let rise = params.height - params.bottom_thickness;
        let mid = params.bottom_thickness + 0.5 * rise;
        let up = AxisLayoutRequest::with_vents(rise, extent.y, vents).solve();

        let positions = up
            .positions
            .iter()
            .flat_map(|&v| across.positions.iter().map(move |&u| Point2::new(u, mid + v)))
            .collect();

        Self {
            face,
            footprint,
            extent,
            positions,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// The ribbed opening in the floor.
#[derive(Debug, Clone, PartialEq)]
pub struct BottomCutoutPlan {
    pub width: Real,
    pub depth: Real,
    pub corner_radius: Real,
    /// Z range of the cutter; reaches `overshoot` past both floor surfaces.
    pub z_min: Real,
    pub z_max: Real,
    pub rib_width: Real,
    /// Rib centre lines, as X coordinates. Ribs run along Y.
    pub ribs: Vec<Real>,
}

impl BottomCutoutPlan {
    /// `None` when the inset leaves no room for an opening.
    pub fn compute(params: &BoxParameters, vents: &VentConfig) -> Option<Self> {
        let wall = params.wall_thickness;
        let width = params.width - 2.0 * wall - 2.0 * vents.bottom_inset;
        let depth = params.depth - 2.0 * wall - 2.0 * vents.bottom_inset;
        if !(width > 0.0 && depth > 0.0) {
            return None;
        }

        let inner_radius = (params.corner_radius - wall).max(0.0);
        let corner_radius = (inner_radius - vents.bottom_inset)
            .max(0.0)
            .min(0.5 * width.min(depth));

        let count = if vents.rib_pitch > 0.0 {
            ((width / vents.rib_pitch).floor() as usize).max(1)
        } else {
            1
        };
        let ribs = (1..=count)
            .map(|i| -0.5 * width + i as Real * width / (count + 1) as Real)
            .collect();

        Some(Self {
            width,
            depth,
            corner_radius,
            z_min: -vents.overshoot,
            z_max: params.bottom_thickness + vents.overshoot,
            rib_width: vents.rib_width,
            ribs,
        })
    }
}

/// Every opening of one box.
#[derive(Debug, Clone, PartialEq)]
pub struct VentPlan {
    /// One plan per entry of [`Face::PERFORATED`], in that order.
    pub faces: Vec<HoleLayoutPlan>,
    pub bottom: Option<BottomCutoutPlan>,
}

impl VentPlan {
    pub fn compute(params: &BoxParameters, config: &GeneratorConfig) -> Self {
        let faces = Face::PERFORATED
            .iter()
            .map(|&face| HoleLayoutPlan::compute(face, params, &config.vents))
            .collect();
        Self {
            faces,
            bottom: BottomCutoutPlan::compute(params, &config.vents),
        }
    }

    /// Plan of `face`, if it is perforated.
    pub fn face(&self, face: Face) -> Option<&HoleLayoutPlan> {
        self.faces.iter().find(|plan| plan.face == face)
    }

    /// Slots over all faces.
    pub fn hole_count(&self) -> usize {
        self.faces.iter().map(|plan| plan.positions.len()).sum()
    }

    /// True when no solid would be cut at all.
    pub fn is_empty(&self) -> bool {
        self.hole_count() == 0 && self.bottom.is_none()
    }
}
