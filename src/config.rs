//! Box parameters and generator configuration.
//!
//! [`BoxParameters`] are the user-facing dimensions of one enclosure.
//! [`GeneratorConfig`] holds the manufacturing constants (hole shape and
//! spacing, clip pitch, arc resolution) that stay fixed across boxes.
//!
//! # Example
//!
//! ```
//! use pegbox::config::{BoxParameters, GeneratorConfig};
//!
//! let params = BoxParameters::default().with_vent_hole(12.0, 2.5);
//! let config = GeneratorConfig::draft().with_arc_segments(8);
//! assert!(params.validate().is_ok());
//! assert_eq!(config.arc_segments, 8);
//! ```

use crate::errors::ParameterError;
use crate::float_types::Real;
use crate::section::DEFAULT_ARC_SEGMENTS;
use serde::{Deserialize, Serialize};

/// Dimensions of one enclosure, all in millimetres.
///
/// Missing fields in a JSON document fall back to the reference box
/// (52 high, 80 wide, 60 deep, radius 6, wall 2, floor 3).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxParameters {
    pub height: Real,
    pub width: Real,
    pub depth: Real,
    pub corner_radius: Real,
    pub wall_thickness: Real,
    pub bottom_thickness: Real,

    /// Long side of a vent slot; `None` uses [`VentConfig::hole_long`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vent_hole_width: Option<Real>,

    /// Short side of a vent slot; `None` uses [`VentConfig::hole_short`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vent_hole_height: Option<Real>,
}

impl Default for BoxParameters {
    fn default() -> Self {
        Self {
            height: 52.0,
            width: 80.0,
            depth: 60.0,
            corner_radius: 6.0,
            wall_thickness: 2.0,
            bottom_thickness: 3.0,
            vent_hole_width: None,
            vent_hole_height: None,
        }
    }
}

impl BoxParameters {
    #[must_use]
    pub const fn with_size(mut self, width: Real, depth: Real, height: Real) -> Self {
        self.width = width;
        self.depth = depth;
        self.height = height;
        self
    }

    #[must_use]
    pub const fn with_corner_radius(mut self, corner_radius: Real) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    #[must_use]
    pub const fn with_walls(mut self, wall_thickness: Real, bottom_thickness: Real) -> Self {
        self.wall_thickness = wall_thickness;
        self.bottom_thickness = bottom_thickness;
        self
    }

    #[must_use]
    pub const fn with_vent_hole(mut self, long: Real, short: Real) -> Self {
        self.vent_hole_width = Some(long);
        self.vent_hole_height = Some(short);
        self
    }

    /// Check the dimensional invariants.
    ///
    /// The generator never calls this itself: bounds are the caller's job,
    /// and out-of-range input surfaces as a kernel error instead.
    ///
    /// # Errors
    ///
    /// The first violated invariant, as a [`ParameterError`].
    pub fn validate(&self) -> Result<(), ParameterError> {
        for (parameter, value) in [
            ("height", self.height),
            ("width", self.width),
            ("depth", self.depth),
            ("wall_thickness", self.wall_thickness),
            ("bottom_thickness", self.bottom_thickness),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ParameterError::NotPositive { parameter, value });
            }
        }
        if self.corner_radius < 0.0 || !self.corner_radius.is_finite() {
            return Err(ParameterError::NegativeCornerRadius(self.corner_radius));
        }
        let limit = self.width.min(self.depth) * 0.5;
        if self.wall_thickness >= limit {
            return Err(ParameterError::WallTooThick {
                wall: self.wall_thickness,
                limit,
            });
        }
        if self.bottom_thickness >= self.height {
            return Err(ParameterError::BottomTooThick {
                bottom: self.bottom_thickness,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Vent slot shape, spacing rules and floor cutout settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VentConfig {
    /// Slot length before tilting.
    pub hole_long: Real,
    /// Slot width before tilting.
    pub hole_short: Real,
    /// In-plane slot rotation; 45° keeps every edge printable without bridges.
    pub tilt_degrees: Real,

    /// Minimum distance between a slot and the end of its span.
    pub edge_clearance: Real,
    /// Minimum gap between neighbouring slots.
    pub min_gap: Real,
    /// Cap on slots per axis; bounds the number of booleans per pass.
    pub max_per_axis: Option<usize>,
    /// Gap increment used while enforcing `max_per_axis`.
    pub gap_step: Real,
    /// Gap at which the search for a capped layout stops.
    pub max_gap: Real,

    /// How far cutters reach past the surfaces they cut.
    pub overshoot: Real,

    /// Margin between the inner wall and the floor cutout.
    pub bottom_inset: Real,
    pub rib_width: Real,
    /// Cutout width per rib.
    pub rib_pitch: Real,
}

impl Default for VentConfig {
    fn default() -> Self {
        Self {
            hole_long: 10.0,
            hole_short: 2.0,
            tilt_degrees: 45.0,
            edge_clearance: 3.0,
            min_gap: 2.0,
            max_per_axis: Some(6),
            gap_step: 1.0,
            max_gap: 30.0,
            overshoot: 1.0,
            bottom_inset: 4.0,
            rib_width: 3.0,
            rib_pitch: 30.0,
        }
    }
}

impl VentConfig {
    #[must_use]
    pub const fn with_hole(mut self, long: Real, short: Real) -> Self {
        self.hole_long = long;
        self.hole_short = short;
        self
    }

    #[must_use]
    pub const fn with_spacing(mut self, edge_clearance: Real, min_gap: Real) -> Self {
        self.edge_clearance = edge_clearance;
        self.min_gap = min_gap;
        self
    }

    #[must_use]
    pub const fn with_max_per_axis(mut self, max_per_axis: Option<usize>) -> Self {
        self.max_per_axis = max_per_axis;
        self
    }
}

/// Pegboard clip grid settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipConfig {
    /// Hole pitch of the pegboard, both horizontally and vertically.
    pub pitch: Real,
    /// Keep-out from the rounded corners when laying out columns.
    pub padding: Real,
    /// Extrusion height of one clip pair.
    pub clip_height: Real,
}

impl Default for ClipConfig {
    fn default() -> Self {
        Self {
            pitch: 40.0,
            padding: 5.0,
            clip_height: 12.0,
        }
    }
}

/// Everything about a generation pass that is not a box dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Points per rounded corner.
    pub arc_segments: usize,
    pub vents: VentConfig,
    pub clips: ClipConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            arc_segments: DEFAULT_ARC_SEGMENTS,
            vents: VentConfig::default(),
            clips: ClipConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Coarse corners and at most three slots per axis, for fast previews.
    ///
    /// # Example
    ///
    /// ```
    /// use pegbox::config::GeneratorConfig;
    ///
    /// let draft = GeneratorConfig::draft();
    /// assert!(draft.arc_segments < GeneratorConfig::default().arc_segments);
    /// ```
    #[must_use]
    pub fn draft() -> Self {
        Self {
            arc_segments: 4,
            vents: VentConfig::default().with_max_per_axis(Some(3)),
            clips: ClipConfig::default(),
        }
    }

    #[must_use]
    pub const fn with_arc_segments(mut self, arc_segments: usize) -> Self {
        self.arc_segments = arc_segments;
        self
    }

    #[must_use]
    pub const fn with_vents(mut self, vents: VentConfig) -> Self {
        self.vents = vents;
        self
    }

    #[must_use]
    pub const fn with_clips(mut self, clips: ClipConfig) -> Self {
        self.clips = clips;
        self
    }
}
