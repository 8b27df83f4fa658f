//! Profiles used by the enclosure: rounded rectangles, clip hooks and vent slots

use crate::float_types::Real;
use crate::section::{CrossSection, quarter_arc};
use nalgebra::Point2;

/// Outline of the right-hand clip of a clip pair, counter-clockwise.
///
/// `y = 0` is the outer surface of the back wall. The first and last points
/// sit at `y = 0.5` so the stem overlaps the wall and unions cleanly; the
/// stem runs out to `y = -5.2` (through a standard pegboard), then the hook
/// turns along +X behind the board with a bevelled toe.
const CLIP_PROFILE: [[Real; 2]; 8] = [
    [1.0, 0.5],
    [1.0, -6.5],
    [1.5, -7.0],
    [6.5, -7.0],
    [6.5, -5.7],
    [6.0, -5.2],
    [3.5, -5.2],
    [3.5, 0.5],
];

impl CrossSection {
    /// Rounded rectangle centred at the origin.
    ///
    /// One quarter arc is built for the top-right corner at
    /// `(width/2 - r, height/2 - r)`; the other three corners are that arc
    /// mirrored across the axes (reversing order where a single mirror flips
    /// the winding). Corners are concatenated top-right, top-left,
    /// bottom-left, bottom-right, giving one counter-clockwise ring.
    ///
    /// The radius is **not** clamped. `corner_radius = 0` produces a plain
    /// rectangle once repeated points are cleaned; a radius above
    /// `min(width, height) / 2` produces a self-intersecting ring, which the
    /// kernel rejects at extrusion.
    ///
    /// # Example
    /// ```
    /// # use pegbox::section::CrossSection;
    /// let outline = CrossSection::rounded_rectangle(80.0, 60.0, 6.0, 12);
    /// assert!(outline.is_counter_clockwise());
    /// ```
    pub fn rounded_rectangle(
        width: Real,
        height: Real,
        corner_radius: Real,
        corner_segments: usize,
    ) -> Self {
        let r = corner_radius;
        let top_right = quarter_arc(
            Point2::new(width * 0.5 - r, height * 0.5 - r),
            r,
            corner_segments,
        );

        let top_left = top_right.iter().rev().map(|p| Point2::new(-p.x, p.y));
        let bottom_left = top_right.iter().map(|p| Point2::new(-p.x, -p.y));
        let bottom_right = top_right.iter().rev().map(|p| Point2::new(p.x, -p.y));

        let points = top_right
            .iter()
            .copied()
            .chain(top_left)
            .chain(bottom_left)
            .chain(bottom_right)
            .collect();

        Self::from_points(points)
    }

    /// Cross-section of the right-hand pegboard clip. Constant for every box.
    pub fn clip_profile() -> Self {
        Self::from_coords(&CLIP_PROFILE)
    }

    /// Cross-section of the left-hand pegboard clip, the mirror image of
    /// [`Self::clip_profile`] across the Y axis.
    pub fn clip_profile_left() -> Self {
        Self::clip_profile().mirror_x()
    }

    /// Vent slot: a `long × short` rectangle centred at the origin with its
    /// long side on X, rotated in-plane by `tilt_degrees`.
    ///
    /// A 45° tilt keeps every edge of the slot at 45° to the build plate, so
    /// the slot prints without bridging on any face.
    pub fn hole(long: Real, short: Real, tilt_degrees: Real) -> Self {
        let (hl, hs) = (long * 0.5, short * 0.5);
        Self::from_coords(&[[-hl, -hs], [hl, -hs], [hl, hs], [-hl, hs]]).rotate(tilt_degrees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::KernelError;
    use approx::assert_relative_eq;

    #[test]
    fn rounded_rectangle_spans_requested_size() {
        let rr = CrossSection::rounded_rectangle(80.0, 60.0, 6.0, 12);
        assert_eq!(rr.len(), 48);
        assert!(rr.is_counter_clockwise());
        let (lo, hi) = rr.bounding_rect().unwrap();
        assert_relative_eq!(lo.x, -40.0, epsilon = 1e-9);
        assert_relative_eq!(hi.x, 40.0, epsilon = 1e-9);
        assert_relative_eq!(lo.y, -30.0, epsilon = 1e-9);
        assert_relative_eq!(hi.y, 30.0, epsilon = 1e-9);
        assert!(rr.validate().is_ok());
    }

    #[test]
    fn rounded_rectangle_starts_at_top_right_arc() {
        let rr = CrossSection::rounded_rectangle(10.0, 8.0, 2.0, 4);
        assert_relative_eq!(rr.points()[0].x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(rr.points()[0].y, 2.0, epsilon = 1e-12);
        // top-left arc begins where the top edge ends
        assert_relative_eq!(rr.points()[4].x, -3.0, epsilon = 1e-12);
        assert_relative_eq!(rr.points()[4].y, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_radius_is_plain_rectangle() {
        let rr = CrossSection::rounded_rectangle(4.0, 2.0, 0.0, 12).validate().unwrap();
        assert_eq!(rr.len(), 4);
        assert_relative_eq!(rr.signed_area(), 8.0, epsilon = 1e-12);
    }

    #[test]
    fn half_side_radius_gives_capsule() {
        let rr = CrossSection::rounded_rectangle(20.0, 10.0, 5.0, 12).validate().unwrap();
        assert!(rr.is_counter_clockwise());
        let (lo, hi) = rr.bounding_rect().unwrap();
        assert_relative_eq!(hi.y - lo.y, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn oversized_radius_self_intersects() {
        let rr = CrossSection::rounded_rectangle(20.0, 60.0, 12.0, 12);
        assert!(matches!(rr.validate(), Err(KernelError::SelfIntersection { .. })));
    }

    #[test]
    fn clip_profiles_are_valid_mirror_pair() {
        let right = CrossSection::clip_profile();
        let left = CrossSection::clip_profile_left();
        assert_eq!(right.len(), 8);
        assert!(right.is_counter_clockwise());
        assert!(left.is_counter_clockwise());
        assert!(right.validate().is_ok());
        assert_relative_eq!(right.signed_area(), left.signed_area(), epsilon = 1e-12);
        let (lo, _) = right.bounding_rect().unwrap();
        let (_, hi) = left.bounding_rect().unwrap();
        assert_relative_eq!(lo.x, -hi.x, epsilon = 1e-12);
    }

    #[test]
    fn tilted_hole_footprint() {
        let slot = CrossSection::hole(10.0, 2.0, 45.0);
        let extents = slot.extents();
        let expected = 12.0 * std::f64::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(extents.x, expected, epsilon = 1e-9);
        assert_relative_eq!(extents.y, expected, epsilon = 1e-9);
        assert_relative_eq!(slot.signed_area(), 20.0, epsilon = 1e-9);
    }
}
