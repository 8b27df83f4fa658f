//! Quarter-circle point sequences used for rounded corners

use crate::float_types::{FRAC_PI_2, Real};
use nalgebra::Point2;

/// Number of points per corner arc when the caller has no preference.
pub const DEFAULT_ARC_SEGMENTS: usize = 12;

/// **Parametric quarter arc**
///
/// Traces a 90° counter-clockwise arc around `center`, starting at angle 0
/// (the point `center + (radius, 0)`) and ending at 90°
/// (`center + (0, radius)`):
/// ```text
/// θᵢ = (π/2)·i/(n-1),  i ∈ {0, …, n-1}
/// pᵢ = center + radius·(cos θᵢ, sin θᵢ)
/// ```
/// `segments` is the number of emitted points; fewer than 2 is treated as 2
/// so both end points are always present. A radius of 0 collapses every
/// point onto `center`, which turns the corner square.
pub fn quarter_arc(center: Point2<Real>, radius: Real, segments: usize) -> Vec<Point2<Real>> {
    let segments = segments.max(2);
    let step = FRAC_PI_2 / (segments - 1) as Real;

    (0..segments)
        .map(|i| {
            let theta = i as Real * step;
            Point2::new(
                center.x + radius * theta.cos(),
                center.y + radius * theta.sin(),
            )
        })
        .collect()
}
