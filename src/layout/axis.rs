//! Hole count and centre positions along one span

use crate::config::VentConfig;
use crate::float_types::Real;

/// Input of [`AxisLayoutRequest::solve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisLayoutRequest {
    /// Length of the span, centred on 0.
    pub span: Real,
    /// Size of one hole along the span.
    pub footprint: Real,
    /// Minimum distance between a hole and either end of the span.
    pub edge_clearance: Real,
    /// Minimum gap between neighbouring holes.
    pub min_gap: Real,
    /// Upper bound on the number of holes, if any.
    pub max_count: Option<usize>,
    /// Gap increment used while enforcing `max_count`.
    pub gap_step: Real,
    /// Gap beyond which the capped search gives up.
    pub max_gap: Real,
}

/// Result of [`AxisLayoutRequest::solve`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisLayout {
    /// Gap between neighbouring holes after the slack was spread out.
    /// Zero for fewer than two holes.
    pub gap: Real,
    /// Hole centres, ascending.
    pub positions: Vec<Real>,
}

impl AxisLayout {
    pub fn count(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl AxisLayoutRequest {
    /// Request for `span` and `footprint` with the spacing rules of `vents`.
    pub const fn with_vents(span: Real, footprint: Real, vents: &VentConfig) -> Self {
        Self {
            span,
            footprint,
            edge_clearance: vents.edge_clearance,
            min_gap: vents.min_gap,
            max_count: vents.max_per_axis,
            gap_step: vents.gap_step,
            max_gap: vents.max_gap,
        }
    }

    /// How many holes fit in `usable` with at least `gap` between them.
    fn count_at(&self, usable: Real, gap: Real) -> usize {
        let n = ((usable + gap) / (self.footprint + gap)).floor();
        if n.is_finite() && n >= 1.0 { n as usize } else { 1 }
    }

    /// Lay out as many holes as fit, spread evenly over the usable span.
    ///
    /// With a cap, the gap grows by `gap_step` until the count fits under
    /// the cap or the gap passes `max_gap`; a count still above the cap at
    /// that point is clamped to it.
    ///
    /// # Example
    ///
    /// ```
    /// use pegbox::layout::axis::AxisLayoutRequest;
    /// use pegbox::config::VentConfig;
    ///
    /// let layout = AxisLayoutRequest::with_vents(48.0, 8.0, &VentConfig::default()).solve();
    /// assert_eq!(layout.count(), 4);
    /// assert_eq!(layout.positions[0], -17.0);
    /// ```
    pub fn solve(&self) -> AxisLayout {
        let usable = self.span - 2.0 * self.edge_clearance;
        if !usable.is_finite()
            || self.footprint.is_nan()
            || self.footprint <= 0.0
            || usable < self.footprint
        {
            return AxisLayout::default();
        }

        let mut gap = self.min_gap.max(0.0);
        let mut count = self.count_at(usable, gap);
        if let Some(cap) = self.max_count {
            if self.gap_step > 0.0 {
                while count > cap && gap <= self.max_gap {
                    gap += self.gap_step;
                    count = self.count_at(usable, gap);
                }
            }
            count = count.min(cap);
        }

        match count {
            0 => AxisLayout::default(),
            1 => AxisLayout {
                gap: 0.0,
                positions: vec![0.0],
            },
            n => {
                let gap = (usable - n as Real * self.footprint) / (n - 1) as Real;
                let start = -0.5 * self.span + self.edge_clearance + 0.5 * self.footprint;
                let step = self.footprint + gap;
                AxisLayout {
                    gap,
                    positions: (0..n).map(|i| start + i as Real * step).collect(),
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn request(span: Real, footprint: Real) -> AxisLayoutRequest {
        AxisLayoutRequest {
            span,
            footprint,
            edge_clearance: 3.0,
            min_gap: 2.0,
            max_count: None,
            gap_step: 1.0,
            max_gap: 30.0,
        }
    }

    #[test]
    fn too_short_span_is_empty() {
        assert!(request(10.0, 5.0).solve().is_empty());
        assert!(request(-4.0, 5.0).solve().is_empty());
    }

    #[test]
    fn exact_fit_is_single_centred_hole() {
        let layout = request(11.0, 5.0).solve();
        assert_eq!(layout.positions, vec![0.0]);
        assert_eq!(layout.gap, 0.0);
    }

    #[test]
    fn slack_is_spread_over_gaps() {
        // usable 30, footprint 5, min gap 2: 4 holes, 10 mm left over 3 gaps
        let layout = request(36.0, 5.0).solve();
        assert_eq!(layout.count(), 4);
        assert_relative_eq!(layout.gap, 10.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(layout.positions[0], -12.5, epsilon = 1e-12);
        assert_relative_eq!(layout.positions[3], 12.5, epsilon = 1e-12);
    }

    #[test]
    fn cap_grows_gap_first() {
        let mut req = request(106.0, 5.0);
        req.max_count = Some(4);
        // uncapped: floor(102 / 7) = 14 holes
        assert_eq!(request(106.0, 5.0).solve().count(), 14);
        let layout = req.solve();
        assert_eq!(layout.count(), 4);
        assert!(layout.gap >= 2.0);
    }

    #[test]
    fn gap_ceiling_clamps_count_to_cap() {
        let mut req = request(1006.0, 5.0);
        req.max_count = Some(3);
        req.max_gap = 10.0;
        let layout = req.solve();
        assert_eq!(layout.count(), 3);
        assert_relative_eq!(layout.positions[1], 0.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_cap_means_no_holes() {
        let mut req = request(50.0, 5.0);
        req.max_count = Some(0);
        assert!(req.solve().is_empty());
    }

    proptest! {
        #[test]
        fn positions_respect_clearance_and_gap(
            span in 0.0..400.0f64,
            footprint in 0.5..40.0f64,
            edge in 0.0..10.0f64,
            gap in 0.0..10.0f64,
            cap in proptest::option::of(1usize..12),
        ) {
            let req = AxisLayoutRequest {
                span,
                footprint,
                edge_clearance: edge,
                min_gap: gap,
                max_count: cap,
                gap_step: 1.0,
                max_gap: 30.0,
            };
            let layout = req.solve();
            let fits = span - 2.0 * edge >= footprint;

            prop_assert_eq!(layout.is_empty(), !fits);
            if let Some(cap) = cap {
                prop_assert!(layout.count() <= cap);
            }
            for p in &layout.positions {
                prop_assert!(*p >= -span / 2.0 + edge - 1e-9);
                prop_assert!(*p <= span / 2.0 - edge + 1e-9);
            }
            for pair in layout.positions.windows(2) {
                prop_assert!(pair[1] - pair[0] >= footprint + gap - 1e-9);
            }
        }
    }
}
