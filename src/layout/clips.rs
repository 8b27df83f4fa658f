//! Where clip pairs go on the back face

use crate::config::{BoxParameters, ClipConfig};
use crate::float_types::Real;

/// One clip pair: a column offset and a vertical level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipPlacement {
    /// X of the pair's centre line.
    pub x_offset: Real,
    /// 0 for the row that sits on the print bed.
    pub level: usize,
    /// Z of the pair's underside.
    pub z_offset: Real,
    /// Underside trimmed to 45° so it prints without support.
    pub chamfered: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClipPlacementPlan {
    /// Column centre lines, ascending and symmetric about 0.
    pub columns: Vec<Real>,
    pub levels: usize,
    /// Extrusion height of every pair; the configured height, cut down to
    /// the box height for boxes shorter than one clip.
    pub clip_height: Real,
    /// Level by level, columns left to right within a level.
    pub placements: Vec<ClipPlacement>,
}

/// `floor(length / pitch) + 1`, never below 1.
fn grid_count(length: Real, pitch: Real) -> usize {
    if pitch <= 0.0 || !length.is_finite() || length < 0.0 {
        return 1;
    }
    (length / pitch).floor() as usize + 1
}

impl ClipPlacementPlan {
    /// Lay a pegboard-pitch grid over the back face.
    ///
    /// Columns span the flat width minus `padding` on each side and are
    /// centred on the box. Levels start on the bed and climb by one pitch
    /// while a whole clip still fits below the rim. A box shorter than one
    /// clip still gets its bed-level row, with the clips cut to the box
    /// height so nothing rises above the rim.
    ///
    /// ```
    /// use pegbox::config::{BoxParameters, ClipConfig};
    /// use pegbox::layout::clips::ClipPlacementPlan;
    ///
    /// let plan = ClipPlacementPlan::compute(&BoxParameters::default(), &ClipConfig::default());
    /// assert_eq!(plan.columns, vec![-20.0, 20.0]);
    /// assert_eq!(plan.levels, 2);
    /// ```
    pub fn compute(params: &BoxParameters, clips: &ClipConfig) -> Self {
        let usable = params.width - 2.0 * params.corner_radius - 2.0 * clips.padding;
        let column_count = grid_count(usable, clips.pitch);
        let levels = grid_count(params.height - clips.clip_height, clips.pitch);
        let clip_height = clips.clip_height.min(params.height);

        let centre = 0.5 * (column_count - 1) as Real;
        let columns: Vec<Real> = (0..column_count)
            .map(|i| (i as Real - centre) * clips.pitch)
            .collect();

        let placements = (0..levels)
            .flat_map(|level| {
                columns.iter().map(move |&x_offset| ClipPlacement {
                    x_offset,
                    level,
                    z_offset: level as Real * clips.pitch,
                    chamfered: level > 0,
                })
            })
            .collect();

        Self {
            columns,
            levels,
            clip_height,
            placements,
        }
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_bed_row_is_unchamfered() {
        let params = BoxParameters::default().with_size(200.0, 60.0, 130.0);
        let plan = ClipPlacementPlan::compute(&params, &ClipConfig::default());
        // usable 178 → 5 columns; (130 - 12) / 40 → 3 levels
        assert_eq!(plan.columns.len(), 5);
        assert_eq!(plan.levels, 3);
        assert_eq!(plan.len(), 15);
        assert_eq!(plan.clip_height, 12.0);
        for clip in &plan.placements {
            assert_eq!(clip.chamfered, clip.level != 0);
            assert_eq!(clip.z_offset, 40.0 * clip.level as Real);
        }
        assert_eq!(plan.columns[2], 0.0);
    }

    #[test]
    fn tiny_box_still_gets_one_clip() {
        let params = BoxParameters::default()
            .with_size(20.0, 20.0, 8.0)
            .with_walls(1.0, 1.0);
        let plan = ClipPlacementPlan::compute(&params, &ClipConfig::default());
        assert_eq!(plan.columns, vec![0.0]);
        assert_eq!(plan.levels, 1);
        assert_eq!(plan.clip_height, 8.0);
        assert!(!plan.placements[0].chamfered);
    }

    #[test]
    fn columns_are_symmetric() {
        for width in [40.0, 80.0, 123.0, 250.0] {
            let params = BoxParameters::default().with_size(width, 60.0, 52.0);
            let plan = ClipPlacementPlan::compute(&params, &ClipConfig::default());
            let n = plan.columns.len();
            for i in 0..n {
                assert_eq!(plan.columns[i], -plan.columns[n - 1 - i]);
            }
        }
    }
}
