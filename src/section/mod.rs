//! `CrossSection`: closed 2D outlines that seed extrusions
//!
//! A cross-section is an ordered ring of points in a face-local plane. The
//! ring is implicitly closed (the last point connects back to the first).
//! Profiles built by this module wind counter-clockwise so that extrusion
//! produces outward-facing solids.

use crate::errors::KernelError;
use crate::float_types::{Real, tolerance};
use geo::line_intersection::{LineIntersection, line_intersection};
use geo::{Coord, Line, LineString, Polygon as GeoPolygon};
use nalgebra::{Point2, Rotation2, Vector2};

pub mod arc;
pub mod shapes;

pub use arc::{DEFAULT_ARC_SEGMENTS, quarter_arc};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CrossSection {
    points: Vec<Point2<Real>>,
}

impl CrossSection {
    /// Build a cross-section from an ordered ring of points.
    /// The ring must not repeat its first point at the end.
    pub const fn from_points(points: Vec<Point2<Real>>) -> Self {
        Self { points }
    }

    /// Build a cross-section from `[x, y]` pairs.
    pub fn from_coords(coords: &[[Real; 2]]) -> Self {
        Self::from_points(coords.iter().map(|&[x, y]| Point2::new(x, y)).collect())
    }

    pub fn points(&self) -> &[Point2<Real>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Shoelace area; positive for counter-clockwise rings.
    pub fn signed_area(&self) -> Real {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let twice: Real = (0..n)
            .map(|i| {
                let a = self.points[i];
                let b = self.points[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum();
        0.5 * twice
    }

    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Same ring, opposite winding.
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }

    pub fn translate(&self, dx: Real, dy: Real) -> Self {
        let offset = Vector2::new(dx, dy);
        Self {
            points: self.points.iter().map(|p| p + offset).collect(),
        }
    }

    /// Rotate about the origin, counter-clockwise, by `degrees`.
    pub fn rotate(&self, degrees: Real) -> Self {
        let rotation = Rotation2::new(degrees.to_radians());
        Self {
            points: self.points.iter().map(|p| rotation * p).collect(),
        }
    }

    /// Mirror across the Y axis (`x → -x`). Point order is reversed so the
    /// winding survives the reflection.
    pub fn mirror_x(&self) -> Self {
        Self {
            points: self
                .points
                .iter()
                .rev()
                .map(|p| Point2::new(-p.x, p.y))
                .collect(),
        }
    }

    /// Axis-aligned `(min, max)` corners, or `None` for an empty ring.
    pub fn bounding_rect(&self) -> Option<(Point2<Real>, Point2<Real>)> {
        let first = *self.points.first()?;
        Some(self.points.iter().fold((first, first), |(lo, hi), p| {
            (
                Point2::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point2::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        }))
    }

    /// Width and height of [`Self::bounding_rect`].
    pub fn extents(&self) -> Vector2<Real> {
        self.bounding_rect()
            .map(|(lo, hi)| hi - lo)
            .unwrap_or_else(Vector2::zeros)
    }

    /// Convert into a closed `geo::Polygon` without holes.
    pub fn to_geo(&self) -> GeoPolygon<Real> {
        let mut coords: Vec<Coord<Real>> =
            self.points.iter().map(|p| Coord { x: p.x, y: p.y }).collect();
        if let Some(&first) = coords.first() {
            coords.push(first); // close
        }
        GeoPolygon::new(LineString::new(coords), vec![])
    }

    /// Drop consecutive points closer than the tolerance, including a
    /// trailing point that repeats the first one.
    pub fn cleaned(&self) -> Self {
        let eps = tolerance();
        let mut points: Vec<Point2<Real>> = Vec::with_capacity(self.points.len());
        for p in &self.points {
            if points.last().is_none_or(|last| (p - last).norm() > eps) {
                points.push(*p);
            }
        }
        while points.len() > 1 {
            let (first, last) = (points[0], points[points.len() - 1]);
            if (first - last).norm() > eps {
                break;
            }
            points.pop();
        }
        Self { points }
    }

    /// Check that the ring describes a simple polygon with positive extent.
    ///
    /// Returns the cleaned ring (see [`Self::cleaned`]) on success.
    ///
    /// ## Errors
    /// - [`KernelError::InvalidCoordinate`] for NaN or infinite coordinates
    /// - [`KernelError::TooFewPoints`] when fewer than 3 distinct points remain
    /// - [`KernelError::ZeroArea`] when the ring encloses no area
    /// - [`KernelError::SelfIntersection`] when two non-adjacent edges meet
    pub fn validate(&self) -> Result<Self, KernelError> {
        if let Some(p) = self
            .points
            .iter()
            .find(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(KernelError::InvalidCoordinate { x: p.x, y: p.y });
        }

        let cleaned = self.cleaned();
        let n = cleaned.len();
        if n < 3 {
            return Err(KernelError::TooFewPoints(n));
        }
        if cleaned.signed_area().abs() <= tolerance() {
            return Err(KernelError::ZeroArea);
        }

        let edge = |i: usize| {
            let a = cleaned.points[i];
            let b = cleaned.points[(i + 1) % n];
            Line::new(Coord { x: a.x, y: a.y }, Coord { x: b.x, y: b.y })
        };
        for i in 0..n {
            for j in (i + 2)..n {
                // the first and last edges share the closing vertex
                if i == 0 && j == n - 1 {
                    continue;
                }
                match line_intersection(edge(i), edge(j)) {
                    Some(LineIntersection::SinglePoint { intersection, .. }) => {
                        return Err(KernelError::SelfIntersection {
                            x: intersection.x,
                            y: intersection.y,
                        });
                    },
                    Some(LineIntersection::Collinear { intersection }) => {
                        return Err(KernelError::SelfIntersection {
                            x: intersection.start.x,
                            y: intersection.start.y,
                        });
                    },
                    None => {},
                }
            }
        }

        Ok(cleaned)
    }
}
