//! Closure and connectivity checks for BSP output
//!
//! BSP booleans split faces independently, so a vertex created on one side
//! of an edge is often missing from the face on the other side (a
//! T-junction). Plain edge pairing would call such a mesh open. Here every
//! edge is first subdivided at each welded vertex lying on it; a closed,
//! consistently oriented surface then uses every sub-edge as often in one
//! direction as in the other.

use crate::float_types::{Real, tolerance};
use crate::mesh::Mesh;
use nalgebra::Point3;
use std::collections::HashMap;
use std::iter::once;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct QuantizedPoint(i64, i64, i64);

fn quantize_point(p: &Point3<Real>, step: Real) -> QuantizedPoint {
    QuantizedPoint(
        (p.x / step).round() as i64,
        (p.y / step).round() as i64,
        (p.z / step).round() as i64,
    )
}

fn find(parent: &mut [usize], mut i: usize) -> usize {
    while parent[i] != i {
        parent[i] = parent[parent[i]];
        i = parent[i];
    }
    i
}

/// Edge census of a [`Mesh`] after welding and T-junction resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ManifoldReport {
    /// Distinct vertices after welding at the tolerance.
    pub vertices: usize,
    /// Directed sub-edges whose reverse is used a different number of times.
    /// Zero for a closed surface with consistent winding.
    pub boundary_edges: usize,
    /// Edge-connected pieces of the surface.
    pub components: usize,
}

impl Mesh {
    /// Weld, subdivide and count. See the module docs.
    pub fn manifold_report(&self) -> ManifoldReport {
        let eps = tolerance();

        let mut index: HashMap<QuantizedPoint, usize> = HashMap::new();
        let mut points: Vec<Point3<Real>> = Vec::new();
        let mut rings: Vec<Vec<usize>> = Vec::with_capacity(self.polygons.len());
        for poly in &self.polygons {
            let mut ring: Vec<usize> = poly
                .vertices
                .iter()
                .map(|v| {
                    *index.entry(quantize_point(&v.pos, eps)).or_insert_with(|| {
                        points.push(v.pos);
                        points.len() - 1
                    })
                })
                .collect();
            ring.dedup();
            while ring.len() > 1 && ring.first() == ring.last() {
                ring.pop();
            }
            if ring.len() >= 2 {
                rings.push(ring);
            }
        }

        // candidates for T-junctions are looked up by x
        let mut by_x: Vec<usize> = (0..points.len()).collect();
        by_x.sort_by(|&a, &b| points[a].x.total_cmp(&points[b].x));

        let mut directed: HashMap<(usize, usize), i64> = HashMap::new();
        let mut parent: Vec<usize> = (0..points.len()).collect();
        let mut used = vec![false; points.len()];

        for ring in &rings {
            let n = ring.len();
            for k in 0..n {
                let (a, b) = (ring[k], ring[(k + 1) % n]);
                let (pa, pb) = (points[a], points[b]);
                let d = pb - pa;
                let len2 = d.norm_squared();
                let (lo, hi) = (pa.x.min(pb.x) - eps, pa.x.max(pb.x) + eps);

                let start = by_x.partition_point(|&i| points[i].x < lo);
                let mut inner: Vec<(Real, usize)> = by_x[start..]
                    .iter()
                    .take_while(|&&i| points[i].x <= hi)
                    .filter(|&&i| i != a && i != b)
                    .filter_map(|&i| {
                        let offset = points[i] - pa;
                        let t = offset.dot(&d) / len2;
                        if t <= 0.0 || t >= 1.0 {
                            return None;
                        }
                        ((offset - d * t).norm() <= eps).then_some((t, i))
                    })
                    .collect();
                inner.sort_by(|x, y| x.0.total_cmp(&y.0));

                let mut prev = a;
                for (_, next) in inner.into_iter().chain(once((1.0, b))) {
                    *directed.entry((prev, next)).or_insert(0) += 1;
                    let (ra, rb) = (find(&mut parent, prev), find(&mut parent, next));
                    parent[ra] = rb;
                    used[prev] = true;
                    used[next] = true;
                    prev = next;
                }
            }
        }

        let boundary_edges = directed
            .iter()
            .filter(|&(&(a, b), &count)| directed.get(&(b, a)).copied().unwrap_or(0) != count)
            .count();

        let mut roots: Vec<usize> = (0..points.len())
            .filter(|&i| used[i])
            .map(|i| find(&mut parent, i))
            .collect();
        roots.sort_unstable();
        roots.dedup();

        ManifoldReport {
            vertices: points.len(),
            boundary_edges,
            components: roots.len(),
        }
    }

    /// True when the surface is closed and consistently wound, T-junctions
    /// notwithstanding.
    pub fn is_manifold(&self) -> bool {
        self.manifold_report().boundary_edges == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Translation3;

    fn moved(mesh: Mesh, x: Real, y: Real, z: Real) -> Mesh {
        mesh.transform(&Translation3::new(x, y, z).to_homogeneous())
            .unwrap()
    }

    #[test]
    fn cube_is_closed() {
        let report = Mesh::cuboid(1.0, 2.0, 3.0).manifold_report();
        assert_eq!(
            report,
            ManifoldReport {
                vertices: 8,
                boundary_edges: 0,
                components: 1
            }
        );
    }

    #[test]
    fn missing_face_leaves_boundary() {
        let mut cube = Mesh::cuboid(1.0, 1.0, 1.0);
        cube.polygons.pop();
        let report = cube.manifold_report();
        assert_eq!(report.boundary_edges, 4);
        assert!(!cube.is_manifold());
    }

    #[test]
    fn union_with_t_junctions_is_closed() {
        let base = Mesh::cuboid(2.0, 2.0, 2.0);
        let knob = moved(Mesh::cuboid(1.0, 1.0, 1.0), 0.5, 0.5, 1.5);
        let merged = base.union(&knob);
        let report = merged.manifold_report();
        assert_eq!(report.boundary_edges, 0);
        assert_eq!(report.components, 1);
    }

    #[test]
    fn through_hole_is_closed() {
        let block = Mesh::cuboid(4.0, 4.0, 2.0);
        let drill = moved(Mesh::cuboid(1.0, 1.0, 4.0), 1.5, 1.5, -1.0);
        assert!(block.difference(&drill).is_manifold());
    }

    #[test]
    fn disjoint_pieces_are_counted() {
        let a = Mesh::cuboid(1.0, 1.0, 1.0);
        let b = moved(Mesh::cuboid(1.0, 1.0, 1.0), 5.0, 0.0, 0.0);
        let report = a.union(&b).manifold_report();
        assert_eq!(report.boundary_edges, 0);
        assert_eq!(report.components, 2);
    }
}
