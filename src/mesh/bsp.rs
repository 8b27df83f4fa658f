//! [BSP](https://en.wikipedia.org/wiki/Binary_space_partitioning) tree node structure and operations

use crate::float_types::Real;
use crate::mesh::plane::{BACK, COPLANAR, FRONT, Plane};
use crate::mesh::polygon::Polygon;

/// A BSP tree node, containing polygons plus optional front/back subtrees
#[derive(Debug, Clone, Default)]
pub struct Node {
    /// Splitting plane for this node *or* **None** for an empty tree.
    pub plane: Option<Plane>,

    /// Subtree in front of `plane`.
    pub front: Option<Box<Node>>,

    /// Subtree behind `plane`.
    pub back: Option<Box<Node>>,

    /// Polygons lying on `plane`.
    pub polygons: Vec<Polygon>,
}

impl Node {
    pub const fn new() -> Self {
        Self {
            plane: None,
            front: None,
            back: None,
            polygons: Vec::new(),
        }
    }

    pub fn from_polygons(polygons: &[Polygon]) -> Self {
        let mut node = Self::new();
        node.build(polygons);
        node
    }

    /// Convert solid space to empty space and empty space to solid space.
    pub fn invert(&mut self) {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            node.polygons.iter_mut().for_each(Polygon::flip);
            if let Some(plane) = node.plane.as_mut() {
                plane.flip();
            }
            std::mem::swap(&mut node.front, &mut node.back);
            if let Some(front) = node.front.as_deref_mut() {
                stack.push(front);
            }
            if let Some(back) = node.back.as_deref_mut() {
                stack.push(back);
            }
        }
    }

    /// Choose a splitting plane among the first polygons, favouring planes
    /// that split few polygons and balance the two halves.
    fn pick_splitting_plane(polygons: &[Polygon]) -> Plane {
        const K_SPANS: Real = 8.0;
        const K_BALANCE: Real = 1.0;
        const SAMPLE: usize = 20;

        let mut best_plane = polygons[0].plane.clone();
        let mut best_score = Real::MAX;

        for candidate in polygons.iter().take(SAMPLE) {
            let plane = &candidate.plane;
            let (mut front, mut back, mut spanning) = (0i64, 0i64, 0i64);
            for poly in polygons {
                match plane.classify_polygon(poly) {
                    COPLANAR => {},
                    FRONT => front += 1,
                    BACK => back += 1,
                    _ => spanning += 1,
                }
            }
            let score = K_SPANS * spanning as Real + K_BALANCE * (front - back).abs() as Real;
            if score < best_score {
                best_score = score;
                best_plane = plane.clone();
            }
        }
        best_plane
    }

    /// Remove every part of `polygons` that lies inside this tree.
    pub fn clip_polygons(&self, polygons: &[Polygon]) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack = vec![(self, polygons.to_vec())];

        while let Some((node, polys)) = stack.pop() {
            let Some(plane) = node.plane.as_ref() else {
                result.extend(polys);
                continue;
            };

            let mut front_polys = Vec::with_capacity(polys.len());
            let mut back_polys = Vec::with_capacity(polys.len());
            for polygon in &polys {
                let (coplanar_front, coplanar_back, front, back) = plane.split_polygon(polygon);
                front_polys.extend(coplanar_front);
                front_polys.extend(front);
                back_polys.extend(coplanar_back);
                back_polys.extend(back);
            }

            match node.front.as_deref() {
                Some(front) => stack.push((front, front_polys)),
                None => result.extend(front_polys),
            }
            // Behind a leaf is solid, so those fragments are discarded.
            if let Some(back) = node.back.as_deref() {
                stack.push((back, back_polys));
            }
        }
        result
    }

    /// Remove all polygons in this tree that are inside `bsp`.
    pub fn clip_to(&mut self, bsp: &Node) {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            node.polygons = bsp.clip_polygons(&node.polygons);
            if let Some(front) = node.front.as_deref_mut() {
                stack.push(front);
            }
            if let Some(back) = node.back.as_deref_mut() {
                stack.push(back);
            }
        }
    }

    /// Every polygon stored in the tree.
    pub fn all_polygons(&self) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            result.extend_from_slice(&node.polygons);
            stack.extend(node.front.as_deref());
            stack.extend(node.back.as_deref());
        }
        result
    }

    /// Insert `polygons` into the tree, splitting them where needed.
    pub fn build(&mut self, polygons: &[Polygon]) {
        if polygons.is_empty() {
            return;
        }

        let mut stack = vec![(self, polygons.to_vec())];
        while let Some((node, polys)) = stack.pop() {
            if polys.is_empty() {
                continue;
            }
            let plane = node
                .plane
                .get_or_insert_with(|| Self::pick_splitting_plane(&polys))
                .clone();

            let mut front = Vec::with_capacity(polys.len() / 2);
            let mut back = Vec::with_capacity(polys.len() / 2);
            for polygon in &polys {
                let (coplanar_front, coplanar_back, f, b) = plane.split_polygon(polygon);
                node.polygons.extend(coplanar_front);
                node.polygons.extend(coplanar_back);
                front.extend(f);
                back.extend(b);
            }

            if !front.is_empty() {
                let child: &mut Node = node.front.get_or_insert_with(|| Box::new(Node::new()));
                stack.push((child, front));
            }
            if !back.is_empty() {
                let child: &mut Node = node.back.get_or_insert_with(|| Box::new(Node::new()));
                stack.push((child, back));
            }
        }
    }
}
