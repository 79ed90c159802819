// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshcsg Team

//! Binary space partitioning tree over polygons
//!
//! Each node holds a splitting plane, the polygons coplanar with it (both
//! facings merged in one list), and optional front/back subtrees. The tree
//! represents a solid: polygons reaching empty back space during a clip are
//! inside the solid and get discarded.

use super::{Plane, Polygon};

/// A node in the BSP tree.
///
/// A fresh node has no plane; the first polygon ingested by [`build`]
/// donates its supporting plane, and the plane is never reassigned after
/// that, even if clipping later empties the node's polygon list. Children
/// are exclusively owned; dropping a node drops the whole subtree.
///
/// [`build`]: BspNode::build
#[derive(Debug, Clone, Default)]
pub struct BspNode {
    plane: Option<Plane>,
    polygons: Vec<Polygon>,
    front: Option<Box<BspNode>>,
    back: Option<Box<BspNode>>,
}

impl BspNode {
    /// Empty node; the first `build` call sets the splitting plane.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from a polygon list.
    pub fn from_polygons(polygons: Vec<Polygon>) -> Self {
        let mut node = Self::new();
        node.build(polygons);
        node
    }

    /// Ingest polygons, extending the tree in place. May be called
    /// repeatedly with further batches.
    ///
    /// Fragments coplanar with the node's plane stay in this node whichever
    /// way they face; front and back fragments recurse into children created
    /// on demand.
    pub fn build(&mut self, polygons: Vec<Polygon>) {
        if polygons.is_empty() {
            return;
        }
        let plane = *self.plane.get_or_insert(polygons[0].plane);

        let mut front = Vec::new();
        let mut back = Vec::new();
        for polygon in &polygons {
            let mut coplanar_front = Vec::new();
            let mut coplanar_back = Vec::new();
            plane.split_polygon(
                polygon,
                &mut coplanar_front,
                &mut coplanar_back,
                &mut front,
                &mut back,
            );
            self.polygons.append(&mut coplanar_front);
            self.polygons.append(&mut coplanar_back);
        }

        if !front.is_empty() {
            self.front
                .get_or_insert_with(Default::default)
                .build(front);
        }
        if !back.is_empty() {
            self.back.get_or_insert_with(Default::default).build(back);
        }
    }

    /// Collect every polygon in the tree: this node's, then the front
    /// subtree's, then the back subtree's.
    pub fn all_polygons(&self) -> Vec<Polygon> {
        let mut result = self.polygons.clone();
        if let Some(ref front) = self.front {
            result.extend(front.all_polygons());
        }
        if let Some(ref back) = self.back {
            result.extend(back.all_polygons());
        }
        result
    }

    /// Turn the tree into its complement solid: flip every polygon and the
    /// splitting plane, then exchange the subtrees. Involution.
    pub fn invert(&mut self) {
        for polygon in &mut self.polygons {
            polygon.flip();
        }
        if let Some(ref mut plane) = self.plane {
            plane.flip();
        }
        if let Some(ref mut front) = self.front {
            front.invert();
        }
        if let Some(ref mut back) = self.back {
            back.invert();
        }
        std::mem::swap(&mut self.front, &mut self.back);
    }

    /// Remove the parts of `polygons` inside this tree's solid.
    ///
    /// Coplanar fragments fall in with the half-space they face. Fragments
    /// reaching a missing back child are interior and are dropped; fragments
    /// reaching a missing front child are exterior and survive. Order within
    /// each side is preserved, front side first.
    pub fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        let plane = match self.plane {
            Some(plane) => plane,
            None => return polygons,
        };

        let mut front = Vec::new();
        let mut back = Vec::new();
        for polygon in &polygons {
            let mut coplanar_front = Vec::new();
            let mut coplanar_back = Vec::new();
            plane.split_polygon(
                polygon,
                &mut coplanar_front,
                &mut coplanar_back,
                &mut front,
                &mut back,
            );
            front.append(&mut coplanar_front);
            back.append(&mut coplanar_back);
        }

        let mut result = match self.front {
            Some(ref node) => node.clip_polygons(front),
            None => front,
        };
        if let Some(ref node) = self.back {
            result.extend(node.clip_polygons(back));
        }
        result
    }

    /// Clip every polygon stored in this tree against `other`, removing the
    /// parts inside `other`'s solid.
    pub fn clip_to(&mut self, other: &BspNode) {
        self.polygons = other.clip_polygons(std::mem::take(&mut self.polygons));
        if let Some(ref mut front) = self.front {
            front.clip_to(other);
        }
        if let Some(ref mut back) = self.back {
            back.clip_to(other);
        }
    }

    /// Number of polygons stored across the tree.
    pub fn polygon_count(&self) -> usize {
        let mut count = self.polygons.len();
        if let Some(ref front) = self.front {
            count += front.polygon_count();
        }
        if let Some(ref back) = self.back {
            count += back.polygon_count();
        }
        count
    }

    /// Depth of the tree.
    pub fn depth(&self) -> usize {
        let front = self.front.as_ref().map_or(0, |node| node.depth());
        let back = self.back.as_ref().map_or(0, |node| node.depth());
        1 + front.max(back)
    }
}
