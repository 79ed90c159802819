// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshcsg Team

//! Boolean operations over meshes via BSP tree clipping
//!
//! Each operation builds a fresh tree per input, runs a fixed sequence of
//! clip/invert/build steps, and enumerates the first tree. The sequences
//! are the standard CSG-on-BSP identities; reordering them changes results.

use super::{BspNode, Mesh};
use serde::{Deserialize, Serialize};

/// Boolean operation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BooleanOp {
    Union,
    Difference,
    Intersection,
}

/// Dispatch a binary boolean operation.
pub fn boolean_operation(a: &Mesh, b: &Mesh, op: BooleanOp) -> Mesh {
    match op {
        BooleanOp::Union => union(a, b),
        BooleanOp::Difference => difference(a, b),
        BooleanOp::Intersection => intersection(a, b),
    }
}

/// A ∪ B: removes the parts of each surface inside the other, then merges
/// b's remaining surface into a.
pub fn union(a: &Mesh, b: &Mesh) -> Mesh {
    let mut a = BspNode::from_polygons(a.polygons.clone());
    let mut b = BspNode::from_polygons(b.polygons.clone());
    a.clip_to(&b);
    b.clip_to(&a);
    b.invert();
    b.clip_to(&a);
    b.invert();
    a.build(b.all_polygons());
    Mesh::from_polygons(a.all_polygons())
}

/// A − B: treats a as its complement, merges as for union, reinverts.
pub fn difference(a: &Mesh, b: &Mesh) -> Mesh {
    let mut a = BspNode::from_polygons(a.polygons.clone());
    let mut b = BspNode::from_polygons(b.polygons.clone());
    a.invert();
    a.clip_to(&b);
    b.clip_to(&a);
    b.invert();
    b.clip_to(&a);
    b.invert();
    a.build(b.all_polygons());
    a.invert();
    Mesh::from_polygons(a.all_polygons())
}

/// A ∩ B.
pub fn intersection(a: &Mesh, b: &Mesh) -> Mesh {
    let mut a = BspNode::from_polygons(a.polygons.clone());
    let mut b = BspNode::from_polygons(b.polygons.clone());
    a.invert();
    b.clip_to(&a);
    b.invert();
    a.clip_to(&b);
    b.clip_to(&a);
    a.build(b.all_polygons());
    a.invert();
    Mesh::from_polygons(a.all_polygons())
}

/// Complement of A: every face winding reversed, every normal negated.
pub fn inverse(a: &Mesh) -> Mesh {
    let mut a = BspNode::from_polygons(a.polygons.clone());
    a.invert();
    Mesh::from_polygons(a.all_polygons())
}
