// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshcsg Team

//! Polygon-soup mesh and boolean dispatch

use super::{csg, BooleanOp, BoundingBox, Polygon};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Triangular mesh as a flat polygon list.
///
/// Polygons are stored by value; boolean operations copy them into BSP
/// trees and never share storage with the caller's mesh.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub polygons: Vec<Polygon>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            polygons: Vec::new(),
        }
    }

    pub fn from_polygons(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    pub fn triangle_count(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Compute the bounding box over all vertices.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_polygons(&self.polygons)
    }

    /// Translate every vertex. The cached planes shift with the mesh; the
    /// normals do not change.
    pub fn translate(&mut self, offset: Vector3<f32>) {
        for polygon in &mut self.polygons {
            for vertex in &mut polygon.vertices {
                vertex.position += offset;
            }
            polygon.plane.w += polygon.plane.normal.dot(&offset);
        }
    }

    /// Boolean combination with another mesh.
    pub fn boolean_operation(&self, other: &Mesh, op: BooleanOp) -> Mesh {
        csg::boolean_operation(self, other, op)
    }

    /// A ∪ B.
    pub fn union(&self, other: &Mesh) -> Mesh {
        csg::union(self, other)
    }

    /// A − B.
    pub fn difference(&self, other: &Mesh) -> Mesh {
        csg::difference(self, other)
    }

    /// A ∩ B.
    pub fn intersection(&self, other: &Mesh) -> Mesh {
        csg::intersection(self, other)
    }

    /// Complement of this mesh's solid.
    pub fn inverse(&self) -> Mesh {
        csg::inverse(self)
    }
}
