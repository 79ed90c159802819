// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshcsg Team

//! Triangle polygon with a cached supporting plane

use super::{Plane, Vertex};
use serde::{Deserialize, Serialize};

/// Triangle with a cached supporting plane.
///
/// The plane follows the right-hand rule on (v0, v1, v2) and stays
/// consistent with the winding through flips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub vertices: [Vertex; 3],
    pub plane: Plane,
}

impl Polygon {
    /// Build a polygon, computing the supporting plane from the positions.
    pub fn new(vertices: [Vertex; 3]) -> Self {
        let plane = Plane::from_points(
            &vertices[0].position,
            &vertices[1].position,
            &vertices[2].position,
        );
        Self { vertices, plane }
    }

    /// Reverse orientation: swap the winding, negate every vertex normal,
    /// and flip the cached plane. The geometry is unchanged; which side is
    /// solid is not.
    pub fn flip(&mut self) {
        self.vertices.swap(0, 2);
        for vertex in &mut self.vertices {
            vertex.flip();
        }
        self.plane.flip();
    }
}
