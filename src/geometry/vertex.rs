// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshcsg Team

//! Vertex representation with attribute interpolation

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Vertex with position, normal, and texture coordinate.
///
/// The texture coordinate carries a third component so that splitting can
/// interpolate every attribute through the same code path; uv.z is stored
/// but has no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub position: Point3<f32>,
    pub normal: Vector3<f32>,
    pub uv: Vector3<f32>,
}

impl Vertex {
    pub fn new(position: Point3<f32>, normal: Vector3<f32>, uv: Vector3<f32>) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }

    /// Negate the normal. Called when the owning polygon reverses orientation.
    pub fn flip(&mut self) {
        self.normal = -self.normal;
    }

    /// Interpolate position, normal, and uv component-wise with the same t.
    ///
    /// The normal is not renormalized; callers that need unit normals
    /// renormalize downstream.
    pub fn lerp(&self, other: &Vertex, t: f32) -> Vertex {
        Vertex {
            position: Point3::from(self.position.coords.lerp(&other.position.coords, t)),
            normal: self.normal.lerp(&other.normal, t),
            uv: self.uv.lerp(&other.uv, t),
        }
    }
}
