// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshcsg Team

//! Shared helpers for the integration tests

#![allow(dead_code)]

use meshcsg::{Mesh, Primitive};
use nalgebra::Vector3;

/// Unit cube with its min corner at the origin.
pub fn unit_cube() -> Mesh {
    Primitive::cube(Vector3::new(1.0, 1.0, 1.0), false).to_mesh()
}

/// Unit cube translated to the given min corner.
pub fn cube_at(x: f32, y: f32, z: f32) -> Mesh {
    let mut mesh = unit_cube();
    mesh.translate(Vector3::new(x, y, z));
    mesh
}

/// Signed volume by the divergence theorem. Positive for outward windings,
/// negative for an inverted (complement) surface.
pub fn signed_volume(mesh: &Mesh) -> f32 {
    mesh.polygons
        .iter()
        .map(|polygon| {
            let [a, b, c] = &polygon.vertices;
            a.position
                .coords
                .dot(&b.position.coords.cross(&c.position.coords))
                / 6.0
        })
        .sum()
}

/// Sum of triangle area vectors. Zero for a closed surface, whatever its
/// triangulation.
pub fn area_vector(mesh: &Mesh) -> Vector3<f32> {
    mesh.polygons
        .iter()
        .map(|polygon| {
            let [a, b, c] = &polygon.vertices;
            (b.position - a.position).cross(&(c.position - a.position)) / 2.0
        })
        .sum()
}

/// Area of one triangle.
pub fn triangle_area(polygon: &meshcsg::Polygon) -> f32 {
    let [a, b, c] = &polygon.vertices;
    (b.position - a.position)
        .cross(&(c.position - a.position))
        .norm()
        / 2.0
}
