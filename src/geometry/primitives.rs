// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshcsg Team

//! Closed solid generators used as boolean inputs

use super::{Mesh, Polygon, Vertex};
use nalgebra::{Point3, Vector3};
use std::f32::consts::PI;

/// Geometric primitives
pub enum Primitive {
    Cube { size: Vector3<f32>, center: bool },
    Sphere { r: f32, segments: u32 },
    Tetrahedron { size: f32 },
}

impl Primitive {
    pub fn cube(size: Vector3<f32>, center: bool) -> Self {
        Self::Cube { size, center }
    }

    pub fn sphere(r: f32, segments: u32) -> Self {
        let segments = if segments > 0 { segments } else { 32 };
        Self::Sphere { r, segments }
    }

    pub fn tetrahedron(size: f32) -> Self {
        Self::Tetrahedron { size }
    }

    pub fn to_mesh(&self) -> Mesh {
        match self {
            Self::Cube { size, center } => generate_cube_mesh(*size, *center),
            Self::Sphere { r, segments } => generate_sphere_mesh(*r, *segments),
            Self::Tetrahedron { size } => generate_tetrahedron_mesh(*size),
        }
    }
}

fn face_vertex(position: Point3<f32>, normal: Vector3<f32>) -> Vertex {
    Vertex::new(position, normal, Vector3::zeros())
}

fn generate_cube_mesh(size: Vector3<f32>, center: bool) -> Mesh {
    let (min_x, max_x) = if center {
        (-size.x / 2.0, size.x / 2.0)
    } else {
        (0.0, size.x)
    };
    let (min_y, max_y) = if center {
        (-size.y / 2.0, size.y / 2.0)
    } else {
        (0.0, size.y)
    };
    let (min_z, max_z) = if center {
        (-size.z / 2.0, size.z / 2.0)
    } else {
        (0.0, size.z)
    };

    // 8 corners of the cube
    let positions = [
        Point3::new(min_x, min_y, min_z),
        Point3::new(max_x, min_y, min_z),
        Point3::new(max_x, max_y, min_z),
        Point3::new(min_x, max_y, min_z),
        Point3::new(min_x, min_y, max_z),
        Point3::new(max_x, min_y, max_z),
        Point3::new(max_x, max_y, max_z),
        Point3::new(min_x, max_y, max_z),
    ];

    // 6 faces, two triangles each, outward windings
    let faces = [
        // Front (z+)
        ([4, 5, 6], Vector3::new(0.0, 0.0, 1.0)),
        ([4, 6, 7], Vector3::new(0.0, 0.0, 1.0)),
        // Back (z-)
        ([1, 0, 3], Vector3::new(0.0, 0.0, -1.0)),
        ([1, 3, 2], Vector3::new(0.0, 0.0, -1.0)),
        // Right (x+)
        ([5, 1, 2], Vector3::new(1.0, 0.0, 0.0)),
        ([5, 2, 6], Vector3::new(1.0, 0.0, 0.0)),
        // Left (x-)
        ([0, 4, 7], Vector3::new(-1.0, 0.0, 0.0)),
        ([0, 7, 3], Vector3::new(-1.0, 0.0, 0.0)),
        // Top (y+)
        ([7, 6, 2], Vector3::new(0.0, 1.0, 0.0)),
        ([7, 2, 3], Vector3::new(0.0, 1.0, 0.0)),
        // Bottom (y-)
        ([0, 1, 5], Vector3::new(0.0, -1.0, 0.0)),
        ([0, 5, 4], Vector3::new(0.0, -1.0, 0.0)),
    ];

    let mut polygons = Vec::with_capacity(faces.len());
    for (indices, normal) in faces {
        polygons.push(Polygon::new([
            face_vertex(positions[indices[0]], normal),
            face_vertex(positions[indices[1]], normal),
            face_vertex(positions[indices[2]], normal),
        ]));
    }
    Mesh::from_polygons(polygons)
}

fn generate_sphere_mesh(radius: f32, segments: u32) -> Mesh {
    let stacks = segments;
    let slices = segments;

    // Grid point on the sphere; the poles are pinned exactly so the rows
    // touching them collapse to single triangles instead of slivers.
    let grid = |i: u32, j: u32| -> Vertex {
        let position = if i == 0 {
            Point3::new(0.0, radius, 0.0)
        } else if i == stacks {
            Point3::new(0.0, -radius, 0.0)
        } else {
            let phi = PI * i as f32 / stacks as f32;
            let theta = 2.0 * PI * j as f32 / slices as f32;
            let ring = radius * phi.sin();
            Point3::new(ring * theta.cos(), radius * phi.cos(), ring * theta.sin())
        };
        let normal = position.coords / radius;
        let uv = Vector3::new(j as f32 / slices as f32, i as f32 / stacks as f32, 0.0);
        Vertex::new(position, normal, uv)
    };

    let mut polygons = Vec::new();
    for i in 0..stacks {
        for j in 0..slices {
            let v00 = grid(i, j);
            let v01 = grid(i, j + 1);
            let v10 = grid(i + 1, j);
            let v11 = grid(i + 1, j + 1);

            if i > 0 {
                polygons.push(Polygon::new([v00, v01, v11]));
            }
            if i < stacks - 1 {
                polygons.push(Polygon::new([v00, v11, v10]));
            }
        }
    }
    Mesh::from_polygons(polygons)
}

fn generate_tetrahedron_mesh(size: f32) -> Mesh {
    let positions = [
        Point3::new(size, size, size),
        Point3::new(size, -size, -size),
        Point3::new(-size, size, -size),
        Point3::new(-size, -size, size),
    ];
    let faces = [[0, 1, 2], [0, 2, 3], [0, 3, 1], [1, 3, 2]];

    let mut polygons = Vec::with_capacity(faces.len());
    for indices in faces {
        let a = positions[indices[0]];
        let b = positions[indices[1]];
        let c = positions[indices[2]];
        let normal = (b - a).cross(&(c - a)).normalize();
        polygons.push(Polygon::new([
            face_vertex(a, normal),
            face_vertex(b, normal),
            face_vertex(c, normal),
        ]));
    }
    Mesh::from_polygons(polygons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Sum of triangle area vectors; zero for a closed surface.
    fn area_vector(mesh: &Mesh) -> Vector3<f32> {
        mesh.polygons
            .iter()
            .map(|polygon| {
                let [a, b, c] = &polygon.vertices;
                (b.position - a.position).cross(&(c.position - a.position)) / 2.0
            })
            .sum()
    }

    /// Signed volume by the divergence theorem; positive for outward
    /// windings.
    fn signed_volume(mesh: &Mesh) -> f32 {
        mesh.polygons
            .iter()
            .map(|polygon| {
                let [a, b, c] = &polygon.vertices;
                a.position.coords.dot(&b.position.coords.cross(&c.position.coords)) / 6.0
            })
            .sum()
    }

    #[test]
    fn test_cube_is_closed_unit_volume() {
        let mesh = Primitive::cube(Vector3::new(1.0, 1.0, 1.0), false).to_mesh();
        assert_eq!(mesh.triangle_count(), 12);
        assert_relative_eq!(area_vector(&mesh).norm(), 0.0, epsilon = 1e-6);
        assert_relative_eq!(signed_volume(&mesh), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_cube_centered_bounds() {
        let mesh = Primitive::cube(Vector3::new(2.0, 2.0, 2.0), true).to_mesh();
        let bbox = mesh.bounding_box();
        assert_eq!(bbox.min, Point3::new(-1.0, -1.0, -1.0));
        assert_eq!(bbox.max, Point3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_sphere_is_closed_with_outward_windings() {
        let mesh = Primitive::sphere(1.0, 16).to_mesh();
        assert_relative_eq!(area_vector(&mesh).norm(), 0.0, epsilon = 1e-4);

        // Volume approaches 4/3 pi from below as segments grow.
        let volume = signed_volume(&mesh);
        assert!(volume > 3.9 && volume < 4.19, "volume {volume}");

        for polygon in &mesh.polygons {
            // Face normals point away from the origin.
            let centroid = (polygon.vertices[0].position.coords
                + polygon.vertices[1].position.coords
                + polygon.vertices[2].position.coords)
                / 3.0;
            assert!(polygon.plane.normal.dot(&centroid) > 0.0);
        }
    }

    #[test]
    fn test_tetrahedron_closed() {
        let mesh = Primitive::tetrahedron(1.0).to_mesh();
        assert_eq!(mesh.triangle_count(), 4);
        assert_relative_eq!(area_vector(&mesh).norm(), 0.0, epsilon = 1e-6);
        assert!(signed_volume(&mesh) > 0.0);
    }
}
