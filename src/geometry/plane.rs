// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshcsg Team

//! Oriented plane and the plane-polygon splitting primitive

use super::{Polygon, Vertex};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Tolerance for point-plane classification. Inputs far from unit magnitude
/// must be rescaled by the caller.
pub const EPSILON: f32 = 1e-5;

const COPLANAR: u8 = 0;
const FRONT: u8 = 1;
const BACK: u8 = 2;
const SPANNING: u8 = 3;

/// Oriented plane with unit normal and signed offset, n . p = w.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub normal: Vector3<f32>,
    pub w: f32,
}

impl Plane {
    pub fn new(normal: Vector3<f32>, w: f32) -> Self {
        Self { normal, w }
    }

    /// Plane through three points, right-hand rule on (a, b, c).
    ///
    /// Collinear points yield a degenerate plane with a non-finite normal;
    /// the engine does not detect this.
    pub fn from_points(a: &Point3<f32>, b: &Point3<f32>, c: &Point3<f32>) -> Self {
        let normal = (b - a).cross(&(c - a)).normalize();
        Self {
            normal,
            w: normal.dot(&a.coords),
        }
    }

    /// Signed distance from the plane; positive is the front half-space.
    pub fn signed_distance(&self, point: &Point3<f32>) -> f32 {
        self.normal.dot(&point.coords) - self.w
    }

    /// Reverse orientation: the same geometric plane with front and back
    /// half-spaces exchanged.
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    /// Split `polygon` by this plane into the four output lists.
    ///
    /// A polygon coplanar with the plane goes whole to `coplanar_front` or
    /// `coplanar_back` depending on which way it faces; a polygon wholly on
    /// one side goes whole to `front` or `back`; a spanning polygon is cut
    /// at the plane, with fresh vertices interpolated on each crossing edge,
    /// and the two fragments fan-triangulated into `front` and `back`.
    pub fn split_polygon(
        &self,
        polygon: &Polygon,
        coplanar_front: &mut Vec<Polygon>,
        coplanar_back: &mut Vec<Polygon>,
        front: &mut Vec<Polygon>,
        back: &mut Vec<Polygon>,
    ) {
        let mut polygon_type = COPLANAR;
        let mut vertex_types = [COPLANAR; 3];
        for (i, vertex) in polygon.vertices.iter().enumerate() {
            let d = self.signed_distance(&vertex.position);
            let t = if d < -EPSILON {
                BACK
            } else if d > EPSILON {
                FRONT
            } else {
                COPLANAR
            };
            polygon_type |= t;
            vertex_types[i] = t;
        }

        match polygon_type {
            COPLANAR => {
                if self.normal.dot(&polygon.plane.normal) > 0.0 {
                    coplanar_front.push(polygon.clone());
                } else {
                    coplanar_back.push(polygon.clone());
                }
            }
            FRONT => front.push(polygon.clone()),
            BACK => back.push(polygon.clone()),
            _ => {
                // Walk the edge loop, collecting the vertices of the front
                // and back fragments. A coplanar vertex belongs to both.
                let mut f: Vec<Vertex> = Vec::with_capacity(4);
                let mut b: Vec<Vertex> = Vec::with_capacity(4);
                for i in 0..3 {
                    let j = (i + 1) % 3;
                    let t1 = vertex_types[i];
                    let t2 = vertex_types[j];
                    let v1 = &polygon.vertices[i];
                    let v2 = &polygon.vertices[j];
                    if t1 != BACK {
                        f.push(*v1);
                    }
                    if t1 != FRONT {
                        b.push(*v1);
                    }
                    if (t1 | t2) == SPANNING {
                        let edge = v2.position - v1.position;
                        let t = (self.w - self.normal.dot(&v1.position.coords))
                            / self.normal.dot(&edge);
                        let crossing = v1.lerp(v2, t);
                        f.push(crossing);
                        b.push(crossing);
                    }
                }
                fan_triangulate(&f, front);
                fan_triangulate(&b, back);
            }
        }
    }
}

/// Fan-triangulate a convex vertex loop into (v0, v[i-1], v[i]) triangles,
/// each with a freshly computed supporting plane.
fn fan_triangulate(vertices: &[Vertex], out: &mut Vec<Polygon>) {
    for i in 2..vertices.len() {
        out.push(Polygon::new([vertices[0], vertices[i - 1], vertices[i]]));
    }
}
