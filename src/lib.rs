// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshcsg Team

//! Meshcsg
//!
//! Boolean combinations of closed triangle meshes - union, difference,
//! intersection, and inversion - computed on BSP trees, with a flat
//! float-buffer interchange boundary.
//!
//! Classification is tolerance-based (epsilon 1e-5); inputs should be
//! closed, manifold, and near unit magnitude. Open or self-intersecting
//! inputs are accepted best-effort and produce undefined geometry.

pub mod geometry;
pub mod io;

pub use geometry::{
    boolean_batch, boolean_operation, difference, intersection, inverse, union, union_all,
    BooleanOp, BoundingBox, BspNode, Mesh, Plane, Polygon, Primitive, Vertex, EPSILON,
};
pub use io::{export_stl, mesh_from_floats, mesh_to_floats, read_mesh, write_mesh};

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    #[test]
    fn test_buffer_in_boolean_out() {
        let a = Primitive::cube(Vector3::new(1.0, 1.0, 1.0), false).to_mesh();
        let mut b = a.clone();
        b.translate(Vector3::new(10.0, 0.0, 0.0));

        let a = mesh_from_floats(&mesh_to_floats(&a)).unwrap();
        let b = mesh_from_floats(&mesh_to_floats(&b)).unwrap();

        let result = union(&a, &b);
        assert_eq!(mesh_to_floats(&result).len(), 24 * io::FLOATS_PER_TRIANGLE);
    }
}
