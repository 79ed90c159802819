// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshcsg Team

//! Parallel execution of independent boolean jobs using rayon
//!
//! Each boolean call owns its two inputs and its output; nothing is shared
//! between jobs, so fanning them out over the thread pool is safe.

use super::{BooleanOp, Mesh};
use rayon::prelude::*;

/// A single boolean job: two operand meshes and the operation to apply.
pub type BooleanJob = (Mesh, Mesh, BooleanOp);

/// Run independent boolean jobs across the rayon pool, preserving job
/// order in the results.
pub fn boolean_batch(jobs: Vec<BooleanJob>) -> Vec<Mesh> {
    jobs.into_par_iter()
        .map(|(a, b, op)| a.boolean_operation(&b, op))
        .collect()
}

/// Union every mesh in the batch with a parallel reduction.
pub fn union_all(meshes: Vec<Mesh>) -> Mesh {
    meshes.into_par_iter().reduce(Mesh::new, |a, b| {
        if a.is_empty() {
            b
        } else if b.is_empty() {
            a
        } else {
            a.union(&b)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Primitive;
    use nalgebra::Vector3;

    fn cube_at(x: f32) -> Mesh {
        let mut mesh = Primitive::cube(Vector3::new(1.0, 1.0, 1.0), false).to_mesh();
        mesh.translate(Vector3::new(x, 0.0, 0.0));
        mesh
    }

    #[test]
    fn test_boolean_batch_matches_serial() {
        let jobs: Vec<BooleanJob> = vec![
            (cube_at(0.0), cube_at(10.0), BooleanOp::Union),
            (cube_at(0.0), cube_at(0.0), BooleanOp::Difference),
            (cube_at(0.0), cube_at(0.5), BooleanOp::Intersection),
        ];
        let serial: Vec<Mesh> = jobs
            .iter()
            .map(|(a, b, op)| a.boolean_operation(b, *op))
            .collect();

        let parallel = boolean_batch(jobs);
        assert_eq!(parallel.len(), serial.len());
        for (p, s) in parallel.iter().zip(serial.iter()) {
            assert_eq!(p.triangle_count(), s.triangle_count());
        }
    }

    #[test]
    fn test_union_all_disjoint() {
        let result = union_all(vec![cube_at(0.0), cube_at(10.0), cube_at(20.0)]);
        assert_eq!(result.triangle_count(), 36);
    }

    #[test]
    fn test_union_all_empty_batch() {
        assert!(union_all(Vec::new()).is_empty());
    }
}
