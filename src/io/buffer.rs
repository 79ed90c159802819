// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshcsg Team

//! Flat float-buffer marshalling
//!
//! The interchange layout is 24 floats per triangle, three vertices of
//! (px, py, pz, nx, ny, nz, u, v). Planes are recomputed from the positions
//! on ingest; uv gains a zero third component in memory and drops it again
//! on emit. Persisted buffers are little-endian IEEE-754 binary32 behind a
//! u32 triangle count.

use crate::geometry::{Mesh, Polygon, Vertex};
use anyhow::{Context, Result};
use nalgebra::{Point3, Vector3};
use std::io::{Read, Write};
use thiserror::Error;

/// Floats per vertex in the interchange layout.
pub const FLOATS_PER_VERTEX: usize = 8;
/// Floats per triangle in the interchange layout.
pub const FLOATS_PER_TRIANGLE: usize = 3 * FLOATS_PER_VERTEX;

/// Errors from the flat-buffer boundary.
#[derive(Debug, Error)]
pub enum BufferError {
    /// Buffer length is not a whole number of 24-float triangles.
    #[error("flat buffer length {0} is not a multiple of 24 floats")]
    UnevenLength(usize),
}

/// Decode a flat float buffer into a mesh.
pub fn mesh_from_floats(data: &[f32]) -> Result<Mesh, BufferError> {
    if data.len() % FLOATS_PER_TRIANGLE != 0 {
        return Err(BufferError::UnevenLength(data.len()));
    }

    let mut polygons = Vec::with_capacity(data.len() / FLOATS_PER_TRIANGLE);
    for triangle in data.chunks_exact(FLOATS_PER_TRIANGLE) {
        let vertex = |k: usize| {
            let f = &triangle[k * FLOATS_PER_VERTEX..(k + 1) * FLOATS_PER_VERTEX];
            Vertex::new(
                Point3::new(f[0], f[1], f[2]),
                Vector3::new(f[3], f[4], f[5]),
                Vector3::new(f[6], f[7], 0.0),
            )
        };
        polygons.push(Polygon::new([vertex(0), vertex(1), vertex(2)]));
    }
    Ok(Mesh::from_polygons(polygons))
}

/// Encode a mesh into the flat float layout.
pub fn mesh_to_floats(mesh: &Mesh) -> Vec<f32> {
    let mut data = Vec::with_capacity(mesh.triangle_count() * FLOATS_PER_TRIANGLE);
    for polygon in &mesh.polygons {
        for vertex in &polygon.vertices {
            data.extend_from_slice(&[
                vertex.position.x,
                vertex.position.y,
                vertex.position.z,
                vertex.normal.x,
                vertex.normal.y,
                vertex.normal.z,
                vertex.uv.x,
                vertex.uv.y,
            ]);
        }
    }
    data
}

/// Persist a mesh as little-endian binary32 triangles behind a u32 count.
pub fn write_mesh<W: Write>(mesh: &Mesh, mut writer: W) -> Result<()> {
    let count =
        u32::try_from(mesh.triangle_count()).context("triangle count does not fit in u32")?;
    writer
        .write_all(&count.to_le_bytes())
        .context("writing triangle count")?;
    for value in mesh_to_floats(mesh) {
        writer
            .write_all(&value.to_le_bytes())
            .context("writing triangle data")?;
    }
    Ok(())
}

/// Read a mesh persisted by [`write_mesh`].
pub fn read_mesh<R: Read>(mut reader: R) -> Result<Mesh> {
    let mut header = [0u8; 4];
    reader
        .read_exact(&mut header)
        .context("reading triangle count")?;
    let count = u32::from_le_bytes(header) as usize;

    let mut data = vec![0f32; count * FLOATS_PER_TRIANGLE];
    let mut bytes = [0u8; 4];
    for value in &mut data {
        reader
            .read_exact(&mut bytes)
            .context("reading triangle data")?;
        *value = f32::from_le_bytes(bytes);
    }
    Ok(mesh_from_floats(&data)?)
}
