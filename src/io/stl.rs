// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshcsg Team

//! Binary STL export

use crate::geometry::Mesh;
use anyhow::{Context, Result};
use std::io::Write;

/// Write a mesh as binary STL, one facet per triangle. Facet normals come
/// from the cached supporting planes.
pub fn export_stl<W: Write>(mesh: &Mesh, writer: &mut W) -> Result<()> {
    let triangles: Vec<stl_io::Triangle> = mesh
        .polygons
        .iter()
        .map(|polygon| stl_io::Triangle {
            normal: stl_io::Normal::new(polygon.plane.normal.into()),
            vertices: [
                stl_io::Vertex::new(polygon.vertices[0].position.coords.into()),
                stl_io::Vertex::new(polygon.vertices[1].position.coords.into()),
                stl_io::Vertex::new(polygon.vertices[2].position.coords.into()),
            ],
        })
        .collect();

    stl_io::write_stl(writer, triangles.iter()).context("writing binary STL")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Primitive;
    use nalgebra::Vector3;

    #[test]
    fn test_export_stl_writes_all_facets() {
        let mesh = Primitive::cube(Vector3::new(1.0, 1.0, 1.0), false).to_mesh();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        export_stl(&mesh, &mut file).unwrap();
        file.flush().unwrap();

        // Binary STL: 80-byte header, u32 facet count, 50 bytes per facet.
        let bytes = std::fs::read(file.path()).unwrap();
        assert_eq!(bytes.len(), 80 + 4 + 50 * mesh.triangle_count());
        let count = u32::from_le_bytes([bytes[80], bytes[81], bytes[82], bytes[83]]);
        assert_eq!(count as usize, mesh.triangle_count());
    }
}
