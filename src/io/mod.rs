// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshcsg Team

//! I/O module - flat-buffer marshalling and mesh export

mod buffer;
mod stl;

pub use buffer::{
    mesh_from_floats, mesh_to_floats, read_mesh, write_mesh, BufferError, FLOATS_PER_TRIANGLE,
    FLOATS_PER_VERTEX,
};
pub use stl::export_stl;
