// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Mesh file importers

use super::MeshData;
use crate::geometry::{Polyhedron, DEGENERATE_TOLERANCE};
use anyhow::{Context, Result};
use nalgebra::Point3;
use std::fs::{self, File};
use std::path::Path;

/// Import a mesh file, choosing the reader by extension
///
/// `.stl` files (binary or ASCII) are read with `stl_io`; anything else is
/// treated as the plain-text polyhedron format.
pub fn import_mesh_file(path: &str) -> Result<MeshData> {
    let is_stl = Path::new(path)
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("stl"))
        .unwrap_or(false);

    if is_stl {
        import_stl(path)
    } else {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read polyhedron file: {}", path))?;
        super::parse_polyhedron(&source)
            .with_context(|| format!("Failed to parse polyhedron file: {}", path))
    }
}

/// Import an STL file as a triangle mesh
pub fn import_stl(path: &str) -> Result<MeshData> {
    let mut file = File::open(path).with_context(|| format!("Failed to open STL file: {}", path))?;
    let mesh = stl_io::read_stl(&mut file).with_context(|| format!("Failed to read STL file: {}", path))?;

    let vertices = mesh
        .vertices
        .iter()
        .map(|v| Point3::new(v[0] as f64, v[1] as f64, v[2] as f64))
        .collect();
    let faces = mesh.faces.iter().map(|f| f.vertices.to_vec()).collect();

    Ok(MeshData { vertices, faces })
}

/// Import a mesh file and build a polyhedron with the default tolerance
pub fn load_polyhedron(path: &str) -> Result<Polyhedron> {
    let data = import_mesh_file(path)?;
    let poly = data
        .into_polyhedron(DEGENERATE_TOLERANCE)
        .with_context(|| format!("Invalid polyhedron in {}", path))?;
    Ok(poly)
}
