// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Writer for the plain-text polyhedron format

use crate::geometry::Polyhedron;
use anyhow::{Context, Result};
use std::fmt::Write as _;

/// Format a polyhedron in the plain-text layout read by [`parse_polyhedron`](super::parse_polyhedron)
pub fn format_polyhedron(poly: &Polyhedron) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "{}", poly.vertex_count());
    for v in poly.vertices() {
        let _ = writeln!(out, "{:?} {:?} {:?}", v.x, v.y, v.z);
    }

    let _ = writeln!(out, "{}", poly.face_count());
    for face in poly.faces() {
        let _ = write!(out, "{}", face.len());
        for index in face.indices() {
            let _ = write!(out, " {}", index);
        }
        out.push('\n');
    }

    out
}

/// Export polyhedron to the plain-text format
pub fn write_polyhedron(poly: &Polyhedron, path: &str) -> Result<()> {
    std::fs::write(path, format_polyhedron(poly))
        .with_context(|| format!("Failed to write polyhedron file: {}", path))
}
