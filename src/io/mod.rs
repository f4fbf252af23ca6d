// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - loading and saving polyhedra

mod exporter;
mod importer;
mod parser;

pub use exporter::{format_polyhedron, write_polyhedron};
pub use importer::{import_mesh_file, import_stl, load_polyhedron};
pub use parser::parse_polyhedron;

use crate::error::MassResult;
use crate::geometry::Polyhedron;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Raw vertex and face lists as read from a file, not yet validated
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshData {
    pub vertices: Vec<Point3<f64>>,
    pub faces: Vec<Vec<usize>>,
}

impl MeshData {
    /// Validate and build the polyhedron
    pub fn into_polyhedron(self, tolerance: f64) -> MassResult<Polyhedron> {
        Polyhedron::with_tolerance(self.vertices, self.faces, tolerance)
    }
}

impl From<&Polyhedron> for MeshData {
    fn from(poly: &Polyhedron) -> Self {
        Self {
            vertices: poly.vertices().to_vec(),
            faces: poly.face_indices(),
        }
    }
}
