// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Closedness and orientation diagnostics
//!
//! Integration assumes a watertight, consistently wound surface. These checks
//! report violations; they never modify the mesh.

use super::Polyhedron;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Edge-pairing summary of a polyhedron surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosednessReport {
    /// Number of distinct undirected edges
    pub edge_count: usize,
    /// Edges used by exactly one face
    pub boundary_edges: usize,
    /// Edges used by more than two faces
    pub non_manifold_edges: usize,
    /// Edges shared by two faces that traverse it in the same direction
    pub misoriented_edges: usize,
    /// Euler characteristic `V - E + F`
    pub euler_characteristic: i64,
}

impl ClosednessReport {
    /// Every edge is shared by exactly two faces
    pub fn is_closed(&self) -> bool {
        self.boundary_edges == 0 && self.non_manifold_edges == 0
    }

    /// Adjacent faces traverse their shared edge in opposite directions
    pub fn is_consistently_oriented(&self) -> bool {
        self.misoriented_edges == 0
    }

    /// Closed and consistently oriented
    pub fn is_valid(&self) -> bool {
        self.is_closed() && self.is_consistently_oriented()
    }
}

/// Check whether the polyhedron surface is closed and consistently wound
pub fn check_closed(poly: &Polyhedron) -> ClosednessReport {
    // (forward, backward) uses per undirected edge, keyed with the smaller index first
    let mut edges: HashMap<(usize, usize), (usize, usize)> = HashMap::new();

    for face in poly.faces() {
        let indices = face.indices();
        for (i, &v1) in indices.iter().enumerate() {
            let v2 = indices[(i + 1) % indices.len()];
            let entry = edges.entry((v1.min(v2), v1.max(v2))).or_insert((0, 0));
            if v1 < v2 {
                entry.0 += 1;
            } else {
                entry.1 += 1;
            }
        }
    }

    let mut report = ClosednessReport {
        edge_count: edges.len(),
        boundary_edges: 0,
        non_manifold_edges: 0,
        misoriented_edges: 0,
        euler_characteristic: poly.vertex_count() as i64 - edges.len() as i64
            + poly.face_count() as i64,
    };

    for &(forward, backward) in edges.values() {
        match forward + backward {
            1 => report.boundary_edges += 1,
            2 if forward != 1 => report.misoriented_edges += 1,
            2 => {}
            _ => report.non_manifold_edges += 1,
        }
    }

    report
}
