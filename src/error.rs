// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for mesh construction and mass-property integration

use thiserror::Error;

/// Result type alias for mass-property operations.
pub type MassResult<T> = Result<T, MassError>;

/// Errors raised while building a polyhedron or integrating over it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MassError {
    /// Face normal has (near) zero magnitude: collinear or duplicate vertices.
    #[error("face {face} is degenerate: its normal has near-zero magnitude")]
    DegenerateFace { face: usize },

    /// Face lists fewer than three vertex indices.
    #[error("face {face} has {count} vertices, at least 3 are required")]
    TooFewVertices { face: usize, count: usize },

    /// Face references a vertex past the end of the vertex list.
    #[error("face {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    VertexOutOfRange {
        face: usize,
        index: usize,
        vertex_count: usize,
    },

    /// Vertex coordinate is NaN or infinite.
    #[error("vertex {vertex} has a non-finite coordinate")]
    NonFiniteVertex { vertex: usize },

    /// Integrated volume is negative, so the face normals point inward.
    #[error("integrated volume {volume} is negative; face winding points inward")]
    NegativeVolume { volume: f64 },

    /// Integrated volume is zero; the center of mass is undefined.
    #[error("integrated volume is zero; the mesh encloses no space")]
    ZeroVolume,

    /// Mass or density is not a positive finite number.
    #[error("invalid mass or density: {0}")]
    InvalidMass(String),
}

impl MassError {
    /// Create an invalid mass error.
    pub fn invalid_mass(details: impl Into<String>) -> Self {
        Self::InvalidMass(details.into())
    }
}
