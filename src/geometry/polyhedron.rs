// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Polyhedron representation: immutable vertices and planar polygonal faces

use crate::error::{MassError, MassResult};
use nalgebra::{Point3, Vector3};

/// Relative tolerance below which a face normal counts as zero.
///
/// Compared against `|e1 × e2| / (|e1| |e2|)`, i.e. the sine of the angle at
/// the second vertex, so the test does not depend on the mesh scale.
pub const DEGENERATE_TOLERANCE: f64 = 1e-12;

/// Planar polygonal face with its outward plane `n·x + w = 0`
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    indices: Vec<usize>,
    normal: Vector3<f64>,
    offset: f64,
}

impl Face {
    /// Vertex indices in winding order
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Unit normal, derived from the first three vertices
    pub fn normal(&self) -> &Vector3<f64> {
        &self.normal
    }

    /// Plane offset `w`
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Number of vertices on the face boundary, never fewer than three
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.indices.len()
    }
}

/// Closed polyhedral solid
///
/// Faces must be wound counter-clockwise when seen from outside. Neither
/// closedness nor consistent winding is verified here; see
/// [`check_closed`](super::check_closed) for a diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyhedron {
    vertices: Vec<Point3<f64>>,
    faces: Vec<Face>,
    tolerance: f64,
}

impl Polyhedron {
    /// Build a polyhedron from vertices and per-face index lists
    pub fn new(vertices: Vec<Point3<f64>>, faces: Vec<Vec<usize>>) -> MassResult<Self> {
        Self::with_tolerance(vertices, faces, DEGENERATE_TOLERANCE)
    }

    /// Build a polyhedron with a custom degenerate-normal tolerance
    pub fn with_tolerance(
        vertices: Vec<Point3<f64>>,
        faces: Vec<Vec<usize>>,
        tolerance: f64,
    ) -> MassResult<Self> {
        if let Some(vertex) = vertices
            .iter()
            .position(|p| !p.coords.iter().all(|c| c.is_finite()))
        {
            return Err(MassError::NonFiniteVertex { vertex });
        }

        let faces = faces
            .into_iter()
            .enumerate()
            .map(|(face, indices)| build_face(face, &vertices, indices, tolerance))
            .collect::<MassResult<Vec<_>>>()?;

        Ok(Self {
            vertices,
            faces,
            tolerance,
        })
    }

    /// Build a polyhedron from triangles
    pub fn from_triangles(vertices: Vec<Point3<f64>>, triangles: &[[usize; 3]]) -> MassResult<Self> {
        let faces = triangles.iter().map(|t| t.to_vec()).collect();
        Self::new(vertices, faces)
    }

    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get face count
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Tolerance the faces were validated against
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Vertex positions of a face in winding order
    pub fn face_vertices<'a>(&'a self, face: &'a Face) -> impl Iterator<Item = &'a Point3<f64>> + 'a {
        face.indices.iter().map(move |&i| &self.vertices[i])
    }

    /// Per-face index lists, cloned
    pub fn face_indices(&self) -> Vec<Vec<usize>> {
        self.faces.iter().map(|f| f.indices.clone()).collect()
    }
}

fn build_face(
    face: usize,
    vertices: &[Point3<f64>],
    indices: Vec<usize>,
    tolerance: f64,
) -> MassResult<Face> {
    if indices.len() < 3 {
        return Err(MassError::TooFewVertices {
            face,
            count: indices.len(),
        });
    }

    if let Some(&index) = indices.iter().find(|&&i| i >= vertices.len()) {
        return Err(MassError::VertexOutOfRange {
            face,
            index,
            vertex_count: vertices.len(),
        });
    }

    let p0 = &vertices[indices[0]];
    let p1 = &vertices[indices[1]];
    let p2 = &vertices[indices[2]];

    let e1 = p1 - p0;
    let e2 = p2 - p1;
    let cross = e1.cross(&e2);
    let len = cross.norm();

    // Written as a negated comparison so a NaN length is rejected too
    if !(len > tolerance * e1.norm() * e2.norm()) {
        return Err(MassError::DegenerateFace { face });
    }

    let normal = cross / len;
    let offset = -normal.dot(&p0.coords);

    Ok(Face {
        indices,
        normal,
        offset,
    })
}
