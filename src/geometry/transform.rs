// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Rigid and scaling transforms producing new polyhedra

use super::Polyhedron;
use crate::error::MassResult;
use nalgebra::{Matrix4, Point3, Vector3};

impl Polyhedron {
    /// Apply an affine matrix to every vertex and rebuild the faces
    ///
    /// A matrix with negative determinant mirrors the solid and therefore
    /// flips the winding; callers combine it with [`Polyhedron::reversed`].
    pub fn transformed(&self, matrix: &Matrix4<f64>) -> MassResult<Polyhedron> {
        let vertices = self
            .vertices()
            .iter()
            .map(|p| matrix.transform_point(p))
            .collect();
        Polyhedron::with_tolerance(vertices, self.face_indices(), self.tolerance())
    }

    /// Uniformly scale every vertex about the origin
    pub fn scaled(&self, factor: f64) -> MassResult<Polyhedron> {
        let vertices = self.vertices().iter().map(|p| Point3::from(p.coords * factor)).collect();
        Polyhedron::with_tolerance(vertices, self.face_indices(), self.tolerance())
    }

    /// Translate every vertex by `offset`
    pub fn translated(&self, offset: &Vector3<f64>) -> MassResult<Polyhedron> {
        let vertices = self.vertices().iter().map(|p| p + offset).collect();
        Polyhedron::with_tolerance(vertices, self.face_indices(), self.tolerance())
    }

    /// Reverse the winding of every face
    pub fn reversed(&self) -> MassResult<Polyhedron> {
        let faces = self
            .faces()
            .iter()
            .map(|f| f.indices().iter().rev().copied().collect())
            .collect();
        Polyhedron::with_tolerance(self.vertices().to_vec(), faces, self.tolerance())
    }
}
