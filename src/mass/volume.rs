// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Volume integrals accumulated from boundary faces
//!
//! By the divergence theorem each volume integral is a sum over faces of a
//! normal component times a face integral. [`VolumeAccumulator`] holds the
//! raw sums during the fold; [`VolumeAccumulator::finish`] applies the
//! divergence-theorem divisors once and yields [`VolumeIntegrals`].

use super::{Axis, AxisPermutation, FaceIntegrals, ProjectionIntegrals};
use crate::error::{MassError, MassResult};
use crate::geometry::{Face, Polyhedron};
use nalgebra::{Point2, Vector3};
use serde::{Deserialize, Serialize};
use std::ops::Add;
use tracing::debug;

/// Running face sums for one computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeAccumulator {
    t0: f64,
    t1: Vector3<f64>,
    t2: Vector3<f64>,
    tp: Vector3<f64>,
    faces: usize,
}

impl VolumeAccumulator {
    pub fn new() -> Self {
        Self {
            t0: 0.0,
            t1: Vector3::zeros(),
            t2: Vector3::zeros(),
            tp: Vector3::zeros(),
            faces: 0,
        }
    }

    /// Number of faces folded in so far
    pub fn face_count(&self) -> usize {
        self.faces
    }

    /// Fold one face's integrals into the running sums
    pub fn add_face(&mut self, axes: AxisPermutation, normal: &Vector3<f64>, f: &FaceIntegrals) {
        let (a, b, c) = (axes.a.index(), axes.b.index(), axes.c.index());

        let x_integral = if axes.a == Axis::X {
            f.fa
        } else if axes.b == Axis::X {
            f.fb
        } else {
            f.fc
        };
        self.t0 += normal.x * x_integral;

        self.t1[a] += normal[a] * f.faa;
        self.t1[b] += normal[b] * f.fbb;
        self.t1[c] += normal[c] * f.fcc;

        self.t2[a] += normal[a] * f.faaa;
        self.t2[b] += normal[b] * f.fbbb;
        self.t2[c] += normal[c] * f.fccc;

        self.tp[a] += normal[a] * f.faab;
        self.tp[b] += normal[b] * f.fbbc;
        self.tp[c] += normal[c] * f.fcca;

        self.faces += 1;
    }

    /// Apply the divisors and stop accumulating
    pub fn finish(self) -> VolumeIntegrals {
        VolumeIntegrals {
            t0: self.t0,
            t1: self.t1 / 2.0,
            t2: self.t2 / 3.0,
            tp: self.tp / 2.0,
        }
    }
}

impl Default for VolumeAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Merge partial sums over disjoint face sets
impl Add for VolumeAccumulator {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            t0: self.t0 + other.t0,
            t1: self.t1 + other.t1,
            t2: self.t2 + other.t2,
            tp: self.tp + other.tp,
            faces: self.faces + other.faces,
        }
    }
}

/// Volume integrals of a closed polyhedron
///
/// - `t0` = ∫ 1 dV (signed volume)
/// - `t1` = (∫x, ∫y, ∫z)
/// - `t2` = (∫x², ∫y², ∫z²)
/// - `tp` = (∫xy, ∫yz, ∫zx)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeIntegrals {
    pub t0: f64,
    pub t1: Vector3<f64>,
    pub t2: Vector3<f64>,
    pub tp: Vector3<f64>,
}

impl VolumeIntegrals {
    /// Integrate over every face of the polyhedron
    pub fn compute(poly: &Polyhedron) -> MassResult<Self> {
        let accumulator = poly.faces().iter().enumerate().try_fold(
            VolumeAccumulator::new(),
            |mut acc, (index, face)| {
                let (axes, integrals) = integrate_face(poly, index, face)?;
                acc.add_face(axes, face.normal(), &integrals);
                Ok::<_, MassError>(acc)
            },
        )?;

        let integrals = accumulator.finish();
        debug!(
            faces = accumulator.face_count(),
            volume = integrals.t0,
            "integrated polyhedron"
        );
        Ok(integrals)
    }

    /// Signed volume; negative when the faces wind inward
    pub fn volume(&self) -> f64 {
        self.t0
    }
}

/// Axis permutation and surface integrals of one face
pub fn integrate_face(
    poly: &Polyhedron,
    index: usize,
    face: &Face,
) -> MassResult<(AxisPermutation, FaceIntegrals)> {
    let degenerate = || MassError::DegenerateFace { face: index };

    let axes = AxisPermutation::select(face.normal()).ok_or_else(degenerate)?;
    let polygon: Vec<Point2<f64>> = poly.face_vertices(face).map(|p| axes.project(p)).collect();
    let projection = ProjectionIntegrals::compute(&polygon);
    let integrals = FaceIntegrals::compute(&projection, axes, face.normal(), face.offset())
        .ok_or_else(degenerate)?;

    Ok((axes, integrals))
}
