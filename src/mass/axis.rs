// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Per-face projection axis selection

use nalgebra::{Point2, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Coordinate axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Cyclic successor: X → Y → Z → X
    pub const fn next(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::Z,
            Self::Z => Self::X,
        }
    }
}

/// Right-handed axis permutation `(A, B, C)`
///
/// `C` is the axis most aligned with the face normal. The face is projected
/// onto the `(A, B)` plane, which maximizes the projected area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxisPermutation {
    pub a: Axis,
    pub b: Axis,
    pub c: Axis,
}

impl AxisPermutation {
    /// Permutation with the given projection axis `C`
    pub const fn with_normal_axis(c: Axis) -> Self {
        let a = c.next();
        Self { a, b: a.next(), c }
    }

    /// Choose the permutation for a face normal
    ///
    /// Ties resolve towards the later axis: `X` only wins when strictly
    /// largest, and `Y` only when strictly larger than `Z`. Returns `None`
    /// for a zero or non-finite normal.
    pub fn select(normal: &Vector3<f64>) -> Option<Self> {
        let nx = normal.x.abs();
        let ny = normal.y.abs();
        let nz = normal.z.abs();

        if !(nx.max(ny).max(nz) > 0.0) || !normal.iter().all(|n| n.is_finite()) {
            return None;
        }

        let c = if nx > ny && nx > nz {
            Axis::X
        } else if ny > nz {
            Axis::Y
        } else {
            Axis::Z
        };

        Some(Self::with_normal_axis(c))
    }

    /// Project a point onto the `(A, B)` plane
    pub fn project(&self, point: &Point3<f64>) -> Point2<f64> {
        Point2::new(point[self.a.index()], point[self.b.index()])
    }

    /// Vector components reordered as `(A, B, C)`
    pub fn permute(&self, v: &Vector3<f64>) -> Vector3<f64> {
        Vector3::new(v[self.a.index()], v[self.b.index()], v[self.c.index()])
    }
}
