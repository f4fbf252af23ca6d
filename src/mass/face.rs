// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Surface integrals over a planar face
//!
//! On the face plane `c = -(n_A a + n_B b + w) / n_C`, so every surface
//! integral reduces to a polynomial in the projection integrals scaled by
//! powers of `1 / n_C`.

use super::{AxisPermutation, ProjectionIntegrals};
use nalgebra::Vector3;

/// Smallest dominant normal component accepted by the face transform.
///
/// Axis selection puts `|n_C| ≥ 1/√3` for any unit normal, so anything near
/// this bound means the normal was not unit length to begin with.
pub const MIN_DOMINANT_COMPONENT: f64 = 1e-8;

/// Surface integrals of the 12 monomials needed for volume moments
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FaceIntegrals {
    pub fa: f64,
    pub fb: f64,
    pub fc: f64,
    pub faa: f64,
    pub fbb: f64,
    pub fcc: f64,
    pub faaa: f64,
    pub fbbb: f64,
    pub fccc: f64,
    pub faab: f64,
    pub fbbc: f64,
    pub fcca: f64,
}

impl FaceIntegrals {
    /// Lift projection integrals onto the face plane `n·x + w = 0`
    ///
    /// Returns `None` when the dominant component `n_C` vanishes.
    pub fn compute(
        p: &ProjectionIntegrals,
        axes: AxisPermutation,
        normal: &Vector3<f64>,
        w: f64,
    ) -> Option<Self> {
        let n = axes.permute(normal);
        let (na, nb, nc) = (n.x, n.y, n.z);

        if !(nc.abs() >= MIN_DOMINANT_COMPONENT) {
            return None;
        }

        let k1 = 1.0 / nc;
        let k2 = k1 * k1;
        let k3 = k2 * k1;
        let k4 = k3 * k1;

        let na2 = na * na;
        let nb2 = nb * nb;

        let fa = k1 * p.pa;
        let fb = k1 * p.pb;
        let fc = -k2 * (na * p.pa + nb * p.pb + w * p.p1);

        let faa = k1 * p.paa;
        let fbb = k1 * p.pbb;
        let fcc = k3
            * (na2 * p.paa + 2.0 * na * nb * p.pab + nb2 * p.pbb
                + w * (2.0 * (na * p.pa + nb * p.pb) + w * p.p1));

        let faaa = k1 * p.paaa;
        let fbbb = k1 * p.pbbb;
        let fccc = -k4
            * (na2 * na * p.paaa
                + 3.0 * na2 * nb * p.paab
                + 3.0 * na * nb2 * p.pabb
                + nb2 * nb * p.pbbb
                + 3.0 * w * (na2 * p.paa + 2.0 * na * nb * p.pab + nb2 * p.pbb)
                + w * w * (3.0 * (na * p.pa + nb * p.pb) + w * p.p1));

        let faab = k1 * p.paab;
        let fbbc = -k2 * (na * p.pabb + nb * p.pbbb + w * p.pbb);
        let fcca = k3
            * (na2 * p.paaa + 2.0 * na * nb * p.paab + nb2 * p.pabb
                + w * (2.0 * (na * p.paa + nb * p.pab) + w * p.pa));

        Some(Self {
            fa,
            fb,
            fc,
            faa,
            fbb,
            fcc,
            faaa,
            fbbb,
            fccc,
            faab,
            fbbc,
            fcca,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mass::Axis;
    use approx::assert_relative_eq;
    use nalgebra::Point2;

    fn unit_square_integrals() -> ProjectionIntegrals {
        ProjectionIntegrals::compute(&[
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ])
    }

    #[test]
    fn test_face_parallel_to_projection_plane() {
        // Unit square lifted to z = 2: n = +z, w = -2
        let axes = AxisPermutation::with_normal_axis(Axis::Z);
        let f = FaceIntegrals::compute(
            &unit_square_integrals(),
            axes,
            &Vector3::new(0.0, 0.0, 1.0),
            -2.0,
        )
        .unwrap();

        assert_relative_eq!(f.fa, 0.5, epsilon = 1e-12);
        assert_relative_eq!(f.fb, 0.5, epsilon = 1e-12);
        assert_relative_eq!(f.fc, 2.0, epsilon = 1e-12);
        assert_relative_eq!(f.fcc, 4.0, epsilon = 1e-12);
        assert_relative_eq!(f.fccc, 8.0, epsilon = 1e-12);
        // ∫a²b = 1/6, ∫b²c = 2/3, ∫c²a = 4/2
        assert_relative_eq!(f.faab, 1.0 / 6.0, epsilon = 1e-12);
        assert_relative_eq!(f.fbbc, 2.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(f.fcca, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_tilted_face_scales_with_secant() {
        // Plane c = a, so n = (-1, 0, 1)/√2 and w = 0. The projected unit
        // square lifts to a face of area √2.
        let s = std::f64::consts::FRAC_1_SQRT_2;
        let axes = AxisPermutation::with_normal_axis(Axis::Z);
        let f = FaceIntegrals::compute(
            &unit_square_integrals(),
            axes,
            &Vector3::new(-s, 0.0, s),
            0.0,
        )
        .unwrap();

        let sec = std::f64::consts::SQRT_2;
        assert_relative_eq!(f.fa, sec * 0.5, epsilon = 1e-12);
        // On the plane c = a, so ∫c = ∫a and ∫c² = ∫a²
        assert_relative_eq!(f.fc, f.fa, epsilon = 1e-12);
        assert_relative_eq!(f.fcc, f.faa, epsilon = 1e-12);
        assert_relative_eq!(f.fccc, f.faaa, epsilon = 1e-12);
    }

    #[test]
    fn test_vanishing_dominant_component_rejected() {
        let axes = AxisPermutation::with_normal_axis(Axis::Z);
        let result = FaceIntegrals::compute(
            &unit_square_integrals(),
            axes,
            &Vector3::new(1.0, 0.0, 0.0),
            0.0,
        );
        assert!(result.is_none());
    }
}
