// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Moments of a projected polygon by boundary recurrence
//!
//! Green's theorem turns each area integral over the polygon into a sum of
//! closed-form edge terms. The polygon must be listed in winding order; the
//! closing edge from the last vertex back to the first is included. A
//! counter-clockwise polygon yields a positive area.

use nalgebra::Point2;

/// Integrals of `1, a, b, a², ab, b², a³, a²b, ab², b³` over a polygon
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProjectionIntegrals {
    pub p1: f64,
    pub pa: f64,
    pub pb: f64,
    pub paa: f64,
    pub pab: f64,
    pub pbb: f64,
    pub paaa: f64,
    pub paab: f64,
    pub pabb: f64,
    pub pbbb: f64,
}

impl ProjectionIntegrals {
    pub fn compute(polygon: &[Point2<f64>]) -> Self {
        let mut p = Self::default();
        let n = polygon.len();

        for (i, v0) in polygon.iter().enumerate() {
            let v1 = &polygon[(i + 1) % n];
            let (a0, b0) = (v0.x, v0.y);
            let (a1, b1) = (v1.x, v1.y);
            let da = a1 - a0;
            let db = b1 - b0;

            let a0_2 = a0 * a0;
            let a0_3 = a0_2 * a0;
            let a0_4 = a0_3 * a0;
            let b0_2 = b0 * b0;
            let b0_3 = b0_2 * b0;
            let b0_4 = b0_3 * b0;
            let a1_2 = a1 * a1;
            let a1_3 = a1_2 * a1;
            let b1_2 = b1 * b1;
            let b1_3 = b1_2 * b1;

            let c1 = a1 + a0;
            let ca = a1 * c1 + a0_2;
            let caa = a1 * ca + a0_3;
            let caaa = a1 * caa + a0_4;
            let cb = b1 * (b1 + b0) + b0_2;
            let cbb = b1 * cb + b0_3;
            let cbbb = b1 * cbb + b0_4;
            let cab = 3.0 * a1_2 + 2.0 * a1 * a0 + a0_2;
            let kab = a1_2 + 2.0 * a1 * a0 + 3.0 * a0_2;
            let caab = a0 * cab + 4.0 * a1_3;
            let kaab = a1 * kab + 4.0 * a0_3;
            let cabb = 4.0 * b1_3 + 3.0 * b1_2 * b0 + 2.0 * b1 * b0_2 + b0_3;
            let kabb = b1_3 + 2.0 * b1_2 * b0 + 3.0 * b1 * b0_2 + 4.0 * b0_3;

            p.p1 += db * c1;
            p.pa += db * ca;
            p.paa += db * caa;
            p.paaa += db * caaa;
            p.pb += da * cb;
            p.pbb += da * cbb;
            p.pbbb += da * cbbb;
            p.pab += db * (b1 * cab + b0 * kab);
            p.paab += db * (b1 * caab + b0 * kaab);
            p.pabb += da * (a1 * cabb + a0 * kabb);
        }

        // b-family sums run along da instead of db, hence the sign flip
        p.p1 /= 2.0;
        p.pa /= 6.0;
        p.paa /= 12.0;
        p.paaa /= 20.0;
        p.pb /= -6.0;
        p.pbb /= -12.0;
        p.pbbb /= -20.0;
        p.pab /= 24.0;
        p.paab /= 60.0;
        p.pabb /= -60.0;

        p
    }
}
