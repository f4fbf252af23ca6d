// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Volume, center of mass and inertia tensor from volume integrals

use super::VolumeIntegrals;
use crate::error::{MassError, MassResult};
use crate::geometry::Polyhedron;
use nalgebra::{Matrix3, Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Relative zero-volume tolerance, scaled by the cube of the bounding-box diagonal.
pub const ZERO_VOLUME_TOLERANCE: f64 = 1e-12;

/// How much material the solid carries
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MassSpec {
    /// Total mass; density follows from the volume
    Mass(f64),
    /// Uniform density; mass follows from the volume
    Density(f64),
}

impl MassSpec {
    fn validate(self) -> MassResult<Self> {
        let (name, value) = match self {
            Self::Mass(m) => ("mass", m),
            Self::Density(d) => ("density", d),
        };
        if value.is_finite() && value > 0.0 {
            Ok(self)
        } else {
            Err(MassError::invalid_mass(format!(
                "{} must be positive and finite, got {}",
                name, value
            )))
        }
    }
}

impl Default for MassSpec {
    fn default() -> Self {
        Self::Density(1.0)
    }
}

/// Mass properties of a homogeneous solid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassProperties {
    pub volume: f64,
    pub mass: f64,
    pub density: f64,
    pub center_of_mass: Point3<f64>,
    /// Inertia tensor about the center of mass
    pub inertia: Matrix3<f64>,
}

/// Principal moments of inertia and their axes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrincipalInertia {
    /// Moments in ascending order
    pub moments: Vector3<f64>,
    /// Column `i` is the unit axis of `moments[i]`
    pub axes: Matrix3<f64>,
}

impl MassProperties {
    /// Derive mass properties from finished volume integrals
    ///
    /// `min_volume` is the absolute magnitude below which the volume counts
    /// as zero.
    pub fn from_integrals(
        integrals: &VolumeIntegrals,
        spec: MassSpec,
        min_volume: f64,
    ) -> MassResult<Self> {
        let spec = spec.validate()?;
        let volume = integrals.t0;

        if volume < -min_volume {
            return Err(MassError::NegativeVolume { volume });
        }
        if !(volume > min_volume) {
            return Err(MassError::ZeroVolume);
        }

        let (mass, density) = match spec {
            MassSpec::Mass(m) => (m, m / volume),
            MassSpec::Density(d) => (d * volume, d),
        };

        let r = integrals.t1 / volume;
        let t2 = &integrals.t2;
        let tp = &integrals.tp;

        // About the origin
        let mut j = Matrix3::zeros();
        j[(0, 0)] = density * (t2.y + t2.z);
        j[(1, 1)] = density * (t2.z + t2.x);
        j[(2, 2)] = density * (t2.x + t2.y);
        j[(0, 1)] = -density * tp.x;
        j[(1, 2)] = -density * tp.y;
        j[(2, 0)] = -density * tp.z;

        // Parallel-axis shift to the center of mass
        j[(0, 0)] -= mass * (r.y * r.y + r.z * r.z);
        j[(1, 1)] -= mass * (r.z * r.z + r.x * r.x);
        j[(2, 2)] -= mass * (r.x * r.x + r.y * r.y);
        j[(0, 1)] += mass * r.x * r.y;
        j[(1, 2)] += mass * r.y * r.z;
        j[(2, 0)] += mass * r.z * r.x;

        j[(1, 0)] = j[(0, 1)];
        j[(2, 1)] = j[(1, 2)];
        j[(0, 2)] = j[(2, 0)];

        Ok(Self {
            volume,
            mass,
            density,
            center_of_mass: Point3::from(r),
            inertia: j,
        })
    }

    /// Principal moments (ascending) and axes of the inertia tensor
    pub fn principal_inertia(&self) -> PrincipalInertia {
        let eigen = self.inertia.symmetric_eigen();

        let mut order = [0usize, 1, 2];
        order.sort_by(|&i, &k| eigen.eigenvalues[i].total_cmp(&eigen.eigenvalues[k]));

        let moments = Vector3::new(
            eigen.eigenvalues[order[0]],
            eigen.eigenvalues[order[1]],
            eigen.eigenvalues[order[2]],
        );
        let axes = Matrix3::from_columns(&[
            eigen.eigenvectors.column(order[0]).into_owned(),
            eigen.eigenvectors.column(order[1]).into_owned(),
            eigen.eigenvectors.column(order[2]).into_owned(),
        ]);

        PrincipalInertia { moments, axes }
    }
}

impl fmt::Display for MassProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.center_of_mass;
        writeln!(f, "volume:         {:.9}", self.volume)?;
        writeln!(f, "mass:           {:.9}", self.mass)?;
        writeln!(f, "density:        {:.9}", self.density)?;
        writeln!(f, "center of mass: ({:.9}, {:.9}, {:.9})", c.x, c.y, c.z)?;
        write!(f, "inertia:")?;
        for row in self.inertia.row_iter() {
            write!(f, "\n  [{:>15.9} {:>15.9} {:>15.9}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

/// Compute mass properties of a closed, outward-wound polyhedron
pub fn compute_mass_properties(poly: &Polyhedron, spec: MassSpec) -> MassResult<MassProperties> {
    compute_mass_properties_with_tolerance(poly, spec, ZERO_VOLUME_TOLERANCE)
}

/// Compute mass properties with a custom relative zero-volume tolerance
pub fn compute_mass_properties_with_tolerance(
    poly: &Polyhedron,
    spec: MassSpec,
    zero_volume_tolerance: f64,
) -> MassResult<MassProperties> {
    let integrals = VolumeIntegrals::compute(poly)?;
    let min_volume = zero_volume_tolerance * poly.bounding_box().diagonal().powi(3);
    MassProperties::from_integrals(&integrals, spec, min_volume)
}
