// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Mass-property integration by boundary-face integrals
//!
//! Pipeline per face: select projection axes, integrate the projected
//! polygon, lift the result onto the face plane, fold into the volume
//! accumulator. Mass properties are derived once after all faces.

mod axis;
mod face;
mod projection;
mod properties;
mod volume;

pub use axis::{Axis, AxisPermutation};
pub use face::{FaceIntegrals, MIN_DOMINANT_COMPONENT};
pub use projection::ProjectionIntegrals;
pub use properties::{
    compute_mass_properties, compute_mass_properties_with_tolerance, MassProperties, MassSpec,
    PrincipalInertia, ZERO_VOLUME_TOLERANCE,
};
pub use volume::{integrate_face, VolumeAccumulator, VolumeIntegrals};
