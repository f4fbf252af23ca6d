// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - polyhedron representation and helpers

mod bbox;
mod polyhedron;
mod primitives;
mod topology;
mod transform;

pub use bbox::BoundingBox;
pub use polyhedron::{Face, Polyhedron, DEGENERATE_TOLERANCE};
pub use primitives::Primitive;
pub use topology::{check_closed, ClosednessReport};
