// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Polymass
//!
//! Exact volume, center of mass and inertia tensor of closed polyhedra,
//! computed by integrating over boundary faces (divergence theorem) instead
//! of sampling or tetrahedralizing the interior.

pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod mass;

pub use config::{AnalysisConfig, OutputFormat};
pub use error::{MassError, MassResult};
pub use geometry::{check_closed, BoundingBox, ClosednessReport, Polyhedron, Primitive};
pub use io::{import_mesh_file, load_polyhedron, parse_polyhedron, write_polyhedron, MeshData};
pub use mass::{compute_mass_properties, MassProperties, MassSpec, VolumeIntegrals};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Result of analyzing one polyhedron
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub properties: MassProperties,
    pub bounding_box: BoundingBox,
    /// Present when the closedness check ran
    pub closedness: Option<ClosednessReport>,
}

/// Compute mass properties of a polyhedron under `config`
///
/// `spec` falls back to the configured density.
pub fn analyze(poly: &Polyhedron, spec: Option<MassSpec>, config: &AnalysisConfig) -> MassResult<Analysis> {
    let closedness = config.check_closed.then(|| check_closed(poly));
    if let Some(report) = closedness.as_ref().filter(|r| !r.is_valid()) {
        warn!(
            boundary = report.boundary_edges,
            non_manifold = report.non_manifold_edges,
            misoriented = report.misoriented_edges,
            "surface is not closed and consistently wound"
        );
    }

    let spec = spec.unwrap_or(MassSpec::Density(config.density));
    let properties =
        mass::compute_mass_properties_with_tolerance(poly, spec, config.zero_volume_tolerance)?;

    Ok(Analysis {
        properties,
        bounding_box: poly.bounding_box(),
        closedness,
    })
}

/// Load a mesh file and analyze it
pub fn analyze_file(path: &str, spec: Option<MassSpec>, config: &AnalysisConfig) -> Result<Analysis> {
    let poly = import_mesh_file(path)?
        .into_polyhedron(config.degenerate_tolerance)
        .with_context(|| format!("Invalid polyhedron in {}", path))?;
    info!(
        path,
        vertices = poly.vertex_count(),
        faces = poly.face_count(),
        "loaded polyhedron"
    );

    analyze(&poly, spec, config).with_context(|| format!("Failed to analyze {}", path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_cube() {
        let cube = Primitive::unit_cube().to_polyhedron().unwrap();
        let result = compute_mass_properties(&cube, MassSpec::default());
        assert!(result.is_ok());
    }

    #[test]
    fn test_analyze_runs_closedness_check_when_enabled() {
        let cube = Primitive::unit_cube().to_polyhedron().unwrap();

        let analysis = analyze(&cube, None, &AnalysisConfig::default()).unwrap();
        assert!(analysis.closedness.is_none());

        let config = AnalysisConfig {
            check_closed: true,
            density: 2.0,
            ..AnalysisConfig::default()
        };
        let analysis = analyze(&cube, None, &config).unwrap();
        assert!(analysis.closedness.unwrap().is_valid());
        assert!((analysis.properties.mass - 2.0).abs() < 1e-12);
    }
}
