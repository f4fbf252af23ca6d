// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Mass-property integration tests

use anyhow::Result;
use approx::assert_relative_eq;
use nalgebra::{Matrix3, Point3, Vector3};
use polymass::mass::{Axis, AxisPermutation, VolumeIntegrals};
use polymass::{compute_mass_properties, MassError, MassSpec, Polyhedron, Primitive};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[test]
fn test_unit_cube() -> Result<()> {
    let cube = Primitive::unit_cube().to_polyhedron()?;
    let props = compute_mass_properties(&cube, MassSpec::Mass(1.0))?;

    println!("Unit cube:\n{}", props);

    assert_relative_eq!(props.volume, 1.0, epsilon = 1e-9);
    assert_relative_eq!(props.center_of_mass, Point3::new(0.5, 0.5, 0.5), epsilon = 1e-9);
    assert_relative_eq!(
        props.inertia,
        Matrix3::from_diagonal_element(1.0 / 6.0),
        epsilon = 1e-9
    );

    Ok(())
}

#[test]
fn test_tetrahedron_closed_form() -> Result<()> {
    let points = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
    ];
    let tetra = Primitive::tetrahedron(points).to_polyhedron()?;
    let props = compute_mass_properties(&tetra, MassSpec::Density(1.0))?;

    // V = 1/6, centroid at the vertex average
    assert_relative_eq!(props.volume, 1.0 / 6.0, epsilon = 1e-12);
    assert_relative_eq!(props.center_of_mass, Point3::new(0.25, 0.25, 0.25), epsilon = 1e-12);

    // About the origin: ∫x² = 1/60, ∫xy = 1/120
    let ixx_origin = 2.0 / 60.0;
    let ixy_origin = -1.0 / 120.0;
    let m = props.mass;
    let r = 0.25;
    assert_relative_eq!(props.inertia[(0, 0)], ixx_origin - m * 2.0 * r * r, epsilon = 1e-12);
    assert_relative_eq!(props.inertia[(0, 1)], ixy_origin + m * r * r, epsilon = 1e-12);

    Ok(())
}

#[test]
fn test_octahedron_volume() -> Result<()> {
    let radius = 2.0;
    let octa = Primitive::octahedron(radius).to_polyhedron()?;
    let props = compute_mass_properties(&octa, MassSpec::Mass(1.0))?;

    // Two square pyramids: 4/3 r³
    assert_relative_eq!(props.volume, 4.0 / 3.0 * radius * radius * radius, epsilon = 1e-12);
    assert_relative_eq!(props.center_of_mass, Point3::origin(), epsilon = 1e-12);

    // Cubic symmetry makes the tensor isotropic: I = m r² / 5
    let expected = radius * radius / 5.0;
    assert_relative_eq!(props.inertia, Matrix3::from_diagonal_element(expected), epsilon = 1e-12);

    Ok(())
}

#[test]
fn test_icosphere_volume_converges_monotonically() -> Result<()> {
    let radius = 3.0;
    let exact = 4.0 / 3.0 * std::f64::consts::PI * radius * radius * radius;

    let mut previous = 0.0;
    for level in 0..5 {
        let sphere = Primitive::icosphere(radius, level).to_polyhedron()?;
        let props = compute_mass_properties(&sphere, MassSpec::Mass(1.0))?;

        println!(
            "Icosphere level {}: volume {:.6} (exact {:.6})",
            level, props.volume, exact
        );

        assert!(props.volume > previous, "volume must grow with subdivision");
        assert!(props.volume < exact, "inscribed polyhedron exceeds the sphere");
        previous = props.volume;
    }

    assert!((exact - previous) / exact < 0.01);
    Ok(())
}

#[test]
fn test_scale_invariance() -> Result<()> {
    let s = 2.5;
    let shape = Primitive::cuboid(Vector3::new(1.0, 2.0, 3.0), false).to_polyhedron()?;
    let base = compute_mass_properties(&shape, MassSpec::Mass(4.0))?;
    let scaled = compute_mass_properties(&shape.scaled(s)?, MassSpec::Mass(4.0))?;

    assert_relative_eq!(scaled.volume, base.volume * s.powi(3), epsilon = 1e-9);
    assert_relative_eq!(
        scaled.center_of_mass,
        Point3::from(base.center_of_mass.coords * s),
        epsilon = 1e-9
    );
    assert_relative_eq!(scaled.inertia, base.inertia * (s * s), epsilon = 1e-9);

    Ok(())
}

#[test]
fn test_translation_invariance() -> Result<()> {
    let offset = Vector3::new(10.0, -4.0, 7.5);
    let sphere = Primitive::icosphere(1.0, 2).to_polyhedron()?;
    let base = compute_mass_properties(&sphere, MassSpec::Density(2.0))?;
    let moved = compute_mass_properties(&sphere.translated(&offset)?, MassSpec::Density(2.0))?;

    assert_relative_eq!(moved.volume, base.volume, epsilon = 1e-9);
    assert_relative_eq!(moved.center_of_mass, base.center_of_mass + offset, epsilon = 1e-9);
    assert_relative_eq!(moved.inertia, base.inertia, epsilon = 1e-9);

    Ok(())
}

#[test]
fn test_reversed_winding_negates_volume() -> Result<()> {
    let sphere = Primitive::icosphere(1.0, 1).to_polyhedron()?;
    let outward = VolumeIntegrals::compute(&sphere)?;
    let inward = VolumeIntegrals::compute(&sphere.reversed()?)?;

    assert!(outward.volume() > 0.0);
    assert_relative_eq!(inward.volume(), -outward.volume(), epsilon = 1e-12);

    let err = compute_mass_properties(&sphere.reversed()?, MassSpec::Mass(1.0)).unwrap_err();
    assert!(matches!(err, MassError::NegativeVolume { .. }));

    Ok(())
}

#[test]
fn test_inertia_is_symmetric() -> Result<()> {
    // Skewed tetrahedron so every off-diagonal entry is non-zero
    let points = [
        Point3::new(0.3, -0.2, 0.1),
        Point3::new(2.0, 0.5, -0.4),
        Point3::new(0.7, 1.8, 0.6),
        Point3::new(-0.5, 0.9, 2.2),
    ];
    let tetra = Primitive::tetrahedron(points).to_polyhedron()?;
    let props = compute_mass_properties(&tetra, MassSpec::Mass(3.0))?;

    assert!(props.inertia[(0, 1)].abs() > 1e-6);
    assert_relative_eq!(props.inertia, props.inertia.transpose(), epsilon = 1e-15);

    Ok(())
}

#[test]
fn test_face_order_does_not_matter() -> Result<()> {
    let sphere = Primitive::icosphere(1.0, 2).to_polyhedron()?;
    let mut faces = sphere.face_indices();
    faces.shuffle(&mut StdRng::seed_from_u64(7));
    let shuffled = Polyhedron::new(sphere.vertices().to_vec(), faces)?;

    let a = compute_mass_properties(&sphere, MassSpec::Mass(1.0))?;
    let b = compute_mass_properties(&shuffled, MassSpec::Mass(1.0))?;

    assert_relative_eq!(a.volume, b.volume, epsilon = 1e-12);
    assert_relative_eq!(a.center_of_mass, b.center_of_mass, epsilon = 1e-12);
    assert_relative_eq!(a.inertia, b.inertia, epsilon = 1e-12);

    Ok(())
}

#[test]
fn test_concave_solid() -> Result<()> {
    // L-shaped prism: a 2×2 square missing its top-right unit square, extruded by 1
    let profile = [
        (0.0, 0.0),
        (2.0, 0.0),
        (2.0, 1.0),
        (1.0, 1.0),
        (1.0, 2.0),
        (0.0, 2.0),
    ];
    let mut vertices: Vec<Point3<f64>> = profile.iter().map(|&(x, y)| Point3::new(x, y, 0.0)).collect();
    vertices.extend(profile.iter().map(|&(x, y)| Point3::new(x, y, 1.0)));

    let n = profile.len();
    let mut faces = vec![(0..n).rev().collect::<Vec<_>>(), (n..2 * n).collect()];
    for i in 0..n {
        let j = (i + 1) % n;
        faces.push(vec![i, j, j + n, i + n]);
    }

    // The bottom face starts at a convex corner so its normal comes out right
    let poly = Polyhedron::new(vertices, faces)?;
    let props = compute_mass_properties(&poly, MassSpec::Density(1.0))?;

    assert_relative_eq!(props.volume, 3.0, epsilon = 1e-12);
    // Three unit cubes centered at (0.5,0.5), (1.5,0.5), (0.5,1.5)
    assert_relative_eq!(
        props.center_of_mass,
        Point3::new(2.5 / 3.0, 2.5 / 3.0, 0.5),
        epsilon = 1e-12
    );

    Ok(())
}

#[test]
fn test_tilted_face_axis_selection() {
    let s = std::f64::consts::FRAC_1_SQRT_2;
    let normal = Vector3::new(s, s, 0.0);

    let first = AxisPermutation::select(&normal).unwrap();
    for _ in 0..100 {
        assert_eq!(AxisPermutation::select(&normal).unwrap(), first);
    }
    assert_eq!(first.c, Axis::Y);
    assert_eq!(first.a, Axis::Z);
    assert_eq!(first.b, Axis::X);
}

#[test]
fn test_degenerate_face_aborts_with_index() {
    let cube = Primitive::unit_cube().to_polyhedron().unwrap();
    let mut vertices = cube.vertices().to_vec();
    let mut faces = cube.face_indices();

    // Sliver face whose first three vertices are collinear
    vertices.push(Point3::new(0.5, 0.0, 0.0));
    faces.push(vec![0, 8, 1, 5]);

    let err = Polyhedron::new(vertices, faces).unwrap_err();
    assert_eq!(err, MassError::DegenerateFace { face: 6 });
}
