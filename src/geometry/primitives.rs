// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Closed, outward-wound polyhedral primitives

use super::Polyhedron;
use crate::error::MassResult;
use nalgebra::{Point3, Vector3};
use std::collections::HashMap;

/// Polyhedral primitives
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Cuboid { size: Vector3<f64>, center: bool },
    Tetrahedron { points: [Point3<f64>; 4] },
    Octahedron { radius: f64 },
    Icosphere { radius: f64, subdivisions: u32 },
}

impl Primitive {
    pub fn cuboid(size: Vector3<f64>, center: bool) -> Self {
        Self::Cuboid { size, center }
    }

    /// Unit cube spanning `[0, 1]³`
    pub fn unit_cube() -> Self {
        Self::cuboid(Vector3::new(1.0, 1.0, 1.0), false)
    }

    /// Tetrahedron over four points in any order
    pub fn tetrahedron(points: [Point3<f64>; 4]) -> Self {
        Self::Tetrahedron { points }
    }

    pub fn octahedron(radius: f64) -> Self {
        Self::Octahedron { radius }
    }

    pub fn icosphere(radius: f64, subdivisions: u32) -> Self {
        Self::Icosphere {
            radius,
            subdivisions,
        }
    }

    pub fn to_polyhedron(&self) -> MassResult<Polyhedron> {
        match self {
            Self::Cuboid { size, center } => generate_cuboid(*size, *center),
            Self::Tetrahedron { points } => generate_tetrahedron(points),
            Self::Octahedron { radius } => generate_octahedron(*radius),
            Self::Icosphere {
                radius,
                subdivisions,
            } => generate_icosphere(*radius, *subdivisions),
        }
    }
}

fn generate_cuboid(size: Vector3<f64>, center: bool) -> MassResult<Polyhedron> {
    let min = if center { -size / 2.0 } else { Vector3::zeros() };
    let max = min + size;

    let vertices = vec![
        Point3::new(min.x, min.y, min.z),
        Point3::new(max.x, min.y, min.z),
        Point3::new(max.x, max.y, min.z),
        Point3::new(min.x, max.y, min.z),
        Point3::new(min.x, min.y, max.z),
        Point3::new(max.x, min.y, max.z),
        Point3::new(max.x, max.y, max.z),
        Point3::new(min.x, max.y, max.z),
    ];

    // One quad per side, counter-clockwise seen from outside
    let faces = vec![
        vec![0, 3, 2, 1], // z-
        vec![4, 5, 6, 7], // z+
        vec![0, 1, 5, 4], // y-
        vec![3, 7, 6, 2], // y+
        vec![0, 4, 7, 3], // x-
        vec![1, 2, 6, 5], // x+
    ];

    Polyhedron::new(vertices, faces)
}

fn generate_tetrahedron(points: &[Point3<f64>; 4]) -> MassResult<Polyhedron> {
    let [p0, p1, p2, p3] = points;
    let orientation = (p1 - p0).cross(&(p2 - p0)).dot(&(p3 - p0));

    let mut faces = vec![vec![0, 2, 1], vec![0, 1, 3], vec![0, 3, 2], vec![1, 2, 3]];
    if orientation < 0.0 {
        for face in &mut faces {
            face.reverse();
        }
    }

    Polyhedron::new(points.to_vec(), faces)
}

fn generate_octahedron(radius: f64) -> MassResult<Polyhedron> {
    let vertices = vec![
        Point3::new(radius, 0.0, 0.0),
        Point3::new(-radius, 0.0, 0.0),
        Point3::new(0.0, radius, 0.0),
        Point3::new(0.0, -radius, 0.0),
        Point3::new(0.0, 0.0, radius),
        Point3::new(0.0, 0.0, -radius),
    ];
    let faces = vec![
        vec![0, 2, 4],
        vec![0, 4, 3],
        vec![0, 3, 5],
        vec![0, 5, 2],
        vec![1, 4, 2],
        vec![1, 3, 4],
        vec![1, 5, 3],
        vec![1, 2, 5],
    ];

    Polyhedron::new(vertices, faces)
}

fn generate_icosphere(radius: f64, subdivisions: u32) -> MassResult<Polyhedron> {
    let t = (1.0 + 5.0_f64.sqrt()) / 2.0;

    let mut directions: Vec<Vector3<f64>> = [
        (-1.0, t, 0.0),
        (1.0, t, 0.0),
        (-1.0, -t, 0.0),
        (1.0, -t, 0.0),
        (0.0, -1.0, t),
        (0.0, 1.0, t),
        (0.0, -1.0, -t),
        (0.0, 1.0, -t),
        (t, 0.0, -1.0),
        (t, 0.0, 1.0),
        (-t, 0.0, -1.0),
        (-t, 0.0, 1.0),
    ]
    .iter()
    .map(|&(x, y, z)| Vector3::new(x, y, z).normalize())
    .collect();

    let mut triangles: Vec<[usize; 3]> = vec![
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];

    for _ in 0..subdivisions {
        let mut midpoints: HashMap<(usize, usize), usize> = HashMap::new();
        let mut midpoint = |a: usize, b: usize, directions: &mut Vec<Vector3<f64>>| {
            let key = if a < b { (a, b) } else { (b, a) };
            *midpoints.entry(key).or_insert_with(|| {
                let direction = (directions[a] + directions[b]).normalize();
                directions.push(direction);
                directions.len() - 1
            })
        };

        let mut refined = Vec::with_capacity(triangles.len() * 4);
        for [a, b, c] in triangles {
            let ab = midpoint(a, b, &mut directions);
            let bc = midpoint(b, c, &mut directions);
            let ca = midpoint(c, a, &mut directions);
            refined.push([a, ab, ca]);
            refined.push([b, bc, ab]);
            refined.push([c, ca, bc]);
            refined.push([ab, bc, ca]);
        }
        triangles = refined;
    }

    let vertices = directions
        .into_iter()
        .map(|d| Point3::from(d * radius))
        .collect();

    Polyhedron::from_triangles(vertices, &triangles)
}
