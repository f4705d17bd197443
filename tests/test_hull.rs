// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use chull3::{BigRational, F64Kernel, HullError, HullMesh, I64Kernel, Point3};

fn cube_corners(half: i64) -> Vec<Point3<i64>> {
    let mut pts = Vec::new();
    for &x in &[-half, half] {
        for &y in &[-half, half] {
            for &z in &[-half, half] {
                pts.push(Point3::new(x, y, z));
            }
        }
    }
    pts
}

/// Points on the moment curve (t, t^2, t^3) are in general position: no four
/// are coplanar, so the hull triangulation is unique.
fn moment_curve(n: i64) -> Vec<Point3<i64>> {
    (1..=n).map(|t| Point3::new(t, t * t, t * t * t)).collect()
}

fn live_positions(mesh: &HullMesh<I64Kernel>) -> HashSet<(i64, i64, i64)> {
    mesh.vertices()
        .map(|(_, v)| (v.position.x, v.position.y, v.position.z))
        .collect()
}

/// Face set keyed by coordinates so it is comparable across input orders.
fn face_coordinate_set(mesh: &HullMesh<I64Kernel>) -> HashSet<Vec<(i64, i64, i64)>> {
    mesh.faces()
        .map(|(f, _)| {
            let mut tri: Vec<(i64, i64, i64)> = mesh
                .face_vertices(f)
                .iter()
                .map(|&v| {
                    let p = mesh.vertex_position(v);
                    (p.x, p.y, p.z)
                })
                .collect();
            tri.sort_unstable();
            tri
        })
        .collect()
}

#[test]
fn tetrahedron_counts() {
    let pts = vec![
        Point3::new(0, 0, 0),
        Point3::new(6, 0, 0),
        Point3::new(0, 6, 0),
        Point3::new(0, 0, 6),
    ];
    let mesh = HullMesh::<I64Kernel>::from_points(pts).unwrap();
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.edge_count(), 6);
    assert_eq!(mesh.face_count(), 4);
    mesh.assert_valid();
}

#[test]
fn cube_counts() {
    let mesh = HullMesh::<I64Kernel>::from_points(cube_corners(1)).unwrap();
    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.face_count(), 12);
    assert_eq!(mesh.edge_count(), 18);
    mesh.assert_valid();
}

#[test]
fn cube_centroid_is_absorbed() {
    let mut pts = cube_corners(1);
    pts.push(Point3::new(0, 0, 0));
    let mesh = HullMesh::<I64Kernel>::from_points(pts).unwrap();
    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.face_count(), 12);
    assert_eq!(mesh.edge_count(), 18);
    // the centroid (vnum 8) must not survive
    assert!(mesh.vertices().all(|(_, v)| v.vnum != 8));
    mesh.assert_valid();
}

#[test]
fn cube_centroid_first_is_still_absorbed() {
    // the centroid participates in the seed triangle, gets onto the early
    // hull, and must be swallowed once the far corners arrive
    let mut pts = vec![Point3::new(0, 0, 0)];
    pts.extend(cube_corners(1));
    let mesh = HullMesh::<I64Kernel>::from_points(pts).unwrap();
    assert_eq!(mesh.vertex_count(), 8);
    assert!(mesh.vertices().all(|(_, v)| v.vnum != 0));
    mesh.assert_valid();
}

#[test]
fn single_point_over_one_face() {
    // apex over the slanted face of a tetrahedron: that face is replaced by
    // three cone faces, every other face survives
    let pts = vec![
        Point3::new(0, 0, 0),
        Point3::new(6, 0, 0),
        Point3::new(0, 6, 0),
        Point3::new(0, 0, 6),
        Point3::new(4, 4, 4),
    ];
    let mesh = HullMesh::<I64Kernel>::from_points(pts).unwrap();
    assert_eq!(mesh.vertex_count(), 5);
    assert_eq!(mesh.edge_count(), 9);
    assert_eq!(mesh.face_count(), 6);
    mesh.assert_valid();
}

#[test]
fn octahedron_counts() {
    let pts = vec![
        Point3::new(1, 0, 0),
        Point3::new(-1, 0, 0),
        Point3::new(0, 1, 0),
        Point3::new(0, -1, 0),
        Point3::new(0, 0, 1),
        Point3::new(0, 0, -1),
    ];
    let mesh = HullMesh::<I64Kernel>::from_points(pts).unwrap();
    assert_eq!(mesh.vertex_count(), 6);
    assert_eq!(mesh.edge_count(), 12);
    assert_eq!(mesh.face_count(), 8);
    mesh.assert_valid();
}

#[test]
fn euler_relations_hold_for_every_prefix() {
    // growing the hull one point at a time keeps the invariants at every
    // intermediate size
    let pts = moment_curve(10);
    for k in 4..=pts.len() {
        let mesh = HullMesh::<I64Kernel>::from_points(pts[..k].to_vec()).unwrap();
        mesh.assert_valid();
        assert_eq!(mesh.vertex_count(), k, "moment-curve points are all extreme");
    }
}

#[test]
fn insertion_order_invariance() {
    let base = moment_curve(10);
    let reference = HullMesh::<I64Kernel>::from_points(base.clone()).unwrap();
    let ref_vertices = live_positions(&reference);
    let ref_faces = face_coordinate_set(&reference);

    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..10 {
        let mut shuffled = base.clone();
        shuffled.shuffle(&mut rng);
        let mesh = HullMesh::<I64Kernel>::from_points(shuffled).unwrap();
        mesh.assert_valid();
        assert_eq!(live_positions(&mesh), ref_vertices);
        assert_eq!(face_coordinate_set(&mesh), ref_faces);
    }
}

#[test]
fn shuffled_cube_keeps_vertex_set() {
    // cube faces triangulate ambiguously, so only the vertex set is
    // order-independent here
    let base = cube_corners(3);
    let reference: HashSet<_> = base.iter().map(|p| (p.x, p.y, p.z)).collect();

    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..10 {
        let mut shuffled = base.clone();
        shuffled.shuffle(&mut rng);
        let mesh = HullMesh::<I64Kernel>::from_points(shuffled).unwrap();
        mesh.assert_valid();
        assert_eq!(live_positions(&mesh), reference);
    }
}

#[test]
fn interior_cloud_is_absorbed() {
    let mut rng = StdRng::seed_from_u64(1234);
    let mut pts = Vec::new();
    for _ in 0..40 {
        pts.push(Point3::new(
            rng.random_range(-5..=5i64),
            rng.random_range(-5..=5i64),
            rng.random_range(-5..=5i64),
        ));
    }
    pts.extend(cube_corners(10));
    pts.shuffle(&mut rng);

    let mesh = HullMesh::<I64Kernel>::from_points(pts).unwrap();
    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(live_positions(&mesh), cube_corners(10).iter().map(|p| (p.x, p.y, p.z)).collect());
    mesh.assert_valid();
}

#[test]
fn collinear_input_is_rejected() {
    let pts: Vec<_> = (0..6).map(|i| Point3::new(i, 2 * i, 3 * i)).collect();
    let err = HullMesh::<I64Kernel>::from_points(pts).unwrap_err();
    assert_eq!(err, HullError::AllCollinear);
}

#[test]
fn coplanar_input_is_rejected() {
    let mut pts = Vec::new();
    for x in 0..3 {
        for y in 0..3 {
            pts.push(Point3::new(x, y, 0));
        }
    }
    let err = HullMesh::<I64Kernel>::from_points(pts).unwrap_err();
    assert_eq!(err, HullError::AllCoplanar);
}

#[test]
fn too_few_points_is_rejected() {
    let pts = vec![
        Point3::new(0, 0, 0),
        Point3::new(1, 0, 0),
        Point3::new(0, 1, 0),
    ];
    let err = HullMesh::<I64Kernel>::from_points(pts).unwrap_err();
    assert_eq!(err, HullError::InsufficientPoints(3));
}

#[test]
fn f64_cube() {
    let mut pts = Vec::new();
    for &x in &[-1.5f64, 1.5] {
        for &y in &[-1.5f64, 1.5] {
            for &z in &[-1.5f64, 1.5] {
                pts.push(Point3::new(x, y, z));
            }
        }
    }
    pts.push(Point3::new(0.25, -0.125, 0.5)); // interior
    let mesh = HullMesh::<F64Kernel>::from_points(pts).unwrap();
    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.face_count(), 12);
    assert_eq!(mesh.edge_count(), 18);
    mesh.assert_valid();
}

#[test]
fn bigrational_tetrahedron() {
    let pts = vec![
        Point3::<BigRational>::new(0i64, 0i64, 0i64),
        Point3::<BigRational>::new(1i64, 0i64, 0i64),
        Point3::<BigRational>::new(0i64, 1i64, 0i64),
        // exact rational coordinates far below f64 resolution still count
        Point3::new(
            BigRational::from_ratio(1, 1_000_000_000_000_000_000),
            BigRational::from_ratio(1, 1_000_000_000_000_000_000),
            BigRational::from(1i64),
        ),
    ];
    let mesh = HullMesh::<chull3::BigRationalKernel>::from_points(pts).unwrap();
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.edge_count(), 6);
    assert_eq!(mesh.face_count(), 4);
    mesh.assert_valid();
}
