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

use chull3::{BigRational, BigRationalKernel, F64Kernel, I64Kernel, Kernel3, Point3};

#[test]
fn i64_volume_sign_orientation() {
    let a = Point3::new(0, 0, 0);
    let b = Point3::new(4, 0, 0);
    let c = Point3::new(0, 4, 0);

    // +z side sees the ccw face
    assert_eq!(I64Kernel::volume_sign(&a, &b, &c, &Point3::new(1, 1, 7)), -1);
    assert_eq!(I64Kernel::volume_sign(&a, &b, &c, &Point3::new(1, 1, -7)), 1);
    assert_eq!(I64Kernel::volume_sign(&a, &b, &c, &Point3::new(9, 9, 0)), 0);
}

#[test]
fn i64_volume_sign_flips_with_winding() {
    let a = Point3::new(0, 0, 0);
    let b = Point3::new(4, 0, 0);
    let c = Point3::new(0, 4, 0);
    let p = Point3::new(1, 1, 7);
    assert_eq!(
        I64Kernel::volume_sign(&a, &b, &c, &p),
        -I64Kernel::volume_sign(&c, &b, &a, &p)
    );
}

#[test]
fn f64_zero_band_absorbs_rounding() {
    let a = Point3::new(0.1, 0.2, 0.3);
    let b = Point3::new(1.3, 0.7, -0.2);
    let c = Point3::new(-0.5, 1.1, 0.9);
    // p lies on the plane of (a, b, c) up to the rounding of its own
    // construction; the banded sign must call it coplanar
    let p = Point3::new(
        0.1 + 0.25 * (1.3 - 0.1) + 0.35 * (-0.5 - 0.1),
        0.2 + 0.25 * (0.7 - 0.2) + 0.35 * (1.1 - 0.2),
        0.3 + 0.25 * (-0.2 - 0.3) + 0.35 * (0.9 - 0.3),
    );
    assert_eq!(F64Kernel::volume_sign(&a, &b, &c, &p), 0);

    // a resolvable displacement off the plane is not absorbed
    let q = Point3::new(p.x, p.y, p.z + 1e-9);
    assert_eq!(F64Kernel::volume_sign(&a, &b, &c, &q), -1);
}

#[test]
fn f64_collinear_tolerates_scale() {
    for scale in [1e-8, 1.0, 1e8] {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(scale, 2.0 * scale, 3.0 * scale);
        let c = Point3::new(2.0 * scale, 4.0 * scale, 6.0 * scale);
        assert!(F64Kernel::are_collinear(&a, &b, &c), "scale {scale}");
    }
}

#[test]
fn bigrational_resolves_below_f64_epsilon() {
    let a = Point3::<BigRational>::new(0i64, 0i64, 0i64);
    let b = Point3::<BigRational>::new(1i64, 0i64, 0i64);
    let c = Point3::<BigRational>::new(0i64, 1i64, 0i64);

    // 1 / 10^30 above the plane: invisible to f64, exact for rationals
    let tiny = BigRational::from_ratio(1, 1_000_000_000_000_000)
        * BigRational::from_ratio(1, 1_000_000_000_000_000);
    let p = Point3::new(
        BigRational::from_ratio(3, 10),
        BigRational::from_ratio(3, 10),
        tiny,
    );
    assert_eq!(BigRationalKernel::volume_sign(&a, &b, &c, &p), -1);

    let on_plane = Point3::new(
        BigRational::from_ratio(3, 10),
        BigRational::from_ratio(3, 10),
        BigRational::from(0i64),
    );
    assert_eq!(BigRationalKernel::volume_sign(&a, &b, &c, &on_plane), 0);
}

#[test]
fn bigrational_collinear_is_exact() {
    let a = Point3::<BigRational>::new(0i64, 0i64, 0i64);
    let b = Point3::new(
        BigRational::from_ratio(1, 3),
        BigRational::from_ratio(2, 3),
        BigRational::from(1i64),
    );
    let c = Point3::new(
        BigRational::from_ratio(2, 3),
        BigRational::from_ratio(4, 3),
        BigRational::from(2i64),
    );
    assert!(BigRationalKernel::are_collinear(&a, &b, &c));

    let off = Point3::new(
        BigRational::from_ratio(2, 3),
        BigRational::from_ratio(4, 3),
        BigRational::from_ratio(2_000_000_000_001, 1_000_000_000_000),
    );
    assert!(!BigRationalKernel::are_collinear(&a, &b, &off));
}
