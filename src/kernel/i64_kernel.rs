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

use crate::geometry::Point3;
use crate::kernel::kernel::Kernel3;

/// Exact kernel for integer coordinates.
///
/// Differences and products are widened to `i128`; the sign is exact for
/// coordinates with absolute value up to 2^40 (the triple product of three
/// 41-bit differences stays inside `i128`). Larger coordinates should use
/// [`BigRationalKernel`](crate::kernel::BigRationalKernel).
#[derive(Debug)]
pub struct I64Kernel;

impl Kernel3 for I64Kernel {
    type FT = i64;

    fn volume_sign(
        a: &Point3<i64>,
        b: &Point3<i64>,
        c: &Point3<i64>,
        p: &Point3<i64>,
    ) -> i8 {
        let ax = a.x as i128 - p.x as i128;
        let ay = a.y as i128 - p.y as i128;
        let az = a.z as i128 - p.z as i128;
        let bx = b.x as i128 - p.x as i128;
        let by = b.y as i128 - p.y as i128;
        let bz = b.z as i128 - p.z as i128;
        let cx = c.x as i128 - p.x as i128;
        let cy = c.y as i128 - p.y as i128;
        let cz = c.z as i128 - p.z as i128;

        let vol = ax * (by * cz - bz * cy) + ay * (bz * cx - bx * cz) + az * (bx * cy - by * cx);

        vol.signum() as i8
    }

    fn are_collinear(a: &Point3<i64>, b: &Point3<i64>, c: &Point3<i64>) -> bool {
        let ux = b.x as i128 - a.x as i128;
        let uy = b.y as i128 - a.y as i128;
        let uz = b.z as i128 - a.z as i128;
        let vx = c.x as i128 - a.x as i128;
        let vy = c.y as i128 - a.y as i128;
        let vz = c.z as i128 - a.z as i128;

        uy * vz - uz * vy == 0 && uz * vx - ux * vz == 0 && ux * vy - uy * vx == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_sign_above_and_below() {
        let a = Point3::new(0, 0, 0);
        let b = Point3::new(1, 0, 0);
        let c = Point3::new(0, 1, 0);

        // point on the +z side of the ccw face sees it
        assert_eq!(I64Kernel::volume_sign(&a, &b, &c, &Point3::new(0, 0, 1)), -1);
        assert_eq!(I64Kernel::volume_sign(&a, &b, &c, &Point3::new(0, 0, -1)), 1);
        assert_eq!(I64Kernel::volume_sign(&a, &b, &c, &Point3::new(3, 4, 0)), 0);
    }

    #[test]
    fn collinear_detection() {
        let a = Point3::new(0, 0, 0);
        let b = Point3::new(2, 4, 6);
        let c = Point3::new(1, 2, 3);
        assert!(I64Kernel::are_collinear(&a, &b, &c));
        assert!(!I64Kernel::are_collinear(&a, &b, &Point3::new(1, 2, 4)));
    }

    #[test]
    fn no_overflow_at_safe_bound() {
        let m = 1i64 << 40;
        let a = Point3::new(m, 0, 0);
        let b = Point3::new(0, m, 0);
        let c = Point3::new(0, 0, m);
        assert_eq!(I64Kernel::volume_sign(&a, &b, &c, &Point3::new(-m, -m, -m)), 1);
    }
}
