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

/// Floating-point kernel.
///
/// The zero band of each predicate scales with the magnitude of the terms
/// that produced the result, so inputs of any scale classify consistently.
/// A value whose distance from zero is below the accumulated rounding error
/// of the expression is reported as zero.
#[derive(Debug)]
pub struct F64Kernel;

// Relative error of a 3x3 determinant / cross-product component evaluated
// in f64, with headroom for the summation order.
const DET3_REL_ERR: f64 = 16.0 * f64::EPSILON;
const CROSS_REL_ERR: f64 = 8.0 * f64::EPSILON;

impl Kernel3 for F64Kernel {
    type FT = f64;

    fn volume_sign(
        a: &Point3<f64>,
        b: &Point3<f64>,
        c: &Point3<f64>,
        p: &Point3<f64>,
    ) -> i8 {
        let ax = a.x - p.x;
        let ay = a.y - p.y;
        let az = a.z - p.z;
        let bx = b.x - p.x;
        let by = b.y - p.y;
        let bz = b.z - p.z;
        let cx = c.x - p.x;
        let cy = c.y - p.y;
        let cz = c.z - p.z;

        let vol = ax * (by * cz - bz * cy) + ay * (bz * cx - bx * cz) + az * (bx * cy - by * cx);

        let mag = ax.abs() * (by.abs() * cz.abs() + bz.abs() * cy.abs())
            + ay.abs() * (bz.abs() * cx.abs() + bx.abs() * cz.abs())
            + az.abs() * (bx.abs() * cy.abs() + by.abs() * cx.abs());
        let bound = DET3_REL_ERR * mag;

        if vol > bound {
            1
        } else if vol < -bound {
            -1
        } else {
            0
        }
    }

    fn are_collinear(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> bool {
        let ux = b.x - a.x;
        let uy = b.y - a.y;
        let uz = b.z - a.z;
        let vx = c.x - a.x;
        let vy = c.y - a.y;
        let vz = c.z - a.z;

        let zero = |lhs: f64, rhs: f64| {
            let diff = lhs - rhs;
            diff.abs() <= CROSS_REL_ERR * (lhs.abs() + rhs.abs())
        };

        zero(uy * vz, uz * vy) && zero(uz * vx, ux * vz) && zero(ux * vy, uy * vx)
    }
}
