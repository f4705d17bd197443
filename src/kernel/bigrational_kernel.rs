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
use crate::numeric::big_rational::BigRational;
use crate::numeric::scalar::Scalar;

/// Kernel using rug::Rational (arbitrary-precision rationals backed by GMP).
///
/// Every sign is exact; there is no tolerance band at all.
#[derive(Debug)]
pub struct BigRationalKernel;

impl Kernel3 for BigRationalKernel {
    type FT = BigRational;

    fn volume_sign(
        a: &Point3<BigRational>,
        b: &Point3<BigRational>,
        c: &Point3<BigRational>,
        p: &Point3<BigRational>,
    ) -> i8 {
        let u = a.sub(p);
        let v = b.sub(p);
        let w = c.sub(p);
        v.cross(&w).dot(&u).sign()
    }

    fn are_collinear(
        a: &Point3<BigRational>,
        b: &Point3<BigRational>,
        c: &Point3<BigRational>,
    ) -> bool {
        b.sub(a).cross(&c.sub(a)).is_zero()
    }
}
