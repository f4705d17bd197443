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

use num_traits::ToPrimitive;

use std::fmt::Debug;

/// Coordinate field type for hull points.
///
/// Arithmetic is done on references (`&a - &b`, `&a * &b`) so that
/// arbitrary-precision types avoid needless clones; code that needs the
/// operators restates the reference-operator bounds at the use site.
pub trait Scalar: Clone + Debug + PartialEq + PartialOrd + ToPrimitive {
    fn zero() -> Self;

    /// Returns -1, 0, or +1.
    fn sign(&self) -> i8;
}

impl Scalar for i64 {
    fn zero() -> Self {
        0
    }

    fn sign(&self) -> i8 {
        self.signum() as i8
    }
}

impl Scalar for f64 {
    fn zero() -> Self {
        0.0
    }

    fn sign(&self) -> i8 {
        if *self > 0.0 {
            1
        } else if *self < 0.0 {
            -1
        } else {
            0
        }
    }
}
