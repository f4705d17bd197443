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
use crate::numeric::scalar::Scalar;

/// Geometric predicates over one coordinate field type.
///
/// The hull code never does coordinate arithmetic itself; everything
/// numerical goes through one of these two predicates, so swapping the
/// kernel swaps the robustness model.
pub trait Kernel3 {
    type FT: Scalar;

    /// Sign of the scalar triple product of the vectors from `p` to the
    /// face vertices `a`, `b`, `c` (the signed volume of the tetrahedron
    /// they span, up to the constant factor 6).
    ///
    /// With faces wound counterclockwise as seen from outside:
    /// - `+1`: `p` is strictly behind the face (inside the hull half-space),
    /// - `-1`: `p` is strictly outside; the face is visible from `p`,
    /// - `0`: `p` is coplanar with the face (within the kernel's tolerance).
    fn volume_sign(
        a: &Point3<Self::FT>,
        b: &Point3<Self::FT>,
        c: &Point3<Self::FT>,
        p: &Point3<Self::FT>,
    ) -> i8;

    /// True when the cross product of `b - a` and `c - a` is (tolerated) zero.
    fn are_collinear(a: &Point3<Self::FT>, b: &Point3<Self::FT>, c: &Point3<Self::FT>) -> bool;
}
