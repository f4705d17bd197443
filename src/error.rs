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

use std::fmt;

/// Errors that can occur during hull construction.
///
/// All of them are terminal for the input set: no partial or degenerate
/// hull is produced. They never indicate a bug; broken invariants in a
/// finished mesh are surfaced by assertions instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HullError {
    /// Fewer than the 4 points needed to span a tetrahedron.
    InsufficientPoints(usize),

    /// Every consecutive triple of input points is collinear; no seed
    /// triangle exists.
    AllCollinear,

    /// All points lie in the plane of the seed triangle; no seed
    /// tetrahedron exists.
    AllCoplanar,
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::InsufficientPoints(n) => {
                write!(f, "insufficient points: need at least 4, got {}", n)
            }
            HullError::AllCollinear => {
                write!(f, "degenerate input: all points are collinear")
            }
            HullError::AllCoplanar => {
                write!(f, "degenerate input: all points are coplanar")
            }
        }
    }
}

impl std::error::Error for HullError {}
