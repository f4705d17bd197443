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

//! Incremental 3D convex hulls with pluggable arithmetic kernels.
//!
//! Points are folded into an evolving triangulated polytope one at a time;
//! after every step the mesh is a closed, convex, consistently outward-wound
//! surface. Coordinates can be exact integers ([`I64Kernel`]), floats with a
//! magnitude-scaled tolerance ([`F64Kernel`]), or arbitrary-precision
//! rationals ([`BigRationalKernel`]).
//!
//! # Example
//!
//! ```
//! use chull3::{HullMesh, I64Kernel, Point3};
//!
//! let corners = [
//!     [-1, -1, -1], [1, -1, -1], [-1, 1, -1], [1, 1, -1],
//!     [-1, -1, 1], [1, -1, 1], [-1, 1, 1], [1, 1, 1],
//! ];
//! let mesh = HullMesh::<I64Kernel>::from_points(
//!     corners.iter().map(|&[x, y, z]| Point3::new(x, y, z)),
//! )
//! .unwrap();
//!
//! assert_eq!(mesh.vertex_count(), 8);
//! assert_eq!(mesh.face_count(), 12);
//! assert_eq!(mesh.edge_count(), 18);
//! ```

pub mod error;
pub mod geometry;
pub mod io;
pub mod kernel;
pub mod mesh;
pub mod numeric;

pub use error::HullError;
pub use geometry::{Point3, Vector3};
pub use kernel::{BigRationalKernel, F64Kernel, I64Kernel, Kernel3};
pub use mesh::{HullMesh, ValidationReport, validate};
pub use numeric::{BigRational, Scalar};
