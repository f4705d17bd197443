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

/// One input point and its hull bookkeeping.
///
/// Vertices live in a flat arena owned by the mesh; the arena index doubles
/// as the stable input-order number `vnum`. Deleted entries are tombstoned
/// with `removed` rather than compacted, so handles stay valid.
#[derive(Debug, Clone)]
pub struct Vertex<T: Scalar> {
    pub position: Point3<T>,
    /// Stable input-order index.
    pub vnum: usize,
    /// Already handed to the insertion driver.
    pub processed: bool,
    /// Touched by at least one surviving edge. Scratch between cleanup
    /// phases; false while the mesh is at rest.
    pub on_hull: bool,
    /// Edge toward the apex created earlier in the current insertion pass,
    /// so the cone fan reuses it instead of duplicating it.
    pub(crate) duplicate: Option<usize>,
    pub removed: bool,
}

impl<T: Scalar> Vertex<T> {
    pub(crate) fn new(position: Point3<T>, vnum: usize) -> Self {
        Self {
            position,
            vnum,
            processed: false,
            on_hull: false,
            duplicate: None,
            removed: false,
        }
    }
}

/// An undirected hull edge: two endpoint vertices, two adjacent faces.
///
/// Adjacency slots hold `usize::MAX` until linked. A closed mesh has both
/// slots filled on every live edge.
#[derive(Debug, Clone)]
pub struct Edge {
    pub endpoints: [usize; 2],
    pub adj_faces: [usize; 2],
    /// Replacement for the visible adjacent face, staged during an
    /// insertion pass and installed by cleanup.
    pub(crate) new_face: Option<usize>,
    /// Interior to the visible region; cleanup tombstones it.
    pub(crate) to_delete: bool,
    pub removed: bool,
}

impl Edge {
    pub(crate) fn null() -> Self {
        Self {
            endpoints: [usize::MAX; 2],
            adj_faces: [usize::MAX; 2],
            new_face: None,
            to_delete: false,
            removed: false,
        }
    }
}

/// A triangular hull face.
///
/// Invariant: for each i, one endpoint of `edges[i]` equals `vertices[i]`.
/// (This does not mean `edges[i]` joins `vertices[i]` and `vertices[i+1]`;
/// see `HullMesh::edge_order_on_faces` for that normalization.)
#[derive(Debug, Clone)]
pub struct Face {
    pub vertices: [usize; 3],
    pub edges: [usize; 3],
    /// Seen by the point currently being inserted; cleanup tombstones it.
    pub(crate) visible: bool,
    pub removed: bool,
}

impl Face {
    pub(crate) fn null() -> Self {
        Self {
            vertices: [usize::MAX; 3],
            edges: [usize::MAX; 3],
            visible: false,
            removed: false,
        }
    }
}
