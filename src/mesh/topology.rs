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

use ahash::AHashSet;
use smallvec::SmallVec;

use crate::geometry::Point3;
use crate::kernel::kernel::Kernel3;
use crate::mesh::basic_types::{Edge, Face, Vertex};
use crate::mesh::hull::HullMesh;

/// Read-only views over the live mesh. Handles are arena indices; iteration
/// skips tombstoned entries.
impl<K: Kernel3> HullMesh<K> {
    pub fn vertex_count(&self) -> usize {
        self.vertices.iter().filter(|v| !v.removed).count()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().filter(|e| !e.removed).count()
    }

    pub fn face_count(&self) -> usize {
        self.faces.iter().filter(|f| !f.removed).count()
    }

    pub fn vertices(&self) -> impl Iterator<Item = (usize, &Vertex<K::FT>)> {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.removed)
    }

    pub fn edges(&self) -> impl Iterator<Item = (usize, &Edge)> {
        self.edges.iter().enumerate().filter(|(_, e)| !e.removed)
    }

    pub fn faces(&self) -> impl Iterator<Item = (usize, &Face)> {
        self.faces.iter().enumerate().filter(|(_, f)| !f.removed)
    }

    /// The face's vertex handles, wound outward.
    pub fn face_vertices(&self, f: usize) -> [usize; 3] {
        self.faces[f].vertices
    }

    pub fn vertex_position(&self, v: usize) -> &Point3<K::FT> {
        &self.vertices[v].position
    }

    pub fn edge_endpoints(&self, e: usize) -> [usize; 2] {
        self.edges[e].endpoints
    }

    pub fn edge_faces(&self, e: usize) -> [usize; 2] {
        self.edges[e].adj_faces
    }

    /// Live edges incident to vertex `v`.
    pub fn edges_around_vertex(&self, v: usize) -> SmallVec<[usize; 8]> {
        self.edges()
            .filter(|(_, e)| e.endpoints.contains(&v))
            .map(|(i, _)| i)
            .collect()
    }

    /// Live faces incident to vertex `v`.
    pub fn faces_around_vertex(&self, v: usize) -> SmallVec<[usize; 8]> {
        self.faces()
            .filter(|(_, f)| f.vertices.contains(&v))
            .map(|(i, _)| i)
            .collect()
    }

    /// Canonical signature of the live faces: each face's `vnum` triple,
    /// sorted. Two hulls of the same point set compare equal here whatever
    /// order the points were inserted in.
    pub fn face_signature_set(&self) -> AHashSet<[usize; 3]> {
        self.faces()
            .map(|(_, f)| {
                let mut key = [
                    self.vertices[f.vertices[0]].vnum,
                    self.vertices[f.vertices[1]].vnum,
                    self.vertices[f.vertices[2]].vnum,
                ];
                key.sort_unstable();
                key
            })
            .collect()
    }

    /// Reorders each live face's edge slots so `edges[i]` joins
    /// `vertices[i]` and `vertices[(i+1) % 3]`.
    ///
    /// Construction only guarantees the weaker endpoint-correspondence
    /// invariant; callers that walk a face boundary edge-by-edge want this
    /// canonical order.
    pub fn edge_order_on_faces(&mut self) {
        for f in 0..self.faces.len() {
            if self.faces[f].removed {
                continue;
            }
            for i in 0..3 {
                let want = [
                    self.faces[f].vertices[i],
                    self.faces[f].vertices[(i + 1) % 3],
                ];
                if self.edge_joins(self.faces[f].edges[i], want) {
                    continue;
                }
                for j in 0..3 {
                    if self.edge_joins(self.faces[f].edges[j], want) {
                        self.faces[f].edges.swap(i, j);
                        break;
                    }
                }
            }
        }
    }

    fn edge_joins(&self, e: usize, want: [usize; 2]) -> bool {
        let ends = self.edges[e].endpoints;
        ends == want || ends == [want[1], want[0]]
    }
}
