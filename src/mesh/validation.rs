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

//! Topological and geometric validation of a finished hull.
//!
//! A broken invariant here is a logic defect, never an expected input
//! condition; [`HullMesh::assert_valid`] fails loudly. [`validate`] itself
//! only reads the mesh, so running it any number of times is safe.

use std::fmt;

use ahash::AHashSet;

use crate::kernel::kernel::Kernel3;
use crate::mesh::hull::HullMesh;

/// Outcome of every invariant check over the live mesh elements.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub vertices: usize,
    pub edges: usize,
    pub faces: usize,

    /// V - E + F = 2.
    pub euler_ok: bool,
    /// F = 2V - 4 (all faces are triangles).
    pub face_relation_ok: bool,
    /// 2E = 3F (all faces are triangles).
    pub edge_relation_ok: bool,

    /// Every edge's two adjacent faces traverse it in opposite order, so
    /// the whole mesh is consistently outward-wound.
    pub consistent_winding: bool,
    /// No live vertex is strictly outside any live face.
    pub convex: bool,
    /// For each face and each i, `vertices[i]` is an endpoint of `edges[i]`.
    pub endpoint_links_ok: bool,
    /// Faces have three distinct, non-collinear vertices and no two faces
    /// share a vertex triple.
    pub faces_nondegenerate: bool,
    /// Every live vertex is referenced by at least one live edge and face.
    pub no_orphan_vertices: bool,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.euler_ok
            && self.face_relation_ok
            && self.edge_relation_ok
            && self.consistent_winding
            && self.convex
            && self.endpoint_links_ok
            && self.faces_nondegenerate
            && self.no_orphan_vertices
    }

    /// Short description of whatever failed.
    pub fn summary(&self) -> String {
        if self.is_valid() {
            return "valid".to_string();
        }
        let mut issues = Vec::new();
        if !self.euler_ok {
            issues.push("V-E+F != 2".to_string());
        }
        if !self.face_relation_ok {
            issues.push(format!(
                "F={} != 2V-4={}",
                self.faces,
                2 * self.vertices as i64 - 4
            ));
        }
        if !self.edge_relation_ok {
            issues.push(format!("2E={} != 3F={}", 2 * self.edges, 3 * self.faces));
        }
        if !self.consistent_winding {
            issues.push("inconsistent winding".to_string());
        }
        if !self.convex {
            issues.push("not convex".to_string());
        }
        if !self.endpoint_links_ok {
            issues.push("face/edge endpoint mismatch".to_string());
        }
        if !self.faces_nondegenerate {
            issues.push("degenerate or duplicate faces".to_string());
        }
        if !self.no_orphan_vertices {
            issues.push("orphan vertices".to_string());
        }
        issues.join(", ")
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ValidationReport {{ V={}, E={}, F={}, {} }}",
            self.vertices,
            self.edges,
            self.faces,
            self.summary()
        )
    }
}

/// Checks every hull invariant over the live elements of `mesh`.
pub fn validate<K: Kernel3>(mesh: &HullMesh<K>) -> ValidationReport {
    let vertices = mesh.vertex_count();
    let edges = mesh.edge_count();
    let faces = mesh.face_count();

    let euler_ok = vertices as i64 - edges as i64 + faces as i64 == 2;
    let face_relation_ok = faces as i64 == 2 * vertices as i64 - 4;
    let edge_relation_ok = 2 * edges == 3 * faces;

    ValidationReport {
        vertices,
        edges,
        faces,
        euler_ok,
        face_relation_ok,
        edge_relation_ok,
        consistent_winding: consistent_winding(mesh),
        convex: convex(mesh),
        endpoint_links_ok: endpoint_links_ok(mesh),
        faces_nondegenerate: faces_nondegenerate(mesh),
        no_orphan_vertices: no_orphan_vertices(mesh),
    }
}

/// For each edge, the shared endpoint's successor on one adjacent face must
/// be its predecessor on the other.
fn consistent_winding<K: Kernel3>(mesh: &HullMesh<K>) -> bool {
    for (_, edge) in mesh.edges() {
        let [fa, fb] = edge.adj_faces;
        let va = mesh.face_vertices(fa);
        let vb = mesh.face_vertices(fb);

        let Some(i) = (0..3).find(|&i| va[i] == edge.endpoints[0]) else {
            return false;
        };
        let Some(j) = (0..3).find(|&j| vb[j] == edge.endpoints[0]) else {
            return false;
        };

        if va[(i + 1) % 3] != vb[(j + 2) % 3] && va[(i + 2) % 3] != vb[(j + 1) % 3] {
            return false;
        }
    }
    true
}

/// Convexity is exactly "no vertex is strictly outside any face".
fn convex<K: Kernel3>(mesh: &HullMesh<K>) -> bool {
    for (f, _) in mesh.faces() {
        for (v, vert) in mesh.vertices() {
            if !vert.processed {
                continue;
            }
            if mesh.face_volume_sign(f, v) < 0 {
                return false;
            }
        }
    }
    true
}

fn endpoint_links_ok<K: Kernel3>(mesh: &HullMesh<K>) -> bool {
    for (_, face) in mesh.faces() {
        for i in 0..3 {
            if !mesh
                .edge_endpoints(face.edges[i])
                .contains(&face.vertices[i])
            {
                return false;
            }
        }
    }
    true
}

fn faces_nondegenerate<K: Kernel3>(mesh: &HullMesh<K>) -> bool {
    let mut signatures: AHashSet<[usize; 3]> = AHashSet::new();
    for (_, face) in mesh.faces() {
        let [a, b, c] = face.vertices;
        if a == b || b == c || a == c {
            return false;
        }
        if K::are_collinear(
            &mesh.vertices[a].position,
            &mesh.vertices[b].position,
            &mesh.vertices[c].position,
        ) {
            return false;
        }
        let mut key = [a, b, c];
        key.sort_unstable();
        if !signatures.insert(key) {
            return false;
        }
    }
    true
}

fn no_orphan_vertices<K: Kernel3>(mesh: &HullMesh<K>) -> bool {
    for (v, _) in mesh.vertices() {
        let mut in_edge = false;
        for (_, edge) in mesh.edges() {
            if edge.endpoints.contains(&v) {
                in_edge = true;
                break;
            }
        }
        if !in_edge {
            return false;
        }
        let mut in_face = false;
        for (_, face) in mesh.faces() {
            if face.vertices.contains(&v) {
                in_face = true;
                break;
            }
        }
        if !in_face {
            return false;
        }
    }
    true
}

impl<K: Kernel3> HullMesh<K> {
    /// Asserts every invariant of a finished hull; panics on the first
    /// violation. Intended for tests and debugging sweeps.
    pub fn assert_valid(&self) {
        let report = validate(self);
        assert!(report.is_valid(), "hull invariants broken: {}", report);
    }
}
