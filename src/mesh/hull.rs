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

use std::marker::PhantomData;

use crate::error::HullError;
use crate::geometry::Point3;
use crate::kernel::kernel::Kernel3;
use crate::mesh::basic_types::{Edge, Face, Vertex};

/// Incremental 3D convex hull over a vertex/edge/face arena.
///
/// Construction seeds a tetrahedron from the first four points in general
/// position, then folds in every remaining point one at a time: faces the
/// point can see are discarded, and the hole is re-covered by a fan of cone
/// faces over the horizon edges. After every step the live elements form a
/// closed, convex, outward-wound triangulated polytope.
#[derive(Debug)]
pub struct HullMesh<K: Kernel3> {
    pub(crate) vertices: Vec<Vertex<K::FT>>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) faces: Vec<Face>,
    _kernel: PhantomData<K>,
}

impl<K: Kernel3> Default for HullMesh<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Kernel3> HullMesh<K> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            faces: Vec::new(),
            _kernel: PhantomData,
        }
    }

    /// Adds an input point. Call before [`construct`](Self::construct);
    /// returns the vertex handle (equal to its input-order number).
    pub fn add_vertex(&mut self, position: Point3<K::FT>) -> usize {
        let vnum = self.vertices.len();
        self.vertices.push(Vertex::new(position, vnum));
        vnum
    }

    /// Builds the hull of `points` in one call.
    pub fn from_points<I>(points: I) -> Result<Self, HullError>
    where
        I: IntoIterator<Item = Point3<K::FT>>,
    {
        let mut mesh = Self::new();
        for p in points {
            mesh.add_vertex(p);
        }
        mesh.construct()?;
        Ok(mesh)
    }

    /// Runs hull construction over the added vertices.
    ///
    /// On degenerate input (fewer than 4 points, all collinear, or all
    /// coplanar) the error is terminal: no partial hull is produced.
    pub fn construct(&mut self) -> Result<(), HullError> {
        let start = self.init_tetrahedron()?;

        // One pass over the arena in input order, starting at the fourth
        // seed vertex and wrapping. Cleanup may tombstone vertices ahead of
        // the cursor; the `removed` check skips them.
        let n = self.vertices.len();
        for i in (start..n).chain(0..start) {
            if self.vertices[i].removed || self.vertices[i].processed {
                continue;
            }
            self.vertices[i].processed = true;
            self.insert_point(i);
            self.clean_up();
        }
        Ok(())
    }

    /// Finds the seed tetrahedron: the first non-collinear consecutive
    /// triple of input points, made into two opposite-wound faces sharing
    /// three edges, plus the first point off their plane.
    ///
    /// Returns the index of that fourth point. It is left unprocessed on
    /// purpose: the driver inserts it through the regular path, which grows
    /// the double triangle into a tetrahedron with three cone faces.
    fn init_tetrahedron(&mut self) -> Result<usize, HullError> {
        let n = self.vertices.len();
        if n < 4 {
            return Err(HullError::InsufficientPoints(n));
        }

        let mut i0 = 0;
        while K::are_collinear(
            &self.vertices[i0].position,
            &self.vertices[(i0 + 1) % n].position,
            &self.vertices[(i0 + 2) % n].position,
        ) {
            i0 += 1;
            if i0 == n {
                return Err(HullError::AllCollinear);
            }
        }
        let v0 = i0;
        let v1 = (i0 + 1) % n;
        let v2 = (i0 + 2) % n;

        self.vertices[v0].processed = true;
        self.vertices[v1].processed = true;
        self.vertices[v2].processed = true;

        // Two coincident faces with opposite winding; the second reuses the
        // first one's edges, so each edge ends up adjacent to both.
        let f0 = self.make_face(v0, v1, v2, None);
        self.make_face(v2, v1, v0, Some(f0));

        let mut v3 = (v2 + 1) % n;
        while self.face_volume_sign(f0, v3) == 0 {
            v3 = (v3 + 1) % n;
            if v3 == v0 {
                return Err(HullError::AllCoplanar);
            }
        }
        Ok(v3)
    }

    /// Signed-volume classification of vertex `p` against face `f`.
    pub(crate) fn face_volume_sign(&self, f: usize, p: usize) -> i8 {
        let [a, b, c] = self.faces[f].vertices;
        K::volume_sign(
            &self.vertices[a].position,
            &self.vertices[b].position,
            &self.vertices[c].position,
            &self.vertices[p].position,
        )
    }

    /// Folds vertex `p` into the hull.
    ///
    /// Marks every face visible from `p`, then walks the edges that existed
    /// when the pass began: an edge inside the visible region is marked for
    /// deletion, an edge on the horizon gets a cone face to `p` staged in
    /// its `new_face` slot. Returns false when no face is visible: `p` is
    /// interior and contributes nothing.
    fn insert_point(&mut self, p: usize) -> bool {
        let mut any_visible = false;
        for f in 0..self.faces.len() {
            if self.faces[f].removed {
                continue;
            }
            if self.face_volume_sign(f, p) < 0 {
                self.faces[f].visible = true;
                any_visible = true;
            }
        }

        if !any_visible {
            self.vertices[p].on_hull = false;
            return false;
        }

        // Cone edges appended below must not be revisited by this walk;
        // only edges present at pass start can border the visible region.
        let pass_edges = self.edges.len();
        for e in 0..pass_edges {
            if self.edges[e].removed {
                continue;
            }
            let [fa, fb] = self.edges[e].adj_faces;
            let visible_a = self.faces[fa].visible;
            let visible_b = self.faces[fb].visible;
            if visible_a && visible_b {
                self.edges[e].to_delete = true;
            } else if visible_a || visible_b {
                let cone = self.make_cone_face(e, p);
                self.edges[e].new_face = Some(cone);
            }
        }
        true
    }

    /// Builds the triangle joining horizon edge `e` to the apex `p`.
    ///
    /// The two edges from the endpoints of `e` up to `p` are shared with the
    /// neighboring cone faces of the fan; the `duplicate` slot on each
    /// endpoint hands an already-created edge to the next face over.
    fn make_cone_face(&mut self, e: usize, p: usize) -> usize {
        let mut cone_edges = [usize::MAX; 2];
        for i in 0..2 {
            let endpoint = self.edges[e].endpoints[i];
            cone_edges[i] = match self.vertices[endpoint].duplicate {
                Some(existing) => existing,
                None => {
                    let ne = self.make_null_edge();
                    self.edges[ne].endpoints = [endpoint, p];
                    self.vertices[endpoint].duplicate = Some(ne);
                    ne
                }
            };
        }

        let f = self.make_null_face();
        self.faces[f].edges = [e, cone_edges[0], cone_edges[1]];
        self.orient_cone_face(f, e, p);

        // Each cone edge picks up the new face in its first empty slot;
        // its second slot is filled when the adjacent fan face is built.
        for &ce in &cone_edges {
            for slot in 0..2 {
                if self.edges[ce].adj_faces[slot] == usize::MAX {
                    self.edges[ce].adj_faces[slot] = f;
                    break;
                }
            }
        }
        f
    }

    /// Winds cone face `f` to match the mesh.
    ///
    /// The surviving neighbor of the horizon edge is the face being
    /// replaced, so the new face repeats the endpoint order found there and
    /// appends the apex third. When the edge reads forward on that face,
    /// the two cone-edge slots are swapped to keep the invariant that
    /// `edges[i]` touches `vertices[i]`.
    fn orient_cone_face(&mut self, f: usize, e: usize, p: usize) {
        let [fa, fb] = self.edges[e].adj_faces;
        let fv = if self.faces[fa].visible { fa } else { fb };

        let [end0, end1] = self.edges[e].endpoints;
        let verts = self.faces[fv].vertices;
        let i = (0..3)
            .find(|&i| verts[i] == end0)
            .expect("horizon edge endpoint missing from adjacent face");

        if verts[(i + 1) % 3] != end1 {
            self.faces[f].vertices[0] = end1;
            self.faces[f].vertices[1] = end0;
        } else {
            self.faces[f].vertices[0] = end0;
            self.faces[f].vertices[1] = end1;
            self.faces[f].edges.swap(1, 2);
        }
        self.faces[f].vertices[2] = p;
    }

    /// Post-insertion sweep. Order matters: edge adjacency is patched
    /// first, faces are dropped second, vertex liveness is derived from
    /// the surviving edges last.
    fn clean_up(&mut self) {
        self.clean_edges();
        self.clean_faces();
        self.clean_vertices();
    }

    /// Installs staged cone faces into the adjacency slot whose face is
    /// about to be dropped, then tombstones edges interior to the visible
    /// region.
    fn clean_edges(&mut self) {
        for e in 0..self.edges.len() {
            if self.edges[e].removed {
                continue;
            }
            if let Some(cone) = self.edges[e].new_face.take() {
                let slot = if self.faces[self.edges[e].adj_faces[0]].visible {
                    0
                } else {
                    1
                };
                self.edges[e].adj_faces[slot] = cone;
            }
            if self.edges[e].to_delete {
                self.edges[e].removed = true;
            }
        }
    }

    /// Tombstones faces that were visible from the inserted point; their
    /// replacements are already linked in.
    fn clean_faces(&mut self) {
        for f in 0..self.faces.len() {
            if !self.faces[f].removed && self.faces[f].visible {
                self.faces[f].removed = true;
            }
        }
    }

    /// Derives vertex liveness from the surviving edges: processed vertices
    /// no longer touched by any edge were swallowed by the hull volume and
    /// are tombstoned. Survivors have their per-pass scratch reset.
    fn clean_vertices(&mut self) {
        for e in 0..self.edges.len() {
            if self.edges[e].removed {
                continue;
            }
            let [a, b] = self.edges[e].endpoints;
            self.vertices[a].on_hull = true;
            self.vertices[b].on_hull = true;
        }

        for v in self.vertices.iter_mut() {
            if v.removed {
                continue;
            }
            if v.processed && !v.on_hull {
                v.removed = true;
            } else {
                v.duplicate = None;
                v.on_hull = false;
            }
        }
    }

    fn make_null_edge(&mut self) -> usize {
        let e = self.edges.len();
        self.edges.push(Edge::null());
        e
    }

    fn make_null_face(&mut self) -> usize {
        let f = self.faces.len();
        self.faces.push(Face::null());
        f
    }

    /// Triangle face from three vertices in ccw order. With `reuse`, the
    /// edges of that face are taken over in reverse instead of creating new
    /// ones (seeding only: the twin face shares all three edges).
    fn make_face(&mut self, v0: usize, v1: usize, v2: usize, reuse: Option<usize>) -> usize {
        let [e0, e1, e2] = match reuse {
            None => [
                self.make_null_edge(),
                self.make_null_edge(),
                self.make_null_edge(),
            ],
            Some(twin) => {
                let edges = self.faces[twin].edges;
                [edges[2], edges[1], edges[0]]
            }
        };
        self.edges[e0].endpoints = [v0, v1];
        self.edges[e1].endpoints = [v1, v2];
        self.edges[e2].endpoints = [v2, v0];

        let f = self.make_null_face();
        self.faces[f].vertices = [v0, v1, v2];
        self.faces[f].edges = [e0, e1, e2];

        for &e in &[e0, e1, e2] {
            let slot = if self.edges[e].adj_faces[0] == usize::MAX {
                0
            } else {
                1
            };
            self.edges[e].adj_faces[slot] = f;
        }
        f
    }
}
