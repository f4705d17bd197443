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

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use num_traits::ToPrimitive;

use crate::kernel::kernel::Kernel3;
use crate::mesh::hull::HullMesh;

/// Writes the live hull mesh as a Wavefront OBJ file.
///
/// Vertices are emitted in input order; faces reference them 1-based, wound
/// outward. Tombstoned elements are skipped, so the file is dense even when
/// interior input points were absorbed.
pub fn write_obj<K: Kernel3, P: AsRef<Path>>(mesh: &HullMesh<K>, path: P) -> io::Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);

    // map arena index -> 1-based OBJ index over live vertices only
    let mut obj_index = vec![0usize; mesh.vertices.len()];
    let mut next = 0usize;
    for (i, v) in mesh.vertices() {
        next += 1;
        obj_index[i] = next;
        writeln!(
            out,
            "v {} {} {}",
            v.position.x.to_f64().unwrap(),
            v.position.y.to_f64().unwrap(),
            v.position.z.to_f64().unwrap()
        )?;
    }

    for (_, f) in mesh.faces() {
        writeln!(
            out,
            "f {} {} {}",
            obj_index[f.vertices[0]],
            obj_index[f.vertices[1]],
            obj_index[f.vertices[2]]
        )?;
    }

    out.flush()
}
