//! OBJ text export for a single mesh.
//!
//! Only `v` and `f` records are emitted: positions in order, then one face
//! per index triple with 1-based indices. Normals, colors, and UVs are not
//! persisted by this exporter.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::TriangleMesh;

impl TriangleMesh {
    /// Write this mesh as OBJ text.
    ///
    /// A trailing partial index triple, if present, is not written; the
    /// format has no way to express it.
    pub fn write_obj<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for v in &self.vertices {
            writeln!(out, "v {} {} {}", v.x, v.y, v.z)?;
        }

        for triangle in self.indices.chunks_exact(3) {
            writeln!(
                out,
                "f {} {} {}",
                triangle[0] + 1,
                triangle[1] + 1,
                triangle[2] + 1
            )?;
        }

        Ok(())
    }

    /// Write this mesh to an OBJ file at `path`
    pub fn export_obj<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        self.write_obj(&mut out)?;
        out.flush()
    }
}
