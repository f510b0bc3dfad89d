//! # Flat indexed triangle meshes
//!
//! [`TriangleMesh`] is the crate's triangles-only intermediate
//! representation: separate position/normal/color/UV arrays plus one flat
//! index list where every three consecutive entries form a triangle.
//!
//! A mesh is created fresh from one [`Geometry`](crate::scene::Geometry) by
//! [`TriangleMesh::from_geometry`], optionally exported as OBJ text, and
//! optionally written back into a geometry by [`TriangleMesh::to_geometry`]
//! or [`TriangleMesh::apply_to`]. It owns full copies of its data and never
//! aliases the source arrays.

mod convert;
mod obj;

use cgmath::{InnerSpace, Vector2, Vector3, Vector4, Zero};

/// A flat, indexed, triangles-only mesh
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    /// Vertex positions; duplicates from the source are kept as-is
    pub vertices: Vec<Vector3<f64>>,
    /// Normal vectors. Not guaranteed to match `vertices` in length: the
    /// source binding may be per-primitive-set or overall, and the values
    /// are carried verbatim either way
    pub normals: Vec<Vector3<f64>>,
    /// RGBA colors, with the same length caveat as `normals`
    pub colors: Vec<Vector4<f64>>,
    /// Texture coordinates from channel 0 only
    pub uvs: Vec<Vector2<f64>>,
    /// Triangle indices, three consecutive entries per triangle in winding
    /// order
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.indices.is_empty()
    }

    /// Replace `normals` with per-vertex normals computed from the triangle
    /// list: face normals accumulated per vertex, then normalized.
    ///
    /// Larger triangles contribute proportionally more because the
    /// unnormalized cross product carries the face area.
    ///
    /// Index values must be in range for `vertices`.
    pub fn compute_vertex_normals(&mut self) {
        let mut normals = vec![Vector3::zero(); self.vertices.len()];

        for triangle in self.indices.chunks_exact(3) {
            let i0 = triangle[0] as usize;
            let i1 = triangle[1] as usize;
            let i2 = triangle[2] as usize;

            let v0 = self.vertices[i0];
            let v1 = self.vertices[i1];
            let v2 = self.vertices[i2];

            let face_normal = (v1 - v0).cross(v2 - v0);

            normals[i0] += face_normal;
            normals[i1] += face_normal;
            normals[i2] += face_normal;
        }

        for normal in &mut normals {
            if !normal.is_zero() {
                *normal = normal.normalize();
            }
        }

        self.normals = normals;
    }
}
