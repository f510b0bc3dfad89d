//! Geometry <-> mesh conversion.
//!
//! The forward transform flattens a geometry's primitive sets into one
//! triangle list and never fails: missing arrays and unsupported topologies
//! degrade to "omit and warn". The inverse transforms rebuild geometry
//! arrays from the mesh and install a single 16-bit-indexed triangle list,
//! failing loudly on indices the narrow storage cannot hold and on partial
//! triangles.

use log::warn;

use crate::error::{Error, Result};
use crate::scene::{AttributeArray, Binding, ElementIndices, Geometry, PrimitiveMode, PrimitiveSet};

use super::TriangleMesh;

impl TriangleMesh {
    /// Flatten a geometry into a triangle mesh.
    ///
    /// Attribute arrays are copied verbatim in source order; primitive sets
    /// are dispatched on topology, with triangle strips and fans expanded to
    /// plain triangles. Anything the mesh cannot represent is skipped with a
    /// warning: custom vertex attributes, texture channels past 0, and
    /// non-triangle topologies. Normals and colors bound other than
    /// per-vertex are copied unexpanded, also with a warning.
    pub fn from_geometry(geometry: &Geometry) -> TriangleMesh {
        let mut mesh = TriangleMesh::new();

        if let Some(vertices) = geometry.vertex_array().and_then(AttributeArray::as_vec3) {
            mesh.vertices.extend_from_slice(vertices);

            let attrib_count = geometry.vertex_attrib_arrays().len();
            if attrib_count > 0 {
                warn!("{attrib_count} custom vertex attribute array(s) present; not converted");
            }
        }

        if let Some(normals) = geometry.normal_array().and_then(AttributeArray::as_vec3) {
            mesh.normals.extend_from_slice(normals);

            if geometry.normal_binding() != Binding::PerVertex {
                warn!(
                    "normal array binding is {:?}, not per-vertex; values copied unexpanded",
                    geometry.normal_binding()
                );
            }
        }

        if let Some(colors) = geometry.color_array().and_then(AttributeArray::as_vec4) {
            mesh.colors.extend_from_slice(colors);

            if geometry.color_binding() != Binding::PerVertex {
                warn!(
                    "color array binding is {:?}, not per-vertex; values copied unexpanded",
                    geometry.color_binding()
                );
            }
        }

        if let Some(uvs) = geometry.tex_coord_array(0).and_then(AttributeArray::as_vec2) {
            mesh.uvs.extend_from_slice(uvs);

            let channels = geometry.tex_coord_array_count();
            if channels > 1 {
                warn!("{channels} texture coordinate channels present; only channel 0 is converted");
            }
        }

        for set in geometry.primitive_sets() {
            flatten_primitive_set(set, &mut mesh.indices);
        }

        mesh
    }

    /// Build a fresh geometry from this mesh.
    ///
    /// Non-empty attribute arrays are installed with the default binding;
    /// a non-empty index list becomes a single 16-bit-indexed triangle set.
    pub fn to_geometry(&self) -> Result<Geometry> {
        let elements = self.triangle_elements()?;
        let mut geometry = Geometry::new();
        self.install_arrays(&mut geometry, Binding::default(), Binding::default());
        if let Some(elements) = elements {
            geometry.add_primitive_set(PrimitiveSet::new(PrimitiveMode::Triangles, elements));
        }
        Ok(geometry)
    }

    /// Write this mesh back into an existing geometry in place.
    ///
    /// Normal and color arrays are re-installed tagged with the geometry's
    /// *current* binding, read before anything is overwritten, so a
    /// whole-array replace cannot silently reset per-primitive semantics.
    /// A non-empty index list replaces the entire primitive-set list with a
    /// single triangle set; strip and fan structure from the original
    /// geometry is not reconstructed.
    ///
    /// On error the geometry is left untouched.
    pub fn apply_to(&self, geometry: &mut Geometry) -> Result<()> {
        // validate the index list before the first mutation
        let elements = self.triangle_elements()?;

        // read-before-write: capture the bindings the overwrite must keep
        let normal_binding = geometry.normal_binding();
        let color_binding = geometry.color_binding();

        self.install_arrays(geometry, normal_binding, color_binding);

        if let Some(elements) = elements {
            geometry.clear_primitive_sets();
            geometry.add_primitive_set(PrimitiveSet::new(PrimitiveMode::Triangles, elements));
        }
        Ok(())
    }

    /// Narrow the index list to 16-bit element storage, or report why not.
    /// Returns `None` for an empty list.
    fn triangle_elements(&self) -> Result<Option<ElementIndices>> {
        if self.indices.is_empty() {
            return Ok(None);
        }
        if self.indices.len() % 3 != 0 {
            return Err(Error::PartialTriangle {
                len: self.indices.len(),
            });
        }

        let mut elements = Vec::with_capacity(self.indices.len());
        for &index in &self.indices {
            let narrow =
                u16::try_from(index).map_err(|_| Error::IndexOverflow { index })?;
            elements.push(narrow);
        }
        Ok(Some(ElementIndices::U16(elements)))
    }

    fn install_arrays(
        &self,
        geometry: &mut Geometry,
        normal_binding: Binding,
        color_binding: Binding,
    ) {
        if !self.vertices.is_empty() {
            geometry.set_vertex_array(self.vertices.clone());
        }
        if !self.normals.is_empty() {
            geometry.set_normal_array_with_binding(self.normals.clone(), normal_binding);
        }
        if !self.colors.is_empty() {
            geometry.set_color_array_with_binding(self.colors.clone(), color_binding);
        }
        if !self.uvs.is_empty() {
            geometry.set_tex_coord_array(0, self.uvs.clone());
        }
    }
}

/// Append the triangles one primitive set describes to a flat index list.
fn flatten_primitive_set(set: &PrimitiveSet, indices: &mut Vec<u32>) {
    let n = set.num_indices();

    match set.mode() {
        PrimitiveMode::Triangles => {
            indices.extend(set.iter());
        }
        PrimitiveMode::TriangleStrip => {
            // a strip of N indices holds N-2 triangles; odd steps swap the
            // trailing pair so winding stays consistent across the strip
            for i in 0..n.saturating_sub(2) {
                if i % 2 == 0 {
                    indices.push(set.index(i));
                    indices.push(set.index(i + 1));
                    indices.push(set.index(i + 2));
                } else {
                    indices.push(set.index(i));
                    indices.push(set.index(i + 2));
                    indices.push(set.index(i + 1));
                }
            }
        }
        PrimitiveMode::TriangleFan => {
            // apex at position 0 shared by every triangle
            for k in 1..n.saturating_sub(1) {
                indices.push(set.index(0));
                indices.push(set.index(k));
                indices.push(set.index(k + 1));
            }
        }
        mode => {
            warn!("unsupported primitive mode {mode:?} ({n} indices); set skipped");
        }
    }
}
