//! Geometry: attribute arrays, binding modes, and primitive sets.
//!
//! A [`Geometry`] bundles optional vertex/normal/color/texture-coordinate
//! arrays with an ordered list of [`PrimitiveSet`]s. Attribute arrays are
//! typed at runtime ([`AttributeArray`]); consumers ask for the element type
//! they understand and an array of any other shape is simply not visible to
//! them.

use cgmath::{Vector2, Vector3, Vector4};

use super::primitive::PrimitiveSet;

/// How an attribute array maps onto the geometry it is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Binding {
    /// Array carries no data for this geometry
    Off,
    /// One value for the whole geometry
    Overall,
    /// One value per primitive set
    PerPrimitiveSet,
    /// One value per vertex
    #[default]
    PerVertex,
}

/// A runtime-typed attribute array.
///
/// All values are double precision; conversions copy bit-for-bit.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeArray {
    Vec2(Vec<Vector2<f64>>),
    Vec3(Vec<Vector3<f64>>),
    Vec4(Vec<Vector4<f64>>),
}

impl AttributeArray {
    pub fn len(&self) -> usize {
        match self {
            AttributeArray::Vec2(v) => v.len(),
            AttributeArray::Vec3(v) => v.len(),
            AttributeArray::Vec4(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow as 2D points, if that is the element type
    pub fn as_vec2(&self) -> Option<&[Vector2<f64>]> {
        match self {
            AttributeArray::Vec2(v) => Some(v),
            _ => None,
        }
    }

    /// Borrow as 3D points/vectors, if that is the element type
    pub fn as_vec3(&self) -> Option<&[Vector3<f64>]> {
        match self {
            AttributeArray::Vec3(v) => Some(v),
            _ => None,
        }
    }

    /// Borrow as RGBA values, if that is the element type
    pub fn as_vec4(&self) -> Option<&[Vector4<f64>]> {
        match self {
            AttributeArray::Vec4(v) => Some(v),
            _ => None,
        }
    }
}

impl From<Vec<Vector2<f64>>> for AttributeArray {
    fn from(v: Vec<Vector2<f64>>) -> Self {
        AttributeArray::Vec2(v)
    }
}

impl From<Vec<Vector3<f64>>> for AttributeArray {
    fn from(v: Vec<Vector3<f64>>) -> Self {
        AttributeArray::Vec3(v)
    }
}

impl From<Vec<Vector4<f64>>> for AttributeArray {
    fn from(v: Vec<Vector4<f64>>) -> Self {
        AttributeArray::Vec4(v)
    }
}

/// Scene-graph geometry: attribute arrays plus primitive sets
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometry {
    vertex_array: Option<AttributeArray>,
    normal_array: Option<AttributeArray>,
    normal_binding: Binding,
    color_array: Option<AttributeArray>,
    color_binding: Binding,
    // texture-coordinate channels, sparse
    tex_coord_arrays: Vec<Option<AttributeArray>>,
    // custom per-vertex attributes, carried but never converted
    vertex_attrib_arrays: Vec<(String, AttributeArray)>,
    primitive_sets: Vec<PrimitiveSet>,
}

impl Geometry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_array(&self) -> Option<&AttributeArray> {
        self.vertex_array.as_ref()
    }

    pub fn set_vertex_array(&mut self, array: impl Into<AttributeArray>) {
        self.vertex_array = Some(array.into());
    }

    pub fn normal_array(&self) -> Option<&AttributeArray> {
        self.normal_array.as_ref()
    }

    pub fn normal_binding(&self) -> Binding {
        self.normal_binding
    }

    /// Install a normal array with the default binding
    pub fn set_normal_array(&mut self, array: impl Into<AttributeArray>) {
        self.set_normal_array_with_binding(array, Binding::default());
    }

    pub fn set_normal_array_with_binding(
        &mut self,
        array: impl Into<AttributeArray>,
        binding: Binding,
    ) {
        self.normal_array = Some(array.into());
        self.normal_binding = binding;
    }

    pub fn color_array(&self) -> Option<&AttributeArray> {
        self.color_array.as_ref()
    }

    pub fn color_binding(&self) -> Binding {
        self.color_binding
    }

    /// Install a color array with the default binding
    pub fn set_color_array(&mut self, array: impl Into<AttributeArray>) {
        self.set_color_array_with_binding(array, Binding::default());
    }

    pub fn set_color_array_with_binding(
        &mut self,
        array: impl Into<AttributeArray>,
        binding: Binding,
    ) {
        self.color_array = Some(array.into());
        self.color_binding = binding;
    }

    /// Texture-coordinate array for one channel
    pub fn tex_coord_array(&self, channel: usize) -> Option<&AttributeArray> {
        self.tex_coord_arrays.get(channel).and_then(Option::as_ref)
    }

    pub fn set_tex_coord_array(&mut self, channel: usize, array: impl Into<AttributeArray>) {
        if self.tex_coord_arrays.len() <= channel {
            self.tex_coord_arrays.resize_with(channel + 1, || None);
        }
        self.tex_coord_arrays[channel] = Some(array.into());
    }

    /// Number of texture-coordinate channels present (populated slots)
    pub fn tex_coord_array_count(&self) -> usize {
        self.tex_coord_arrays.iter().flatten().count()
    }

    /// Custom per-vertex attribute arrays, by name
    pub fn vertex_attrib_arrays(&self) -> &[(String, AttributeArray)] {
        &self.vertex_attrib_arrays
    }

    pub fn add_vertex_attrib_array(&mut self, name: impl Into<String>, array: impl Into<AttributeArray>) {
        self.vertex_attrib_arrays.push((name.into(), array.into()));
    }

    pub fn primitive_sets(&self) -> &[PrimitiveSet] {
        &self.primitive_sets
    }

    pub fn add_primitive_set(&mut self, set: PrimitiveSet) {
        self.primitive_sets.push(set);
    }

    pub fn clear_primitive_sets(&mut self) {
        self.primitive_sets.clear();
    }

    /// Number of vertices, zero when no recognized vertex array is installed
    pub fn vertex_count(&self) -> usize {
        self.vertex_array
            .as_ref()
            .and_then(AttributeArray::as_vec3)
            .map_or(0, |v| v.len())
    }
}
