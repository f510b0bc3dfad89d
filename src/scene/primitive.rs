//! Primitive sets: a topology tag plus an ordered index sequence describing
//! how vertices combine into drawable shapes.

/// Drawing topology of a primitive set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveMode {
    Points,
    Lines,
    LineStrip,
    LineLoop,
    Triangles,
    TriangleStrip,
    TriangleFan,
    Quads,
    QuadStrip,
    Polygon,
    LinesAdjacency,
    LineStripAdjacency,
    TrianglesAdjacency,
    TriangleStripAdjacency,
    Patches,
}

/// Index storage of a primitive set.
///
/// The element width is part of the set itself: file loaders produce wide
/// `U32` elements, while the mesh reconstruction path installs narrow `U16`
/// elements and refuses indices that do not fit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementIndices {
    U16(Vec<u16>),
    U32(Vec<u32>),
}

impl ElementIndices {
    pub fn len(&self) -> usize {
        match self {
            ElementIndices::U16(v) => v.len(),
            ElementIndices::U32(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index value at position `i`, widened to u32
    pub fn get(&self, i: usize) -> u32 {
        match self {
            ElementIndices::U16(v) => u32::from(v[i]),
            ElementIndices::U32(v) => v[i],
        }
    }

    /// Iterate all index values, widened to u32
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.len()).map(move |i| self.get(i))
    }
}

impl From<Vec<u16>> for ElementIndices {
    fn from(v: Vec<u16>) -> Self {
        ElementIndices::U16(v)
    }
}

impl From<Vec<u32>> for ElementIndices {
    fn from(v: Vec<u32>) -> Self {
        ElementIndices::U32(v)
    }
}

/// One topology tag plus the indices it draws
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveSet {
    mode: PrimitiveMode,
    indices: ElementIndices,
}

impl PrimitiveSet {
    pub fn new(mode: PrimitiveMode, indices: impl Into<ElementIndices>) -> Self {
        Self {
            mode,
            indices: indices.into(),
        }
    }

    pub fn mode(&self) -> PrimitiveMode {
        self.mode
    }

    pub fn indices(&self) -> &ElementIndices {
        &self.indices
    }

    /// Number of index entries in this set
    pub fn num_indices(&self) -> usize {
        self.indices.len()
    }

    /// Index value at position `i`, widened to u32
    pub fn index(&self, i: usize) -> u32 {
        self.indices.get(i)
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.indices.iter()
    }

    /// Number of triangles this set describes once flattened.
    ///
    /// Strips and fans of N indices yield N-2 triangles; non-triangle
    /// topologies yield none.
    pub fn triangle_count(&self) -> usize {
        let n = self.num_indices();
        match self.mode {
            PrimitiveMode::Triangles => n / 3,
            PrimitiveMode::TriangleStrip | PrimitiveMode::TriangleFan => n.saturating_sub(2),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_widening() {
        let narrow = PrimitiveSet::new(PrimitiveMode::Triangles, vec![0u16, 1, 2]);
        let wide = PrimitiveSet::new(PrimitiveMode::Triangles, vec![0u32, 1, 2]);

        assert_eq!(narrow.iter().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(wide.iter().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(narrow.index(2), 2);
    }

    #[test]
    fn test_triangle_count_per_mode() {
        let strip = PrimitiveSet::new(PrimitiveMode::TriangleStrip, vec![0u32, 1, 2, 3, 4]);
        assert_eq!(strip.triangle_count(), 3);

        let fan = PrimitiveSet::new(PrimitiveMode::TriangleFan, vec![0u32, 1, 2, 3]);
        assert_eq!(fan.triangle_count(), 2);

        let tris = PrimitiveSet::new(PrimitiveMode::Triangles, vec![0u32, 1, 2, 0, 2, 3]);
        assert_eq!(tris.triangle_count(), 2);

        let lines = PrimitiveSet::new(PrimitiveMode::Lines, vec![0u32, 1, 2, 3]);
        assert_eq!(lines.triangle_count(), 0);
    }

    #[test]
    fn test_degenerate_strip_count() {
        let strip = PrimitiveSet::new(PrimitiveMode::TriangleStrip, vec![0u32, 1]);
        assert_eq!(strip.triangle_count(), 0);
    }
}
