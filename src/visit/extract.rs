//! Mesh extraction walk: convert every geometry, optionally export each as
//! OBJ, then write the converted mesh back in place.

use std::path::PathBuf;

use log::info;

use crate::error::Result;
use crate::mesh::TriangleMesh;
use crate::scene::{Geometry, Node};

/// Totals from one [`MeshVisitor`] walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeshVisitStats {
    /// Geometries processed
    pub geometries: usize,
    /// Triangles produced by the forward conversions
    pub triangles: usize,
    /// OBJ files written
    pub exported: usize,
}

/// Walks a node tree and runs each geometry through the converter.
///
/// Every geometry is flattened to a [`TriangleMesh`] and then written back
/// into the same geometry in place, preserving its attribute bindings. With
/// an export directory set, each mesh is additionally saved as
/// `<dir>/<n>.obj`, numbered in visit order.
///
/// Converter diagnostics never stop the walk; reconstruction errors
/// (oversized indices, partial triangles) do.
#[derive(Debug, Default)]
pub struct MeshVisitor {
    export_dir: Option<PathBuf>,
    counter: usize,
    stats: MeshVisitStats,
}

impl MeshVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Export each converted mesh as a numbered OBJ file under `dir`
    pub fn with_export_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            export_dir: Some(dir.into()),
            ..Self::default()
        }
    }

    pub fn visit(&mut self, node: &mut Node) -> Result<()> {
        match node {
            Node::Group(group) => {
                for child in &mut group.children {
                    self.visit(child)?;
                }
            }
            Node::Shape(shape) => {
                for geometry in &mut shape.geometries {
                    self.process(geometry)?;
                }
            }
        }
        Ok(())
    }

    /// Totals so far
    pub fn stats(&self) -> MeshVisitStats {
        self.stats
    }

    fn process(&mut self, geometry: &mut Geometry) -> Result<()> {
        let mesh = TriangleMesh::from_geometry(geometry);
        let ordinal = self.counter;
        self.counter += 1;

        if let Some(dir) = &self.export_dir {
            let path = dir.join(format!("{ordinal}.obj"));
            mesh.export_obj(&path)?;
            info!("exported {}", path.display());
            self.stats.exported += 1;
        }

        self.stats.geometries += 1;
        self.stats.triangles += mesh.triangle_count();

        mesh.apply_to(geometry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{shapes, ElementIndices, GroupNode, PrimitiveMode};

    fn sample_tree() -> Node {
        let mut root = GroupNode::new("root");
        root.add_child(Node::shape("ball", vec![shapes::sphere(8, 4)]));

        let mut inner = GroupNode::new("inner");
        inner.add_child(Node::shape("box", vec![shapes::cube()]));
        root.add_child(Node::Group(inner));

        Node::Group(root)
    }

    #[test]
    fn test_walk_counts_all_geometries() {
        let mut tree = sample_tree();
        let mut visitor = MeshVisitor::new();
        visitor.visit(&mut tree).unwrap();

        let stats = visitor.stats();
        assert_eq!(stats.geometries, 2);
        assert_eq!(stats.exported, 0);
        // sphere: 4 bands of 16 strip triangles; cube: 12
        assert_eq!(stats.triangles, 4 * (2 * 8) + 12);
    }

    #[test]
    fn test_walk_flattens_in_place() {
        let mut tree = sample_tree();
        MeshVisitor::new().visit(&mut tree).unwrap();

        let Node::Group(root) = &tree else {
            panic!("root should be a group");
        };
        let Node::Shape(ball) = &root.children[0] else {
            panic!("first child should be a shape");
        };

        // the sphere's strip bands were replaced by one flat triangle list
        let sets = ball.geometries[0].primitive_sets();
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].mode(), PrimitiveMode::Triangles);
        assert!(matches!(sets[0].indices(), ElementIndices::U16(_)));
        assert_eq!(sets[0].triangle_count(), 4 * (2 * 8));
    }
}
