//! # Scene graph
//!
//! The scene data model: a [`Node`] tree of groups and geometry-bearing
//! shape leaves, the [`Geometry`] attribute/primitive bundle those leaves
//! hold, and the [`Scene`] facade that ties loading, traversal, and saving
//! together.

pub mod geometry;
pub mod node;
pub mod primitive;
pub mod shapes;

pub use geometry::{AttributeArray, Binding, Geometry};
pub use node::{GroupNode, Node, ShapeNode};
pub use primitive::{ElementIndices, PrimitiveMode, PrimitiveSet};

use std::path::Path;

use crate::error::Result;
use crate::visit::{InfoVisitor, MeshVisitStats, MeshVisitor};

/// A loaded or constructed scene: one root node and the operations the
/// demos run against it
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub root: Node,
}

impl Scene {
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    /// Load a scene file (dispatches on extension)
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Scene> {
        crate::io::read_scene(path)
    }

    /// Save the scene to a file (dispatches on extension)
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        crate::io::write_scene(self, path)
    }

    /// Indented text dump of the node tree
    pub fn print_tree(&self) -> String {
        let mut visitor = InfoVisitor::new();
        visitor.visit(&self.root);
        visitor.into_report()
    }

    /// Run every geometry through the mesh converter in place, optionally
    /// exporting each converted mesh as a numbered OBJ under `export_dir`
    pub fn extract_meshes(&mut self, export_dir: Option<&Path>) -> Result<MeshVisitStats> {
        let mut visitor = match export_dir {
            Some(dir) => MeshVisitor::with_export_dir(dir),
            None => MeshVisitor::new(),
        };
        visitor.visit(&mut self.root)?;
        Ok(visitor.stats())
    }

    /// Totals over the whole tree
    pub fn statistics(&self) -> SceneStatistics {
        let mut stats = SceneStatistics::default();
        collect_statistics(&self.root, &mut stats);
        stats
    }
}

/// Scene totals for diagnostics and demo output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SceneStatistics {
    pub node_count: usize,
    pub geometry_count: usize,
    pub total_vertices: usize,
    pub total_triangles: usize,
}

fn collect_statistics(node: &Node, stats: &mut SceneStatistics) {
    stats.node_count += 1;
    match node {
        Node::Group(group) => {
            for child in &group.children {
                collect_statistics(child, stats);
            }
        }
        Node::Shape(shape) => {
            for geometry in &shape.geometries {
                stats.geometry_count += 1;
                stats.total_vertices += geometry.vertex_count();
                stats.total_triangles += geometry
                    .primitive_sets()
                    .iter()
                    .map(PrimitiveSet::triangle_count)
                    .sum::<usize>();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistics_over_mixed_tree() {
        let mut root = GroupNode::new("root");
        root.add_child(Node::shape("box", vec![shapes::cube()]));

        let mut inner = GroupNode::new("inner");
        inner.add_child(Node::shape("spike", vec![shapes::cone(1.0, 2.0, 8)]));
        root.add_child(Node::Group(inner));

        let scene = Scene::new(Node::Group(root));
        let stats = scene.statistics();

        // root + box + inner + spike
        assert_eq!(stats.node_count, 4);
        assert_eq!(stats.geometry_count, 2);
        assert_eq!(stats.total_vertices, 24 + 11);
        // cube 12, cone 2 fans of 8
        assert_eq!(stats.total_triangles, 12 + 16);
    }

    #[test]
    fn test_print_tree_matches_structure() {
        let mut root = GroupNode::new("root");
        root.add_child(Node::shape("box", vec![shapes::cube()]));
        let scene = Scene::new(Node::Group(root));

        let report = scene.print_tree();
        assert!(report.starts_with("[0] Group \"root\""));
        assert!(report.contains("[1] Shape \"box\""));
        assert!(report.contains("24 vertices"));
    }
}
