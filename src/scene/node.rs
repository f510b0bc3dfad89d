//! Node tree: groups and geometry-bearing leaves.
//!
//! Exactly two node kinds exist, so dispatch is a plain `match` over the
//! [`Node`] enum rather than a trait hierarchy.

use super::geometry::Geometry;

/// One node of the scene tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Group(GroupNode),
    Shape(ShapeNode),
}

impl Node {
    /// Convenience constructor for an empty group
    pub fn group(name: impl Into<String>) -> Self {
        Node::Group(GroupNode::new(name))
    }

    /// Convenience constructor for a geometry-bearing leaf
    pub fn shape(name: impl Into<String>, geometries: Vec<Geometry>) -> Self {
        Node::Shape(ShapeNode { name: name.into(), geometries })
    }

    pub fn name(&self) -> &str {
        match self {
            Node::Group(group) => &group.name,
            Node::Shape(shape) => &shape.name,
        }
    }
}

/// Interior node holding child nodes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupNode {
    pub name: String,
    pub children: Vec<Node>,
}

impl GroupNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }
}

/// Leaf node holding geometry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeNode {
    pub name: String,
    pub geometries: Vec<Geometry>,
}

impl ShapeNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            geometries: Vec::new(),
        }
    }

    pub fn add_geometry(&mut self, geometry: Geometry) {
        self.geometries.push(geometry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_construction() {
        let mut root = GroupNode::new("root");
        root.add_child(Node::shape("leaf", vec![Geometry::new()]));
        root.add_child(Node::group("inner"));

        let root = Node::Group(root);
        assert_eq!(root.name(), "root");
        match &root {
            Node::Group(group) => assert_eq!(group.children.len(), 2),
            Node::Shape(_) => panic!("root should be a group"),
        }
    }
}
