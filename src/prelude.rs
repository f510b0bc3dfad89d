//! # Thistle Prelude
//!
//! One import for the common types:
//!
//! ```rust
//! use thistle::prelude::*;
//! ```

// Re-export the scene data model
pub use crate::scene::{
    AttributeArray, Binding, ElementIndices, Geometry, GroupNode, Node, PrimitiveMode,
    PrimitiveSet, Scene, SceneStatistics, ShapeNode,
};
pub use crate::scene::shapes;

// Re-export mesh conversion and the tree walkers
pub use crate::mesh::TriangleMesh;
pub use crate::visit::{InfoVisitor, MeshVisitStats, MeshVisitor};

// Re-export error handling
pub use crate::error::{Error, Result};

// Re-export common external math types
pub use cgmath::{Vector2, Vector3, Vector4};
