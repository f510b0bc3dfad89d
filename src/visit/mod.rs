//! Node-tree walkers.
//!
//! Two walkers cover what the demos need: [`InfoVisitor`] dumps the tree
//! structure as indented text, and [`MeshVisitor`] runs every geometry
//! through the mesh converter. Both dispatch with a plain `match` over the
//! two node kinds.

mod extract;
mod info;

pub use extract::{MeshVisitStats, MeshVisitor};
pub use info::InfoVisitor;
