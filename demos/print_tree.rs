//! # Tree Printer
//!
//! Loads a scene file and dumps its node hierarchy as indented text,
//! followed by the scene totals.
//!
//! ```bash
//! cargo run --example print_tree -- model.obj
//! ```

use std::env;

use anyhow::Context;
use thistle::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = env::args()
        .nth(1)
        .context("usage: print_tree <scene file>")?;

    let scene = Scene::load(&path).with_context(|| format!("failed to load {path}"))?;

    print!("{}", scene.print_tree());

    let stats = scene.statistics();
    println!(
        "{} nodes, {} geometries, {} vertices, {} triangles",
        stats.node_count, stats.geometry_count, stats.total_vertices, stats.total_triangles
    );

    Ok(())
}
