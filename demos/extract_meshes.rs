//! # Mesh Extraction
//!
//! Loads a scene file, runs every geometry through the mesh converter
//! (exporting each one as a numbered OBJ next to the input), and writes the
//! round-tripped scene back out as `<stem>.copy.obj`.
//!
//! ```bash
//! cargo run --example extract_meshes -- model.obj
//! ```

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use thistle::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = PathBuf::from(
        env::args()
            .nth(1)
            .context("usage: extract_meshes <scene file>")?,
    );

    let mut scene =
        Scene::load(&path).with_context(|| format!("failed to load {}", path.display()))?;

    let export_dir = path.parent().unwrap_or_else(|| ".".as_ref());
    let stats = scene.extract_meshes(Some(export_dir))?;
    println!(
        "converted {} geometries ({} triangles), exported {} OBJ files",
        stats.geometries, stats.triangles, stats.exported
    );

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("scene");
    let copy_path = path.with_file_name(format!("{stem}.copy.obj"));
    scene.save(&copy_path)?;
    println!("saved {}", copy_path.display());

    Ok(())
}
