//! # Thistle Quickstart
//!
//! The whole pipeline with no model files: build a procedural scene, print
//! its structure, flatten every geometry to triangles in place, and save the
//! result as one combined OBJ.
//!
//! ```bash
//! cargo run --example quickstart
//! ```

use thistle::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // a small tree exercising every triangle topology the converter handles
    let mut root = GroupNode::new("quickstart");
    root.add_child(Node::shape("box", vec![shapes::cube()]));
    root.add_child(Node::shape("ball", vec![shapes::sphere(16, 8)]));

    let mut props = GroupNode::new("props");
    props.add_child(Node::shape("spike", vec![shapes::cone(0.5, 1.5, 12)]));
    props.add_child(Node::shape("ground", vec![shapes::plane(10.0, 10.0, 4, 4)]));
    root.add_child(Node::Group(props));

    let mut scene = Scene::new(Node::Group(root));

    print!("{}", scene.print_tree());

    let stats = scene.extract_meshes(None)?;
    println!(
        "flattened {} geometries into {} triangles",
        stats.geometries, stats.triangles
    );

    scene.save("quickstart.obj")?;
    println!("saved quickstart.obj");

    Ok(())
}
