//! Scene file loading and saving.
//!
//! OBJ is the model format: [`load_obj`] builds a node tree from a file
//! (one shape node per OBJ model), and [`save_obj`] walks a tree and writes
//! every geometry into one combined OBJ. [`read_scene`] / [`write_scene`]
//! dispatch on the file extension so demos can stay format-agnostic.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use cgmath::{Vector2, Vector3};
use log::warn;

use crate::error::{Error, Result};
use crate::mesh::TriangleMesh;
use crate::scene::{
    ElementIndices, Geometry, GroupNode, Node, PrimitiveMode, PrimitiveSet, Scene, ShapeNode,
};

/// Load a scene file, dispatching on its extension
pub fn read_scene<P: AsRef<Path>>(path: P) -> Result<Scene> {
    let path = path.as_ref();
    match extension(path) {
        Some(ext) if ext.eq_ignore_ascii_case("obj") => load_obj(path),
        other => Err(Error::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

/// Save a scene file, dispatching on its extension
pub fn write_scene<P: AsRef<Path>>(scene: &Scene, path: P) -> Result<()> {
    let path = path.as_ref();
    match extension(path) {
        Some(ext) if ext.eq_ignore_ascii_case("obj") => save_obj(scene, path),
        other => Err(Error::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|e| e.to_str())
}

/// Load an OBJ file into a scene: a root group named after the file, with
/// one shape node per OBJ model.
///
/// Geometry is triangulated and single-indexed by the loader, so every model
/// arrives as one per-vertex-bound triangle list. Files without usable
/// normals (missing, or not matching the vertex count) get normals computed
/// from the triangle list. Material data is not read.
pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<Scene> {
    let path = path.as_ref();
    let (models, _materials) = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
    )?;

    let mut root = GroupNode::new(
        path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("scene"),
    );

    for (i, model) in models.iter().enumerate() {
        let name = if model.name.is_empty() {
            format!("model_{i}")
        } else {
            model.name.clone()
        };

        let mut shape = ShapeNode::new(name);
        shape.add_geometry(model_geometry(&model.mesh));
        root.add_child(Node::Shape(shape));
    }

    Ok(Scene::new(Node::Group(root)))
}

fn model_geometry(mesh: &tobj::Mesh) -> Geometry {
    let vertices: Vec<Vector3<f64>> = mesh
        .positions
        .chunks_exact(3)
        .map(|p| Vector3::new(f64::from(p[0]), f64::from(p[1]), f64::from(p[2])))
        .collect();

    let normals: Vec<Vector3<f64>> =
        if !mesh.normals.is_empty() && mesh.normals.len() == mesh.positions.len() {
            mesh.normals
                .chunks_exact(3)
                .map(|n| Vector3::new(f64::from(n[0]), f64::from(n[1]), f64::from(n[2])))
                .collect()
        } else {
            if !mesh.normals.is_empty() {
                warn!(
                    "normal count {} does not match vertex count {}; recomputing",
                    mesh.normals.len() / 3,
                    mesh.positions.len() / 3
                );
            }
            let mut flat = TriangleMesh {
                vertices: vertices.clone(),
                indices: mesh.indices.clone(),
                ..Default::default()
            };
            flat.compute_vertex_normals();
            flat.normals
        };

    let mut geometry = Geometry::new();
    geometry.set_vertex_array(vertices);
    geometry.set_normal_array(normals);

    if !mesh.texcoords.is_empty() {
        let uvs: Vec<Vector2<f64>> = mesh
            .texcoords
            .chunks_exact(2)
            .map(|uv| Vector2::new(f64::from(uv[0]), f64::from(uv[1])))
            .collect();
        geometry.set_tex_coord_array(0, uvs);
    }

    geometry.add_primitive_set(PrimitiveSet::new(
        PrimitiveMode::Triangles,
        ElementIndices::U32(mesh.indices.clone()),
    ));
    geometry
}

/// Write every geometry in the scene into one combined OBJ file
pub fn save_obj<P: AsRef<Path>>(scene: &Scene, path: P) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_obj(scene, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Write every geometry in the scene as combined OBJ text.
///
/// Each geometry becomes one `o` record named after its shape node. Face
/// indices are offset by the vertices written before them, as the format
/// numbers vertices globally. Geometries that flatten to no triangles are
/// still written as bare vertex lists.
pub fn write_obj<W: Write>(scene: &Scene, out: &mut W) -> io::Result<()> {
    let mut shapes = Vec::new();
    collect_shapes(&scene.root, &mut shapes);

    let mut vertex_offset = 0u64;
    for shape in shapes {
        for geometry in &shape.geometries {
            let mesh = TriangleMesh::from_geometry(geometry);

            writeln!(out, "o {}", shape.name)?;
            for v in &mesh.vertices {
                writeln!(out, "v {} {} {}", v.x, v.y, v.z)?;
            }
            for triangle in mesh.indices.chunks_exact(3) {
                writeln!(
                    out,
                    "f {} {} {}",
                    u64::from(triangle[0]) + vertex_offset + 1,
                    u64::from(triangle[1]) + vertex_offset + 1,
                    u64::from(triangle[2]) + vertex_offset + 1
                )?;
            }
            vertex_offset += mesh.vertex_count() as u64;
        }
    }

    Ok(())
}

fn collect_shapes<'a>(node: &'a Node, out: &mut Vec<&'a ShapeNode>) {
    match node {
        Node::Group(group) => {
            for child in &group.children {
                collect_shapes(child, out);
            }
        }
        Node::Shape(shape) => out.push(shape),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::shapes;

    fn two_triangle_scene() -> Scene {
        let mut first = Geometry::new();
        first.set_vertex_array(vec![
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        ]);
        first.add_primitive_set(PrimitiveSet::new(
            PrimitiveMode::Triangles,
            vec![0u32, 1, 2],
        ));

        let mut second = Geometry::new();
        second.set_vertex_array(vec![
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(1.0, 0.0, 1.0),
            Vector3::new(0.0, 1.0, 1.0),
        ]);
        second.add_primitive_set(PrimitiveSet::new(
            PrimitiveMode::Triangles,
            vec![0u32, 1, 2],
        ));

        let mut root = GroupNode::new("pair");
        root.add_child(Node::shape("a", vec![first]));
        root.add_child(Node::shape("b", vec![second]));
        Scene::new(Node::Group(root))
    }

    #[test]
    fn test_combined_obj_offsets_faces() {
        let scene = two_triangle_scene();

        let mut out = Vec::new();
        write_obj(&scene, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "o a");
        assert_eq!(lines[4], "f 1 2 3");
        assert_eq!(lines[5], "o b");
        // second shape's face indices continue after the first three vertices
        assert_eq!(lines[9], "f 4 5 6");
    }

    #[test]
    fn test_triangle_free_geometry_written_as_points() {
        let mut cloud = Geometry::new();
        cloud.set_vertex_array(vec![Vector3::new(0.0, 0.0, 0.0)]);
        cloud.add_primitive_set(PrimitiveSet::new(PrimitiveMode::Points, vec![0u32]));

        let mut root = GroupNode::new("root");
        root.add_child(Node::shape("cloud", vec![cloud]));
        let scene = Scene::new(Node::Group(root));

        let mut out = Vec::new();
        write_obj(&scene, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("v 0 0 0"));
        assert!(!text.contains("\nf "));
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        match read_scene("model.fbx") {
            Err(Error::UnsupportedFormat(ext)) => assert_eq!(ext, "fbx"),
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }

        let scene = Scene::new(Node::Group(GroupNode::new("root")));
        assert!(write_scene(&scene, "model.gltf").is_err());
    }

    #[test]
    fn test_procedural_scene_survives_save() {
        let mut root = GroupNode::new("shapes");
        root.add_child(Node::shape("ball", vec![shapes::sphere(6, 4)]));
        let scene = Scene::new(Node::Group(root));

        let mut out = Vec::new();
        write_obj(&scene, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let vertex_lines = text.lines().filter(|l| l.starts_with("v ")).count();
        let face_lines = text.lines().filter(|l| l.starts_with("f ")).count();
        assert_eq!(vertex_lines, 7 * 5);
        // 4 strip bands of 2*6 triangles
        assert_eq!(face_lines, 4 * 12);
    }
}
