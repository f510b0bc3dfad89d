//! Procedural shape generation.
//!
//! Builds [`Geometry`] values for common primitives without any model files.
//! The shapes deliberately cover every triangle topology the mesh converter
//! understands: cube and plane use plain triangle lists, the sphere is built
//! from one triangle strip per latitude band, and the cone from triangle
//! fans.
//!
//! All shapes carry per-vertex normals and a single UV channel.

use cgmath::{Vector2, Vector3};
use std::f64::consts::PI;

use super::geometry::Geometry;
use super::primitive::{PrimitiveMode, PrimitiveSet};

fn assemble(
    vertices: Vec<Vector3<f64>>,
    normals: Vec<Vector3<f64>>,
    uvs: Vec<Vector2<f64>>,
    sets: Vec<PrimitiveSet>,
) -> Geometry {
    let mut geometry = Geometry::new();
    geometry.set_vertex_array(vertices);
    geometry.set_normal_array(normals);
    geometry.set_tex_coord_array(0, uvs);
    for set in sets {
        geometry.add_primitive_set(set);
    }
    geometry
}

/// Unit cube centered at the origin, from -0.5 to 0.5 on all axes.
///
/// Six faces of four vertices each, indexed as a triangle list with outward
/// normals and 0..1 UVs per face.
pub fn cube() -> Geometry {
    let positions = [
        // Front face
        [-0.5, -0.5, 0.5], [0.5, -0.5, 0.5], [0.5, 0.5, 0.5], [-0.5, 0.5, 0.5],
        // Back face
        [-0.5, -0.5, -0.5], [-0.5, 0.5, -0.5], [0.5, 0.5, -0.5], [0.5, -0.5, -0.5],
        // Left face
        [-0.5, -0.5, -0.5], [-0.5, -0.5, 0.5], [-0.5, 0.5, 0.5], [-0.5, 0.5, -0.5],
        // Right face
        [0.5, -0.5, 0.5], [0.5, -0.5, -0.5], [0.5, 0.5, -0.5], [0.5, 0.5, 0.5],
        // Top face
        [-0.5, 0.5, 0.5], [0.5, 0.5, 0.5], [0.5, 0.5, -0.5], [-0.5, 0.5, -0.5],
        // Bottom face
        [-0.5, -0.5, -0.5], [0.5, -0.5, -0.5], [0.5, -0.5, 0.5], [-0.5, -0.5, 0.5],
    ];

    let face_normals = [
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
        [-1.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
    ];

    let face_uvs = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

    let vertices = positions
        .iter()
        .map(|p| Vector3::new(p[0], p[1], p[2]))
        .collect();
    let normals = face_normals
        .iter()
        .flat_map(|n| std::iter::repeat(Vector3::new(n[0], n[1], n[2])).take(4))
        .collect();
    let uvs = (0..6)
        .flat_map(|_| face_uvs.iter().map(|uv| Vector2::new(uv[0], uv[1])))
        .collect();

    // 2 triangles per face, counter-clockwise
    let indices: Vec<u32> = (0..6u32)
        .flat_map(|face| {
            let base = face * 4;
            [base, base + 1, base + 2, base + 2, base + 3, base]
        })
        .collect();

    assemble(
        vertices,
        normals,
        uvs,
        vec![PrimitiveSet::new(PrimitiveMode::Triangles, indices)],
    )
}

/// Flat plane in the XY plane, centered at the origin, normal on +Z
///
/// # Arguments
/// * `width` - extent along X
/// * `height` - extent along Y
/// * `width_segments` - subdivisions along width (min 1)
/// * `height_segments` - subdivisions along height (min 1)
pub fn plane(width: f64, height: f64, width_segments: u32, height_segments: u32) -> Geometry {
    let w_segs = width_segments.max(1);
    let h_segs = height_segments.max(1);

    let mut vertices = Vec::new();
    let mut normals = Vec::new();
    let mut uvs = Vec::new();

    for y in 0..=h_segs {
        let v = f64::from(y) / f64::from(h_segs);
        for x in 0..=w_segs {
            let u = f64::from(x) / f64::from(w_segs);
            vertices.push(Vector3::new((u - 0.5) * width, (v - 0.5) * height, 0.0));
            normals.push(Vector3::new(0.0, 0.0, 1.0));
            uvs.push(Vector2::new(u, v));
        }
    }

    // counter-clockwise when viewed from +Z
    let mut indices: Vec<u32> = Vec::new();
    for y in 0..h_segs {
        for x in 0..w_segs {
            let i = y * (w_segs + 1) + x;
            let next_row = i + w_segs + 1;

            indices.extend_from_slice(&[i, next_row, i + 1]);
            indices.extend_from_slice(&[next_row, next_row + 1, i + 1]);
        }
    }

    assemble(
        vertices,
        normals,
        uvs,
        vec![PrimitiveSet::new(PrimitiveMode::Triangles, indices)],
    )
}

/// UV sphere of radius 1.0 centered at the origin, poles on the Z axis.
///
/// Emits one triangle strip per latitude band instead of a flat triangle
/// list, so a converted sphere exercises strip expansion end to end.
///
/// # Arguments
/// * `longitude_segments` - segments around the equator (min 3)
/// * `latitude_segments` - bands from pole to pole (min 2)
pub fn sphere(longitude_segments: u32, latitude_segments: u32) -> Geometry {
    let long_segs = longitude_segments.max(3);
    let lat_segs = latitude_segments.max(2);

    let mut vertices = Vec::new();
    let mut normals = Vec::new();
    let mut uvs = Vec::new();

    for lat in 0..=lat_segs {
        let theta = f64::from(lat) * PI / f64::from(lat_segs);
        let (sin_theta, cos_theta) = theta.sin_cos();

        for long in 0..=long_segs {
            let phi = f64::from(long) * 2.0 * PI / f64::from(long_segs);
            let (sin_phi, cos_phi) = phi.sin_cos();

            let point = Vector3::new(sin_theta * cos_phi, sin_theta * sin_phi, cos_theta);
            vertices.push(point);
            normals.push(point); // unit sphere: normal equals position
            uvs.push(Vector2::new(
                f64::from(long) / f64::from(long_segs),
                f64::from(lat) / f64::from(lat_segs),
            ));
        }
    }

    // one strip per band, zig-zagging between adjacent latitude rings
    let stride = long_segs + 1;
    let sets = (0..lat_segs)
        .map(|lat| {
            let mut strip: Vec<u32> = Vec::with_capacity(2 * stride as usize);
            for long in 0..=long_segs {
                strip.push(lat * stride + long);
                strip.push((lat + 1) * stride + long);
            }
            PrimitiveSet::new(PrimitiveMode::TriangleStrip, strip)
        })
        .collect();

    assemble(vertices, normals, uvs, sets)
}

/// Cone with its apex on +Z and a circular base cap on -Z, centered at the
/// origin.
///
/// The side surface and the base cap are each a single triangle fan.
///
/// # Arguments
/// * `radius` - base radius
/// * `height` - apex-to-base extent along Z
/// * `segments` - circular segments (min 3)
pub fn cone(radius: f64, height: f64, segments: u32) -> Geometry {
    let segs = segments.max(3);
    let half_height = height * 0.5;
    let slant = (radius * radius + height * height).sqrt();

    let mut vertices = vec![Vector3::new(0.0, 0.0, half_height)];
    let mut normals = vec![Vector3::new(0.0, 0.0, 1.0)];
    let mut uvs = vec![Vector2::new(0.5, 1.0)];

    // base ring, with the seam vertex duplicated so UVs close cleanly
    for i in 0..=segs {
        let angle = f64::from(i) * 2.0 * PI / f64::from(segs);
        let (sin_a, cos_a) = angle.sin_cos();

        vertices.push(Vector3::new(radius * cos_a, radius * sin_a, -half_height));
        normals.push(
            Vector3::new(cos_a * height, sin_a * height, radius) / slant,
        );
        uvs.push(Vector2::new(f64::from(i) / f64::from(segs), 0.0));
    }

    let base_center = vertices.len() as u32;
    vertices.push(Vector3::new(0.0, 0.0, -half_height));
    normals.push(Vector3::new(0.0, 0.0, -1.0));
    uvs.push(Vector2::new(0.5, 0.5));

    // side: apex then the ring, counter-clockwise seen from outside
    let mut side: Vec<u32> = vec![0];
    side.extend(1..=segs + 1);

    // cap: base center then the ring reversed, so the cap faces -Z
    let mut cap: Vec<u32> = vec![base_center];
    cap.extend((1..=segs + 1).rev());

    let sets = vec![
        PrimitiveSet::new(PrimitiveMode::TriangleFan, side),
        PrimitiveSet::new(PrimitiveMode::TriangleFan, cap),
    ];

    assemble(vertices, normals, uvs, sets)
}
