// Host-side tests for procedural mesh generation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod mesh {
    include!("../src/render/mesh.rs");
}

use glam::Vec3;
use mesh::*;

fn assert_indices_in_bounds(m: &MeshData) {
    let n = m.vertices.len() as u32;
    assert!(m.indices.iter().all(|&i| i < n));
    assert_eq!(m.indices.len() % 3, 0);
}

#[test]
fn cube_has_four_vertices_per_face() {
    let m = cube(2.0);
    assert_eq!(m.vertices.len(), 24);
    assert_eq!(m.indices.len(), 36);
    assert_indices_in_bounds(&m);
}

#[test]
fn cube_fits_its_size() {
    let m = cube(2.0);
    for v in &m.vertices {
        for c in v.position {
            assert!((c.abs() - 1.0).abs() < 1e-6);
        }
    }
}

#[test]
fn cube_faces_wind_outward() {
    let m = cube(1.0);
    for tri in m.indices.chunks(3) {
        let a = Vec3::from(m.vertices[tri[0] as usize].position);
        let b = Vec3::from(m.vertices[tri[1] as usize].position);
        let c = Vec3::from(m.vertices[tri[2] as usize].position);
        let n = Vec3::from(m.vertices[tri[0] as usize].normal);
        let face = (b - a).cross(c - a);
        assert!(face.dot(n) > 0.0, "triangle {:?} winds inward", tri);
    }
}

#[test]
fn torus_faces_wind_outward() {
    // Back-face culling would drop any triangle wound the other way
    let m = torus(10.0, 3.0, 16, 100);
    for tri in m.indices.chunks(3) {
        let v: Vec<&Vertex> = tri.iter().map(|&i| &m.vertices[i as usize]).collect();
        let (a, b, c) = (
            Vec3::from(v[0].position),
            Vec3::from(v[1].position),
            Vec3::from(v[2].position),
        );
        let n = Vec3::from(v[0].normal) + Vec3::from(v[1].normal) + Vec3::from(v[2].normal);
        let face = (b - a).cross(c - a);
        assert!(face.dot(n) > 0.0, "triangle {:?} winds inward", tri);
    }
}

#[test]
fn torus_counts_match_segments() {
    let m = torus(10.0, 3.0, 16, 100);
    assert_eq!(m.vertices.len(), 17 * 101);
    assert_eq!(m.indices.len(), 16 * 100 * 6);
    assert_indices_in_bounds(&m);
}

#[test]
fn torus_normals_are_unit_length() {
    let m = torus(10.0, 3.0, 8, 12);
    for v in &m.vertices {
        let n = Vec3::from(v.normal);
        assert!((n.length() - 1.0).abs() < 1e-4);
    }
}

#[test]
fn torus_points_lie_on_the_tube() {
    let (r, t) = (10.0, 3.0);
    let m = torus(r, t, 8, 12);
    for v in &m.vertices {
        let p = Vec3::from(v.position);
        let ring = Vec3::new(p.x, p.y, 0.0).normalize() * r;
        assert!(((p - ring).length() - t).abs() < 1e-3);
    }
}

#[test]
fn torus_clamps_tiny_segment_counts() {
    let m = torus(1.0, 0.2, 0, 1);
    assert_eq!(m.vertices.len(), 4 * 4);
    assert_indices_in_bounds(&m);
}
