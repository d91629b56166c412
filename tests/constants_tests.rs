// Host-side tests for rendering constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn mesh_sizes_are_positive() {
    assert!(CUBE_SIZE > 0.0);
    assert!(TORUS_RADIUS > 0.0);
    assert!(TORUS_TUBE > 0.0);
    assert!(TORUS_RADIAL_SEGMENTS >= 3);
    assert!(TORUS_TUBULAR_SEGMENTS >= 3);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn torus_tube_does_not_self_intersect() {
    // Tube radius must stay below the ring radius or the hole closes up
    assert!(TORUS_TUBE < TORUS_RADIUS);
}

#[test]
fn colours_are_normalized() {
    for c in CUBE_COLOR.iter().chain(TORUS_COLOR.iter()) {
        assert!((0.0..=1.0).contains(c));
    }
    for c in CLEAR_COLOR {
        assert!((0.0..=1.0).contains(&c));
    }
    assert!((0.0..=1.0).contains(&AMBIENT_LIGHT));
}

#[test]
fn light_direction_is_not_zero() {
    let len2: f32 = LIGHT_DIRECTION.iter().map(|v| v * v).sum();
    assert!(len2 > 0.0);
}

#[test]
fn dom_ids_are_plain() {
    assert!(!CANVAS_ID.is_empty());
    assert!(!CANVAS_ID.starts_with('#'));
    assert!(!BACKGROUND_URL.is_empty());
}
