// Host-side tests for the per-frame rotation and hue state.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod animation {
    include!("../src/core/animation.rs");
}

use animation::*;
use glam::{Vec2, Vec3};

fn close(a: [f32; 3], b: [f32; 3]) -> bool {
    a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-5)
}

#[test]
fn hsl_primaries() {
    assert!(close(hsl_to_rgb(0.0, 1.0, 0.5), [1.0, 0.0, 0.0]));
    assert!(close(hsl_to_rgb(1.0 / 3.0, 1.0, 0.5), [0.0, 1.0, 0.0]));
    assert!(close(hsl_to_rgb(2.0 / 3.0, 1.0, 0.5), [0.0, 0.0, 1.0]));
    assert!(close(hsl_to_rgb(0.5, 1.0, 0.5), [0.0, 1.0, 1.0]));
}

#[test]
fn hsl_gray_and_extremes() {
    assert!(close(hsl_to_rgb(0.3, 0.0, 0.25), [0.25, 0.25, 0.25]));
    assert!(close(hsl_to_rgb(0.7, 1.0, 0.0), [0.0, 0.0, 0.0]));
    assert!(close(hsl_to_rgb(0.7, 1.0, 1.0), [1.0, 1.0, 1.0]));
}

#[test]
fn hsl_hue_wraps() {
    assert!(close(hsl_to_rgb(1.25, 0.8, 0.4), hsl_to_rgb(0.25, 0.8, 0.4)));
    assert!(close(hsl_to_rgb(-0.75, 0.8, 0.4), hsl_to_rgb(0.25, 0.8, 0.4)));
}

#[test]
fn advance_steps_rotation_and_hue() {
    let params = AnimationParams {
        rotation_step: Vec2::new(0.01, 0.02),
        hue_step: 0.1,
        ..Default::default()
    };
    let mut s = AnimationState::default();
    for _ in 0..3 {
        s.advance(&params);
    }
    assert!((s.rotation.x - 0.03).abs() < 1e-6);
    assert!((s.rotation.y - 0.06).abs() < 1e-6);
    assert!((s.hue - 0.3).abs() < 1e-5);
    assert_eq!(s.frames, 3);
}

#[test]
fn hue_stays_in_unit_range() {
    let params = AnimationParams {
        hue_step: 0.37,
        ..Default::default()
    };
    let mut s = AnimationState::default();
    for _ in 0..1000 {
        s.advance(&params);
        assert!((0.0..1.0).contains(&s.hue), "hue {} escaped", s.hue);
    }
}

#[test]
fn group_matrix_starts_at_identity_and_rotates() {
    let mut s = AnimationState::default();
    assert!(s.group_matrix().abs_diff_eq(glam::Mat4::IDENTITY, 1e-6));
    s.rotation = Vec2::new(0.0, std::f32::consts::FRAC_PI_2);
    let p = s.group_matrix().transform_point3(Vec3::X);
    assert!(p.abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), 1e-5));
}

#[test]
fn emissive_scales_with_intensity() {
    let params = AnimationParams {
        emissive_intensity: 2.0,
        ..Default::default()
    };
    let s = AnimationState::default();
    let rgb = s.emissive_rgb(&params);
    assert!(close(rgb, [2.0, 0.0, 0.0]));
}
