// Host-side tests for the orbit camera.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod camera {
    include!("../src/camera.rs");
}

use camera::*;
use glam::Vec3;

fn params() -> OrbitParams {
    OrbitParams {
        rotate_speed: 1.0,
        damping: 0.05,
        zoom_speed: 1.0,
        min_distance: 1.0,
        max_distance: 50.0,
        pitch_limit: 1.55,
    }
}

#[test]
fn starts_on_positive_z() {
    let cam = OrbitCamera::new(Vec3::ZERO, 5.0, 1.3, params());
    assert!(cam.eye().abs_diff_eq(Vec3::new(0.0, 0.0, 5.0), 1e-6));
}

#[test]
fn initial_distance_is_clamped() {
    let near = OrbitCamera::new(Vec3::ZERO, 0.01, 1.3, params());
    assert_eq!(near.distance, 1.0);
    let far = OrbitCamera::new(Vec3::ZERO, 500.0, 1.3, params());
    assert_eq!(far.distance, 50.0);
}

#[test]
fn eye_keeps_distance_while_orbiting() {
    let mut cam = OrbitCamera::new(Vec3::new(1.0, 2.0, 3.0), 5.0, 1.3, params());
    cam.rotate(120.0, -40.0, 600.0);
    for _ in 0..30 {
        cam.update();
        let d = (cam.eye() - cam.target).length();
        assert!((d - 5.0).abs() < 1e-4);
    }
}

#[test]
fn drag_right_swings_camera_and_damps_out() {
    let mut cam = OrbitCamera::new(Vec3::ZERO, 5.0, 1.3, params());
    cam.rotate(60.0, 0.0, 600.0);
    cam.update();
    let first = cam.yaw;
    assert!(first < 0.0);
    for _ in 0..2000 {
        cam.update();
    }
    let settled = cam.yaw;
    cam.update();
    assert_eq!(cam.yaw, settled);
    // Geometric series: total travel is first step / damping.
    assert!((settled - first / 0.05).abs() < 1e-3);
}

#[test]
fn pitch_is_clamped() {
    let mut cam = OrbitCamera::new(Vec3::ZERO, 5.0, 1.3, params());
    cam.rotate(0.0, 100_000.0, 600.0);
    for _ in 0..50 {
        cam.update();
    }
    assert!(cam.pitch <= 1.55 + 1e-6);
    cam.rotate(0.0, -1_000_000.0, 600.0);
    for _ in 0..50 {
        cam.update();
    }
    assert!(cam.pitch >= -1.55 - 1e-6);
}

#[test]
fn zoom_direction_and_limits() {
    let mut cam = OrbitCamera::new(Vec3::ZERO, 5.0, 1.3, params());
    cam.zoom(100.0);
    assert!(cam.distance > 5.0);
    cam.zoom(-200.0);
    assert!(cam.distance < 5.0);
    for _ in 0..500 {
        cam.zoom(-1000.0);
    }
    assert_eq!(cam.distance, 1.0);
    for _ in 0..500 {
        cam.zoom(1000.0);
    }
    assert_eq!(cam.distance, 50.0);
}

#[test]
fn zoom_ignores_zero_and_nan() {
    let mut cam = OrbitCamera::new(Vec3::ZERO, 5.0, 1.3, params());
    cam.zoom(0.0);
    cam.zoom(f32::NAN);
    assert_eq!(cam.distance, 5.0);
}

#[test]
fn invalid_aspect_falls_back_to_square() {
    let cam = OrbitCamera::new(Vec3::ZERO, 5.0, 1.3, params());
    assert_eq!(cam.camera(0.0).aspect, 1.0);
    assert_eq!(cam.camera(f32::INFINITY).aspect, 1.0);
    assert_eq!(cam.camera(1.5).aspect, 1.5);
}

#[test]
fn billboard_axes_are_orthonormal_and_face_eye() {
    let mut cam = OrbitCamera::new(Vec3::ZERO, 5.0, 1.3, params());
    cam.rotate(200.0, 80.0, 600.0);
    cam.update();
    let c = cam.camera(1.6);
    let (right, up) = c.billboard_axes();
    assert!((right.length() - 1.0).abs() < 1e-5);
    assert!((up.length() - 1.0).abs() < 1e-5);
    assert!(right.dot(up).abs() < 1e-5);
    let to_eye = (c.eye - c.target).normalize();
    assert!(right.cross(up).abs_diff_eq(to_eye, 1e-4));
}

#[test]
fn view_proj_maps_target_to_screen_center() {
    let cam = OrbitCamera::new(Vec3::ZERO, 5.0, 1.3, params()).camera(1.0);
    let clip = cam.view_proj() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-6 && ndc.y.abs() < 1e-6);
    assert!((0.0..1.0).contains(&ndc.z));
}
