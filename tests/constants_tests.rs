// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);

    // Damping is a per-frame fraction
    assert!(ORBIT_DAMPING > 0.0 && ORBIT_DAMPING < 1.0);
    assert!(ORBIT_PITCH_LIMIT < std::f32::consts::FRAC_PI_2);
    assert!(ORBIT_MIN_DISTANCE < ORBIT_MAX_DISTANCE);

    assert!(BLOOM_STRENGTH >= 0.0);
    assert!((0.0..=1.0).contains(&BLOOM_RADIUS));
    assert!((0.0..=1.0).contains(&BLOOM_THRESHOLD));
    assert!((0.0..=1.0).contains(&FILM_INTENSITY));

    assert!(LABEL_PADDING_PX * 2 < LABEL_ATLAS_MAX_WIDTH_PX);
    assert!(LABEL_MAX_CHARS > 1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_frames_the_whole_scene() {
    // The initial view starts outside the placement cube and can reach it.
    let half_diagonal = POSITION_RANGE * 3f32.sqrt();
    assert!(CAMERA_DISTANCE > half_diagonal);
    assert!((ORBIT_MIN_DISTANCE..=ORBIT_MAX_DISTANCE).contains(&CAMERA_DISTANCE));
    assert!(CAMERA_FAR > CAMERA_DISTANCE + half_diagonal);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scene_constants_are_consistent() {
    assert_eq!(MAX_TRACKS, 10);
    assert_eq!(POSITION_RANGE, 2.0);
    assert_eq!(SPHERE_RADIUS, 0.1);
    assert!(LABEL_LIFT > 0.0);
    assert!(SPHERE_SEGMENTS >= 3 && SPHERE_RINGS >= 2);
    assert!(TRACKS_URL_ATTRIBUTE.starts_with("data-"));
    assert!(!DEFAULT_TRACKS_ENDPOINT.is_empty());
}

#[test]
fn palette_is_normalized() {
    for c in [SPHERE_BASE_COLOR, LINE_COLOR, LABEL_COLOR, AMBIENT_LIGHT] {
        assert!(c.iter().all(|v| (0.0..=1.0).contains(v)));
    }
}
