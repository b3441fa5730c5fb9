// Host-side tests for scene construction: layout, neighbors, and sphere mesh.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod layout {
        include!("../src/core/layout.rs");
    }
    pub mod mesh {
        include!("../src/core/mesh.rs");
    }
    pub mod neighbors {
        include!("../src/core/neighbors.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
}

use crate::core::layout::*;
use crate::core::mesh::*;
use crate::core::neighbors::nearest_neighbors;
use crate::core::scene::*;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("track {i}")).collect()
}

#[test]
fn random_positions_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(3);
    let pts = random_positions(&mut rng, 500, 2.0);
    assert_eq!(pts.len(), 500);
    for p in pts {
        for c in p.to_array() {
            assert!((-2.0..2.0).contains(&c), "component {c} out of range");
        }
    }
}

#[test]
fn random_positions_are_seed_deterministic() {
    let a = random_positions(&mut StdRng::seed_from_u64(9), 10, 2.0);
    let b = random_positions(&mut StdRng::seed_from_u64(9), 10, 2.0);
    assert_eq!(a, b);
}

#[test]
fn zero_range_collapses_to_origin() {
    let pts = random_positions(&mut StdRng::seed_from_u64(1), 4, 0.0);
    assert!(pts.iter().all(|p| *p == Vec3::ZERO));
}

#[test]
fn build_places_at_most_ten_tracks() {
    let params = LayoutParams::default();
    assert_eq!(params.max_points, 10);
    let mut rng = StdRng::seed_from_u64(5);
    let scene = TrackScene::build(&names(25), &mut rng, &params);
    assert_eq!(scene.len(), 10);
    assert_eq!(scene.edges().len(), 10);
    assert_eq!(scene.nodes()[0].name, "track 0");
    assert_eq!(scene.nodes()[9].name, "track 9");
}

#[test]
fn build_with_fewer_tracks_places_one_point_per_track() {
    let mut rng = StdRng::seed_from_u64(5);
    let scene = TrackScene::build(&names(4), &mut rng, &LayoutParams::default());
    assert_eq!(scene.len(), 4);
    assert_eq!(scene.edges().len(), 4);
}

#[test]
fn single_track_has_no_edges() {
    let mut rng = StdRng::seed_from_u64(5);
    let scene = TrackScene::build(&names(1), &mut rng, &LayoutParams::default());
    assert_eq!(scene.len(), 1);
    assert!(scene.edges().is_empty());
    assert!(scene.line_segments().is_empty());
    assert_eq!(scene.label_anchors().len(), 1);
}

#[test]
fn empty_scene_is_empty() {
    let mut rng = StdRng::seed_from_u64(5);
    let scene = TrackScene::build(&[], &mut rng, &LayoutParams::default());
    assert!(scene.is_empty());
    assert!(scene.edges().is_empty());
}

#[test]
fn edges_match_nearest_neighbors() {
    let mut rng = StdRng::seed_from_u64(11);
    let scene = TrackScene::build(&names(10), &mut rng, &LayoutParams::default());
    let nn = nearest_neighbors(&scene.positions());
    for e in scene.edges() {
        assert_eq!(nn[e.from], Some(e.to));
    }
}

#[test]
fn line_segments_join_edge_endpoints() {
    let params = LayoutParams::default();
    let positions = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(5.0, 0.0, 0.0),
    ];
    let scene = TrackScene::from_positions(&names(3), positions.clone(), &params);
    let segs = scene.line_segments();
    assert_eq!(segs.len(), 3);
    assert_eq!(segs[0], [positions[0], positions[1]]);
    assert_eq!(segs[1], [positions[1], positions[0]]);
    assert_eq!(segs[2], [positions[2], positions[1]]);
}

#[test]
fn label_anchors_sit_above_spheres() {
    let params = LayoutParams::default();
    let positions = vec![Vec3::new(1.0, 2.0, 3.0), Vec3::new(-1.0, 0.0, 0.0)];
    let scene = TrackScene::from_positions(&names(2), positions.clone(), &params);
    for (anchor, p) in scene.label_anchors().iter().zip(&positions) {
        assert_eq!(anchor.x, p.x);
        assert_eq!(anchor.z, p.z);
        let lift = anchor.y - p.y;
        assert!((lift - (params.sphere_radius + params.label_lift)).abs() < 1e-6);
    }
}

#[test]
fn names_and_positions_pair_up_to_shorter_side() {
    let params = LayoutParams::default();
    let scene = TrackScene::from_positions(&names(5), vec![Vec3::ZERO, Vec3::ONE], &params);
    assert_eq!(scene.names(), vec!["track 0", "track 1"]);
}

#[test]
fn uv_sphere_is_unit_and_indexed() {
    let mesh = uv_sphere(32, 16);
    assert_eq!(mesh.vertices.len(), 33 * 17);
    assert_eq!(mesh.indices.len(), 32 * 16 * 6);
    for v in &mesh.vertices {
        let len = Vec3::from(v.position).length();
        assert!((len - 1.0).abs() < 1e-5);
        assert_eq!(v.position, v.normal);
    }
    let max = *mesh.indices.iter().max().unwrap() as usize;
    assert!(max < mesh.vertices.len());
}

#[test]
fn uv_sphere_clamps_degenerate_counts() {
    let mesh = uv_sphere(0, 0);
    assert_eq!(mesh.vertices.len(), 4 * 3);
    assert_eq!(mesh.indices.len(), 3 * 2 * 6);
}
