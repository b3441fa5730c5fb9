// Host-side tests for nearest-neighbor pairing.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod neighbors {
    include!("../src/core/neighbors.rs");
}

use glam::Vec3;
use neighbors::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_points(seed: u64, n: usize) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-2.0..2.0),
                rng.gen_range(-2.0..2.0),
                rng.gen_range(-2.0..2.0),
            )
        })
        .collect()
}

#[test]
fn neighbor_has_strictly_smallest_positive_distance() {
    for seed in 0..50 {
        let pts = random_points(seed, 10);
        let nn = nearest_neighbors(&pts);
        assert_eq!(nn.len(), pts.len());
        for (i, n) in nn.iter().enumerate() {
            let j = n.expect("random points always have a neighbor");
            assert_ne!(i, j);
            let dj = pts[i].as_dvec3().distance(pts[j].as_dvec3());
            assert!(dj > 0.0);
            for (k, p) in pts.iter().enumerate() {
                if k == i || k == j {
                    continue;
                }
                let dk = pts[i].as_dvec3().distance(p.as_dvec3());
                assert!(dk >= dj, "seed {seed}: point {k} is closer to {i} than {j}");
            }
        }
    }
}

#[test]
fn far_outlier_pairs_with_closest_cluster_member() {
    let pts = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.1, 0.0, 0.0),
        Vec3::new(0.0, 0.2, 0.0),
        Vec3::new(0.3, 0.3, 0.0),
        Vec3::new(10.0, 10.0, 10.0),
    ];
    let nn = nearest_neighbors(&pts);
    assert_eq!(nn[4], Some(3));
    // The outlier is nobody else's neighbor.
    assert!(nn[..4].iter().all(|n| *n != Some(4)));
}

#[test]
fn recomputing_is_idempotent() {
    let pts = random_points(7, 10);
    let a = nearest_neighbors(&pts);
    let b = nearest_neighbors(&pts);
    assert_eq!(a, b);
    assert_eq!(neighbor_edges(&pts), neighbor_edges(&pts));
}

#[test]
fn two_points_are_mutual_neighbors() {
    let pts = vec![Vec3::new(-1.0, 0.5, 0.0), Vec3::new(1.0, -0.5, 2.0)];
    assert_eq!(nearest_neighbors(&pts), vec![Some(1), Some(0)]);
    let edges = neighbor_edges(&pts);
    assert_eq!(edges.len(), 2);
    assert_eq!((edges[0].from, edges[0].to), (0, 1));
    assert_eq!((edges[1].from, edges[1].to), (1, 0));
    assert!((edges[0].distance - pts[0].distance(pts[1])).abs() < 1e-6);
}

#[test]
fn zero_or_one_point_yields_no_edges() {
    assert!(nearest_neighbors(&[]).is_empty());
    assert!(neighbor_edges(&[]).is_empty());
    assert_eq!(nearest_neighbors(&[Vec3::ONE]), vec![None]);
    assert!(neighbor_edges(&[Vec3::ONE]).is_empty());
}

#[test]
fn coincident_points_are_skipped() {
    let pts = vec![Vec3::ZERO, Vec3::ZERO, Vec3::new(3.0, 0.0, 0.0)];
    let nn = nearest_neighbors(&pts);
    assert_eq!(nn, vec![Some(2), Some(2), Some(0)]);
}

#[test]
fn all_coincident_points_have_no_neighbor() {
    let pts = vec![Vec3::ONE; 3];
    assert_eq!(nearest_neighbors(&pts), vec![None, None, None]);
    assert!(neighbor_edges(&pts).is_empty());
}

#[test]
fn ties_keep_lowest_index() {
    let pts = vec![
        Vec3::ZERO,
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(-1.0, 0.0, 0.0),
    ];
    assert_eq!(nearest_neighbor(&pts, 0).map(|(j, _)| j), Some(1));
}

#[test]
fn out_of_range_index_has_no_neighbor() {
    let pts = random_points(1, 3);
    assert_eq!(nearest_neighbor(&pts, 3), None);
}

#[test]
fn one_edge_per_point_not_deduplicated() {
    let pts = random_points(42, 10);
    let edges = neighbor_edges(&pts);
    assert_eq!(edges.len(), 10);
    for (i, e) in edges.iter().enumerate() {
        assert_eq!(e.from, i);
    }
}

#[test]
fn tiny_separations_still_count_as_distinct() {
    // Squared separation of 1e-46 is below the smallest f32 subnormal.
    // Point 2 sees 0 and 1 at the same distance, so the lower index wins.
    let pts = vec![
        Vec3::ZERO,
        Vec3::new(1e-23, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
    ];
    assert_eq!(nearest_neighbors(&pts), vec![Some(1), Some(0), Some(0)]);
    let (j, d) = nearest_neighbor(&pts, 0).unwrap();
    assert_eq!(j, 1);
    assert!(d > 0.0);
}

#[test]
fn reported_distance_is_euclidean() {
    let pts = vec![Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0)];
    let edges = neighbor_edges(&pts);
    assert_eq!(edges.len(), 2);
    assert!((edges[0].distance - 5.0).abs() < 1e-6);
}
