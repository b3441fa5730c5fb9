use super::constants::{LABEL_LIFT, MAX_TRACKS, POSITION_RANGE, SPHERE_RADIUS};
use glam::Vec3;
use rand::Rng;

/// Placement tuning for the track constellation.
#[derive(Clone, Debug)]
pub struct LayoutParams {
    /// Upper bound on placed tracks; extra names are ignored.
    pub max_points: usize,
    /// Half extent of the placement cube on each axis.
    pub position_range: f32,
    pub sphere_radius: f32,
    /// Vertical offset from a sphere's center to its label baseline.
    pub label_lift: f32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            max_points: MAX_TRACKS,
            position_range: POSITION_RANGE,
            sphere_radius: SPHERE_RADIUS,
            label_lift: LABEL_LIFT,
        }
    }
}

/// Uniformly random positions in `[-range, range)` on each axis.
pub fn random_positions<R: Rng + ?Sized>(rng: &mut R, count: usize, range: f32) -> Vec<Vec3> {
    let range = range.abs();
    if range == 0.0 {
        return vec![Vec3::ZERO; count];
    }
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-range..range),
                rng.gen_range(-range..range),
                rng.gen_range(-range..range),
            )
        })
        .collect()
}
