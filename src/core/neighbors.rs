use glam::Vec3;

/// Directed edge from a point to its nearest other point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NeighborEdge {
    pub from: usize,
    pub to: usize,
    pub distance: f32,
}

/// Brute-force scan for the point closest to `points[i]`.
///
/// Coincident points are skipped. On ties the lower index wins. Returns
/// `None` when `i` is out of range or every other point coincides with it.
///
/// Squared distances are ranked in f64; in f32 they underflow to zero for
/// separations below roughly 1e-22.
pub fn nearest_neighbor(points: &[Vec3], i: usize) -> Option<(usize, f32)> {
    let origin = *points.get(i)?;
    let mut best: Option<(usize, f64)> = None;
    for (j, p) in points.iter().enumerate() {
        if j == i || *p == origin {
            continue;
        }
        let d2 = origin.as_dvec3().distance_squared(p.as_dvec3());
        match best {
            Some((_, bd2)) if d2 >= bd2 => {}
            _ => best = Some((j, d2)),
        }
    }
    best.map(|(j, d2)| (j, d2.sqrt() as f32))
}

/// Nearest neighbor index for every point, aligned with `points`.
///
/// Sets with fewer than two points have no neighbors at all.
pub fn nearest_neighbors(points: &[Vec3]) -> Vec<Option<usize>> {
    if points.len() < 2 {
        return vec![None; points.len()];
    }
    (0..points.len())
        .map(|i| nearest_neighbor(points, i).map(|(j, _)| j))
        .collect()
}

/// One edge per point that has a neighbor. Not deduplicated: mutual
/// neighbors yield two edges.
pub fn neighbor_edges(points: &[Vec3]) -> Vec<NeighborEdge> {
    if points.len() < 2 {
        return Vec::new();
    }
    (0..points.len())
        .filter_map(|i| {
            nearest_neighbor(points, i).map(|(to, distance)| NeighborEdge {
                from: i,
                to,
                distance,
            })
        })
        .collect()
}
