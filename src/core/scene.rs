// Scene model for the constellation: one node per track, one edge per node.
//
// Built once at startup. Positions are in group space; the renderer applies
// the animated group rotation on top.

use super::layout::{random_positions, LayoutParams};
use super::neighbors::{neighbor_edges, NeighborEdge};
use glam::Vec3;
use rand::Rng;

#[derive(Clone, Debug)]
pub struct TrackNode {
    pub name: String,
    pub position: Vec3,
}

#[derive(Clone, Debug)]
pub struct TrackScene {
    nodes: Vec<TrackNode>,
    edges: Vec<NeighborEdge>,
    sphere_radius: f32,
    label_lift: f32,
}

impl TrackScene {
    pub fn build<R: Rng + ?Sized>(names: &[String], rng: &mut R, params: &LayoutParams) -> Self {
        let count = names.len().min(params.max_points);
        let positions = random_positions(rng, count, params.position_range);
        Self::from_positions(&names[..count], positions, params)
    }

    /// Pair names with caller-supplied positions; extra entries on either
    /// side are dropped.
    pub fn from_positions(names: &[String], positions: Vec<Vec3>, params: &LayoutParams) -> Self {
        let nodes: Vec<TrackNode> = names
            .iter()
            .zip(positions)
            .map(|(name, position)| TrackNode {
                name: name.clone(),
                position,
            })
            .collect();
        let points: Vec<Vec3> = nodes.iter().map(|n| n.position).collect();
        let edges = neighbor_edges(&points);
        Self {
            nodes,
            edges,
            sphere_radius: params.sphere_radius,
            label_lift: params.label_lift,
        }
    }

    pub fn nodes(&self) -> &[TrackNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[NeighborEdge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn sphere_radius(&self) -> f32 {
        self.sphere_radius
    }

    pub fn names(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.name.clone()).collect()
    }

    pub fn positions(&self) -> Vec<Vec3> {
        self.nodes.iter().map(|n| n.position).collect()
    }

    /// Endpoint pairs for each neighbor edge, in edge order.
    pub fn line_segments(&self) -> Vec<[Vec3; 2]> {
        self.edges
            .iter()
            .map(|e| [self.nodes[e.from].position, self.nodes[e.to].position])
            .collect()
    }

    /// Label baseline centers, one per node, just above each sphere.
    pub fn label_anchors(&self) -> Vec<Vec3> {
        self.nodes
            .iter()
            .map(|n| n.position + Vec3::Y * (self.sphere_radius + self.label_lift))
            .collect()
    }
}
