use std::f32::consts::TAU;

use eframe::egui::{Pos2, pos2};
use rand::Rng;
use tracing::warn;

use crate::util::{Circle, circle_overlap};

pub const MAX_PLACEMENT_ATTEMPTS: usize = 20;
const PLACEMENT_RADIUS_SCALE: f32 = 700.0;
const CLUSTER_RADIUS_SCALE: f32 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClusterPoint {
    pub x: f32,
    pub y: f32,
    pub r: f32,
}

impl ClusterPoint {
    pub fn new(x: f32, y: f32, r: f32) -> Self {
        Self { x, y, r }
    }

    pub fn diameter(self) -> f32 {
        self.r * 2.0
    }

    pub fn center(self) -> Pos2 {
        pos2(self.x, self.y)
    }

    pub fn circle(self) -> Circle {
        Circle::new(self.x, self.y, self.r)
    }
}

#[derive(Clone, Debug)]
pub struct ClusterPlacement {
    /// `points[id - 1]` is the anchor of cluster `id`.
    pub points: Vec<ClusterPoint>,
    pub exhausted: Vec<u32>,
}

impl ClusterPlacement {
    pub fn overlap_free(&self) -> bool {
        self.exhausted.is_empty()
    }

    pub fn point(&self, cluster_id: u32) -> Option<ClusterPoint> {
        let index = usize::try_from(cluster_id).ok()?.checked_sub(1)?;
        self.points.get(index).copied()
    }
}

pub fn placement_radius(cluster_count: usize) -> f32 {
    (cluster_count.max(1) as f32).ln() * PLACEMENT_RADIUS_SCALE
}

pub fn cluster_radius(cluster_size: usize) -> f32 {
    (cluster_size.max(1) as f32).ln() * CLUSTER_RADIUS_SCALE
}

fn radial_distance<R: Rng>(rng: &mut R, max: f32) -> f32 {
    if max > 1.0 {
        rng.gen_range(1.0..=max)
    } else {
        1.0
    }
}

fn polar_offset<R: Rng>(rng: &mut R, center: Pos2, max_distance: f32) -> Pos2 {
    let angle = rng.gen_range(0.0..TAU);
    let distance = radial_distance(rng, max_distance);
    pos2(
        center.x + angle.sin() * distance,
        center.y + angle.cos() * distance,
    )
}

fn taken(placed: &[ClusterPoint], candidate: ClusterPoint) -> bool {
    placed
        .iter()
        .any(|other| circle_overlap(other.circle(), candidate.circle()))
}

pub fn place_clusters<R: Rng>(
    cluster_sizes: &[usize],
    center: Pos2,
    rng: &mut R,
) -> ClusterPlacement {
    let spread = placement_radius(cluster_sizes.len()) / 2.0;
    let mut points: Vec<ClusterPoint> = Vec::with_capacity(cluster_sizes.len());
    let mut exhausted = Vec::new();

    for (index, &size) in cluster_sizes.iter().enumerate() {
        let radius = cluster_radius(size);
        let mut sample = || {
            let position = polar_offset(rng, center, spread);
            ClusterPoint::new(position.x, position.y, radius)
        };

        let mut candidate = sample();
        let mut attempts = 1;
        while taken(&points, candidate) && attempts < MAX_PLACEMENT_ATTEMPTS {
            candidate = sample();
            attempts += 1;
        }

        if taken(&points, candidate) {
            let cluster_id = index as u32 + 1;
            warn!(
                cluster_id,
                attempts, "cluster placement exhausted retries, accepting overlap"
            );
            exhausted.push(cluster_id);
        }

        points.push(candidate);
    }

    ClusterPlacement { points, exhausted }
}

pub fn scatter_in_cluster<R: Rng>(anchor: ClusterPoint, rng: &mut R) -> Pos2 {
    polar_offset(rng, anchor.center(), anchor.r / 2.0)
}
