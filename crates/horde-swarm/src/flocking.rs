//! Separation, alignment and cohesion.
//!
//! All rules read a [`Neighborhood`] snapshot taken before any agent moves,
//! so the outcome of a tick does not depend on iteration order.

use horde_types::Vec2;

/// Kinematic state of one agent as seen by its neighbors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boid {
    /// Position at the start of the tick.
    pub position: Vec2,
    /// Velocity at the start of the tick.
    pub velocity: Vec2,
}

/// Frozen view of the whole swarm for one tick.
#[derive(Debug, Clone, Default)]
pub struct Neighborhood {
    boids: Vec<Boid>,
}

impl Neighborhood {
    /// Snapshot the given boids.
    pub fn new(boids: Vec<Boid>) -> Self {
        Self { boids }
    }

    /// Number of boids in the snapshot.
    pub fn len(&self) -> usize {
        self.boids.len()
    }

    /// Whether the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    /// Neighbors of the boid at `index`: every other boid strictly closer
    /// than `radius`.
    pub fn neighbors(&self, index: usize, radius: f64) -> Vec<Boid> {
        let Some(me) = self.boids.get(index) else {
            return Vec::new();
        };
        self.boids
            .iter()
            .enumerate()
            .filter(|&(i, other)| i != index && me.position.distance(other.position) < radius)
            .map(|(_, other)| *other)
            .collect()
    }
}

/// Mean of unit vectors pointing away from each neighbor.
///
/// A coincident neighbor has no direction; it contributes zero but still
/// counts towards the mean.
pub fn separation(me: &Boid, neighbors: &[Boid]) -> Vec2 {
    if neighbors.is_empty() {
        return Vec2::ZERO;
    }
    let sum = neighbors.iter().fold(Vec2::ZERO, |acc, other| {
        acc + (me.position - other.position).normalized().unwrap_or(Vec2::ZERO)
    });
    sum / neighbors.len() as f64
}

/// Mean neighbor velocity minus own velocity.
pub fn alignment(me: &Boid, neighbors: &[Boid]) -> Vec2 {
    if neighbors.is_empty() {
        return Vec2::ZERO;
    }
    let sum = neighbors.iter().fold(Vec2::ZERO, |acc, other| acc + other.velocity);
    sum / neighbors.len() as f64 - me.velocity
}

/// `factor` times the offset from own position to the neighbor centroid.
pub fn cohesion(me: &Boid, neighbors: &[Boid], factor: f64) -> Vec2 {
    if neighbors.is_empty() {
        return Vec2::ZERO;
    }
    let sum = neighbors.iter().fold(Vec2::ZERO, |acc, other| acc + other.position);
    (sum / neighbors.len() as f64 - me.position) * factor
}

/// Rule weights applied by [`steering`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    /// Separation weight.
    pub separation: f64,
    /// Alignment weight.
    pub alignment: f64,
    /// Cohesion weight.
    pub cohesion: f64,
    /// Cohesion factor.
    pub cohesion_factor: f64,
}

/// Weighted sum of the three rules, as a velocity change per second.
pub fn steering(me: &Boid, neighbors: &[Boid], weights: &Weights) -> Vec2 {
    separation(me, neighbors) * weights.separation
        + alignment(me, neighbors) * weights.alignment
        + cohesion(me, neighbors, weights.cohesion_factor) * weights.cohesion
}

/// Teleport a coordinate that left `[0, extent]` to the opposite edge.
pub fn wrap(value: f64, extent: f64) -> f64 {
    if value < 0.0 {
        extent
    } else if value > extent {
        0.0
    } else {
        value
    }
}
