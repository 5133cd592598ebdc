//! Group behaviors over a neighbor list.
//!
//! Neighbors at exactly the agent's own position (including the agent itself
//! when the host passes the whole flock) are ignored.

use super::{Agent, Vec2};

/// Relative weights of the three flocking forces.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlockWeights {
    pub separation: f64,
    pub alignment: f64,
    pub cohesion: f64,
}

impl Default for FlockWeights {
    fn default() -> Self {
        Self {
            separation: 1.5,
            alignment: 1.0,
            cohesion: 1.0,
        }
    }
}

/// Radii and weights for [`flock`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlockParams {
    /// Neighbors closer than this push the agent away.
    pub separation_radius: f64,
    /// Neighbors closer than this are matched and gathered toward.
    pub neighbor_radius: f64,
    pub weights: FlockWeights,
}

impl Default for FlockParams {
    fn default() -> Self {
        Self {
            separation_radius: 25.0,
            neighbor_radius: 50.0,
            weights: FlockWeights::default(),
        }
    }
}

fn in_range<'a>(
    agent: &'a Agent,
    neighbors: &'a [Agent],
    radius: f64,
) -> impl Iterator<Item = (&'a Agent, f64)> + 'a {
    neighbors.iter().filter_map(move |other| {
        let distance = agent.position.distance(other.position);
        (distance > 0.0 && distance < radius).then_some((other, distance))
    })
}

/// Pushes away from neighbors within `radius`, closer ones harder.
pub fn separate(agent: &Agent, neighbors: &[Agent], radius: f64) -> Vec2 {
    let mut sum = Vec2::ZERO;
    let mut count = 0u32;
    for (other, distance) in in_range(agent, neighbors, radius) {
        sum += (agent.position - other.position).normalize() / distance;
        count += 1;
    }

    if count == 0 {
        return Vec2::ZERO;
    }
    let average = sum / f64::from(count);
    agent.steer_towards(average.with_length(agent.max_speed))
}

/// Matches the average velocity of neighbors within `radius`.
pub fn align(agent: &Agent, neighbors: &[Agent], radius: f64) -> Vec2 {
    let mut sum = Vec2::ZERO;
    let mut count = 0u32;
    for (other, _) in in_range(agent, neighbors, radius) {
        sum += other.velocity;
        count += 1;
    }

    if count == 0 {
        return Vec2::ZERO;
    }
    let average = sum / f64::from(count);
    agent.steer_towards(average.with_length(agent.max_speed))
}

/// Seeks the center of neighbors within `radius`.
pub fn cohesion(agent: &Agent, neighbors: &[Agent], radius: f64) -> Vec2 {
    let mut sum = Vec2::ZERO;
    let mut count = 0u32;
    for (other, _) in in_range(agent, neighbors, radius) {
        sum += other.position;
        count += 1;
    }

    if count == 0 {
        return Vec2::ZERO;
    }
    super::seek(agent, sum / f64::from(count))
}

/// Weighted sum of separation, alignment and cohesion.
///
/// Each component is clamped on its own; the weighted sum is not, so a
/// heavier separation weight can override the other two.
pub fn flock(agent: &Agent, neighbors: &[Agent], params: &FlockParams) -> Vec2 {
    let weights = params.weights;
    separate(agent, neighbors, params.separation_radius) * weights.separation
        + align(agent, neighbors, params.neighbor_radius) * weights.alignment
        + cohesion(agent, neighbors, params.neighbor_radius) * weights.cohesion
}
