//! Single-target behaviors: seek, flee, arrive, pursue, evade and wander.

use rand::Rng;

use super::{Agent, Vec2};

/// Distance below which [`arrive`] stops steering.
const ARRIVAL_SNAP: f64 = 1.0;

/// Steers straight toward `target` at full speed.
pub fn seek(agent: &Agent, target: Vec2) -> Vec2 {
    let desired = (target - agent.position).with_length(agent.max_speed);
    agent.steer_towards(desired)
}

/// Steers straight away from `threat` at full speed.
pub fn flee(agent: &Agent, threat: Vec2) -> Vec2 {
    let desired = (agent.position - threat).with_length(agent.max_speed);
    agent.steer_towards(desired)
}

/// Like [`seek`] but slows down linearly inside `slow_radius`.
///
/// Returns zero once within one unit of the target so the agent settles
/// instead of jittering around it.
pub fn arrive(agent: &Agent, target: Vec2, slow_radius: f64) -> Vec2 {
    let offset = target - agent.position;
    let distance = offset.length();
    if distance < ARRIVAL_SNAP {
        return Vec2::ZERO;
    }

    let speed = if distance < slow_radius {
        agent.max_speed * (distance / slow_radius)
    } else {
        agent.max_speed
    };
    agent.steer_towards(offset.with_length(speed))
}

/// Seeks the point where `target` will be, assuming it keeps its velocity.
///
/// The look-ahead time is `distance / agent.max_speed`.
pub fn pursue(agent: &Agent, target: &Agent) -> Vec2 {
    seek(agent, predict(agent, target))
}

/// Flees the point where `target` will be, assuming it keeps its velocity.
pub fn evade(agent: &Agent, target: &Agent) -> Vec2 {
    flee(agent, predict(agent, target))
}

fn predict(agent: &Agent, target: &Agent) -> Vec2 {
    let distance = agent.position.distance(target.position);
    let look_ahead = if agent.max_speed > 0.0 {
        distance / agent.max_speed
    } else {
        0.0
    };
    target.position + target.velocity * look_ahead
}

/// Parameters for [`wander`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WanderParams {
    /// How far ahead of the agent the wander point is projected.
    pub distance: f64,
    /// Maximum random displacement of the wander point on each axis.
    pub jitter: f64,
}

impl Default for WanderParams {
    fn default() -> Self {
        Self {
            distance: 50.0,
            jitter: 20.0,
        }
    }
}

/// Seeks a randomly jittered point projected ahead of the agent's heading.
pub fn wander<R: Rng + ?Sized>(agent: &Agent, params: WanderParams, rng: &mut R) -> Vec2 {
    let ahead = agent.position + agent.heading() * params.distance;
    let jitter = if params.jitter.is_finite() && params.jitter > 0.0 {
        Vec2::new(
            rng.gen_range(-params.jitter..=params.jitter),
            rng.gen_range(-params.jitter..=params.jitter),
        )
    } else {
        Vec2::ZERO
    };
    seek(agent, ahead + jitter)
}
