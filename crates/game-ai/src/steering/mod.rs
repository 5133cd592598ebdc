//! Kinematic steering behaviors.
//!
//! Every behavior is a pure function from an [`Agent`] (plus targets or
//! neighbors) to a steering force clamped to `agent.max_force`. Hosts sum or
//! pick forces and feed the result to [`Agent::apply_force`] once per frame.

mod behaviors;
mod flocking;
mod vector;

pub use behaviors::{WanderParams, arrive, evade, flee, pursue, seek, wander};
pub use flocking::{FlockParams, FlockWeights, align, cohesion, flock, separate};
pub use vector::Vec2;

/// Kinematic state of a steered agent.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub position: Vec2,
    pub velocity: Vec2,
    pub max_speed: f64,
    pub max_force: f64,
}

impl Agent {
    pub fn new(position: Vec2, max_speed: f64, max_force: f64) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            max_speed,
            max_force,
        }
    }

    #[must_use]
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Direction of travel, `(1, 0)` when standing still.
    pub fn heading(&self) -> Vec2 {
        if self.velocity.is_zero() {
            Vec2::UNIT_X
        } else {
            self.velocity.normalize()
        }
    }

    /// Integrates `force` over `dt` seconds, capping speed at `max_speed`.
    pub fn apply_force(&mut self, force: Vec2, dt: f64) {
        let force = force.limit(self.max_force);
        self.velocity = (self.velocity + force * dt).limit(self.max_speed);
        self.position += self.velocity * dt;
    }

    /// Turns a desired velocity into a clamped steering force.
    pub(crate) fn steer_towards(&self, desired: Vec2) -> Vec2 {
        (desired - self.velocity).limit(self.max_force)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_falls_back_when_still() {
        let agent = Agent::new(Vec2::ZERO, 5.0, 1.0);
        assert_eq!(agent.heading(), Vec2::UNIT_X);

        let moving = agent.with_velocity(Vec2::new(0.0, -2.0));
        assert_eq!(moving.heading(), Vec2::new(0.0, -1.0));
    }

    #[test]
    fn apply_force_caps_speed() {
        let mut agent = Agent::new(Vec2::ZERO, 2.0, 100.0);
        for _ in 0..10 {
            agent.apply_force(Vec2::new(100.0, 0.0), 1.0);
        }
        assert!((agent.velocity.length() - 2.0).abs() < 1e-12);
        assert!(agent.position.x > 0.0);
    }
}
