//! Paddle controller for pong-style games.
//!
//! The paddle only re-reads the ball every `reaction_delay_ms`. In between it
//! keeps chasing the last prediction, which is what makes lower tiers look
//! sluggish rather than random.

use rand::Rng;

use crate::config::Difficulty;
use crate::steering::Vec2;

/// Ball kinematics as seen by the paddle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ball {
    pub position: Vec2,
    pub velocity: Vec2,
}

/// Tuning for [`PongAi`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PongConfig {
    /// Minimum time between two target samples.
    pub reaction_delay_ms: f64,
    /// Half-width of the uniform error added to each predicted Y.
    pub prediction_error: f64,
    /// Paddle speed cap in units per second.
    pub paddle_speed: f64,
}

impl PongConfig {
    /// Preset tuning for `difficulty`.
    pub fn preset(difficulty: Difficulty) -> Self {
        let (reaction_delay_ms, prediction_error, speed_factor) = match difficulty {
            Difficulty::Easy => (300.0, 60.0, 0.5),
            Difficulty::Medium => (200.0, 35.0, 0.65),
            Difficulty::Hard => (120.0, 18.0, 0.8),
            Difficulty::Expert => (60.0, 6.0, 0.9),
            Difficulty::Impossible => (0.0, 0.0, 1.0),
        };

        Self {
            reaction_delay_ms,
            prediction_error,
            paddle_speed: Self::MAX_PADDLE_SPEED * speed_factor,
        }
    }

    const MAX_PADDLE_SPEED: f64 = 480.0;
}

impl Default for PongConfig {
    fn default() -> Self {
        Self::preset(Difficulty::Medium)
    }
}

/// AI-controlled paddle.
#[derive(Clone, Debug)]
pub struct PongAi {
    config: PongConfig,
    /// X coordinate of the paddle face.
    paddle_x: f64,
    paddle_height: f64,
    field_height: f64,
    target_y: Option<f64>,
    since_sample_ms: f64,
}

impl PongAi {
    pub fn new(config: PongConfig, paddle_x: f64, paddle_height: f64, field_height: f64) -> Self {
        Self {
            config,
            paddle_x,
            paddle_height,
            field_height,
            target_y: None,
            since_sample_ms: 0.0,
        }
    }

    pub fn config(&self) -> &PongConfig {
        &self.config
    }

    /// Y the paddle is currently chasing, if it has sampled the ball yet.
    pub fn target_y(&self) -> Option<f64> {
        self.target_y
    }

    /// Y where `ball` will cross the paddle face, folding bounces off the
    /// top and bottom walls. Returns the field center when the ball is
    /// moving away or not moving horizontally.
    pub fn predict_y(&self, ball: &Ball) -> f64 {
        let center = self.field_height / 2.0;
        let dx = self.paddle_x - ball.position.x;
        if ball.velocity.x == 0.0 || dx.signum() != ball.velocity.x.signum() {
            return center;
        }

        let time = dx / ball.velocity.x;
        let raw = ball.position.y + ball.velocity.y * time;
        fold(raw, self.field_height)
    }

    /// Advances the paddle by `dt` seconds and returns its new center Y.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        paddle_y: f64,
        ball: &Ball,
        dt: f64,
        rng: &mut R,
    ) -> f64 {
        self.since_sample_ms += dt * 1000.0;
        if self.target_y.is_none() || self.since_sample_ms >= self.config.reaction_delay_ms {
            let error = self.config.prediction_error;
            let noise = if error.is_finite() && error > 0.0 {
                rng.gen_range(-error..=error)
            } else {
                0.0
            };
            self.target_y = Some(self.predict_y(ball) + noise);
            self.since_sample_ms = 0.0;
        }

        let target = self.target_y.unwrap_or(paddle_y);
        let step = self.config.paddle_speed * dt;
        let delta = target - paddle_y;
        let next = if delta.abs() <= step {
            target
        } else {
            paddle_y + step * delta.signum()
        };

        let half = self.paddle_height / 2.0;
        next.clamp(half, (self.field_height - half).max(half))
    }
}

/// Folds an unbounded Y back into `[0, height]` as if reflected by walls.
fn fold(y: f64, height: f64) -> f64 {
    if height <= 0.0 {
        return 0.0;
    }
    let period = 2.0 * height;
    let wrapped = y.rem_euclid(period);
    if wrapped > height {
        period - wrapped
    } else {
        wrapped
    }
}
