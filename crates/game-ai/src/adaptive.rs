//! Adaptive difficulty controller.
//!
//! [`AdaptiveState`] watches round outcomes and nudges a scalar difficulty
//! toward a target success rate. Games read the scalar back through
//! [`AdaptiveState::adapted_value`] to scale their own parameters (enemy
//! speed, spawn rate, reaction time, ...).
//!
//! # Semantics
//!
//! - Every outcome is pushed into a FIFO of at most `window_size` entries.
//!   A success raises difficulty one `adjustment_rate` step when the rolling
//!   success rate is above `target_success_rate + 0.1`; a failure lowers it
//!   one step when the rate is below `target_success_rate - 0.1`. An outcome
//!   never moves difficulty the other way.
//! - Failures are also time-stamped. Three or more failures inside a trailing
//!   30 second window trigger a double-strength downward step instead of the
//!   regular one.
//! - `skill_estimate` drifts on its own: +0.02 per success, −0.03 per
//!   failure, clamped to `[0, 1]`.
//! - `current_difficulty` never leaves `[min_difficulty, max_difficulty]`.

use std::collections::VecDeque;

use tracing::debug;

use crate::error::{AiError, AiResult, ensure_unit};

/// Trailing window, in seconds, for the repeated-failure check.
pub const DEATH_WINDOW_SECS: f64 = 30.0;
/// Failures inside [`DEATH_WINDOW_SECS`] that trigger the double step.
pub const DEATH_STREAK: usize = 3;
/// Allowed deviation from the target rate before any adjustment happens.
const RATE_TOLERANCE: f64 = 0.1;
const SKILL_GAIN: f64 = 0.02;
const SKILL_LOSS: f64 = 0.03;

/// Tuning for [`AdaptiveState`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AdaptiveConfig {
    /// Number of recent outcomes considered.
    pub window_size: usize,
    /// Success rate the controller steers toward.
    pub target_success_rate: f64,
    /// Size of a single difficulty step.
    pub adjustment_rate: f64,
    pub min_difficulty: f64,
    pub max_difficulty: f64,
    /// Difficulty before any outcome is recorded; clamped into bounds.
    pub initial_difficulty: f64,
}

impl Default for AdaptiveConfig {
    fn default() -> Self {
        Self {
            window_size: 10,
            target_success_rate: 0.6,
            adjustment_rate: 0.05,
            min_difficulty: 0.1,
            max_difficulty: 1.0,
            initial_difficulty: 0.5,
        }
    }
}

impl AdaptiveConfig {
    /// Checks ranges of every field.
    pub fn validate(&self) -> AiResult<()> {
        if self.window_size == 0 {
            return Err(AiError::invalid("window_size", 0.0));
        }
        ensure_unit("target_success_rate", self.target_success_rate)?;
        ensure_unit("adjustment_rate", self.adjustment_rate)?;
        ensure_unit("min_difficulty", self.min_difficulty)?;
        ensure_unit("max_difficulty", self.max_difficulty)?;
        if self.min_difficulty > self.max_difficulty {
            return Err(AiError::invalid("min_difficulty", self.min_difficulty));
        }
        Ok(())
    }
}

/// Running state of the adaptive controller.
#[derive(Clone, Debug)]
pub struct AdaptiveState {
    config: AdaptiveConfig,
    skill_estimate: f64,
    recent_scores: VecDeque<bool>,
    recent_deaths: VecDeque<f64>,
    current_difficulty: f64,
}

impl AdaptiveState {
    /// Creates a controller after validating `config`.
    pub fn new(config: AdaptiveConfig) -> AiResult<Self> {
        config.validate()?;
        let current_difficulty = config
            .initial_difficulty
            .clamp(config.min_difficulty, config.max_difficulty);

        Ok(Self {
            skill_estimate: 0.5,
            recent_scores: VecDeque::with_capacity(config.window_size),
            recent_deaths: VecDeque::new(),
            current_difficulty,
            config,
        })
    }

    pub fn config(&self) -> &AdaptiveConfig {
        &self.config
    }

    pub fn current_difficulty(&self) -> f64 {
        self.current_difficulty
    }

    /// Loss-averse estimate of player skill in `[0, 1]`.
    pub fn skill_estimate(&self) -> f64 {
        self.skill_estimate
    }

    /// Fraction of successes in the current window, `None` before any outcome.
    pub fn success_rate(&self) -> Option<f64> {
        if self.recent_scores.is_empty() {
            return None;
        }
        let successes = self.recent_scores.iter().filter(|&&s| s).count();
        Some(successes as f64 / self.recent_scores.len() as f64)
    }

    /// Number of failures currently inside the trailing death window.
    pub fn recent_deaths(&self) -> usize {
        self.recent_deaths.len()
    }

    /// Records a player success.
    pub fn record_success(&mut self) {
        self.skill_estimate = (self.skill_estimate + SKILL_GAIN).min(1.0);
        self.push_score(true);
        if self
            .success_rate()
            .is_some_and(|rate| rate > self.config.target_success_rate + RATE_TOLERANCE)
        {
            self.nudge(self.config.adjustment_rate);
        }
    }

    /// Records a player failure at host time `now` (seconds).
    ///
    /// `now` must be non-decreasing across calls.
    pub fn record_failure(&mut self, now: f64) {
        self.skill_estimate = (self.skill_estimate - SKILL_LOSS).max(0.0);
        self.push_score(false);

        self.recent_deaths.push_back(now);
        while self
            .recent_deaths
            .front()
            .is_some_and(|&t| now - t > DEATH_WINDOW_SECS)
        {
            self.recent_deaths.pop_front();
        }

        if self.recent_deaths.len() >= DEATH_STREAK {
            debug!(
                deaths = self.recent_deaths.len(),
                difficulty = self.current_difficulty,
                "failure streak, easing off"
            );
            self.nudge(-2.0 * self.config.adjustment_rate);
        } else if self
            .success_rate()
            .is_some_and(|rate| rate < self.config.target_success_rate - RATE_TOLERANCE)
        {
            self.nudge(-self.config.adjustment_rate);
        }
    }

    /// Scales `base` by `1 + (difficulty − 0.5) × scaling`.
    ///
    /// A difficulty of 0.5 leaves `base` unchanged.
    pub fn adapted_value(&self, base: f64, scaling: f64) -> f64 {
        base * (1.0 + (self.current_difficulty - 0.5) * scaling)
    }

    fn push_score(&mut self, success: bool) {
        if self.recent_scores.len() == self.config.window_size {
            self.recent_scores.pop_front();
        }
        self.recent_scores.push_back(success);
    }

    fn nudge(&mut self, delta: f64) {
        self.current_difficulty = (self.current_difficulty + delta)
            .clamp(self.config.min_difficulty, self.config.max_difficulty);
    }
}
