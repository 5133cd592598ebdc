//! Formation movement patterns for invader-style enemies.
//!
//! Patterns are stateless closed-form functions of elapsed time and the
//! invader's index in its formation, so any frame can be evaluated directly
//! and a whole wave stays in lockstep without shared state.

use std::f64::consts::TAU;

use strum::{Display, EnumIter, EnumString};

use crate::steering::Vec2;

/// Angular spacing used to spread scattering invaders evenly.
const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;

/// Shape of the per-invader offset from its formation slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum InvaderPattern {
    /// Smooth horizontal sway.
    Sine,
    /// Constant-speed horizontal sweep that reverses at the edges.
    Zigzag,
    /// Periodic swoop toward the player and back, with a slight sway.
    Dive,
    /// Burst outward from the slot and regroup.
    Scatter,
}

/// Shared parameters for a wave.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatternParams {
    /// Peak displacement in world units.
    pub amplitude: f64,
    /// Cycles per second.
    pub frequency: f64,
    /// Phase offset between consecutive invaders, in cycles.
    pub stagger: f64,
}

impl Default for PatternParams {
    fn default() -> Self {
        Self {
            amplitude: 40.0,
            frequency: 0.5,
            stagger: 0.1,
        }
    }
}

impl InvaderPattern {
    /// Offset of invader `index` from its slot `t` seconds into the wave.
    ///
    /// Positive `y` points toward the player.
    pub fn offset(self, t: f64, index: usize, params: &PatternParams) -> Vec2 {
        let cycles = params.frequency * t + index as f64 * params.stagger;
        let angle = cycles * TAU;
        let a = params.amplitude;

        match self {
            Self::Sine => Vec2::new(a * angle.sin(), 0.0),
            Self::Zigzag => Vec2::new(a * triangle(cycles), 0.0),
            Self::Dive => Vec2::new(0.25 * a * angle.sin(), a * (1.0 - angle.cos())),
            Self::Scatter => {
                let heading = index as f64 * GOLDEN_ANGLE;
                let reach = a * (params.frequency * t * TAU).sin().abs();
                Vec2::new(heading.cos(), heading.sin()) * reach
            }
        }
    }
}

/// Triangle wave in `[-1, 1]` with period 1, starting at 0 and rising.
fn triangle(cycles: f64) -> f64 {
    let p = (cycles + 0.25).rem_euclid(1.0);
    1.0 - 4.0 * (p - 0.5).abs()
}
