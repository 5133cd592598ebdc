//! Game-specific AI built on top of the generic toolkit.
//!
//! These are thin, opinionated controllers for three arcade genres. They read
//! [`Difficulty`](crate::Difficulty) directly instead of a full
//! [`AiConfig`](crate::AiConfig) because none of them search.

pub mod block_stack;
pub mod invaders;
pub mod pong;

pub use block_stack::{
    Board, BoardFeatures, FeatureWeights, Placement, Shape, best_placement,
    placement_score,
};
pub use invaders::{InvaderPattern, PatternParams};
pub use pong::{Ball, PongAi, PongConfig};
