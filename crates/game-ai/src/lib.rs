//! Game AI and decision toolkit shared by the arcade catalog.
//!
//! `game-ai` collects the algorithmic pieces individual games lean on when
//! they need an opponent or a moving enemy: adversarial search over any
//! [`GameState`], grid pathfinding over any [`PathfindingGrid`], finite state
//! machines, steering behaviors, and an adaptive difficulty controller. Game
//! specific rules stay in the games; this crate only sees them through the
//! traits re-exported here.
//!
//! Everything is synchronous and single-threaded. Hosts call into the toolkit
//! from their frame or turn logic and pass in their own random source, so a
//! seeded generator makes any search reproducible.
//!
//! Behavior trees live in the [`behavior_tree`] crate and are re-exported as
//! [`behavior`].
pub mod adaptive;
pub mod config;
pub mod error;
pub mod fsm;
pub mod games;
pub mod pathfinding;
pub mod search;
pub mod steering;
pub mod wrappers;

pub use behavior_tree as behavior;

pub use adaptive::{AdaptiveConfig, AdaptiveState};
pub use config::{AiConfig, Difficulty, Personality};
pub use error::{AiError, AiResult};
pub use fsm::{FsmState, StateMachine, Transition};
pub use pathfinding::{AsciiGrid, PathfindingGrid, Point, astar, bfs, flood_fill};
pub use search::{
    GameState, MctsConfig, MctsOutcome, MctsStats, Minimax, Player, SearchOutcome, SearchStats,
    best_move, mcts, mcts_best_move, minimax,
};
pub use steering::{Agent, FlockParams, FlockWeights, Vec2};
