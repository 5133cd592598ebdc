//! Adversarial search over an abstract two-player game.
//!
//! Games plug in by implementing [`GameState`]. Two searches are offered:
//!
//! - [`Minimax`]: depth-limited minimax with alpha-beta pruning and optional
//!   score noise to produce beatable difficulty tiers
//! - [`mcts()`]: Monte Carlo Tree Search with UCB1 selection and random
//!   rollouts
//!
//! Both return `None` when the position has no legal move, which callers treat
//! as "game over" rather than a fault.

pub mod mcts;
pub mod minimax;

pub use mcts::{MctsConfig, MctsOutcome, MctsStats, mcts, mcts_best_move};
pub use minimax::{Minimax, SearchOutcome, SearchStats, best_move, minimax};

/// One of the two sides of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    One = 1,
    Two = 2,
}

impl Player {
    /// The other side.
    pub const fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Player number, `1` or `2`.
    pub const fn number(self) -> u8 {
        self as u8
    }
}

/// Capability contract every searchable game implements.
///
/// # Value Semantics
///
/// [`make_move`](GameState::make_move) must return a new state and leave the
/// receiver untouched. Alpha-beta explores moves speculatively and MCTS keeps
/// every visited state in its tree, so a state that changes after creation
/// corrupts both searches.
///
/// # Scoring
///
/// [`evaluate`](GameState::evaluate) returns a finite score where larger is
/// better for the side maximizing at the root of the search. The flag tells
/// the implementation whether the position being scored is a maximizing
/// node; most games can ignore it and score from a fixed perspective.
pub trait GameState: Clone {
    /// A move that can be applied to this state.
    type Move: Clone;

    /// Moves legal from this state. Empty when the game is over.
    fn possible_moves(&self) -> Vec<Self::Move>;

    /// Returns the state reached by playing `mv`.
    ///
    /// Only called with moves drawn from [`possible_moves`](GameState::possible_moves)
    /// of a non-terminal state.
    fn make_move(&self, mv: &Self::Move) -> Self;

    /// Whether the game has ended.
    fn is_terminal(&self) -> bool;

    /// Heuristic or terminal score of this state.
    fn evaluate(&self, maximizing_player: bool) -> f64;

    /// Side to move.
    fn current_player(&self) -> Player;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_numbers_and_opponents() {
        assert_eq!(Player::One.number(), 1);
        assert_eq!(Player::Two.number(), 2);
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent().opponent(), Player::Two);
    }
}
