//! Monte Carlo Tree Search.
//!
//! Each iteration runs the four classic phases in order:
//!
//! 1. **Selection**: descend from the root through fully expanded,
//!    non-terminal nodes, picking the child with the highest UCB1 value
//! 2. **Expansion**: detach one random untried move and attach its child
//! 3. **Simulation**: play uniformly random moves until the game ends or the
//!    rollout cap is reached
//! 4. **Backpropagation**: credit the result to every node on the path back
//!    to the root
//!
//! # Scoring
//!
//! A rollout counts as a win (`1.0`) when `evaluate(true)` is positive, half
//! a win for exactly zero, nothing otherwise. The same credit is added at
//! every ancestor; it is not flipped per ply. Opponent nodes are therefore
//! explored as if the opponent cooperated with the root player. Existing
//! games are tuned against this behavior, so it is kept.
//!
//! # Memory
//!
//! Nodes live in a flat arena and refer to each other by index; a node's
//! parent link is a plain index, never an owning pointer. The whole tree is
//! dropped once the move has been chosen.

use std::time::{Duration, Instant};

use rand::Rng;
use rand::seq::SliceRandom;

use super::GameState;

/// Tuning knobs for a search.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MctsConfig {
    /// Number of select/expand/simulate/backpropagate rounds.
    pub iterations: u32,
    /// UCB1 exploration constant.
    pub exploration: f64,
    /// Maximum number of random plies per rollout.
    pub max_rollout_depth: u32,
    /// Optional wall-clock cap, checked between iterations only.
    #[cfg_attr(feature = "serde", serde(default))]
    pub time_budget: Option<Duration>,
}

impl MctsConfig {
    pub const DEFAULT_EXPLORATION: f64 = 1.41;
    pub const DEFAULT_ROLLOUT_DEPTH: u32 = 50;

    /// Fixed iteration count with the default constants.
    pub fn with_iterations(iterations: u32) -> Self {
        Self {
            iterations,
            ..Self::default()
        }
    }

    /// Adds a wall-clock cap (builder pattern).
    #[must_use]
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            exploration: Self::DEFAULT_EXPLORATION,
            max_rollout_depth: Self::DEFAULT_ROLLOUT_DEPTH,
            time_budget: None,
        }
    }
}

/// Counters describing a finished search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MctsStats {
    /// Iterations actually run (fewer than configured if the budget ran out).
    pub iterations: u32,
    /// Visits recorded at the root.
    pub root_visits: u32,
    /// Nodes in the tree, root included.
    pub tree_size: usize,
}

/// Chosen move plus search counters.
#[derive(Clone, Debug, PartialEq)]
pub struct MctsOutcome<M> {
    /// Most visited root child, `None` if the root had no children.
    pub best_move: Option<M>,
    pub stats: MctsStats,
}

struct Node<S: GameState> {
    state: S,
    parent: Option<usize>,
    children: Vec<usize>,
    mv: Option<S::Move>,
    visits: u32,
    wins: f64,
    untried: Vec<S::Move>,
    terminal: bool,
}

impl<S: GameState> Node<S> {
    fn new(state: S, parent: Option<usize>, mv: Option<S::Move>) -> Self {
        let terminal = state.is_terminal();
        let untried = if terminal {
            Vec::new()
        } else {
            state.possible_moves()
        };
        Self {
            state,
            parent,
            children: Vec::new(),
            mv,
            visits: 0,
            wins: 0.0,
            untried,
            terminal,
        }
    }

    fn fully_expanded(&self) -> bool {
        self.untried.is_empty()
    }
}

struct Tree<S: GameState> {
    nodes: Vec<Node<S>>,
    exploration: f64,
}

impl<S: GameState> Tree<S> {
    const ROOT: usize = 0;

    fn new(root: &S, exploration: f64) -> Self {
        Self {
            nodes: vec![Node::new(root.clone(), None, None)],
            exploration,
        }
    }

    fn select(&self) -> usize {
        let mut current = Self::ROOT;
        loop {
            let node = &self.nodes[current];
            if node.terminal || !node.fully_expanded() || node.children.is_empty() {
                return current;
            }
            current = self.best_ucb_child(current);
        }
    }

    fn best_ucb_child(&self, parent: usize) -> usize {
        let node = &self.nodes[parent];
        let ln_parent = f64::from(node.visits).ln();

        let mut best = node.children[0];
        let mut best_value = f64::NEG_INFINITY;
        for &child in &node.children {
            let value = self.ucb1(child, ln_parent);
            if value > best_value {
                best_value = value;
                best = child;
            }
        }
        best
    }

    fn ucb1(&self, child: usize, ln_parent_visits: f64) -> f64 {
        let node = &self.nodes[child];
        if node.visits == 0 {
            return f64::INFINITY;
        }
        let visits = f64::from(node.visits);
        node.wins / visits + self.exploration * (ln_parent_visits / visits).sqrt()
    }

    fn expand<R: Rng + ?Sized>(&mut self, index: usize, rng: &mut R) -> usize {
        let node = &mut self.nodes[index];
        if node.terminal || node.untried.is_empty() {
            return index;
        }

        let pick = rng.gen_range(0..node.untried.len());
        let mv = node.untried.swap_remove(pick);
        let state = node.state.make_move(&mv);

        let child = self.nodes.len();
        self.nodes.push(Node::new(state, Some(index), Some(mv)));
        self.nodes[index].children.push(child);
        child
    }

    fn simulate<R: Rng + ?Sized>(&self, index: usize, max_depth: u32, rng: &mut R) -> f64 {
        let mut state = self.nodes[index].state.clone();
        let mut depth = 0;

        while depth < max_depth && !state.is_terminal() {
            let moves = state.possible_moves();
            let Some(mv) = moves.choose(rng) else {
                break;
            };
            state = state.make_move(mv);
            depth += 1;
        }

        reward(state.evaluate(true))
    }

    fn backpropagate(&mut self, index: usize, reward: f64) {
        let mut cursor = Some(index);
        while let Some(current) = cursor {
            let node = &mut self.nodes[current];
            node.visits += 1;
            node.wins += reward;
            cursor = node.parent;
        }
    }

    fn most_visited_move(&self) -> Option<S::Move> {
        let root = &self.nodes[Self::ROOT];
        let mut best: Option<&Node<S>> = None;
        for &child in &root.children {
            let node = &self.nodes[child];
            if best.is_none_or(|b| node.visits > b.visits) {
                best = Some(node);
            }
        }
        best.and_then(|node| node.mv.clone())
    }
}

/// Win credit for a rollout's final evaluation.
fn reward(score: f64) -> f64 {
    if score > 0.0 {
        1.0
    } else if score == 0.0 {
        0.5
    } else {
        0.0
    }
}

/// Runs a full search from `state` and returns the most visited move.
pub fn mcts<S, R>(state: &S, config: &MctsConfig, rng: &mut R) -> MctsOutcome<S::Move>
where
    S: GameState,
    R: Rng + ?Sized,
{
    let started = Instant::now();
    let mut tree = Tree::new(state, config.exploration);
    let mut iterations = 0;

    while iterations < config.iterations {
        if let Some(budget) = config.time_budget
            && started.elapsed() >= budget
        {
            tracing::debug!(iterations, ?budget, "mcts time budget exhausted");
            break;
        }

        let selected = tree.select();
        let expanded = tree.expand(selected, rng);
        let reward = tree.simulate(expanded, config.max_rollout_depth, rng);
        tree.backpropagate(expanded, reward);
        iterations += 1;
    }

    let stats = MctsStats {
        iterations,
        root_visits: tree.nodes[Tree::<S>::ROOT].visits,
        tree_size: tree.nodes.len(),
    };
    let best_move = tree.most_visited_move();

    tracing::debug!(
        iterations = stats.iterations,
        root_visits = stats.root_visits,
        tree_size = stats.tree_size,
        found = best_move.is_some(),
        "mcts search finished"
    );

    MctsOutcome { best_move, stats }
}

/// Runs `iterations` rounds with default constants and the thread-local
/// random source.
pub fn mcts_best_move<S: GameState>(state: &S, iterations: u32) -> Option<S::Move> {
    mcts(
        state,
        &MctsConfig::with_iterations(iterations),
        &mut rand::thread_rng(),
    )
    .best_move
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::search::Player;

    /// Race to 10: players alternately add 1 or 2, the side that reaches 10
    /// wins. Scored for player one.
    #[derive(Clone, Debug)]
    struct Race {
        total: u32,
        to_move: Player,
    }

    impl GameState for Race {
        type Move = u32;

        fn possible_moves(&self) -> Vec<u32> {
            if self.is_terminal() { Vec::new() } else { vec![1, 2] }
        }

        fn make_move(&self, mv: &u32) -> Self {
            Self {
                total: (self.total + mv).min(10),
                to_move: self.to_move.opponent(),
            }
        }

        fn is_terminal(&self) -> bool {
            self.total >= 10
        }

        fn evaluate(&self, _maximizing_player: bool) -> f64 {
            if !self.is_terminal() {
                0.0
            } else if self.to_move == Player::Two {
                // Player one made the last move
                1.0
            } else {
                -1.0
            }
        }

        fn current_player(&self) -> Player {
            self.to_move
        }
    }

    #[test]
    fn reward_credits() {
        assert_eq!(reward(3.0), 1.0);
        assert_eq!(reward(0.0), 0.5);
        assert_eq!(reward(-0.1), 0.0);
    }

    #[test]
    fn terminal_root_has_no_move() {
        let mut rng = StdRng::seed_from_u64(3);
        let state = Race {
            total: 10,
            to_move: Player::One,
        };
        let outcome = mcts(&state, &MctsConfig::with_iterations(100), &mut rng);

        assert_eq!(outcome.best_move, None);
        assert_eq!(outcome.stats.tree_size, 1);
    }

    #[test]
    fn root_visits_equal_iterations() {
        let mut rng = StdRng::seed_from_u64(11);
        let state = Race {
            total: 0,
            to_move: Player::One,
        };
        let outcome = mcts(&state, &MctsConfig::with_iterations(250), &mut rng);

        assert_eq!(outcome.stats.iterations, 250);
        assert_eq!(outcome.stats.root_visits, 250);
        assert!(outcome.best_move.is_some());
    }

    #[test]
    fn takes_immediate_win() {
        let mut rng = StdRng::seed_from_u64(5);
        let state = Race {
            total: 8,
            to_move: Player::One,
        };
        let outcome = mcts(&state, &MctsConfig::with_iterations(200), &mut rng);

        assert_eq!(outcome.best_move, Some(2));
    }

    #[test]
    fn zero_time_budget_stops_early() {
        let mut rng = StdRng::seed_from_u64(5);
        let state = Race {
            total: 0,
            to_move: Player::One,
        };
        let config = MctsConfig::with_iterations(10_000).with_time_budget(Duration::ZERO);
        let outcome = mcts(&state, &config, &mut rng);

        assert_eq!(outcome.stats.iterations, 0);
        assert_eq!(outcome.best_move, None);
    }
}
