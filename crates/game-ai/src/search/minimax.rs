//! Minimax with alpha-beta pruning and score noise.
//!
//! Moves are examined in the order [`GameState::possible_moves`] returns them.
//! That order matters twice: good moves first prune more, and when two moves
//! reach the same score the first one wins.
//!
//! # Imperfect Play
//!
//! Each child score is perturbed by uniform noise in
//! `±(randomness * 100) / 2` before it is compared. The noise is drawn fresh
//! for every comparison, so two searches of the same position may pick
//! different moves unless the random source is seeded. Lower tiers rely on
//! this to make mistakes; with `randomness = 0` the search is exact.

use rand::Rng;

use super::GameState;
use crate::config::AiConfig;

/// Score and move produced by a search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome<M> {
    pub score: f64,
    /// `None` at the search horizon or on a terminal state.
    pub best_move: Option<M>,
}

/// Counters collected while searching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, leaves included.
    pub nodes: u64,
    /// Alpha-beta cutoffs taken.
    pub cutoffs: u64,
}

/// Alpha-beta searcher bound to a configuration and a random source.
pub struct Minimax<'a, R: Rng + ?Sized> {
    config: &'a AiConfig,
    rng: &'a mut R,
    stats: SearchStats,
}

impl<'a, R: Rng + ?Sized> Minimax<'a, R> {
    pub fn new(config: &'a AiConfig, rng: &'a mut R) -> Self {
        Self {
            config,
            rng,
            stats: SearchStats::default(),
        }
    }

    /// Counters accumulated since construction.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Picks a move for the side to move, searching `config.look_ahead` plies.
    ///
    /// Returns `None` if the state is terminal or has no legal move.
    pub fn best_move<S: GameState>(&mut self, state: &S) -> Option<S::Move> {
        let outcome = self.search(
            state,
            self.config.look_ahead,
            f64::NEG_INFINITY,
            f64::INFINITY,
            true,
        );

        tracing::debug!(
            depth = self.config.look_ahead,
            score = outcome.score,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            "minimax search finished"
        );

        outcome.best_move
    }

    /// Searches `depth` plies below `state` inside the `(alpha, beta)` window.
    pub fn search<S: GameState>(
        &mut self,
        state: &S,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> SearchOutcome<S::Move> {
        self.stats.nodes += 1;

        if depth == 0 || state.is_terminal() {
            return SearchOutcome {
                score: state.evaluate(maximizing),
                best_move: None,
            };
        }

        let moves = state.possible_moves();
        if moves.is_empty() {
            return SearchOutcome {
                score: state.evaluate(maximizing),
                best_move: None,
            };
        }

        let mut best_score = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut best_move = None;

        for mv in moves {
            let child = state.make_move(&mv);
            let score = self
                .search(&child, depth - 1, alpha, beta, !maximizing)
                .score
                + self.noise();

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                tracing::trace!(depth, alpha, beta, "alpha-beta cutoff");
                break;
            }
        }

        SearchOutcome {
            score: best_score,
            best_move,
        }
    }

    fn noise(&mut self) -> f64 {
        let amplitude = self.config.noise_amplitude();
        if amplitude.is_finite() && amplitude > 0.0 {
            self.rng.gen_range(-amplitude..=amplitude)
        } else {
            0.0
        }
    }
}

/// Runs one alpha-beta search from `state`.
pub fn minimax<S, R>(
    state: &S,
    depth: u32,
    alpha: f64,
    beta: f64,
    maximizing: bool,
    config: &AiConfig,
    rng: &mut R,
) -> SearchOutcome<S::Move>
where
    S: GameState,
    R: Rng + ?Sized,
{
    Minimax::new(config, rng).search(state, depth, alpha, beta, maximizing)
}

/// Picks a move using the thread-local random source.
pub fn best_move<S: GameState>(state: &S, config: &AiConfig) -> Option<S::Move> {
    Minimax::new(config, &mut rand::thread_rng()).best_move(state)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::config::Difficulty;
    use crate::search::Player;

    /// Two-ply tree with fixed leaf values, used to check pruning by hand.
    #[derive(Clone, Debug)]
    struct Tree {
        path: Vec<usize>,
    }

    const LEAVES: [[f64; 3]; 3] = [[3.0, 12.0, 8.0], [2.0, 4.0, 6.0], [14.0, 5.0, 2.0]];

    impl GameState for Tree {
        type Move = usize;

        fn possible_moves(&self) -> Vec<usize> {
            if self.path.len() < 2 { vec![0, 1, 2] } else { Vec::new() }
        }

        fn make_move(&self, mv: &usize) -> Self {
            let mut path = self.path.clone();
            path.push(*mv);
            Self { path }
        }

        fn is_terminal(&self) -> bool {
            self.path.len() == 2
        }

        fn evaluate(&self, _maximizing_player: bool) -> f64 {
            LEAVES[self.path[0]][self.path[1]]
        }

        fn current_player(&self) -> Player {
            if self.path.len() % 2 == 0 { Player::One } else { Player::Two }
        }
    }

    fn exact() -> AiConfig {
        Difficulty::Impossible.preset().with_look_ahead(2)
    }

    #[test]
    fn textbook_tree_value() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = exact();
        let outcome = minimax(
            &Tree { path: vec![] },
            2,
            f64::NEG_INFINITY,
            f64::INFINITY,
            true,
            &config,
            &mut rng,
        );

        assert_eq!(outcome.score, 3.0);
        assert_eq!(outcome.best_move, Some(0));
    }

    #[test]
    fn pruning_skips_refuted_branches() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = exact();
        let mut search = Minimax::new(&config, &mut rng);
        assert_eq!(search.best_move(&Tree { path: vec![] }), Some(0));

        // Branch 1 is refuted after its first leaf (2 < 3).
        let stats = search.stats();
        assert!(stats.cutoffs >= 1);
        assert!(stats.nodes < 13);
    }

    #[test]
    fn terminal_state_has_no_move() {
        let config = exact();
        assert_eq!(best_move(&Tree { path: vec![0, 0] }, &config), None);
    }

    #[test]
    fn zero_depth_returns_static_score() {
        let mut rng = StdRng::seed_from_u64(7);
        let config = exact();
        let outcome = minimax(
            &Tree { path: vec![2, 0] },
            0,
            f64::NEG_INFINITY,
            f64::INFINITY,
            true,
            &config,
            &mut rng,
        );
        assert_eq!(outcome.score, 14.0);
        assert_eq!(outcome.best_move, None);
    }

    #[test]
    fn non_finite_randomness_adds_no_noise() {
        let mut rng = StdRng::seed_from_u64(9);
        let config = exact().with_randomness(f64::INFINITY);
        let outcome = minimax(
            &Tree { path: vec![] },
            2,
            f64::NEG_INFINITY,
            f64::INFINITY,
            true,
            &config,
            &mut rng,
        );
        assert_eq!(outcome.score, 3.0);
        assert_eq!(outcome.best_move, Some(0));
    }

    #[test]
    fn noise_stays_within_amplitude() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = Difficulty::Easy.preset().with_look_ahead(1);
        let amplitude = config.noise_amplitude();

        for _ in 0..50 {
            let outcome = minimax(
                &Tree { path: vec![1] },
                1,
                f64::NEG_INFINITY,
                f64::INFINITY,
                false,
                &config,
                &mut rng,
            );
            // Exact minimum of branch 1 is 2.0
            assert!((outcome.score - 2.0).abs() <= amplitude + 6.0);
            assert!(outcome.best_move.is_some());
        }
    }
}
