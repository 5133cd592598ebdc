//! Tic-tac-toe self play between two AI profiles.

use anyhow::{Context, Result};
use clap::Parser;
use game_ai::games::TicTacToe;
use game_ai::{AiConfig, GameState, MctsConfig, Minimax, Player, mcts};
use rand::Rng;
use serde::Serialize;

use crate::config::LabConfig;
use crate::profiles::Profiles;

/// Pit two AI profiles against each other at tic-tac-toe
#[derive(Parser)]
pub struct Duel {
    /// Profile playing X (moves first)
    #[arg(long, value_name = "PROFILE", default_value = "impossible")]
    x: String,

    /// Profile playing O
    #[arg(long, value_name = "PROFILE", default_value = "impossible")]
    o: String,

    /// Search used by both sides
    #[arg(long, value_enum, default_value = "minimax")]
    engine: Engine,

    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: u32,

    /// MCTS iterations per move (overrides MCTS_ITERATIONS)
    #[arg(long)]
    iterations: Option<u32>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
enum Engine {
    /// Alpha-beta minimax at each profile's look-ahead
    Minimax,
    /// Monte Carlo Tree Search (profiles are ignored)
    Mcts,
}

/// Outcome tally of a duel.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DuelReport {
    pub x: String,
    pub o: String,
    engine: Engine,
    pub games: u32,
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl Duel {
    pub fn execute(self, config: &LabConfig) -> Result<()> {
        let profiles = Profiles::load(config.profiles_path.as_deref())?;
        let x = profiles.get(&self.x)?;
        let o = profiles.get(&self.o)?;
        let mcts_config =
            MctsConfig::with_iterations(self.iterations.unwrap_or(config.mcts_iterations));
        let mut rng = config.rng();

        let players = Players {
            x,
            o,
            engine: self.engine,
            mcts: &mcts_config,
        };
        let report = run_duel(&self.x, &self.o, &players, self.games, &mut rng)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!(
                "{} (X) vs {} (O), {} game(s) with {:?}",
                report.x, report.o, report.games, report.engine
            );
            println!(
                "X wins: {}  O wins: {}  draws: {}",
                report.x_wins, report.o_wins, report.draws
            );
        }
        Ok(())
    }
}

struct Players<'a> {
    x: &'a AiConfig,
    o: &'a AiConfig,
    engine: Engine,
    mcts: &'a MctsConfig,
}

impl Players<'_> {
    fn choose<R: Rng + ?Sized>(&self, game: &TicTacToe, rng: &mut R) -> Option<usize> {
        let mover = game.current_player();
        let view = game.with_perspective(mover);
        match self.engine {
            Engine::Minimax => {
                let ai = if mover == Player::One { self.x } else { self.o };
                Minimax::new(ai, rng).best_move(&view)
            }
            Engine::Mcts => mcts(&view, self.mcts, rng).best_move,
        }
    }
}

fn play_game<R: Rng + ?Sized>(players: &Players<'_>, rng: &mut R) -> Result<Option<Player>> {
    let mut game = TicTacToe::new();
    while !game.is_terminal() {
        let mv = players
            .choose(&game, rng)
            .with_context(|| format!("no move found in open position\n{game}"))?;
        game = game.make_move(&mv);
    }
    tracing::debug!(winner = ?game.winner(), "game finished\n{game}");
    Ok(game.winner())
}

fn run_duel<R: Rng + ?Sized>(
    x_name: &str,
    o_name: &str,
    players: &Players<'_>,
    games: u32,
    rng: &mut R,
) -> Result<DuelReport> {
    let mut report = DuelReport {
        x: x_name.to_string(),
        o: o_name.to_string(),
        engine: players.engine,
        games,
        x_wins: 0,
        o_wins: 0,
        draws: 0,
    };

    for round in 0..games {
        match play_game(players, rng)? {
            Some(Player::One) => report.x_wins += 1,
            Some(Player::Two) => report.o_wins += 1,
            None => report.draws += 1,
        }
        tracing::info!(round, x_wins = report.x_wins, o_wins = report.o_wins, "round done");
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use game_ai::Difficulty;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn perfect_players_always_draw() {
        let ai = AiConfig::preset(Difficulty::Impossible);
        let mcts = MctsConfig::with_iterations(10);
        let players = Players {
            x: &ai,
            o: &ai,
            engine: Engine::Minimax,
            mcts: &mcts,
        };
        let mut rng = StdRng::seed_from_u64(0);
        let report = run_duel("impossible", "impossible", &players, 2, &mut rng).unwrap();
        assert_eq!(report.draws, 2);
        assert_eq!(report.x_wins + report.o_wins, 0);
    }

    #[test]
    fn mcts_duel_tallies_every_game() {
        let ai = AiConfig::default();
        let mcts = MctsConfig::with_iterations(50);
        let players = Players {
            x: &ai,
            o: &ai,
            engine: Engine::Mcts,
            mcts: &mcts,
        };
        let mut rng = StdRng::seed_from_u64(1);
        let report = run_duel("a", "b", &players, 5, &mut rng).unwrap();
        assert_eq!(report.x_wins + report.o_wins + report.draws, 5);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["engine"], "mcts");
        assert_eq!(json["games"], 5);
    }
}
