//! Environment configuration for the lab.
use std::env;
use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Settings read from the environment (and `.env`).
#[derive(Clone, Debug, PartialEq)]
pub struct LabConfig {
    /// TOML file with extra AI profiles.
    pub profiles_path: Option<PathBuf>,
    /// Fixed seed for every random source; fresh entropy when unset.
    pub seed: Option<u64>,
    /// Default iteration count for MCTS duels.
    pub mcts_iterations: u32,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            profiles_path: None,
            seed: None,
            mcts_iterations: 1_000,
        }
    }
}

impl LabConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `AI_PROFILES_PATH` - Profile TOML file (default: none)
    /// - `AI_SEED` - Seed for reproducible runs (default: random)
    /// - `MCTS_ITERATIONS` - MCTS iterations per move (default: 1000)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(path) = read_env::<PathBuf>("AI_PROFILES_PATH") {
            config.profiles_path = Some(path);
        }
        config.seed = read_env::<u64>("AI_SEED");
        if let Some(iterations) = read_env::<u32>("MCTS_ITERATIONS") {
            config.mcts_iterations = iterations.max(1);
        }

        config
    }

    /// Random source honoring `seed`.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
