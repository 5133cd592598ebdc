//! List difficulty presets and loaded profiles.

use anyhow::Result;
use clap::Parser;

use crate::config::LabConfig;
use crate::profiles::Profiles;

/// List difficulty presets and loaded profiles
#[derive(Parser)]
pub struct Presets {
    /// Print profiles as JSON
    #[arg(long)]
    json: bool,
}

impl Presets {
    pub fn execute(self, config: &LabConfig) -> Result<()> {
        let profiles = Profiles::load(config.profiles_path.as_deref())?;

        if self.json {
            let table: serde_json::Map<String, serde_json::Value> = profiles
                .iter()
                .map(|(name, ai)| Ok((name.to_string(), serde_json::to_value(ai)?)))
                .collect::<Result<_>>()?;
            println!("{}", serde_json::to_string_pretty(&table)?);
            return Ok(());
        }

        println!(
            "{:<16} {:<11} {:>10} {:>10} {:>11}",
            "PROFILE", "DIFFICULTY", "LOOK-AHEAD", "RANDOM", "THINK (ms)"
        );
        for (name, ai) in profiles.iter() {
            println!(
                "{:<16} {:<11} {:>10} {:>10.2} {:>11}",
                name, ai.difficulty, ai.look_ahead, ai.randomness, ai.think_time_ms
            );
        }
        Ok(())
    }
}
