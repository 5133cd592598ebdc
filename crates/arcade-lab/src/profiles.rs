//! Named AI profiles: the built-in presets plus optional TOML overrides.
//!
//! A profile file is a TOML document with one table per profile:
//!
//! ```toml
//! [sloppy-hard]
//! difficulty = "hard"
//! think_time_ms = 700
//! randomness = 0.4
//! look_ahead = 4
//! ```
//!
//! Entries named after a difficulty tier replace that preset.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use game_ai::{AiConfig, Difficulty};

/// Profile table keyed by name.
#[derive(Clone, Debug)]
pub struct Profiles {
    entries: BTreeMap<String, AiConfig>,
}

impl Profiles {
    /// The five difficulty presets under their tier names.
    pub fn builtin() -> Self {
        let entries = Difficulty::all()
            .map(|difficulty| (difficulty.to_string(), AiConfig::preset(difficulty)))
            .collect();
        Self { entries }
    }

    /// Built-in presets, overridden by `path` when given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut profiles = Self::builtin();
        if let Some(path) = path {
            profiles.merge_file(path)?;
        }
        Ok(profiles)
    }

    /// Adds or replaces profiles from a TOML file.
    pub fn merge_file(&mut self, path: &Path) -> Result<()> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile file: {}", path.display()))?;
        let loaded: BTreeMap<String, AiConfig> = toml::from_str(&content)
            .with_context(|| format!("Failed to parse profile TOML: {}", path.display()))?;

        for (name, config) in loaded {
            config
                .validate()
                .with_context(|| format!("Invalid profile `{name}` in {}", path.display()))?;
            tracing::debug!(profile = %name, "loaded AI profile");
            self.entries.insert(name, config);
        }
        Ok(())
    }

    /// Looks up a profile by name.
    pub fn get(&self, name: &str) -> Result<&AiConfig> {
        self.entries.get(name).with_context(|| {
            let known: Vec<&str> = self.entries.keys().map(String::as_str).collect();
            format!("Unknown profile `{name}` (known: {})", known.join(", "))
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AiConfig)> {
        self.entries.iter().map(|(name, config)| (name.as_str(), config))
    }
}
