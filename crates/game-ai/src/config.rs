//! AI configuration and the canonical difficulty presets.
//!
//! An [`AiConfig`] bundles the knobs the generic search reads
//! (`look_ahead`, `randomness`) with the ones only specialized wrappers care
//! about (`think_time_ms`, [`Personality`]). Five presets, ordered from
//! [`Difficulty::Easy`] to [`Difficulty::Impossible`], fix all of them.

use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::error::{AiResult, ensure_unit};

/// Difficulty tier, ordered from weakest to strongest.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
    Impossible,
}

impl Difficulty {
    /// All tiers, weakest first.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    /// Position of this tier in the ordering (0 = easy).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Tier mapped onto `[0, 1]` (easy = 0, impossible = 1).
    pub fn scalar(self) -> f64 {
        self.index() as f64 / (Self::COUNT - 1) as f64
    }

    /// The canonical configuration for this tier.
    pub fn preset(self) -> AiConfig {
        AiConfig::preset(self)
    }

    const COUNT: usize = 5;
}

/// Personality sliders consumed by specialized wrappers.
///
/// Every slider lies in `[0, 1]`. The generic search ignores them.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Personality {
    pub aggression: f64,
    pub defense: f64,
    pub risk: f64,
    pub patience: f64,
    pub adaptability: f64,
}

impl Personality {
    /// All sliders at the midpoint.
    pub const BALANCED: Self = Self::new(0.5, 0.5, 0.5, 0.5, 0.5);

    pub const fn new(
        aggression: f64,
        defense: f64,
        risk: f64,
        patience: f64,
        adaptability: f64,
    ) -> Self {
        Self {
            aggression,
            defense,
            risk,
            patience,
            adaptability,
        }
    }

    /// Rejects any slider outside `[0, 1]`.
    pub fn validate(&self) -> AiResult<()> {
        ensure_unit("personality.aggression", self.aggression)?;
        ensure_unit("personality.defense", self.defense)?;
        ensure_unit("personality.risk", self.risk)?;
        ensure_unit("personality.patience", self.patience)?;
        ensure_unit("personality.adaptability", self.adaptability)
    }
}

impl Default for Personality {
    fn default() -> Self {
        Self::BALANCED
    }
}

/// Configuration handed to the search algorithms and wrappers.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AiConfig {
    /// Tier this configuration was derived from.
    pub difficulty: Difficulty,
    /// Artificial delay hosts may wait before playing the chosen move.
    pub think_time_ms: u64,
    /// Score noise for minimax, in `[0, 1]`. Zero means perfect play.
    pub randomness: f64,
    /// Minimax search depth in plies.
    pub look_ahead: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub personality: Option<Personality>,
}

impl AiConfig {
    /// Returns the canonical preset for `difficulty`.
    ///
    /// `look_ahead` strictly increases and `randomness` strictly decreases
    /// from easy to impossible. Impossible searches nine plies, enough to
    /// exhaust a 3×3 board from the opening.
    pub fn preset(difficulty: Difficulty) -> Self {
        let (think_time_ms, randomness, look_ahead, personality) = match difficulty {
            Difficulty::Easy => (300, 0.5, 1, Personality::new(0.3, 0.2, 0.8, 0.2, 0.2)),
            Difficulty::Medium => (500, 0.3, 2, Personality::new(0.5, 0.4, 0.6, 0.4, 0.4)),
            Difficulty::Hard => (700, 0.15, 4, Personality::new(0.6, 0.6, 0.4, 0.6, 0.6)),
            Difficulty::Expert => (900, 0.05, 6, Personality::new(0.7, 0.7, 0.3, 0.8, 0.8)),
            Difficulty::Impossible => (1000, 0.0, 9, Personality::new(0.8, 0.9, 0.1, 1.0, 1.0)),
        };

        Self {
            difficulty,
            think_time_ms,
            randomness,
            look_ahead,
            personality: Some(personality),
        }
    }

    /// Overrides the search depth (builder pattern).
    #[must_use]
    pub fn with_look_ahead(mut self, look_ahead: u32) -> Self {
        self.look_ahead = look_ahead;
        self
    }

    /// Overrides the score noise (builder pattern).
    #[must_use]
    pub fn with_randomness(mut self, randomness: f64) -> Self {
        self.randomness = randomness;
        self
    }

    /// Personality sliders, falling back to [`Personality::BALANCED`].
    pub fn personality_or_default(&self) -> Personality {
        self.personality.unwrap_or_default()
    }

    /// Checks ranges of every field.
    pub fn validate(&self) -> AiResult<()> {
        ensure_unit("randomness", self.randomness)?;
        if let Some(personality) = &self.personality {
            personality.validate()?;
        }
        Ok(())
    }

    /// Half-width of the uniform noise added to each minimax child score.
    pub(crate) fn noise_amplitude(&self) -> f64 {
        self.randomness * 100.0 / 2.0
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::preset(Difficulty::Medium)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AiError;

    #[test]
    fn presets_are_strictly_ordered() {
        let presets: Vec<AiConfig> = Difficulty::all().map(AiConfig::preset).collect();
        assert_eq!(presets.len(), 5);

        for pair in presets.windows(2) {
            assert!(pair[0].look_ahead < pair[1].look_ahead);
            assert!(pair[0].randomness > pair[1].randomness);
        }
    }

    #[test]
    fn presets_are_valid() {
        for difficulty in Difficulty::all() {
            let preset = difficulty.preset();
            assert_eq!(preset.difficulty, difficulty);
            assert!(preset.validate().is_ok());
        }
    }

    #[test]
    fn difficulty_parses_lowercase() {
        assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(Difficulty::Impossible.to_string(), "impossible");
        assert!("nightmare".parse::<Difficulty>().is_err());
    }

    #[test]
    fn difficulty_scalar_spans_unit_range() {
        assert_eq!(Difficulty::Easy.scalar(), 0.0);
        assert_eq!(Difficulty::Hard.scalar(), 0.5);
        assert_eq!(Difficulty::Impossible.scalar(), 1.0);
    }

    #[test]
    fn validate_rejects_out_of_range() {
        let config = AiConfig::preset(Difficulty::Easy).with_randomness(1.2);
        assert_eq!(
            config.validate(),
            Err(AiError::InvalidConfig {
                field: "randomness",
                value: 1.2
            })
        );

        let mut config = AiConfig::default();
        config.personality = Some(Personality::new(0.5, 0.5, -0.1, 0.5, 0.5));
        assert!(config.validate().is_err());
    }

    #[test]
    fn noise_amplitude_matches_randomness() {
        let amplitude = AiConfig::default().with_randomness(0.4).noise_amplitude();
        assert!((amplitude - 20.0).abs() < 1e-9);
        assert_eq!(Difficulty::Impossible.preset().noise_amplitude(), 0.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_deserializes_from_toml() {
        let config: AiConfig = toml::from_str(
            r#"
            difficulty = "expert"
            think_time_ms = 250
            randomness = 0.1
            look_ahead = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.difficulty, Difficulty::Expert);
        assert_eq!(config.look_ahead, 5);
        assert!(config.personality.is_none());
    }
}
