//! Session configuration.
//!
//! Callers configure an `EncounterSession` at startup by providing a
//! `SessionConfig`. Every field has a default matching the plain 50/50
//! tarot rules, so `SessionConfig::default()` is always valid.

use serde::{Deserialize, Serialize};

/// Default probability that a drawn card lands reversed.
pub const DEFAULT_REVERSAL_CHANCE: f64 = 0.5;

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Fixed RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Probability that a drawn card is reversed, in `[0, 1]`.
    pub reversal_chance: f64,

    /// Base path (or URL prefix) joined with resolved image filenames.
    pub image_base: String,

    /// Rebuild and reshuffle a full deck when a deal would run short.
    pub auto_reshuffle: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            reversal_chance: DEFAULT_REVERSAL_CHANCE,
            image_base: String::new(),
            auto_reshuffle: false,
        }
    }
}

impl SessionConfig {
    /// Create a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the RNG seed for reproducible sessions.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the reversal probability.
    #[must_use]
    pub fn with_reversal_chance(mut self, chance: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&chance),
            "Reversal chance must be within [0, 1]"
        );
        self.reversal_chance = chance;
        self
    }

    /// Set the image asset base path.
    #[must_use]
    pub fn with_image_base(mut self, base: impl Into<String>) -> Self {
        self.image_base = base.into();
        self
    }

    /// Reshuffle a fresh deck instead of failing when the deck runs short.
    #[must_use]
    pub fn with_auto_reshuffle(mut self) -> Self {
        self.auto_reshuffle = true;
        self
    }
}
