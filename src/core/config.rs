//! Game configuration.
//!
//! `GameConfig` carries everything a deck build and a session need:
//! - deck shape (pair count, entity ID range)
//! - name language for localized display names
//! - reveal and mismatch timings
//! - API base URL and card-back artwork
//!
//! Defaults reproduce the classic board: 5 pairs drawn from the
//! first-generation IDs 1..=151, Korean names, a 2.5 s reveal and a
//! 900 ms mismatch window.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default PokeAPI base URL.
pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";

/// Default card-back artwork (official artwork of entity 25).
pub const DEFAULT_BACK_IMAGE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/25.png";

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of distinct entities per game.
    pub pair_count: usize,

    /// Smallest entity ID that may be drawn.
    pub id_min: u32,

    /// Largest entity ID that may be drawn (inclusive).
    pub id_max: u32,

    /// Language code used to pick the localized display name.
    pub language: String,

    /// How long every card stays face-up after start, in milliseconds.
    pub reveal_ms: u64,

    /// How long a mismatched pair stays face-up, in milliseconds.
    pub mismatch_ms: u64,

    /// Base URL of the entity lookup service.
    pub api_base: String,

    /// Artwork shown on the back of every card.
    pub back_image: String,

    /// Seed for ID sampling, shuffling and key tokens.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pair_count: 5,
            id_min: 1,
            id_max: 151,
            language: "ko".to_string(),
            reveal_ms: 2_500,
            mismatch_ms: 900,
            api_base: DEFAULT_API_BASE.to_string(),
            back_image: DEFAULT_BACK_IMAGE.to_string(),
            seed: 0,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of pairs.
    #[must_use]
    pub fn with_pairs(mut self, pair_count: usize) -> Self {
        self.pair_count = pair_count;
        self
    }

    /// Set the inclusive entity ID range.
    #[must_use]
    pub fn with_id_range(mut self, min: u32, max: u32) -> Self {
        self.id_min = min;
        self.id_max = max;
        self
    }

    /// Set the display-name language.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the reveal window after start.
    #[must_use]
    pub fn with_reveal(mut self, millis: u64) -> Self {
        self.reveal_ms = millis;
        self
    }

    /// Set the mismatch display window.
    #[must_use]
    pub fn with_mismatch_delay(mut self, millis: u64) -> Self {
        self.mismatch_ms = millis;
        self
    }

    /// Set the lookup service base URL.
    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Set the card-back artwork.
    #[must_use]
    pub fn with_back_image(mut self, url: impl Into<String>) -> Self {
        self.back_image = url.into();
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of IDs in the configured range.
    #[must_use]
    pub fn range_size(&self) -> u64 {
        if self.id_max < self.id_min {
            0
        } else {
            u64::from(self.id_max - self.id_min) + 1
        }
    }

    /// Number of cards in a deck built from this configuration.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.pair_count * 2
    }

    /// Check that a deck can be built from this configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pair_count == 0 {
            return Err(ConfigError::NoPairs);
        }
        if self.id_max < self.id_min {
            return Err(ConfigError::InvertedRange {
                min: self.id_min,
                max: self.id_max,
            });
        }
        if (self.pair_count as u64) > self.range_size() {
            return Err(ConfigError::RangeTooSmall {
                pairs: self.pair_count,
                available: self.range_size(),
            });
        }
        Ok(())
    }
}
