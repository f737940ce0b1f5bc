//! Engine configuration loaded from TOML.

use crate::games::tictactoe::ai::DEFAULT_EASY_RANDOM_PROBABILITY;
use crate::{Difficulty, GameMode, Side};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Session defaults and AI tuning.
///
/// Every field is optional in the file; missing fields take the defaults
/// below.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Starting game mode.
    #[serde(default)]
    mode: GameMode,

    /// Starting AI difficulty.
    #[serde(default)]
    difficulty: Difficulty,

    /// Side played by the computer in vs-AI mode.
    #[serde(default = "default_ai_side")]
    ai_side: Side,

    /// Pause before the AI reply is applied, in milliseconds.
    #[serde(default = "default_ai_delay_ms")]
    ai_delay_ms: u64,

    /// Seed for the AI's random choices. Omit for a fresh seed per run.
    #[serde(default)]
    seed: Option<u64>,

    /// Chance that the easy tier plays a purely random square.
    #[serde(default = "default_easy_random_probability")]
    easy_random_probability: f64,
}

fn default_ai_side() -> Side {
    Side::O
}

fn default_ai_delay_ms() -> u64 {
    500
}

fn default_easy_random_probability() -> f64 {
    DEFAULT_EASY_RANDOM_PROBABILITY
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            difficulty: Difficulty::default(),
            ai_side: default_ai_side(),
            ai_delay_ms: default_ai_delay_ms(),
            seed: None,
            easy_random_probability: default_easy_random_probability(),
        }
    }
}

impl EngineConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(mode = %config.mode, difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.easy_random_probability) {
            return Err(ConfigError::new(format!(
                "easy_random_probability must be within 0..=1, got {}",
                self.easy_random_probability
            )));
        }
        Ok(())
    }

    /// AI reply delay as a duration.
    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }

    /// Overrides the game mode.
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Overrides the difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Overrides the AI side.
    pub fn with_ai_side(mut self, ai_side: Side) -> Self {
        self.ai_side = ai_side;
        self
    }

    /// Overrides the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the AI delay.
    pub fn with_ai_delay_ms(mut self, ai_delay_ms: u64) -> Self {
        self.ai_delay_ms = ai_delay_ms;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
