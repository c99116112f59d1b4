//! Suite configuration loaded from TOML.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use pocket_numbers::{DEFAULT_MAX_VALUE, Level};
use pocket_snake::{ArenaSettings, Bounds};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// Settings for every game and the frame driver.
///
/// Every field has a default, so an empty or missing file is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct GamesConfig {
    /// Seed for all random draws; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Milliseconds between ticks.
    #[serde(default = "default_tick_ms")]
    tick_ms: u64,

    /// File receiving log output.
    #[serde(default = "default_log_file")]
    log_file: String,

    /// Number Challenge settings.
    #[serde(default)]
    numbers: NumbersConfig,

    /// Wordle settings.
    #[serde(default)]
    wordle: WordleConfig,

    /// Snake settings.
    #[serde(default)]
    snake: SnakeConfig,
}

fn default_tick_ms() -> u64 {
    16
}

fn default_log_file() -> String {
    "pocket_games.log".to_string()
}

impl Default for GamesConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tick_ms: default_tick_ms(),
            log_file: default_log_file(),
            numbers: NumbersConfig::default(),
            wordle: WordleConfig::default(),
            snake: SnakeConfig::default(),
        }
    }
}

/// `[numbers]` section.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct NumbersConfig {
    /// Largest number drawn.
    max_value: u32,
}

impl Default for NumbersConfig {
    fn default() -> Self {
        Self {
            max_value: DEFAULT_MAX_VALUE,
        }
    }
}

/// `[wordle]` section. Unset paths fall back to the bundled lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct WordleConfig {
    /// File of possible secrets.
    answers: Option<PathBuf>,
    /// File of extra accepted guesses.
    valid: Option<PathBuf>,
}

/// `[snake]` section.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeConfig {
    /// Arena width.
    width: f32,
    /// Arena height.
    height: f32,
    /// Segments in a fresh chain.
    initial_length: usize,
    /// Ceiling on the speed bonus.
    max_speed: f32,
    /// Item distance from the edges.
    item_margin: f32,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        let settings = ArenaSettings::default();
        Self {
            width: settings.bounds.width,
            height: settings.bounds.height,
            initial_length: settings.initial_length,
            max_speed: settings.max_speed,
            item_margin: settings.item_margin,
        }
    }
}

impl SnakeConfig {
    /// Arena tunables for these settings.
    pub fn arena_settings(&self) -> ArenaSettings {
        ArenaSettings {
            bounds: Bounds::new(self.width, self.height),
            initial_length: self.initial_length,
            max_speed: self.max_speed,
            item_margin: self.item_margin,
        }
    }
}

impl GamesConfig {
    /// Parses and validates TOML text.
    #[instrument(skip(text), fields(bytes = text.len()))]
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(tick_ms = config.tick_ms, seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn apply_overrides(&mut self, seed: Option<u64>, tick_ms: Option<u64>) {
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(tick_ms) = tick_ms {
            self.tick_ms = tick_ms;
        }
    }

    /// Rejects values the games cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::new("tick_ms must be positive".to_string()));
        }
        let most_slots = Level::iter().map(Level::slots).max().unwrap_or_default();
        if (self.numbers.max_value as usize) < most_slots {
            return Err(ConfigError::new(format!(
                "numbers.max_value must be at least {}",
                most_slots
            )));
        }
        let snake = &self.snake;
        if snake.width <= 0.0 || snake.height <= 0.0 {
            return Err(ConfigError::new("snake arena must have a positive size".to_string()));
        }
        if snake.initial_length == 0 {
            return Err(ConfigError::new("snake.initial_length must be positive".to_string()));
        }
        if snake.max_speed < 0.0 || snake.item_margin < 0.0 {
            return Err(ConfigError::new(
                "snake.max_speed and snake.item_margin must not be negative".to_string(),
            ));
        }
        Ok(())
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_default() {
        let config = GamesConfig::from_toml_str("").unwrap();
        assert_eq!(config, GamesConfig::default());
        assert_eq!(*config.tick_ms(), 16);
        assert_eq!(*config.numbers().max_value(), 999);
        assert_eq!(config.snake().arena_settings(), ArenaSettings::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = GamesConfig::from_toml_str(
            r#"
            seed = 7

            [snake]
            max_speed = 4.0

            [wordle]
            answers = "answers.txt"
            "#,
        )
        .unwrap();
        assert_eq!(*config.seed(), Some(7));
        assert_eq!(*config.snake().max_speed(), 4.0);
        assert_eq!(*config.snake().width(), 600.0);
        assert_eq!(
            config.wordle().answers().as_deref(),
            Some(Path::new("answers.txt"))
        );
        assert!(config.wordle().valid().is_none());
    }

    #[test]
    fn test_rejects_tiny_value_range() {
        let err = GamesConfig::from_toml_str("[numbers]\nmax_value = 10\n").unwrap_err();
        assert!(err.message.contains("max_value"));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = GamesConfig::from_toml_str("tick_ms = \"fast\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_overrides() {
        let mut config = GamesConfig::default();
        config.apply_overrides(Some(3), None);
        assert_eq!(*config.seed(), Some(3));
        assert_eq!(*config.tick_ms(), 16);
        config.apply_overrides(None, Some(40));
        assert_eq!(*config.seed(), Some(3));
        assert_eq!(*config.tick_ms(), 40);
    }
}
