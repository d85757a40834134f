//! Game and application settings.
//!
//! Every field has a default, so an empty file (or no file) is a valid
//! configuration. Values are resolved in this order, later wins:
//! built-in defaults, the TOML file (`--config` or `DRAW_POKER_CONFIG`),
//! environment overrides (`DRAW_POKER_SEED`), then command-line flags.
//!
//! ```toml
//! [game]
//! starting_credits = 100
//! base_bet = 10
//! bet_step = 2
//! # max_bet = 40
//!
//! [paytable]
//! royal_flush = 800
//!
//! [logging]
//! level = "debug"
//! file = "draw-poker.log"
//! ```

use crate::deck::DECK_SIZE;
use crate::paytable::PayTable;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "DRAW_POKER_CONFIG";
pub const SEED_ENV: &str = "DRAW_POKER_SEED";

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub game: GameConfig,
    pub paytable: PayTable,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Economy and deck rules for the round controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub starting_credits: u64,
    pub base_bet: u64,
    /// Added to the bet after every completed round.
    pub bet_step: u64,
    /// Ceiling for the escalating bet. Unset means no ceiling.
    pub max_bet: Option<u64>,
    /// Fixed shuffle seed for reproducible sessions.
    pub seed: Option<u64>,
    /// Reshuffle between rounds when fewer cards than this remain.
    pub round_reshuffle_below: usize,
    /// Resolved rounds kept for the history view.
    pub history_len: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_credits: 100,
            base_bet: 10,
            bet_step: 2,
            max_bet: None,
            seed: None,
            round_reshuffle_below: 10,
            history_len: 50,
        }
    }
}

impl GameConfig {
    /// Bet for a round after `completed` rounds have been played.
    ///
    /// ```
    /// use draw_poker::config::GameConfig;
    ///
    /// let cfg = GameConfig::default();
    /// assert_eq!(cfg.bet_after(0), 10);
    /// assert_eq!(cfg.bet_after(3), 16);
    ///
    /// let capped = GameConfig { max_bet: Some(14), ..GameConfig::default() };
    /// assert_eq!(capped.bet_after(10), 14);
    /// ```
    pub fn bet_after(&self, completed: u64) -> u64 {
        let bet = self.base_bet.saturating_add(self.bet_step.saturating_mul(completed));
        match self.max_bet {
            Some(cap) => bet.min(cap),
            None => bet,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_bet == 0 {
            return Err(ConfigError::Invalid("base_bet must be at least 1".into()));
        }
        if let Some(cap) = self.max_bet {
            if cap < self.base_bet {
                return Err(ConfigError::Invalid(format!(
                    "max_bet {cap} is below base_bet {}",
                    self.base_bet
                )));
            }
        }
        if !(1..=DECK_SIZE).contains(&self.round_reshuffle_below) {
            return Err(ConfigError::Invalid(format!(
                "round_reshuffle_below must be within 1..={DECK_SIZE}"
            )));
        }
        Ok(())
    }
}

/// Terminal front-end timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    pub tick_rate_ms: u64,
    /// Ticks a card spends sliding from the deck to its slot.
    pub deal_ticks: u16,
    /// Ticks a card spends turning over.
    pub flip_ticks: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 33, deal_ticks: 8, flip_ticks: 6 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`.
    pub level: String,
    pub file: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".into(), file: PathBuf::from("draw-poker.log") }
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Config = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let s = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&s)
    }

    /// Resolve defaults, file and environment. `path` wins over `DRAW_POKER_CONFIG`.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let env_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let mut cfg = match path.map(Path::to_path_buf).or(env_path) {
            Some(p) => Self::from_file(&p)?,
            None => Self::default(),
        };
        if let Ok(seed) = std::env::var(SEED_ENV) {
            if !seed.is_empty() {
                cfg.game.seed = Some(
                    seed.trim()
                        .parse()
                        .map_err(|_| ConfigError::Invalid(format!("{SEED_ENV}: '{seed}'")))?,
                );
            }
        }
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.game.validate()?;
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::Invalid("tick_rate_ms must be at least 1".into()));
        }
        if self.logging.level.parse::<log::LevelFilter>().is_err() {
            return Err(ConfigError::Invalid(format!("unknown log level '{}'", self.logging.level)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn sections_override_independently() {
        let cfg = Config::from_toml_str(
            "[game]\nstarting_credits = 250\nmax_bet = 30\n[paytable]\nroyal_flush = 800\n",
        )
        .unwrap();
        assert_eq!(cfg.game.starting_credits, 250);
        assert_eq!(cfg.game.base_bet, 10);
        assert_eq!(cfg.game.max_bet, Some(30));
        assert_eq!(cfg.paytable.royal_flush, 800);
        assert_eq!(cfg.paytable.flush, 40);
    }

    #[test]
    fn invalid_values_are_reported() {
        assert!(matches!(
            Config::from_toml_str("[game]\nbase_bet = 0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::from_toml_str("[game]\nbase_bet = 10\nmax_bet = 5"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::from_toml_str("[game]\nround_reshuffle_below = 60"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::from_toml_str("[game]\nround_reshuffle_below = 0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::from_toml_str("[logging]\nlevel = \"loud\""),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn unknown_keys_are_parse_errors() {
        assert!(matches!(Config::from_toml_str("[game]\nante = 5"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn bet_escalates_by_step() {
        let cfg = GameConfig::default();
        for n in 0..20 {
            assert_eq!(cfg.bet_after(n + 1) - cfg.bet_after(n), 2);
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Config::from_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
