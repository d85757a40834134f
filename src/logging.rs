//! File logging for the terminal front-end.
//!
//! The library only speaks the `log` facade. The binary calls [`init`] once;
//! output goes to a file because the alternate screen owns the terminal.

use crate::config::LoggingConfig;
use log::LevelFilter;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum LoggingError {
    #[error("unknown log level '{0}'")]
    Level(String),
    #[error("cannot open log file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("logger already installed: {0}")]
    Install(#[from] log::SetLoggerError),
}

pub fn parse_level(level: &str) -> Result<LevelFilter, LoggingError> {
    level.trim().parse().map_err(|_| LoggingError::Level(level.to_string()))
}

/// Install a `WriteLogger` appending to `cfg.file` at `cfg.level`.
/// Level `off` installs nothing and touches no file.
pub fn init(cfg: &LoggingConfig) -> Result<(), LoggingError> {
    let level = parse_level(&cfg.level)?;
    if level == LevelFilter::Off {
        return Ok(());
    }
    let file = open_append(&cfg.file)?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    simplelog::WriteLogger::init(level, config, file)?;
    log::info!("{} {} logging at {level}", env!("CARGO_PKG_NAME"), crate::VERSION);
    Ok(())
}

fn open_append(path: &Path) -> Result<fs::File, LoggingError> {
    let io_err = |source| LoggingError::Io { path: path.to_path_buf(), source };
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(io_err)?;
    }
    OpenOptions::new().create(true).append(true).open(path).map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_parse_case_insensitively() {
        assert_eq!(parse_level("debug").unwrap(), LevelFilter::Debug);
        assert_eq!(parse_level("WARN").unwrap(), LevelFilter::Warn);
        assert_eq!(parse_level(" off ").unwrap(), LevelFilter::Off);
        assert!(matches!(parse_level("chatty"), Err(LoggingError::Level(_))));
    }

    #[test]
    fn off_level_skips_file() {
        let cfg = LoggingConfig {
            level: "off".into(),
            file: PathBuf::from("/definitely/not/writable/draw-poker.log"),
        };
        assert!(init(&cfg).is_ok());
    }
}
