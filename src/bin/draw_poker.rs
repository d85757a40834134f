use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use draw_poker::config::Config;
use draw_poker::logging;
use draw_poker::tui::{app::AppState, controller};
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use std::path::PathBuf;
use std::time::Duration;

/// Single-player five-card draw video poker in the terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML config file (falls back to $DRAW_POKER_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fixed shuffle seed for a reproducible session
    #[arg(short, long)]
    seed: Option<u64>,

    /// Where to write the log
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// off, error, warn, info, debug or trace
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    fn resolve(self) -> io::Result<Config> {
        let mut cfg = Config::load(self.config.as_deref()).map_err(io::Error::other)?;
        if let Some(seed) = self.seed {
            cfg.game.seed = Some(seed);
        }
        if let Some(file) = self.log_file {
            cfg.logging.file = file;
        }
        if let Some(level) = self.log_level {
            cfg.logging.level = level;
        }
        cfg.validate().map_err(io::Error::other)?;
        Ok(cfg)
    }
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> io::Result<()> {
    let cfg = Args::parse().resolve()?;
    if !io::stdout().is_terminal() {
        println!(
            "draw-poker needs a real terminal (TTY). Run it in a terminal and press q to quit. Version: {}",
            draw_poker::VERSION
        );
        return Ok(());
    }
    logging::init(&cfg.logging).map_err(io::Error::other)?;
    log::info!(
        "starting: {} credits, bet {} (+{} per round), seed {:?}",
        cfg.game.starting_credits,
        cfg.game.base_bet,
        cfg.game.bet_step,
        cfg.game.seed
    );

    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(cfg.ui.tick_rate_ms);
    let mut app = AppState::from_config(&cfg);

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    if let Err(err) = &res {
        log::error!("terminal loop failed: {err}");
    }
    res
}
