use crate::engine::DrawPokerEngine;
use crate::tui::app::{AppState, InputAction, Overlay};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub fn run<E: DrawPokerEngine>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState<E>,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key.code) {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
    log::info!("session ended after {} rounds", app.engine.rounds_completed());
    Ok(())
}

/// Map a key to an app action. Returns true when the player asked to quit.
pub fn handle_key<E: DrawPokerEngine>(app: &mut AppState<E>, code: KeyCode) -> bool {
    match code {
        KeyCode::Char('?') => {
            let _ = app.handle_input(InputAction::ToggleHelp);
            return false;
        }
        KeyCode::Char('p') | KeyCode::Char('P') => {
            let _ = app.handle_input(InputAction::TogglePaytable);
            return false;
        }
        KeyCode::Char('h') | KeyCode::Char('H') => {
            let _ = app.handle_input(InputAction::ToggleHistory);
            return false;
        }
        _ => {}
    }

    if let Some(overlay) = app.overlay() {
        match code {
            KeyCode::Esc => {
                let _ = app.handle_input(InputAction::CloseOverlay);
            }
            KeyCode::Up if overlay == Overlay::History => {
                let _ = app.handle_input(InputAction::HistoryUp);
            }
            KeyCode::Down if overlay == Overlay::History => {
                let _ = app.handle_input(InputAction::HistoryDown);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            _ => {}
        }
        return false;
    }

    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
        KeyCode::Char(' ') | KeyCode::Enter => {
            let _ = app.handle_input(InputAction::Primary);
        }
        KeyCode::Char(c @ '1'..='5') => {
            let idx = (c as u8 - b'1') as usize;
            let _ = app.handle_input(InputAction::Hold(idx));
        }
        KeyCode::Char('d') | KeyCode::Char('D') => {
            let _ = app.handle_input(InputAction::Draw);
        }
        KeyCode::Char('n') | KeyCode::Char('N') => {
            let _ = app.handle_input(InputAction::NextRound);
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            let _ = app.handle_input(InputAction::Restart);
        }
        _ => {}
    }
    false
}
