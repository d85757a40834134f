use super::animation::Animation;
use crate::config::{Config, UiConfig};
use crate::engine::DrawPokerEngine;
use crate::hand::HAND_SIZE;
use crate::round::{RoundController, RoundError, RoundEvent, RoundState};
use std::time::{Duration, Instant};

pub const TITLE: &str = "Luxury Royale Poker";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Overlay {
    Help,
    Paytable,
    History,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    /// Deal, draw or next hand depending on where the round is.
    Primary,
    Hold(usize),
    Draw,
    NextRound,
    Restart,
    ToggleHelp,
    TogglePaytable,
    ToggleHistory,
    HistoryUp,
    HistoryDown,
    CloseOverlay,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState<E = RoundController> {
    pub engine: E,
    pub animation: Animation,
    overlay: Option<Overlay>,
    history_offset: usize,
    message: Option<String>,
    message_at: Option<Instant>,
}

impl Default for AppState<RoundController> {
    fn default() -> Self {
        Self::new(RoundController::default(), &UiConfig::default())
    }
}

impl AppState<RoundController> {
    pub fn from_config(config: &Config) -> Self {
        Self::new(RoundController::from_config(config), &config.ui)
    }
}

impl<E: DrawPokerEngine> AppState<E> {
    pub const HISTORY_PAGE_SIZE: usize = 15;
    const MESSAGE_TTL: Duration = Duration::from_secs(4);

    pub fn new(engine: E, ui: &UiConfig) -> Self {
        Self {
            engine,
            animation: Animation::new(ui.deal_ticks, ui.flip_ticks),
            overlay: None,
            history_offset: 0,
            message: None,
            message_at: None,
        }
    }

    pub fn overlay(&self) -> Option<Overlay> {
        self.overlay
    }

    pub fn history_offset(&self) -> usize {
        self.history_offset
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// True once every card has landed and turned; game keys work again.
    pub fn is_settled(&self) -> bool {
        self.animation.is_idle()
    }

    /// Returns true when the input changed the game.
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleHelp => {
                self.toggle_overlay(Overlay::Help);
                false
            }
            InputAction::TogglePaytable => {
                self.toggle_overlay(Overlay::Paytable);
                false
            }
            InputAction::ToggleHistory => {
                if self.overlay != Some(Overlay::History) {
                    self.history_offset = 0;
                }
                self.toggle_overlay(Overlay::History);
                false
            }
            InputAction::HistoryUp => {
                if self.overlay == Some(Overlay::History) {
                    let len = self.engine.recent_rounds(usize::MAX).len();
                    let max_offset = len.saturating_sub(Self::HISTORY_PAGE_SIZE);
                    self.history_offset = (self.history_offset + 1).min(max_offset);
                }
                false
            }
            InputAction::HistoryDown => {
                if self.overlay == Some(Overlay::History) {
                    self.history_offset = self.history_offset.saturating_sub(1);
                }
                false
            }
            InputAction::CloseOverlay => {
                self.overlay = None;
                false
            }
            _ if self.overlay.is_some() || !self.is_settled() => false,
            InputAction::Primary => match self.engine.state() {
                RoundState::AwaitingBet if self.engine.out_of_credits() => {
                    self.notice("Not enough credits. Press R to restart the game.");
                    false
                }
                RoundState::AwaitingBet => self.command(|e| e.place_bet()),
                RoundState::HandDealt => self.command(|e| e.draw().map(drop)),
                _ => self.command(|e| e.next_round()),
            },
            InputAction::Hold(index) => {
                self.command(|e| e.toggle_hold(index).map(drop))
            }
            InputAction::Draw => self.command(|e| e.draw().map(drop)),
            InputAction::NextRound => self.command(|e| e.next_round()),
            InputAction::Restart => self.command(|e| e.restart()),
        }
    }

    /// Advance animations one frame and expire the status message.
    pub fn on_tick(&mut self) {
        if let Some(at) = self.message_at {
            if at.elapsed() >= Self::MESSAGE_TTL {
                self.clear_message();
            }
        }
        if let Some(index) = self.animation.tick() {
            self.report_flip(index);
        }
    }

    /// Skip any running animation.
    pub fn settle(&mut self) {
        for index in self.animation.finish() {
            self.report_flip(index);
        }
    }

    fn command(&mut self, run: impl FnOnce(&mut E) -> Result<(), RoundError>) -> bool {
        let outcome = run(&mut self.engine);
        self.sync();
        match outcome {
            Ok(()) => true,
            Err(err) => {
                log::debug!("command refused: {err}");
                self.notice(describe(&err));
                false
            }
        }
    }

    /// Hand new core events to the animation and pick out player messages.
    fn sync(&mut self) {
        let events = self.engine.drain_events();
        for event in &events {
            match *event {
                RoundEvent::BetPlaced { .. } => self.clear_message(),
                RoundEvent::OutOfCredits { .. } => {
                    self.notice("Not enough credits. Want to restart the game? Press R.")
                }
                RoundEvent::GameRestarted { credits } => {
                    self.notice(format!("New game: {credits} credits."))
                }
                _ => {}
            }
        }
        self.animation.schedule(&events);
    }

    fn report_flip(&mut self, index: usize) {
        if index < HAND_SIZE && self.engine.state() == RoundState::HandDealt {
            if let Err(err) = self.engine.reveal(index) {
                log::warn!("reveal of slot {index} refused: {err}");
            }
        }
        self.sync();
    }

    fn toggle_overlay(&mut self, which: Overlay) {
        self.overlay = if self.overlay == Some(which) { None } else { Some(which) };
    }

    fn notice(&mut self, text: impl Into<String>) {
        self.message = Some(text.into());
        self.message_at = Some(Instant::now());
    }

    fn clear_message(&mut self) {
        self.message = None;
        self.message_at = None;
    }
}

fn describe(err: &RoundError) -> String {
    match err {
        RoundError::InsufficientCredits { credits, bet } => {
            format!("Not enough credits ({credits}) for a {bet} bet.")
        }
        RoundError::CardHidden(i) => format!("Card {} is not face up yet.", i + 1),
        RoundError::IllegalTransition { .. } => "Not now.".to_string(),
        other => other.to_string(),
    }
}
