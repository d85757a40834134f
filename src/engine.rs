// Command/query boundary for front-ends. The terminal app drives the game
// only through this trait, so a different presentation (or a scripted
// player in tests) can sit on the same core. Implemented for
// `RoundController`.

use crate::config::GameConfig;
use crate::hand::Hand;
use crate::paytable::PayTable;
use crate::round::{RoundController, RoundError, RoundEvent, RoundRecord, RoundResult, RoundState, TableSnapshot};

pub trait DrawPokerEngine {
    // Commands
    fn place_bet(&mut self) -> Result<(), RoundError>;
    fn toggle_hold(&mut self, index: usize) -> Result<bool, RoundError>;
    fn reveal(&mut self, index: usize) -> Result<(), RoundError>;
    fn reveal_all(&mut self) -> Result<(), RoundError>;
    fn draw(&mut self) -> Result<RoundResult, RoundError>;
    fn next_round(&mut self) -> Result<(), RoundError>;
    fn restart(&mut self) -> Result<(), RoundError>;

    // Queries
    fn state(&self) -> RoundState;
    fn credits(&self) -> u64;
    fn current_bet(&self) -> u64;
    fn rounds_completed(&self) -> u64;
    fn hand(&self) -> Option<&Hand>;
    fn last_result(&self) -> Option<RoundResult>;
    fn deck_remaining(&self) -> usize;
    fn out_of_credits(&self) -> bool;
    fn paytable(&self) -> &PayTable;
    fn rules(&self) -> &GameConfig;
    /// Most recent resolved rounds, newest first.
    fn recent_rounds(&self, n: usize) -> Vec<RoundRecord>;
    fn snapshot(&self) -> TableSnapshot;

    fn drain_events(&mut self) -> Vec<RoundEvent>;
}

impl DrawPokerEngine for RoundController {
    fn place_bet(&mut self) -> Result<(), RoundError> {
        self.place_bet()
    }
    fn toggle_hold(&mut self, index: usize) -> Result<bool, RoundError> {
        self.toggle_hold(index)
    }
    fn reveal(&mut self, index: usize) -> Result<(), RoundError> {
        self.reveal(index)
    }
    fn reveal_all(&mut self) -> Result<(), RoundError> {
        self.reveal_all()
    }
    fn draw(&mut self) -> Result<RoundResult, RoundError> {
        self.draw()
    }
    fn next_round(&mut self) -> Result<(), RoundError> {
        self.next_round()
    }
    fn restart(&mut self) -> Result<(), RoundError> {
        self.restart()
    }

    fn state(&self) -> RoundState {
        self.state()
    }
    fn credits(&self) -> u64 {
        self.credits()
    }
    fn current_bet(&self) -> u64 {
        self.current_bet()
    }
    fn rounds_completed(&self) -> u64 {
        self.rounds_completed()
    }
    fn hand(&self) -> Option<&Hand> {
        self.hand()
    }
    fn last_result(&self) -> Option<RoundResult> {
        self.last_result()
    }
    fn deck_remaining(&self) -> usize {
        self.deck_remaining()
    }
    fn out_of_credits(&self) -> bool {
        self.is_out_of_credits()
    }
    fn paytable(&self) -> &PayTable {
        self.paytable()
    }
    fn rules(&self) -> &GameConfig {
        self.rules()
    }
    fn recent_rounds(&self, n: usize) -> Vec<RoundRecord> {
        self.history().rev().take(n).cloned().collect()
    }
    fn snapshot(&self) -> TableSnapshot {
        self.snapshot()
    }

    fn drain_events(&mut self) -> Vec<RoundEvent> {
        self.drain_events()
    }
}
