//! The round state machine: bet, hold, draw, get paid.
//!
//! ```text
//! AwaitingBet --place_bet--> HandDealt --draw--> RoundResolved
//!      ^   \__restart__/        |  ^                  |
//!      |                  toggle_hold/reveal          |
//!      +-------------------- next_round --------------+
//! ```
//!
//! Every command either succeeds and moves the machine, or fails with a
//! [`RoundError`] and leaves everything untouched.

use crate::cards::Card;
use crate::config::{Config, GameConfig};
use crate::deck::{Deck, DeckError};
use crate::evaluator::{evaluate_five, Category, EvalError};
use crate::hand::{Hand, HAND_SIZE};
use crate::paytable::PayTable;
use std::collections::VecDeque;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum RoundState {
    AwaitingBet,
    HandDealt,
    RoundResolved,
}

impl RoundState {
    pub fn label(self) -> &'static str {
        match self {
            RoundState::AwaitingBet => "awaiting bet",
            RoundState::HandDealt => "hand dealt",
            RoundState::RoundResolved => "round resolved",
        }
    }
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The commands a player can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Command {
    PlaceBet,
    ToggleHold,
    Reveal,
    Draw,
    NextRound,
    Restart,
}

impl Command {
    pub fn label(self) -> &'static str {
        match self {
            Command::PlaceBet => "place bet",
            Command::ToggleHold => "toggle hold",
            Command::Reveal => "reveal",
            Command::Draw => "draw",
            Command::NextRound => "next round",
            Command::Restart => "restart",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundError {
    #[error("insufficient credits: have {credits}, bet is {bet}")]
    InsufficientCredits { credits: u64, bet: u64 },
    #[error("cannot {action} while {state}")]
    IllegalTransition { state: RoundState, action: Command },
    #[error("no card at position {0}")]
    InvalidIndex(usize),
    #[error("card at position {0} is still face down")]
    CardHidden(usize),
    #[error(transparent)]
    InvalidHand(#[from] EvalError),
    #[error(transparent)]
    InsufficientCards(#[from] DeckError),
}

/// Outcome of the most recent draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct RoundResult {
    pub category: Category,
    pub reward: u64,
}

/// Something observable that happened inside the controller, in order.
/// The presentation drains these to schedule animations and messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundEvent {
    BetPlaced { bet: u64, credits: u64 },
    /// A face-down card landed in `index`.
    CardDealt { index: usize, card: Card },
    HoldToggled { index: usize, held: bool },
    CardRevealed { index: usize },
    /// A discarded card was replaced on the draw. Replacements end face up.
    CardReplaced { index: usize, card: Card },
    DeckShuffled { remaining: usize },
    RoundResolved { category: Category, reward: u64, credits: u64 },
    RoundAdvanced { rounds_completed: u64, bet: u64 },
    GameRestarted { credits: u64 },
    /// Credits no longer cover the bet; only a restart is possible.
    OutOfCredits { credits: u64, bet: u64 },
}

/// One line of the resolved-round history.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct RoundRecord {
    /// 1-based round number within the current game.
    pub round: u64,
    pub bet: u64,
    pub cards: [Card; HAND_SIZE],
    pub category: Category,
    pub reward: u64,
    pub credits_after: u64,
}

/// Owned copy of everything the presentation needs to draw a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct TableSnapshot {
    pub state: RoundState,
    pub credits: u64,
    pub bet: u64,
    pub rounds_completed: u64,
    pub hand: Option<Hand>,
    pub result: Option<RoundResult>,
    pub deck_remaining: usize,
    pub out_of_credits: bool,
}

#[derive(Debug, Clone)]
pub struct RoundController {
    rules: GameConfig,
    paytable: PayTable,
    deck: Deck,
    state: RoundState,
    credits: u64,
    rounds_completed: u64,
    hand: Option<Hand>,
    result: Option<RoundResult>,
    events: Vec<RoundEvent>,
    history: VecDeque<RoundRecord>,
}

impl Default for RoundController {
    fn default() -> Self {
        Self::new(GameConfig::default(), PayTable::default())
    }
}

impl RoundController {
    /// Deck seeded from `rules.seed`, or from entropy when unset.
    pub fn new(rules: GameConfig, paytable: PayTable) -> Self {
        let deck = match rules.seed {
            Some(seed) => Deck::with_seed(seed),
            None => Deck::from_entropy(),
        };
        Self::with_deck(rules, paytable, deck)
    }

    /// Default rules with a reproducible deck.
    ///
    /// ```
    /// use draw_poker::round::{RoundController, RoundState};
    ///
    /// let mut table = RoundController::with_seed(3);
    /// assert_eq!(table.credits(), 100);
    /// table.place_bet().unwrap();
    /// assert_eq!(table.state(), RoundState::HandDealt);
    /// assert_eq!(table.credits(), 90);
    /// table.draw().unwrap();
    /// table.next_round().unwrap();
    /// assert_eq!(table.current_bet(), 12);
    /// ```
    pub fn with_seed(seed: u64) -> Self {
        let rules = GameConfig { seed: Some(seed), ..GameConfig::default() };
        Self::new(rules, PayTable::default())
    }

    pub fn with_deck(rules: GameConfig, paytable: PayTable, deck: Deck) -> Self {
        Self {
            credits: rules.starting_credits,
            history: VecDeque::with_capacity(rules.history_len.min(64)),
            rules,
            paytable,
            deck,
            state: RoundState::AwaitingBet,
            rounds_completed: 0,
            hand: None,
            result: None,
            events: Vec::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.game.clone(), config.paytable)
    }

    // ---- queries ----

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn credits(&self) -> u64 {
        self.credits
    }

    /// Bet for the round about to be (or being) played.
    pub fn current_bet(&self) -> u64 {
        self.rules.bet_after(self.rounds_completed)
    }

    pub fn rounds_completed(&self) -> u64 {
        self.rounds_completed
    }

    pub fn hand(&self) -> Option<&Hand> {
        self.hand.as_ref()
    }

    pub fn last_result(&self) -> Option<RoundResult> {
        self.result
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn paytable(&self) -> &PayTable {
        &self.paytable
    }

    pub fn rules(&self) -> &GameConfig {
        &self.rules
    }

    /// Waiting for a bet the credits cannot cover.
    pub fn is_out_of_credits(&self) -> bool {
        self.state == RoundState::AwaitingBet && self.credits < self.current_bet()
    }

    /// Resolved rounds, oldest first.
    pub fn history(&self) -> impl DoubleEndedIterator<Item = &RoundRecord> + ExactSizeIterator + '_ {
        self.history.iter()
    }

    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            state: self.state,
            credits: self.credits,
            bet: self.current_bet(),
            rounds_completed: self.rounds_completed,
            hand: self.hand,
            result: self.result,
            deck_remaining: self.deck.remaining(),
            out_of_credits: self.is_out_of_credits(),
        }
    }

    /// Take every event recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<RoundEvent> {
        std::mem::take(&mut self.events)
    }

    // ---- commands ----

    /// Pay the bet and deal five face-down cards.
    pub fn place_bet(&mut self) -> Result<(), RoundError> {
        self.expect_state(RoundState::AwaitingBet, Command::PlaceBet)?;
        let bet = self.current_bet();
        if self.credits < bet {
            log::warn!("bet refused: credits {} below bet {bet}", self.credits);
            return Err(RoundError::InsufficientCredits { credits: self.credits, bet });
        }
        if self.deck.remaining() < HAND_SIZE {
            self.reshuffle(&[]);
        }
        let cards = self.deck.draw(HAND_SIZE)?;
        let hand = Hand::try_new(&cards).map_err(EvalError::from)?;

        self.credits -= bet;
        self.hand = Some(hand);
        self.result = None;
        self.state = RoundState::HandDealt;
        self.events.push(RoundEvent::BetPlaced { bet, credits: self.credits });
        for (index, card) in cards.into_iter().enumerate() {
            self.events.push(RoundEvent::CardDealt { index, card });
        }
        log::debug!("bet {bet} placed, dealt {}, credits {}", fmt_cards(&hand.cards()), self.credits);
        Ok(())
    }

    /// Flip the held flag of a face-up card. Returns the new flag.
    pub fn toggle_hold(&mut self, index: usize) -> Result<bool, RoundError> {
        let hand = self.dealt_hand_mut(Command::ToggleHold, index)?;
        if !hand.slots()[index].revealed {
            return Err(RoundError::CardHidden(index));
        }
        let held = hand.toggle_hold(index);
        let card = hand.slots()[index].card;
        self.events.push(RoundEvent::HoldToggled { index, held });
        log::debug!("slot {index} ({}) {}", card.name(), if held { "held" } else { "released" });
        Ok(held)
    }

    /// Mark a dealt card as shown. Revealing a face-up card is a no-op.
    pub fn reveal(&mut self, index: usize) -> Result<(), RoundError> {
        let hand = self.dealt_hand_mut(Command::Reveal, index)?;
        if hand.reveal(index) {
            self.events.push(RoundEvent::CardRevealed { index });
        }
        Ok(())
    }

    pub fn reveal_all(&mut self) -> Result<(), RoundError> {
        self.expect_state(RoundState::HandDealt, Command::Reveal)?;
        for index in 0..HAND_SIZE {
            self.reveal(index)?;
        }
        Ok(())
    }

    /// Replace every card not held, score the final hand and pay out.
    pub fn draw(&mut self) -> Result<RoundResult, RoundError> {
        self.expect_state(RoundState::HandDealt, Command::Draw)?;
        let Some(mut hand) = self.hand else {
            return Err(RoundError::IllegalTransition {
                state: self.state,
                action: Command::Draw,
            });
        };
        let discards = hand.discard_positions();
        if self.deck.remaining() < discards.len() {
            // the whole hand stays out so a discard never comes straight back
            self.reshuffle(&hand.cards());
        }
        let fresh = self.deck.draw(discards.len())?;
        for (&index, &card) in discards.iter().zip(&fresh) {
            hand.replace(index, card);
        }
        hand.reveal_all();
        let evaluation = evaluate_five(&hand.cards())?;

        let reward = self.paytable.payout(evaluation.category);
        let bet = self.current_bet();
        self.credits = self.credits.saturating_add(reward);
        let result = RoundResult { category: evaluation.category, reward };
        self.hand = Some(hand);
        self.result = Some(result);
        self.state = RoundState::RoundResolved;

        for (&index, &card) in discards.iter().zip(&fresh) {
            self.events.push(RoundEvent::CardReplaced { index, card });
        }
        self.events.push(RoundEvent::RoundResolved {
            category: result.category,
            reward,
            credits: self.credits,
        });
        self.record(RoundRecord {
            round: self.rounds_completed + 1,
            bet,
            cards: hand.cards(),
            category: result.category,
            reward,
            credits_after: self.credits,
        });
        log::info!(
            "round {} resolved: {} ({}) pays {reward}, credits {}",
            self.rounds_completed + 1,
            result.category,
            fmt_cards(&hand.cards()),
            self.credits
        );
        Ok(result)
    }

    /// Clear the table and raise the bet for the next round.
    pub fn next_round(&mut self) -> Result<(), RoundError> {
        self.expect_state(RoundState::RoundResolved, Command::NextRound)?;
        self.rounds_completed += 1;
        self.hand = None;
        self.result = None;
        self.state = RoundState::AwaitingBet;
        if self.deck.remaining() < self.rules.round_reshuffle_below {
            self.reshuffle(&[]);
        }
        let bet = self.current_bet();
        self.events.push(RoundEvent::RoundAdvanced { rounds_completed: self.rounds_completed, bet });
        log::debug!("round {} awaiting bet {bet}", self.rounds_completed + 1);
        self.flag_out_of_credits();
        Ok(())
    }

    /// Start a new game. Only allowed once credits no longer cover the bet.
    pub fn restart(&mut self) -> Result<(), RoundError> {
        if !self.is_out_of_credits() {
            return Err(RoundError::IllegalTransition { state: self.state, action: Command::Restart });
        }
        self.credits = self.rules.starting_credits;
        self.rounds_completed = 0;
        self.hand = None;
        self.result = None;
        self.history.clear();
        self.reshuffle(&[]);
        self.events.push(RoundEvent::GameRestarted { credits: self.credits });
        log::info!("game restarted with {} credits", self.credits);
        self.flag_out_of_credits();
        Ok(())
    }

    // ---- internals ----

    fn expect_state(&self, want: RoundState, action: Command) -> Result<(), RoundError> {
        if self.state == want {
            Ok(())
        } else {
            Err(RoundError::IllegalTransition { state: self.state, action })
        }
    }

    fn dealt_hand_mut(&mut self, action: Command, index: usize) -> Result<&mut Hand, RoundError> {
        self.expect_state(RoundState::HandDealt, action)?;
        if index >= HAND_SIZE {
            return Err(RoundError::InvalidIndex(index));
        }
        let state = self.state;
        self.hand.as_mut().ok_or(RoundError::IllegalTransition { state, action })
    }

    fn reshuffle(&mut self, on_table: &[Card]) {
        self.deck.shuffle_excluding(on_table);
        self.events.push(RoundEvent::DeckShuffled { remaining: self.deck.remaining() });
    }

    fn record(&mut self, record: RoundRecord) {
        if self.rules.history_len == 0 {
            return;
        }
        while self.history.len() >= self.rules.history_len {
            self.history.pop_front();
        }
        self.history.push_back(record);
    }

    fn flag_out_of_credits(&mut self) {
        if self.is_out_of_credits() {
            let (credits, bet) = (self.credits, self.current_bet());
            self.events.push(RoundEvent::OutOfCredits { credits, bet });
            log::info!("out of credits: {credits} left, bet is {bet}");
        }
    }
}

fn fmt_cards(cards: &[Card]) -> String {
    cards.iter().map(Card::to_string).collect::<Vec<_>>().join(" ")
}
