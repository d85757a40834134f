//! Deal/flip timeline for the five card slots.
//!
//! The core reports what happened as [`RoundEvent`]s; this turns them into
//! a queue of timed steps advanced once per tick. While any step is queued
//! the app refuses game commands.

use crate::hand::HAND_SIZE;
use crate::round::RoundEvent;
use std::collections::VecDeque;

/// What a slot currently shows. Progress values are 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardPhase {
    Empty,
    Sliding(u8),
    FaceDown,
    Flipping(u8),
    FaceUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Shuffle,
    Slide(usize),
    /// `report` is set for cards the core still considers face down.
    Flip { index: usize, report: bool },
}

#[derive(Debug, Clone)]
pub struct Animation {
    deal_ticks: u16,
    flip_ticks: u16,
    queue: VecDeque<Step>,
    elapsed: u16,
    slots: [CardPhase; HAND_SIZE],
}

impl Animation {
    pub fn new(deal_ticks: u16, flip_ticks: u16) -> Self {
        Self {
            deal_ticks,
            flip_ticks,
            queue: VecDeque::new(),
            elapsed: 0,
            slots: [CardPhase::Empty; HAND_SIZE],
        }
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn is_shuffling(&self) -> bool {
        matches!(self.queue.front(), Some(Step::Shuffle))
    }

    pub fn phase(&self, index: usize) -> CardPhase {
        self.slots.get(index).copied().unwrap_or(CardPhase::Empty)
    }

    /// Queue steps for a batch of core events. Within one batch every card
    /// slides in before any card turns over.
    pub fn schedule(&mut self, events: &[RoundEvent]) {
        let mut flips = Vec::new();
        for event in events {
            match *event {
                RoundEvent::DeckShuffled { .. } => self.queue.push_back(Step::Shuffle),
                RoundEvent::CardDealt { index, .. } => {
                    self.set(index, CardPhase::Empty);
                    self.queue.push_back(Step::Slide(index));
                    flips.push(Step::Flip { index, report: true });
                }
                RoundEvent::CardReplaced { index, .. } => {
                    self.set(index, CardPhase::Empty);
                    self.queue.push_back(Step::Slide(index));
                    flips.push(Step::Flip { index, report: false });
                }
                RoundEvent::CardRevealed { index } => {
                    if !self.queue.iter().chain(&flips).any(|s| s.touches(index)) {
                        self.set(index, CardPhase::FaceUp);
                    }
                }
                RoundEvent::RoundAdvanced { .. } | RoundEvent::GameRestarted { .. } => {
                    self.queue.clear();
                    self.elapsed = 0;
                    self.slots = [CardPhase::Empty; HAND_SIZE];
                }
                _ => {}
            }
        }
        self.queue.extend(flips);
        self.refresh_front();
    }

    /// Advance one tick. Returns the slot whose flip just finished if the
    /// core needs to be told about it.
    pub fn tick(&mut self) -> Option<usize> {
        let step = *self.queue.front()?;
        self.elapsed = self.elapsed.saturating_add(1);
        if self.elapsed < self.duration(step) {
            self.refresh_front();
            return None;
        }
        self.complete_front()
    }

    /// Finish every queued step at once, returning slots to report.
    pub fn finish(&mut self) -> Vec<usize> {
        let mut reports = Vec::new();
        while !self.queue.is_empty() {
            reports.extend(self.complete_front());
        }
        reports
    }

    fn complete_front(&mut self) -> Option<usize> {
        let step = self.queue.pop_front()?;
        self.elapsed = 0;
        let report = match step {
            Step::Shuffle => None,
            Step::Slide(i) => {
                self.set(i, CardPhase::FaceDown);
                None
            }
            Step::Flip { index, report } => {
                self.set(index, CardPhase::FaceUp);
                report.then_some(index)
            }
        };
        self.refresh_front();
        report
    }

    fn duration(&self, step: Step) -> u16 {
        match step {
            Step::Shuffle => self.deal_ticks.saturating_mul(2),
            Step::Slide(_) => self.deal_ticks,
            Step::Flip { .. } => self.flip_ticks,
        }
    }

    fn refresh_front(&mut self) {
        let Some(&step) = self.queue.front() else {
            return;
        };
        let total = self.duration(step).max(1);
        let pct = (u32::from(self.elapsed.min(total)) * 100 / u32::from(total)) as u8;
        match step {
            Step::Shuffle => {}
            Step::Slide(i) => self.set(i, CardPhase::Sliding(pct)),
            Step::Flip { index, .. } => self.set(index, CardPhase::Flipping(pct)),
        }
    }

    fn set(&mut self, index: usize, phase: CardPhase) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = phase;
        }
    }
}

impl Step {
    fn touches(&self, slot: usize) -> bool {
        match *self {
            Step::Shuffle => false,
            Step::Slide(i) => i == slot,
            Step::Flip { index, .. } => index == slot,
        }
    }
}
