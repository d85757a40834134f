use crate::cards::{parse_cards, Card};
use std::collections::HashSet;
use std::str::FromStr;

/// Cards in a draw-poker hand.
pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly 5 cards, got {0}")]
    CardCount(usize),
    #[error("duplicate card in hand: {0}")]
    DuplicateCard(Card),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// Check that `cards` is exactly five distinct cards and return them as an array.
///
/// ```
/// use draw_poker::cards::parse_cards;
/// use draw_poker::hand::{validate_five, HandError};
///
/// let ok = parse_cards("As Ks Qs Js Ts").unwrap();
/// assert!(validate_five(&ok).is_ok());
///
/// let dup = parse_cards("As As Qs Js Ts").unwrap();
/// assert!(matches!(validate_five(&dup), Err(HandError::DuplicateCard(_))));
/// ```
pub fn validate_five(cards: &[Card]) -> Result<[Card; HAND_SIZE], HandError> {
    let five: [Card; HAND_SIZE] =
        cards.try_into().map_err(|_| HandError::CardCount(cards.len()))?;
    let mut seen = HashSet::with_capacity(HAND_SIZE);
    for c in five {
        if !seen.insert(c) {
            return Err(HandError::DuplicateCard(c));
        }
    }
    Ok(five)
}

/// One position of the player's hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct Slot {
    pub card: Card,
    pub held: bool,
    pub revealed: bool,
}

impl Slot {
    /// A freshly dealt card: face down, not held.
    pub const fn dealt(card: Card) -> Self {
        Self { card, held: false, revealed: false }
    }
}

/// The five cards in front of the player, with hold/reveal flags per slot.
///
/// ```
/// use draw_poker::hand::Hand;
///
/// let hand: Hand = "2c 2d 5h 5s 9c".parse().unwrap();
/// assert_eq!(hand.slots().len(), 5);
/// assert!(hand.slots().iter().all(|s| !s.held && !s.revealed));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    slots: [Slot; HAND_SIZE],
}

impl Hand {
    pub fn try_new(cards: &[Card]) -> Result<Self, HandError> {
        let five = validate_five(cards)?;
        Ok(Self { slots: five.map(Slot::dealt) })
    }

    pub fn slots(&self) -> &[Slot; HAND_SIZE] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub fn cards(&self) -> [Card; HAND_SIZE] {
        self.slots.map(|s| s.card)
    }

    /// Indices of cards that will be replaced on the draw.
    pub fn discard_positions(&self) -> Vec<usize> {
        (0..HAND_SIZE).filter(|&i| !self.slots[i].held).collect()
    }

    pub fn held_count(&self) -> usize {
        self.slots.iter().filter(|s| s.held).count()
    }

    pub fn all_revealed(&self) -> bool {
        self.slots.iter().all(|s| s.revealed)
    }

    pub(crate) fn toggle_hold(&mut self, index: usize) -> bool {
        let slot = &mut self.slots[index];
        slot.held = !slot.held;
        slot.held
    }

    /// Returns true if the slot was face down before.
    pub(crate) fn reveal(&mut self, index: usize) -> bool {
        let slot = &mut self.slots[index];
        let was_hidden = !slot.revealed;
        slot.revealed = true;
        was_hidden
    }

    pub(crate) fn reveal_all(&mut self) {
        for slot in self.slots.iter_mut() {
            slot.revealed = true;
        }
    }

    /// Put a fresh face-down card at `index`, returning the discarded one.
    pub(crate) fn replace(&mut self, index: usize, card: Card) -> Card {
        std::mem::replace(&mut self.slots[index], Slot::dealt(card)).card
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Hand::try_new(&cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn wrong_card_count_is_rejected() {
        let cards = parse_cards("As Ks Qs Js").unwrap();
        assert_eq!(Hand::try_new(&cards), Err(HandError::CardCount(4)));
        let cards = parse_cards("As Ks Qs Js Ts 9s").unwrap();
        assert_eq!(Hand::try_new(&cards), Err(HandError::CardCount(6)));
    }

    #[test]
    fn duplicate_cards_are_rejected() {
        let err = "As Ks As Js Ts".parse::<Hand>().unwrap_err();
        assert_eq!(err, HandError::DuplicateCard(Card::new(Rank::Ace, Suit::Spades)));
    }

    #[test]
    fn bad_notation_surfaces_as_parse_error() {
        assert!(matches!("As Ks Qx Js Ts".parse::<Hand>(), Err(HandError::CardParse(_))));
    }

    #[test]
    fn hold_and_discard_bookkeeping() {
        let mut hand: Hand = "2c 2d 5h 5s 9c".parse().unwrap();
        assert!(hand.toggle_hold(0));
        assert!(hand.toggle_hold(1));
        assert_eq!(hand.held_count(), 2);
        assert_eq!(hand.discard_positions(), vec![2, 3, 4]);
        assert!(!hand.toggle_hold(1));
        assert_eq!(hand.discard_positions(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn replace_resets_slot_flags() {
        let mut hand: Hand = "2c 2d 5h 5s 9c".parse().unwrap();
        hand.reveal_all();
        hand.toggle_hold(4);
        let old = hand.replace(4, Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!(old, Card::new(Rank::Nine, Suit::Clubs));
        let slot = hand.slot(4).unwrap();
        assert!(!slot.held && !slot.revealed);
        assert!(!hand.all_revealed());
    }

    #[test]
    fn reveal_reports_first_flip_only() {
        let mut hand: Hand = "2c 2d 5h 5s 9c".parse().unwrap();
        assert!(hand.reveal(2));
        assert!(!hand.reveal(2));
    }
}
