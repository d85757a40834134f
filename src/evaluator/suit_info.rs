use crate::cards::{Card, Suit};

/// Suit multiset of a hand; a flush is all five cards in one suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub counts: [u8; 4],
    pub is_flush: bool,
    pub flush_suit: Option<Suit>,
}

impl SuitInfo {
    pub fn detect(cards: &[Card; 5]) -> Self {
        let mut counts = [0u8; 4];
        for c in cards {
            counts[c.suit() as usize] += 1;
        }
        let flush_suit = Suit::ALL.iter().copied().find(|&s| counts[s as usize] == 5);
        SuitInfo { counts, is_flush: flush_suit.is_some(), flush_suit }
    }
}
