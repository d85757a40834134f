use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};
use crate::evaluator::{Category, Evaluation, HandValue};
use crate::hand::HAND_SIZE;

/// Everything the detectors need to know about five cards, computed once.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// Rank descending, then suit descending.
    pub sorted_cards: [Card; HAND_SIZE],
    /// Ranks of `sorted_cards`, highest first.
    pub ranks: [Rank; HAND_SIZE],
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; HAND_SIZE]) -> Self {
        let mut sorted_cards = *cards;
        sorted_cards.sort_by(|a, b| b.rank().cmp(&a.rank()).then(b.suit().cmp(&a.suit())));
        let ranks = sorted_cards.map(Card::rank);

        let mut rank_counts = [0u8; 15];
        for rank in ranks {
            rank_counts[rank.value() as usize] += 1;
        }

        Self {
            sorted_cards,
            ranks,
            rank_groups: RankGroups::from_counts(&rank_counts),
            suit_info: SuitInfo::detect(&sorted_cards),
            straight_info: StraightInfo::detect(&ranks),
        }
    }

    pub fn build_evaluation(&self, category: Category, tiebreak: [Rank; 5]) -> Evaluation {
        let value = HandValue::from_parts(category, &tiebreak);
        Evaluation { category, cards: self.sorted_cards, value }
    }
}
