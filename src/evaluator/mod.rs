pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{Card, Rank};
use crate::hand::{validate_five, HandError, HAND_SIZE};
use core::cmp::Ordering;
use std::fmt;

/// Compact, comparable hand strength. Higher is better.
/// Encodes category and ranked tiebreakers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandValue(u64);

/// Draw-poker hand category. The discriminant is the category's strength,
/// from High Card (1) to Royal Flush (10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    /// Strongest first.
    pub const ALL: [Category; 10] = [
        Category::RoyalFlush,
        Category::StraightFlush,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfAKind,
        Category::TwoPair,
        Category::Pair,
        Category::HighCard,
    ];

    pub const fn strength(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Detailed evaluation result. `value` drives ordering.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct Evaluation {
    pub category: Category,
    /// The five cards, highest rank first.
    pub cards: [Card; HAND_SIZE],
    value: HandValue,
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Evaluation {}

impl Evaluation {
    /// Return the packed comparable value for ordering/caching.
    pub const fn value(&self) -> HandValue {
        self.value
    }

    pub const fn strength(&self) -> u8 {
        self.category.strength()
    }
}

impl HandValue {
    /// Pack a category and five rank tiebreakers into a comparable value.
    pub fn from_parts(category: Category, ranks_desc: &[Rank; 5]) -> Self {
        // [ category (8 bits) | r0 (6) | r1 (6) | r2 (6) | r3 (6) | r4 (6) | 10 zero bits ]
        const CAT_SHIFT: u32 = 48;
        const RANK_STRIDE: u32 = 6;
        let mut v: u64 = (category as u64) << CAT_SHIFT;
        for (i, r) in ranks_desc.iter().enumerate() {
            let offset = CAT_SHIFT - RANK_STRIDE * (i as u32 + 1);
            v |= (*r as u64) << offset;
        }
        HandValue(v)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
}

/// Classify exactly five distinct cards.
///
/// ```
/// use draw_poker::cards::parse_cards;
/// use draw_poker::evaluator::{evaluate, Category};
///
/// let royal = parse_cards("Ts Js Qs Ks As").unwrap();
/// assert_eq!(evaluate(&royal).unwrap().category, Category::RoyalFlush);
///
/// let wheel = parse_cards("As 2s 3s 4s 5s").unwrap();
/// assert_eq!(evaluate(&wheel).unwrap().category, Category::StraightFlush);
///
/// assert!(evaluate(&royal[..4]).is_err());
/// ```
pub fn evaluate(cards: &[Card]) -> Result<Evaluation, EvalError> {
    let five = validate_five(cards)?;
    Ok(classify(&five))
}

/// Array form of [`evaluate`]; still rejects duplicate cards.
pub fn evaluate_five(cards: &[Card; HAND_SIZE]) -> Result<Evaluation, EvalError> {
    evaluate(cards)
}

fn classify(cards: &[Card; HAND_SIZE]) -> Evaluation {
    use detector::{HighCardDetector, DETECTORS};
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(cards);
    DETECTORS
        .iter()
        .find_map(|detector| detector.classify(&analysis))
        .unwrap_or_else(|| HighCardDetector::evaluation(&analysis))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn category_of(s: &str) -> Category {
        evaluate(&parse_cards(s).unwrap()).unwrap().category
    }

    #[test]
    fn strength_matches_listed_order() {
        let strengths: Vec<u8> = Category::ALL.iter().map(|c| c.strength()).collect();
        assert_eq!(strengths, vec![10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
        assert!(Category::RoyalFlush > Category::StraightFlush);
        assert!(Category::Pair > Category::HighCard);
    }

    #[test]
    fn labels_read_like_a_paytable() {
        assert_eq!(Category::RoyalFlush.to_string(), "Royal Flush");
        assert_eq!(Category::Pair.to_string(), "One Pair");
        assert_eq!(Category::ThreeOfAKind.label(), "Three of a Kind");
    }

    #[test]
    fn every_category_is_reachable() {
        assert_eq!(category_of("Ts Js Qs Ks As"), Category::RoyalFlush);
        assert_eq!(category_of("9h Th Jh Qh Kh"), Category::StraightFlush);
        assert_eq!(category_of("3c 3d 3h 3s 9c"), Category::FourOfAKind);
        assert_eq!(category_of("Tc Td Th 2s 2h"), Category::FullHouse);
        assert_eq!(category_of("Ah 9h 7h 3h 2h"), Category::Flush);
        assert_eq!(category_of("5c 6d 7h 8s 9c"), Category::Straight);
        assert_eq!(category_of("7c 7d 7h 2s 9c"), Category::ThreeOfAKind);
        assert_eq!(category_of("2c 2d 5h 5s 9c"), Category::TwoPair);
        assert_eq!(category_of("Ah Ad Ts 9c 2d"), Category::Pair);
        assert_eq!(category_of("Ah Kd 7s 5c 2d"), Category::HighCard);
    }

    #[test]
    fn wheel_is_never_royal() {
        assert_eq!(category_of("As 2s 3s 4s 5s"), Category::StraightFlush);
        assert_eq!(category_of("Ac 2d 3h 4s 5c"), Category::Straight);
    }

    #[test]
    fn broadway_offsuit_is_plain_straight() {
        assert_eq!(category_of("Tc Jd Qh Ks Ac"), Category::Straight);
    }

    #[test]
    fn ace_does_not_wrap_around() {
        assert_eq!(category_of("Qc Kd Ah 2s 3c"), Category::HighCard);
    }

    #[test]
    fn malformed_input_is_invalid_hand() {
        let four = parse_cards("As Ks Qs Js").unwrap();
        assert_eq!(evaluate(&four).unwrap_err(), EvalError::InvalidHand(HandError::CardCount(4)));
        let dup = parse_cards("As As Qs Js Ts").unwrap();
        assert!(matches!(
            evaluate(&dup),
            Err(EvalError::InvalidHand(HandError::DuplicateCard(_)))
        ));
        assert!(evaluate(&[]).is_err());
    }

    #[test]
    fn tiebreak_orders_within_category() {
        let kings = evaluate(&parse_cards("Kc Kd 7s 5c 2d").unwrap()).unwrap();
        let queens = evaluate(&parse_cards("Qc Qd As 5c 2d").unwrap()).unwrap();
        assert_eq!(kings.category, queens.category);
        assert!(kings > queens);
    }

    #[test]
    fn evaluation_cards_sorted_high_to_low() {
        let e = evaluate(&parse_cards("3s Ah 5d Kc 9s").unwrap()).unwrap();
        let ranks: Vec<u8> = e.cards.iter().map(|c| c.rank().value()).collect();
        assert_eq!(ranks, vec![14, 13, 9, 5, 3]);
    }
}
