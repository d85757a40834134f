use crate::evaluator::Category;
use serde::{Deserialize, Serialize};

/// Credits paid for each final hand category.
///
/// ```
/// use draw_poker::evaluator::Category;
/// use draw_poker::paytable::PayTable;
///
/// let table = PayTable::default();
/// assert_eq!(table.payout(Category::RoyalFlush), 500);
/// assert_eq!(table.payout(Category::HighCard), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PayTable {
    pub royal_flush: u64,
    pub straight_flush: u64,
    pub four_of_a_kind: u64,
    pub full_house: u64,
    pub flush: u64,
    pub straight: u64,
    pub three_of_a_kind: u64,
    pub two_pair: u64,
    pub one_pair: u64,
    pub high_card: u64,
}

impl Default for PayTable {
    fn default() -> Self {
        // Three of a Kind outpays a Straight on this machine.
        Self {
            royal_flush: 500,
            straight_flush: 250,
            four_of_a_kind: 100,
            full_house: 60,
            flush: 40,
            straight: 20,
            three_of_a_kind: 30,
            two_pair: 20,
            one_pair: 10,
            high_card: 0,
        }
    }
}

impl PayTable {
    pub fn payout(&self, category: Category) -> u64 {
        match category {
            Category::RoyalFlush => self.royal_flush,
            Category::StraightFlush => self.straight_flush,
            Category::FourOfAKind => self.four_of_a_kind,
            Category::FullHouse => self.full_house,
            Category::Flush => self.flush,
            Category::Straight => self.straight,
            Category::ThreeOfAKind => self.three_of_a_kind,
            Category::TwoPair => self.two_pair,
            Category::Pair => self.one_pair,
            Category::HighCard => self.high_card,
        }
    }

    /// (category, payout) rows, strongest category first.
    pub fn rows(&self) -> impl Iterator<Item = (Category, u64)> + '_ {
        Category::ALL.iter().map(move |&c| (c, self.payout(c)))
    }
}
