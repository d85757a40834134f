use crate::cards::{full_deck, Card};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Number of cards in a full deck; `drawn() + remaining()` always equals this.
pub const DECK_SIZE: usize = 52;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("insufficient cards: requested {requested}, remaining {remaining}")]
    InsufficientCards { requested: usize, remaining: usize },
}

/// A standard 52-card deck that owns its random source.
///
/// The top of the deck is the end of the internal vector.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Deck {
    /// A freshly shuffled deck whose order is reproducible from `seed`.
    ///
    /// ```
    /// use draw_poker::deck::Deck;
    ///
    /// let deck = Deck::with_seed(7);
    /// assert_eq!(deck.remaining(), 52);
    /// assert_eq!(deck.drawn(), 0);
    /// ```
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// A freshly shuffled deck seeded from the thread RNG.
    pub fn from_entropy() -> Self {
        Self::from_rng(ChaCha8Rng::from_rng(&mut rand::rng()))
    }

    fn from_rng(rng: ChaCha8Rng) -> Self {
        let mut deck = Self { cards: Vec::with_capacity(DECK_SIZE), rng };
        deck.shuffle();
        deck
    }

    /// A deck that deals `order` front to back. Reshuffles after that are
    /// driven by `seed`. Intended for scripted scenarios.
    pub fn stacked(order: Vec<Card>, seed: u64) -> Self {
        let mut cards = order;
        cards.reverse();
        Self { cards, rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Cards removed from the deck in the current shuffle epoch.
    pub fn drawn(&self) -> usize {
        DECK_SIZE.saturating_sub(self.cards.len())
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Undrawn cards, top of the deck last.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Regenerate all 52 cards and put them in uniformly random order.
    pub fn shuffle(&mut self) {
        self.shuffle_excluding(&[]);
    }

    /// Regenerate the deck without `exclude` (cards still on the table) and
    /// shuffle it. Excluded cards count as drawn for this epoch.
    pub fn shuffle_excluding(&mut self, exclude: &[Card]) {
        self.cards = full_deck();
        self.cards.retain(|c| !exclude.contains(c));
        self.cards.shuffle(&mut self.rng);
        log::debug!("deck shuffled: {} cards, {} held back", self.cards.len(), exclude.len());
    }

    /// Remove and return `n` cards from the top. Never returns a short hand:
    /// if fewer than `n` remain, nothing is removed.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        let remaining = self.cards.len();
        if n > remaining {
            return Err(DeckError::InsufficientCards { requested: n, remaining });
        }
        let mut out = self.cards.split_off(remaining - n);
        out.reverse();
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use std::collections::HashSet;

    #[test]
    fn new_deck_has_52_unique_cards() {
        let d = Deck::with_seed(1);
        assert_eq!(d.remaining(), 52);
        let set: HashSet<Card> = d.cards().iter().copied().collect();
        assert_eq!(set.len(), 52);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let d1 = Deck::with_seed(42);
        let d2 = Deck::with_seed(42);
        assert_eq!(d1.cards(), d2.cards());
        let d3 = Deck::with_seed(43);
        assert_ne!(d1.cards(), d3.cards());
    }

    #[test]
    fn draw_removes_from_top() {
        let mut d = Deck::with_seed(7);
        let top = *d.cards().last().unwrap();
        let hand = d.draw(5).unwrap();
        assert_eq!(hand.len(), 5);
        assert_eq!(hand[0], top);
        assert_eq!(d.remaining(), 47);
        assert_eq!(d.drawn(), 5);
        assert!(hand.iter().all(|c| !d.cards().contains(c)));
    }

    #[test]
    fn oversized_draw_is_refused_and_leaves_deck_intact() {
        let mut d = Deck::with_seed(3);
        d.draw(50).unwrap();
        let err = d.draw(3).unwrap_err();
        assert_eq!(err, DeckError::InsufficientCards { requested: 3, remaining: 2 });
        assert_eq!(d.remaining(), 2);
        assert_eq!(d.draw(2).unwrap().len(), 2);
        assert!(d.is_empty());
    }

    #[test]
    fn draw_zero_is_a_no_op() {
        let mut d = Deck::with_seed(3);
        assert!(d.draw(0).unwrap().is_empty());
        assert_eq!(d.remaining(), 52);
    }

    #[test]
    fn stacked_deck_deals_in_given_order() {
        let order = vec![
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::Queen, Suit::Spades),
        ];
        let mut d = Deck::stacked(order.clone(), 0);
        assert_eq!(d.draw(2).unwrap(), order[..2].to_vec());
        assert_eq!(d.draw(1).unwrap(), order[2..].to_vec());
    }

    #[test]
    fn shuffle_excluding_holds_back_table_cards() {
        let mut d = Deck::with_seed(9);
        let table = d.draw(5).unwrap();
        d.shuffle_excluding(&table);
        assert_eq!(d.remaining(), 47);
        assert_eq!(d.drawn(), 5);
        assert!(table.iter().all(|c| !d.cards().contains(c)));
    }

    #[test]
    fn shuffle_restores_full_deck() {
        let mut d = Deck::with_seed(11);
        d.draw(40).unwrap();
        d.shuffle();
        assert_eq!(d.remaining(), 52);
    }
}
