use draw_poker::cards::{full_deck, Card};
use draw_poker::deck::{Deck, DeckError, DECK_SIZE};
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    #[test]
    fn drawn_plus_remaining_is_always_52(seed in any::<u64>(), draws in prop::collection::vec(0usize..=12, 0..12)) {
        let mut deck = Deck::with_seed(seed);
        let mut seen: Vec<Card> = Vec::new();
        for n in draws {
            match deck.draw(n) {
                Ok(cards) => {
                    prop_assert_eq!(cards.len(), n);
                    seen.extend(cards);
                }
                Err(DeckError::InsufficientCards { requested, remaining }) => {
                    prop_assert_eq!(requested, n);
                    prop_assert!(remaining < n);
                    prop_assert_eq!(remaining, deck.remaining());
                }
                Err(other) => prop_assert!(false, "unexpected error {other}"),
            }
            prop_assert_eq!(deck.drawn() + deck.remaining(), DECK_SIZE);
        }
        let mut all: HashSet<Card> = seen.iter().copied().collect();
        prop_assert_eq!(all.len(), seen.len());
        all.extend(deck.cards().iter().copied());
        prop_assert_eq!(all.len(), DECK_SIZE);
    }

    #[test]
    fn excluded_cards_never_reappear(seed in any::<u64>(), keep in prop::sample::subsequence(full_deck(), 0..=5)) {
        let mut deck = Deck::with_seed(seed);
        deck.shuffle_excluding(&keep);
        prop_assert_eq!(deck.remaining(), DECK_SIZE - keep.len());
        let rest = deck.draw(deck.remaining()).unwrap();
        prop_assert!(rest.iter().all(|c| !keep.contains(c)));
    }
}

#[test]
fn shuffle_is_roughly_uniform() {
    // Position of the ace of spades at the top over many seeded shuffles.
    let target: Card = "As".parse().unwrap();
    let trials = 5200;
    let mut counts = [0u32; DECK_SIZE];
    for seed in 0..trials {
        let deck = Deck::with_seed(seed);
        let pos = deck.cards().iter().position(|&c| c == target).unwrap();
        counts[pos] += 1;
    }
    let expected = trials as f64 / DECK_SIZE as f64;
    let chi2: f64 = counts.iter().map(|&o| (o as f64 - expected).powi(2) / expected).sum();
    // 51 degrees of freedom; 99.99th percentile is about 100
    assert!(chi2 < 110.0, "chi-squared {chi2} too large: {counts:?}");
}

#[test]
fn oversized_draw_removes_nothing() {
    let mut deck = Deck::with_seed(3);
    deck.draw(50).unwrap();
    assert_eq!(deck.draw(5), Err(DeckError::InsufficientCards { requested: 5, remaining: 2 }));
    assert_eq!(deck.remaining(), 2);
    deck.shuffle();
    assert_eq!(deck.remaining(), DECK_SIZE);
}
