use draw_poker::cards::{full_deck, Card, Rank, Suit};
use draw_poker::evaluator::{evaluate, evaluate_five, Category, Evaluation};
use proptest::prelude::*;
use std::cmp::Ordering;

fn rank_from_val(v: u8) -> Rank {
    Rank::from_value(v).unwrap_or(Rank::Ace)
}

/// Five distinct cards in arbitrary order.
fn any_hand() -> impl Strategy<Value = Vec<Card>> {
    prop::sample::subsequence(full_deck(), 5).prop_shuffle()
}

fn eval(cards: &[Card]) -> Evaluation {
    evaluate(cards).unwrap()
}

fn straight_cards(top: u8) -> [Card; 5] {
    let ranks = if top == 5 {
        [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]
    } else {
        [
            rank_from_val(top - 4),
            rank_from_val(top - 3),
            rank_from_val(top - 2),
            rank_from_val(top - 1),
            rank_from_val(top),
        ]
    };
    let suits = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs];
    [
        Card::new(ranks[0], suits[0]),
        Card::new(ranks[1], suits[1]),
        Card::new(ranks[2], suits[2]),
        Card::new(ranks[3], suits[3]),
        Card::new(ranks[4], suits[4]),
    ]
}

fn ranks_desc(ranks: &[Rank]) -> Vec<Rank> {
    let mut out = ranks.to_vec();
    out.sort_by(|a, b| b.cmp(a));
    out
}

fn compare_rank_lists(a: &[Rank], b: &[Rank]) -> Ordering {
    for i in 0..a.len().min(b.len()) {
        let ord = a[i].cmp(&b[i]);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

fn flush_rank_set() -> impl Strategy<Value = Vec<Rank>> {
    prop::collection::btree_set(2u8..=14u8, 5)
        .prop_filter("non-straight ranks", |set| {
            let mut vals: Vec<u8> = set.iter().copied().collect();
            vals.sort_unstable();
            let is_wheel = vals == vec![2, 3, 4, 5, 14];
            let is_straight = vals.windows(2).all(|w| w[1] == w[0] + 1);
            !(is_straight || is_wheel)
        })
        .prop_map(|set| set.into_iter().map(rank_from_val).collect())
}

proptest! {
    #[test]
    fn evaluation_ignores_card_order(hand in any_hand(), rotate in 0usize..5) {
        let mut other = hand.clone();
        other.rotate_left(rotate);
        other.reverse();
        let a = eval(&hand);
        let b = eval(&other);
        prop_assert_eq!(a.category, b.category);
        prop_assert_eq!(a.value(), b.value());
        prop_assert_eq!(a.cards, b.cards);
    }

    #[test]
    fn distinct_cards_always_classify(hand in any_hand()) {
        let e = evaluate(&hand);
        prop_assert!(e.is_ok());
        let strength = e.unwrap().strength();
        prop_assert!((1..=10).contains(&strength));
    }

    #[test]
    fn royal_flush_means_suited_ten_to_ace(hand in any_hand()) {
        let e = eval(&hand);
        if e.category == Category::RoyalFlush {
            let suit = hand[0].suit();
            prop_assert!(hand.iter().all(|c| c.suit() == suit));
            let mut vals: Vec<u8> = hand.iter().map(|c| c.rank().value()).collect();
            vals.sort_unstable();
            prop_assert_eq!(vals, vec![10, 11, 12, 13, 14]);
        }
    }

    #[test]
    fn five_card_ordering_is_antisymmetric_and_transitive(a in any_hand(), b in any_hand(), c in any_hand()) {
        let ea = eval(&a);
        let eb = eval(&b);
        let ec = eval(&c);

        if ea >= eb && eb >= ea { prop_assert_eq!(ea, eb); }
        if ea >= eb && eb >= ec { prop_assert!(ea >= ec); }
    }

    #[test]
    fn higher_category_always_wins(a in any_hand(), b in any_hand()) {
        let ea = eval(&a);
        let eb = eval(&b);
        if ea.category > eb.category {
            prop_assert!(ea > eb);
        }
    }

    #[test]
    fn straight_ordering_respects_top_card(top_hi in 6u8..=14u8, top_lo in 5u8..=13u8) {
        prop_assume!(top_hi > top_lo);
        let e_hi = evaluate_five(&straight_cards(top_hi)).unwrap();
        let e_lo = evaluate_five(&straight_cards(top_lo)).unwrap();
        prop_assert_eq!(e_hi.category, Category::Straight);
        prop_assert_eq!(e_lo.category, Category::Straight);
        prop_assert!(e_hi > e_lo);
    }

    #[test]
    fn wheel_is_lowest_straight(top in 6u8..=14u8) {
        let e_wheel = evaluate_five(&straight_cards(5)).unwrap();
        let e_high = evaluate_five(&straight_cards(top)).unwrap();
        prop_assert_eq!(e_wheel.category, Category::Straight);
        prop_assert!(e_high > e_wheel);
    }

    #[test]
    fn flush_kicker_ordering(a in flush_rank_set(), b in flush_rank_set()) {
        let suit = Suit::Hearts;
        let hand_a: Vec<Card> = a.iter().map(|&r| Card::new(r, suit)).collect();
        let hand_b: Vec<Card> = b.iter().map(|&r| Card::new(r, suit)).collect();
        let e_a = eval(&hand_a);
        let e_b = eval(&hand_b);
        prop_assert_eq!(e_a.category, Category::Flush);
        prop_assert_eq!(e_b.category, Category::Flush);

        match compare_rank_lists(&ranks_desc(&a), &ranks_desc(&b)) {
            Ordering::Greater => prop_assert!(e_a > e_b),
            Ordering::Less => prop_assert!(e_a < e_b),
            Ordering::Equal => prop_assert_eq!(e_a, e_b),
        }
    }
}
