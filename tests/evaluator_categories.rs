use draw_poker::cards::{Card, Rank, Suit};
use draw_poker::evaluator::{evaluate, evaluate_five, Category, EvalError};
use draw_poker::hand::HandError;

fn category(xs: [Card; 5]) -> Category {
    evaluate_five(&xs).unwrap().category
}

#[test]
fn category_royal_flush() {
    let xs = [
        Card::new(Rank::Ten, Suit::Spades),
        Card::new(Rank::Jack, Suit::Spades),
        Card::new(Rank::Queen, Suit::Spades),
        Card::new(Rank::King, Suit::Spades),
        Card::new(Rank::Ace, Suit::Spades),
    ];
    assert_eq!(category(xs), Category::RoyalFlush);
    assert_eq!(Category::RoyalFlush.strength(), 10);
}

#[test]
fn suited_wheel_is_straight_flush_not_royal() {
    let xs = [
        Card::new(Rank::Ace, Suit::Spades),
        Card::new(Rank::Two, Suit::Spades),
        Card::new(Rank::Three, Suit::Spades),
        Card::new(Rank::Four, Suit::Spades),
        Card::new(Rank::Five, Suit::Spades),
    ];
    assert_eq!(category(xs), Category::StraightFlush);
}

#[test]
fn unsuited_wheel_is_straight() {
    let xs = [
        Card::new(Rank::Ace, Suit::Clubs),
        Card::new(Rank::Two, Suit::Diamonds),
        Card::new(Rank::Three, Suit::Hearts),
        Card::new(Rank::Four, Suit::Spades),
        Card::new(Rank::Five, Suit::Clubs),
    ];
    assert_eq!(category(xs), Category::Straight);
}

#[test]
fn category_four_of_a_kind() {
    let xs = [
        Card::new(Rank::Three, Suit::Clubs),
        Card::new(Rank::Three, Suit::Diamonds),
        Card::new(Rank::Three, Suit::Hearts),
        Card::new(Rank::Three, Suit::Spades),
        Card::new(Rank::Nine, Suit::Clubs),
    ];
    assert_eq!(category(xs), Category::FourOfAKind);
}

#[test]
fn category_full_house() {
    let xs = [
        Card::new(Rank::Three, Suit::Clubs),
        Card::new(Rank::Three, Suit::Diamonds),
        Card::new(Rank::Three, Suit::Hearts),
        Card::new(Rank::Jack, Suit::Spades),
        Card::new(Rank::Jack, Suit::Clubs),
    ];
    assert_eq!(category(xs), Category::FullHouse);
}

#[test]
fn category_flush() {
    let xs = [
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::Jack, Suit::Hearts),
        Card::new(Rank::Eight, Suit::Hearts),
        Card::new(Rank::Four, Suit::Hearts),
        Card::new(Rank::Two, Suit::Hearts),
    ];
    assert_eq!(category(xs), Category::Flush);
}

#[test]
fn category_straight() {
    let xs = [
        Card::new(Rank::Nine, Suit::Clubs),
        Card::new(Rank::Eight, Suit::Diamonds),
        Card::new(Rank::Seven, Suit::Hearts),
        Card::new(Rank::Six, Suit::Spades),
        Card::new(Rank::Five, Suit::Clubs),
    ];
    assert_eq!(category(xs), Category::Straight);
}

#[test]
fn category_three_of_a_kind() {
    let xs = [
        Card::new(Rank::Seven, Suit::Clubs),
        Card::new(Rank::Seven, Suit::Diamonds),
        Card::new(Rank::Seven, Suit::Hearts),
        Card::new(Rank::Two, Suit::Spades),
        Card::new(Rank::Nine, Suit::Clubs),
    ];
    assert_eq!(category(xs), Category::ThreeOfAKind);
}

#[test]
fn category_two_pair() {
    let xs = [
        Card::new(Rank::Two, Suit::Clubs),
        Card::new(Rank::Two, Suit::Diamonds),
        Card::new(Rank::Five, Suit::Hearts),
        Card::new(Rank::Five, Suit::Spades),
        Card::new(Rank::Nine, Suit::Clubs),
    ];
    assert_eq!(category(xs), Category::TwoPair);
}

#[test]
fn category_pair() {
    let xs = [
        Card::new(Rank::Queen, Suit::Clubs),
        Card::new(Rank::Queen, Suit::Diamonds),
        Card::new(Rank::Nine, Suit::Hearts),
        Card::new(Rank::Five, Suit::Spades),
        Card::new(Rank::Two, Suit::Clubs),
    ];
    assert_eq!(category(xs), Category::Pair);
}

#[test]
fn category_high_card() {
    let xs = [
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::King, Suit::Diamonds),
        Card::new(Rank::Seven, Suit::Spades),
        Card::new(Rank::Five, Suit::Clubs),
        Card::new(Rank::Two, Suit::Diamonds),
    ];
    assert_eq!(category(xs), Category::HighCard);
}

#[test]
fn four_cards_are_an_invalid_hand() {
    let xs = [
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::King, Suit::Diamonds),
        Card::new(Rank::Seven, Suit::Spades),
        Card::new(Rank::Five, Suit::Clubs),
    ];
    assert_eq!(evaluate(&xs), Err(EvalError::InvalidHand(HandError::CardCount(4))));
}

#[test]
fn duplicate_card_is_an_invalid_hand() {
    let ace = Card::new(Rank::Ace, Suit::Hearts);
    let xs = [
        ace,
        Card::new(Rank::King, Suit::Diamonds),
        ace,
        Card::new(Rank::Five, Suit::Clubs),
        Card::new(Rank::Two, Suit::Diamonds),
    ];
    assert_eq!(evaluate_five(&xs), Err(EvalError::InvalidHand(HandError::DuplicateCard(ace))));
}
