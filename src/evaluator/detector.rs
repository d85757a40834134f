use super::hand_analysis::HandAnalysis;
use crate::cards::Rank;
use crate::evaluator::{Category, Evaluation};

/// Each detector recognises one category and builds its evaluation.
/// Detectors are tried strongest first; the first match wins.
pub trait CategoryDetector {
    fn classify(&self, analysis: &HandAnalysis) -> Option<Evaluation>;
}

const NO_KICK: Rank = Rank::Two;

// ============================================================================
// Detector Implementations (strongest first)
// ============================================================================

/// Royal Flush: Ten through Ace, all one suit.
pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn classify(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        if !analysis.suit_info.is_flush {
            return None;
        }
        // the wheel reports Five as its top, so it never lands here
        let top = analysis.straight_info.top_rank.filter(|r| *r == Rank::Ace)?;
        Some(analysis.build_evaluation(Category::RoyalFlush, [top, NO_KICK, NO_KICK, NO_KICK, NO_KICK]))
    }
}

/// Straight Flush: five consecutive ranks, all one suit.
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn classify(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        if !analysis.suit_info.is_flush {
            return None;
        }
        let top = analysis.straight_info.top_rank?;
        Some(analysis.build_evaluation(
            Category::StraightFlush,
            [top, NO_KICK, NO_KICK, NO_KICK, NO_KICK],
        ))
    }
}

pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn classify(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        let quad = analysis.rank_groups.quad()?;
        let kicker = analysis.rank_groups.kickers().first().copied().unwrap_or(NO_KICK);
        Some(analysis.build_evaluation(
            Category::FourOfAKind,
            [quad, kicker, NO_KICK, NO_KICK, NO_KICK],
        ))
    }
}

/// Full House: one rank three times, another twice.
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn classify(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        let trips = analysis.rank_groups.trips()?;
        let pair = analysis.rank_groups.pairs().first().copied()?;
        Some(analysis.build_evaluation(Category::FullHouse, [trips, pair, NO_KICK, NO_KICK, NO_KICK]))
    }
}

pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn classify(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        analysis
            .suit_info
            .is_flush
            .then(|| analysis.build_evaluation(Category::Flush, analysis.ranks))
    }
}

/// Straight: five consecutive ranks, or the wheel (A-2-3-4-5).
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn classify(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        let top = analysis.straight_info.top_rank?;
        Some(analysis.build_evaluation(Category::Straight, [top, NO_KICK, NO_KICK, NO_KICK, NO_KICK]))
    }
}

pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn classify(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        let trips = analysis.rank_groups.trips()?;
        let kickers = analysis.rank_groups.kickers();
        let &[k0, k1] = kickers.as_slice() else {
            return None;
        };
        Some(analysis.build_evaluation(Category::ThreeOfAKind, [trips, k0, k1, NO_KICK, NO_KICK]))
    }
}

/// Two Pair: exactly two ranks appear twice.
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn classify(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        let pairs = analysis.rank_groups.pairs();
        let &[hi, lo] = pairs.as_slice() else {
            return None;
        };
        let kicker = analysis.rank_groups.kickers().first().copied().unwrap_or(NO_KICK);
        Some(analysis.build_evaluation(Category::TwoPair, [hi, lo, kicker, NO_KICK, NO_KICK]))
    }
}

pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn classify(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        let pairs = analysis.rank_groups.pairs();
        let &[pair] = pairs.as_slice() else {
            return None;
        };
        let kickers = analysis.rank_groups.kickers();
        let &[k0, k1, k2] = kickers.as_slice() else {
            return None;
        };
        Some(analysis.build_evaluation(Category::Pair, [pair, k0, k1, k2, NO_KICK]))
    }
}

/// High Card: the fallback, matches anything.
pub struct HighCardDetector;

impl HighCardDetector {
    pub fn evaluation(analysis: &HandAnalysis) -> Evaluation {
        analysis.build_evaluation(Category::HighCard, analysis.ranks)
    }
}

impl CategoryDetector for HighCardDetector {
    fn classify(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        Some(Self::evaluation(analysis))
    }
}

// ============================================================================
// Static detector list (strongest first)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];
