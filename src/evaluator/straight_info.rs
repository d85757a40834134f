use crate::cards::Rank;

/// Whether five ranks form a straight, and its top rank.
/// The wheel (A-2-3-4-5) counts the ace low, so its top rank is Five.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    const NONE: StraightInfo = StraightInfo { is_straight: false, top_rank: None };
    const WHEEL: [u8; 5] = [2, 3, 4, 5, 14];

    pub fn detect(ranks: &[Rank; 5]) -> Self {
        let mut values = ranks.map(Rank::value);
        values.sort_unstable();
        if values.windows(2).any(|w| w[0] == w[1]) {
            return Self::NONE;
        }
        if values == Self::WHEEL {
            return StraightInfo { is_straight: true, top_rank: Some(Rank::Five) };
        }
        if values[4] - values[0] == 4 {
            return StraightInfo { is_straight: true, top_rank: Rank::from_value(values[4]) };
        }
        Self::NONE
    }
}
