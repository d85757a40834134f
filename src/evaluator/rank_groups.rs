use crate::cards::Rank;

/// Ranks grouped by how often they appear, sorted by (count desc, rank desc).
///
/// Example: 7-7-7-9-2 groups as [(Seven, 3), (Nine, 1), (Two, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// `rank_counts` is indexed by rank value (2..=14).
    pub fn from_counts(rank_counts: &[u8; 15]) -> Self {
        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .map(|&r| (r, rank_counts[r.value() as usize]))
            .filter(|&(_, n)| n > 0)
            .collect();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
        Self { groups }
    }

    fn with_count(&self, n: u8) -> impl Iterator<Item = Rank> + '_ {
        self.groups.iter().filter(move |(_, c)| *c == n).map(|(r, _)| *r)
    }

    pub fn quad(&self) -> Option<Rank> {
        self.with_count(4).next()
    }

    pub fn trips(&self) -> Option<Rank> {
        self.with_count(3).next()
    }

    /// Pair ranks, highest first.
    pub fn pairs(&self) -> Vec<Rank> {
        self.with_count(2).collect()
    }

    /// Unmatched ranks, highest first.
    pub fn kickers(&self) -> Vec<Rank> {
        self.with_count(1).collect()
    }
}
