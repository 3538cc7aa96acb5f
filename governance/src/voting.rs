//! Quorum arithmetic

use serde::{Deserialize, Serialize};

/// Accumulated voting weight measured against total outstanding shares.
///
/// Percentages use integer floor division, so a tally one weight-unit
/// short of the threshold fails while an exact-boundary tally passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub votes: u64,
    pub total_shares: u64,
}

impl Tally {
    pub fn new(votes: u64, total_shares: u64) -> Self {
        Self {
            votes,
            total_shares,
        }
    }

    /// Voted weight as an integer percent of total shares, floored.
    /// Zero when there are no outstanding shares; callers that need a
    /// defined quorum must guard that case before asking.
    pub fn percent(&self) -> u64 {
        if self.total_shares == 0 {
            return 0;
        }
        // Widened so votes near u64::MAX cannot overflow the multiply
        ((self.votes as u128 * 100) / self.total_shares as u128) as u64
    }

    /// Whether this tally clears `quorum_percent`. Boundary inclusive.
    pub fn meets(&self, quorum_percent: u64) -> bool {
        self.percent() >= quorum_percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_floors() {
        // 999/2000 = 49.95% -> 49
        assert_eq!(Tally::new(999, 2000).percent(), 49);
        assert_eq!(Tally::new(1000, 2000).percent(), 50);
        assert_eq!(Tally::new(2000, 2000).percent(), 100);
    }

    #[test]
    fn test_quorum_boundary_is_inclusive() {
        // Exactly 70% passes, one weight-unit less fails
        assert!(Tally::new(1400, 2000).meets(70));
        assert!(!Tally::new(1399, 2000).meets(70));
    }

    #[test]
    fn test_large_tallies_do_not_overflow() {
        let tally = Tally::new(u64::MAX, u64::MAX);
        assert_eq!(tally.percent(), 100);
        assert!(tally.meets(100));
    }

    #[test]
    fn test_zero_total_reports_zero() {
        assert_eq!(Tally::new(0, 0).percent(), 0);
        assert_eq!(Tally::new(500, 0).percent(), 0);
    }
}
