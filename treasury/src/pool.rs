//! Treasury pool ledger
//!
//! The `Treasury` aggregate holds the pooled custody and maintains the
//! available/locked split. Conservation invariant after every operation:
//! `available + locked == custody`. Fields are mutated only through the
//! ledger operations here; membership and governance layers go through
//! them rather than touching the split directly.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::asset::Value;
use crate::error::{Result, TreasuryError};

/// Default quorum threshold (percent of total outstanding shares).
pub const DEFAULT_QUORUM_PERCENT: u64 = 70;

/// Default voting window in milliseconds.
pub const DEFAULT_VOTING_WINDOW_MS: u64 = 100;

/// Identity of a treasury. Accounts and proposals bind to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TreasuryId(Uuid);

impl TreasuryId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for TreasuryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Governance parameters fixed at treasury creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreasuryConfig {
    /// Percent (0-100) of total outstanding shares a proposal's weighted
    /// votes must reach to pass.
    pub quorum_percent: u64,
    /// How long a proposal accepts votes, from creation.
    pub voting_window_ms: u64,
    /// Minimum share balance required to create a proposal, if any.
    pub min_shares_for_proposal: Option<u64>,
}

impl Default for TreasuryConfig {
    fn default() -> Self {
        Self {
            quorum_percent: DEFAULT_QUORUM_PERCENT,
            voting_window_ms: DEFAULT_VOTING_WINDOW_MS,
            min_shares_for_proposal: None,
        }
    }
}

/// The shared treasury: pooled custody plus its accounting state.
#[derive(Debug, Serialize, Deserialize)]
pub struct Treasury {
    id: TreasuryId,
    /// Pooled custody. Always equals `available + locked`.
    funds: Value,
    /// Portion not earmarked by any open proposal.
    available: u64,
    /// Portion earmarked by open proposals.
    locked: u64,
    /// Sum of all outstanding member shares. Minted 1:1 on deposit,
    /// burned on redemption. Payouts do not burn shares.
    total_shares: u64,
    /// Count of distinct joined accounts.
    member_count: u64,
    quorum_percent: u64,
    voting_window_ms: u64,
    min_shares_for_proposal: Option<u64>,
}

impl Treasury {
    /// Create an empty treasury with the given parameters.
    pub fn new(config: TreasuryConfig) -> Self {
        Self {
            id: TreasuryId::generate(),
            funds: Value::zero(),
            available: 0,
            locked: 0,
            total_shares: 0,
            member_count: 0,
            quorum_percent: config.quorum_percent,
            voting_window_ms: config.voting_window_ms,
            min_shares_for_proposal: config.min_shares_for_proposal,
        }
    }

    /// Create an empty treasury with default parameters.
    pub fn with_defaults() -> Self {
        Self::new(TreasuryConfig::default())
    }

    pub fn id(&self) -> TreasuryId {
        self.id
    }

    /// Total value held in the pool.
    pub fn custody(&self) -> u64 {
        self.funds.amount()
    }

    pub fn available(&self) -> u64 {
        self.available
    }

    pub fn locked(&self) -> u64 {
        self.locked
    }

    pub fn total_shares(&self) -> u64 {
        self.total_shares
    }

    pub fn member_count(&self) -> u64 {
        self.member_count
    }

    pub fn quorum_percent(&self) -> u64 {
        self.quorum_percent
    }

    pub fn voting_window_ms(&self) -> u64 {
        self.voting_window_ms
    }

    pub fn min_shares_for_proposal(&self) -> Option<u64> {
        self.min_shares_for_proposal
    }

    /// Absorb a contribution into the pool and mint shares 1:1.
    ///
    /// Returns the number of shares issued. Membership bookkeeping
    /// (`member_count`) is handled by `MemberAccount::join`, not here.
    pub fn deposit(&mut self, contribution: Value) -> u64 {
        let amount = contribution.amount();
        self.funds.merge(contribution);
        self.available += amount;
        self.total_shares += amount;
        amount
    }

    /// Earmark `amount` of available funds for an open proposal.
    pub fn lock(&mut self, amount: u64) -> Result<()> {
        if amount > self.available {
            return Err(TreasuryError::InsufficientFunds {
                requested: amount,
                available: self.available,
            });
        }
        self.available -= amount;
        self.locked += amount;
        Ok(())
    }

    /// Return an earmark to the available pool.
    ///
    /// The caller guarantees `amount <= locked`; violating that is a
    /// programming-contract breach, not a recoverable condition.
    pub fn unlock(&mut self, amount: u64) {
        assert!(
            amount <= self.locked,
            "unlock of {} exceeds locked funds {}",
            amount,
            self.locked
        );
        self.locked -= amount;
        self.available += amount;
    }

    /// Release an earmark and extract the value from custody.
    ///
    /// Used when a proposal passes: the locked amount leaves the pool
    /// without ever returning to the available side. Shares are not
    /// burned by a payout.
    pub fn pay_out(&mut self, amount: u64) -> Result<Value> {
        if amount > self.locked {
            return Err(TreasuryError::InsufficientFunds {
                requested: amount,
                available: self.locked,
            });
        }
        self.locked -= amount;
        self.funds.split(amount)
    }

    /// Extract `amount` from the available pool, burning shares 1:1.
    pub fn redeem(&mut self, amount: u64) -> Result<Value> {
        if amount > self.available {
            return Err(TreasuryError::InsufficientFunds {
                requested: amount,
                available: self.available,
            });
        }
        self.available -= amount;
        self.total_shares -= amount;
        self.funds.split(amount)
    }

    /// Point-in-time accounting summary for host-side reporting.
    pub fn status(&self) -> TreasuryStatus {
        TreasuryStatus {
            custody: self.custody(),
            available: self.available,
            locked: self.locked,
            total_shares: self.total_shares,
            member_count: self.member_count,
        }
    }

    pub(crate) fn record_join(&mut self) {
        self.member_count += 1;
    }
}

/// Snapshot of a treasury's accounting state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasuryStatus {
    pub custody: u64,
    pub available: u64,
    pub locked: u64,
    pub total_shares: u64,
    pub member_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conserved(t: &Treasury) -> bool {
        t.available() + t.locked() == t.custody()
    }

    #[test]
    fn test_new_treasury_is_empty() {
        let treasury = Treasury::with_defaults();
        assert_eq!(treasury.custody(), 0);
        assert_eq!(treasury.available(), 0);
        assert_eq!(treasury.locked(), 0);
        assert_eq!(treasury.total_shares(), 0);
        assert_eq!(treasury.member_count(), 0);
        assert_eq!(treasury.quorum_percent(), DEFAULT_QUORUM_PERCENT);
        assert_eq!(treasury.voting_window_ms(), DEFAULT_VOTING_WINDOW_MS);
    }

    #[test]
    fn test_deposit_mints_shares_one_to_one() {
        let mut treasury = Treasury::with_defaults();
        let issued = treasury.deposit(Value::new(1000));
        assert_eq!(issued, 1000);
        assert_eq!(treasury.custody(), 1000);
        assert_eq!(treasury.available(), 1000);
        assert_eq!(treasury.total_shares(), 1000);
        assert!(conserved(&treasury));
    }

    #[test]
    fn test_lock_and_unlock() {
        let mut treasury = Treasury::with_defaults();
        treasury.deposit(Value::new(2000));

        treasury.lock(500).unwrap();
        assert_eq!(treasury.available(), 1500);
        assert_eq!(treasury.locked(), 500);
        assert!(conserved(&treasury));

        treasury.unlock(500);
        assert_eq!(treasury.available(), 2000);
        assert_eq!(treasury.locked(), 0);
        assert!(conserved(&treasury));
    }

    #[test]
    fn test_lock_beyond_available_fails() {
        let mut treasury = Treasury::with_defaults();
        treasury.deposit(Value::new(100));

        let err = treasury.lock(101).unwrap_err();
        assert_eq!(
            err,
            TreasuryError::InsufficientFunds {
                requested: 101,
                available: 100
            }
        );
        // No partial mutation
        assert_eq!(treasury.available(), 100);
        assert_eq!(treasury.locked(), 0);
    }

    #[test]
    #[should_panic(expected = "exceeds locked funds")]
    fn test_unlock_beyond_locked_panics() {
        let mut treasury = Treasury::with_defaults();
        treasury.deposit(Value::new(100));
        treasury.lock(50).unwrap();
        treasury.unlock(51);
    }

    #[test]
    fn test_pay_out_releases_earmark_without_crediting_available() {
        let mut treasury = Treasury::with_defaults();
        treasury.deposit(Value::new(2000));
        treasury.lock(500).unwrap();

        let payable = treasury.pay_out(500).unwrap();
        assert_eq!(payable.amount(), 500);
        assert_eq!(treasury.custody(), 1500);
        assert_eq!(treasury.available(), 1500);
        assert_eq!(treasury.locked(), 0);
        // Shares survive a payout
        assert_eq!(treasury.total_shares(), 2000);
        assert!(conserved(&treasury));
    }

    #[test]
    fn test_redeem_burns_shares() {
        let mut treasury = Treasury::with_defaults();
        treasury.deposit(Value::new(1000));

        let extracted = treasury.redeem(400).unwrap();
        assert_eq!(extracted.amount(), 400);
        assert_eq!(treasury.custody(), 600);
        assert_eq!(treasury.available(), 600);
        assert_eq!(treasury.total_shares(), 600);
        assert!(conserved(&treasury));
    }

    #[test]
    fn test_redeem_cannot_touch_locked_funds() {
        let mut treasury = Treasury::with_defaults();
        treasury.deposit(Value::new(1000));
        treasury.lock(800).unwrap();

        let err = treasury.redeem(300).unwrap_err();
        assert_eq!(
            err,
            TreasuryError::InsufficientFunds {
                requested: 300,
                available: 200
            }
        );
        assert_eq!(treasury.custody(), 1000);
        assert!(conserved(&treasury));
    }

    #[test]
    fn test_status_snapshot() {
        let mut treasury = Treasury::with_defaults();
        treasury.deposit(Value::new(1000));
        treasury.lock(250).unwrap();

        let status = treasury.status();
        assert_eq!(status.custody, 1000);
        assert_eq!(status.available, 750);
        assert_eq!(status.locked, 250);
        assert_eq!(status.total_shares, 1000);
    }
}
