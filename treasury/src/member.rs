//! Membership ledger
//!
//! One `MemberAccount` per joined participant, bound to exactly one
//! treasury. Shares are the member's proportional claim and voting weight,
//! minted 1:1 with deposited value. An account is never destroyed; it may
//! sit at zero shares.

use serde::{Deserialize, Serialize};

use crate::asset::Value;
use crate::error::{Result, TreasuryError};
use crate::pool::{Treasury, TreasuryId};

/// Opaque member/recipient identity. Equality and hashing only; the
/// ledger never interprets the contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    pub fn new(addr: impl Into<String>) -> Self {
        Self(addr.into())
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for Address {
    fn from(addr: &str) -> Self {
        Self(addr.to_string())
    }
}

/// A member's share position in one treasury.
#[derive(Debug, Serialize, Deserialize)]
pub struct MemberAccount {
    treasury_id: TreasuryId,
    shares: u64,
}

impl MemberAccount {
    /// Join a treasury: deposit the contribution and open an account
    /// holding the issued shares. No eligibility precondition.
    pub fn join(treasury: &mut Treasury, contribution: Value) -> Self {
        let shares = treasury.deposit(contribution);
        treasury.record_join();
        Self {
            treasury_id: treasury.id(),
            shares,
        }
    }

    pub fn treasury_id(&self) -> TreasuryId {
        self.treasury_id
    }

    pub fn shares(&self) -> u64 {
        self.shares
    }

    /// Current shares, used verbatim as voting weight. No normalization:
    /// larger positions dominate quorum arithmetic proportionally.
    pub fn voting_weight(&self) -> u64 {
        self.shares
    }

    /// Whether this account may create proposals against `treasury`.
    /// Always true when no minimum-share gate is configured.
    pub fn can_propose(&self, treasury: &Treasury) -> bool {
        match treasury.min_shares_for_proposal() {
            Some(min) => self.shares >= min,
            None => true,
        }
    }

    /// Deposit a further contribution, growing this account's shares.
    pub fn top_up(&mut self, treasury: &mut Treasury, contribution: Value) -> Result<u64> {
        self.ensure_bound(treasury)?;
        let issued = treasury.deposit(contribution);
        self.shares += issued;
        Ok(issued)
    }

    /// Redeem `amount` of this account's shares for pooled value.
    ///
    /// Share decrement and redemption happen together or not at all: a
    /// ledger-side failure (funds locked by open proposals) leaves the
    /// account untouched.
    pub fn reduce_shares(&mut self, treasury: &mut Treasury, amount: u64) -> Result<Value> {
        self.ensure_bound(treasury)?;
        if amount > self.shares {
            return Err(TreasuryError::InsufficientShares {
                requested: amount,
                held: self.shares,
            });
        }
        let extracted = treasury.redeem(amount)?;
        self.shares -= amount;
        Ok(extracted)
    }

    fn ensure_bound(&self, treasury: &Treasury) -> Result<()> {
        if self.treasury_id != treasury.id() {
            return Err(TreasuryError::WrongTreasury);
        }
        Ok(())
    }
}
