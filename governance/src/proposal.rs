//! Spending proposals
//!
//! A proposal is a time-boxed request to pay `amount` to `recipient` out
//! of the treasury pool. Creating it earmarks the amount out of the
//! available funds; resolution either releases the earmark as a payout
//! (quorum reached) or returns it to the available pool. A proposal is
//! never destroyed: once resolved it is terminal and a second execution
//! attempt is rejected rather than re-paid.

use std::collections::HashSet;

use log::info;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use treasury::{Address, MemberAccount, Treasury, TreasuryError, TreasuryId, Value};

use crate::error::{GovernanceError, Result};
use crate::voting::Tally;

/// Identity of a proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProposalId(Uuid);

impl ProposalId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for ProposalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Observable phase of a proposal's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalState {
    /// Accepting votes.
    Open,
    /// Voting window elapsed, not yet resolved.
    ClosedPending,
    /// Resolved with quorum reached; funds paid out.
    Passed,
    /// Resolved short of quorum; funds returned to the pool.
    Rejected,
}

/// A time-boxed spending request against one treasury.
#[derive(Debug, Serialize, Deserialize)]
pub struct Proposal {
    id: ProposalId,
    treasury_id: TreasuryId,
    amount: u64,
    recipient: Address,
    /// Accumulated voting weight: the sum of each voter's shares at the
    /// moment they voted. Weight is not revoked if shares later shrink.
    votes: u64,
    voters: HashSet<Address>,
    opens_at: u64,
    ends_at: u64,
    resolved: bool,
    passed: bool,
}

impl Proposal {
    /// Open a proposal, earmarking `amount` out of the available funds.
    ///
    /// The proposing account must be bound to `treasury` and, when the
    /// treasury carries a minimum-share gate, hold at least that many
    /// shares. The voting window runs from `now` for the treasury's
    /// configured duration.
    pub fn create(
        treasury: &mut Treasury,
        account: &MemberAccount,
        amount: u64,
        recipient: Address,
        now: u64,
    ) -> Result<Proposal> {
        if account.treasury_id() != treasury.id() {
            return Err(TreasuryError::WrongTreasury.into());
        }
        if let Some(min) = treasury.min_shares_for_proposal() {
            if account.shares() < min {
                return Err(TreasuryError::InsufficientShares {
                    requested: min,
                    held: account.shares(),
                }
                .into());
            }
        }
        treasury.lock(amount)?;

        let proposal = Proposal {
            id: ProposalId::generate(),
            treasury_id: treasury.id(),
            amount,
            recipient,
            votes: 0,
            voters: HashSet::new(),
            opens_at: now,
            ends_at: now + treasury.voting_window_ms(),
            resolved: false,
            passed: false,
        };
        info!(
            "proposal {} opened: {} to {}, voting until {}",
            proposal.id, proposal.amount, proposal.recipient, proposal.ends_at
        );
        Ok(proposal)
    }

    pub fn id(&self) -> ProposalId {
        self.id
    }

    pub fn treasury_id(&self) -> TreasuryId {
        self.treasury_id
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn recipient(&self) -> &Address {
        &self.recipient
    }

    pub fn votes(&self) -> u64 {
        self.votes
    }

    pub fn voter_count(&self) -> usize {
        self.voters.len()
    }

    pub fn has_voted(&self, voter: &Address) -> bool {
        self.voters.contains(voter)
    }

    pub fn opens_at(&self) -> u64 {
        self.opens_at
    }

    pub fn ends_at(&self) -> u64 {
        self.ends_at
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    pub fn is_passed(&self) -> bool {
        self.passed
    }

    /// Lifecycle phase as of `now`.
    pub fn state(&self, now: u64) -> ProposalState {
        if self.resolved {
            if self.passed {
                ProposalState::Passed
            } else {
                ProposalState::Rejected
            }
        } else if now < self.ends_at {
            ProposalState::Open
        } else {
            ProposalState::ClosedPending
        }
    }

    /// Cast `voter`'s weight in favor of this proposal.
    ///
    /// The weight counted is the account's share balance right now;
    /// returns it on success. One vote per identity: a repeat voter is
    /// rejected with `AlreadyVoted` and the tally is unchanged.
    pub fn vote(
        &mut self,
        treasury: &Treasury,
        account: &MemberAccount,
        voter: Address,
        now: u64,
    ) -> Result<u64> {
        if self.treasury_id != treasury.id() || account.treasury_id() != treasury.id() {
            return Err(TreasuryError::WrongTreasury.into());
        }
        if now >= self.ends_at {
            return Err(GovernanceError::VotingEnded {
                now,
                ends_at: self.ends_at,
            });
        }
        if !self.voters.insert(voter.clone()) {
            return Err(GovernanceError::AlreadyVoted(voter));
        }
        let weight = account.voting_weight();
        self.votes += weight;
        Ok(weight)
    }

    /// Resolve the proposal after its voting window has elapsed.
    ///
    /// The tally is measured against the treasury's total outstanding
    /// shares at execution time, floor-divided; an exact-boundary result
    /// passes. On pass the earmarked amount leaves custody and is
    /// returned as the payable for delivery to the recipient; on reject
    /// the earmark goes back to the available pool and the payable is
    /// zero. A resolved proposal rejects further execution attempts.
    pub fn execute(&mut self, treasury: &mut Treasury, now: u64) -> Result<Value> {
        if self.treasury_id != treasury.id() {
            return Err(TreasuryError::WrongTreasury.into());
        }
        if self.resolved {
            return Err(GovernanceError::AlreadyResolved(self.id));
        }
        if now < self.ends_at {
            return Err(GovernanceError::VotingNotEnded {
                now,
                ends_at: self.ends_at,
            });
        }
        if treasury.total_shares() == 0 {
            return Err(GovernanceError::NoOutstandingShares);
        }

        let tally = Tally::new(self.votes, treasury.total_shares());
        if tally.meets(treasury.quorum_percent()) {
            let payable = treasury.pay_out(self.amount)?;
            self.passed = true;
            self.resolved = true;
            info!(
                "proposal {} passed at {}%: paying {} to {}",
                self.id,
                tally.percent(),
                self.amount,
                self.recipient
            );
            Ok(payable)
        } else {
            treasury.unlock(self.amount);
            self.passed = false;
            self.resolved = true;
            info!(
                "proposal {} rejected at {}% (quorum {}%)",
                self.id,
                tally.percent(),
                treasury.quorum_percent()
            );
            Ok(Value::zero())
        }
    }
}
