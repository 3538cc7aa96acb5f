//! Proposal book
//!
//! Id-indexed store of every proposal raised against one treasury, so a
//! host can route votes and executions by id instead of holding proposal
//! records itself. Resolved proposals stay in the book.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use treasury::{Address, MemberAccount, Treasury, TreasuryError, TreasuryId, Value};

use crate::error::{GovernanceError, Result};
use crate::proposal::{Proposal, ProposalId};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ProposalRegistry {
    treasury_id: Option<TreasuryId>,
    proposals: HashMap<ProposalId, Proposal>,
}

impl ProposalRegistry {
    /// An empty book. Binds to the first treasury it opens a proposal
    /// against.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a proposal and record it, returning its id.
    pub fn open(
        &mut self,
        treasury: &mut Treasury,
        account: &MemberAccount,
        amount: u64,
        recipient: Address,
        now: u64,
    ) -> Result<ProposalId> {
        match self.treasury_id {
            Some(id) if id != treasury.id() => {
                return Err(TreasuryError::WrongTreasury.into())
            }
            Some(_) => {}
            None => self.treasury_id = Some(treasury.id()),
        }
        let proposal = Proposal::create(treasury, account, amount, recipient, now)?;
        let id = proposal.id();
        self.proposals.insert(id, proposal);
        Ok(id)
    }

    /// Cast a vote on the proposal with the given id.
    pub fn vote(
        &mut self,
        id: ProposalId,
        treasury: &Treasury,
        account: &MemberAccount,
        voter: Address,
        now: u64,
    ) -> Result<u64> {
        let proposal = self
            .proposals
            .get_mut(&id)
            .ok_or(GovernanceError::ProposalNotFound(id))?;
        proposal.vote(treasury, account, voter, now)
    }

    /// Resolve the proposal with the given id.
    pub fn execute(&mut self, id: ProposalId, treasury: &mut Treasury, now: u64) -> Result<Value> {
        let proposal = self
            .proposals
            .get_mut(&id)
            .ok_or(GovernanceError::ProposalNotFound(id))?;
        proposal.execute(treasury, now)
    }

    pub fn get(&self, id: ProposalId) -> Option<&Proposal> {
        self.proposals.get(&id)
    }

    /// Proposals still accepting votes as of `now`.
    pub fn open_proposals(&self, now: u64) -> Vec<&Proposal> {
        self.proposals
            .values()
            .filter(|p| !p.is_resolved() && now < p.ends_at())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.proposals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proposals.is_empty()
    }
}
