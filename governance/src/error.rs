//! Governance error types

use thiserror::Error;
use treasury::{Address, TreasuryError};

use crate::proposal::ProposalId;

/// Proposal engine errors
///
/// Every variant is a non-retryable precondition failure; a failed
/// operation leaves the treasury, the account, and the proposal unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GovernanceError {
    #[error(transparent)]
    Treasury(#[from] TreasuryError),

    #[error("{0} has already voted on this proposal")]
    AlreadyVoted(Address),

    #[error("voting ended at {ends_at}, now {now}")]
    VotingEnded { now: u64, ends_at: u64 },

    #[error("voting open until {ends_at}, now {now}")]
    VotingNotEnded { now: u64, ends_at: u64 },

    #[error("no outstanding shares to measure quorum against")]
    NoOutstandingShares,

    #[error("proposal {0} is already resolved")]
    AlreadyResolved(ProposalId),

    #[error("proposal not found: {0}")]
    ProposalNotFound(ProposalId),
}

pub type Result<T> = std::result::Result<T, GovernanceError>;
