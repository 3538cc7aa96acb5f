//! Quorum-gated spending proposals
//!
//! The proposal engine for the shares-based treasury: members raise
//! time-boxed spending proposals that earmark treasury funds, vote with
//! their share weight, and resolve the proposal once the window closes.
//! A proposal passes when its accumulated weight reaches the treasury's
//! quorum as an integer percent of total outstanding shares.
//!
//! State machine per proposal: Open -> ClosedPending -> Passed/Rejected.
//! Resolution is terminal; re-execution is rejected, never re-paid.

pub mod error;
pub mod proposal;
pub mod registry;
pub mod voting;

pub use error::{GovernanceError, Result};
pub use proposal::{Proposal, ProposalId, ProposalState};
pub use registry::ProposalRegistry;
pub use voting::Tally;
