//! Shares-based treasury ledger
//!
//! Members deposit fungible value into a shared pool and receive shares
//! minted 1:1 with the deposit. Shares are both redemption claim and
//! voting weight for the governance layer. The ledger tracks pooled
//! custody split into available and locked (proposal-earmarked) portions
//! and enforces `available + locked == custody` after every operation.
//!
//! Persistence, signing, and time are the host's responsibility: every
//! operation takes the aggregates explicitly and timestamps are supplied
//! by the caller.

pub mod asset;
pub mod error;
pub mod member;
pub mod pool;

pub use asset::Value;
pub use error::{Result, TreasuryError};
pub use member::{Address, MemberAccount};
pub use pool::{
    Treasury, TreasuryConfig, TreasuryId, TreasuryStatus, DEFAULT_QUORUM_PERCENT,
    DEFAULT_VOTING_WINDOW_MS,
};
