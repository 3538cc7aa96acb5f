//! Treasury error types

use thiserror::Error;

/// Treasury ledger errors
///
/// All variants are precondition failures: the attempted operation aborts
/// and no entity is modified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreasuryError {
    #[error("account or proposal is bound to a different treasury")]
    WrongTreasury,

    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: u64, available: u64 },

    #[error("insufficient shares: requested {requested}, held {held}")]
    InsufficientShares { requested: u64, held: u64 },
}

pub type Result<T> = std::result::Result<T, TreasuryError>;
