//! Fungible value primitive
//!
//! The ledger never inspects value beyond the operations here. `Value` is
//! deliberately neither `Copy` nor `Clone`: amounts move between holders
//! through `merge` and `split`, they are never duplicated. Issuance
//! (`Value::new`) is the host's boundary; the ledger itself only conserves
//! what it is handed.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TreasuryError};

/// An opaque fungible amount.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Value {
    amount: u64,
}

impl Value {
    /// Issue a new value unit. Host-side boundary only.
    pub fn new(amount: u64) -> Self {
        Self { amount }
    }

    /// A zero-amount value.
    pub fn zero() -> Self {
        Self { amount: 0 }
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Absorb `other` into this value.
    pub fn merge(&mut self, other: Value) {
        self.amount += other.amount;
    }

    /// Extract `amount` from this value, leaving the remainder in place.
    pub fn split(&mut self, amount: u64) -> Result<Value> {
        if amount > self.amount {
            return Err(TreasuryError::InsufficientFunds {
                requested: amount,
                available: self.amount,
            });
        }
        self.amount -= amount;
        Ok(Value { amount })
    }
}
