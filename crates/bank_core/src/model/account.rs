//! Account domain entity.
//!
//! # Responsibility
//! - Define the stored shape of a bank account row.
//!
//! # Invariants
//! - `id` is assigned by the store on insert and never changes afterwards.
//! - `client_id` must reference an existing client row.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Category of a bank account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountType {
    SavingsAccount,
    CurrentAccount,
}

/// Stored shape of an account row.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Server-assigned row id; 0 until the row is inserted.
    pub id: i64,
    pub name: String,
    pub balance: Decimal,
    /// Logical field name is `type`; `kind` only because `type` is reserved.
    pub kind: AccountType,
    pub is_active: bool,
    /// Owning client row id.
    pub client_id: i64,
}

impl Account {
    /// Logical field names of this shape, consumed by mapper build checks.
    pub const FIELD_NAMES: &'static [&'static str] =
        &["id", "name", "balance", "type", "is_active", "client_id"];
}
