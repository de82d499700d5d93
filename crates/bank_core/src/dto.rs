//! Wire-facing DTO shapes.
//!
//! # Responsibility
//! - Define the JSON records exchanged at the HTTP boundary.
//!
//! # Invariants
//! - Wire field names are PascalCase, matching the published API contract.
//! - `ClientDto` exposes the entity's email under the wire name `Mail`.
//! - `Id` defaults on deserialization so create payloads may omit it; the
//!   service overwrites it anyway.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::{AccountType, ClientType};

/// Wire shape of an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccountDto {
    /// Server-assigned; ignored on create payloads.
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub balance: Decimal,
    #[serde(rename = "Type")]
    pub kind: AccountType,
    pub is_active: bool,
    pub client_id: i64,
}

impl AccountDto {
    /// Logical field names of this shape, consumed by mapper build checks.
    pub const FIELD_NAMES: &'static [&'static str] =
        &["id", "name", "balance", "type", "is_active", "client_id"];
}

/// Wire shape of a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClientDto {
    /// Server-assigned; ignored on create payloads.
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub phone_number: String,
    /// Wire name for the entity's `email` field.
    pub mail: String,
    #[serde(rename = "Type")]
    pub kind: ClientType,
    pub address_id: i64,
}

impl ClientDto {
    /// Logical field names of this shape, consumed by mapper build checks.
    pub const FIELD_NAMES: &'static [&'static str] =
        &["id", "name", "phone_number", "mail", "type", "address_id"];
}
