//! Client domain entity.
//!
//! # Invariants
//! - `address_id` must reference an existing address row.
//! - `email` is the stored name for the field that travels as `Mail` on the
//!   wire; the rename is owned by the mapping layer, never by serde here.

use serde::{Deserialize, Serialize};

/// Legal category of a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientType {
    Individual,
    Business,
}

/// Stored shape of a client row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    /// Server-assigned row id; 0 until the row is inserted.
    pub id: i64,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    /// Logical field name is `type`; `kind` only because `type` is reserved.
    pub kind: ClientType,
    /// Referenced address row id.
    pub address_id: i64,
}

impl Client {
    /// Logical field names of this shape, consumed by mapper build checks.
    pub const FIELD_NAMES: &'static [&'static str] =
        &["id", "name", "phone_number", "email", "type", "address_id"];
}
