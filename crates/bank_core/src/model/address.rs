//! Address reference entity.
//!
//! Addresses are opaque to the service layer: only their ids are consumed by
//! clients, and no repository exposes them. The shape exists so the seeded
//! fixture can satisfy the `Clients.address_id` foreign key.

/// Stored shape of an address row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub id: i64,
    /// Single-line postal address.
    pub line: String,
}
