//! Stored entity shapes for the banking domain.
//!
//! # Responsibility
//! - Define the canonical row shapes persisted in the relational store.
//!
//! # Invariants
//! - Every entity is identified by a server-assigned integer id.
//! - Relational integrity (Account -> Client, Client -> Address) is enforced
//!   by the store, not by these types.

pub mod account;
pub mod address;
pub mod client;

pub use account::{Account, AccountType};
pub use address::Address;
pub use client::{Client, ClientType};
