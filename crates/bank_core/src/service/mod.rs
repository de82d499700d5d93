//! SQLite-backed service implementations of the repository contracts.
//!
//! # Responsibility
//! - Realize account/client CRUD on one store connection plus the shared
//!   immutable mapper.
//! - Keep SQL and row parsing inside the persistence boundary.
//!
//! # Invariants
//! - Each operation is a single unit of work against one exclusively owned
//!   connection; autocommit is the commit point.
//! - Returned DTOs always reflect persisted state, never the caller's input.

pub mod accounts_service;
pub mod clients_service;

pub use accounts_service::AccountsService;
pub use clients_service::ClientsService;
