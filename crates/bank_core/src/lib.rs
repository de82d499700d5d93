//! Core domain service layer for the bank data-access application.
//! This crate is the single source of truth for CRUD and mapping invariants.

pub mod db;
pub mod dto;
pub mod logging;
pub mod mapper;
pub mod model;
pub mod repo;
pub mod service;

pub use dto::{AccountDto, ClientDto};
pub use logging::{default_log_level, init_logging, logging_status};
pub use mapper::{Mapper, MapperError};
pub use model::{Account, AccountType, Address, Client, ClientType};
pub use repo::{AccountsRepository, ClientsRepository, RepoError, RepoResult};
pub use service::{AccountsService, ClientsService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
