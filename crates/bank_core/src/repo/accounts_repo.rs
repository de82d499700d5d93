//! Accounts repository contract.
//!
//! # Responsibility
//! - Declare the CRUD operations an accounts service must support.
//!
//! # Invariants
//! - All operations speak DTO shapes; entity shapes stay behind the
//!   implementation boundary.

use crate::dto::AccountDto;
use crate::repo::RepoResult;

/// Repository interface for account CRUD operations.
pub trait AccountsRepository {
    /// Fetches one account by id. Absent ids are `Ok(None)`, never an error.
    fn get_account(&self, id: i64) -> RepoResult<Option<AccountDto>>;

    /// Returns every account in ascending-id order, fully materialized.
    fn get_accounts(&self) -> RepoResult<Vec<AccountDto>>;

    /// Inserts a new account. The payload id is ignored; the store-assigned
    /// id is carried on the returned persisted DTO.
    fn save_account(&self, dto: &AccountDto) -> RepoResult<AccountDto>;

    /// Removes one account. `true` iff a row existed and was removed;
    /// `false` for absent ids is not an error.
    fn delete_account(&self, id: i64) -> RepoResult<bool>;

    /// Overwrites every mutable field of an existing account, id untouched,
    /// and returns the persisted state. Missing ids fail with
    /// [`crate::repo::RepoError::NotFound`].
    fn put_account(&self, id: i64, dto: &AccountDto) -> RepoResult<AccountDto>;
}
