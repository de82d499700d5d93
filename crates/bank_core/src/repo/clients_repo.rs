//! Clients repository contract.
//!
//! # Invariants
//! - All operations speak DTO shapes, so the `Mail`/`email` rename never
//!   leaks past the mapping layer.

use crate::dto::ClientDto;
use crate::repo::RepoResult;

/// Repository interface for client CRUD operations.
pub trait ClientsRepository {
    /// Fetches one client by id. Absent ids are `Ok(None)`, never an error.
    fn get_client(&self, id: i64) -> RepoResult<Option<ClientDto>>;

    /// Returns every client in ascending-id order, fully materialized.
    fn get_clients(&self) -> RepoResult<Vec<ClientDto>>;

    /// Inserts a new client. The payload id is ignored; the store-assigned
    /// id is carried on the returned persisted DTO.
    fn save_client(&self, dto: &ClientDto) -> RepoResult<ClientDto>;

    /// Removes one client. `true` iff a row existed and was removed;
    /// `false` for absent ids is not an error.
    fn delete_client(&self, id: i64) -> RepoResult<bool>;

    /// Overwrites every mutable field of an existing client, id untouched,
    /// and returns the persisted state. Missing ids fail with
    /// [`crate::repo::RepoError::NotFound`].
    fn put_client(&self, id: i64, dto: &ClientDto) -> RepoResult<ClientDto>;
}
