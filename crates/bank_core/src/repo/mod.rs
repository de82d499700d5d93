//! Repository layer contracts shared by all aggregates.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts in DTO terms.
//! - Own the semantic error taxonomy shared by the service implementations.
//!
//! # Invariants
//! - A missing id on read or delete is a sentinel result (`None` / `false`),
//!   never an error. A missing id on update is [`RepoError::NotFound`]. This
//!   asymmetry is part of the published contract and must not be normalized.
//! - [`RepoError::NotFound`] displays as exactly "`<Entity> not found`".

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod accounts_repo;
pub mod clients_repo;

pub use accounts_repo::AccountsRepository;
pub use clients_repo::ClientsRepository;

pub type RepoResult<T> = Result<T, RepoError>;

/// Semantic repository error for account/client persistence operations.
#[derive(Debug)]
pub enum RepoError {
    /// Write-path miss; caller-recoverable.
    NotFound { entity: &'static str },
    /// Insert/update referenced a related row that does not exist.
    ReferentialIntegrity { entity: &'static str },
    /// Store transport failure; fatal at this layer, never retried here.
    Db(DbError),
    /// Persisted row fails to parse back into its entity shape.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { entity } => write!(f, "{entity} not found"),
            Self::ReferentialIntegrity { entity } => {
                write!(f, "{entity} references a missing related entity")
            }
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted row data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound { .. } | Self::ReferentialIntegrity { .. } | Self::InvalidData(_) => {
                None
            }
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Maps write-path SQLite failures, turning foreign-key violations into
/// [`RepoError::ReferentialIntegrity`] for the named aggregate.
pub(crate) fn map_write_err(entity: &'static str, err: rusqlite::Error) -> RepoError {
    match err {
        rusqlite::Error::SqliteFailure(code, _)
            if code.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY =>
        {
            RepoError::ReferentialIntegrity { entity }
        }
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::RepoError;

    #[test]
    fn not_found_message_matches_contract() {
        let account = RepoError::NotFound { entity: "Account" };
        assert_eq!(account.to_string(), "Account not found");

        let client = RepoError::NotFound { entity: "Client" };
        assert_eq!(client.to_string(), "Client not found");
    }
}
