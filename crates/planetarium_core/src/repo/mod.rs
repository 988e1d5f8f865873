//! Repository layer abstractions and SQLite implementations.
//!
//! # Responsibility
//! - Define per-entity persistence contracts consumed by the services.
//! - Isolate SQL details from service orchestration.
//!
//! # Invariants
//! - Reads report absence as `Ok(None)`, never as an error.
//! - Creates and updates report a constraint rejection as `Ok(None)`;
//!   only transport-level failures become errors.
//! - Deletes report "no row matched" as `Ok(false)`.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod moon_repo;
pub mod planet_repo;
pub mod user_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Storage-level failure shared by all entity repositories.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
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

/// Returns whether an execute failed on a schema constraint (unique name,
/// missing foreign key) rather than a transport problem.
pub(crate) fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.code == rusqlite::ErrorCode::ConstraintViolation
    )
}
