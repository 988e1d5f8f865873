//! User account model.
//!
//! # Invariants
//! - `id` is assigned by the store on insert and never changes.
//! - `username` is unique across all users.
//! - `password` is stored verbatim; credential hashing is out of scope
//!   for this catalog.

use serde::{Deserialize, Serialize};

/// Store-assigned surrogate key for users.
pub type UserId = i64;

/// A stored user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password: String,
}

/// Insert shape for a user; the store assigns the id.
///
/// Also doubles as the credential pair submitted to authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

impl NewUser {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}
