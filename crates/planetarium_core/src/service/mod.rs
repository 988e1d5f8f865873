//! Catalog use-case services.
//!
//! # Responsibility
//! - Enforce domain invariants (name length, uniqueness, non-empty
//!   credentials) above the repository layer.
//! - Resolve heterogeneous identifiers before any persistence access.
//! - Translate repository outcomes into the fixed failure messages the
//!   external callers present.
//!
//! # Invariants
//! - Validation runs before every mutating repository call.
//! - Each operation completes synchronously with no partial mutation
//!   visible on failure.

pub mod moon_service;
pub mod planet_service;
pub mod user_service;

/// Inclusive name-length bounds shared by planets, moons, and user
/// credentials.
pub const NAME_MIN_CHARS: usize = 1;
pub const NAME_MAX_CHARS: usize = 30;

pub(crate) fn name_length_ok(name: &str) -> bool {
    let chars = name.chars().count();
    (NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&chars)
}
