//! Domain model for the planetarium catalog.
//!
//! # Responsibility
//! - Define the entity records persisted by the repository layer.
//! - Define the identifier types used to address entities for lookup.
//!
//! # Invariants
//! - Every stored entity is identified by a store-assigned integer id.
//! - `New*` shapes never carry an id; the store assigns one on insert.

pub mod identifier;
pub mod moon;
pub mod planet;
pub mod user;
