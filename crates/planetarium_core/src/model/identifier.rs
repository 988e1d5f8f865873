//! Heterogeneous lookup identifiers.
//!
//! # Responsibility
//! - Model the value kinds an external caller may pass as a lookup key.
//! - Classify those values into the supported key kinds at the service
//!   boundary, before any persistence access.
//!
//! # Invariants
//! - Only integer and string identifiers resolve to a key; every other
//!   kind is rejected by classification.

/// A caller-supplied lookup value of yet-unchecked kind.
///
/// External callers address an entity either by its store-assigned id or
/// by its unique name. Anything else a caller may hand over (a float, a
/// boolean) is representable here so the service layer can reject it with
/// a domain error instead of failing to compile far from the boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Identifier {
    Int(i64),
    Text(String),
    Float(f64),
    Bool(bool),
}

/// A classified lookup key supported by the repositories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityKey {
    /// Store-assigned surrogate id.
    Id(i64),
    /// Unique entity name.
    Name(String),
}

impl Identifier {
    /// Classifies this value into a supported lookup key.
    ///
    /// Returns `None` for kinds no repository can resolve; the caller is
    /// expected to fail the whole operation in that case.
    pub fn classify(&self) -> Option<EntityKey> {
        match self {
            Self::Int(id) => Some(EntityKey::Id(*id)),
            Self::Text(name) => Some(EntityKey::Name(name.clone())),
            Self::Float(_) | Self::Bool(_) => None,
        }
    }
}

impl From<i64> for Identifier {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Identifier {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for Identifier {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Identifier {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
