//! Planet model.
//!
//! # Invariants
//! - `id` is assigned by the store on insert and never changes.
//! - `name` is unique across all planets.
//! - `image_data` is an opaque base64 payload passed through untouched;
//!   the core never decodes or validates it.

use crate::model::user::UserId;
use serde::{Deserialize, Serialize};

/// Store-assigned surrogate key for planets.
pub type PlanetId = i64;

/// A stored planet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    pub id: PlanetId,
    pub name: String,
    /// User that registered this planet.
    pub owner_id: UserId,
    pub image_data: Option<String>,
}

/// Insert shape for a planet; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPlanet {
    pub name: String,
    pub owner_id: UserId,
    pub image_data: Option<String>,
}

impl NewPlanet {
    pub fn new(name: impl Into<String>, owner_id: UserId) -> Self {
        Self {
            name: name.into(),
            owner_id,
            image_data: None,
        }
    }

    /// Attaches an opaque base64 image payload.
    pub fn with_image(mut self, image_data: impl Into<String>) -> Self {
        self.image_data = Some(image_data.into());
        self
    }
}
