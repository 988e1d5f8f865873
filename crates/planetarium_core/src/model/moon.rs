//! Moon model.
//!
//! # Invariants
//! - `id` is assigned by the store on insert and never changes.
//! - `name` is unique across all moons, not scoped per planet.
//! - `owner_id` references the planet this moon orbits.

use crate::model::planet::PlanetId;
use serde::{Deserialize, Serialize};

/// Store-assigned surrogate key for moons.
pub type MoonId = i64;

/// A stored moon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Moon {
    pub id: MoonId,
    pub name: String,
    /// Planet this moon orbits.
    pub owner_id: PlanetId,
    pub image_data: Option<String>,
}

/// Insert shape for a moon; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMoon {
    pub name: String,
    pub owner_id: PlanetId,
    pub image_data: Option<String>,
}

impl NewMoon {
    pub fn new(name: impl Into<String>, owner_id: PlanetId) -> Self {
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
