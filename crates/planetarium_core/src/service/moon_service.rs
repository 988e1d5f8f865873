//! Moon use-case service.
//!
//! # Responsibility
//! - Validate moon invariants above the repository layer.
//! - Resolve id-or-name identifiers for select and delete.
//!
//! # Invariants
//! - Names are 1 to 30 characters and unique among all moons,
//!   not scoped per planet.
//! - Update re-validates against the currently stored state.

use crate::model::identifier::{EntityKey, Identifier};
use crate::model::moon::{Moon, NewMoon};
use crate::model::planet::PlanetId;
use crate::repo::moon_repo::MoonRepository;
use crate::repo::RepoError;
use crate::service::name_length_ok;
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from moon service operations, rendered as the fixed messages
/// external callers present.
#[derive(Debug)]
pub enum MoonServiceError {
    /// Identifier kind is neither integer nor string.
    InvalidIdentifier,
    /// Name is empty or longer than 30 characters.
    NameLength { on_update: bool },
    /// Another moon already owns the name.
    NameTaken { on_update: bool },
    /// Lookup or update target does not exist.
    NotFound { on_update: bool },
    /// The store rejected the insert.
    CreateFailed,
    /// The store rejected the update.
    UpdateFailed,
    /// The store removed no matching row.
    DeleteFailed,
    /// Storage-level failure passed through unchanged.
    Repo(RepoError),
}

impl Display for MoonServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIdentifier => write!(f, "Identifier must be an Integer or String"),
            Self::NameLength { on_update: false } => {
                write!(f, "Moon name must be between 1 and 30 characters")
            }
            Self::NameLength { on_update: true } => {
                write!(
                    f,
                    "Moon name must be between 1 and 30 characters, could not update"
                )
            }
            Self::NameTaken { on_update: false } => write!(f, "Moon name must be unique"),
            Self::NameTaken { on_update: true } => {
                write!(f, "Moon name must be unique, could not update")
            }
            Self::NotFound { on_update: false } => write!(f, "Moon not found"),
            Self::NotFound { on_update: true } => write!(f, "Moon not found, could not update"),
            Self::CreateFailed => write!(f, "Could not create new moon"),
            Self::UpdateFailed => write!(f, "Moon update failed, please try again"),
            Self::DeleteFailed => write!(f, "Moon delete failed, please try again"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for MoonServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for MoonServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Moon service facade over an injected repository.
pub struct MoonService<R: MoonRepository> {
    repo: R,
}

impl<R: MoonRepository> MoonService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a new moon after validating name length and uniqueness.
    ///
    /// Returns the created moon with its store-assigned id.
    pub fn create_moon(&self, moon: &NewMoon) -> Result<Moon, MoonServiceError> {
        if !name_length_ok(&moon.name) {
            return Err(MoonServiceError::NameLength { on_update: false });
        }
        if self.repo.moon_by_name(&moon.name)?.is_some() {
            return Err(MoonServiceError::NameTaken { on_update: false });
        }

        match self.repo.create_moon(moon)? {
            Some(created) => {
                debug!(
                    "event=moon_create module=service status=ok id={}",
                    created.id
                );
                Ok(created)
            }
            None => {
                warn!("event=moon_create module=service status=error error_code=create_failed");
                Err(MoonServiceError::CreateFailed)
            }
        }
    }

    /// Selects one moon by id or by unique name.
    pub fn select_moon(
        &self,
        identifier: impl Into<Identifier>,
    ) -> Result<Moon, MoonServiceError> {
        let found = match identifier.into().classify() {
            Some(EntityKey::Id(id)) => self.repo.moon_by_id(id)?,
            Some(EntityKey::Name(name)) => self.repo.moon_by_name(&name)?,
            None => return Err(MoonServiceError::InvalidIdentifier),
        };
        found.ok_or(MoonServiceError::NotFound { on_update: false })
    }

    /// Lists every moon; an empty catalog is a valid result.
    pub fn select_all_moons(&self) -> Result<Vec<Moon>, MoonServiceError> {
        self.repo.all_moons().map_err(Into::into)
    }

    /// Lists moons orbiting one planet; possibly empty.
    pub fn select_by_planet(&self, owner_id: PlanetId) -> Result<Vec<Moon>, MoonServiceError> {
        self.repo.moons_by_planet(owner_id).map_err(Into::into)
    }

    /// Updates an existing moon, re-validating against stored state.
    ///
    /// Keeping the moon's own current name is not a uniqueness collision.
    pub fn update_moon(&self, moon: &Moon) -> Result<Moon, MoonServiceError> {
        self.repo
            .moon_by_id(moon.id)?
            .ok_or(MoonServiceError::NotFound { on_update: true })?;

        if !name_length_ok(&moon.name) {
            return Err(MoonServiceError::NameLength { on_update: true });
        }
        if let Some(existing) = self.repo.moon_by_name(&moon.name)? {
            if existing.id != moon.id {
                return Err(MoonServiceError::NameTaken { on_update: true });
            }
        }

        match self.repo.update_moon(moon)? {
            Some(updated) => {
                debug!(
                    "event=moon_update module=service status=ok id={}",
                    updated.id
                );
                Ok(updated)
            }
            None => {
                warn!("event=moon_update module=service status=error error_code=update_failed");
                Err(MoonServiceError::UpdateFailed)
            }
        }
    }

    /// Deletes one moon by id or by unique name.
    ///
    /// Returns the fixed success message when a row was removed.
    pub fn delete_moon(
        &self,
        identifier: impl Into<Identifier>,
    ) -> Result<String, MoonServiceError> {
        let removed = match identifier.into().classify() {
            Some(EntityKey::Id(id)) => self.repo.delete_moon_by_id(id)?,
            Some(EntityKey::Name(name)) => self.repo.delete_moon_by_name(&name)?,
            None => return Err(MoonServiceError::InvalidIdentifier),
        };

        if removed {
            debug!("event=moon_delete module=service status=ok");
            Ok("Moon deleted successfully".to_string())
        } else {
            warn!("event=moon_delete module=service status=error error_code=delete_failed");
            Err(MoonServiceError::DeleteFailed)
        }
    }
}
