//! Planet use-case service.
//!
//! # Responsibility
//! - Validate planet invariants above the repository layer.
//! - Resolve id-or-name identifiers for select and delete.
//!
//! # Invariants
//! - Names are 1 to 30 characters and unique among planets.
//! - Update re-validates against the currently stored state.

use crate::model::identifier::{EntityKey, Identifier};
use crate::model::planet::{NewPlanet, Planet};
use crate::model::user::UserId;
use crate::repo::planet_repo::PlanetRepository;
use crate::repo::RepoError;
use crate::service::name_length_ok;
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from planet service operations, rendered as the fixed messages
/// external callers present.
#[derive(Debug)]
pub enum PlanetServiceError {
    /// Identifier kind is neither integer nor string.
    InvalidIdentifier,
    /// Name is empty or longer than 30 characters.
    NameLength { on_update: bool },
    /// Another planet already owns the name.
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

impl Display for PlanetServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIdentifier => write!(f, "Identifier must be an Integer or String"),
            Self::NameLength { on_update: false } => {
                write!(f, "Planet name must be between 1 and 30 characters")
            }
            Self::NameLength { on_update: true } => {
                write!(
                    f,
                    "Planet name must be between 1 and 30 characters, could not update"
                )
            }
            Self::NameTaken { on_update: false } => write!(f, "Planet name must be unique"),
            Self::NameTaken { on_update: true } => {
                write!(f, "Planet name must be unique, could not update")
            }
            Self::NotFound { on_update: false } => write!(f, "Planet not found"),
            Self::NotFound { on_update: true } => {
                write!(f, "Planet not found, could not update")
            }
            Self::CreateFailed => write!(f, "Could not create new planet"),
            Self::UpdateFailed => write!(f, "Planet update failed, please try again"),
            Self::DeleteFailed => write!(f, "Planet delete failed, please try again"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PlanetServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for PlanetServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Planet service facade over an injected repository.
pub struct PlanetService<R: PlanetRepository> {
    repo: R,
}

impl<R: PlanetRepository> PlanetService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a new planet after validating name length and uniqueness.
    ///
    /// Returns the created planet with its store-assigned id.
    pub fn create_planet(&self, planet: &NewPlanet) -> Result<Planet, PlanetServiceError> {
        if !name_length_ok(&planet.name) {
            return Err(PlanetServiceError::NameLength { on_update: false });
        }
        if self.repo.planet_by_name(&planet.name)?.is_some() {
            return Err(PlanetServiceError::NameTaken { on_update: false });
        }

        match self.repo.create_planet(planet)? {
            Some(created) => {
                debug!(
                    "event=planet_create module=service status=ok id={}",
                    created.id
                );
                Ok(created)
            }
            None => {
                warn!("event=planet_create module=service status=error error_code=create_failed");
                Err(PlanetServiceError::CreateFailed)
            }
        }
    }

    /// Selects one planet by id or by unique name.
    pub fn select_planet(
        &self,
        identifier: impl Into<Identifier>,
    ) -> Result<Planet, PlanetServiceError> {
        let found = match identifier.into().classify() {
            Some(EntityKey::Id(id)) => self.repo.planet_by_id(id)?,
            Some(EntityKey::Name(name)) => self.repo.planet_by_name(&name)?,
            None => return Err(PlanetServiceError::InvalidIdentifier),
        };
        found.ok_or(PlanetServiceError::NotFound { on_update: false })
    }

    /// Lists every planet; an empty catalog is a valid result.
    pub fn select_all_planets(&self) -> Result<Vec<Planet>, PlanetServiceError> {
        self.repo.all_planets().map_err(Into::into)
    }

    /// Lists planets registered by one user; possibly empty.
    pub fn select_by_owner(&self, owner_id: UserId) -> Result<Vec<Planet>, PlanetServiceError> {
        self.repo.planets_by_owner(owner_id).map_err(Into::into)
    }

    /// Updates an existing planet, re-validating against stored state.
    ///
    /// Keeping the planet's own current name is not a uniqueness
    /// collision.
    pub fn update_planet(&self, planet: &Planet) -> Result<Planet, PlanetServiceError> {
        self.repo
            .planet_by_id(planet.id)?
            .ok_or(PlanetServiceError::NotFound { on_update: true })?;

        if !name_length_ok(&planet.name) {
            return Err(PlanetServiceError::NameLength { on_update: true });
        }
        if let Some(existing) = self.repo.planet_by_name(&planet.name)? {
            if existing.id != planet.id {
                return Err(PlanetServiceError::NameTaken { on_update: true });
            }
        }

        match self.repo.update_planet(planet)? {
            Some(updated) => {
                debug!(
                    "event=planet_update module=service status=ok id={}",
                    updated.id
                );
                Ok(updated)
            }
            None => {
                warn!("event=planet_update module=service status=error error_code=update_failed");
                Err(PlanetServiceError::UpdateFailed)
            }
        }
    }

    /// Deletes one planet by id or by unique name.
    ///
    /// Returns the fixed success message when a row was removed.
    pub fn delete_planet(
        &self,
        identifier: impl Into<Identifier>,
    ) -> Result<String, PlanetServiceError> {
        let removed = match identifier.into().classify() {
            Some(EntityKey::Id(id)) => self.repo.delete_planet_by_id(id)?,
            Some(EntityKey::Name(name)) => self.repo.delete_planet_by_name(&name)?,
            None => return Err(PlanetServiceError::InvalidIdentifier),
        };

        if removed {
            debug!("event=planet_delete module=service status=ok");
            Ok("Planet deleted successfully".to_string())
        } else {
            warn!("event=planet_delete module=service status=error error_code=delete_failed");
            Err(PlanetServiceError::DeleteFailed)
        }
    }
}
