//! Core domain logic for the planetarium catalog.
//! This crate is the single source of truth for catalog invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, StoreConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::identifier::{EntityKey, Identifier};
pub use model::moon::{Moon, MoonId, NewMoon};
pub use model::planet::{NewPlanet, Planet, PlanetId};
pub use model::user::{NewUser, User, UserId};
pub use repo::moon_repo::{MoonRepository, SqliteMoonRepository};
pub use repo::planet_repo::{PlanetRepository, SqlitePlanetRepository};
pub use repo::user_repo::{SqliteUserRepository, UserRepository};
pub use repo::{RepoError, RepoResult};
pub use service::moon_service::{MoonService, MoonServiceError};
pub use service::planet_service::{PlanetService, PlanetServiceError};
pub use service::user_service::{UserService, UserServiceError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
