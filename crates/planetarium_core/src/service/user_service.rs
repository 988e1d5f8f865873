//! User account service.
//!
//! # Responsibility
//! - Validate account credentials above the repository layer.
//! - Authenticate a submitted credential pair against stored state.
//!
//! # Invariants
//! - Usernames and passwords are non-empty and at most 30 characters;
//!   empty credentials are rejected here, never left to the store.
//! - Authentication never reveals whether the username or the password
//!   was the mismatch.

use crate::model::identifier::{EntityKey, Identifier};
use crate::model::user::{NewUser, User};
use crate::repo::user_repo::UserRepository;
use crate::repo::RepoError;
use crate::service::NAME_MAX_CHARS;
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from user service operations, rendered as the fixed messages
/// external callers present.
#[derive(Debug)]
pub enum UserServiceError {
    /// Identifier kind is neither integer nor string.
    InvalidIdentifier,
    /// Username is empty.
    UsernameEmpty,
    /// Password is empty.
    PasswordEmpty,
    /// Username exceeds 30 characters.
    UsernameTooLong,
    /// Password exceeds 30 characters.
    PasswordTooLong,
    /// Another account already owns the username.
    UsernameTaken,
    /// Lookup target does not exist.
    NotFound,
    /// The store rejected the insert.
    CreateFailed,
    /// The store removed no matching row.
    DeleteFailed,
    /// Unknown username or wrong password.
    InvalidCredentials,
    /// Storage-level failure passed through unchanged.
    Repo(RepoError),
}

impl Display for UserServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIdentifier => write!(f, "Identifier must be an Integer or String"),
            Self::UsernameEmpty => write!(f, "Username cannot be empty"),
            Self::PasswordEmpty => write!(f, "Password cannot be empty"),
            Self::UsernameTooLong => write!(f, "Username must be 30 characters or less"),
            Self::PasswordTooLong => write!(f, "Password must be 30 characters or less"),
            Self::UsernameTaken => write!(f, "Username is already in use"),
            Self::NotFound => write!(f, "User not found"),
            Self::CreateFailed => write!(f, "Could not create new user"),
            Self::DeleteFailed => write!(f, "User delete failed, please try again"),
            Self::InvalidCredentials => write!(f, "Username and/or password do not match"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for UserServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for UserServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// User service facade over an injected repository.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a new account after validating the credential pair.
    ///
    /// Returns the confirmation message external callers present.
    pub fn create_user(&self, user: &NewUser) -> Result<String, UserServiceError> {
        if user.username.is_empty() {
            return Err(UserServiceError::UsernameEmpty);
        }
        if user.password.is_empty() {
            return Err(UserServiceError::PasswordEmpty);
        }
        if user.username.chars().count() > NAME_MAX_CHARS {
            return Err(UserServiceError::UsernameTooLong);
        }
        if user.password.chars().count() > NAME_MAX_CHARS {
            return Err(UserServiceError::PasswordTooLong);
        }
        if self.repo.find_user_by_username(&user.username)?.is_some() {
            return Err(UserServiceError::UsernameTaken);
        }

        match self.repo.create_user(user)? {
            Some(created) => {
                debug!(
                    "event=user_create module=service status=ok id={}",
                    created.id
                );
                Ok(format!(
                    "Created user with username {} and password {}",
                    created.username, created.password
                ))
            }
            None => {
                warn!("event=user_create module=service status=error error_code=create_failed");
                Err(UserServiceError::CreateFailed)
            }
        }
    }

    /// Authenticates a submitted credential pair.
    ///
    /// Returns the stored user record unchanged on success.
    pub fn authenticate(&self, credentials: &NewUser) -> Result<User, UserServiceError> {
        let stored = match self.repo.find_user_by_username(&credentials.username)? {
            Some(stored) => stored,
            None => {
                warn!("event=user_auth module=service status=error error_code=unknown_username");
                return Err(UserServiceError::InvalidCredentials);
            }
        };

        if stored.password != credentials.password {
            warn!("event=user_auth module=service status=error error_code=password_mismatch");
            return Err(UserServiceError::InvalidCredentials);
        }

        debug!("event=user_auth module=service status=ok id={}", stored.id);
        Ok(stored)
    }

    /// Selects one account by id or by unique username.
    pub fn select_user(
        &self,
        identifier: impl Into<Identifier>,
    ) -> Result<User, UserServiceError> {
        let found = match identifier.into().classify() {
            Some(EntityKey::Id(id)) => self.repo.find_user_by_id(id)?,
            Some(EntityKey::Name(username)) => self.repo.find_user_by_username(&username)?,
            None => return Err(UserServiceError::InvalidIdentifier),
        };
        found.ok_or(UserServiceError::NotFound)
    }

    /// Lists every account; an empty catalog is a valid result.
    pub fn select_all_users(&self) -> Result<Vec<User>, UserServiceError> {
        self.repo.all_users().map_err(Into::into)
    }

    /// Deletes one account by id or by unique username.
    ///
    /// Returns the fixed success message when a row was removed.
    pub fn delete_user(
        &self,
        identifier: impl Into<Identifier>,
    ) -> Result<String, UserServiceError> {
        let removed = match identifier.into().classify() {
            Some(EntityKey::Id(id)) => self.repo.delete_user_by_id(id)?,
            Some(EntityKey::Name(username)) => self.repo.delete_user_by_username(&username)?,
            None => return Err(UserServiceError::InvalidIdentifier),
        };

        if removed {
            debug!("event=user_delete module=service status=ok");
            Ok("User deleted successfully".to_string())
        } else {
            warn!("event=user_delete module=service status=error error_code=delete_failed");
            Err(UserServiceError::DeleteFailed)
        }
    }
}
