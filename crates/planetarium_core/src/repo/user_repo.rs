//! User repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide account persistence primitives over the `users` table.
//!
//! # Invariants
//! - Usernames are unique; a duplicate insert surfaces as `Ok(None)`.
//! - Passwords are persisted verbatim.

use crate::model::user::{NewUser, User, UserId};
use crate::repo::{is_constraint_violation, RepoResult};
use rusqlite::{params, Connection, Row};

const USER_SELECT_SQL: &str = "SELECT id, username, password FROM users";

/// Repository interface for user account operations.
pub trait UserRepository {
    fn create_user(&self, user: &NewUser) -> RepoResult<Option<User>>;
    fn find_user_by_id(&self, id: UserId) -> RepoResult<Option<User>>;
    fn find_user_by_username(&self, username: &str) -> RepoResult<Option<User>>;
    fn all_users(&self) -> RepoResult<Vec<User>>;
    fn delete_user_by_id(&self, id: UserId) -> RepoResult<bool>;
    fn delete_user_by_username(&self, username: &str) -> RepoResult<bool>;
}

/// SQLite-backed user repository borrowing an open connection.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn create_user(&self, user: &NewUser) -> RepoResult<Option<User>> {
        let inserted = self.conn.execute(
            "INSERT INTO users (username, password) VALUES (?1, ?2);",
            params![user.username.as_str(), user.password.as_str()],
        );

        match inserted {
            Ok(_) => Ok(Some(User {
                id: self.conn.last_insert_rowid(),
                username: user.username.clone(),
                password: user.password.clone(),
            })),
            Err(err) if is_constraint_violation(&err) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn find_user_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_user_row(row)?));
        }
        Ok(None)
    }

    fn find_user_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} WHERE username = ?1;"))?;
        let mut rows = stmt.query(params![username])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_user_row(row)?));
        }
        Ok(None)
    }

    fn all_users(&self) -> RepoResult<Vec<User>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut users = Vec::new();
        while let Some(row) = rows.next()? {
            users.push(parse_user_row(row)?);
        }
        Ok(users)
    }

    fn delete_user_by_id(&self, id: UserId) -> RepoResult<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM users WHERE id = ?1;", params![id])?;
        Ok(removed > 0)
    }

    fn delete_user_by_username(&self, username: &str) -> RepoResult<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM users WHERE username = ?1;", params![username])?;
        Ok(removed > 0)
    }
}

fn parse_user_row(row: &Row<'_>) -> RepoResult<User> {
    Ok(User {
        id: row.get("id")?,
        username: row.get("username")?,
        password: row.get("password")?,
    })
}
