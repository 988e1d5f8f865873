//! Moon repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD primitives over the `moons` table, including the
//!   by-orbited-planet listing.
//!
//! # Invariants
//! - Moons are addressable both by store-assigned id and unique name.
//! - Constraint rejections on create/update surface as `Ok(None)`.

use crate::model::moon::{Moon, MoonId, NewMoon};
use crate::model::planet::PlanetId;
use crate::repo::{is_constraint_violation, RepoResult};
use rusqlite::{params, Connection, Row};

const MOON_SELECT_SQL: &str = "SELECT id, name, owner_id, image_data FROM moons";

/// Repository interface for moon CRUD operations.
pub trait MoonRepository {
    fn create_moon(&self, moon: &NewMoon) -> RepoResult<Option<Moon>>;
    fn moon_by_id(&self, id: MoonId) -> RepoResult<Option<Moon>>;
    fn moon_by_name(&self, name: &str) -> RepoResult<Option<Moon>>;
    fn all_moons(&self) -> RepoResult<Vec<Moon>>;
    fn moons_by_planet(&self, owner_id: PlanetId) -> RepoResult<Vec<Moon>>;
    fn update_moon(&self, moon: &Moon) -> RepoResult<Option<Moon>>;
    fn delete_moon_by_id(&self, id: MoonId) -> RepoResult<bool>;
    fn delete_moon_by_name(&self, name: &str) -> RepoResult<bool>;
}

/// SQLite-backed moon repository borrowing an open connection.
pub struct SqliteMoonRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMoonRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl MoonRepository for SqliteMoonRepository<'_> {
    fn create_moon(&self, moon: &NewMoon) -> RepoResult<Option<Moon>> {
        let inserted = self.conn.execute(
            "INSERT INTO moons (name, owner_id, image_data) VALUES (?1, ?2, ?3);",
            params![
                moon.name.as_str(),
                moon.owner_id,
                moon.image_data.as_deref()
            ],
        );

        match inserted {
            Ok(_) => Ok(Some(Moon {
                id: self.conn.last_insert_rowid(),
                name: moon.name.clone(),
                owner_id: moon.owner_id,
                image_data: moon.image_data.clone(),
            })),
            Err(err) if is_constraint_violation(&err) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn moon_by_id(&self, id: MoonId) -> RepoResult<Option<Moon>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MOON_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_moon_row(row)?));
        }
        Ok(None)
    }

    fn moon_by_name(&self, name: &str) -> RepoResult<Option<Moon>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MOON_SELECT_SQL} WHERE name = ?1;"))?;
        let mut rows = stmt.query(params![name])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_moon_row(row)?));
        }
        Ok(None)
    }

    fn all_moons(&self) -> RepoResult<Vec<Moon>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MOON_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut moons = Vec::new();
        while let Some(row) = rows.next()? {
            moons.push(parse_moon_row(row)?);
        }
        Ok(moons)
    }

    fn moons_by_planet(&self, owner_id: PlanetId) -> RepoResult<Vec<Moon>> {
        let mut stmt = self.conn.prepare(&format!(
            "{MOON_SELECT_SQL} WHERE owner_id = ?1 ORDER BY id ASC;"
        ))?;
        let mut rows = stmt.query(params![owner_id])?;
        let mut moons = Vec::new();
        while let Some(row) = rows.next()? {
            moons.push(parse_moon_row(row)?);
        }
        Ok(moons)
    }

    fn update_moon(&self, moon: &Moon) -> RepoResult<Option<Moon>> {
        let updated = self.conn.execute(
            "UPDATE moons SET name = ?1, owner_id = ?2, image_data = ?3 WHERE id = ?4;",
            params![
                moon.name.as_str(),
                moon.owner_id,
                moon.image_data.as_deref(),
                moon.id
            ],
        );

        match updated {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(moon.clone())),
            Err(err) if is_constraint_violation(&err) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn delete_moon_by_id(&self, id: MoonId) -> RepoResult<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM moons WHERE id = ?1;", params![id])?;
        Ok(removed > 0)
    }

    fn delete_moon_by_name(&self, name: &str) -> RepoResult<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM moons WHERE name = ?1;", params![name])?;
        Ok(removed > 0)
    }
}

fn parse_moon_row(row: &Row<'_>) -> RepoResult<Moon> {
    Ok(Moon {
        id: row.get("id")?,
        name: row.get("name")?,
        owner_id: row.get("owner_id")?,
        image_data: row.get("image_data")?,
    })
}
