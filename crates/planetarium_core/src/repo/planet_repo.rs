//! Planet repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD primitives over the `planets` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Planets are addressable both by store-assigned id and unique name.
//! - Constraint rejections on create/update surface as `Ok(None)`.

use crate::model::planet::{NewPlanet, Planet, PlanetId};
use crate::model::user::UserId;
use crate::repo::{is_constraint_violation, RepoResult};
use rusqlite::{params, Connection, Row};

const PLANET_SELECT_SQL: &str = "SELECT id, name, owner_id, image_data FROM planets";

/// Repository interface for planet CRUD operations.
pub trait PlanetRepository {
    fn create_planet(&self, planet: &NewPlanet) -> RepoResult<Option<Planet>>;
    fn planet_by_id(&self, id: PlanetId) -> RepoResult<Option<Planet>>;
    fn planet_by_name(&self, name: &str) -> RepoResult<Option<Planet>>;
    fn all_planets(&self) -> RepoResult<Vec<Planet>>;
    fn planets_by_owner(&self, owner_id: UserId) -> RepoResult<Vec<Planet>>;
    fn update_planet(&self, planet: &Planet) -> RepoResult<Option<Planet>>;
    fn delete_planet_by_id(&self, id: PlanetId) -> RepoResult<bool>;
    fn delete_planet_by_name(&self, name: &str) -> RepoResult<bool>;
}

/// SQLite-backed planet repository borrowing an open connection.
pub struct SqlitePlanetRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePlanetRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PlanetRepository for SqlitePlanetRepository<'_> {
    fn create_planet(&self, planet: &NewPlanet) -> RepoResult<Option<Planet>> {
        let inserted = self.conn.execute(
            "INSERT INTO planets (name, owner_id, image_data) VALUES (?1, ?2, ?3);",
            params![
                planet.name.as_str(),
                planet.owner_id,
                planet.image_data.as_deref()
            ],
        );

        match inserted {
            Ok(_) => Ok(Some(Planet {
                id: self.conn.last_insert_rowid(),
                name: planet.name.clone(),
                owner_id: planet.owner_id,
                image_data: planet.image_data.clone(),
            })),
            Err(err) if is_constraint_violation(&err) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn planet_by_id(&self, id: PlanetId) -> RepoResult<Option<Planet>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PLANET_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_planet_row(row)?));
        }
        Ok(None)
    }

    fn planet_by_name(&self, name: &str) -> RepoResult<Option<Planet>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PLANET_SELECT_SQL} WHERE name = ?1;"))?;
        let mut rows = stmt.query(params![name])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_planet_row(row)?));
        }
        Ok(None)
    }

    fn all_planets(&self) -> RepoResult<Vec<Planet>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PLANET_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut planets = Vec::new();
        while let Some(row) = rows.next()? {
            planets.push(parse_planet_row(row)?);
        }
        Ok(planets)
    }

    fn planets_by_owner(&self, owner_id: UserId) -> RepoResult<Vec<Planet>> {
        let mut stmt = self.conn.prepare(&format!(
            "{PLANET_SELECT_SQL} WHERE owner_id = ?1 ORDER BY id ASC;"
        ))?;
        let mut rows = stmt.query(params![owner_id])?;
        let mut planets = Vec::new();
        while let Some(row) = rows.next()? {
            planets.push(parse_planet_row(row)?);
        }
        Ok(planets)
    }

    fn update_planet(&self, planet: &Planet) -> RepoResult<Option<Planet>> {
        let updated = self.conn.execute(
            "UPDATE planets SET name = ?1, owner_id = ?2, image_data = ?3 WHERE id = ?4;",
            params![
                planet.name.as_str(),
                planet.owner_id,
                planet.image_data.as_deref(),
                planet.id
            ],
        );

        match updated {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(planet.clone())),
            Err(err) if is_constraint_violation(&err) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn delete_planet_by_id(&self, id: PlanetId) -> RepoResult<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM planets WHERE id = ?1;", params![id])?;
        Ok(removed > 0)
    }

    fn delete_planet_by_name(&self, name: &str) -> RepoResult<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM planets WHERE name = ?1;", params![name])?;
        Ok(removed > 0)
    }
}

fn parse_planet_row(row: &Row<'_>) -> RepoResult<Planet> {
    Ok(Planet {
        id: row.get("id")?,
        name: row.get("name")?,
        owner_id: row.get("owner_id")?,
        image_data: row.get("image_data")?,
    })
}
