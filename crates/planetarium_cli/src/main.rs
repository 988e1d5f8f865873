//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `planetarium_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use planetarium_core::db::open_db_in_memory;
use planetarium_core::{
    MoonService, PlanetService, SqliteMoonRepository, SqlitePlanetRepository,
    SqliteUserRepository, UserService,
};

fn main() {
    println!("planetarium_core version={}", planetarium_core::core_version());

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open in-memory store: {err}");
            std::process::exit(1);
        }
    };

    let users = UserService::new(SqliteUserRepository::new(&conn));
    let planets = PlanetService::new(SqlitePlanetRepository::new(&conn));
    let moons = MoonService::new(SqliteMoonRepository::new(&conn));

    match (
        users.select_all_users(),
        planets.select_all_planets(),
        moons.select_all_moons(),
    ) {
        (Ok(users), Ok(planets), Ok(moons)) => {
            println!(
                "catalog users={} planets={} moons={}",
                users.len(),
                planets.len(),
                moons.len()
            );
        }
        (users, planets, moons) => {
            eprintln!("catalog probe failed: users={users:?} planets={planets:?} moons={moons:?}");
            std::process::exit(1);
        }
    }
}
