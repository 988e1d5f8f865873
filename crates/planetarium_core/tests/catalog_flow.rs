//! End-to-end flow over real SQLite repositories: the services wired the
//! way an embedding caller would wire them.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use planetarium_core::db::open_db_in_memory;
use planetarium_core::{
    MoonService, NewMoon, NewPlanet, NewUser, PlanetService, SqliteMoonRepository,
    SqlitePlanetRepository, SqliteUserRepository, UserService,
};

#[test]
fn register_authenticate_and_catalog_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let users = UserService::new(SqliteUserRepository::new(&conn));
    let planets = PlanetService::new(SqlitePlanetRepository::new(&conn));
    let moons = MoonService::new(SqliteMoonRepository::new(&conn));

    let message = users
        .create_user(&NewUser::new("stargazer", "password"))
        .unwrap();
    assert_eq!(
        message,
        "Created user with username stargazer and password password"
    );

    let account = users
        .authenticate(&NewUser::new("stargazer", "password"))
        .unwrap();

    let image = STANDARD.encode(b"saturn-from-voyager");
    let saturn = planets
        .create_planet(&NewPlanet::new("Saturn", account.id).with_image(image.clone()))
        .unwrap();

    let titan = moons
        .create_moon(&NewMoon::new("Titan", saturn.id))
        .unwrap();

    assert_eq!(planets.select_planet(saturn.id).unwrap(), saturn);
    assert_eq!(planets.select_planet("Saturn").unwrap().image_data, Some(image));
    assert_eq!(moons.select_moon("Titan").unwrap(), titan);
    assert_eq!(moons.select_by_planet(saturn.id).unwrap(), vec![titan]);
    assert_eq!(planets.select_by_owner(account.id).unwrap().len(), 1);
}

#[test]
fn thirty_char_moon_name_is_accepted_and_thirty_one_rejected() {
    let conn = open_db_in_memory().unwrap();
    let users = UserService::new(SqliteUserRepository::new(&conn));
    let planets = PlanetService::new(SqlitePlanetRepository::new(&conn));
    let moons = MoonService::new(SqliteMoonRepository::new(&conn));

    users.create_user(&NewUser::new("stargazer", "password")).unwrap();
    let owner = users.select_user("stargazer").unwrap();
    let earth = planets
        .create_planet(&NewPlanet::new("Earth", owner.id))
        .unwrap();

    let created = moons
        .create_moon(&NewMoon::new("MoonNameIsThirtyCharactersLong", earth.id))
        .unwrap();
    assert_eq!(created.name, "MoonNameIsThirtyCharactersLong");

    let err = moons
        .create_moon(&NewMoon::new("MoonNameThirtyOneCharactersLong", earth.id))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Moon name must be between 1 and 30 characters"
    );
}

#[test]
fn uniqueness_is_case_sensitive() {
    let conn = open_db_in_memory().unwrap();
    let users = UserService::new(SqliteUserRepository::new(&conn));
    let planets = PlanetService::new(SqlitePlanetRepository::new(&conn));

    users.create_user(&NewUser::new("stargazer", "password")).unwrap();
    let owner = users.select_user("stargazer").unwrap();

    planets.create_planet(&NewPlanet::new("Earth", owner.id)).unwrap();

    let err = planets
        .create_planet(&NewPlanet::new("Earth", owner.id))
        .unwrap_err();
    assert_eq!(err.to_string(), "Planet name must be unique");

    // A different casing is a different name.
    let lowercase = planets
        .create_planet(&NewPlanet::new("earth", owner.id))
        .unwrap();
    assert_eq!(lowercase.name, "earth");
}

#[test]
fn update_and_delete_through_services() {
    let conn = open_db_in_memory().unwrap();
    let users = UserService::new(SqliteUserRepository::new(&conn));
    let planets = PlanetService::new(SqlitePlanetRepository::new(&conn));
    let moons = MoonService::new(SqliteMoonRepository::new(&conn));

    users.create_user(&NewUser::new("stargazer", "password")).unwrap();
    let owner = users.select_user("stargazer").unwrap();
    let planet = planets
        .create_planet(&NewPlanet::new("Gaia", owner.id))
        .unwrap();
    let moon = moons.create_moon(&NewMoon::new("Selene", planet.id)).unwrap();

    let mut renamed = planet.clone();
    renamed.name = "Earth".to_string();
    assert_eq!(planets.update_planet(&renamed).unwrap().name, "Earth");

    let mut renamed_moon = moon.clone();
    renamed_moon.name = "Luna".to_string();
    assert_eq!(moons.update_moon(&renamed_moon).unwrap().name, "Luna");

    assert_eq!(
        moons.delete_moon("Luna").unwrap(),
        "Moon deleted successfully"
    );
    assert_eq!(
        planets.delete_planet(planet.id).unwrap(),
        "Planet deleted successfully"
    );
    assert_eq!(
        users.delete_user("stargazer").unwrap(),
        "User deleted successfully"
    );
}
