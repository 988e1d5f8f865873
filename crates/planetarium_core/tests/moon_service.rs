use planetarium_core::repo::moon_repo::MoonRepository;
use planetarium_core::repo::RepoResult;
use planetarium_core::{Moon, MoonService, NewMoon};
use std::cell::{Cell, RefCell};

/// In-memory stand-in for the SQLite repository, mirroring its contract:
/// `Ok(None)` for constraint rejections, `Ok(false)` for missing deletes.
struct FakeMoonRepo {
    moons: RefCell<Vec<Moon>>,
    next_id: Cell<i64>,
    fail_writes: Cell<bool>,
}

impl FakeMoonRepo {
    fn new() -> Self {
        Self {
            moons: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
            fail_writes: Cell::new(false),
        }
    }

    fn with_moons(moons: Vec<Moon>) -> Self {
        let next_id = moons.iter().map(|moon| moon.id).max().unwrap_or(0) + 1;
        Self {
            moons: RefCell::new(moons),
            next_id: Cell::new(next_id),
            fail_writes: Cell::new(false),
        }
    }
}

impl MoonRepository for &FakeMoonRepo {
    fn create_moon(&self, moon: &NewMoon) -> RepoResult<Option<Moon>> {
        let mut moons = self.moons.borrow_mut();
        if self.fail_writes.get() || moons.iter().any(|stored| stored.name == moon.name) {
            return Ok(None);
        }
        let created = Moon {
            id: self.next_id.replace(self.next_id.get() + 1),
            name: moon.name.clone(),
            owner_id: moon.owner_id,
            image_data: moon.image_data.clone(),
        };
        moons.push(created.clone());
        Ok(Some(created))
    }

    fn moon_by_id(&self, id: i64) -> RepoResult<Option<Moon>> {
        Ok(self
            .moons
            .borrow()
            .iter()
            .find(|moon| moon.id == id)
            .cloned())
    }

    fn moon_by_name(&self, name: &str) -> RepoResult<Option<Moon>> {
        Ok(self
            .moons
            .borrow()
            .iter()
            .find(|moon| moon.name == name)
            .cloned())
    }

    fn all_moons(&self) -> RepoResult<Vec<Moon>> {
        Ok(self.moons.borrow().clone())
    }

    fn moons_by_planet(&self, owner_id: i64) -> RepoResult<Vec<Moon>> {
        Ok(self
            .moons
            .borrow()
            .iter()
            .filter(|moon| moon.owner_id == owner_id)
            .cloned()
            .collect())
    }

    fn update_moon(&self, moon: &Moon) -> RepoResult<Option<Moon>> {
        let mut moons = self.moons.borrow_mut();
        if self.fail_writes.get() {
            return Ok(None);
        }
        match moons.iter_mut().find(|stored| stored.id == moon.id) {
            Some(stored) => {
                *stored = moon.clone();
                Ok(Some(moon.clone()))
            }
            None => Ok(None),
        }
    }

    fn delete_moon_by_id(&self, id: i64) -> RepoResult<bool> {
        let mut moons = self.moons.borrow_mut();
        let before = moons.len();
        moons.retain(|moon| moon.id != id);
        Ok(moons.len() < before)
    }

    fn delete_moon_by_name(&self, name: &str) -> RepoResult<bool> {
        let mut moons = self.moons.borrow_mut();
        let before = moons.len();
        moons.retain(|moon| moon.name != name);
        Ok(moons.len() < before)
    }
}

fn stored_moon(id: i64, name: &str, owner_id: i64) -> Moon {
    Moon {
        id,
        name: name.to_string(),
        owner_id,
        image_data: None,
    }
}

#[test]
fn create_moon_with_thirty_char_name() {
    let repo = FakeMoonRepo::new();
    let service = MoonService::new(&repo);

    let created = service
        .create_moon(&NewMoon::new("MoonNameIsThirtyCharactersLong", 1))
        .unwrap();
    assert_eq!(created.name, "MoonNameIsThirtyCharactersLong");
}

#[test]
fn create_moon_with_one_char_name() {
    let repo = FakeMoonRepo::new();
    let service = MoonService::new(&repo);

    let created = service.create_moon(&NewMoon::new("M", 1)).unwrap();
    assert_eq!(created.name, "M");
}

#[test]
fn create_moon_with_empty_name() {
    let repo = FakeMoonRepo::new();
    let service = MoonService::new(&repo);

    let err = service.create_moon(&NewMoon::new("", 1)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Moon name must be between 1 and 30 characters"
    );
}

#[test]
fn create_moon_with_thirty_one_char_name() {
    let repo = FakeMoonRepo::new();
    let service = MoonService::new(&repo);

    let err = service
        .create_moon(&NewMoon::new("MoonNameThirtyOneCharactersLong", 1))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Moon name must be between 1 and 30 characters"
    );
}

#[test]
fn create_moon_with_existing_name() {
    let repo = FakeMoonRepo::with_moons(vec![stored_moon(1, "Luna", 1)]);
    let service = MoonService::new(&repo);

    let err = service.create_moon(&NewMoon::new("Luna", 2)).unwrap_err();
    assert_eq!(err.to_string(), "Moon name must be unique");
}

#[test]
fn create_moon_when_store_rejects() {
    let repo = FakeMoonRepo::new();
    repo.fail_writes.set(true);
    let service = MoonService::new(&repo);

    let err = service
        .create_moon(&NewMoon::new("Artemis", 1))
        .unwrap_err();
    assert_eq!(err.to_string(), "Could not create new moon");
}

#[test]
fn select_moon_by_id_and_by_name() {
    let luna = stored_moon(1, "Luna", 1);
    let repo = FakeMoonRepo::with_moons(vec![luna.clone()]);
    let service = MoonService::new(&repo);

    assert_eq!(service.select_moon(1).unwrap(), luna);
    assert_eq!(service.select_moon("Luna").unwrap(), luna);
}

#[test]
fn select_moon_with_unsupported_identifier() {
    let repo = FakeMoonRepo::with_moons(vec![stored_moon(1, "Luna", 1)]);
    let service = MoonService::new(&repo);

    let err = service.select_moon(0.5).unwrap_err();
    assert_eq!(err.to_string(), "Identifier must be an Integer or String");

    let err = service.select_moon(true).unwrap_err();
    assert_eq!(err.to_string(), "Identifier must be an Integer or String");
}

#[test]
fn select_moon_not_found() {
    let repo = FakeMoonRepo::new();
    let service = MoonService::new(&repo);

    let err = service.select_moon(3).unwrap_err();
    assert_eq!(err.to_string(), "Moon not found");
}

#[test]
fn select_all_moons_and_by_planet() {
    let repo = FakeMoonRepo::with_moons(vec![
        stored_moon(1, "Luna", 1),
        stored_moon(2, "Titan", 2),
    ]);
    let service = MoonService::new(&repo);

    assert_eq!(service.select_all_moons().unwrap().len(), 2);

    let by_planet = service.select_by_planet(2).unwrap();
    assert_eq!(by_planet.len(), 1);
    assert_eq!(by_planet[0].name, "Titan");

    assert!(service.select_by_planet(3).unwrap().is_empty());
}

#[test]
fn update_moon_renames_it() {
    let repo = FakeMoonRepo::with_moons(vec![stored_moon(1, "Luna", 1)]);
    let service = MoonService::new(&repo);

    let updated = service.update_moon(&stored_moon(1, "Artemis", 1)).unwrap();
    assert_eq!(updated.name, "Artemis");
    assert_eq!(service.select_moon("Artemis").unwrap().id, 1);
}

#[test]
fn update_missing_moon() {
    let repo = FakeMoonRepo::new();
    let service = MoonService::new(&repo);

    let err = service
        .update_moon(&stored_moon(3, "Artemis", 1))
        .unwrap_err();
    assert_eq!(err.to_string(), "Moon not found, could not update");
}

#[test]
fn update_moon_with_thirty_one_char_name() {
    let repo = FakeMoonRepo::with_moons(vec![stored_moon(1, "Luna", 1)]);
    let service = MoonService::new(&repo);

    let err = service
        .update_moon(&stored_moon(1, "MoonNameThirtyOneCharactersLong", 1))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Moon name must be between 1 and 30 characters, could not update"
    );
}

#[test]
fn update_moon_to_name_of_other_moon() {
    let repo = FakeMoonRepo::with_moons(vec![
        stored_moon(1, "Luna", 1),
        stored_moon(2, "Titan", 2),
    ]);
    let service = MoonService::new(&repo);

    let err = service.update_moon(&stored_moon(1, "Titan", 1)).unwrap_err();
    assert_eq!(err.to_string(), "Moon name must be unique, could not update");
}

#[test]
fn update_moon_keeping_own_name() {
    let mut luna = stored_moon(1, "Luna", 1);
    let repo = FakeMoonRepo::with_moons(vec![luna.clone()]);
    let service = MoonService::new(&repo);

    luna.owner_id = 2;
    let updated = service.update_moon(&luna).unwrap();
    assert_eq!(updated.owner_id, 2);
}

#[test]
fn update_moon_when_store_rejects() {
    let repo = FakeMoonRepo::with_moons(vec![stored_moon(1, "Luna", 1)]);
    repo.fail_writes.set(true);
    let service = MoonService::new(&repo);

    let err = service
        .update_moon(&stored_moon(1, "Artemis", 1))
        .unwrap_err();
    assert_eq!(err.to_string(), "Moon update failed, please try again");
}

#[test]
fn delete_moon_by_id_and_by_name() {
    let repo = FakeMoonRepo::with_moons(vec![
        stored_moon(1, "Luna", 1),
        stored_moon(2, "Titan", 2),
    ]);
    let service = MoonService::new(&repo);

    assert_eq!(service.delete_moon(1).unwrap(), "Moon deleted successfully");
    assert_eq!(
        service.delete_moon("Titan").unwrap(),
        "Moon deleted successfully"
    );
}

#[test]
fn delete_moon_with_unsupported_identifier() {
    let repo = FakeMoonRepo::with_moons(vec![stored_moon(1, "Luna", 1)]);
    let service = MoonService::new(&repo);

    let err = service.delete_moon(0.5).unwrap_err();
    assert_eq!(err.to_string(), "Identifier must be an Integer or String");
}

#[test]
fn delete_missing_moon() {
    let repo = FakeMoonRepo::new();
    let service = MoonService::new(&repo);

    let err = service.delete_moon("Luna").unwrap_err();
    assert_eq!(err.to_string(), "Moon delete failed, please try again");
}
