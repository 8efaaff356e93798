use std::path::PathBuf;

use tracing::debug;

use crate::{Result, repository::config::CoreConfig};

mod models;
mod store;

pub mod config;

pub use models::{Vehicle, VehicleFields, VehicleId};
pub use store::Store;

/// Central access point for all persistent data.
///
/// Every operation loads the full collection from the [`Store`], mutates it, and writes the
/// full collection back.
#[derive(Clone, Debug)]
pub struct Repository {
    store: Store,
}

impl Repository {
    /// Open the store configured in [`CoreConfig`].
    pub fn new() -> Result<Self> {
        let cfg = CoreConfig::load()?;
        Ok(Self::open(cfg.store_path()?))
    }

    /// Open the store at `path`, bypassing the configuration.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            store: Store::open(path),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn vehicles(&self) -> Result<Vec<Vehicle>> {
        self.store.load()
    }

    pub fn add_vehicle(&self, fields: VehicleFields) -> Result<Vehicle> {
        let mut vehicles = self.store.load()?;

        let vehicle = Vehicle::new(fields);
        vehicles.push(vehicle.clone());
        self.store.save(&vehicles)?;

        debug!("Added vehicle: {}", vehicle.id());

        Ok(vehicle)
    }

    /// Overwrite the editable fields of the vehicle identified by `id`. Nothing changes if no
    /// such vehicle exists.
    pub fn update_vehicle(&self, id: &VehicleId, fields: VehicleFields) -> Result<()> {
        let mut vehicles = self.store.load()?;

        match vehicles.iter_mut().find(|v| v.id() == id) {
            Some(vehicle) => {
                vehicle.apply(fields);
                debug!("Updated vehicle: {id}");
            }
            None => debug!("No vehicle to update: {id}"),
        }

        self.store.save(&vehicles)
    }

    /// Remove every vehicle identified by `id`. Nothing changes if no such vehicle exists.
    pub fn delete_vehicle(&self, id: &VehicleId) -> Result<()> {
        let mut vehicles = self.store.load()?;

        let before = vehicles.len();
        vehicles.retain(|v| v.id() != id);
        debug!("Deleted {} vehicle(s) with id {id}", before - vehicles.len());

        self.store.save(&vehicles)
    }

    #[cfg(test)]
    /// Return a [`Repository`] backed by a store inside a fresh temporary directory. The
    /// directory is removed when the returned guard is dropped.
    pub(crate) fn mock() -> (tempfile::TempDir, Self) {
        let dir = tempfile::tempdir().unwrap();
        let repo = Self::open(dir.path().join("vehicles.json"));
        (dir, repo)
    }
}

#[cfg(test)]
mod test {
    use std::fs;

    use super::*;

    #[test]
    fn test_add() {
        let (_dir, repo) = Repository::mock();

        let vehicle = repo
            .add_vehicle(VehicleFields::new("Toyota", "Corolla", "LE", "MyCar"))
            .unwrap();

        let vehicles = repo.vehicles().unwrap();

        assert_eq!(vehicles.len(), 1);
        let stored = vehicles.first().unwrap();
        assert_eq!(stored, &vehicle);
        assert_eq!(stored.make(), "Toyota");
        assert_eq!(stored.model(), "Corolla");
        assert_eq!(stored.variant(), "LE");
        assert_eq!(stored.vehicle_name(), "MyCar");
    }

    #[test]
    fn test_add_unique_ids() {
        let (_dir, repo) = Repository::mock();

        let first = repo
            .add_vehicle(VehicleFields::new("Toyota", "Corolla", "", ""))
            .unwrap();
        let second = repo
            .add_vehicle(VehicleFields::new("Toyota", "Corolla", "", ""))
            .unwrap();

        let vehicles = repo.vehicles().unwrap();

        assert_ne!(first.id(), second.id());
        assert_eq!(vehicles, vec![first, second]);
    }

    #[test]
    fn test_update() {
        let (_dir, repo) = Repository::mock();

        let target = repo
            .add_vehicle(VehicleFields::new("Toyota", "Corolla", "LE", "MyCar"))
            .unwrap();
        let other = repo
            .add_vehicle(VehicleFields::new("Ford", "Focus", "ST", "Blue"))
            .unwrap();

        repo.update_vehicle(target.id(), VehicleFields::new("Honda", "Civic", "", ""))
            .unwrap();

        let vehicles = repo.vehicles().unwrap();

        assert_eq!(vehicles.len(), 2);
        let updated = vehicles.first().unwrap();
        assert_eq!(updated.id(), target.id());
        assert_eq!(updated.fields(), VehicleFields::new("Honda", "Civic", "", ""));
        assert_eq!(vehicles.last().unwrap(), &other);
    }

    #[test]
    fn test_update_unknown() {
        let (_dir, repo) = Repository::mock();

        repo.add_vehicle(VehicleFields::new("Toyota", "Corolla", "LE", "MyCar"))
            .unwrap();
        let before = repo.vehicles().unwrap();

        repo.update_vehicle(
            &VehicleId::from("missing"),
            VehicleFields::new("Honda", "Civic", "", ""),
        )
        .unwrap();

        assert_eq!(repo.vehicles().unwrap(), before);
    }

    #[test]
    fn test_delete() {
        let (_dir, repo) = Repository::mock();

        let a = repo
            .add_vehicle(VehicleFields::new("Toyota", "Corolla", "", ""))
            .unwrap();
        let b = repo
            .add_vehicle(VehicleFields::new("Honda", "Civic", "", ""))
            .unwrap();
        let c = repo
            .add_vehicle(VehicleFields::new("Ford", "Focus", "", ""))
            .unwrap();

        repo.delete_vehicle(a.id()).unwrap();
        assert_eq!(repo.vehicles().unwrap(), vec![b.clone(), c.clone()]);

        repo.delete_vehicle(&VehicleId::from("missing")).unwrap();
        assert_eq!(repo.vehicles().unwrap(), vec![b, c]);
    }

    #[test]
    fn test_delete_duplicate_ids() {
        let (_dir, repo) = Repository::mock();

        fs::write(
            repo.store().path(),
            r#"[
                {"id": "dup", "make": "Toyota", "model": "Corolla"},
                {"id": "other", "make": "Honda", "model": "Civic"},
                {"id": "dup", "make": "Ford", "model": "Focus"}
            ]"#,
        )
        .unwrap();

        repo.delete_vehicle(&VehicleId::from("dup")).unwrap();

        let vehicles = repo.vehicles().unwrap();
        assert_eq!(vehicles.len(), 1);
        assert_eq!(vehicles.first().unwrap().id(), &VehicleId::from("other"));
    }

    #[test]
    fn test_operations_on_legacy_store() {
        let (_dir, repo) = Repository::mock();

        fs::write(repo.store().path(), r#"[{"make": "Toyota", "model": "Corolla"}]"#).unwrap();

        let added = repo
            .add_vehicle(VehicleFields::new("Honda", "Civic", "", ""))
            .unwrap();

        let vehicles = repo.vehicles().unwrap();
        assert_eq!(vehicles.len(), 2);
        assert_eq!(vehicles.first().unwrap().variant(), "");
        assert_eq!(vehicles.last().unwrap(), &added);
    }
}
