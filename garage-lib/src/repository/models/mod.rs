//! Shapes of the records persisted in the vehicle store.

mod legacy;
mod vehicle;

pub(crate) use legacy::LegacyVehicle;
pub use vehicle::{Vehicle, VehicleFields, VehicleId};
