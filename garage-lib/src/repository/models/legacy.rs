use serde::Deserialize;

use crate::repository::models::{Vehicle, VehicleFields, VehicleId};

/// A vehicle entry as it may appear in older stores, where any field can be missing.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub(crate) struct LegacyVehicle {
    id: Option<VehicleId>,
    make: Option<String>,
    model: Option<String>,
    variant: Option<String>,
    vehicle_name: Option<String>,
}

impl LegacyVehicle {
    /// Whether this entry already has every field of the current shape.
    pub fn is_current(&self) -> bool {
        self.id.is_some()
            && self.make.is_some()
            && self.model.is_some()
            && self.variant.is_some()
            && self.vehicle_name.is_some()
    }

    /// Upgrade to the current shape. Missing fields default to an empty string and a missing
    /// id is freshly generated.
    pub fn migrate(self) -> Vehicle {
        let fields = VehicleFields {
            make: self.make.unwrap_or_default(),
            model: self.model.unwrap_or_default(),
            variant: self.variant.unwrap_or_default(),
            vehicle_name: self.vehicle_name.unwrap_or_default(),
        };

        Vehicle::with_id(self.id.unwrap_or_else(VehicleId::generate), fields)
    }
}
