use derive_more::{Display, From};
use getset::Getters;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unique identifier that specifies a particular [`Vehicle`].
///
/// Persisted as a plain string so that ids written by older versions of the store, which are
/// not guaranteed to be UUIDs, stay valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(String);

impl VehicleId {
    /// Allocate a fresh, random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VehicleId {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

/// The user editable attributes of a [`Vehicle`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VehicleFields {
    pub make: String,
    pub model: String,
    pub variant: String,
    pub vehicle_name: String,
}

impl VehicleFields {
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        variant: impl Into<String>,
        vehicle_name: impl Into<String>,
    ) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            variant: variant.into(),
            vehicle_name: vehicle_name.into(),
        }
    }

    /// Whether the required fields (`make` and `model`) are present.
    pub fn is_complete(&self) -> bool {
        !self.make.is_empty() && !self.model.is_empty()
    }
}

/// A single vehicle record, exactly as it is stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct Vehicle {
    id: VehicleId,
    make: String,
    model: String,
    variant: String,
    vehicle_name: String,
}

impl Vehicle {
    /// Create a new record with a freshly generated [`VehicleId`].
    pub(crate) fn new(fields: VehicleFields) -> Self {
        Self::with_id(VehicleId::generate(), fields)
    }

    pub(crate) fn with_id(id: VehicleId, fields: VehicleFields) -> Self {
        let VehicleFields {
            make,
            model,
            variant,
            vehicle_name,
        } = fields;

        Self {
            id,
            make,
            model,
            variant,
            vehicle_name,
        }
    }

    /// Overwrite every editable field. The id is left untouched.
    pub(crate) fn apply(&mut self, fields: VehicleFields) {
        self.make = fields.make;
        self.model = fields.model;
        self.variant = fields.variant;
        self.vehicle_name = fields.vehicle_name;
    }

    pub fn fields(&self) -> VehicleFields {
        VehicleFields {
            make: self.make.clone(),
            model: self.model.clone(),
            variant: self.variant.clone(),
            vehicle_name: self.vehicle_name.clone(),
        }
    }
}
