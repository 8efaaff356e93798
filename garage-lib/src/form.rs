//! Pending user input for editing vehicles through a form.
//!
//! [`FormState`] is owned by whichever front-end renders the form, for as long as that
//! session lasts. It starts empty, switches into editing mode with
//! [`FormState::begin_edit`], and returns to adding mode via [`FormState::reset`] after a
//! successful submission.

use strum::{Display, EnumIter};

use crate::{
    Repository, Result,
    repository::{Vehicle, VehicleFields, VehicleId},
};

/// One of the editable fields of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Field {
    Make,
    Model,
    Variant,
    #[strum(to_string = "Vehicle Name")]
    VehicleName,
}

impl Field {
    /// Whether a submission is refused while this field is empty.
    pub fn is_required(&self) -> bool {
        matches!(self, Field::Make | Field::Model)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Adding,
    Editing(VehicleId),
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormState {
    fields: VehicleFields,
    mode: Mode,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Make => &self.fields.make,
            Field::Model => &self.fields.model,
            Field::Variant => &self.fields.variant,
            Field::VehicleName => &self.fields.vehicle_name,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Make => self.fields.make = value,
            Field::Model => self.fields.model = value,
            Field::Variant => self.fields.variant = value,
            Field::VehicleName => self.fields.vehicle_name = value,
        }
    }

    pub fn fields(&self) -> &VehicleFields {
        &self.fields
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, Mode::Editing(_))
    }

    /// The id of the vehicle being edited, if any.
    pub fn edit_id(&self) -> Option<&VehicleId> {
        match &self.mode {
            Mode::Editing(id) => Some(id),
            Mode::Adding => None,
        }
    }

    /// Load an existing [`Vehicle`] for editing.
    pub fn begin_edit(&mut self, vehicle: &Vehicle) {
        self.mode = Mode::Editing(vehicle.id().clone());
        self.fields = vehicle.fields();
    }

    /// Clear every field and return to adding mode.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The operation a submit would perform, or [`None`] while a required field is empty.
    pub fn submission(&self) -> Option<Submission> {
        if !self.fields.is_complete() {
            return None;
        }

        let fields = self.fields.clone();
        Some(match &self.mode {
            Mode::Adding => Submission::Add(fields),
            Mode::Editing(id) => Submission::Update {
                id: id.clone(),
                fields,
            },
        })
    }
}

/// A validated form submission, ready to be applied to a [`Repository`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Add(VehicleFields),
    Update { id: VehicleId, fields: VehicleFields },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Added,
    Updated,
}

impl Submission {
    pub fn apply(self, repo: &Repository) -> Result<Outcome> {
        match self {
            Submission::Add(fields) => {
                repo.add_vehicle(fields)?;
                Ok(Outcome::Added)
            }
            Submission::Update { id, fields } => {
                repo.update_vehicle(&id, fields)?;
                Ok(Outcome::Updated)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use strum::IntoEnumIterator;

    use super::*;

    fn fill(form: &mut FormState, make: &str, model: &str, variant: &str, name: &str) {
        form.set(Field::Make, make.into());
        form.set(Field::Model, model.into());
        form.set(Field::Variant, variant.into());
        form.set(Field::VehicleName, name.into());
    }

    #[test]
    fn test_new_is_empty() {
        let form = FormState::new();

        assert!(Field::iter().all(|f| form.get(f).is_empty()));
        assert!(!form.is_editing());
        assert_eq!(form.edit_id(), None);
        assert_eq!(form.submission(), None);
    }

    #[test]
    fn test_field_labels() {
        let labels: Vec<String> = Field::iter().map(|f| f.to_string()).collect();

        assert_eq!(labels, ["Make", "Model", "Variant", "Vehicle Name"]);
    }

    #[test]
    fn test_required_fields() {
        let mut form = FormState::new();

        fill(&mut form, "Toyota", "", "LE", "MyCar");
        assert_eq!(form.submission(), None);

        fill(&mut form, "", "Corolla", "LE", "MyCar");
        assert_eq!(form.submission(), None);

        fill(&mut form, "Toyota", "Corolla", "", "");
        assert_eq!(
            form.submission(),
            Some(Submission::Add(VehicleFields::new("Toyota", "Corolla", "", "")))
        );
    }

    #[test]
    fn test_begin_edit_and_reset() {
        let (_dir, repo) = Repository::mock();
        let vehicle = repo
            .add_vehicle(VehicleFields::new("Toyota", "Corolla", "LE", "MyCar"))
            .unwrap();

        let mut form = FormState::new();
        form.begin_edit(&vehicle);

        assert!(form.is_editing());
        assert_eq!(form.edit_id(), Some(vehicle.id()));
        assert_eq!(form.get(Field::Make), "Toyota");
        assert_eq!(form.get(Field::VehicleName), "MyCar");

        form.reset();

        assert_eq!(form, FormState::new());
    }

    #[test]
    fn test_add_submission() {
        let (_dir, repo) = Repository::mock();

        let mut form = FormState::new();
        fill(&mut form, "Toyota", "Corolla", "LE", "MyCar");

        let outcome = form.submission().unwrap().apply(&repo).unwrap();
        form.reset();

        assert_eq!(outcome, Outcome::Added);
        assert_eq!(form, FormState::new());

        let vehicles = repo.vehicles().unwrap();
        assert_eq!(vehicles.len(), 1);
        assert_eq!(
            vehicles.first().unwrap().fields(),
            VehicleFields::new("Toyota", "Corolla", "LE", "MyCar")
        );
    }

    #[test]
    fn test_update_submission() {
        let (_dir, repo) = Repository::mock();
        let vehicle = repo
            .add_vehicle(VehicleFields::new("Toyota", "Corolla", "LE", "MyCar"))
            .unwrap();

        let mut form = FormState::new();
        form.begin_edit(&vehicle);
        fill(&mut form, "Honda", "Civic", "", "");

        let outcome = form.submission().unwrap().apply(&repo).unwrap();

        assert_eq!(outcome, Outcome::Updated);

        let vehicles = repo.vehicles().unwrap();
        assert_eq!(vehicles.len(), 1);
        let updated = vehicles.first().unwrap();
        assert_eq!(updated.id(), vehicle.id());
        assert_eq!(updated.fields(), VehicleFields::new("Honda", "Civic", "", ""));
    }

    #[test]
    fn test_edit_of_deleted_vehicle() {
        let (_dir, repo) = Repository::mock();
        let vehicle = repo
            .add_vehicle(VehicleFields::new("Toyota", "Corolla", "", ""))
            .unwrap();

        let mut form = FormState::new();
        form.begin_edit(&vehicle);
        repo.delete_vehicle(vehicle.id()).unwrap();

        // Submitting an edit for a vanished record is a silent no-op
        let outcome = form.submission().unwrap().apply(&repo).unwrap();

        assert_eq!(outcome, Outcome::Updated);
        assert!(repo.vehicles().unwrap().is_empty());
    }
}
