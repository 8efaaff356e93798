use clap::{Args, Subcommand};
use colored::Colorize;
use garage_lib::{
    Repository,
    repository::{VehicleFields, VehicleId},
};

use crate::CliError;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List vehicles
    List,
    /// Add a new vehicle
    Add(FieldArgs),
    /// Overwrite the fields of an existing vehicle
    Update {
        id: String,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Delete a vehicle
    Delete { id: String },
}

#[derive(Args, Debug, Clone)]
pub struct FieldArgs {
    make: String,
    model: String,
    #[arg(long, default_value = "")]
    variant: String,
    /// A human friendly name for the vehicle
    #[arg(short = 'n', long = "name", default_value = "")]
    vehicle_name: String,
}

impl FieldArgs {
    fn into_fields(self) -> Result<VehicleFields, CliError> {
        let fields = VehicleFields::new(self.make, self.model, self.variant, self.vehicle_name);

        if fields.is_complete() {
            Ok(fields)
        } else {
            Err(CliError::Usage("make and model are required".into()))
        }
    }
}

pub fn handle(repo: &Repository, cmd: Command) -> Result<(), CliError> {
    match cmd {
        Command::List => {
            let vehicles = repo.vehicles()?;
            if vehicles.is_empty() {
                println!("No vehicles added yet.");
            }
            for vehicle in vehicles {
                println!(
                    "{} {} {}",
                    vehicle.id().to_string().dimmed(),
                    vehicle.make().bold(),
                    vehicle.model().bold()
                );
                println!(
                    "    {} {}  {} {}",
                    "Variant:".cyan(),
                    vehicle.variant(),
                    "Vehicle Name:".cyan(),
                    vehicle.vehicle_name()
                );
            }
        }
        Command::Add(args) => {
            let vehicle = repo.add_vehicle(args.into_fields()?)?;
            println!("{}", vehicle.id());
        }
        Command::Update { id, fields } => {
            repo.update_vehicle(&VehicleId::from(id), fields.into_fields()?)?;
        }
        Command::Delete { id } => {
            repo.delete_vehicle(&VehicleId::from(id))?;
        }
    }

    Ok(())
}
