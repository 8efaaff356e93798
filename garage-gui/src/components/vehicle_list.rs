use garage_lib::{Repository, repository::Vehicle};
use iced::{
    Alignment, Element, Length, Task,
    widget::{Column, button, column, container, row, scrollable, text},
};

use crate::components::blocking;

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(Result<Vec<Vehicle>, String>),
    EditPressed(Vehicle),
    DeletePressed(Vehicle),
}

/// Action used for communicating with the parent component
#[derive(Debug)]
pub enum Action {
    None,
    Edit(Vehicle),
    Delete(Vehicle),
}

pub enum State {
    Loading,
    Error(String),
    Loaded(Vec<Vehicle>),
}

pub struct VehicleList {
    repo: Repository,
    state: State,
}

impl VehicleList {
    pub fn new(repo: Repository) -> (Self, Task<Message>) {
        let task = list_vehicles(&repo);

        (
            Self {
                repo,
                state: State::Loading,
            },
            task,
        )
    }

    pub fn refresh(&self) -> Task<Message> {
        list_vehicles(&self.repo)
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::Loaded(Ok(vehicles)) => {
                self.state = State::Loaded(vehicles);
                Action::None
            }
            Message::Loaded(Err(e)) => {
                self.state = State::Error(e);
                Action::None
            }
            Message::EditPressed(vehicle) => Action::Edit(vehicle),
            Message::DeletePressed(vehicle) => Action::Delete(vehicle),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let content: Element<'_, Message> = match &self.state {
            State::Loading => text("Loading vehicles...").into(),
            State::Error(e) => text(e).style(text::danger).into(),
            State::Loaded(vehicles) if vehicles.is_empty() => {
                text("No vehicles added yet.").into()
            }
            State::Loaded(vehicles) => scrollable(
                Column::with_children(vehicles.iter().map(vehicle_row)).spacing(6),
            )
            .width(Length::Fill)
            .into(),
        };

        column![text("Vehicle List").size(22), content]
            .spacing(10)
            .into()
    }
}

fn list_vehicles(repo: &Repository) -> Task<Message> {
    Task::perform(blocking(repo, Repository::vehicles), Message::Loaded)
}

// Generate a row that represents a Vehicle
fn vehicle_row<'a>(vehicle: &Vehicle) -> Element<'a, Message> {
    container(
        row![
            attribute("Make", vehicle.make()),
            attribute("Model", vehicle.model()),
            attribute("Variant", vehicle.variant()),
            attribute("Vehicle Name", vehicle.vehicle_name()),
            button("Edit").on_press(Message::EditPressed(vehicle.clone())),
            button("Delete")
                .style(button::danger)
                .on_press(Message::DeletePressed(vehicle.clone())),
        ]
        .spacing(10)
        .align_y(Alignment::Center)
        .padding(12),
    )
    .width(Length::Fill)
    .style(container::bordered_box)
    .into()
}

fn attribute<'a>(label: &str, value: &str) -> Element<'a, Message> {
    text(format!("{label}: {value}"))
        .width(Length::FillPortion(2))
        .into()
}
