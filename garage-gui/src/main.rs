use garage_lib::{Repository, form::Outcome};
use iced::{
    Element,
    Length::Fill,
    Task, Theme, application,
    widget::{button, column, row, rule, space, text},
};
use tracing::{Level, error, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::{
    components::{
        blocking,
        vehicle_form::{self, VehicleForm},
        vehicle_list::{self, VehicleList},
    },
    config::GuiConfig,
};

pub mod components;
pub mod config;

fn main() -> iced::Result {
    // Human friendly panicking in release mode
    human_panic::setup_panic!();

    // Logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::TRACE)
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    let repo = match Repository::new() {
        Ok(repo) => repo,
        Err(e) => {
            error!("Failed to open the vehicle store: {e}");
            std::process::exit(1);
        }
    };

    application(move || App::new(repo.clone()), App::update, App::view)
        .theme(App::theme)
        .title(App::title)
        .run()
}

#[derive(Debug, Clone)]
enum Message {
    ThemeToggled,
    Submitted(Result<Outcome, String>),
    Deleted(Result<(), String>),
    // Components
    VehicleForm(vehicle_form::Message),
    VehicleList(vehicle_list::Message),
}

/// Feedback shown above the form after an operation.
enum Notice {
    Success(&'static str),
    Error(String),
}

struct App {
    repo: Repository,
    cfg: GuiConfig,
    title: String,
    notice: Option<Notice>,
    // Components
    vehicle_form: VehicleForm,
    vehicle_list: VehicleList,
}

impl App {
    pub fn new(repo: Repository) -> (Self, Task<Message>) {
        let (vehicle_list, vehicle_list_task) = VehicleList::new(repo.clone());

        (
            Self {
                repo,
                cfg: GuiConfig::load(),
                title: "Vehicle Management Dashboard".into(),
                notice: None,
                vehicle_form: VehicleForm::new(),
                vehicle_list,
            },
            vehicle_list_task.map(Message::VehicleList),
        )
    }

    // Update application state based on messages passed by view()
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ThemeToggled => {
                self.cfg.theme = self.cfg.theme.toggled();
                if let Err(e) = self.cfg.save() {
                    warn!("Failed to save GUI configuration: {e}");
                }
                Task::none()
            }
            Message::Submitted(Ok(outcome)) => {
                self.vehicle_form.complete(true);
                self.notice = Some(Notice::Success(match outcome {
                    Outcome::Added => "Vehicle added successfully!",
                    Outcome::Updated => "Vehicle updated successfully!",
                }));
                self.vehicle_list.refresh().map(Message::VehicleList)
            }
            Message::Deleted(Ok(())) => {
                self.notice = Some(Notice::Success("Vehicle deleted successfully!"));
                self.vehicle_list.refresh().map(Message::VehicleList)
            }
            Message::Submitted(Err(e)) => {
                error!("{e}");
                self.vehicle_form.complete(false);
                self.notice = Some(Notice::Error(e));
                Task::none()
            }
            Message::Deleted(Err(e)) => {
                error!("{e}");
                self.notice = Some(Notice::Error(e));
                Task::none()
            }
            // Redirect messages to relevant child components
            Message::VehicleForm(message) => match self.vehicle_form.update(message) {
                vehicle_form::Action::None => Task::none(),
                vehicle_form::Action::Submit(submission) => Task::perform(
                    blocking(&self.repo, move |repo| submission.apply(repo)),
                    Message::Submitted,
                ),
            },
            Message::VehicleList(message) => match self.vehicle_list.update(message) {
                vehicle_list::Action::None => Task::none(),
                vehicle_list::Action::Edit(vehicle) => {
                    self.vehicle_form.edit(&vehicle);
                    self.notice = None;
                    Task::none()
                }
                vehicle_list::Action::Delete(vehicle) => {
                    let id = vehicle.id().clone();
                    Task::perform(
                        blocking(&self.repo, move |repo| repo.delete_vehicle(&id)),
                        Message::Deleted,
                    )
                }
            },
        }
    }

    // Render the application and pass along messages from components to update()
    pub fn view(&self) -> Element<'_, Message> {
        column![
            // Top bar
            row![
                text(&self.title).size(28),
                space::horizontal(),
                button(text(format!("{} theme", self.cfg.theme.toggled())))
                    .style(button::secondary)
                    .on_press(Message::ThemeToggled),
            ],
            self.notice.as_ref().map(notice),
            // Form
            self.vehicle_form.view().map(Message::VehicleForm),
            rule::horizontal(1),
            // Vehicle list
            self.vehicle_list.view().map(Message::VehicleList),
        ]
        .spacing(16)
        .padding(20)
        .height(Fill)
        .into()
    }

    pub fn title(&self) -> String {
        self.title.clone()
    }

    pub fn theme(&self) -> Theme {
        self.cfg.theme()
    }
}

fn notice(notice: &Notice) -> Element<'_, Message> {
    match notice {
        Notice::Success(msg) => text(*msg).style(text::success).into(),
        Notice::Error(e) => text(e).style(text::danger).into(),
    }
}
