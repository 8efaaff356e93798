use garage_lib::{
    form::{Field, FormState, Submission},
    repository::Vehicle,
};
use iced::{
    Alignment, Element, Length,
    widget::{Column, button, column, row, space, text, text_input},
};
use strum::IntoEnumIterator;

#[derive(Debug, Clone)]
pub enum Message {
    FieldChanged(Field, String),
    SubmitPressed,
}

/// Action used for communicating with the parent component
#[derive(Debug)]
pub enum Action {
    None,
    Submit(Submission),
}

#[derive(Default)]
pub struct VehicleForm {
    state: FormState,
    /// Set while a submission is being applied. The form ignores input until it completes.
    submitting: bool,
}

impl VehicleForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an existing [`Vehicle`] for editing. Ignored while a submission is in flight.
    pub fn edit(&mut self, vehicle: &Vehicle) {
        if !self.submitting {
            self.state.begin_edit(vehicle);
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Finish the in-flight submission, resetting the form if it succeeded.
    pub fn complete(&mut self, succeeded: bool) {
        self.submitting = false;
        if succeeded {
            self.state.reset();
        }
    }

    pub fn update(&mut self, message: Message) -> Action {
        if self.submitting {
            return Action::None;
        }

        match message {
            Message::FieldChanged(field, value) => {
                self.state.set(field, value);
                Action::None
            }
            Message::SubmitPressed => match self.state.submission() {
                Some(submission) => {
                    self.submitting = true;
                    Action::Submit(submission)
                }
                None => Action::None,
            },
        }
    }

    fn submit_message(&self) -> Option<Message> {
        if self.submitting {
            return None;
        }

        self.state.submission().map(|_| Message::SubmitPressed)
    }

    pub fn view(&self) -> Element<'_, Message> {
        let inputs = Column::with_children(Field::iter().map(|field| self.field_row(field)))
            .spacing(8);

        let label = if self.is_submitting() {
            "Saving..."
        } else if self.state.is_editing() {
            "Update Vehicle"
        } else {
            "Add Vehicle"
        };

        column![
            inputs,
            row![
                space::horizontal(),
                button(text(label))
                    .style(button::primary)
                    .on_press_maybe(self.submit_message()),
            ],
        ]
        .spacing(12)
        .into()
    }

    fn field_row(&self, field: Field) -> Element<'_, Message> {
        let label = if field.is_required() {
            format!("{field} *")
        } else {
            field.to_string()
        };

        let input = text_input(&field.to_string(), self.state.get(field));

        row![
            text(label).width(Length::Fixed(120.0)),
            if self.submitting {
                input
            } else {
                input.on_input(move |value| Message::FieldChanged(field, value))
            },
        ]
        .spacing(10)
        .align_y(Alignment::Center)
        .into()
    }
}
