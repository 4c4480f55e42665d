use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, container, pick_list, row, text, text_input},
};

use crate::{
    core::session::{AppState, Page, RegisterForm},
    gui::screens::{Request, Screen, ScreenMessage},
    models::Role,
};

#[derive(Debug, Clone, Default)]
pub struct RegisterScreen {
    form: RegisterForm,
}

#[derive(Debug, Clone)]
pub enum RegisterMessage {
    FullName(String),
    Email(String),
    Phone(String),
    Password(String),
    Role(Role),
}

fn edit(message: fn(String) -> RegisterMessage) -> impl Fn(String) -> ScreenMessage<RegisterScreen> {
    move |value| ScreenMessage::ScreenMessage(message(value))
}

impl Screen for RegisterScreen {
    type Message = RegisterMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let submit = (!state.restoring)
            .then(|| ScreenMessage::ParentMessage(Request::Register(self.form.clone())));

        let form = column![
            text("Create an account").size(32),
            text_input("Full name", &self.form.full_name).on_input(edit(RegisterMessage::FullName)),
            text_input("Email", &self.form.email).on_input(edit(RegisterMessage::Email)),
            text_input("Phone", &self.form.phone).on_input(edit(RegisterMessage::Phone)),
            text_input("Password", &self.form.password)
                .secure(true)
                .on_input(edit(RegisterMessage::Password)),
            row![
                text("I am a"),
                pick_list(&Role::ALL[..], Some(self.form.role), |role| {
                    ScreenMessage::ScreenMessage(RegisterMessage::Role(role))
                }),
            ]
            .spacing(10)
            .align_y(Center),
            button("Register").width(Length::Fill).on_press_maybe(submit),
            row![
                text("Already registered?"),
                button("Login")
                    .style(button::text)
                    .on_press(ScreenMessage::ParentMessage(Request::Navigate(Page::Login))),
            ]
            .align_y(Center),
        ]
        .spacing(15)
        .max_width(400);

        container(form).center_x(Length::Fill).into()
    }

    fn update(&mut self, message: Self::Message, _state: &AppState) -> Task<ScreenMessage<Self>> {
        match message {
            RegisterMessage::FullName(value) => self.form.full_name = value,
            RegisterMessage::Email(value) => self.form.email = value,
            RegisterMessage::Phone(value) => self.form.phone = value,
            RegisterMessage::Password(value) => self.form.password = value,
            RegisterMessage::Role(role) => self.form.role = role,
        }
        Task::none()
    }
}
