use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, container, row, text, text_input},
};

use crate::{
    core::session::{AppState, Page},
    gui::screens::{Request, Screen, ScreenMessage},
};

#[derive(Debug, Clone, Default)]
pub struct LoginScreen {
    email: String,
    password: String,
}

#[derive(Debug, Clone)]
pub enum LoginMessage {
    EmailChanged(String),
    PasswordChanged(String),
}

impl LoginScreen {
    fn submit(&self, state: &AppState) -> Option<ScreenMessage<Self>> {
        (!state.restoring).then(|| {
            ScreenMessage::ParentMessage(Request::Login {
                email: self.email.clone(),
                password: self.password.clone(),
            })
        })
    }
}

impl Screen for LoginScreen {
    type Message = LoginMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let submit = self.submit(state);
        let form = column![
            text("Login").size(32),
            text_input("Email", &self.email)
                .on_input(|s| ScreenMessage::ScreenMessage(LoginMessage::EmailChanged(s))),
            text_input("Password", &self.password)
                .secure(true)
                .on_input(|s| ScreenMessage::ScreenMessage(LoginMessage::PasswordChanged(s)))
                .on_submit_maybe(submit.clone()),
            button(text(if state.restoring {
                "Checking session..."
            } else {
                "Login"
            }))
            .width(Length::Fill)
            .on_press_maybe(submit),
            row![
                text("No account yet?"),
                button("Register")
                    .style(button::text)
                    .on_press(ScreenMessage::ParentMessage(Request::Navigate(Page::Register))),
            ]
            .align_y(Center),
        ]
        .spacing(15)
        .max_width(400);

        container(form).center_x(Length::Fill).into()
    }

    fn update(&mut self, message: Self::Message, _state: &AppState) -> Task<ScreenMessage<Self>> {
        match message {
            LoginMessage::EmailChanged(email) => self.email = email,
            LoginMessage::PasswordChanged(password) => self.password = password,
        }
        Task::none()
    }
}
