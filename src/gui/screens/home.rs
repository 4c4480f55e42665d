use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, container, row, text},
};

use crate::{
    core::session::{AppState, Page},
    gui::screens::{Request, Screen, ScreenMessage},
    models::JobCategory,
};

#[derive(Debug, Clone)]
pub struct HomeScreen;

#[derive(Debug, Clone)]
pub enum HomeMessage {}

impl Screen for HomeScreen {
    type Message = HomeMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let (primary, secondary) = match state.user() {
            Some(_) => (("Go to dashboard", Page::Dashboard), None),
            None => (("Get started", Page::Register), Some(("Login", Page::Login))),
        };

        let mut actions = row![
            button(text(primary.0))
                .on_press(ScreenMessage::ParentMessage(Request::Navigate(primary.1)))
        ]
        .spacing(20);
        if let Some((label, page)) = secondary {
            actions = actions.push(
                button(text(label))
                    .style(button::secondary)
                    .on_press(ScreenMessage::ParentMessage(Request::Navigate(page))),
            );
        }

        let categories = JobCategory::ALL
            .iter()
            .fold(column![].spacing(5).align_x(Center), |col, category| {
                col.push(text(category.label()))
            });

        let content = column![
            text("WOIYA").size(48),
            text("Find trusted help for everyday jobs, or earn by offering your skills."),
            actions,
            text("Popular categories").size(20),
            categories,
        ]
        .spacing(20)
        .padding(20)
        .align_x(Center);

        container(content)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn update(&mut self, message: Self::Message, _state: &AppState) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}
