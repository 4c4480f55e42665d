use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, pick_list, row, scrollable, text, text_input},
};

use crate::{
    core::session::{AppState, JobForm, Page},
    gui::screens::{Request, Screen, ScreenMessage},
    models::JobCategory,
};

#[derive(Debug, Clone, Default)]
pub struct CreateJobScreen {
    form: JobForm,
}

#[derive(Debug, Clone)]
pub enum CreateJobMessage {
    Title(String),
    Description(String),
    Category(JobCategory),
    BudgetMin(String),
    BudgetMax(String),
    Address(String),
    Deadline(String),
    Requirement(usize, String),
    AddRequirement,
    RemoveRequirement(usize),
}

fn edit(message: fn(String) -> CreateJobMessage) -> impl Fn(String) -> ScreenMessage<CreateJobScreen> {
    move |value| ScreenMessage::ScreenMessage(message(value))
}

impl CreateJobScreen {
    fn requirements(&self) -> Element<'_, ScreenMessage<Self>> {
        let rows = self
            .form
            .requirements
            .iter()
            .enumerate()
            .fold(column![].spacing(5), |col, (index, requirement)| {
                let remove = (self.form.requirements.len() > 1).then_some(
                    ScreenMessage::ScreenMessage(CreateJobMessage::RemoveRequirement(index)),
                );
                col.push(
                    row![
                        text_input("Requirement", requirement).on_input(move |s| {
                            ScreenMessage::ScreenMessage(CreateJobMessage::Requirement(index, s))
                        }),
                        button("Remove")
                            .style(button::danger)
                            .on_press_maybe(remove),
                    ]
                    .spacing(10),
                )
            });
        column![
            text("Requirements"),
            rows,
            button("Add requirement")
                .style(button::secondary)
                .on_press(ScreenMessage::ScreenMessage(CreateJobMessage::AddRequirement)),
        ]
        .spacing(8)
        .into()
    }
}

impl Screen for CreateJobScreen {
    type Message = CreateJobMessage;

    fn view<'a>(&'a self, _state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let form = &self.form;
        let content = column![
            text("Post a new job").size(28),
            text_input("Title", &form.title).on_input(edit(CreateJobMessage::Title)),
            text_input("Description", &form.description)
                .on_input(edit(CreateJobMessage::Description)),
            row![
                text("Category"),
                pick_list(&JobCategory::ALL[..], Some(form.category), |category| {
                    ScreenMessage::ScreenMessage(CreateJobMessage::Category(category))
                }),
            ]
            .spacing(10)
            .align_y(Center),
            row![
                text_input("Minimum budget (Rp)", &form.budget_min)
                    .on_input(edit(CreateJobMessage::BudgetMin)),
                text_input("Maximum budget (Rp)", &form.budget_max)
                    .on_input(edit(CreateJobMessage::BudgetMax)),
            ]
            .spacing(10),
            text_input("Address", &form.address).on_input(edit(CreateJobMessage::Address)),
            text_input("Deadline (YYYY-MM-DDTHH:MM)", &form.deadline)
                .on_input(edit(CreateJobMessage::Deadline)),
            self.requirements(),
            row![
                button("Post job").on_press(ScreenMessage::ParentMessage(Request::CreateJob(
                    form.clone()
                ))),
                button("Cancel")
                    .style(button::secondary)
                    .on_press(ScreenMessage::ParentMessage(Request::Navigate(Page::Jobs))),
            ]
            .spacing(10),
        ]
        .spacing(12)
        .max_width(600);

        scrollable(content).height(Length::Fill).into()
    }

    fn update(&mut self, message: Self::Message, _state: &AppState) -> Task<ScreenMessage<Self>> {
        let form = &mut self.form;
        match message {
            CreateJobMessage::Title(value) => form.title = value,
            CreateJobMessage::Description(value) => form.description = value,
            CreateJobMessage::Category(category) => form.category = category,
            CreateJobMessage::BudgetMin(value) => form.budget_min = value,
            CreateJobMessage::BudgetMax(value) => form.budget_max = value,
            CreateJobMessage::Address(value) => form.address = value,
            CreateJobMessage::Deadline(value) => form.deadline = value,
            CreateJobMessage::Requirement(index, value) => {
                if let Some(requirement) = form.requirements.get_mut(index) {
                    *requirement = value;
                }
            }
            CreateJobMessage::AddRequirement => form.requirements.push(String::new()),
            CreateJobMessage::RemoveRequirement(index) => {
                if form.requirements.len() > 1 && index < form.requirements.len() {
                    form.requirements.remove(index);
                }
            }
        }
        Task::none()
    }
}
