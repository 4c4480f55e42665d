use std::fmt;

use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, pick_list, row, scrollable, text, text_input},
};

use crate::{
    core::session::{AppState, BidForm, Page},
    gui::{
        screens::{Request, Screen, ScreenMessage},
        widgets::card,
    },
    models::{Job, JobCategory, Role, format_rupiah},
};

/// Entry of the category filter; `None` lists every category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Filter(Option<JobCategory>);

impl Filter {
    const ALL: [Filter; 7] = [
        Filter(None),
        Filter(Some(JobCategory::Courier)),
        Filter(Some(JobCategory::HomeRepair)),
        Filter(Some(JobCategory::DailyAssistant)),
        Filter(Some(JobCategory::PetCare)),
        Filter(Some(JobCategory::Education)),
        Filter(Some(JobCategory::Events)),
    ];
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(category) => f.write_str(category.label()),
            None => f.write_str("All categories"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct JobsScreen {
    /// Job whose inline bid form is open.
    bidding: Option<(String, BidForm)>,
}

#[derive(Debug, Clone)]
pub enum JobsMessage {
    OpenBid(String),
    CancelBid,
    Amount(String),
    Message(String),
    CompletionTime(String),
    SubmitBid,
}

impl JobsScreen {
    fn bid_form<'a>(&'a self, form: &'a BidForm) -> Element<'a, ScreenMessage<Self>> {
        let msg = ScreenMessage::<Self>::ScreenMessage;
        column![
            text_input("Bid amount (Rp)", &form.amount)
                .on_input(move |s| msg(JobsMessage::Amount(s))),
            text_input("Message to the job owner", &form.message)
                .on_input(move |s| msg(JobsMessage::Message(s))),
            text_input("Estimated completion (e.g. 2 days)", &form.completion_time)
                .on_input(move |s| msg(JobsMessage::CompletionTime(s))),
            row![
                button("Submit bid").on_press(msg(JobsMessage::SubmitBid)),
                button("Cancel")
                    .style(button::secondary)
                    .on_press(msg(JobsMessage::CancelBid)),
            ]
            .spacing(10),
        ]
        .spacing(8)
        .into()
    }

    fn job_card<'a>(&'a self, job: &'a Job, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let mut actions = row![
            button("View details")
                .style(button::secondary)
                .on_press(ScreenMessage::ParentMessage(Request::ViewJob(job.id.clone())))
        ]
        .spacing(10);
        if state.can_bid_on(job) {
            actions = actions.push(
                button("Place bid")
                    .on_press(ScreenMessage::ScreenMessage(JobsMessage::OpenBid(job.id.clone()))),
            );
        }

        let mut content = column![
            row![
                text(&job.title).size(20).width(Length::Fill),
                text(job.status.to_string()),
            ]
            .align_y(Center),
            text(job.category.label()).size(12),
            text(&job.description),
            text(format!(
                "{} - {}",
                format_rupiah(job.budget_min),
                format_rupiah(job.budget_max)
            )),
            text(format!("{} | {} bids", job.address, job.bids_count)).size(12),
            actions,
        ]
        .spacing(6);

        if let Some((id, form)) = &self.bidding
            && id == &job.id
        {
            content = content.push(self.bid_form(form));
        }
        card(content)
    }
}

impl Screen for JobsScreen {
    type Message = JobsMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let role = state.role();
        let title = role.map_or("Jobs", Role::jobs_label);

        let mut toolbar = row![
            text(title).size(28).width(Length::Fill),
            pick_list(&Filter::ALL[..], Some(Filter(state.job_filter)), |filter| {
                ScreenMessage::ParentMessage(Request::FetchJobs(filter.0))
            }),
        ]
        .spacing(10)
        .align_y(Center);
        if state.can_create_job() {
            toolbar = toolbar.push(
                button("Post a job")
                    .on_press(ScreenMessage::ParentMessage(Request::Navigate(Page::CreateJob))),
            );
        }

        let list: Element<'a, ScreenMessage<Self>> = match &state.jobs {
            None => text("Loading...").into(),
            Some(jobs) if jobs.is_empty() => text("No jobs available").into(),
            Some(jobs) => scrollable(
                jobs.iter()
                    .fold(column![].spacing(10), |col, job| {
                        col.push(self.job_card(job, state))
                    }),
            )
            .height(Length::Fill)
            .into(),
        };

        column![toolbar, list].spacing(20).into()
    }

    fn update(&mut self, message: Self::Message, _state: &AppState) -> Task<ScreenMessage<Self>> {
        match message {
            JobsMessage::OpenBid(job_id) => self.bidding = Some((job_id, BidForm::default())),
            JobsMessage::CancelBid => self.bidding = None,
            JobsMessage::Amount(value) => {
                if let Some((_, form)) = &mut self.bidding {
                    form.amount = value;
                }
            }
            JobsMessage::Message(value) => {
                if let Some((_, form)) = &mut self.bidding {
                    form.message = value;
                }
            }
            JobsMessage::CompletionTime(value) => {
                if let Some((_, form)) = &mut self.bidding {
                    form.completion_time = value;
                }
            }
            JobsMessage::SubmitBid => {
                if let Some((job_id, form)) = self.bidding.take() {
                    return Task::done(ScreenMessage::ParentMessage(Request::PlaceBid {
                        job_id,
                        form,
                    }));
                }
            }
        }
        Task::none()
    }
}
