use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, row, scrollable, text},
};

use crate::{
    core::session::{AppState, Page},
    gui::{
        screens::{Request, Screen, ScreenMessage},
        widgets::{card, field},
    },
    models::{Bid, Job, format_rupiah},
};

#[derive(Debug, Clone)]
pub struct JobDetailsScreen;

#[derive(Debug, Clone)]
pub enum JobDetailsMessage {}

fn bid_card<'a>(job: &'a Job, bid: &'a Bid, selectable: bool) -> Element<'a, ScreenMessage<JobDetailsScreen>> {
    let bidder = bid.bidder_name.as_deref().unwrap_or("Unknown provider");
    let mut header = row![
        text(bidder).size(18).width(Length::Fill),
        text(format_rupiah(bid.amount)),
    ]
    .spacing(10)
    .align_y(Center);
    if bid.is_selected || job.selected_bid_id.as_deref() == Some(bid.id.as_str()) {
        header = header.push(text("Selected"));
    } else if selectable {
        header = header.push(button("Select").on_press(ScreenMessage::ParentMessage(
            Request::SelectBid {
                job_id: job.id.clone(),
                bid_id: bid.id.clone(),
            },
        )));
    }

    let mut content = column![header, text(&bid.message)].spacing(5);
    if !bid.completion_time.is_empty() {
        content = content.push(text(format!("Completion: {}", bid.completion_time)).size(12));
    }
    if let Some(rating) = bid.bidder_rating {
        content = content.push(text(format!("Rating: {:.1}", rating)).size(12));
    }
    card(content)
}

impl Screen for JobDetailsScreen {
    type Message = JobDetailsMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let back = button("Back to jobs")
            .style(button::secondary)
            .on_press(ScreenMessage::ParentMessage(Request::Navigate(Page::Jobs)));
        let Some(job) = &state.selected_job else {
            return column![back, text("Loading...")].spacing(15).into();
        };
        let selectable = state.can_select_bid(job);

        let mut details = column![
            field("Category", job.category.label()),
            field("Status", &job.status),
            field(
                "Budget",
                format!(
                    "{} - {}",
                    format_rupiah(job.budget_min),
                    format_rupiah(job.budget_max)
                )
            ),
            field("Address", &job.address),
        ]
        .spacing(6);
        if let Some(deadline) = &job.deadline {
            details = details.push(field("Deadline", deadline));
        }
        if let Some(creator) = &job.creator_name {
            details = details.push(field("Posted by", creator));
        }
        if !job.requirements.is_empty() {
            details = details.push(field("Requirements", job.requirements.join(", ")));
        }

        let bids: Element<'a, ScreenMessage<Self>> = if job.bids.is_empty() {
            text("No bids yet").into()
        } else {
            job.bids
                .iter()
                .fold(column![].spacing(10), |col, bid| {
                    col.push(bid_card(job, bid, selectable))
                })
                .into()
        };

        scrollable(
            column![
                back,
                text(&job.title).size(28),
                text(&job.description),
                card(details),
                text(format!("Bids ({})", job.bids.len().max(job.bids_count as usize))).size(20),
                bids,
            ]
            .spacing(15),
        )
        .height(Length::Fill)
        .into()
    }

    fn update(&mut self, message: Self::Message, _state: &AppState) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}
