use iced::{
    Element, Task,
    widget::{button, column, row, text},
};

use crate::{
    core::session::{AppState, Page},
    gui::{
        screens::{Request, Screen, ScreenMessage},
        widgets::{card, field},
    },
    models::{DashboardStats, format_rupiah},
};

#[derive(Debug, Clone)]
pub struct DashboardScreen;

#[derive(Debug, Clone)]
pub enum DashboardMessage {}

fn stats_view<'a>(stats: &'a DashboardStats) -> Element<'a, ScreenMessage<DashboardScreen>> {
    match stats {
        DashboardStats::Seeker(s) => column![
            field("Total jobs", s.total_jobs),
            field("Active jobs", s.active_jobs),
            field("Completed jobs", s.completed_jobs),
            field("Wallet balance", format_rupiah(s.wallet_balance)),
        ],
        DashboardStats::Provider(p) => column![
            field("Total bids", p.total_bids),
            field("Selected bids", p.selected_bids),
            field("Total earnings", format_rupiah(p.total_earnings)),
            field("Wallet balance", format_rupiah(p.wallet_balance)),
            field("Rating", format!("{:.1}", p.rating)),
        ],
    }
    .spacing(8)
    .into()
}

impl Screen for DashboardScreen {
    type Message = DashboardMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let Some(user) = state.user() else {
            return text("Please log in first").into();
        };

        let stats: Element<'a, ScreenMessage<Self>> = match &state.stats {
            Some(stats) => stats_view(stats),
            None => text("Loading...").into(),
        };

        let mut actions = row![
            button(text(user.role.jobs_label()))
                .on_press(ScreenMessage::ParentMessage(Request::Navigate(Page::Jobs)))
        ]
        .spacing(10);
        if state.can_create_job() {
            actions = actions.push(
                button("Post a job")
                    .on_press(ScreenMessage::ParentMessage(Request::Navigate(Page::CreateJob))),
            );
        }
        actions = actions.push(
            button("Wallet")
                .style(button::secondary)
                .on_press(ScreenMessage::ParentMessage(Request::Navigate(Page::Wallet))),
        );

        column![
            text(format!("Welcome, {}", user.full_name)).size(28),
            text(user.role.label()),
            card(stats),
            actions,
        ]
        .spacing(20)
        .into()
    }

    fn update(&mut self, message: Self::Message, _state: &AppState) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}
