use iced::{
    Alignment::Center,
    Element, Length, Theme, border,
    widget::{button, column, container, container::Style, row, text},
};

use crate::{
    core::session::{AppState, Notice, NoticeKind, Page},
    gui::{Message, screens::Request},
    models::{Role, format_rupiah},
};

fn nav_button<'a>(label: &'a str, page: Page, current: Page) -> Element<'a, Message> {
    let style = if page == current {
        button::primary
    } else {
        button::text
    };
    button(text(label))
        .style(style)
        .on_press(Message::Request(Request::Navigate(page)))
        .into()
}

/// Top bar: brand, navigation for the signed-in role, and the session controls.
pub fn header(state: &AppState) -> Element<'_, Message> {
    let brand = button(text("WOIYA").size(24))
        .style(button::text)
        .on_press(Message::Request(Request::Navigate(Page::Home)));

    let right: Element<'_, Message> = match state.user() {
        Some(user) => {
            let mut nav = row![
                nav_button("Dashboard", Page::Dashboard, state.page),
                nav_button(user.role.jobs_label(), Page::Jobs, state.page),
            ]
            .spacing(5);
            if user.role == Role::Seeker {
                nav = nav.push(nav_button("Post Job", Page::CreateJob, state.page));
            }
            nav = nav.push(nav_button("Wallet", Page::Wallet, state.page));

            row![
                nav,
                column![
                    text(format!("Hi, {}", user.full_name)),
                    text(format_rupiah(user.wallet_balance)).size(12),
                ]
                .align_x(iced::Alignment::End),
                button("Logout")
                    .style(button::secondary)
                    .on_press(Message::Logout),
            ]
            .spacing(15)
            .align_y(Center)
            .into()
        }
        None => row![
            nav_button("Login", Page::Login, state.page),
            button("Register").on_press(Message::Request(Request::Navigate(Page::Register))),
        ]
        .spacing(10)
        .into(),
    };

    container(
        row![brand, container(right).align_right(Length::Fill)]
            .align_y(Center)
            .padding(10),
    )
    .style(container::bordered_box)
    .width(Length::Fill)
    .into()
}

fn notice_style(kind: NoticeKind) -> impl Fn(&Theme) -> Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        let pair = match kind {
            NoticeKind::Info => palette.success.weak,
            NoticeKind::Error => palette.danger.weak,
        };
        Style::default()
            .background(pair.color)
            .color(pair.text)
            .border(border::rounded(4))
    }
}

pub fn notice_banner(notice: &Notice) -> Element<'_, Message> {
    container(
        row![
            text(&notice.text).width(Length::Fill),
            button("x").style(button::text).on_press(Message::DismissNotice),
        ]
        .align_y(Center),
    )
    .style(notice_style(notice.kind))
    .padding(10)
    .width(Length::Fill)
    .into()
}

/// Header, optional notice, then the page body.
pub fn layout<'a>(
    state: &'a AppState,
    body: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    let mut page = column![header(state)].spacing(10);
    if let Some(notice) = &state.notice {
        page = page.push(container(notice_banner(notice)).padding([0, 10]));
    }
    page.push(container(body.into()).padding(20).height(Length::Fill))
        .into()
}

/// Two-column label/value line used by the detail and stats views.
pub fn field<'a, M: 'a>(label: &'a str, value: impl ToString) -> Element<'a, M> {
    row![
        text(label).width(Length::Fixed(160.0)),
        text(value.to_string())
    ]
    .spacing(10)
    .into()
}

pub fn card<'a, M: 'a>(content: impl Into<Element<'a, M>>) -> Element<'a, M> {
    container(content.into())
        .style(container::bordered_box)
        .padding(15)
        .width(Length::Fill)
        .into()
}
