use iced::{
    Element, Length, Task,
    widget::{button, column, row, scrollable, text},
};

use crate::{
    core::session::AppState,
    gui::{
        screens::{Request, Screen, ScreenMessage},
        widgets::card,
    },
    models::{PaymentMethod, Transaction, format_rupiah},
};

#[derive(Debug, Clone)]
pub struct WalletScreen;

#[derive(Debug, Clone)]
pub enum WalletMessage {}

fn transaction_row<'a>(
    transaction: &'a Transaction,
    user_id: &str,
) -> Element<'a, ScreenMessage<WalletScreen>> {
    let (label, amount) = if transaction.is_outgoing_for(user_id) {
        ("Payment", format!("-{}", format_rupiah(transaction.amount)))
    } else {
        ("Received", format!("+{}", format_rupiah(transaction.amount)))
    };
    row![
        text(label).width(Length::Fixed(100.0)),
        text(transaction.job_id.as_deref().unwrap_or("-")).width(Length::Fill),
        text(transaction.status.as_deref().unwrap_or("")),
        text(amount).width(Length::Fixed(160.0)),
    ]
    .spacing(10)
    .into()
}

impl Screen for WalletScreen {
    type Message = WalletMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let Some(wallet) = &state.wallet else {
            return text("Loading...").into();
        };
        let user_id = state.user().map(|user| user.id.as_str()).unwrap_or_default();

        let methods = PaymentMethod::ALL.iter().fold(row![].spacing(10), |row, method| {
            row.push(
                button(text(method.label()))
                    .on_press(ScreenMessage::ParentMessage(Request::StartPayment(*method))),
            )
        });

        let history: Element<'a, ScreenMessage<Self>> = if wallet.recent_transactions.is_empty() {
            text("No transactions yet").into()
        } else {
            scrollable(
                wallet
                    .recent_transactions
                    .iter()
                    .fold(column![].spacing(6), |col, transaction| {
                        col.push(transaction_row(transaction, user_id))
                    }),
            )
            .height(Length::Fill)
            .into()
        };

        column![
            text("Wallet").size(28),
            card(column![
                text("Balance"),
                text(format_rupiah(wallet.balance)).size(32),
            ]),
            text("Top up with"),
            methods,
            text("Recent transactions").size(20),
            history,
        ]
        .spacing(15)
        .into()
    }

    fn update(&mut self, message: Self::Message, _state: &AppState) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}
