mod app;
mod message;
mod screens;
mod widgets;

pub use app::WoiyaApp;
pub use message::Message;

use crate::{
    config::Config,
    core::{api::HttpApi, session::Services, store::SqliteTokenStore},
};

/// Open the desktop client. Blocks until the window is closed.
pub fn run(config: Config) -> anyhow::Result<()> {
    let api = HttpApi::new(&config)?;
    let store = SqliteTokenStore::new(config.token_db_path());
    let services = Services::new(api, store);

    iced::application(
        move || WoiyaApp::boot(services.clone()),
        WoiyaApp::update,
        WoiyaApp::view,
    )
    .title(WoiyaApp::title)
    .theme(WoiyaApp::theme)
    .run()
    .map_err(|e| anyhow::anyhow!("GUI error: {}", e))
}
