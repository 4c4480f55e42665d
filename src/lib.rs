pub mod config;
pub mod core;
pub mod models;

pub use config::Config;
pub use core::api::{ApiError, HttpApi, MarketplaceApi};
pub use core::session::{AppState, Controller, Event, NavError, Notice, NoticeKind, Page};
pub use core::store::{MemoryTokenStore, SqliteTokenStore, TokenStore};

#[cfg(feature = "gui")]
pub mod gui;
