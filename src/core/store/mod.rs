mod sqlite;

use std::{future::Future, sync::Mutex};

pub use sqlite::SqliteTokenStore;

/// Client-side persistence of the auth token across restarts.
pub trait TokenStore: Send + Sync + 'static {
    fn load_token(&self) -> impl Future<Output = anyhow::Result<Option<String>>> + Send;
    fn save_token(&self, token: &str) -> impl Future<Output = anyhow::Result<()>> + Send;
    fn clear_token(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// Token store that forgets everything when dropped.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.token
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TokenStore for MemoryTokenStore {
    async fn load_token(&self) -> anyhow::Result<Option<String>> {
        Ok(self.slot().clone())
    }

    async fn save_token(&self, token: &str) -> anyhow::Result<()> {
        *self.slot() = Some(token.to_string());
        Ok(())
    }

    async fn clear_token(&self) -> anyhow::Result<()> {
        *self.slot() = None;
        Ok(())
    }
}
