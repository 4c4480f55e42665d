use std::path::{Path, PathBuf};

use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use time::OffsetDateTime;
use tokio::sync::OnceCell;

use crate::core::store::TokenStore;

const TOKEN_KEY: &str = "auth_token";

/// Token store backed by a small SQLite file.
///
/// The pool is opened on first use so the store can be built before any async
/// runtime exists (the GUI creates its runtime after startup).
#[derive(Debug)]
pub struct SqliteTokenStore {
    db_file: PathBuf,
    pool: OnceCell<SqlitePool>,
}

impl SqliteTokenStore {
    pub fn new<P: AsRef<Path>>(db_file: P) -> Self {
        Self {
            db_file: db_file.as_ref().to_path_buf(),
            pool: OnceCell::new(),
        }
    }

    async fn pool(&self) -> anyhow::Result<&SqlitePool> {
        self.pool.get_or_try_init(|| self.open()).await
    }

    async fn open(&self) -> anyhow::Result<SqlitePool> {
        if let Some(parent) = self.db_file.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create data directory {:?}", parent))?;
        }

        let connect_opts = SqliteConnectOptions::new()
            .filename(&self.db_file)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(connect_opts)
            .await
            .with_context(|| format!("Failed to open session store {:?}", self.db_file))?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(pool)
    }

    /// Close the pool so the file can be reopened (or removed) right away.
    pub async fn close(&self) {
        if let Some(pool) = self.pool.get() {
            pool.close().await;
        }
    }
}

impl TokenStore for SqliteTokenStore {
    async fn load_token(&self) -> anyhow::Result<Option<String>> {
        let pool = self.pool().await?;
        let token: Option<String> =
            sqlx::query_scalar("SELECT value FROM session_kv WHERE key = $1")
                .bind(TOKEN_KEY)
                .fetch_optional(pool)
                .await?;
        Ok(token)
    }

    async fn save_token(&self, token: &str) -> anyhow::Result<()> {
        let pool = self.pool().await?;
        let updated_at =
            OffsetDateTime::now_utc().format(&time::format_description::well_known::Rfc3339)?;
        sqlx::query(
            r#"INSERT INTO session_kv (key, value, updated_at) VALUES ($1, $2, $3)
            ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = EXCLUDED.updated_at"#,
        )
        .bind(TOKEN_KEY)
        .bind(token)
        .bind(updated_at)
        .execute(pool)
        .await?;
        Ok(())
    }

    async fn clear_token(&self) -> anyhow::Result<()> {
        let pool = self.pool().await?;
        sqlx::query("DELETE FROM session_kv WHERE key = $1")
            .bind(TOKEN_KEY)
            .execute(pool)
            .await?;
        Ok(())
    }
}
