//! Database connections and the per-request unit of work.

use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use anyhow::Context;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqliteConnection, SqlitePool, Transaction};

use crate::error::{FyyurError, FyyurResult};
use crate::routes::AppState;

pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Open (creating if necessary) the database at `url` and bring its schema up to date.
pub async fn connect(url: &str) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(url)
        .with_context(|| format!("Invalid database URL {}", url))?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .connect_with(options)
        .await
        .context("Failed to connect to the database")?;

    MIGRATOR
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    Ok(pool)
}

/// A fresh in-memory database with the full schema.
///
/// The pool holds exactly one connection that never expires, since every
/// SQLite connection to `:memory:` is its own database.
pub async fn connect_in_memory() -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .context("Failed to open in-memory database")?;

    MIGRATOR
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    Ok(pool)
}

/// A transaction scoped to a single request.
///
/// Handlers receive one as an extractor and end it with [DbConn::finish].
/// If it is dropped without finishing, the transaction is rolled back.
#[derive(Debug)]
pub struct DbConn(Transaction<'static, Sqlite>);

impl DbConn {
    pub async fn begin(pool: &SqlitePool) -> FyyurResult<Self> {
        Ok(Self(pool.begin().await?))
    }

    pub async fn finish(self, successful: bool) -> FyyurResult<()> {
        if successful {
            self.0.commit().await?;
        } else {
            self.0.rollback().await?;
        }

        Ok(())
    }
}

impl Deref for DbConn {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DbConn {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[axum::async_trait]
impl FromRequestParts<AppState> for DbConn {
    type Rejection = FyyurError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Self::begin(&state.pool).await
    }
}
