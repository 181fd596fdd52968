//! # Seed
//!
//! Fills the database at `DATABASE_URL` with a few venues, artists and
//! shows to click around in.

use anyhow::Context;
use tracing::info;

use fyyur::config::Config;
use fyyur::db::{connect, DbConn};
use fyyur::seed::sample_data;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fyyur=info".into()),
        )
        .init();

    let config = Config::from_env()?;
    let pool = connect(&config.database_url).await?;

    let mut conn = DbConn::begin(&pool).await?;
    let seeded = sample_data(&mut conn)
        .await
        .context("Failed to insert the sample data")?;
    conn.finish(true).await?;

    info!(
        venues = seeded.venues,
        artists = seeded.artists,
        shows = seeded.shows,
        "seeded {}",
        config.database_url
    );

    Ok(())
}
