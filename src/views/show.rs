use sqlx::SqliteConnection;
use time::OffsetDateTime;

use crate::error::FyyurResult;
use crate::models::show::{Show, ShowDetails};
use crate::util::{format_datetime, DateFormat};
use crate::views::is_upcoming;

/// One row of the shows page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowListing {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: String,
    pub upcoming: bool,
}

impl ShowListing {
    pub fn new(show: ShowDetails, now: OffsetDateTime) -> Self {
        Self {
            venue_id: show.venue_id,
            venue_name: show.venue_name,
            artist_id: show.artist_id,
            artist_name: show.artist_name,
            artist_image_link: show.artist_image_link.unwrap_or_default(),
            start_time: format_datetime(show.start_time, DateFormat::Medium),
            upcoming: is_upcoming(show.start_time, now),
        }
    }
}

pub async fn load_all(
    conn: &mut SqliteConnection,
    now: OffsetDateTime,
) -> FyyurResult<Vec<ShowListing>> {
    Ok(Show::all_listed(conn)
        .await?
        .into_iter()
        .map(|show| ShowListing::new(show, now))
        .collect())
}
