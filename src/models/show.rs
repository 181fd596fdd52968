use sqlx::{FromRow, SqliteConnection};
use time::{Duration, OffsetDateTime, UtcOffset};

use crate::error::FyyurResult;

/// One scheduled performance of one artist at one venue.
///
/// Whether a show is past or upcoming is never stored: it depends on when
/// the show is looked at.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Show {
    pub id: i64,
    pub venue_id: i64,
    pub artist_id: i64,
    /// When the show starts, in UTC
    pub start_time: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShow {
    pub venue_id: i64,
    pub artist_id: i64,
    pub start_time: OffsetDateTime,
}

/// A show along with the names and images of its venue and artist.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ShowDetails {
    pub id: i64,
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: OffsetDateTime,
}

const DETAILS_QUERY: &str = "
    SELECT shows.id, shows.venue_id, venues.name AS venue_name,
           venues.image_link AS venue_image_link, shows.artist_id,
           artists.name AS artist_name, artists.image_link AS artist_image_link,
           shows.start_time
    FROM shows
    INNER JOIN venues ON venues.id = shows.venue_id
    INNER JOIN artists ON artists.id = shows.artist_id";

impl Show {
    pub async fn all(conn: &mut SqliteConnection) -> FyyurResult<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM shows ORDER BY start_time, id")
            .fetch_all(&mut *conn)
            .await
            .map_err(Into::into)
    }

    /// Every show, earliest first.
    pub async fn all_listed(conn: &mut SqliteConnection) -> FyyurResult<Vec<ShowDetails>> {
        sqlx::query_as::<_, ShowDetails>(&format!(
            "{} ORDER BY shows.start_time, shows.id",
            DETAILS_QUERY
        ))
        .fetch_all(&mut *conn)
        .await
        .map_err(Into::into)
    }

    pub async fn for_venue(
        venue_id: i64,
        conn: &mut SqliteConnection,
    ) -> FyyurResult<Vec<ShowDetails>> {
        sqlx::query_as::<_, ShowDetails>(&format!(
            "{} WHERE shows.venue_id = ? ORDER BY shows.start_time, shows.id",
            DETAILS_QUERY
        ))
        .bind(venue_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(Into::into)
    }

    pub async fn for_artist(
        artist_id: i64,
        conn: &mut SqliteConnection,
    ) -> FyyurResult<Vec<ShowDetails>> {
        sqlx::query_as::<_, ShowDetails>(&format!(
            "{} WHERE shows.artist_id = ? ORDER BY shows.start_time, shows.id",
            DETAILS_QUERY
        ))
        .bind(artist_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(Into::into)
    }

    /// Book a show, returning its ID.
    ///
    /// The venue and artist are not looked up first: an ID that doesn't
    /// exist is rejected by the schema's foreign keys.
    pub async fn create(new_show: &NewShow, conn: &mut SqliteConnection) -> FyyurResult<i64> {
        let result =
            sqlx::query("INSERT INTO shows (venue_id, artist_id, start_time) VALUES (?, ?, ?)")
                .bind(new_show.venue_id)
                .bind(new_show.artist_id)
                .bind(stored_time(new_show.start_time))
                .execute(&mut *conn)
                .await?;

        Ok(result.last_insert_rowid())
    }

    pub(crate) async fn delete_for_venue(
        venue_id: i64,
        conn: &mut SqliteConnection,
    ) -> FyyurResult<u64> {
        let result = sqlx::query("DELETE FROM shows WHERE venue_id = ?")
            .bind(venue_id)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected())
    }

    pub(crate) async fn delete_for_artist(
        artist_id: i64,
        conn: &mut SqliteConnection,
    ) -> FyyurResult<u64> {
        let result = sqlx::query("DELETE FROM shows WHERE artist_id = ?")
            .bind(artist_id)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected())
    }
}

/// Start times are stored in UTC to the second, so that ordering the text
/// column orders the shows chronologically.
fn stored_time(time: OffsetDateTime) -> OffsetDateTime {
    let utc = time.to_offset(UtcOffset::UTC);
    utc - Duration::nanoseconds(i64::from(utc.nanosecond()))
}
