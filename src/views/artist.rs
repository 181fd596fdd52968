use sqlx::SqliteConnection;
use time::OffsetDateTime;

use crate::error::FyyurResult;
use crate::models::artist::Artist;
use crate::models::show::{Show, ShowDetails};
use crate::views::{partition_shows, upcoming_counts, SearchResults, ShowCard, Summary};

async fn summaries(
    artists: Vec<Artist>,
    conn: &mut SqliteConnection,
    now: OffsetDateTime,
) -> FyyurResult<Vec<Summary>> {
    let shows = Show::all(conn).await?;
    let counts = upcoming_counts(shows.iter().map(|show| (show.artist_id, show.start_time)), now);

    Ok(artists
        .into_iter()
        .map(|artist| Summary::new(artist.id, artist.name, &counts))
        .collect())
}

pub async fn load_all(
    conn: &mut SqliteConnection,
    now: OffsetDateTime,
) -> FyyurResult<Vec<Summary>> {
    let artists = Artist::all(conn).await?;
    summaries(artists, conn, now).await
}

pub async fn search(
    term: &str,
    conn: &mut SqliteConnection,
    now: OffsetDateTime,
) -> FyyurResult<SearchResults> {
    let artists = Artist::search(term, conn).await?;
    Ok(SearchResults::new(summaries(artists, conn, now).await?))
}

/// Everything on an artist's page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistDetail {
    pub id: i64,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website_link: String,
    pub facebook_link: String,
    pub seeking_description: String,
    pub image_link: String,
    pub past_shows: Vec<ShowCard>,
    pub upcoming_shows: Vec<ShowCard>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl ArtistDetail {
    pub fn new(artist: Artist, shows: Vec<ShowDetails>, now: OffsetDateTime) -> Self {
        let (past, upcoming) = partition_shows(shows, now);
        let past_shows: Vec<_> = past.into_iter().map(ShowCard::venue_side).collect();
        let upcoming_shows: Vec<_> = upcoming.into_iter().map(ShowCard::venue_side).collect();

        Self {
            id: artist.id,
            name: artist.name,
            genres: artist.genres.0,
            city: artist.city,
            state: artist.state,
            phone: artist.phone.unwrap_or_default(),
            website_link: artist.website_link.unwrap_or_default(),
            facebook_link: artist.facebook_link.unwrap_or_default(),
            seeking_description: artist.seeking_description.unwrap_or_default(),
            image_link: artist.image_link.unwrap_or_default(),
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }

    pub async fn load(
        id: i64,
        conn: &mut SqliteConnection,
        now: OffsetDateTime,
    ) -> FyyurResult<Self> {
        let artist = Artist::with_id(id, conn).await?;
        let shows = Show::for_artist(id, conn).await?;

        Ok(Self::new(artist, shows, now))
    }
}
