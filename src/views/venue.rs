use std::collections::HashMap;

use sqlx::SqliteConnection;
use time::OffsetDateTime;

use crate::error::FyyurResult;
use crate::models::show::{Show, ShowDetails};
use crate::models::venue::Venue;
use crate::views::{partition_shows, upcoming_counts, SearchResults, ShowCard, Summary};

/// Every venue in one city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<Summary>,
}

/// Group venues by their (city, state).
///
/// Areas appear in the order their first venue does, and each area keeps
/// its venues in the order given.
pub fn group_by_area(venues: Vec<Venue>, counts: &HashMap<i64, usize>) -> Vec<Area> {
    let mut areas: Vec<Area> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for venue in venues {
        let key = (venue.city.clone(), venue.state.clone());
        let position = *index.entry(key).or_insert_with(|| {
            areas.push(Area {
                city: venue.city.clone(),
                state: venue.state.clone(),
                venues: Vec::new(),
            });
            areas.len() - 1
        });

        areas[position]
            .venues
            .push(Summary::new(venue.id, venue.name, counts));
    }

    areas
}

pub async fn load_areas(
    conn: &mut SqliteConnection,
    now: OffsetDateTime,
) -> FyyurResult<Vec<Area>> {
    let venues = Venue::all(conn).await?;
    let shows = Show::all(conn).await?;
    let counts = upcoming_counts(shows.iter().map(|show| (show.venue_id, show.start_time)), now);

    Ok(group_by_area(venues, &counts))
}

pub async fn search(
    term: &str,
    conn: &mut SqliteConnection,
    now: OffsetDateTime,
) -> FyyurResult<SearchResults> {
    let venues = Venue::search(term, conn).await?;
    let shows = Show::all(conn).await?;
    let counts = upcoming_counts(shows.iter().map(|show| (show.venue_id, show.start_time)), now);

    Ok(SearchResults::new(
        venues
            .into_iter()
            .map(|venue| Summary::new(venue.id, venue.name, &counts))
            .collect(),
    ))
}

/// Everything on a venue's page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueDetail {
    pub id: i64,
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website_link: String,
    pub facebook_link: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
    pub image_link: String,
    pub past_shows: Vec<ShowCard>,
    pub upcoming_shows: Vec<ShowCard>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl VenueDetail {
    pub fn new(venue: Venue, shows: Vec<ShowDetails>, now: OffsetDateTime) -> Self {
        let (past, upcoming) = partition_shows(shows, now);
        let past_shows: Vec<_> = past.into_iter().map(ShowCard::artist_side).collect();
        let upcoming_shows: Vec<_> = upcoming.into_iter().map(ShowCard::artist_side).collect();

        Self {
            id: venue.id,
            name: venue.name,
            genres: venue.genres.0,
            address: venue.address,
            city: venue.city,
            state: venue.state,
            phone: venue.phone.unwrap_or_default(),
            website_link: venue.website_link.unwrap_or_default(),
            facebook_link: venue.facebook_link.unwrap_or_default(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.unwrap_or_default(),
            image_link: venue.image_link.unwrap_or_default(),
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
        let venue = Venue::with_id(id, conn).await?;
        let shows = Show::for_venue(id, conn).await?;

        Ok(Self::new(venue, shows, now))
    }
}
