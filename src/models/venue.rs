use sqlx::types::Json;
use sqlx::{FromRow, SqliteConnection};

use crate::error::{FyyurError, FyyurResult};
use crate::models::name_contains;
use crate::models::show::Show;

/// A physical location that hosts shows.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Venue {
    /// The ID of the venue
    pub id: i64,
    /// The name of the venue
    pub name: String,
    pub city: String,
    /// The two-letter state code
    pub state: String,
    /// The street address
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    /// Whether the venue is currently looking for artists to book
    pub seeking_talent: bool,
    /// What kind of talent the venue is looking for
    pub seeking_description: Option<String>,
    /// The genres of music the venue hosts
    pub genres: Json<Vec<String>>,
}

/// A validated venue, ready to be inserted or written over an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVenue {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub genres: Vec<String>,
}

impl Venue {
    pub async fn with_id(id: i64, conn: &mut SqliteConnection) -> FyyurResult<Self> {
        Self::with_id_opt(id, conn)
            .await?
            .ok_or(FyyurError::NotFound)
    }

    pub async fn with_id_opt(id: i64, conn: &mut SqliteConnection) -> FyyurResult<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM venues WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(Into::into)
    }

    pub async fn all(conn: &mut SqliteConnection) -> FyyurResult<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM venues ORDER BY id")
            .fetch_all(&mut *conn)
            .await
            .map_err(Into::into)
    }

    /// Every venue whose name contains `term`, ignoring case.
    pub async fn search(term: &str, conn: &mut SqliteConnection) -> FyyurResult<Vec<Self>> {
        let venues = sqlx::query_as::<_, Self>("SELECT * FROM venues ORDER BY name, id")
            .fetch_all(&mut *conn)
            .await?;

        Ok(venues
            .into_iter()
            .filter(|venue| name_contains(&venue.name, term))
            .collect())
    }

    /// Insert a new venue, returning its ID.
    pub async fn create(new_venue: &NewVenue, conn: &mut SqliteConnection) -> FyyurResult<i64> {
        let result = sqlx::query(
            "INSERT INTO venues
                 (name, city, state, address, phone, image_link, facebook_link,
                  website_link, seeking_talent, seeking_description, genres)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&new_venue.name)
        .bind(&new_venue.city)
        .bind(&new_venue.state)
        .bind(&new_venue.address)
        .bind(&new_venue.phone)
        .bind(&new_venue.image_link)
        .bind(&new_venue.facebook_link)
        .bind(&new_venue.website_link)
        .bind(new_venue.seeking_talent)
        .bind(&new_venue.seeking_description)
        .bind(Json(&new_venue.genres))
        .execute(&mut *conn)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn update(id: i64, update: &NewVenue, conn: &mut SqliteConnection) -> FyyurResult<()> {
        // check that the venue exists
        Self::with_id(id, conn).await?;

        sqlx::query(
            "UPDATE venues SET
                 name = ?, city = ?, state = ?, address = ?, phone = ?, image_link = ?,
                 facebook_link = ?, website_link = ?, seeking_talent = ?,
                 seeking_description = ?, genres = ?
             WHERE id = ?",
        )
        .bind(&update.name)
        .bind(&update.city)
        .bind(&update.state)
        .bind(&update.address)
        .bind(&update.phone)
        .bind(&update.image_link)
        .bind(&update.facebook_link)
        .bind(&update.website_link)
        .bind(update.seeking_talent)
        .bind(&update.seeking_description)
        .bind(Json(&update.genres))
        .bind(id)
        .execute(&mut *conn)
        .await?;

        Ok(())
    }

    /// Delete the venue along with every show booked there.
    pub async fn delete(id: i64, conn: &mut SqliteConnection) -> FyyurResult<()> {
        Self::with_id(id, conn).await?;

        Show::delete_for_venue(id, conn).await?;
        sqlx::query("DELETE FROM venues WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use sqlx::SqlitePool;
    use time::{Duration, OffsetDateTime};

    use super::*;
    use crate::db::connect_in_memory;
    use crate::models::artist::tests::new_artist;
    use crate::models::artist::Artist;
    use crate::models::show::NewShow;

    pub(crate) fn new_venue(name: &str, city: &str, state: &str) -> NewVenue {
        NewVenue {
            name: name.to_owned(),
            city: city.to_owned(),
            state: state.to_owned(),
            address: "1015 Folsom Street".to_owned(),
            phone: Some("123-123-1234".to_owned()),
            image_link: None,
            facebook_link: Some("https://www.facebook.com/TheMusicalHop".to_owned()),
            website_link: None,
            seeking_talent: true,
            seeking_description: Some("Looking for local jazz acts".to_owned()),
            genres: vec!["Jazz".to_owned(), "Folk".to_owned()],
        }
    }

    async fn conn(pool: &SqlitePool) -> sqlx::pool::PoolConnection<sqlx::Sqlite> {
        pool.acquire().await.unwrap()
    }

    #[tokio::test]
    async fn created_venue_reads_back_unchanged() {
        let pool = connect_in_memory().await.unwrap();
        let mut conn = conn(&pool).await;
        let new = new_venue("The Musical Hop", "San Francisco", "CA");

        let id = Venue::create(&new, &mut conn).await.unwrap();
        let venue = Venue::with_id(id, &mut conn).await.unwrap();

        assert_eq!(venue.name, new.name);
        assert_eq!(venue.city, new.city);
        assert_eq!(venue.state, new.state);
        assert_eq!(venue.address, new.address);
        assert_eq!(venue.phone, new.phone);
        assert_eq!(venue.image_link, new.image_link);
        assert_eq!(venue.facebook_link, new.facebook_link);
        assert_eq!(venue.website_link, new.website_link);
        assert_eq!(venue.seeking_talent, new.seeking_talent);
        assert_eq!(venue.seeking_description, new.seeking_description);
        assert_eq!(venue.genres.0, new.genres);
    }

    #[tokio::test]
    async fn missing_venue_is_not_found() {
        let pool = connect_in_memory().await.unwrap();
        let mut conn = conn(&pool).await;

        assert_eq!(Venue::with_id_opt(7, &mut conn).await.unwrap(), None);
        assert!(matches!(
            Venue::with_id(7, &mut conn).await,
            Err(FyyurError::NotFound)
        ));
        assert!(matches!(
            Venue::update(7, &new_venue("x", "y", "CA"), &mut conn).await,
            Err(FyyurError::NotFound)
        ));
        assert!(matches!(
            Venue::delete(7, &mut conn).await,
            Err(FyyurError::NotFound)
        ));
    }

    #[tokio::test]
    async fn search_is_a_case_insensitive_substring_match() {
        let pool = connect_in_memory().await.unwrap();
        let mut conn = conn(&pool).await;
        for name in ["The Musical Hop", "Park Square Live Music & Coffee", "The Dueling Pianos Bar"] {
            Venue::create(&new_venue(name, "San Francisco", "CA"), &mut conn)
                .await
                .unwrap();
        }

        let names = |venues: Vec<Venue>| venues.into_iter().map(|v| v.name).collect::<Vec<_>>();

        assert_eq!(names(Venue::search("Hop", &mut conn).await.unwrap()), vec!["The Musical Hop"]);
        assert_eq!(names(Venue::search("HOP", &mut conn).await.unwrap()), vec!["The Musical Hop"]);
        assert_eq!(
            names(Venue::search("music", &mut conn).await.unwrap()),
            vec!["Park Square Live Music & Coffee", "The Musical Hop"]
        );
        assert_eq!(Venue::search("", &mut conn).await.unwrap().len(), 3);
        assert!(Venue::search("zzz-no-match", &mut conn).await.unwrap().is_empty());
        assert!(Venue::search("%", &mut conn).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn search_folds_accented_names() {
        let pool = connect_in_memory().await.unwrap();
        let mut conn = conn(&pool).await;
        Venue::create(&new_venue("Café Ümlaut", "Berlin", "NY"), &mut conn)
            .await
            .unwrap();

        for term in ["ümlaut", "ÜMLAUT", "CAFÉ", "é ü"] {
            assert_eq!(Venue::search(term, &mut conn).await.unwrap().len(), 1, "{}", term);
        }
        assert!(Venue::search("Ümlaut ", &mut conn).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_overwrites_every_field() {
        let pool = connect_in_memory().await.unwrap();
        let mut conn = conn(&pool).await;
        let id = Venue::create(&new_venue("Old Name", "Austin", "TX"), &mut conn)
            .await
            .unwrap();

        let mut update = new_venue("New Name", "New York", "NY");
        update.phone = None;
        update.seeking_talent = false;
        update.genres = vec!["Punk".to_owned()];
        Venue::update(id, &update, &mut conn).await.unwrap();

        let venue = Venue::with_id(id, &mut conn).await.unwrap();
        assert_eq!(venue.name, "New Name");
        assert_eq!(venue.state, "NY");
        assert_eq!(venue.phone, None);
        assert!(!venue.seeking_talent);
        assert_eq!(venue.genres.0, vec!["Punk"]);
    }

    #[tokio::test]
    async fn deleting_a_venue_cascades_to_its_shows() {
        let pool = connect_in_memory().await.unwrap();
        let mut conn = conn(&pool).await;
        let venue_id = Venue::create(&new_venue("Hall", "Austin", "TX"), &mut conn)
            .await
            .unwrap();
        let other_venue_id = Venue::create(&new_venue("Club", "Austin", "TX"), &mut conn)
            .await
            .unwrap();
        let artist_id = Artist::create(&new_artist("Band"), &mut conn).await.unwrap();
        for (venue_id, days) in [(venue_id, -3), (venue_id, 3), (other_venue_id, 5)] {
            Show::create(
                &NewShow {
                    venue_id,
                    artist_id,
                    start_time: OffsetDateTime::now_utc() + Duration::days(days),
                },
                &mut conn,
            )
            .await
            .unwrap();
        }

        Venue::delete(venue_id, &mut conn).await.unwrap();

        assert_eq!(Venue::with_id_opt(venue_id, &mut conn).await.unwrap(), None);
        let remaining = Show::all(&mut conn).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].venue_id, other_venue_id);
        assert!(Artist::with_id_opt(artist_id, &mut conn).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn raw_delete_with_bookings_is_rejected_by_the_schema() {
        let pool = connect_in_memory().await.unwrap();
        let mut conn = conn(&pool).await;
        let venue_id = Venue::create(&new_venue("Hall", "Austin", "TX"), &mut conn)
            .await
            .unwrap();
        let artist_id = Artist::create(&new_artist("Band"), &mut conn).await.unwrap();
        Show::create(
            &NewShow {
                venue_id,
                artist_id,
                start_time: OffsetDateTime::now_utc(),
            },
            &mut conn,
        )
        .await
        .unwrap();

        let result = sqlx::query("DELETE FROM venues WHERE id = ?")
            .bind(venue_id)
            .execute(&mut *conn)
            .await;
        assert!(result.is_err());
    }
}
