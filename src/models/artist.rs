use sqlx::types::Json;
use sqlx::{FromRow, SqliteConnection};

use crate::error::{FyyurError, FyyurResult};
use crate::models::name_contains;
use crate::models::show::Show;

/// A performer who can be booked at venues.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Artist {
    /// The ID of the artist
    pub id: i64,
    /// The name the artist performs under
    pub name: String,
    /// The city the artist is based in
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    /// What kind of venues or gigs the artist is looking for
    pub seeking_description: Option<String>,
    /// The genres the artist plays
    pub genres: Json<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArtist {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_description: Option<String>,
    pub genres: Vec<String>,
}

impl Artist {
    pub async fn with_id(id: i64, conn: &mut SqliteConnection) -> FyyurResult<Self> {
        Self::with_id_opt(id, conn)
            .await?
            .ok_or(FyyurError::NotFound)
    }

    pub async fn with_id_opt(id: i64, conn: &mut SqliteConnection) -> FyyurResult<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM artists WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(Into::into)
    }

    pub async fn all(conn: &mut SqliteConnection) -> FyyurResult<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM artists ORDER BY id")
            .fetch_all(&mut *conn)
            .await
            .map_err(Into::into)
    }

    /// Every artist whose name contains `term`, ignoring case.
    pub async fn search(term: &str, conn: &mut SqliteConnection) -> FyyurResult<Vec<Self>> {
        let artists = sqlx::query_as::<_, Self>("SELECT * FROM artists ORDER BY name, id")
            .fetch_all(&mut *conn)
            .await?;

        Ok(artists
            .into_iter()
            .filter(|artist| name_contains(&artist.name, term))
            .collect())
    }

    pub async fn create(new_artist: &NewArtist, conn: &mut SqliteConnection) -> FyyurResult<i64> {
        let result = sqlx::query(
            "INSERT INTO artists
                 (name, city, state, phone, image_link, facebook_link, website_link,
                  seeking_description, genres)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&new_artist.name)
        .bind(&new_artist.city)
        .bind(&new_artist.state)
        .bind(&new_artist.phone)
        .bind(&new_artist.image_link)
        .bind(&new_artist.facebook_link)
        .bind(&new_artist.website_link)
        .bind(&new_artist.seeking_description)
        .bind(Json(&new_artist.genres))
        .execute(&mut *conn)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn update(
        id: i64,
        update: &NewArtist,
        conn: &mut SqliteConnection,
    ) -> FyyurResult<()> {
        // check that the artist exists
        Self::with_id(id, conn).await?;

        sqlx::query(
            "UPDATE artists SET
                 name = ?, city = ?, state = ?, phone = ?, image_link = ?, facebook_link = ?,
                 website_link = ?, seeking_description = ?, genres = ?
             WHERE id = ?",
        )
        .bind(&update.name)
        .bind(&update.city)
        .bind(&update.state)
        .bind(&update.phone)
        .bind(&update.image_link)
        .bind(&update.facebook_link)
        .bind(&update.website_link)
        .bind(&update.seeking_description)
        .bind(Json(&update.genres))
        .bind(id)
        .execute(&mut *conn)
        .await?;

        Ok(())
    }

    /// Delete the artist along with every show they were booked for.
    pub async fn delete(id: i64, conn: &mut SqliteConnection) -> FyyurResult<()> {
        Self::with_id(id, conn).await?;

        Show::delete_for_artist(id, conn).await?;
        sqlx::query("DELETE FROM artists WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(())
    }
}
