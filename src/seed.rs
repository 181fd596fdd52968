//! Demo data for a fresh board.

use sqlx::SqliteConnection;
use time::macros::datetime;

use crate::error::FyyurResult;
use crate::models::artist::{Artist, NewArtist};
use crate::models::show::{NewShow, Show};
use crate::models::venue::{NewVenue, Venue};

fn genres(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn venues() -> Vec<NewVenue> {
    vec![
        NewVenue {
            name: "The Musical Hop".to_owned(),
            city: "San Francisco".to_owned(),
            state: "CA".to_owned(),
            address: "1015 Folsom Street".to_owned(),
            phone: Some("123-123-1234".to_owned()),
            image_link: Some("https://images.unsplash.com/photo-1543900694-133f37abaaa5?w=400".to_owned()),
            facebook_link: Some("https://www.facebook.com/TheMusicalHop".to_owned()),
            website_link: Some("https://www.themusicalhop.com".to_owned()),
            seeking_talent: true,
            seeking_description: Some(
                "We are on the lookout for a local artist to play every two weeks. Please call us."
                    .to_owned(),
            ),
            genres: genres(&["Jazz", "Reggae", "Classical", "Folk"]),
        },
        NewVenue {
            name: "The Dueling Pianos Bar".to_owned(),
            city: "New York".to_owned(),
            state: "NY".to_owned(),
            address: "335 Delancey Street".to_owned(),
            phone: Some("914-003-1132".to_owned()),
            image_link: Some("https://images.unsplash.com/photo-1497032205916-ac775f0649ae?w=750".to_owned()),
            facebook_link: Some("https://www.facebook.com/theduelingpianos".to_owned()),
            website_link: Some("https://www.theduelingpianos.com".to_owned()),
            seeking_talent: false,
            seeking_description: None,
            genres: genres(&["Classical", "R&B", "Hip-Hop"]),
        },
        NewVenue {
            name: "Park Square Live Music & Coffee".to_owned(),
            city: "San Francisco".to_owned(),
            state: "CA".to_owned(),
            address: "34 Whiskey Moore Ave".to_owned(),
            phone: Some("415-000-1234".to_owned()),
            image_link: Some("https://images.unsplash.com/photo-1485686531765-ba63b07845a7?w=747".to_owned()),
            facebook_link: Some("https://www.facebook.com/ParkSquareLiveMusicAndCoffee".to_owned()),
            website_link: Some("https://www.parksquarelivemusicandcoffee.com".to_owned()),
            seeking_talent: false,
            seeking_description: None,
            genres: genres(&["Rock n Roll", "Jazz", "Classical", "Folk"]),
        },
    ]
}

fn artists() -> Vec<NewArtist> {
    vec![
        NewArtist {
            name: "Guns N Petals".to_owned(),
            city: "San Francisco".to_owned(),
            state: "CA".to_owned(),
            phone: Some("326-123-5000".to_owned()),
            image_link: Some("https://images.unsplash.com/photo-1549213783-8284d0336c4f?w=300".to_owned()),
            facebook_link: Some("https://www.facebook.com/GunsNPetals".to_owned()),
            website_link: Some("https://www.gunsnpetalsband.com".to_owned()),
            seeking_description: Some(
                "Looking for shows to perform at in the San Francisco Bay Area!".to_owned(),
            ),
            genres: genres(&["Rock n Roll"]),
        },
        NewArtist {
            name: "Matt Quevedo".to_owned(),
            city: "New York".to_owned(),
            state: "NY".to_owned(),
            phone: Some("300-400-5000".to_owned()),
            image_link: Some("https://images.unsplash.com/photo-1495223153807-b916f75de8c5?w=334".to_owned()),
            facebook_link: Some("https://www.facebook.com/mattquevedo923251523".to_owned()),
            website_link: None,
            seeking_description: None,
            genres: genres(&["Jazz"]),
        },
        NewArtist {
            name: "The Wild Sax Band".to_owned(),
            city: "San Francisco".to_owned(),
            state: "CA".to_owned(),
            phone: Some("432-325-5432".to_owned()),
            image_link: Some("https://images.unsplash.com/photo-1558369981-f9ca78462e61?w=794".to_owned()),
            facebook_link: None,
            website_link: None,
            seeking_description: None,
            genres: genres(&["Jazz", "Classical"]),
        },
    ]
}

/// What [sample_data] inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seeded {
    pub venues: usize,
    pub artists: usize,
    pub shows: usize,
}

/// Insert three venues, three artists and five shows, two of them long past
/// and three far in the future.
pub async fn sample_data(conn: &mut SqliteConnection) -> FyyurResult<Seeded> {
    let mut venue_ids = Vec::new();
    for venue in venues() {
        venue_ids.push(Venue::create(&venue, conn).await?);
    }

    let mut artist_ids = Vec::new();
    for artist in artists() {
        artist_ids.push(Artist::create(&artist, conn).await?);
    }

    let bookings = [
        (venue_ids[0], artist_ids[0], datetime!(2019-05-21 21:30 UTC)),
        (venue_ids[2], artist_ids[1], datetime!(2019-06-15 23:00 UTC)),
        (venue_ids[2], artist_ids[2], datetime!(2035-04-01 20:00 UTC)),
        (venue_ids[2], artist_ids[2], datetime!(2035-04-08 20:00 UTC)),
        (venue_ids[2], artist_ids[2], datetime!(2035-04-15 20:00 UTC)),
    ];
    for (venue_id, artist_id, start_time) in bookings {
        Show::create(
            &NewShow {
                venue_id,
                artist_id,
                start_time,
            },
            conn,
        )
        .await?;
    }

    Ok(Seeded {
        venues: venue_ids.len(),
        artists: artist_ids.len(),
        shows: bookings.len(),
    })
}
