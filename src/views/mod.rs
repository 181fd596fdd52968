//! View models: records reshaped into exactly what each page shows.
//!
//! The pure functions here take `now` as an argument so the past/upcoming
//! split can be checked at a fixed instant. The `load` functions read the
//! records they need through the request's unit of work.

use std::collections::HashMap;

use time::OffsetDateTime;

use crate::models::show::ShowDetails;
use crate::util::{format_datetime, DateFormat};

pub mod artist;
pub mod show;
pub mod venue;

/// A booking is upcoming only if it starts strictly after `now`.
pub fn is_upcoming(start_time: OffsetDateTime, now: OffsetDateTime) -> bool {
    start_time > now
}

/// Split bookings into `(past, upcoming)`, keeping their order.
pub fn partition_shows(
    shows: Vec<ShowDetails>,
    now: OffsetDateTime,
) -> (Vec<ShowDetails>, Vec<ShowDetails>) {
    shows
        .into_iter()
        .partition(|show| !is_upcoming(show.start_time, now))
}

/// Count upcoming bookings per owner in one pass over `(owner id, start time)` pairs.
pub fn upcoming_counts(
    bookings: impl IntoIterator<Item = (i64, OffsetDateTime)>,
    now: OffsetDateTime,
) -> HashMap<i64, usize> {
    let mut counts = HashMap::new();
    for (owner_id, start_time) in bookings {
        if is_upcoming(start_time, now) {
            *counts.entry(owner_id).or_insert(0) += 1;
        }
    }

    counts
}

/// A venue or artist in a list, with how many shows it has coming up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: usize,
}

impl Summary {
    fn new(id: i64, name: String, counts: &HashMap<i64, usize>) -> Self {
        Self {
            id,
            name,
            num_upcoming_shows: counts.get(&id).copied().unwrap_or(0),
        }
    }
}

/// The results of a name search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<Summary>,
}

impl SearchResults {
    fn new(data: Vec<Summary>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// A booking as shown on a venue or artist page: the other side of the
/// booking, and when it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowCard {
    pub id: i64,
    pub name: String,
    pub image_link: String,
    pub start_time: String,
}

impl ShowCard {
    fn artist_side(show: ShowDetails) -> Self {
        Self {
            id: show.artist_id,
            name: show.artist_name,
            image_link: show.artist_image_link.unwrap_or_default(),
            start_time: format_datetime(show.start_time, DateFormat::Full),
        }
    }

    fn venue_side(show: ShowDetails) -> Self {
        Self {
            id: show.venue_id,
            name: show.venue_name,
            image_link: show.venue_image_link.unwrap_or_default(),
            start_time: format_datetime(show.start_time, DateFormat::Full),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use time::macros::datetime;
    use time::Duration;

    use super::*;

    pub(crate) fn show_at(id: i64, venue_id: i64, artist_id: i64, start_time: OffsetDateTime) -> ShowDetails {
        ShowDetails {
            id,
            venue_id,
            venue_name: format!("Venue {}", venue_id),
            venue_image_link: None,
            artist_id,
            artist_name: format!("Artist {}", artist_id),
            artist_image_link: Some(format!("https://images.example.com/{}.png", artist_id)),
            start_time,
        }
    }

    #[test]
    fn a_show_starting_now_is_past() {
        let now = datetime!(2030-01-01 12:00 UTC);

        assert!(!is_upcoming(now, now));
        assert!(!is_upcoming(now - Duration::seconds(1), now));
        assert!(is_upcoming(now + Duration::seconds(1), now));
    }

    #[test]
    fn every_show_lands_in_exactly_one_partition() {
        let now = datetime!(2030-01-01 12:00 UTC);
        let shows = vec![
            show_at(1, 1, 1, now - Duration::days(10)),
            show_at(2, 1, 2, now + Duration::days(1)),
            show_at(3, 1, 1, now),
            show_at(4, 1, 3, now + Duration::days(30)),
        ];

        let (past, upcoming) = partition_shows(shows, now);

        let ids = |shows: &[ShowDetails]| shows.iter().map(|show| show.id).collect::<Vec<_>>();
        assert_eq!(ids(&past), vec![1, 3]);
        assert_eq!(ids(&upcoming), vec![2, 4]);
    }

    #[test]
    fn no_shows_means_empty_partitions() {
        let (past, upcoming) = partition_shows(vec![], datetime!(2030-01-01 12:00 UTC));
        assert!(past.is_empty());
        assert!(upcoming.is_empty());
    }

    #[test]
    fn counts_only_upcoming_bookings_per_owner() {
        let now = datetime!(2030-01-01 12:00 UTC);
        let counts = upcoming_counts(
            vec![
                (1, now + Duration::days(1)),
                (1, now + Duration::days(2)),
                (1, now - Duration::days(2)),
                (2, now),
                (3, now + Duration::hours(1)),
            ],
            now,
        );

        assert_eq!(counts.get(&1), Some(&2));
        assert_eq!(counts.get(&2), None);
        assert_eq!(counts.get(&3), Some(&1));
    }

    #[test]
    fn show_cards_take_the_other_side_of_the_booking() {
        let show = show_at(1, 5, 9, datetime!(2019-05-21 21:30 UTC));

        let card = ShowCard::artist_side(show.clone());
        assert_eq!(card.id, 9);
        assert_eq!(card.name, "Artist 9");
        assert_eq!(card.image_link, "https://images.example.com/9.png");
        assert_eq!(card.start_time, "Tuesday May, 21, 2019 at 9:30PM");

        let card = ShowCard::venue_side(show);
        assert_eq!(card.id, 5);
        assert_eq!(card.image_link, "");
    }
}
