use crate::forms::{value_of, FormErrors};
use crate::models::show::NewShow;
use crate::util::parse_start_time;

/// The booking form. Ids are typed in by hand, so they arrive as raw text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowForm {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

impl ShowForm {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            artist_id: value_of(pairs, "artist_id"),
            venue_id: value_of(pairs, "venue_id"),
            start_time: value_of(pairs, "start_time"),
        }
    }

    /// Checks only the shape of the fields. Whether the ids point at real
    /// records is left to the schema when the booking is inserted.
    pub fn validate(&self) -> Result<NewShow, FormErrors> {
        let mut errors = FormErrors::default();
        let artist_id = id(&mut errors, "artist_id", &self.artist_id);
        let venue_id = id(&mut errors, "venue_id", &self.venue_id);
        let start_time = if self.start_time.is_empty() {
            errors.add("start_time", "This field is required.");
            None
        } else {
            let parsed = parse_start_time(&self.start_time);
            if parsed.is_none() {
                errors.add("start_time", "Use the format YYYY-MM-DD HH:MM.");
            }
            parsed
        };

        match (artist_id, venue_id, start_time) {
            (Some(artist_id), Some(venue_id), Some(start_time)) if errors.is_empty() => {
                Ok(NewShow {
                    venue_id,
                    artist_id,
                    start_time,
                })
            }
            _ => Err(errors),
        }
    }
}

fn id(errors: &mut FormErrors, field: &'static str, value: &str) -> Option<i64> {
    if value.is_empty() {
        errors.add(field, "This field is required.");
        return None;
    }

    match value.parse::<i64>() {
        Ok(id) if id > 0 => Some(id),
        _ => {
            errors.add(field, "Must be a positive whole number.");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    fn form(artist_id: &str, venue_id: &str, start_time: &str) -> ShowForm {
        ShowForm {
            artist_id: artist_id.to_owned(),
            venue_id: venue_id.to_owned(),
            start_time: start_time.to_owned(),
        }
    }

    #[test]
    fn valid_booking_is_parsed() {
        let new_show = form("4", "1", "2035-04-01 20:00:00").validate().unwrap();

        assert_eq!(new_show.artist_id, 4);
        assert_eq!(new_show.venue_id, 1);
        assert_eq!(new_show.start_time, datetime!(2035-04-01 20:00 UTC));
    }

    #[test]
    fn unparseable_fields_are_reported_separately() {
        let errors = form("four", "0", "tomorrow night").validate().unwrap_err();

        assert_eq!(errors.message("artist_id"), "Must be a positive whole number.");
        assert_eq!(errors.message("venue_id"), "Must be a positive whole number.");
        assert_eq!(errors.message("start_time"), "Use the format YYYY-MM-DD HH:MM.");
    }

    #[test]
    fn missing_fields_are_required() {
        let errors = ShowForm::default().validate().unwrap_err();
        assert_eq!(errors.fields().len(), 3);
    }
}
