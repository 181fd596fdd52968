use crate::forms::choices::{genre_choices, state_choices, Choice};
use crate::forms::{
    checkbox, genres, optional, phone, required, state, url, value_of, values_of, FormErrors,
};
use crate::models::venue::{NewVenue, Venue};

/// The venue listing form, as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website_link: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
    pub genres: Vec<String>,
}

impl VenueForm {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            name: value_of(pairs, "name"),
            city: value_of(pairs, "city"),
            state: value_of(pairs, "state"),
            address: value_of(pairs, "address"),
            phone: value_of(pairs, "phone"),
            image_link: value_of(pairs, "image_link"),
            facebook_link: value_of(pairs, "facebook_link"),
            website_link: value_of(pairs, "website_link"),
            seeking_talent: checkbox(pairs, "seeking_talent"),
            seeking_description: value_of(pairs, "seeking_description"),
            genres: values_of(pairs, "genres"),
        }
    }

    /// The form pre-filled with a stored venue, for editing.
    pub fn from_venue(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone().unwrap_or_default(),
            image_link: venue.image_link.clone().unwrap_or_default(),
            facebook_link: venue.facebook_link.clone().unwrap_or_default(),
            website_link: venue.website_link.clone().unwrap_or_default(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.clone().unwrap_or_default(),
            genres: venue.genres.0.clone(),
        }
    }

    pub fn validate(&self) -> Result<NewVenue, FormErrors> {
        let mut errors = FormErrors::default();
        let new_venue = NewVenue {
            name: required(&mut errors, "name", &self.name),
            city: required(&mut errors, "city", &self.city),
            state: state(&mut errors, &self.state),
            address: required(&mut errors, "address", &self.address),
            phone: phone(&mut errors, &self.phone),
            image_link: url(&mut errors, "image_link", &self.image_link),
            facebook_link: url(&mut errors, "facebook_link", &self.facebook_link),
            website_link: url(&mut errors, "website_link", &self.website_link),
            seeking_talent: self.seeking_talent,
            seeking_description: optional(&self.seeking_description),
            genres: genres(&mut errors, &self.genres),
        };

        errors.into_result(new_venue)
    }

    pub fn genre_choices(&self) -> Vec<Choice> {
        genre_choices(&self.genres)
    }

    pub fn state_choices(&self) -> Vec<Choice> {
        state_choices(&self.state)
    }
}
