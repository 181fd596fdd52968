use crate::forms::choices::{genre_choices, state_choices, Choice};
use crate::forms::{genres, optional, phone, required, state, url, value_of, values_of, FormErrors};
use crate::models::artist::{Artist, NewArtist};

/// The artist listing form, as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website_link: String,
    pub seeking_description: String,
    pub genres: Vec<String>,
}

impl ArtistForm {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            name: value_of(pairs, "name"),
            city: value_of(pairs, "city"),
            state: value_of(pairs, "state"),
            phone: value_of(pairs, "phone"),
            image_link: value_of(pairs, "image_link"),
            facebook_link: value_of(pairs, "facebook_link"),
            website_link: value_of(pairs, "website_link"),
            seeking_description: value_of(pairs, "seeking_description"),
            genres: values_of(pairs, "genres"),
        }
    }

    pub fn from_artist(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone().unwrap_or_default(),
            image_link: artist.image_link.clone().unwrap_or_default(),
            facebook_link: artist.facebook_link.clone().unwrap_or_default(),
            website_link: artist.website_link.clone().unwrap_or_default(),
            seeking_description: artist.seeking_description.clone().unwrap_or_default(),
            genres: artist.genres.0.clone(),
        }
    }

    pub fn validate(&self) -> Result<NewArtist, FormErrors> {
        let mut errors = FormErrors::default();
        let new_artist = NewArtist {
            name: required(&mut errors, "name", &self.name),
            city: required(&mut errors, "city", &self.city),
            state: state(&mut errors, &self.state),
            phone: phone(&mut errors, &self.phone),
            image_link: url(&mut errors, "image_link", &self.image_link),
            facebook_link: url(&mut errors, "facebook_link", &self.facebook_link),
            website_link: url(&mut errors, "website_link", &self.website_link),
            seeking_description: optional(&self.seeking_description),
            genres: genres(&mut errors, &self.genres),
        };

        errors.into_result(new_artist)
    }

    pub fn genre_choices(&self) -> Vec<Choice> {
        genre_choices(&self.genres)
    }

    pub fn state_choices(&self) -> Vec<Choice> {
        state_choices(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_is_taken_from_its_own_field() {
        let pairs: Vec<(String, String)> = [
            ("name", "Guns N Petals"),
            ("city", "San Francisco"),
            ("state", "CA"),
            ("genres", "Rock n Roll"),
        ]
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();

        let new_artist = ArtistForm::from_pairs(&pairs).validate().unwrap();
        assert_eq!(new_artist.city, "San Francisco");
        assert_eq!(new_artist.state, "CA");
        assert_eq!(new_artist.phone, None);
    }

    #[test]
    fn blank_form_fails_on_required_fields() {
        let errors = ArtistForm::default().validate().unwrap_err();

        assert_eq!(errors.message("name"), "This field is required.");
        assert_eq!(errors.message("city"), "This field is required.");
        assert_eq!(errors.message("state"), "This field is required.");
        assert_eq!(errors.message("genres"), "Pick at least one genre.");
        assert_eq!(errors.message("phone"), "");
    }
}
