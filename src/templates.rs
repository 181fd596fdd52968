//! Every page the board renders.
//!
//! Each page carries the flash messages queued for it, which the shared
//! layout shows above the content.

use askama::Template;
use axum::response::Html;

use crate::error::FyyurResult;
use crate::flash::Flash;
use crate::forms::choices::Choice;
use crate::forms::{ArtistForm, FormErrors, ShowForm, VenueForm};
use crate::views::artist::ArtistDetail;
use crate::views::show::ShowListing;
use crate::views::venue::{Area, VenueDetail};
use crate::views::{SearchResults, Summary};

/// Render a page into a response body.
pub fn render(page: &impl Template) -> FyyurResult<Html<String>> {
    Ok(Html(page.render()?))
}

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomePage {
    pub flashes: Vec<Flash>,
}

#[derive(Template)]
#[template(path = "pages/venues.html")]
pub struct VenuesPage {
    pub flashes: Vec<Flash>,
    pub areas: Vec<Area>,
}

#[derive(Template)]
#[template(path = "pages/search_venues.html")]
pub struct VenueSearchPage {
    pub flashes: Vec<Flash>,
    pub results: SearchResults,
    pub search_term: String,
}

#[derive(Template)]
#[template(path = "pages/show_venue.html")]
pub struct VenuePage {
    pub flashes: Vec<Flash>,
    pub venue: VenueDetail,
}

/// The create and edit forms for a venue.
#[derive(Template)]
#[template(path = "forms/venue.html")]
pub struct VenueFormPage {
    pub flashes: Vec<Flash>,
    pub heading: String,
    /// Where the form posts to
    pub action: String,
    pub form: VenueForm,
    pub errors: FormErrors,
    pub genres: Vec<Choice>,
    pub states: Vec<Choice>,
}

impl VenueFormPage {
    pub fn new(heading: String, action: String, form: VenueForm, errors: FormErrors) -> Self {
        Self {
            flashes: Vec::new(),
            genres: form.genre_choices(),
            states: form.state_choices(),
            heading,
            action,
            form,
            errors,
        }
    }
}

#[derive(Template)]
#[template(path = "pages/artists.html")]
pub struct ArtistsPage {
    pub flashes: Vec<Flash>,
    pub artists: Vec<Summary>,
}

#[derive(Template)]
#[template(path = "pages/search_artists.html")]
pub struct ArtistSearchPage {
    pub flashes: Vec<Flash>,
    pub results: SearchResults,
    pub search_term: String,
}

#[derive(Template)]
#[template(path = "pages/show_artist.html")]
pub struct ArtistPage {
    pub flashes: Vec<Flash>,
    pub artist: ArtistDetail,
}

/// The create and edit forms for an artist.
#[derive(Template)]
#[template(path = "forms/artist.html")]
pub struct ArtistFormPage {
    pub flashes: Vec<Flash>,
    pub heading: String,
    pub action: String,
    pub form: ArtistForm,
    pub errors: FormErrors,
    pub genres: Vec<Choice>,
    pub states: Vec<Choice>,
}

impl ArtistFormPage {
    pub fn new(heading: String, action: String, form: ArtistForm, errors: FormErrors) -> Self {
        Self {
            flashes: Vec::new(),
            genres: form.genre_choices(),
            states: form.state_choices(),
            heading,
            action,
            form,
            errors,
        }
    }
}

#[derive(Template)]
#[template(path = "pages/shows.html")]
pub struct ShowsPage {
    pub flashes: Vec<Flash>,
    pub shows: Vec<ShowListing>,
}

#[derive(Template)]
#[template(path = "forms/new_show.html")]
pub struct ShowFormPage {
    pub flashes: Vec<Flash>,
    pub form: ShowForm,
    pub errors: FormErrors,
}

#[derive(Template, Default)]
#[template(path = "errors/404.html")]
pub struct NotFoundPage {
    pub flashes: Vec<Flash>,
}

#[derive(Template, Default)]
#[template(path = "errors/500.html")]
pub struct ServerErrorPage {
    pub flashes: Vec<Flash>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::ShowCard;

    #[test]
    fn layout_shows_queued_messages() {
        let page = HomePage {
            flashes: vec![
                Flash::success("Venue The Musical Hop was successfully listed!"),
                Flash::error("An error occurred. Show could not be listed."),
            ],
        };
        let html = page.render().unwrap();

        assert!(html.contains("Venue The Musical Hop was successfully listed!"));
        assert!(html.contains("alert-danger"));
    }

    #[test]
    fn venue_page_lists_both_partitions() {
        let page = VenuePage {
            flashes: vec![],
            venue: VenueDetail {
                id: 1,
                name: "The Musical Hop".to_owned(),
                genres: vec!["Jazz".to_owned(), "Reggae".to_owned()],
                address: "1015 Folsom Street".to_owned(),
                city: "San Francisco".to_owned(),
                state: "CA".to_owned(),
                phone: "123-123-1234".to_owned(),
                website_link: String::new(),
                facebook_link: String::new(),
                seeking_talent: true,
                seeking_description: "We are on the lookout for a local artist".to_owned(),
                image_link: String::new(),
                past_shows: vec![ShowCard {
                    id: 4,
                    name: "Guns N Petals".to_owned(),
                    image_link: String::new(),
                    start_time: "Tuesday May, 21, 2019 at 9:30PM".to_owned(),
                }],
                upcoming_shows: vec![],
                past_shows_count: 1,
                upcoming_shows_count: 0,
            },
        };
        let html = page.render().unwrap();

        assert!(html.contains("The Musical Hop"));
        assert!(html.contains("1 Past Show"));
        assert!(html.contains("0 Upcoming Shows"));
        assert!(html.contains("/artists/4"));
        assert!(html.contains("Tuesday May, 21, 2019 at 9:30PM"));
    }

    #[test]
    fn venue_form_marks_failing_fields() {
        let form = VenueForm::from_pairs(&[
            ("name".to_owned(), "The Musical Hop".to_owned()),
            ("state".to_owned(), "CA".to_owned()),
            ("genres".to_owned(), "Jazz".to_owned()),
            ("phone".to_owned(), "12".to_owned()),
        ]);
        let errors = form.validate().unwrap_err();
        let page = VenueFormPage::new(
            "List a new venue".to_owned(),
            "/venues/create".to_owned(),
            form,
            errors,
        );
        let html = page.render().unwrap();

        assert!(html.contains("Phone numbers look like 123-456-7890."));
        assert!(html.contains("value=\"The Musical Hop\""));
        assert!(html.contains("<option value=\"CA\" selected>"));
        assert!(html.contains("<option value=\"Jazz\" selected>"));
    }

    #[test]
    fn error_pages_render() {
        assert!(NotFoundPage::default().render().unwrap().contains("404"));
        assert!(ServerErrorPage::default().render().unwrap().contains("500"));
    }
}
