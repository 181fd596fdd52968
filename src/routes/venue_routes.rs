//! Venue routes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use tracing::{debug, info, warn};

use crate::db::DbConn;
use crate::error::{FyyurError, FyyurResult};
use crate::flash::{Flash, Flashes};
use crate::forms::{FormErrors, FormPairs, VenueForm};
use crate::models::venue::Venue;
use crate::routes::{commit_or_rollback, invalid_submission, RecordId, SearchForm};
use crate::templates::{render, VenueFormPage, VenuePage, VenueSearchPage, VenuesPage};
use crate::util::current_time;
use crate::views::venue::{load_areas, search, VenueDetail};

/// Every venue, grouped by the city it's in.
pub async fn venues(Flashes(flashes): Flashes, mut conn: DbConn) -> FyyurResult<Response> {
    let areas = load_areas(&mut conn, current_time()).await?;
    conn.finish(true).await?;

    Ok(render(&VenuesPage { flashes, areas })?.into_response())
}

/// Search venues by name.
///
/// ## Input Format:
///
/// A form with a `search_term` field. The match is a case-insensitive
/// substring match, and an empty term matches every venue.
pub async fn search_venues(
    Flashes(flashes): Flashes,
    mut conn: DbConn,
    Form(form): Form<SearchForm>,
) -> FyyurResult<Response> {
    let results = search(&form.search_term, &mut conn, current_time()).await?;
    conn.finish(true).await?;

    Ok(render(&VenueSearchPage {
        flashes,
        results,
        search_term: form.search_term,
    })?
    .into_response())
}

/// A venue's details and the shows booked there.
///
/// ## Path Parameters:
///   * id: integer (*required*) - The ID of the venue
///
/// Returns the 404 page if no venue has that ID.
pub async fn venue(
    RecordId(id): RecordId,
    Flashes(flashes): Flashes,
    mut conn: DbConn,
) -> FyyurResult<Response> {
    let venue = VenueDetail::load(id, &mut conn, current_time()).await?;
    conn.finish(true).await?;

    Ok(render(&VenuePage { flashes, venue })?.into_response())
}

pub async fn create_venue_form(Flashes(flashes): Flashes) -> FyyurResult<Response> {
    let mut page = VenueFormPage::new(
        "List a new venue".to_owned(),
        "/venues/create".to_owned(),
        VenueForm::default(),
        FormErrors::default(),
    );
    page.flashes = flashes;

    Ok(render(&page)?.into_response())
}

/// List a new venue.
///
/// ## Input Format:
///
/// The venue form. A submission that doesn't validate is sent back with
/// its field errors and a 422. Otherwise the user is sent home with a
/// flash saying whether the venue was saved.
pub async fn create_venue(mut conn: DbConn, Form(pairs): Form<FormPairs>) -> FyyurResult<Response> {
    let form = VenueForm::from_pairs(&pairs);
    let new_venue = match form.validate() {
        Ok(new_venue) => new_venue,
        Err(errors) => {
            debug!(%errors, "rejected venue submission");
            return invalid_submission(&VenueFormPage::new(
                "List a new venue".to_owned(),
                "/venues/create".to_owned(),
                form,
                errors,
            ))
        }
    };

    let result = Venue::create(&new_venue, &mut conn).await;
    let flash = match commit_or_rollback(conn, result).await {
        Ok(id) => {
            info!(venue_id = id, "venue listed");
            Flash::success(format!("Venue {} was successfully listed!", new_venue.name))
        }
        Err(error) => {
            warn!(%error, "failed to list venue");
            Flash::error(format!(
                "An error occurred. Venue {} could not be listed.",
                new_venue.name
            ))
        }
    };

    Ok((flash, Redirect::to("/")).into_response())
}

/// The edit form, filled in with what's stored for the venue.
pub async fn edit_venue_form(
    RecordId(id): RecordId,
    Flashes(flashes): Flashes,
    mut conn: DbConn,
) -> FyyurResult<Response> {
    let venue = Venue::with_id(id, &mut conn).await?;
    conn.finish(true).await?;

    let mut page = VenueFormPage::new(
        format!("Edit venue {}", venue.name),
        format!("/venues/{}/edit", id),
        VenueForm::from_venue(&venue),
        FormErrors::default(),
    );
    page.flashes = flashes;

    Ok(render(&page)?.into_response())
}

/// Replace every field of a venue.
///
/// ## Path Parameters:
///   * id: integer (*required*) - The ID of the venue
///
/// On success or on a failed save the user is sent to the venue's page
/// with a flash saying which happened.
pub async fn edit_venue(
    RecordId(id): RecordId,
    mut conn: DbConn,
    Form(pairs): Form<FormPairs>,
) -> FyyurResult<Response> {
    let form = VenueForm::from_pairs(&pairs);
    let update = match form.validate() {
        Ok(update) => update,
        Err(errors) => {
            debug!(%errors, "rejected venue submission");
            return invalid_submission(&VenueFormPage::new(
                format!("Edit venue {}", form.name),
                format!("/venues/{}/edit", id),
                form,
                errors,
            ))
        }
    };

    let result = Venue::update(id, &update, &mut conn).await;
    let flash = match commit_or_rollback(conn, result).await {
        Ok(()) => {
            info!(venue_id = id, "venue updated");
            Flash::success(format!("Venue {} was successfully updated!", update.name))
        }
        Err(FyyurError::NotFound) => return Err(FyyurError::NotFound),
        Err(error) => {
            warn!(venue_id = id, %error, "failed to update venue");
            Flash::error(format!(
                "An error occurred. Venue {} could not be updated.",
                update.name
            ))
        }
    };

    Ok((flash, Redirect::to(&format!("/venues/{}", id))).into_response())
}

/// Delete a venue and every show booked there.
///
/// ## Path Parameters:
///   * id: integer (*required*) - The ID of the venue
///
/// ## Return Format:
///
/// No body. The page that sent the request reloads to show the queued
/// flash. A venue that doesn't exist gets a 404.
pub async fn delete_venue(
    RecordId(id): RecordId,
    mut conn: DbConn,
) -> FyyurResult<Response> {
    let result = Venue::delete(id, &mut conn).await;
    let response = match commit_or_rollback(conn, result).await {
        Ok(()) => {
            info!(venue_id = id, "venue deleted");
            (
                StatusCode::NO_CONTENT,
                Flash::success("The venue was successfully deleted."),
                (),
            )
                .into_response()
        }
        Err(FyyurError::NotFound) => (
            StatusCode::NOT_FOUND,
            Flash::error(format!("There is no venue with ID {}.", id)),
            (),
        )
            .into_response(),
        Err(error) => {
            warn!(venue_id = id, %error, "failed to delete venue");
            (
                StatusCode::NO_CONTENT,
                Flash::error("An error occurred. The venue could not be deleted."),
                (),
            )
                .into_response()
        }
    };

    Ok(response)
}
