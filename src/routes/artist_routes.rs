//! Artist routes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use tracing::{debug, info, warn};

use crate::db::DbConn;
use crate::error::{FyyurError, FyyurResult};
use crate::flash::{Flash, Flashes};
use crate::forms::{ArtistForm, FormErrors, FormPairs};
use crate::models::artist::Artist;
use crate::routes::{commit_or_rollback, invalid_submission, RecordId, SearchForm};
use crate::templates::{render, ArtistFormPage, ArtistPage, ArtistSearchPage, ArtistsPage};
use crate::util::current_time;
use crate::views::artist::{load_all, search, ArtistDetail};

pub async fn artists(Flashes(flashes): Flashes, mut conn: DbConn) -> FyyurResult<Response> {
    let artists = load_all(&mut conn, current_time()).await?;
    conn.finish(true).await?;

    Ok(render(&ArtistsPage { flashes, artists })?.into_response())
}

/// Search artists by name, the same way venues are searched.
pub async fn search_artists(
    Flashes(flashes): Flashes,
    mut conn: DbConn,
    Form(form): Form<SearchForm>,
) -> FyyurResult<Response> {
    let results = search(&form.search_term, &mut conn, current_time()).await?;
    conn.finish(true).await?;

    Ok(render(&ArtistSearchPage {
        flashes,
        results,
        search_term: form.search_term,
    })?
    .into_response())
}

/// An artist's details and where they are booked.
///
/// ## Path Parameters:
///   * id: integer (*required*) - The ID of the artist
pub async fn artist(
    RecordId(id): RecordId,
    Flashes(flashes): Flashes,
    mut conn: DbConn,
) -> FyyurResult<Response> {
    let artist = ArtistDetail::load(id, &mut conn, current_time()).await?;
    conn.finish(true).await?;

    Ok(render(&ArtistPage { flashes, artist })?.into_response())
}

pub async fn create_artist_form(Flashes(flashes): Flashes) -> FyyurResult<Response> {
    let mut page = ArtistFormPage::new(
        "List a new artist".to_owned(),
        "/artists/create".to_owned(),
        ArtistForm::default(),
        FormErrors::default(),
    );
    page.flashes = flashes;

    Ok(render(&page)?.into_response())
}

pub async fn create_artist(
    mut conn: DbConn,
    Form(pairs): Form<FormPairs>,
) -> FyyurResult<Response> {
    let form = ArtistForm::from_pairs(&pairs);
    let new_artist = match form.validate() {
        Ok(new_artist) => new_artist,
        Err(errors) => {
            debug!(%errors, "rejected artist submission");
            return invalid_submission(&ArtistFormPage::new(
                "List a new artist".to_owned(),
                "/artists/create".to_owned(),
                form,
                errors,
            ))
        }
    };

    let result = Artist::create(&new_artist, &mut conn).await;
    let flash = match commit_or_rollback(conn, result).await {
        Ok(id) => {
            info!(artist_id = id, "artist listed");
            Flash::success(format!("Artist {} was successfully listed!", new_artist.name))
        }
        Err(error) => {
            warn!(%error, "failed to list artist");
            Flash::error(format!(
                "An error occurred. Artist {} could not be listed.",
                new_artist.name
            ))
        }
    };

    Ok((flash, Redirect::to("/")).into_response())
}

pub async fn edit_artist_form(
    RecordId(id): RecordId,
    Flashes(flashes): Flashes,
    mut conn: DbConn,
) -> FyyurResult<Response> {
    let artist = Artist::with_id(id, &mut conn).await?;
    conn.finish(true).await?;

    let mut page = ArtistFormPage::new(
        format!("Edit artist {}", artist.name),
        format!("/artists/{}/edit", id),
        ArtistForm::from_artist(&artist),
        FormErrors::default(),
    );
    page.flashes = flashes;

    Ok(render(&page)?.into_response())
}

pub async fn edit_artist(
    RecordId(id): RecordId,
    mut conn: DbConn,
    Form(pairs): Form<FormPairs>,
) -> FyyurResult<Response> {
    let form = ArtistForm::from_pairs(&pairs);
    let update = match form.validate() {
        Ok(update) => update,
        Err(errors) => {
            debug!(%errors, "rejected artist submission");
            return invalid_submission(&ArtistFormPage::new(
                format!("Edit artist {}", form.name),
                format!("/artists/{}/edit", id),
                form,
                errors,
            ))
        }
    };

    let result = Artist::update(id, &update, &mut conn).await;
    let flash = match commit_or_rollback(conn, result).await {
        Ok(()) => {
            info!(artist_id = id, "artist updated");
            Flash::success(format!("Artist {} was successfully updated!", update.name))
        }
        Err(FyyurError::NotFound) => return Err(FyyurError::NotFound),
        Err(error) => {
            warn!(artist_id = id, %error, "failed to update artist");
            Flash::error(format!(
                "An error occurred. Artist {} could not be updated.",
                update.name
            ))
        }
    };

    Ok((flash, Redirect::to(&format!("/artists/{}", id))).into_response())
}

/// Delete an artist and all of their bookings.
///
/// ## Path Parameters:
///   * id: integer (*required*) - The ID of the artist
///
/// ## Return Format:
///
/// Redirects home with a flash. An artist that doesn't exist gets a 404
/// instead of the redirect.
pub async fn delete_artist(RecordId(id): RecordId, mut conn: DbConn) -> FyyurResult<Response> {
    let result = Artist::delete(id, &mut conn).await;
    let response = match commit_or_rollback(conn, result).await {
        Ok(()) => {
            info!(artist_id = id, "artist deleted");
            (
                Flash::success("The artist was successfully deleted."),
                Redirect::to("/"),
            )
                .into_response()
        }
        Err(FyyurError::NotFound) => (
            StatusCode::NOT_FOUND,
            Flash::error(format!("There is no artist with ID {}.", id)),
            (),
        )
            .into_response(),
        Err(error) => {
            warn!(artist_id = id, %error, "failed to delete artist");
            (
                Flash::error("An error occurred. The artist could not be deleted."),
                Redirect::to("/"),
            )
                .into_response()
        }
    };

    Ok(response)
}
