//! Show routes.

use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use tracing::{debug, info, warn};

use crate::db::DbConn;
use crate::error::FyyurResult;
use crate::flash::{Flash, Flashes};
use crate::forms::{FormErrors, FormPairs, ShowForm};
use crate::models::show::Show;
use crate::routes::{commit_or_rollback, invalid_submission};
use crate::templates::{render, ShowFormPage, ShowsPage};
use crate::util::current_time;
use crate::views::show::load_all;

/// Every booking, earliest first.
pub async fn shows(Flashes(flashes): Flashes, mut conn: DbConn) -> FyyurResult<Response> {
    let shows = load_all(&mut conn, current_time()).await?;
    conn.finish(true).await?;

    Ok(render(&ShowsPage { flashes, shows })?.into_response())
}

pub async fn create_show_form(Flashes(flashes): Flashes) -> FyyurResult<Response> {
    Ok(render(&ShowFormPage {
        flashes,
        form: ShowForm::default(),
        errors: FormErrors::default(),
    })?
    .into_response())
}

/// Book an artist at a venue.
///
/// ## Input Format:
///
/// A form with `artist_id`, `venue_id` and `start_time`. Ids that don't
/// belong to a listed artist or venue are rejected when the booking is
/// saved, which sends the user home with an error flash like any other
/// failed save.
pub async fn create_show(mut conn: DbConn, Form(pairs): Form<FormPairs>) -> FyyurResult<Response> {
    let form = ShowForm::from_pairs(&pairs);
    let new_show = match form.validate() {
        Ok(new_show) => new_show,
        Err(errors) => {
            debug!(%errors, "rejected show submission");
            return invalid_submission(&ShowFormPage {
                flashes: Vec::new(),
                form,
                errors,
            })
        }
    };

    let result = Show::create(&new_show, &mut conn).await;
    let flash = match commit_or_rollback(conn, result).await {
        Ok(id) => {
            info!(
                show_id = id,
                venue_id = new_show.venue_id,
                artist_id = new_show.artist_id,
                "show booked"
            );
            Flash::success("Show was successfully listed!")
        }
        Err(error) => {
            warn!(%error, "failed to book show");
            Flash::error("An error occurred. Show could not be listed.")
        }
    };

    Ok((flash, Redirect::to("/")).into_response())
}
