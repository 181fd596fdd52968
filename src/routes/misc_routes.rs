//! All other miscellaneous routes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::FyyurResult;
use crate::flash::Flashes;
use crate::templates::{render, HomePage, NotFoundPage};

/// The landing page.
///
/// Create, edit and delete handlers send the user back here, so this is
/// where most flash messages end up.
pub async fn home(Flashes(flashes): Flashes) -> FyyurResult<Response> {
    Ok(render(&HomePage { flashes })?.into_response())
}

/// Served for any path no other route matches.
pub async fn not_found(Flashes(flashes): Flashes) -> FyyurResult<Response> {
    Ok((StatusCode::NOT_FOUND, render(&NotFoundPage { flashes })?).into_response())
}
