//! All routes for the booking board.
//!
//! | Method     | Path                 | Handler                                          |
//! |------------|----------------------|--------------------------------------------------|
//! | GET        | `/`                  | [home](misc_routes::home)                        |
//! | GET        | `/venues`            | [venues](venue_routes::venues)                   |
//! | POST       | `/venues/search`     | [search_venues](venue_routes::search_venues)     |
//! | GET/POST   | `/venues/create`     | [venue_routes::create_venue_form] / [venue_routes::create_venue] |
//! | GET/DELETE | `/venues/:id`        | [venue_routes::venue] / [venue_routes::delete_venue] |
//! | GET/POST   | `/venues/:id/edit`   | [venue_routes::edit_venue_form] / [venue_routes::edit_venue] |
//! | GET        | `/artists`           | [artists](artist_routes::artists)                |
//! | POST       | `/artists/search`    | [search_artists](artist_routes::search_artists)  |
//! | GET/POST   | `/artists/create`    | [artist_routes::create_artist_form] / [artist_routes::create_artist] |
//! | GET        | `/artists/:id`       | [artist](artist_routes::artist)                  |
//! | GET/POST   | `/artists/:id/edit`  | [artist_routes::edit_artist_form] / [artist_routes::edit_artist] |
//! | DELETE     | `/artist/:id`        | [delete_artist](artist_routes::delete_artist)    |
//! | GET        | `/shows`             | [shows](show_routes::shows)                      |
//! | GET/POST   | `/shows/create`      | [show_routes::create_show_form] / [show_routes::create_show] |
//!
//! Anything else gets the 404 page, and a handler that panics gets the 500 page.

pub mod artist_routes;
pub mod misc_routes;
pub mod show_routes;
pub mod venue_routes;

use std::any::Any;

use askama::Template;
use axum::body::Body;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{middleware, Router};
use serde::Deserialize;
use sqlx::SqlitePool;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::db::DbConn;
use crate::error::{FyyurError, FyyurResult};
use crate::flash::expire_delivered;
use crate::templates::{render, ServerErrorPage};

/// Shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(misc_routes::home))
        .route("/venues", get(venue_routes::venues))
        .route("/venues/search", post(venue_routes::search_venues))
        .route(
            "/venues/create",
            get(venue_routes::create_venue_form).post(venue_routes::create_venue),
        )
        .route(
            "/venues/:id",
            get(venue_routes::venue).delete(venue_routes::delete_venue),
        )
        .route(
            "/venues/:id/edit",
            get(venue_routes::edit_venue_form).post(venue_routes::edit_venue),
        )
        .route("/artists", get(artist_routes::artists))
        .route("/artists/search", post(artist_routes::search_artists))
        .route(
            "/artists/create",
            get(artist_routes::create_artist_form).post(artist_routes::create_artist),
        )
        .route("/artists/:id", get(artist_routes::artist))
        .route(
            "/artists/:id/edit",
            get(artist_routes::edit_artist_form).post(artist_routes::edit_artist),
        )
        .route("/artist/:id", delete(artist_routes::delete_artist))
        .route("/shows", get(show_routes::shows))
        .route(
            "/shows/create",
            get(show_routes::create_show_form).post(show_routes::create_show),
        )
        .fallback(misc_routes::not_found)
        .layer(middleware::from_fn(expire_delivered))
        .layer(CatchPanicLayer::custom(server_error_page))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// The body of the search box in the navigation bar.
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

/// The integer ID in a record's path. An ID that doesn't parse names no
/// record, so it gets the 404 page like any other missing one.
pub struct RecordId(pub i64);

#[axum::async_trait]
impl<S: Send + Sync> FromRequestParts<S> for RecordId {
    type Rejection = FyyurError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<i64>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(Self(id)),
            Err(rejection) => {
                tracing::debug!(%rejection, path = %parts.uri.path(), "unusable record ID");
                Err(FyyurError::NotFound)
            }
        }
    }
}

/// End the request's unit of work: commit if `result` succeeded, otherwise
/// roll back and hand the original error back.
pub(crate) async fn commit_or_rollback<T>(
    conn: DbConn,
    result: FyyurResult<T>,
) -> FyyurResult<T> {
    match result {
        Ok(value) => {
            conn.finish(true).await?;
            Ok(value)
        }
        Err(error) => {
            if let Err(rollback_error) = conn.finish(false).await {
                tracing::warn!(error = %rollback_error, "failed to roll back");
            }
            Err(error)
        }
    }
}

/// A form page sent back because its submission didn't validate.
pub(crate) fn invalid_submission(page: &impl Template) -> FyyurResult<Response> {
    Ok((StatusCode::UNPROCESSABLE_ENTITY, render(page)?).into_response())
}

fn server_error_page(panic: Box<dyn Any + Send + 'static>) -> Response {
    let details = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = details, "handler panicked");

    let body = ServerErrorPage::default()
        .render()
        .unwrap_or_else(|_| "Internal Server Error".to_owned());

    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
        .body(Body::from(body))
        .unwrap_or_else(|_| FyyurError::ServerError(details.to_owned()).into_response())
}
