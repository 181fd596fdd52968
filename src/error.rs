//! Error handling for the booking board.
//!
//! Handlers return [FyyurResult] and let the error render itself as a page.
//! Persistence failures during create/edit/delete never reach this point:
//! those handlers roll back and queue an error flash instead. Forms that
//! fail validation don't either: they are sent back with their field errors.

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use crate::templates::{NotFoundPage, ServerErrorPage};

/// The error enum for all error handling across the app.
#[derive(Debug, Error)]
pub enum FyyurError {
    /// \[404\] No record has the requested id.
    #[error("resource not found")]
    NotFound,
    /// \[500\] The database rejected a query or the connection failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    /// \[500\] A page failed to render.
    #[error("failed to render template: {0}")]
    Template(#[from] askama::Error),
    /// \[500\] Anything else that went wrong while handling the request.
    #[error("server error: {0}")]
    ServerError(String),
}

/// The return type for all handlers and data-access operations.
pub type FyyurResult<T> = Result<T, FyyurError>;

impl FyyurError {
    pub fn status(&self) -> StatusCode {
        match self {
            FyyurError::NotFound => StatusCode::NOT_FOUND,
            FyyurError::Database(_) | FyyurError::Template(_) | FyyurError::ServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for FyyurError {
    fn into_response(self) -> Response {
        let status = self.status();
        let page = match &self {
            FyyurError::NotFound => NotFoundPage::default().render(),
            _ => {
                tracing::error!(error = %self, "request failed");
                ServerErrorPage::default().render()
            }
        };

        match page {
            Ok(body) => (status, Html(body)).into_response(),
            Err(error) => {
                tracing::error!(%error, "failed to render error page");
                status.into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_variants_to_status_codes() {
        assert_eq!(FyyurError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            FyyurError::Database(sqlx::Error::RowNotFound).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            FyyurError::ServerError("boom".to_owned()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn error_pages_use_matching_status() {
        assert_eq!(
            FyyurError::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            FyyurError::ServerError("boom".to_owned())
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
