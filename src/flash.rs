//! One-time messages shown on the next rendered page.
//!
//! A handler queues a [Flash] by returning it as part of its response, which
//! sets the `fyyur_flash` cookie. The next page reads it through the
//! [Flashes] extractor, and [expire_delivered] drops the cookie once a page
//! has been rendered for it.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Request};
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderValue};
use axum::middleware::Next;
use axum::response::{IntoResponseParts, Response, ResponseParts};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::FyyurError;

pub const COOKIE_NAME: &str = "fyyur_flash";

const EXPIRED_COOKIE: &str = "fyyur_flash=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == FlashLevel::Error
    }

    fn cookie(&self) -> Result<String, FyyurError> {
        let json = serde_json::to_vec(&[self]).map_err(|err| {
            FyyurError::ServerError(format!("Failed to serialize flash message: {}", err))
        })?;

        Ok(format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            COOKIE_NAME,
            URL_SAFE_NO_PAD.encode(json)
        ))
    }
}

impl IntoResponseParts for Flash {
    type Error = FyyurError;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        let value = HeaderValue::from_str(&self.cookie()?).map_err(|err| {
            FyyurError::ServerError(format!("Invalid flash cookie: {}", err))
        })?;
        res.headers_mut().append(SET_COOKIE, value);

        Ok(res)
    }
}

/// The messages queued for this request. A missing or mangled cookie means none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flashes(pub Vec<Flash>);

impl Flashes {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let messages = cookie_value(headers)
            .and_then(|value| URL_SAFE_NO_PAD.decode(value).ok())
            .and_then(|json| serde_json::from_slice(&json).ok())
            .unwrap_or_default();

        Self(messages)
    }
}

#[axum::async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Flashes {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

fn cookie_value(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|header| header.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == COOKIE_NAME && !value.is_empty())
        .map(|(_, value)| value)
}

fn sets_flash(headers: &HeaderMap) -> bool {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|header| header.to_str().ok())
        .any(|header| header.starts_with(&format!("{}=", COOKIE_NAME)))
}

fn is_page(response: &Response) -> bool {
    response.status().is_success()
        && response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map_or(false, |value| value.starts_with("text/html"))
}

/// Expire the flash cookie once a page has been rendered with its messages.
pub async fn expire_delivered(request: Request, next: Next) -> Response {
    let had_flash = cookie_value(request.headers()).is_some();
    let mut response = next.run(request).await;

    if had_flash && is_page(&response) && !sets_flash(response.headers()) {
        response
            .headers_mut()
            .append(SET_COOKIE, HeaderValue::from_static(EXPIRED_COOKIE));
    }

    response
}
