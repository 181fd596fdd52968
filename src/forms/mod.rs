//! Parsing and validation of the submitted HTML forms.
//!
//! Form bodies arrive as ordered `(key, value)` pairs so that repeated keys
//! (the multi-select `genres` input) are kept. Each form keeps the raw strings
//! it was given, so it can be rendered again next to its field errors.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

pub mod artist;
pub mod choices;
pub mod show;
pub mod venue;

pub use artist::ArtistForm;
pub use show::ShowForm;
pub use venue::VenueForm;

/// A raw `application/x-www-form-urlencoded` body.
pub type FormPairs = Vec<(String, String)>;

/// A constraint that one submitted field failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every field error found in one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(Vec<FieldError>);

impl FormErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }

    /// The message for `field`, or an empty string if it passed.
    pub fn message(&self, field: &str) -> &str {
        self.0
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
            .unwrap_or("")
    }

    fn into_result<T>(self, value: T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages = self
            .0
            .iter()
            .map(|error| format!("{}: {}", error.field, error.message))
            .collect::<Vec<_>>();

        write!(f, "{}", messages.join(", "))
    }
}

/// The first value submitted for `key`, trimmed.
fn value_of(pairs: &[(String, String)], key: &str) -> String {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.trim().to_owned())
        .unwrap_or_default()
}

/// Every non-empty value submitted for `key`, in order.
fn values_of(pairs: &[(String, String)], key: &str) -> Vec<String> {
    pairs
        .iter()
        .filter(|(name, value)| name == key && !value.trim().is_empty())
        .map(|(_, value)| value.trim().to_owned())
        .collect()
}

/// Unchecked checkboxes are not submitted at all.
fn checkbox(pairs: &[(String, String)], key: &str) -> bool {
    matches!(
        value_of(pairs, key).to_ascii_lowercase().as_str(),
        "y" | "yes" | "on" | "true" | "1"
    )
}

fn required(errors: &mut FormErrors, field: &'static str, value: &str) -> String {
    if value.is_empty() {
        errors.add(field, "This field is required.");
    }

    value.to_owned()
}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

fn phone(errors: &mut FormErrors, value: &str) -> Option<String> {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    let pattern =
        PHONE.get_or_init(|| Regex::new(r"^\d{3}[-. ]?\d{3}[-. ]?\d{4}$").expect("valid regex"));

    if !value.is_empty() && !pattern.is_match(value) {
        errors.add("phone", "Phone numbers look like 123-456-7890.");
    }

    optional(value)
}

fn url(errors: &mut FormErrors, field: &'static str, value: &str) -> Option<String> {
    static URL: OnceLock<Regex> = OnceLock::new();
    let pattern = URL.get_or_init(|| Regex::new(r"^https?://[^\s/$.?#][^\s]*$").expect("valid regex"));

    if !value.is_empty() && !pattern.is_match(value) {
        errors.add(field, "Invalid URL.");
    }

    optional(value)
}

fn state(errors: &mut FormErrors, value: &str) -> String {
    if value.is_empty() {
        errors.add("state", "This field is required.");
    } else if !choices::STATES.contains(&value) {
        errors.add("state", "Invalid value, must be one of the listed states.");
    }

    value.to_owned()
}

fn genres(errors: &mut FormErrors, values: &[String]) -> Vec<String> {
    if values.is_empty() {
        errors.add("genres", "Pick at least one genre.");
    } else if let Some(unknown) = values
        .iter()
        .find(|genre| !choices::GENRES.contains(&genre.as_str()))
    {
        errors.add("genres", format!("'{}' is not a listed genre.", unknown));
    }

    values.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> FormPairs {
        items
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn repeated_keys_are_all_kept() {
        let body = pairs(&[("genres", "Jazz"), ("name", "x"), ("genres", "Folk"), ("genres", " ")]);

        assert_eq!(values_of(&body, "genres"), vec!["Jazz", "Folk"]);
        assert_eq!(value_of(&body, "name"), "x");
        assert_eq!(value_of(&body, "missing"), "");
    }

    #[test]
    fn checkboxes_are_only_set_when_submitted() {
        assert!(checkbox(&pairs(&[("seeking_talent", "y")]), "seeking_talent"));
        assert!(checkbox(&pairs(&[("seeking_talent", "on")]), "seeking_talent"));
        assert!(!checkbox(&pairs(&[]), "seeking_talent"));
        assert!(!checkbox(&pairs(&[("seeking_talent", "no")]), "seeking_talent"));
    }

    #[test]
    fn phone_numbers_must_have_ten_digits() {
        let mut errors = FormErrors::default();
        assert_eq!(phone(&mut errors, "326-123-5000"), Some("326-123-5000".to_owned()));
        assert_eq!(phone(&mut errors, ""), None);
        assert!(errors.is_empty());

        phone(&mut errors, "call me");
        assert_eq!(errors.message("phone"), "Phone numbers look like 123-456-7890.");
    }

    #[test]
    fn links_must_be_http_urls() {
        let mut errors = FormErrors::default();
        url(&mut errors, "image_link", "https://images.example.com/a.png");
        url(&mut errors, "facebook_link", "");
        assert!(errors.is_empty());

        url(&mut errors, "website_link", "ftp://example.com");
        assert_eq!(errors.message("website_link"), "Invalid URL.");
        assert_eq!(errors.message("image_link"), "");
    }

    #[test]
    fn genres_come_from_the_listed_choices() {
        let mut errors = FormErrors::default();
        genres(&mut errors, &["Jazz".to_owned(), "R&B".to_owned()]);
        assert!(errors.is_empty());

        genres(&mut errors, &[]);
        genres(&mut errors, &["Polka".to_owned()]);
        assert_eq!(errors.fields().len(), 2);
    }

    #[test]
    fn errors_display_every_field() {
        let mut errors = FormErrors::default();
        errors.add("name", "This field is required.");
        errors.add("state", "This field is required.");

        assert_eq!(
            errors.to_string(),
            "name: This field is required., state: This field is required."
        );
    }
}
