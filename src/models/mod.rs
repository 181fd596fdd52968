//! The data-access layer: one module per table.

pub mod artist;
pub mod show;
pub mod venue;

/// Whether `name` contains `term` as a substring, ignoring case.
///
/// SQLite's `LIKE` only folds ASCII, so name searches are filtered here.
pub(crate) fn name_contains(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}
