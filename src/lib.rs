//! Fyyur: a booking board for live music.
//!
//! Venues and artists list themselves, and shows pair one artist with one
//! venue at a start time. Whether a show is past or upcoming is worked out
//! each time it is viewed.

pub mod config;
pub mod db;
pub mod error;
pub mod flash;
pub mod forms;
pub mod models;
pub mod routes;
pub mod seed;
pub mod templates;
pub mod util;
pub mod views;
