//! Dayserve - a small HTTP service serving the days of the week
//!
//! Dayserve exposes one in-memory collection of day records over a
//! JSON HTTP API:
//! - List all days
//! - Fetch a day by id
//! - Append a new day
//! - Health check
//!
//! The store lives for the process lifetime; there is no persistence.

pub mod api;
pub mod config;
pub mod error;
pub mod store;
pub mod types;

pub use error::{Error, Result};
