//! Error types for dayserve

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// The two user-facing error kinds. The display string is the exact
/// message carried in the JSON error envelope.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Day not found")]
    DayNotFound,

    #[error("Missing 'name' in request")]
    MissingName,
}
