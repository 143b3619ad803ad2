//! Core domain types

use serde::{Deserialize, Serialize};

/// A single day-of-week record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    pub id: u64,
    pub name: String,
}
