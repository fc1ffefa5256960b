//! football-data.org v4 client: authenticated reads for standings and
//! matches, with failures classified into a small taxonomy.

mod client;
mod error;
pub mod types;

pub use client::{Client, BASE_URL, DEFAULT_MATCH_STATUSES};
pub use error::ApiError;
