//! Pawmatch - temperament-based compatibility matching for dog profiles
//!
//! The core engine turns raw temperament ratings into category scores,
//! buckets them into match values, and ranks a candidate pool against a
//! primary dog. The service layer wraps it in an actix-web API backed by
//! PostgreSQL.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{compute_scores, is_complete, Matcher, MatchValueProfile, MAX_MATCHES};
pub use models::{DogMatches, DogRecord, FindMatchesRequest, Match, RawTemperament};
