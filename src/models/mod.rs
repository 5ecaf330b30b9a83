// Model exports
pub mod domain;
pub mod requests;
pub mod responses;
pub mod temperament;

pub use domain::{Biography, DogMatches, DogRecord, Gender, Match};
pub use requests::FindMatchesRequest;
pub use responses::{ErrorResponse, HealthResponse};
pub use temperament::{CoatType, RawTemperament, TemperamentCategory, TemperamentTrait, MAX_RATING};
