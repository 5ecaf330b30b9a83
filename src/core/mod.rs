// Core algorithm exports
pub mod buckets;
pub mod completeness;
pub mod matcher;
pub mod scoring;

pub use buckets::{bucket_temperament, bucket_weight, MatchValueProfile};
pub use completeness::{is_complete, missing_fields, ProfileField};
pub use matcher::{describe_age, match_count, DogMatchTracker, Matcher, MAX_MATCHES, MAX_MATCH_COUNT};
pub use scoring::{compute_scores, TemperamentScores};
