use chrono::{Datelike, NaiveDate};

use crate::core::buckets::MatchValueProfile;
use crate::core::completeness::is_complete;
use crate::models::{DogMatches, DogRecord, Match, TemperamentCategory};

/// Points for an identical breed string
pub const BREED_POINTS: u8 = 5;
/// Points for landing in the same weight bucket
pub const WEIGHT_POINTS: u8 = 3;
/// Points for each temperament category in the same bucket
pub const TEMPERAMENT_POINTS: u8 = 1;
/// Highest achievable match count
pub const MAX_MATCH_COUNT: u8 =
    BREED_POINTS + WEIGHT_POINTS + TEMPERAMENT_POINTS * TemperamentCategory::COUNT as u8;
/// Number of matches returned for a primary dog
pub const MAX_MATCHES: usize = 10;

/// Per-candidate accumulator, lives for one ranking request
#[derive(Debug, Clone)]
pub struct DogMatchTracker {
    pub candidate: DogRecord,
    pub profile: MatchValueProfile,
    pub match_count: u8,
}

impl DogMatchTracker {
    pub fn new(candidate: DogRecord) -> Self {
        let profile = MatchValueProfile::from_dog(&candidate);
        Self {
            candidate,
            profile,
            match_count: 0,
        }
    }

    /// Add the points this candidate earns against the primary profile
    pub fn tabulate(&mut self, primary: &MatchValueProfile) {
        self.match_count += match_count(primary, &self.profile);
    }
}

/// Weighted number of agreements between two bucketed profiles
///
/// Breed counts only when both dogs have one. Bucket 0 values are compared
/// like any other value.
pub fn match_count(primary: &MatchValueProfile, candidate: &MatchValueProfile) -> u8 {
    let mut count = 0;

    if let (Some(a), Some(b)) = (&primary.breed, &candidate.breed) {
        if a == b {
            count += BREED_POINTS;
        }
    }

    if primary.weight == candidate.weight {
        count += WEIGHT_POINTS;
    }

    count += primary
        .temperament
        .iter()
        .zip(candidate.temperament.iter())
        .filter(|(a, b)| a == b)
        .count() as u8
        * TEMPERAMENT_POINTS;

    count
}

/// Ranks a candidate pool against a primary dog
///
/// # Pipeline Stages
/// 1. Completeness gate on the primary dog
/// 2. Bucketed profile for the primary and every candidate
/// 3. Match count tabulation
/// 4. Sort by count (descending), then candidate id (ascending), keep the top 10
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher;

impl Matcher {
    pub fn new() -> Self {
        Self
    }

    /// Rank `candidates` for `primary`
    ///
    /// # Arguments
    /// * `primary` - The dog matches are requested for
    /// * `candidates` - Pool already filtered to matchable dogs
    /// * `today` - Reference date for the age shown on each match
    ///
    /// # Returns
    /// `DogMatches` with `completed_profile = false` and no matches when the
    /// primary profile is incomplete
    pub fn rank(
        &self,
        primary: &DogRecord,
        candidates: Vec<DogRecord>,
        today: NaiveDate,
    ) -> DogMatches {
        if !is_complete(primary) {
            tracing::debug!("Dog {} has an incomplete profile, skipping ranking", primary.id);
            return DogMatches::incomplete(primary);
        }

        let total_candidates = candidates.len();
        let primary_profile = MatchValueProfile::from_dog(primary);

        let mut trackers: Vec<DogMatchTracker> = candidates
            .into_iter()
            .filter(|candidate| candidate.id != primary.id)
            .map(DogMatchTracker::new)
            .collect();

        for tracker in trackers.iter_mut() {
            tracker.tabulate(&primary_profile);
        }

        trackers.sort_by(|a, b| {
            b.match_count
                .cmp(&a.match_count)
                .then_with(|| a.candidate.id.cmp(&b.candidate.id))
        });
        trackers.truncate(MAX_MATCHES);

        tracing::debug!(
            "Ranked {} candidates for dog {}, returning {}",
            total_candidates,
            primary.id,
            trackers.len()
        );

        DogMatches {
            dog_id: primary.id,
            dog_name: primary.name.clone(),
            owner_id: primary.owner_id,
            owner_name: primary.owner_name.clone(),
            completed_profile: true,
            matches: trackers
                .into_iter()
                .map(|tracker| to_match(tracker, today))
                .collect(),
        }
    }
}

fn to_match(tracker: DogMatchTracker, today: NaiveDate) -> Match {
    let dog = tracker.candidate;
    Match {
        dog_id: dog.id,
        age: dog.birthday.map(|b| describe_age(b, today)),
        gender: dog.gender.map(|g| g.to_string()),
        name: dog.name,
        breed: dog.breed,
        weight_lbs: dog.weight_lbs,
        profile_image: dog.profile_image,
        owner_id: dog.owner_id,
        owner_name: dog.owner_name,
        match_count: tracker.match_count,
    }
}

/// Human-readable age, e.g. "3 years" or "7 months"
pub fn describe_age(birthday: NaiveDate, today: NaiveDate) -> String {
    let mut months = (today.year() - birthday.year()) * 12 + today.month() as i32
        - birthday.month() as i32;
    if today.day() < birthday.day() {
        months -= 1;
    }

    if months >= 12 {
        let years = months / 12;
        format!("{} {}", years, if years == 1 { "year" } else { "years" })
    } else if months >= 1 {
        format!("{} {}", months, if months == 1 { "month" } else { "months" })
    } else {
        "Under a month".to_string()
    }
}
