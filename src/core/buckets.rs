use crate::core::scoring::{compute_scores, TemperamentScores};
use crate::models::{DogRecord, TemperamentCategory};

/// Map a 0-100 category score onto a 0-4 match value
///
/// 0 means "no usable score". Match values are only compared for
/// equality, never for magnitude.
#[inline]
pub fn bucket_temperament(score: u8) -> u8 {
    match score {
        1..=25 => 1,
        26..=50 => 2,
        51..=75 => 3,
        76..=100 => 4,
        _ => 0,
    }
}

/// Map a weight in pounds onto a 1-6 match value
///
/// Exactly 15 lbs and exactly 100 lbs fall between ranges and map to 0,
/// as do negative and non-finite weights.
#[inline]
pub fn bucket_weight(weight_lbs: f64) -> u8 {
    if (0.0..15.0).contains(&weight_lbs) {
        1
    } else if weight_lbs > 15.0 && weight_lbs <= 30.0 {
        2
    } else if weight_lbs > 30.0 && weight_lbs <= 50.0 {
        3
    } else if weight_lbs > 50.0 && weight_lbs <= 75.0 {
        4
    } else if weight_lbs > 75.0 && weight_lbs < 100.0 {
        5
    } else if weight_lbs > 100.0 && weight_lbs.is_finite() {
        6
    } else {
        0
    }
}

/// Bucketed view of a dog used for equality matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchValueProfile {
    /// Compared by exact string equality
    pub breed: Option<String>,
    pub weight: u8,
    pub temperament: [u8; TemperamentCategory::COUNT],
}

impl MatchValueProfile {
    /// Score and bucket a dog
    ///
    /// Missing temperament data gives all-zero temperament buckets and a
    /// missing weight gives weight bucket 0.
    pub fn from_dog(dog: &DogRecord) -> Self {
        let scores = dog
            .temperament
            .as_ref()
            .map(compute_scores)
            .unwrap_or_default();

        Self {
            breed: dog.breed.clone(),
            weight: dog.weight_lbs.map_or(0, bucket_weight),
            temperament: bucket_scores(&scores),
        }
    }

    #[inline]
    pub fn temperament_value(&self, category: TemperamentCategory) -> u8 {
        self.temperament[category.index()]
    }
}

fn bucket_scores(scores: &TemperamentScores) -> [u8; TemperamentCategory::COUNT] {
    let mut buckets = [0u8; TemperamentCategory::COUNT];
    for (category, score) in scores.iter() {
        buckets[category.index()] = bucket_temperament(score);
    }
    buckets
}
