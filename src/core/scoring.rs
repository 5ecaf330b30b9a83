use serde::{Deserialize, Serialize};

use crate::models::{RawTemperament, TemperamentCategory, TemperamentTrait, MAX_RATING};

/// Normalized 0-100 score for each of the 13 temperament categories
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemperamentScores([u8; TemperamentCategory::COUNT]);

impl TemperamentScores {
    #[inline]
    pub fn get(&self, category: TemperamentCategory) -> u8 {
        self.0[category.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (TemperamentCategory, u8)> + '_ {
        TemperamentCategory::ALL.iter().map(move |c| (*c, self.get(*c)))
    }
}

/// Derive all 13 category scores from raw ratings
///
/// Unrated traits contribute 0. Ratings above 10 are capped at 10 so no
/// score can exceed 100.
pub fn compute_scores(temperament: &RawTemperament) -> TemperamentScores {
    let mut scores = [0u8; TemperamentCategory::COUNT];

    for category in TemperamentCategory::ALL {
        scores[category.index()] = match category {
            TemperamentCategory::Confidence => confidence_score(
                temperament.score_value(TemperamentTrait::Confidence),
                temperament.score_value(TemperamentTrait::Anxiety),
            ),
            _ => category_score(temperament, category.traits()),
        };
    }

    TemperamentScores(scores)
}

/// `round(sum / (10 * n) * 100)` with ties rounded to even
///
/// Evaluated as the exact fraction `sum * 10 / n` so bucket boundaries
/// never see float error.
fn category_score(temperament: &RawTemperament, traits: &[TemperamentTrait]) -> u8 {
    if traits.is_empty() {
        return 0;
    }

    let sum: u32 = traits
        .iter()
        .map(|t| u32::from(temperament.score_value(*t)))
        .sum();
    let max_sum = u32::from(MAX_RATING) * traits.len() as u32;

    round_half_even(sum * 100, max_sum).min(100) as u8
}

/// Confidence penalised by anxiety: `(C - 0.2 * X) * 10`
///
/// `X` is the anxiety rating when `C > 0.2 * A`, otherwise `X` is the
/// confidence rating itself. The fallback subtracts 20% of confidence
/// from itself rather than applying a separate anxiety penalty. This
/// asymmetry is kept as-is; see DESIGN.md.
///
/// Scaled by 10 the formula stays in integers: `10C - 2A` when `5C > A`,
/// else `8C`. Both branches land in 0..=100 for ratings in 0..=10.
fn confidence_score(confidence: u8, anxiety: u8) -> u8 {
    let c = u32::from(confidence);
    let a = u32::from(anxiety);

    let score = if 5 * c > a {
        10 * c - 2 * a
    } else {
        8 * c
    };

    score.min(100) as u8
}

/// Integer division rounding half to even (banker's rounding)
#[inline]
fn round_half_even(numerator: u32, denominator: u32) -> u32 {
    let quotient = numerator / denominator;
    let twice_remainder = 2 * (numerator % denominator);

    if twice_remainder > denominator || (twice_remainder == denominator && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_max_ratings_score_100() {
        let scores = compute_scores(&RawTemperament::uniform(10));

        for (category, score) in scores.iter() {
            if category == TemperamentCategory::Confidence {
                // 10 confidence, 10 anxiety: 100 - 20
                assert_eq!(score, 80);
            } else {
                assert_eq!(score, 100, "{:?}", category);
            }
        }
    }

    #[test]
    fn test_all_zero_ratings_score_0() {
        let scores = compute_scores(&RawTemperament::uniform(0));
        assert!(scores.iter().all(|(_, s)| s == 0));

        let unrated = compute_scores(&RawTemperament::default());
        assert_eq!(scores, unrated);
    }

    #[test]
    fn test_playfulness_divides_by_60() {
        let mut temperament = RawTemperament::uniform(1);
        temperament.playfulness = Some(10);
        temperament.likes_toys = Some(8);
        temperament.likes_to_fetch = Some(7);
        temperament.likes_to_tug = Some(4);
        temperament.likes_to_chase = Some(3);
        temperament.energy_level = Some(5);

        // 37 / 60 * 100 = 61.67
        let scores = compute_scores(&temperament);
        assert_eq!(scores.get(TemperamentCategory::Playfulness), 62);
    }

    #[test]
    fn test_single_rating_categories_scale_by_ten() {
        let mut temperament = RawTemperament::uniform(1);
        temperament.intelligence = Some(7);
        temperament.shedding = Some(3);
        temperament.smell_rating = Some(9);

        let scores = compute_scores(&temperament);
        assert_eq!(scores.get(TemperamentCategory::Intelligence), 70);
        assert_eq!(scores.get(TemperamentCategory::Shedding), 30);
        assert_eq!(scores.get(TemperamentCategory::Smelliness), 90);
    }

    #[test]
    fn test_three_trait_category_rounds() {
        let mut temperament = RawTemperament::uniform(1);
        temperament.obedience = Some(5);
        temperament.trainability = Some(5);
        temperament.leash_manners = Some(4);

        // 14 / 30 * 100 = 46.67
        let scores = compute_scores(&temperament);
        assert_eq!(scores.get(TemperamentCategory::Training), 47);
    }

    #[test]
    fn test_confidence_penalised_by_anxiety() {
        // C = 8 > 0.2 * 5: (8 - 1) * 10
        assert_eq!(confidence_score(8, 5), 70);
        // C = 10, A = 0: no penalty
        assert_eq!(confidence_score(10, 0), 100);
    }

    #[test]
    fn test_confidence_fallback_branch() {
        // C = 1 is not > 0.2 * 10, so X = C: (1 - 0.2) * 10
        assert_eq!(confidence_score(1, 10), 8);
        // C = 2 is exactly 0.2 * 10: still the fallback
        assert_eq!(confidence_score(2, 10), 16);
        // C = 3 > 2: (3 - 2) * 10
        assert_eq!(confidence_score(3, 10), 10);
        assert_eq!(confidence_score(0, 0), 0);
    }

    #[test]
    fn test_round_half_even() {
        assert_eq!(round_half_even(5, 2), 2);
        assert_eq!(round_half_even(7, 2), 4);
        assert_eq!(round_half_even(10, 4), 2);
        assert_eq!(round_half_even(11, 4), 3);
        assert_eq!(round_half_even(9, 4), 2);
    }

    #[test]
    fn test_out_of_range_ratings_are_capped() {
        let temperament = RawTemperament::uniform(25);
        let scores = compute_scores(&temperament);
        assert_eq!(scores.get(TemperamentCategory::Playfulness), 100);
    }

    #[test]
    fn test_missing_rating_counts_as_zero() {
        let mut temperament = RawTemperament::uniform(10);
        temperament.gentleness = None;

        let scores = compute_scores(&temperament);
        assert_eq!(scores.get(TemperamentCategory::Empathy), 50);
    }
}
