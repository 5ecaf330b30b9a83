use serde::{Deserialize, Serialize};

/// Highest value a single raw rating can take
pub const MAX_RATING: u8 = 10;

/// Every individually rated temperament trait
///
/// Each variant maps to exactly one field of [`RawTemperament`] and one
/// column of the `temperaments` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TemperamentTrait {
    Playfulness,
    LikesToys,
    LikesToFetch,
    LikesToTug,
    LikesToChase,
    EnergyLevel,
    FriendlyWithStrangers,
    FriendlyWithDogs,
    FriendlyWithKids,
    FriendlyWithCats,
    Affectionate,
    Athleticism,
    Endurance,
    LikesToSwim,
    Obedience,
    Trainability,
    LeashManners,
    Empathetic,
    Gentleness,
    Intelligence,
    DogAggression,
    PeopleAggression,
    ResourceGuarding,
    Anxiety,
    SeparationAnxiety,
    NoiseSensitivity,
    PreyDrive,
    HerdingInstinct,
    Digging,
    Confidence,
    Stubbornness,
    Independence,
    Shedding,
    SmellRating,
}

impl TemperamentTrait {
    pub const ALL: [TemperamentTrait; 34] = [
        Self::Playfulness,
        Self::LikesToys,
        Self::LikesToFetch,
        Self::LikesToTug,
        Self::LikesToChase,
        Self::EnergyLevel,
        Self::FriendlyWithStrangers,
        Self::FriendlyWithDogs,
        Self::FriendlyWithKids,
        Self::FriendlyWithCats,
        Self::Affectionate,
        Self::Athleticism,
        Self::Endurance,
        Self::LikesToSwim,
        Self::Obedience,
        Self::Trainability,
        Self::LeashManners,
        Self::Empathetic,
        Self::Gentleness,
        Self::Intelligence,
        Self::DogAggression,
        Self::PeopleAggression,
        Self::ResourceGuarding,
        Self::Anxiety,
        Self::SeparationAnxiety,
        Self::NoiseSensitivity,
        Self::PreyDrive,
        Self::HerdingInstinct,
        Self::Digging,
        Self::Confidence,
        Self::Stubbornness,
        Self::Independence,
        Self::Shedding,
        Self::SmellRating,
    ];

    /// Column name in the `temperaments` table
    pub fn column(self) -> &'static str {
        match self {
            Self::Playfulness => "playfulness",
            Self::LikesToys => "likes_toys",
            Self::LikesToFetch => "likes_to_fetch",
            Self::LikesToTug => "likes_to_tug",
            Self::LikesToChase => "likes_to_chase",
            Self::EnergyLevel => "energy_level",
            Self::FriendlyWithStrangers => "friendly_with_strangers",
            Self::FriendlyWithDogs => "friendly_with_dogs",
            Self::FriendlyWithKids => "friendly_with_kids",
            Self::FriendlyWithCats => "friendly_with_cats",
            Self::Affectionate => "affectionate",
            Self::Athleticism => "athleticism",
            Self::Endurance => "endurance",
            Self::LikesToSwim => "likes_to_swim",
            Self::Obedience => "obedience",
            Self::Trainability => "trainability",
            Self::LeashManners => "leash_manners",
            Self::Empathetic => "empathetic",
            Self::Gentleness => "gentleness",
            Self::Intelligence => "intelligence",
            Self::DogAggression => "dog_aggression",
            Self::PeopleAggression => "people_aggression",
            Self::ResourceGuarding => "resource_guarding",
            Self::Anxiety => "anxiety",
            Self::SeparationAnxiety => "separation_anxiety",
            Self::NoiseSensitivity => "noise_sensitivity",
            Self::PreyDrive => "prey_drive",
            Self::HerdingInstinct => "herding_instinct",
            Self::Digging => "digging",
            Self::Confidence => "confidence",
            Self::Stubbornness => "stubbornness",
            Self::Independence => "independence",
            Self::Shedding => "shedding",
            Self::SmellRating => "smell_rating",
        }
    }
}

/// The 13 normalized categories a dog is scored on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TemperamentCategory {
    Playfulness,
    Friendliness,
    Athletic,
    Training,
    Empathy,
    Intelligence,
    Aggression,
    Anxiety,
    Instinct,
    Confidence,
    Stubbornness,
    Shedding,
    Smelliness,
}

impl TemperamentCategory {
    pub const COUNT: usize = 13;

    pub const ALL: [TemperamentCategory; Self::COUNT] = [
        Self::Playfulness,
        Self::Friendliness,
        Self::Athletic,
        Self::Training,
        Self::Empathy,
        Self::Intelligence,
        Self::Aggression,
        Self::Anxiety,
        Self::Instinct,
        Self::Confidence,
        Self::Stubbornness,
        Self::Shedding,
        Self::Smelliness,
    ];

    /// Position of this category in score and bucket arrays
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Raw traits summed into this category.
    ///
    /// Confidence lists only its own rating; its anxiety penalty is applied
    /// separately by the scorer.
    pub fn traits(self) -> &'static [TemperamentTrait] {
        use TemperamentTrait as T;

        match self {
            Self::Playfulness => &[
                T::Playfulness,
                T::LikesToys,
                T::LikesToFetch,
                T::LikesToTug,
                T::LikesToChase,
                T::EnergyLevel,
            ],
            Self::Friendliness => &[
                T::FriendlyWithStrangers,
                T::FriendlyWithDogs,
                T::FriendlyWithKids,
                T::FriendlyWithCats,
                T::Affectionate,
            ],
            Self::Athletic => &[T::Athleticism, T::Endurance, T::LikesToSwim],
            Self::Training => &[T::Obedience, T::Trainability, T::LeashManners],
            Self::Empathy => &[T::Empathetic, T::Gentleness],
            Self::Intelligence => &[T::Intelligence],
            Self::Aggression => &[T::DogAggression, T::PeopleAggression, T::ResourceGuarding],
            Self::Anxiety => &[T::Anxiety, T::SeparationAnxiety, T::NoiseSensitivity],
            Self::Instinct => &[T::PreyDrive, T::HerdingInstinct, T::Digging],
            Self::Confidence => &[T::Confidence],
            Self::Stubbornness => &[T::Stubbornness, T::Independence],
            Self::Shedding => &[T::Shedding],
            Self::Smelliness => &[T::SmellRating],
        }
    }
}

/// Coat type, recorded but not used for matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoatType {
    Hair,
    Fur,
}

/// Raw owner-entered temperament ratings.
///
/// `None` means the trait was never rated. Only values in `1..=10` count
/// as rated; see [`RawTemperament::is_rated`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTemperament {
    #[serde(default)]
    pub playfulness: Option<u8>,
    #[serde(default)]
    pub likes_toys: Option<u8>,
    #[serde(default)]
    pub likes_to_fetch: Option<u8>,
    #[serde(default)]
    pub likes_to_tug: Option<u8>,
    #[serde(default)]
    pub likes_to_chase: Option<u8>,
    #[serde(default)]
    pub energy_level: Option<u8>,
    #[serde(default)]
    pub friendly_with_strangers: Option<u8>,
    #[serde(default)]
    pub friendly_with_dogs: Option<u8>,
    #[serde(default)]
    pub friendly_with_kids: Option<u8>,
    #[serde(default)]
    pub friendly_with_cats: Option<u8>,
    #[serde(default)]
    pub affectionate: Option<u8>,
    #[serde(default)]
    pub athleticism: Option<u8>,
    #[serde(default)]
    pub endurance: Option<u8>,
    #[serde(default)]
    pub likes_to_swim: Option<u8>,
    #[serde(default)]
    pub obedience: Option<u8>,
    #[serde(default)]
    pub trainability: Option<u8>,
    #[serde(default)]
    pub leash_manners: Option<u8>,
    #[serde(default)]
    pub empathetic: Option<u8>,
    #[serde(default)]
    pub gentleness: Option<u8>,
    #[serde(default)]
    pub intelligence: Option<u8>,
    #[serde(default)]
    pub dog_aggression: Option<u8>,
    #[serde(default)]
    pub people_aggression: Option<u8>,
    #[serde(default)]
    pub resource_guarding: Option<u8>,
    #[serde(default)]
    pub anxiety: Option<u8>,
    #[serde(default)]
    pub separation_anxiety: Option<u8>,
    #[serde(default)]
    pub noise_sensitivity: Option<u8>,
    #[serde(default)]
    pub prey_drive: Option<u8>,
    #[serde(default)]
    pub herding_instinct: Option<u8>,
    #[serde(default)]
    pub digging: Option<u8>,
    #[serde(default)]
    pub confidence: Option<u8>,
    #[serde(default)]
    pub stubbornness: Option<u8>,
    #[serde(default)]
    pub independence: Option<u8>,
    #[serde(default)]
    pub shedding: Option<u8>,
    #[serde(default)]
    pub smell_rating: Option<u8>,
    #[serde(default)]
    pub hair_or_fur: Option<CoatType>,
    #[serde(default)]
    pub housebroken: Option<bool>,
}

impl RawTemperament {
    /// Every trait rated with the same value
    pub fn uniform(value: u8) -> Self {
        let mut temperament = Self::default();
        for t in TemperamentTrait::ALL {
            temperament.set_rating(t, Some(value));
        }
        temperament
    }

    /// Raw rating for a trait, `None` if never rated
    pub fn rating(&self, t: TemperamentTrait) -> Option<u8> {
        use TemperamentTrait as T;

        match t {
            T::Playfulness => self.playfulness,
            T::LikesToys => self.likes_toys,
            T::LikesToFetch => self.likes_to_fetch,
            T::LikesToTug => self.likes_to_tug,
            T::LikesToChase => self.likes_to_chase,
            T::EnergyLevel => self.energy_level,
            T::FriendlyWithStrangers => self.friendly_with_strangers,
            T::FriendlyWithDogs => self.friendly_with_dogs,
            T::FriendlyWithKids => self.friendly_with_kids,
            T::FriendlyWithCats => self.friendly_with_cats,
            T::Affectionate => self.affectionate,
            T::Athleticism => self.athleticism,
            T::Endurance => self.endurance,
            T::LikesToSwim => self.likes_to_swim,
            T::Obedience => self.obedience,
            T::Trainability => self.trainability,
            T::LeashManners => self.leash_manners,
            T::Empathetic => self.empathetic,
            T::Gentleness => self.gentleness,
            T::Intelligence => self.intelligence,
            T::DogAggression => self.dog_aggression,
            T::PeopleAggression => self.people_aggression,
            T::ResourceGuarding => self.resource_guarding,
            T::Anxiety => self.anxiety,
            T::SeparationAnxiety => self.separation_anxiety,
            T::NoiseSensitivity => self.noise_sensitivity,
            T::PreyDrive => self.prey_drive,
            T::HerdingInstinct => self.herding_instinct,
            T::Digging => self.digging,
            T::Confidence => self.confidence,
            T::Stubbornness => self.stubbornness,
            T::Independence => self.independence,
            T::Shedding => self.shedding,
            T::SmellRating => self.smell_rating,
        }
    }

    pub fn set_rating(&mut self, t: TemperamentTrait, value: Option<u8>) {
        use TemperamentTrait as T;

        let slot = match t {
            T::Playfulness => &mut self.playfulness,
            T::LikesToys => &mut self.likes_toys,
            T::LikesToFetch => &mut self.likes_to_fetch,
            T::LikesToTug => &mut self.likes_to_tug,
            T::LikesToChase => &mut self.likes_to_chase,
            T::EnergyLevel => &mut self.energy_level,
            T::FriendlyWithStrangers => &mut self.friendly_with_strangers,
            T::FriendlyWithDogs => &mut self.friendly_with_dogs,
            T::FriendlyWithKids => &mut self.friendly_with_kids,
            T::FriendlyWithCats => &mut self.friendly_with_cats,
            T::Affectionate => &mut self.affectionate,
            T::Athleticism => &mut self.athleticism,
            T::Endurance => &mut self.endurance,
            T::LikesToSwim => &mut self.likes_to_swim,
            T::Obedience => &mut self.obedience,
            T::Trainability => &mut self.trainability,
            T::LeashManners => &mut self.leash_manners,
            T::Empathetic => &mut self.empathetic,
            T::Gentleness => &mut self.gentleness,
            T::Intelligence => &mut self.intelligence,
            T::DogAggression => &mut self.dog_aggression,
            T::PeopleAggression => &mut self.people_aggression,
            T::ResourceGuarding => &mut self.resource_guarding,
            T::Anxiety => &mut self.anxiety,
            T::SeparationAnxiety => &mut self.separation_anxiety,
            T::NoiseSensitivity => &mut self.noise_sensitivity,
            T::PreyDrive => &mut self.prey_drive,
            T::HerdingInstinct => &mut self.herding_instinct,
            T::Digging => &mut self.digging,
            T::Confidence => &mut self.confidence,
            T::Stubbornness => &mut self.stubbornness,
            T::Independence => &mut self.independence,
            T::Shedding => &mut self.shedding,
            T::SmellRating => &mut self.smell_rating,
        };
        *slot = value;
    }

    /// Rating as used by the scorer: unrated counts as 0, capped at 10
    #[inline]
    pub fn score_value(&self, t: TemperamentTrait) -> u8 {
        self.rating(t).unwrap_or(0).min(MAX_RATING)
    }

    /// A trait is rated when it holds a value in `1..=10`
    #[inline]
    pub fn is_rated(&self, t: TemperamentTrait) -> bool {
        matches!(self.rating(t), Some(v) if (1..=MAX_RATING).contains(&v))
    }

    /// Traits that are not rated, in declaration order
    pub fn unrated_traits(&self) -> Vec<TemperamentTrait> {
        TemperamentTrait::ALL
            .into_iter()
            .filter(|t| !self.is_rated(*t))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        TemperamentTrait::ALL.iter().all(|t| self.is_rated(*t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_trait_belongs_to_one_category() {
        let mut seen = HashSet::new();
        for category in TemperamentCategory::ALL {
            for t in category.traits() {
                assert!(seen.insert(*t), "{:?} listed twice", t);
            }
        }
        // Anxiety is read by Confidence too, but only listed once
        assert_eq!(seen.len(), TemperamentTrait::ALL.len());
    }

    #[test]
    fn test_category_index_matches_position() {
        for (i, category) in TemperamentCategory::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_rating_roundtrips_through_field_mapping() {
        let mut temperament = RawTemperament::default();
        for (i, t) in TemperamentTrait::ALL.iter().enumerate() {
            temperament.set_rating(*t, Some((i % 10) as u8 + 1));
        }
        for (i, t) in TemperamentTrait::ALL.iter().enumerate() {
            assert_eq!(temperament.rating(*t), Some((i % 10) as u8 + 1));
        }
    }

    #[test]
    fn test_columns_are_unique() {
        let columns: HashSet<_> = TemperamentTrait::ALL.iter().map(|t| t.column()).collect();
        assert_eq!(columns.len(), TemperamentTrait::ALL.len());
    }

    #[test]
    fn test_zero_is_not_rated() {
        let mut temperament = RawTemperament::uniform(5);
        assert!(temperament.is_complete());

        temperament.set_rating(TemperamentTrait::Digging, Some(0));
        assert!(!temperament.is_complete());
        assert_eq!(temperament.unrated_traits(), vec![TemperamentTrait::Digging]);
    }

    #[test]
    fn test_score_value_caps_and_defaults() {
        let mut temperament = RawTemperament::default();
        assert_eq!(temperament.score_value(TemperamentTrait::Shedding), 0);

        temperament.set_rating(TemperamentTrait::Shedding, Some(14));
        assert_eq!(temperament.score_value(TemperamentTrait::Shedding), 10);
        assert!(!temperament.is_rated(TemperamentTrait::Shedding));
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{"likesToys": 7, "smellRating": 3, "hairOrFur": "fur", "housebroken": true}"#;
        let temperament: RawTemperament = serde_json::from_str(json).unwrap();

        assert_eq!(temperament.likes_toys, Some(7));
        assert_eq!(temperament.smell_rating, Some(3));
        assert_eq!(temperament.hair_or_fur, Some(CoatType::Fur));
        assert_eq!(temperament.playfulness, None);
    }
}
