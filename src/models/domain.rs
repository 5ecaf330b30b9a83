use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::models::temperament::RawTemperament;

/// Dog sex as recorded on the profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(format!("unknown gender: {}", other)),
        }
    }
}

/// Free-text biography attached to a dog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Biography {
    #[serde(default)]
    pub about: Option<String>,
}

/// Dog profile as handed to the matching engine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DogRecord {
    pub id: Uuid,
    pub name: String,
    pub owner_id: Uuid,
    pub owner_name: String,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub weight_lbs: Option<f64>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub biography: Option<Biography>,
    #[serde(default)]
    pub temperament: Option<RawTemperament>,
}

impl DogRecord {
    /// Biography "about" text, if any
    pub fn about(&self) -> Option<&str> {
        self.biography.as_ref().and_then(|b| b.about.as_deref())
    }
}

/// Candidate summary returned in a match list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub dog_id: Uuid,
    pub name: String,
    pub breed: Option<String>,
    pub gender: Option<String>,
    pub weight_lbs: Option<f64>,
    pub age: Option<String>,
    pub profile_image: Option<String>,
    pub owner_id: Uuid,
    pub owner_name: String,
    pub match_count: u8,
}

/// Result of ranking candidates against one primary dog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DogMatches {
    pub dog_id: Uuid,
    pub dog_name: String,
    pub owner_id: Uuid,
    pub owner_name: String,
    pub completed_profile: bool,
    pub matches: Vec<Match>,
}

impl DogMatches {
    /// Result for a primary dog whose profile is not ready for matching
    pub fn incomplete(dog: &DogRecord) -> Self {
        Self {
            dog_id: dog.id,
            dog_name: dog.name.clone(),
            owner_id: dog.owner_id,
            owner_name: dog.owner_name.clone(),
            completed_profile: false,
            matches: Vec::new(),
        }
    }
}
