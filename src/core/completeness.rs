use serde::Serialize;

use crate::models::{DogRecord, TemperamentTrait};

/// Profile data a dog must have before it can be matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    Breed,
    Birthday,
    ProfileImage,
    Weight,
    Gender,
    Colors,
    About,
    Temperament(TemperamentTrait),
}

#[inline]
fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |s| s.trim().is_empty())
}

/// Check whether a dog has enough populated data to be matchable
///
/// Requires breed, birthday, profile image, weight, gender, at least one
/// colour, non-blank biography text, and every temperament trait rated
/// with a value in `1..=10`.
#[inline]
pub fn is_complete(dog: &DogRecord) -> bool {
    if is_blank(dog.breed.as_deref())
        || dog.birthday.is_none()
        || is_blank(dog.profile_image.as_deref())
        || !has_usable_weight(dog.weight_lbs)
        || dog.gender.is_none()
    {
        return false;
    }

    if !dog.colors.iter().any(|c| !c.trim().is_empty()) {
        return false;
    }

    if is_blank(dog.about()) {
        return false;
    }

    dog.temperament.as_ref().is_some_and(|t| t.is_complete())
}

/// List everything that keeps a dog from being matchable
///
/// Empty exactly when [`is_complete`] returns true.
pub fn missing_fields(dog: &DogRecord) -> Vec<ProfileField> {
    let mut missing = Vec::new();

    if is_blank(dog.breed.as_deref()) {
        missing.push(ProfileField::Breed);
    }
    if dog.birthday.is_none() {
        missing.push(ProfileField::Birthday);
    }
    if is_blank(dog.profile_image.as_deref()) {
        missing.push(ProfileField::ProfileImage);
    }
    if !has_usable_weight(dog.weight_lbs) {
        missing.push(ProfileField::Weight);
    }
    if dog.gender.is_none() {
        missing.push(ProfileField::Gender);
    }
    if !dog.colors.iter().any(|c| !c.trim().is_empty()) {
        missing.push(ProfileField::Colors);
    }
    if is_blank(dog.about()) {
        missing.push(ProfileField::About);
    }

    match &dog.temperament {
        Some(temperament) => missing.extend(
            temperament
                .unrated_traits()
                .into_iter()
                .map(ProfileField::Temperament),
        ),
        None => missing.extend(TemperamentTrait::ALL.into_iter().map(ProfileField::Temperament)),
    }

    missing
}

#[inline]
fn has_usable_weight(weight: Option<f64>) -> bool {
    weight.is_some_and(|w| w.is_finite() && w > 0.0)
}
