use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Request to rank matches for one of the owner's dogs
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(custom(function = "validate_not_nil"))]
    #[serde(alias = "dog_id", rename = "dogId")]
    pub dog_id: Uuid,
    #[validate(custom(function = "validate_not_nil"))]
    #[serde(alias = "owner_id", rename = "ownerId")]
    pub owner_id: Uuid,
}

fn validate_not_nil(id: &Uuid) -> Result<(), ValidationError> {
    if id.is_nil() {
        return Err(ValidationError::new("nil_uuid"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nil_ids_rejected() {
        let req = FindMatchesRequest {
            dog_id: Uuid::nil(),
            owner_id: Uuid::new_v4(),
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("dog_id"));
    }

    #[test]
    fn test_accepts_snake_case_alias() {
        let dog_id = Uuid::new_v4();
        let owner_id = Uuid::new_v4();
        let json = format!(r#"{{"dog_id": "{}", "ownerId": "{}"}}"#, dog_id, owner_id);

        let req: FindMatchesRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req.dog_id, dog_id);
        assert!(req.validate().is_ok());
    }
}
