use pawpick_errors::AppError;
use serde::Deserialize;

use super::DogProfile;

/// Raw body of `POST /get_recommendation`. Fields default to empty so that
/// an absent field fails validation the same way an empty one does.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub dog_breed: String,
    #[serde(default)]
    pub diet_preference: String,
    #[serde(default)]
    pub product_type: String,
}

impl RecommendationRequest {
    /// Trims all three fields. Breed and product type must be non-empty;
    /// the diet preference may stay empty.
    pub fn validate(&self) -> Result<DogProfile, AppError> {
        let dog_breed = self.dog_breed.trim();
        let diet_preference = self.diet_preference.trim();
        let product_type = self.product_type.trim();

        if dog_breed.is_empty() || product_type.is_empty() {
            return Err(AppError::Validation(
                "Dog breed and product type are required.".to_string(),
            ));
        }

        Ok(DogProfile {
            dog_breed: dog_breed.to_string(),
            diet_preference: diet_preference.to_string(),
            product_type: product_type.to_string(),
        })
    }
}
