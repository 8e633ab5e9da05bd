use crate::domain::DogProfile;

/// Renders the instruction template with the profile fields embedded
/// verbatim. The example object pins the output format the model is asked
/// to follow.
pub fn build_recommendation_prompt(profile: &DogProfile) -> String {
    format!(
        r#"You are a helpful AI assistant for a dog product company. Your goal is to provide a personalized product recommendation and a relevant insight based on the dog's profile.

Dog Breed: {dog_breed}
Dietary Preference: {diet_preference}
Desired Product Type: {product_type}

Please provide:
1. A specific product recommendation.
2. An insight related to cost-benefit or community behavior for this product/dog type.

Format your response strictly as a JSON object with two keys: "recommendation" and "insight".
Example:
{{
  "recommendation": "XYZ Brand Organic Chicken Dog Food",
  "insight": "80% of Golden Retriever owners prefer large bags for cost savings."
}}
Ensure the recommendation is plausible for the given inputs and the insight is creative and relevant."#,
        dog_breed = profile.dog_breed,
        diet_preference = profile.diet_preference,
        product_type = profile.product_type,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_profile_fields() {
        let profile = DogProfile {
            dog_breed: "Labrador".to_string(),
            diet_preference: "grain-free".to_string(),
            product_type: "food".to_string(),
        };
        let prompt = build_recommendation_prompt(&profile);
        assert!(prompt.contains("Dog Breed: Labrador"));
        assert!(prompt.contains("Dietary Preference: grain-free"));
        assert!(prompt.contains("Desired Product Type: food"));
        assert!(prompt.contains(r#"two keys: "recommendation" and "insight""#));
    }
}
