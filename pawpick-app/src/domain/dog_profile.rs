/// Validated, trimmed input triple. Everything past validation works with
/// this instead of the raw request body.
#[derive(Debug, Clone)]
pub struct DogProfile {
    pub dog_breed: String,
    pub diet_preference: String,
    pub product_type: String,
}
