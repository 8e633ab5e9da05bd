use serde::{Deserialize, Serialize};

/// The answer relayed to the front end exactly as the model produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub recommendation: String,
    pub insight: String,
}
