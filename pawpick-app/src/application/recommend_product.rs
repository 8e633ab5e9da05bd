use pawpick_errors::AppError;

use crate::domain::{Recommendation, RecommendationRequest};
use crate::infrastructure::groq::GroqClient;

/// Turns a raw request body into a `Recommendation`, or a classified
/// failure. Framework-agnostic: the HTTP layer only deserializes the body
/// and serializes the outcome.
pub struct RecommendProduct {
    client: GroqClient,
}

impl RecommendProduct {
    pub fn new(client: GroqClient) -> Self {
        Self { client }
    }

    pub async fn execute(&self, request: RecommendationRequest) -> Result<Recommendation, AppError> {
        let profile = request.validate()?;
        let content = self.client.generate_recommendation(&profile).await?;
        parse_recommendation(&content)
    }
}

/// The model is asked for `{"recommendation": ..., "insight": ...}`;
/// anything else is a contract violation on its side.
fn parse_recommendation(content: &str) -> Result<Recommendation, AppError> {
    let parsed: serde_json::Value = serde_json::from_str(content).map_err(|e| {
        tracing::error!("Invalid JSON from LLM: {}, raw content: {}", e, content);
        AppError::UpstreamFormat(e.to_string())
    })?;

    let recommendation = parsed["recommendation"].as_str().unwrap_or_default();
    let insight = parsed["insight"].as_str().unwrap_or_default();

    if recommendation.is_empty() || insight.is_empty() {
        tracing::warn!("LLM response missing expected keys. Content: {}", content);
        return Err(AppError::UpstreamContent);
    }

    Ok(Recommendation {
        recommendation: recommendation.to_string(),
        insight: insight.to_string(),
    })
}
