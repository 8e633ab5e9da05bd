use std::time::Duration;

use pawpick_errors::AppError;

use super::prompt::build_recommendation_prompt;
use super::types::{ChatCompletionRequest, ChatCompletionResponse};
use crate::domain::DogProfile;

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const MODEL: &str = "llama3-8b-8192";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct GroqClient {
    http_client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl GroqClient {
    pub fn new(api_key: String) -> Self {
        Self::with_endpoint(api_key, GROQ_API_URL.to_string())
    }

    /// Points the client at an alternate OpenAI-compatible completions
    /// endpoint, e.g. a self-hosted gateway.
    pub fn with_endpoint(api_key: String, endpoint: String) -> Self {
        Self {
            http_client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
            api_key,
            endpoint,
        }
    }

    /// Sends the rendered prompt and returns the first choice's content,
    /// which the model was asked to emit as a JSON string. One attempt, no
    /// retries.
    pub async fn generate_recommendation(&self, profile: &DogProfile) -> Result<String, AppError> {
        let prompt = build_recommendation_prompt(profile);
        let request = ChatCompletionRequest::new(MODEL, prompt);

        let response = self
            .http_client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::UpstreamTransport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Groq API error: {} - {}", status, body);
            return Err(AppError::UpstreamTransport(format!("API error: {}", status)));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::UpstreamTransport(e.to_string()))?;

        completion
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or_else(|| {
                AppError::UpstreamFormat("no completion choices in response".to_string())
            })
    }
}
