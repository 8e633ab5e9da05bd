use std::sync::Arc;

use crate::application::RecommendProduct;
use crate::infrastructure::groq::GroqClient;

/// Shared per-process state handed to request handlers. Built once at
/// startup; the credential is never read from the environment inside a
/// handler.
#[derive(Clone)]
pub struct AppContext {
    pub recommend_product: Arc<RecommendProduct>,
}

impl AppContext {
    pub fn new(client: GroqClient) -> Self {
        Self {
            recommend_product: Arc::new(RecommendProduct::new(client)),
        }
    }

    pub fn from_env() -> Self {
        let api_key = std::env::var("GROQ_API_KEY")
            .expect("GROQ_API_KEY environment variable not set. Please create a .env file.");
        Self::new(GroqClient::new(api_key))
    }
}
