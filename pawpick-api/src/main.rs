use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use pawpick_app::domain::{Recommendation, RecommendationRequest};
use pawpick_app::AppContext;
use pawpick_errors::AppError;
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u16 = 8000;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let app_context = AppContext::from_env();

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr = format!("0.0.0.0:{}", port);

    let app = app_router(app_context);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}

fn app_router(ctx: AppContext) -> Router {
    Router::new()
        .route("/get_recommendation", post(get_recommendation))
        .route_service("/", ServeFile::new("templates/index.html"))
        .nest_service("/static", ServeDir::new("templates"))
        .layer(CompressionLayer::new())
        .with_state(ctx)
}

async fn get_recommendation(
    State(ctx): State<AppContext>,
    Json(request): Json<RecommendationRequest>,
) -> Result<Json<Recommendation>, AppError> {
    let recommendation = ctx.recommend_product.execute(request).await?;
    Ok(Json(recommendation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use pawpick_app::infrastructure::groq::GroqClient;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn router_for(server: &MockServer) -> Router {
        let client = GroqClient::with_endpoint(
            "test-key".to_string(),
            format!("{}/openai/v1/chat/completions", server.uri()),
        );
        app_router(AppContext::new(client))
    }

    fn post_recommendation(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/get_recommendation")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn blank_breed_returns_400_without_upstream_call() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let response = router_for(&server)
            .oneshot(post_recommendation(json!({
                "dog_breed": "  ",
                "diet_preference": "grain-free",
                "product_type": "food"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Dog breed and product type are required.");
    }

    #[tokio::test]
    async fn relays_model_answer_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/openai/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "message": { "content":
                    "{\"recommendation\":\"ABC Grain-Free Kibble\",\"insight\":\"60% of Labrador owners buy 30lb bags\"}"
                } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = router_for(&server)
            .oneshot(post_recommendation(json!({
                "dog_breed": "Labrador",
                "diet_preference": "grain-free",
                "product_type": "food"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(
            body,
            json!({
                "recommendation": "ABC Grain-Free Kibble",
                "insight": "60% of Labrador owners buy 30lb bags"
            })
        );
    }

    #[tokio::test]
    async fn upstream_failure_returns_500_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/openai/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;

        let response = router_for(&server)
            .oneshot(post_recommendation(json!({
                "dog_breed": "Labrador",
                "diet_preference": "",
                "product_type": "toy"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        let message = body["error"].as_str().unwrap();
        assert!(message.contains("Failed to connect to recommendation service"));
    }
}
