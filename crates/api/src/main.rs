mod config;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use advisor::{Advisor, AdvisorError, GeminiClient};

#[derive(Clone)]
struct AppState {
    advisor: Arc<Advisor>,
}

#[derive(Serialize)]
struct InfoResponse {
    message: &'static str,
}

#[derive(Deserialize)]
struct QueryRequest {
    /// A missing field is treated like an empty query: rejected with 400
    /// before the oracle is ever invoked.
    #[serde(default)]
    query: String,
}

#[derive(Serialize)]
struct QueryResponse {
    response: String,
    budget_breakdown: Option<HashMap<String, f64>>,
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = config::ApiConfig::from_env();

    if config.gemini_api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY not found in environment variables");
    }

    let oracle = GeminiClient::new(
        config.gemini_base_url.clone(),
        config.gemini_model.clone(),
        config.gemini_api_key.clone().unwrap_or_default(),
        config.request_timeout,
    )
    .expect("Failed to build Gemini client");

    let state = AppState {
        advisor: Arc::new(Advisor::new(Arc::new(oracle))),
    };

    // For production, restrict origins to the frontend URL
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        .route("/", get(read_root))
        .route("/api/query", post(process_query))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind listener");

    tracing::info!(addr = %config.bind_addr, "Server listening");

    axum::serve(listener, app).await.expect("Server error");
}

async fn read_root() -> Json<InfoResponse> {
    Json(InfoResponse {
        message: "Personal Finance Advisor API",
    })
}

async fn process_query(
    State(state): State<AppState>,
    Json(req): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.advisor.advise(&req.query).await {
        Ok(advice) => {
            let budget_breakdown = if advice.budget_breakdown.is_empty() {
                None
            } else {
                Some(advice.budget_breakdown)
            };
            Ok(Json(QueryResponse {
                response: advice.response,
                budget_breakdown,
            }))
        }
        Err(err @ AdvisorError::InvalidInput(_)) => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                detail: err.to_string(),
            }),
        )),
        Err(err @ AdvisorError::Upstream(_)) => {
            tracing::error!(error = %err, "query processing failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    detail: format!("Error processing your query: {err}"),
                }),
            ))
        }
    }
}
