use crate::adapters::NumbersApiClient;
use crate::config::ServiceConfig;
use crate::core::classifier::NumberClassifier;
use crate::domain::model::ClassificationResult;
use crate::utils::error::{ClassifierError, Result};
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub const CLASSIFY_PATH: &str = "/api/classify-number";

/// First value of `key`; repeated keys are not an error.
fn first_param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}

pub fn build_router(classifier: NumberClassifier) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(CLASSIFY_PATH, get(classify_number))
        .layer(cors)
        .with_state(Arc::new(classifier))
}

async fn classify_number(
    State(classifier): State<Arc<NumberClassifier>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<ClassificationResult>> {
    match classifier.classify(first_param(&params, "number")).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            tracing::info!("Rejected classification request: {}", e);
            Err(e)
        }
    }
}

/// Wires the classifier from config, binds and serves until Ctrl-C.
pub async fn serve(config: &ServiceConfig) -> Result<()> {
    let facts = NumbersApiClient::new(config.fun_facts.base_url.clone(), config.fact_timeout())?;
    let app = build_router(NumberClassifier::new(Arc::new(facts)));

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| ClassifierError::ServerError {
            message: format!("Failed to bind to {}: {}", addr, e),
        })?;

    tracing::info!("🚀 Listening on http://{}{}", addr, CLASSIFY_PATH);
    tracing::info!("📡 Fun facts from {}", config.fun_facts.base_url);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ClassifierError::ServerError {
            message: e.to_string(),
        })?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
