mod config;
mod pages;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Form, Json, State};
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Router;
use gluten_core::SymptomReport;
use gluten_observability::AppMetrics;
use gluten_reference::ReferenceData;
use gluten_service::GuideService;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

pub use config::AppConfig;

#[derive(Clone)]
pub struct ApiState {
    pub service: Arc<GuideService>,
    pub templates_root: Arc<PathBuf>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp_utc: String,
    metrics: gluten_observability::MetricsSnapshot,
    data: gluten_reference::ReferenceStats,
}

// Scanners may send the code as a JSON number; only strings are looked up.
#[derive(Debug, Deserialize)]
struct BarcodeRequest {
    barcode: Option<Value>,
}

impl BarcodeRequest {
    fn barcode(&self) -> Option<&str> {
        match &self.barcode {
            Some(Value::String(code)) => Some(code.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
struct BarcodeResponse {
    result: String,
}

#[derive(Debug, Deserialize)]
struct ChatRequest {
    message: Option<String>,
}

#[derive(Debug, Serialize)]
struct ReplyResponse {
    reply: String,
}

#[derive(Debug, Deserialize)]
struct DietForm {
    name: Option<String>,
    diet_type: Option<String>,
}

/// Loads the reference tables and wires the router. Data sources that
/// cannot be read leave their table empty instead of failing startup.
pub async fn build_app(config: &AppConfig) -> Result<Router> {
    let metrics = AppMetrics::shared();

    let product_csv = config.product_csv.clone();
    let chat_csv = config.chat_csv.clone();
    let data = tokio::task::spawn_blocking(move || ReferenceData::load(product_csv, chat_csv))
        .await
        .context("reference data loader did not complete")?;

    let stats = data.stats();
    tracing::info!(
        products = stats.products_loaded,
        chat_rules = stats.chat_rules_loaded,
        "reference data ready"
    );

    let state = ApiState {
        service: Arc::new(GuideService::new(Arc::new(data), metrics)),
        templates_root: Arc::new(config.templates_root.clone()),
    };

    Ok(build_router(state, &config.allowed_origins))
}

pub fn build_router(state: ApiState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/check_barcode", post(check_barcode))
        .route("/chat/message", post(chat_message))
        .route("/analyze_symptoms", post(analyze_symptoms))
        .route("/generate-diet", post(generate_diet))
        .merge(pages::page_routes())
        .layer(build_cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(RequestBodyLimitLayer::new(64 * 1024))
        .with_state(state)
}

async fn health(State(state): State<ApiState>) -> impl IntoResponse {
    let payload = HealthResponse {
        status: "ok",
        timestamp_utc: chrono::Utc::now().to_rfc3339(),
        metrics: state.service.metrics().snapshot(),
        data: state.service.stats(),
    };
    (StatusCode::OK, Json(payload))
}

async fn check_barcode(
    State(state): State<ApiState>,
    Json(request): Json<BarcodeRequest>,
) -> impl IntoResponse {
    let result = state.service.check_barcode(request.barcode());
    Json(BarcodeResponse { result })
}

async fn chat_message(
    State(state): State<ApiState>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse {
    let reply = state
        .service
        .chat_message(request.message.as_deref().unwrap_or_default());
    Json(ReplyResponse { reply })
}

async fn analyze_symptoms(
    State(state): State<ApiState>,
    Json(report): Json<SymptomReport>,
) -> impl IntoResponse {
    let reply = state.service.analyze_symptoms(&report);
    Json(ReplyResponse { reply })
}

async fn generate_diet(
    State(state): State<ApiState>,
    Form(form): Form<DietForm>,
) -> impl IntoResponse {
    let plan = state
        .service
        .generate_diet(form.name, form.diet_type.as_deref());
    Json(plan)
}

fn build_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins = allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect::<Vec<_>>();
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
