//! Router construction and request handlers.

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use company_relay_lib::types::EnrichedCompany;
use company_relay_lib::{validation, Client, Relay, SearchOutcome, SearchRequest};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::extract::UpstreamKey;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub relay: Relay<Client>,
}

impl AppState {
    pub fn new(client: Client) -> Self {
        Self {
            relay: Relay::new(client),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// Any non-empty value restricts results to active companies.
    pub active_only: Option<String>,
}

/// Build the axum router with all routes and middleware.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", post(search_companies))
        .route("/company/:company_number", get(get_company))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// POST / — search by name or number and attach active officers.
async fn search_companies(
    State(state): State<AppState>,
    UpstreamKey(api_key): UpstreamKey,
    Query(params): Query<SearchParams>,
    Json(body): Json<SearchRequest>,
) -> Result<Json<SearchOutcome>, AppError> {
    let active_only = validation::is_truthy(params.active_only.as_deref());
    let outcome = state
        .relay
        .search_and_enrich(&body, active_only, &api_key)
        .await?;
    Ok(Json(outcome))
}

/// GET /company/:company_number — first match for the number, with active officers.
async fn get_company(
    State(state): State<AppState>,
    Path(company_number): Path<String>,
    UpstreamKey(api_key): UpstreamKey,
) -> Result<Json<Option<EnrichedCompany>>, AppError> {
    let company = state
        .relay
        .company_with_officers(&company_number, &api_key)
        .await?;
    Ok(Json(company))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
