//! HTTP tool server consumed by the agent layer.
//!
//! Every endpoint is a thin JSON wrapper around a [`Toolkit`] method.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::flood::FloodDataResponse;
use crate::locator::{KindFilter, LocatorOutcome};
use crate::models::RankedFacility;
use crate::tools::Toolkit;

/// Application state shared across handlers
pub struct AppState {
    pub toolkit: Toolkit,
}

impl AppState {
    pub fn new(toolkit: Toolkit) -> Self {
        Self { toolkit }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/v1/facilities/nearby", get(nearby_handler))
        .route("/v1/shelters", get(shelters_handler))
        .route("/v1/flood", get(flood_handler))
        .route("/v1/tips", get(tips_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    places: usize,
    facilities: usize,
    tips: usize,
}

/// Health check endpoint
async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let catalog = state.toolkit.catalog();
    Json(HealthResponse {
        status: "ok",
        places: catalog.places.len(),
        facilities: catalog.facilities.len(),
        tips: catalog.tips.len(),
    })
}

#[derive(Deserialize)]
struct NearbyQueryParams {
    /// Place name to search around
    #[serde(alias = "flood_place")]
    place: String,
    /// Search radius in kilometers (defaults to the configured radius)
    max_distance_km: Option<f64>,
}

/// Uncapped nearest-facility search
async fn nearby_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NearbyQueryParams>,
) -> Json<Vec<RankedFacility>> {
    let results = state
        .toolkit
        .find_nearby_facilities(&params.place, params.max_distance_km);
    debug!("nearby '{}': {} results", params.place, results.len());
    Json(results)
}

#[derive(Deserialize)]
struct ShelterQueryParams {
    place: String,
    /// any, shelter, or hospital
    kind: Option<String>,
    radius_km: Option<f64>,
    limit: Option<usize>,
}

#[derive(Serialize)]
struct ShelterResponse {
    status: &'static str,
    results: Vec<RankedFacility>,
    lines: Vec<String>,
}

/// Shelter/hospital locator with kind filter and result cap
async fn shelters_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ShelterQueryParams>,
) -> Result<Json<ShelterResponse>, (StatusCode, String)> {
    let kind = match params.kind.as_deref() {
        Some(kind) => kind
            .parse::<KindFilter>()
            .map_err(|e| (StatusCode::BAD_REQUEST, e))?,
        None => KindFilter::Any,
    };

    let outcome = state
        .toolkit
        .locate_shelters(&params.place, kind, params.radius_km, params.limit);

    match &outcome {
        LocatorOutcome::PlaceNotFound => {
            warn!("Locator place not found: '{}'", params.place)
        }
        LocatorOutcome::NoneInRange => {
            debug!("Locator '{}' ({:?}): none in range", params.place, kind)
        }
        LocatorOutcome::Found(_) => {}
    }

    Ok(Json(ShelterResponse {
        status: outcome.status(),
        lines: outcome.lines(),
        results: outcome.results().to_vec(),
    }))
}

#[derive(Deserialize)]
struct FloodQueryParams {
    #[serde(alias = "place_name")]
    place: String,
}

/// Flood intensity lookup
async fn flood_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FloodQueryParams>,
) -> Json<FloodDataResponse> {
    let response = state.toolkit.flood_data_tool(&params.place);
    if let FloodDataResponse::Error { ref error_message } = response {
        warn!("Flood lookup '{}': {}", params.place, error_message);
    }
    Json(response)
}

#[derive(Deserialize)]
struct TipsQueryParams {
    /// Comma-separated categories
    categories: String,
}

/// Safety tips by category
async fn tips_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TipsQueryParams>,
) -> Json<Vec<String>> {
    let categories = parse_categories(&params.categories);
    Json(state.toolkit.get_tips_by_categories(&categories))
}

/// Split "a, b,,c" into ["a", "b", "c"]
fn parse_categories(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect()
}
