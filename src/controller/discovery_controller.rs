use axum::{Extension, Json, Router};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;
use crate::controller::AppState;
use crate::models::location::Coordinate;
use crate::models::restaurant::Restaurant;
use crate::models::session::DiscoverySession;
use crate::services::{extractor, location, refinement};

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/locate", post(locate_and_search))
        .route("/search", post(search_restaurants))
        .route("/filters", put(update_filters))
        .route("/results", get(retrieve_results))
        .route_layer(Extension(app_state))
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct LocateParams {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Resolves the session coordinate (city-center fallback when the browser
/// denied geolocation) and immediately runs one search with the current query.
pub async fn locate_and_search(
    Extension(state): Extension<AppState>,
    Json(body): Json<LocateParams>,
) -> impl IntoResponse {
    let requested = requested_coordinate(body.latitude, body.longitude);
    let coordinate = location::resolve_coordinate(requested, state.fallback_location);

    let query = {
        let mut session = state.session.write().await;
        session.coordinate = Some(coordinate);
        session.criteria.query.clone()
    };

    run_search(&state, &query, coordinate).await
}

/// A lone latitude or longitude is no better than nothing.
fn requested_coordinate(latitude: Option<f64>, longitude: Option<f64>) -> Option<Coordinate> {
    match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => Some(Coordinate {
            latitude,
            longitude,
        }),
        _ => None,
    }
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct SearchParams {
    pub query: String,
}

pub async fn search_restaurants(
    Extension(state): Extension<AppState>,
    Json(body): Json<SearchParams>,
) -> impl IntoResponse {
    let coordinate = {
        let mut session = state.session.write().await;
        session.criteria.query = body.query.clone();
        match session.coordinate {
            Some(coordinate) => coordinate,
            None => {
                // Searching before any locate call still gets a coordinate.
                let resolved = location::resolve_coordinate(None, state.fallback_location);
                session.coordinate = Some(resolved);
                resolved
            }
        }
    };

    run_search(&state, &body.query, coordinate).await
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct FilterParams {
    pub min_rating: Option<f64>,
    pub cuisine: Option<String>,
    pub max_price: Option<u8>,
}

pub async fn update_filters(
    Extension(state): Extension<AppState>,
    Json(body): Json<FilterParams>,
) -> impl IntoResponse {
    let mut session = state.session.write().await;
    if let Some(min_rating) = body.min_rating {
        session.criteria.min_rating = min_rating;
    }
    if let Some(cuisine) = body.cuisine {
        session.criteria.cuisine = cuisine;
    }
    if let Some(max_price) = body.max_price {
        session.criteria.max_price = max_price;
    }

    filtered_view_response(&session)
}

pub async fn retrieve_results(
    Extension(state): Extension<AppState>,
) -> impl IntoResponse {
    let session = state.session.read().await;

    filtered_view_response(&session)
}

/// Dispatches one grounded search and commits the extracted records under the
/// latest-request-wins discipline. The Gemini call runs with the session lock
/// released, so overlapping searches from repeated submissions never block each
/// other; a stale slow response is simply discarded.
async fn run_search(state: &AppState, query: &str, coordinate: Coordinate) -> Response {
    let seq = state.session.write().await.begin_search();

    let search_res = state.gemini_client.search(query, coordinate).await;

    return match search_res {
        Ok(grounded) => {
            let restaurants = extractor::extract_restaurants(&grounded.text, &grounded.places);
            let mut session = state.session.write().await;
            if !session.commit_results(seq, restaurants) {
                warn!("Discarding stale search response for query: {}", query);
            }
            filtered_view_response(&session)
        }
        Err(e) => {
            warn!("Something went wrong searching for restaurants due to: {}", e);
            (
                StatusCode::BAD_REQUEST,
                "Failed to fetch restaurants, please check your connection or API key.",
            ).into_response()
        }
    };
}

#[derive(Serialize, Debug)]
struct ResultsView {
    restaurants: Vec<Restaurant>,
    total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

/// Recomputes the filtered view from the raw list and the active criteria. An
/// empty raw list gets an informational message; filters narrowing a non-empty
/// list down to nothing is not flagged, the frontend renders that state itself.
fn filtered_view_response(session: &DiscoverySession) -> Response {
    let restaurants = refinement::apply_filters(&session.restaurants, &session.criteria);
    let message = if session.restaurants.is_empty() {
        Some("We couldn't find any results for that search in your area.".to_string())
    } else {
        None
    };
    let total = restaurants.len();

    (
        StatusCode::OK,
        json!(ResultsView {
            restaurants,
            total,
            message,
        }).to_string(),
    ).into_response()
}
