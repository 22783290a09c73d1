use std::net::SocketAddr;
use std::sync::Arc;
use anyhow::Context;
use axum::http::HeaderValue;
use axum::Router;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::info;
use crate::config::Config;
use crate::helpers::handler_404::page_not_found_handler;
use crate::models::location::Coordinate;
use crate::models::session::DiscoverySession;
use crate::services::gemini_service::GeminiClient;

pub mod discovery_controller;
pub mod health_check;

#[derive(Clone)]
pub struct AppState {
    pub gemini_client: Arc<GeminiClient>,
    pub session: Arc<RwLock<DiscoverySession>>,
    pub fallback_location: Coordinate,
}

impl AppState {
    pub fn new(gemini_client: GeminiClient, fallback_location: Coordinate) -> Self {
        Self {
            gemini_client: Arc::new(gemini_client),
            session: Arc::new(RwLock::new(DiscoverySession::default())),
            fallback_location,
        }
    }
}

pub async fn serve(gemini_client: GeminiClient, config: &Config) -> anyhow::Result<()> {
    let origins: Vec<HeaderValue> = config
        .origin_urls
        .split(',')
        .map(|s| s.parse().unwrap())
        .collect::<Vec<HeaderValue>>();

    let app_state = AppState::new(
        gemini_client,
        Coordinate {
            latitude: config.fallback_latitude,
            longitude: config.fallback_longitude,
        },
    );

    let application = router_endpoints(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    CorsLayer::new()
                        .allow_methods([
                            Method::GET,
                            Method::POST,
                            Method::PUT,
                            Method::DELETE,
                            Method::OPTIONS
                        ])
                        .allow_origin(origins)
                        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
                )
        )
        .fallback(page_not_found_handler);

    let port = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("API server listening on port: {}", port);
    axum::Server::bind(&port)
        .serve(application.into_make_service())
        .await
        .context("Error spinning up the API server")
}

pub fn router_endpoints(app_state: AppState) -> Router {
    health_check::router()
        .nest("/discovery", discovery_controller::router(app_state))
}
