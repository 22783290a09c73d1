use tracing::info;
use crate::models::location::Coordinate;

/// Best-effort coordinate resolution: the device-measured pair when the client
/// supplied one, otherwise the configured city-center fallback. Never fails.
pub fn resolve_coordinate(requested: Option<Coordinate>, fallback: Coordinate) -> Coordinate {
    match requested {
        Some(coordinate) => coordinate,
        None => {
            info!(
                "No device location supplied, falling back to ({}, {})",
                fallback.latitude, fallback.longitude
            );
            fallback
        }
    }
}
