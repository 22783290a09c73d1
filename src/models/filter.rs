use serde::{Deserialize, Serialize};

/// Sentinel meaning "no cuisine filter".
pub const ALL_CUISINES: &str = "All";

pub const DEFAULT_QUERY: &str = "Best rated restaurants";

/// The user's refinement settings. `query` only drives the next search, it is
/// never applied to the results already in the session.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct FilterCriteria {
    pub min_rating: f64,
    pub cuisine: String,
    pub max_price: u8,
    pub query: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            min_rating: 0.0,
            cuisine: ALL_CUISINES.to_string(),
            max_price: 4,
            query: DEFAULT_QUERY.to_string(),
        }
    }
}
