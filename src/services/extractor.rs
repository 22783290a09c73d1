use rand::Rng;
use crate::models::restaurant::{PlaceReference, Restaurant};

const MAX_RESULTS: usize = 6;
const GENERIC_CUISINE: &str = "Trending Local Food";
const PLACEHOLDER_ADDRESS: &str = "Refer to Maps for address";

/// Turns a grounded search into displayable records, at most six.
///
/// Ratings, prices and addresses are placeholder values synthesized here, not
/// parsed out of the model's text; turning the free text into real structured
/// data would take a follow-up constrained-schema request. Without any map
/// citation there is nothing to anchor a record to, so the text alone yields
/// an empty list.
pub fn extract_restaurants(_text: &str, places: &[PlaceReference]) -> Vec<Restaurant> {
    if places.is_empty() {
        return Vec::new();
    }

    let mut rng = rand::thread_rng();
    places
        .iter()
        .take(MAX_RESULTS)
        .enumerate()
        .map(|(index, place)| {
            let highlight = if index == 0 {
                "Famous for its vibrant atmosphere."
            } else {
                "Known for quality service."
            };
            // Whitespace-free seed keeps the placeholder image stable per title.
            let seed: String = place.title.split_whitespace().collect();
            Restaurant {
                id: format!("res-{index}"),
                name: place.title.clone(),
                cuisine: GENERIC_CUISINE.to_string(),
                rating: rng.gen_range(4.0..5.0),
                price_level: rng.gen_range(1..=3),
                address: PLACEHOLDER_ADDRESS.to_string(),
                summary: format!("Highly rated spot in your area. {highlight}"),
                image_url: format!("https://picsum.photos/seed/{seed}/600/400"),
                tags: vec!["Popular".to_string(), "Local Favorite".to_string()],
                links: Some(vec![place.clone()]),
            }
        })
        .collect()
}
