use crate::models::filter::{FilterCriteria, ALL_CUISINES};
use crate::models::restaurant::Restaurant;

/// Stable refinement over the current result set: matching records come out in
/// their original order, nothing is re-sorted or cached. Volumes are small, so
/// this is recomputed from scratch on every request.
pub fn apply_filters(restaurants: &[Restaurant], criteria: &FilterCriteria) -> Vec<Restaurant> {
    restaurants
        .iter()
        .filter(|restaurant| matches_criteria(restaurant, criteria))
        .cloned()
        .collect()
}

fn matches_criteria(restaurant: &Restaurant, criteria: &FilterCriteria) -> bool {
    let matches_rating = restaurant.rating >= criteria.min_rating;
    let matches_cuisine = criteria.cuisine == ALL_CUISINES
        || restaurant
            .cuisine
            .to_lowercase()
            .contains(&criteria.cuisine.to_lowercase());
    let matches_price = restaurant.price_level <= criteria.max_price;
    matches_rating && matches_cuisine && matches_price
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(name: &str, cuisine: &str, rating: f64, price_level: u8) -> Restaurant {
        Restaurant {
            id: name.to_lowercase(),
            name: name.to_string(),
            cuisine: cuisine.to_string(),
            rating,
            price_level,
            address: "Refer to Maps for address".to_string(),
            summary: String::new(),
            image_url: String::new(),
            tags: vec![],
            links: None,
        }
    }

    fn sample_set() -> Vec<Restaurant> {
        vec![
            restaurant("Casa Lupe", "Mexican", 4.8, 2),
            restaurant("Golden Wok", "Chinese", 3.9, 1),
            restaurant("Trattoria Nonna", "Modern Italian Fusion", 4.4, 3),
            restaurant("Le Bernardin", "French", 4.9, 4),
        ]
    }

    #[test]
    fn default_criteria_is_the_identity() {
        let restaurants = sample_set();

        let filtered = apply_filters(&restaurants, &FilterCriteria::default());

        let names: Vec<&str> = filtered.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Casa Lupe", "Golden Wok", "Trattoria Nonna", "Le Bernardin"]
        );
    }

    #[test]
    fn record_passes_iff_all_three_predicates_hold() {
        let restaurants = sample_set();
        let criteria = FilterCriteria {
            min_rating: 4.0,
            cuisine: "All".to_string(),
            max_price: 3,
            ..FilterCriteria::default()
        };

        let filtered = apply_filters(&restaurants, &criteria);

        // Golden Wok fails the rating bound, Le Bernardin the price cap.
        let names: Vec<&str> = filtered.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Casa Lupe", "Trattoria Nonna"]);
        for restaurant in &filtered {
            assert!(restaurant.rating >= criteria.min_rating);
            assert!(restaurant.price_level <= criteria.max_price);
        }
    }

    #[test]
    fn cuisine_matches_case_insensitively_as_a_substring() {
        let restaurants = sample_set();
        let criteria = FilterCriteria {
            cuisine: "italian".to_string(),
            ..FilterCriteria::default()
        };

        let filtered = apply_filters(&restaurants, &criteria);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Trattoria Nonna");
    }

    #[test]
    fn rating_bound_is_inclusive() {
        let restaurants = vec![restaurant("Edge Case Cafe", "Coffee", 4.0, 1)];
        let criteria = FilterCriteria {
            min_rating: 4.0,
            ..FilterCriteria::default()
        };

        assert_eq!(apply_filters(&restaurants, &criteria).len(), 1);
    }

    #[test]
    fn matching_records_keep_their_relative_order() {
        let restaurants = vec![
            restaurant("C", "Mexican", 4.9, 1),
            restaurant("A", "Mexican", 4.1, 1),
            restaurant("B", "Mexican", 4.5, 1),
        ];
        let criteria = FilterCriteria {
            min_rating: 4.0,
            ..FilterCriteria::default()
        };

        let filtered = apply_filters(&restaurants, &criteria);

        let names: Vec<&str> = filtered.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn query_text_never_filters_existing_results() {
        let restaurants = sample_set();
        let criteria = FilterCriteria {
            query: "sushi".to_string(),
            ..FilterCriteria::default()
        };

        assert_eq!(apply_filters(&restaurants, &criteria).len(), restaurants.len());
    }
}
