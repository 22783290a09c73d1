use serde::{Deserialize, Serialize};

/// One map citation backing the model's answer.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct PlaceReference {
    pub title: String,
    pub uri: String,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub rating: f64,
    pub price_level: u8,
    pub address: String,
    pub summary: String,
    pub image_url: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<PlaceReference>>,
}
