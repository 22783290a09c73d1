use anyhow::anyhow;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::models::location::Coordinate;
use crate::models::restaurant::PlaceReference;

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Client for the Gemini generateContent endpoint with maps grounding.
/// Constructed once in main and shared through the application state.
pub struct GeminiClient {
    api_key: String,
    model: String,
    http: reqwest::Client,
    base_url: String,
}

/// What one grounded search produced: the model's free text plus the map
/// citations backing it.
#[derive(Debug)]
pub struct GroundedResponse {
    pub text: String,
    pub places: Vec<PlaceReference>,
}

impl GeminiClient {
    pub fn new(api_key: &str, model: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            model: model.to_string(),
            http: reqwest::Client::new(),
            base_url: GEMINI_API_URL.to_string(),
        }
    }

    fn headers(&self) -> anyhow::Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert("x-goog-api-key", HeaderValue::from_str(&self.api_key)?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// One request, no retry: any transport or API failure comes back as a
    /// single generic error for the controller to catch.
    pub async fn search(
        &self,
        query: &str,
        location: Coordinate,
    ) -> anyhow::Result<GroundedResponse> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let request = GenerateContentRequest::grounded_search(query, location);

        debug!(model = %self.model, "Gemini grounded search request");

        let response = self
            .http
            .post(&url)
            .headers(self.headers()?)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(anyhow!("Gemini API error ({}): {}", status, error_text));
        }

        let body: GenerateContentResponse = response.json().await?;
        Ok(project_grounded_response(body))
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    tools: Vec<serde_json::Value>,
    tool_config: ToolConfig,
}

impl GenerateContentRequest {
    /// Maps grounding cannot be combined with a JSON response schema, so this
    /// request stays in free-text mode and the citations are projected out of
    /// the grounding metadata instead.
    fn grounded_search(query: &str, location: Coordinate) -> Self {
        let instruction = format!(
            "Find the best and most relevant restaurants matching \"{query}\" near this \
             location. Provide a list including their name, cuisine type, rating, price \
             level (1-4), address, and a one-sentence summary of what makes them unique."
        );
        Self {
            contents: vec![Content {
                parts: vec![Part { text: instruction }],
            }],
            tools: vec![json!({ "googleMaps": {} })],
            tool_config: ToolConfig {
                retrieval_config: RetrievalConfig {
                    lat_lng: LatLng {
                        latitude: location.latitude,
                        longitude: location.longitude,
                    },
                },
            },
        }
    }
}

#[derive(Serialize, Debug)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Debug)]
struct Part {
    text: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ToolConfig {
    retrieval_config: RetrievalConfig,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RetrievalConfig {
    lat_lng: LatLng,
}

#[derive(Serialize, Debug)]
struct LatLng {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize, Debug)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize, Debug)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Deserialize, Debug)]
struct GroundingChunk {
    maps: Option<MapsChunk>,
}

#[derive(Deserialize, Debug)]
struct MapsChunk {
    #[serde(default)]
    title: String,
    #[serde(default)]
    uri: String,
}

/// Flattens the first candidate into text plus place references, keeping only
/// the chunks that are map-grounded.
fn project_grounded_response(body: GenerateContentResponse) -> GroundedResponse {
    let candidate = match body.candidates.into_iter().next() {
        Some(candidate) => candidate,
        None => {
            return GroundedResponse {
                text: String::new(),
                places: Vec::new(),
            }
        }
    };

    let text = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<Vec<String>>()
                .join("\n")
        })
        .unwrap_or_default();

    let places = candidate
        .grounding_metadata
        .map(|metadata| {
            metadata
                .grounding_chunks
                .into_iter()
                .filter_map(|chunk| chunk.maps)
                .map(|maps| PlaceReference {
                    title: maps.title,
                    uri: maps.uri,
                })
                .collect()
        })
        .unwrap_or_default();

    GroundedResponse { text, places }
}
