use clap::Parser;

#[derive(Parser, Clone)]
pub struct Config {
    #[clap(env, long)]
    pub gemini_api_key: String,

    /// Maps grounding is only supported by the 2.5 series models.
    #[clap(env, long, default_value = "gemini-2.5-flash")]
    pub gemini_model: String,

    #[clap(env, long, default_value = "http://localhost:5173")]
    pub origin_urls: String,

    #[clap(env, long, default_value_t = 37.7749)]
    pub fallback_latitude: f64,

    #[clap(env, long, default_value_t = -122.4194)]
    pub fallback_longitude: f64,

    #[clap(env, long, default_value_t = 3000)]
    pub port: u16,
}
