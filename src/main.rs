use clap::Parser;
use dotenv::dotenv;
use crate::config::Config;
use crate::services::gemini_service::GeminiClient;

pub mod config;
pub mod controller;
pub mod helpers;
pub mod models;
pub mod services;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::parse();
    let gemini_client = GeminiClient::new(&config.gemini_api_key, &config.gemini_model);

    controller::serve(gemini_client, &config).await
}
