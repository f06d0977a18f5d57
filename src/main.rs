mod api;
mod config;
mod gateway;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::{config::Config, gateway::RazorpayClient};

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();

    let config = Config::parse();

    init_tracing(config.log_json);

    match dotenv {
        Ok(p) => tracing::info!(path = %p.display(), "loaded environment from .env"),
        Err(e) => tracing::warn!("failed to load .env: {e}"),
    };

    let gateway = RazorpayClient::new(config.credentials(), config.gateway_url.as_str());

    let state = api::AppState::new(gateway, config.template);

    if let Err(err) = api::serve(config.port, state).await {
        tracing::error!(?err, "server");
        std::process::exit(1);
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
