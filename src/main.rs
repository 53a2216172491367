use crate::api::HttpPropertyApi;
use crate::config::Config;
use crate::listings::ListingCache;
use crate::router::{handle, App};
use astra::Server;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod domain;
mod errors;
mod listings;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cfg = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Configuration error: {e:#}");
            std::process::exit(1);
        }
    };

    // 1️⃣ Backend client, base URL injected from config
    let api = match HttpPropertyApi::new(&cfg.api_base_url, cfg.api_timeout) {
        Ok(api) => api,
        Err(e) => {
            error!("Could not build API client: {e}");
            std::process::exit(1);
        }
    };
    info!(api = %api.base_url(), "Using listings backend");

    let app = App::new(Arc::new(api), ListingCache::new());

    // 2️⃣ Start the server
    info!("Starting server at http://{}", cfg.bind_addr);

    let server = Server::bind(&cfg.bind_addr).max_workers(cfg.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
