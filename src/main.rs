use crate::app_context::AppContext;
use crate::coverage::lookup::HttpImageryLookup;
use crate::coverage::CoverageResolver;
use crate::storage::sessions::HashMapSessionsStorage;
use clap::Parser;
use std::sync::Arc;

mod app_context;
mod catalog;
mod cli;
mod coverage;
mod guessing;
mod health;
mod http;
mod logging;
mod selection;
mod sessions;
mod storage;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    logging::init();
    let catalog = catalog::load(&args.places).expect("Failed to load the places catalog.");
    tracing::info!(places = catalog.len(), "Loaded the places catalog.");
    let lookup = HttpImageryLookup::new(args.imagery_url.clone(), args.imagery_api_key.clone());
    let app_context = AppContext {
        sessions: HashMapSessionsStorage::default(),
        catalog: Arc::new(catalog),
        resolver: CoverageResolver::new(Arc::new(lookup)),
    };
    let router = http::router::new(&args, app_context);
    let listener = tokio::net::TcpListener::bind(args.listen_address)
        .await
        .expect("Failed to bind the listen address.");
    tracing::info!(listen_address = %args.listen_address, "Serving.");
    axum::serve(listener, router)
        .await
        .expect("Failed to serve the application.");
}
