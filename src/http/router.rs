use crate::app_context::AppContext;
use crate::cli::Args;
use crate::storage::sessions::HashMapSessionsStorage;
use crate::{health, http, sessions};
use axum::{
    routing::{get, post},
    Router,
};

pub fn new(args: &Args, app_context: AppContext<HashMapSessionsStorage>) -> Router {
    let cors_policy = http::init(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::healthcheck));
    let sessions_routes = Router::new()
        .route("/", post(sessions::handlers::session::create))
        .route("/:session-id", get(sessions::handlers::session::state))
        .route(
            "/:session-id/next-round",
            post(sessions::handlers::player_actions::next_round),
        )
        .route(
            "/:session-id/submit-guess",
            post(sessions::handlers::player_actions::submit_guess),
        )
        .route(
            "/:session-id/give-up",
            post(sessions::handlers::player_actions::give_up),
        );

    Router::new()
        .nest("/health", health_routes)
        .nest("/sessions", sessions_routes)
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(http::middleware::tracing))
}
