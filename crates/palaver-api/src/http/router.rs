//! Axum router configuration with middleware.
//!
//! All routes are under `/api/`.
//! Middleware: CORS (permissive), request tracing.

use axum::Router;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Liveness
        .route("/", get(liveness))
        // Chat sessions
        .route("/chats", post(handlers::session::create_chat))
        .route("/chats", get(handlers::session::list_chats))
        .route("/chats/{id}", delete(handlers::session::delete_chat))
        // Messages
        .route(
            "/chats/{id}/messages",
            get(handlers::message::list_messages),
        )
        .route(
            "/chats/{id}/messages",
            post(handlers::message::send_message),
        );

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /api - Simple liveness endpoint.
async fn liveness() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
