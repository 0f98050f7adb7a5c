//! Route definitions for the VillaCare HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(public_routes())
        .merge(profile_routes())
        .merge(report_routes())
        .merge(admin_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Auth endpoints: register, login, logout, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
}

/// Public endpoints: packages, reviews, contact
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/packages", get(handlers::public::list_packages))
        .route("/reviews", get(handlers::public::list_reviews))
        .route("/reviews", post(handlers::public::submit_review))
        .route("/contact", post(handlers::public::submit_contact))
}

/// Profile self-service endpoints
fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(handlers::profile::get_profile))
        .route("/profile", put(handlers::profile::update_profile))
}

/// Resident report endpoints
fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(handlers::report::my_dashboard))
        .route("/reports", get(handlers::report::list_my_reports))
        .route("/reports", post(handlers::report::file_report))
        .route("/reports/{id}", get(handlers::report::get_report))
        .route(
            "/reports/{id}/comments",
            post(handlers::report::add_comment),
        )
}

/// Staff-only endpoints
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/dashboard", get(handlers::admin::staff_dashboard))
        .route("/admin/reports", get(handlers::admin::list_reports))
        .route("/admin/reports", post(handlers::admin::file_report))
        .route("/admin/reports/{id}", put(handlers::admin::edit_report))
        .route("/admin/contacts", get(handlers::admin::list_contacts))
        .route(
            "/admin/reviews",
            get(handlers::admin::list_pending_reviews),
        )
        .route(
            "/admin/reviews/{id}/approve",
            put(handlers::admin::approve_review),
        )
}

/// Health check endpoints (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::HeaderValue;
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
