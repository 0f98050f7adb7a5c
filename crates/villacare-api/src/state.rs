//! Application state shared across all handlers and extractors.

use std::sync::Arc;

use sqlx::PgPool;

use villacare_auth::session::store::SessionStore;
use villacare_core::config::AppConfig;
use villacare_database::repositories::user::UserRepository;
use villacare_service::account::AccountService;
use villacare_service::intake::IntakeService;
use villacare_service::report::ReportService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// Session token validation.
    pub sessions: SessionStore,
    /// User repository, used by the auth extractor.
    pub user_repo: Arc<UserRepository>,
    /// Accounts, profiles, and packages.
    pub account_service: Arc<AccountService>,
    /// Report lifecycle and comments.
    pub report_service: Arc<ReportService>,
    /// Contact and review intake.
    pub intake_service: Arc<IntakeService>,
}
