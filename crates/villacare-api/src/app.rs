//! Application builder: wires repositories, services, and state into a
//! running Axum server.

use std::sync::Arc;

use sqlx::PgPool;

use villacare_auth::password::hasher::PasswordHasher;
use villacare_auth::password::validator::PasswordValidator;
use villacare_auth::session::store::SessionStore;
use villacare_core::config::AppConfig;
use villacare_core::error::AppError;
use villacare_database::repositories::comment::CommentRepository;
use villacare_database::repositories::contact::ContactRepository;
use villacare_database::repositories::package::PackageRepository;
use villacare_database::repositories::profile::ProfileRepository;
use villacare_database::repositories::report::ReportRepository;
use villacare_database::repositories::review::ReviewRepository;
use villacare_database::repositories::session::SessionRepository;
use villacare_database::repositories::user::UserRepository;
use villacare_service::account::AccountService;
use villacare_service::intake::IntakeService;
use villacare_service::report::ReportService;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the application state from configuration and a database pool.
pub fn build_state(config: AppConfig, db_pool: PgPool) -> AppState {
    // Repositories
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let session_repo = Arc::new(SessionRepository::new(db_pool.clone()));
    let profile_repo = Arc::new(ProfileRepository::new(db_pool.clone()));
    let package_repo = Arc::new(PackageRepository::new(db_pool.clone()));
    let report_repo = Arc::new(ReportRepository::new(db_pool.clone()));
    let comment_repo = Arc::new(CommentRepository::new(db_pool.clone()));
    let contact_repo = Arc::new(ContactRepository::new(db_pool.clone()));
    let review_repo = Arc::new(ReviewRepository::new(db_pool.clone()));

    // Auth
    let sessions = SessionStore::new(Arc::clone(&session_repo), config.session.clone());
    let hasher = PasswordHasher::new();
    let password_policy = PasswordValidator::new(&config.session);

    // Services
    let account_service = Arc::new(AccountService::new(
        Arc::clone(&user_repo),
        profile_repo,
        package_repo,
        sessions.clone(),
        hasher,
        password_policy,
    ));
    let report_service = Arc::new(ReportService::new(report_repo, comment_repo));
    let intake_service = Arc::new(IntakeService::new(contact_repo, review_repo));

    AppState {
        config: Arc::new(config),
        db_pool,
        sessions,
        user_repo,
        account_service,
        report_service,
        intake_service,
    }
}

/// Runs the VillaCare server with the given configuration and database
/// pool. Returns when a shutdown signal is received.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let host = config.server.host.clone();
    let port = config.server.port;

    let state = build_state(config, db_pool);
    let app = build_router(state);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("VillaCare server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("VillaCare server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
