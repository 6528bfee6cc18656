use std::net::SocketAddr;
use std::sync::Arc;

use folio_mail::{MailConfig, Mailer, SmtpMailer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_api::config::ServerConfig;
use folio_api::router::build_app_router;
use folio_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Document store ---
    let pool = match config.database_url.as_deref() {
        Some(url) => connect_store(url).await,
        None => {
            tracing::warn!("DATABASE_URL not set, portfolio endpoints will be unavailable");
            None
        }
    };

    // --- Mailer ---
    let mailer = build_mailer();

    // --- App state ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        mailer,
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Build the pool and bring the schema up to date.
///
/// An unreachable database is not fatal: the pool is still returned and
/// `/test` reports the failure. Only a malformed URL leaves the store
/// unconfigured.
async fn connect_store(url: &str) -> Option<folio_db::DbPool> {
    let pool = match folio_db::create_pool(url) {
        Ok(pool) => pool,
        Err(err) => {
            tracing::error!(error = %err, "Invalid DATABASE_URL, running without a database");
            return None;
        }
    };
    tracing::info!("Database connection pool created");

    if let Err(err) = folio_db::health_check(&pool).await {
        tracing::warn!(error = %err, "Database health check failed");
        return Some(pool);
    }
    tracing::info!("Database health check passed");

    match folio_db::run_migrations(&pool).await {
        Ok(()) => tracing::info!("Database migrations applied"),
        Err(err) => tracing::error!(error = %err, "Failed to run database migrations"),
    }

    Some(pool)
}

/// SMTP mailer from the environment, or `None` when delivery is not configured.
fn build_mailer() -> Option<Arc<dyn Mailer>> {
    let Some(mail_config) = MailConfig::from_env() else {
        tracing::warn!("SMTP_HOST or recipient not set, contact emails will be skipped");
        return None;
    };

    let host = mail_config.smtp_host.clone();
    match SmtpMailer::new(mail_config) {
        Ok(mailer) => {
            tracing::info!(%host, "SMTP mailer configured");
            Some(Arc::new(mailer))
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to build SMTP transport, contact emails will be skipped");
            None
        }
    }
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
