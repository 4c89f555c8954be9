use axum::http::{header, Method};
use sea_orm::DatabaseConnection;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, model::visit::RolloverOutcome,
    service::visit_counter::VisitCounterService,
};

/// Installs the global tracing subscriber.
///
/// Log level comes from `RUST_LOG` and defaults to `info`.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// automatically runs all pending SeaORM migrations to ensure the database schema is
/// up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the CORS layer.
///
/// With configured origins, only those origins may call the API and credentials are
/// allowed so browsers send and store the marker cookie cross-site. Without configured
/// origins every origin is allowed, without credentials.
pub fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(config.cors_allowed_origins.clone()))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

/// Runs one rollover before serving so a month-start trigger missed during downtime is
/// applied immediately.
pub async fn catch_up_rollover(db: &DatabaseConnection) -> Result<(), AppError> {
    let outcome = VisitCounterService::new(db)
        .rollover(chrono::Utc::now())
        .await?;

    if let RolloverOutcome::Archived { period, views } = outcome {
        tracing::info!(
            "Startup catch-up archived {} with {} views",
            period,
            views
        );
    }

    Ok(())
}
