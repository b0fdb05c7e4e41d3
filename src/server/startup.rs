use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    data::advertisement::AdvertisementRepository,
    error::AppError,
    model::advertisement::CreateAdvertisementParam,
    router,
    service::token::TokenService,
    state::AppState,
};

/// Advertisements that must exist after startup, keyed by company name.
const SEED_ADVERTISEMENTS: [(&str, &str); 2] = [("Nike", "Just do it!"), ("Volvo", "For life.")];

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up-to-date. This must complete
/// successfully before the application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Inserts the baseline advertisements that are missing.
///
/// Existence is checked by company name, so running this on every start is harmless
/// and rows edited by users are never overwritten.
///
/// # Returns
/// - `Ok(u64)` - Number of advertisements inserted
/// - `Err(AppError::DbErr)` - Database error while checking or inserting
pub async fn seed_advertisements(db: &DatabaseConnection) -> Result<u64, AppError> {
    let repo = AdvertisementRepository::new(db);
    let mut inserted = 0;

    for (company_name, slogan) in SEED_ADVERTISEMENTS {
        if repo.exists_by_company_name(company_name).await? {
            continue;
        }

        repo.create(CreateAdvertisementParam {
            company_name: company_name.to_string(),
            slogan: slogan.to_string(),
        })
        .await?;
        inserted += 1;
    }

    if inserted > 0 {
        tracing::info!("Seeded {} advertisement(s)", inserted);
    }

    Ok(inserted)
}

/// Binds the listener and serves the API until Ctrl+C is received.
pub async fn serve(config: &Config, db: DatabaseConnection) -> Result<(), AppError> {
    let tokens = TokenService::new(&config.jwt_secret, config.jwt_issuer.clone());
    let app = router::router().with_state(AppState::new(db, tokens));

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;

    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
