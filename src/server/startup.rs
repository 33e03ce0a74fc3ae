use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing_subscriber::EnvFilter;

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the given connection string, then runs all pending
/// SeaORM migrations so the user and inspection tables exist before the first query.
///
/// # Arguments
/// - `database_url` - Database connection string
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    use migration::{Migrator, MigratorTrait};

    let mut opt = ConnectOptions::new(database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Installs the global tracing subscriber.
///
/// Honors `RUST_LOG`, defaulting to `info` for this crate and `warn` for everything else.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,inspection_intake=info,tower_http=info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
