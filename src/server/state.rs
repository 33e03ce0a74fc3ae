//! Application state shared across all request handlers.
//!
//! The state holds the lazily opened database handle, the blob uploader and the
//! per-request time budget. It is built once at startup and cloned into every handler
//! through Axum's state extraction.

use std::{future::Future, sync::Arc, time::Duration};

use futures::future::{BoxFuture, FutureExt};
use sea_orm::{DatabaseConnection, DbErr};
use tokio::sync::OnceCell;

use crate::server::{service::upload::BlobUploader, startup};

type ConnectFuture = BoxFuture<'static, Result<DatabaseConnection, DbErr>>;
type Connector = Arc<dyn Fn() -> ConnectFuture + Send + Sync>;

/// Process-wide database handle opened on first use.
///
/// Concurrent first callers share a single connection attempt. A failed or abandoned
/// attempt leaves the handle unset, so the next caller tries again.
#[derive(Clone)]
pub struct LazyDatabase {
    connector: Connector,
    cell: Arc<OnceCell<DatabaseConnection>>,
}

impl LazyDatabase {
    /// Creates a handle that connects to `database_url` and runs migrations on first use.
    pub fn new(database_url: impl Into<String>) -> Self {
        let database_url: Arc<str> = Arc::from(database_url.into());

        Self::with_connector(move || {
            let database_url = database_url.clone();
            async move { startup::connect_to_database(&database_url).await }
        })
    }

    /// Creates a handle that opens its connection with `connect` on first use.
    pub fn with_connector<F, Fut>(connect: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<DatabaseConnection, DbErr>> + Send + 'static,
    {
        Self {
            connector: Arc::new(move || connect().boxed()),
            cell: Arc::new(OnceCell::new()),
        }
    }

    /// Wraps an already open connection.
    #[cfg(test)]
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self {
            connector: Arc::new(|| {
                let already_open = DbErr::Custom("connection already open".to_string());
                futures::future::ready(Err::<DatabaseConnection, _>(already_open)).boxed()
            }),
            cell: Arc::new(OnceCell::new_with(Some(db))),
        }
    }

    /// Returns the shared connection, opening it first if needed.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Shared connection pool
    /// - `Err(DbErr)` - Connection or migration failed; the next call retries
    pub async fn get(&self) -> Result<&DatabaseConnection, DbErr> {
        self.cell
            .get_or_try_init(|| async {
                tracing::info!("Opening database connection");
                (self.connector)().await
            })
            .await
    }

    #[cfg(test)]
    pub fn is_initialized(&self) -> bool {
        self.cell.initialized()
    }
}

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: the database cell and the uploader sit behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub db: LazyDatabase,

    /// Stores board documents and room images.
    pub uploader: Arc<dyn BlobUploader>,

    /// Budget for one submission, multipart parsing included.
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(
        db: LazyDatabase,
        uploader: Arc<dyn BlobUploader>,
        request_timeout: Duration,
    ) -> Self {
        Self {
            db,
            uploader,
            request_timeout,
        }
    }
}
