mod model;
mod server;

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::server::{
    config::Config,
    error::AppError,
    router,
    service::upload::ObjectStoreUploader,
    startup,
    state::{AppState, LazyDatabase},
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let uploader = ObjectStoreUploader::azure(&config)?;

    // The database is opened by the first request that needs it.
    let state = AppState::new(
        LazyDatabase::new(config.database_url.clone()),
        Arc::new(uploader),
        config.request_timeout,
    );

    let app = router::router(config.max_body_bytes).with_state(state);

    let listener = TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
