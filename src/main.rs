mod model;
mod server;

use axum::{extract::Request, ServiceExt};
use dioxus_logger::tracing;
use tokio::net::TcpListener;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_logger(&config)?;

    let db = startup::connect_to_database(&config).await?;
    let app = router::app(AppState::new(db));

    let listener = TcpListener::bind(config.bind_address.as_str()).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
