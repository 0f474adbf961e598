//! HTTP surface: `POST /calculate`, `POST /invoice/generate`, `GET /health`.
//!
//! ```ignore
//! use gst_invoice::server::{self, ServerConfig};
//!
//! server::init_tracing();
//! server::run(ServerConfig::from_env()?).await?;
//! ```

mod config;
mod error;
mod handlers;

use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use chrono::Utc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::core::wire::{CALCULATE_PATH, GENERATE_PATH};

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;
pub use handlers::{AppState, calculate, generate_invoice, health};

/// Register routes and the JSON extractor config.
///
/// [`AppState`] must be added by the caller with `.app_data(web::Data::new(..))`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route(CALCULATE_PATH, web::post().to(calculate))
        .route(GENERATE_PATH, web::post().to(generate_invoice))
        .route("/health", web::get().to(health));
}

/// Reject unparseable bodies (bad JSON, non-numeric amounts) with a 400 in
/// the same shape as every other error.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "malformed request body");
        ApiError::MalformedRequest(format!("Invalid request body: {err}")).into()
    })
}

/// Install a `tracing` subscriber filtered by `RUST_LOG`
/// (default `gst_invoice=info,actix_web=info`). Does nothing if one is
/// already installed.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gst_invoice=info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Bind to [`ServerConfig::bind_address`] and serve until shutdown.
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let listener = TcpListener::bind(config.bind_address())?;
    serve(listener, &config)?.await
}

/// Start serving on an already bound listener. The returned [`Server`] must
/// be awaited or spawned.
pub fn serve(listener: TcpListener, config: &ServerConfig) -> std::io::Result<Server> {
    let state = web::Data::new(AppState::from_config(config, Utc::now().date_naive()));
    let address = listener.local_addr()?;

    let server = HttpServer::new(move || App::new().app_data(state.clone()).configure(configure))
        .listen(listener)?
        .run();

    tracing::info!("Server started at http://{}", address);
    Ok(server)
}
