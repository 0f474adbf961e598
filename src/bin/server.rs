use gst_invoice::server::{self, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    server::init_tracing();

    let config = ServerConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "failed to load configuration");
        std::io::Error::other(e.to_string())
    })?;

    tracing::info!("Starting GST invoice service");
    tracing::info!("Server binding to: {}", config.bind_address());

    server::run(config).await
}
