use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_core::{config::base_url_from_env_value, SiteConfig, DEFAULT_ADDR, DEFAULT_ASSETS_DIR};
use folio_site::Site;
use folio_web::{router, AppState};

/// Main entry point for the folio web server
///
/// Serves the portfolio pages, the JSON content API (with Swagger UI at `/swagger-ui`) and
/// the static assets directory.
///
/// # Environment Variables
/// - `FOLIO_ADDR`: server address (default: "0.0.0.0:3000")
/// - `FOLIO_ASSETS_DIR`: directory served for images and documents (default: "public")
/// - `FOLIO_BASE_URL`: prefix for generated links (default: empty)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the built-in content catalogue is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("folio=info".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("FOLIO_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.into());
    let assets_dir = std::env::var("FOLIO_ASSETS_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_ASSETS_DIR));
    if !assets_dir.is_dir() {
        tracing::warn!(
            "Assets directory does not exist, images will not be served: {}",
            assets_dir.display()
        );
    }
    let base_url = base_url_from_env_value(std::env::var("FOLIO_BASE_URL").ok());

    let config = SiteConfig::new(addr, assets_dir, base_url)?;
    let site = Site::builtin(config.clone())?;

    tracing::info!(
        "++ Starting folio on {} with {} content records",
        config.addr(),
        site.registry().len()
    );

    let app = router(AppState::new(site));
    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
