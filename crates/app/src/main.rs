//! Svetlana - Main Entry Point
//!
//! Command line front end for the document generator: navigates to the
//! location given as the first argument (default `/`) and prints the page.

mod pages;

use std::sync::Arc;

use svetlana_application::{DocumentStore, Navigator};
use svetlana_domain::app_routes;
use svetlana_infrastructure::{ReqwestDocumentApi, SettingsRepository, apply_overrides};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let repository = SettingsRepository::new();
    let settings = apply_overrides(repository.load().await?, |key| std::env::var(key).ok())?;
    tracing::info!(
        api = %settings.api_base_url,
        "Starting Svetlana v{}",
        env!("CARGO_PKG_VERSION")
    );

    let api = Arc::new(ReqwestDocumentApi::new(&settings)?);
    let store = DocumentStore::new(Arc::clone(&api));
    let navigator = Navigator::new(app_routes()?, pages::registry());

    let location = std::env::args().nth(1).unwrap_or_else(|| "/".to_string());
    let navigation = navigator.navigate(&location).await?;

    let context = pages::Context {
        store: &store,
        api: api.as_ref(),
        settings: &settings,
    };
    print!("{}", pages::render(&navigation, &context).await?);

    Ok(())
}
