//! mediadmin - composition root binary.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mediadmin_console::application::api::Api;
use mediadmin_console::application::ConsoleConfig;
use mediadmin_console::infrastructure::http_client::ApiAdapter;
use mediadmin_console::infrastructure::platform::{create_storage, open_session};
use mediadmin_console::infrastructure::testing::{fixtures, InMemoryBackend};
use mediadmin_console::ports::outbound::RawApiPort;
use mediadmin_console::ui::Services;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        // A missing .env file is normal
        let _ = dotenvy::dotenv();

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "mediadmin_console=debug,dioxus=info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    if let Err(e) = run() {
        tracing::error!(error = %e, "mediadmin failed to start");
        eprintln!("mediadmin: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config = ConsoleConfig::from_env()?;
    tracing::info!(
        api_url = %config.api_url,
        page_limit = config.page_limit,
        demo = config.demo,
        "Starting mediadmin"
    );

    // Session; demo mode keeps its token out of persistent storage
    let auth = open_session(&config, create_storage());

    // HTTP, or the in-memory catalog in demo mode
    let raw_api: Arc<dyn RawApiPort> = if config.demo {
        let backend = InMemoryBackend::new();
        fixtures::seed_catalog(&backend)?;
        tracing::info!("Demo mode: serving the catalog from memory");
        Arc::new(backend)
    } else {
        Arc::new(ApiAdapter::new(&config, auth.clone()))
    };

    let services = Services::new(Api::new(raw_api), auth, config.page_limit);
    launch(services);
    Ok(())
}

#[cfg(any(feature = "desktop", feature = "web"))]
fn launch(services: Services) {
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(all(feature = "desktop", not(target_arch = "wasm32")))]
    {
        let window = dioxus::desktop::WindowBuilder::new().with_title("Media Admin");
        builder = builder.with_cfg(dioxus::desktop::Config::new().with_window(window));
    }

    builder
        .with_context(services)
        .launch(mediadmin_console::app);
}

#[cfg(not(any(feature = "desktop", feature = "web")))]
fn launch(_services: Services) {
    tracing::error!("No renderer compiled in; rebuild with --features desktop or --features web");
}
