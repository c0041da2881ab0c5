use crate::api_keys::ApiKeyStore;
use crate::theme::ThemeState;
use dioxus::prelude::*;
use views::{Chat, Discover, GlobalPulse, Home, InsightEngine, Navbar, Settings, Trending};

mod api_keys;
#[cfg(feature = "server")]
mod cli;
mod nav;
mod style;
#[cfg(test)]
mod test_support;
mod theme;
mod views;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]
        #[route("/")]
        Home {},
        #[route("/discover")]
        Discover {},
        #[route("/trending")]
        Trending {},
        #[route("/global-pulse")]
        GlobalPulse {},
        #[route("/insight-engine")]
        InsightEngine {},
        #[route("/chat")]
        Chat {},
        #[route("/settings")]
        Settings {},
}

/// Root component: owns the shared theme and API-key state and mounts the router.
#[component]
fn App() -> Element {
    let theme = use_context_provider(|| Signal::new(ThemeState::default()));
    use_context_provider(|| Signal::new(ApiKeyStore::new()));

    let root_class = theme.read().mode().root_class();

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: TAILWIND_CDN }
        div { id: "app-root", class: "{root_class}", Router::<Route> {} }
    }
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(App);
}

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use clap::Parser;

    env_logger::init();

    let args = cli::Args::parse();
    let addr = args.socket_addr();

    let config = ServeConfig::new()
        .map_err(|e| format!("Unable to load the web client: {:?}", e))?;
    let router = axum::Router::new()
        .serve_dioxus_application(config, App)
        .into_make_service();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("RealityCheck web interface available at http://{}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
