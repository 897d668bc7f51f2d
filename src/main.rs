#![allow(non_snake_case)]

mod client;

use roster_elo::{model, roster};

#[cfg(feature = "server")]
use roster_elo::server;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{config::Config, startup};

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let http_client = match startup::build_http_client(&config) {
            Ok(client) => client,
            Err(e) => {
                eprintln!("Failed to build HTTP client: {}", e);
                std::process::exit(1);
            }
        };
        let state = startup::build_app_state(&config, http_client);

        tracing::info!(mode = %config.mode, "Starting server");

        let mut router = dioxus::server::router(client::App);
        let server_routes = server::router::routes().with_state(state);
        router = router.merge(server_routes);

        Ok(router)
    })
}
