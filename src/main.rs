//! Entry point for the localization demo server.

use custom_localizer::config::ConfigManager;
use custom_localizer::server;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    let mut config_manager = ConfigManager::new();
    if let Err(e) = config_manager.load_settings(std::env::current_dir().ok()) {
        tracing::error!("Failed to load settings: {e}");
        return;
    }

    server::serve(config_manager.get_settings().clone()).await;
}
