use session_mock::config::{ConfigLoader, LoggingConfig, loader::config_exists};
use session_mock::observability::init_tracing;
use session_mock::services::create_session_fetcher;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match ConfigLoader::load_validated() {
        Ok(config) => {
            init_tracing(&config.logging);
            config
        }
        Err(e) => {
            init_tracing(&LoggingConfig::default());
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if config_exists() {
        info!("Configuration loaded for {}", config.app_name);
    } else {
        info!(
            "No config file found, using defaults and environment for {}",
            config.app_name
        );
    }

    let fetcher = create_session_fetcher()?;
    let options = config.fetch.options();
    info!(should_error = options.should_error, "Fetching sessions...");

    match fetcher.fetch_sessions(options).await {
        Ok(sessions) => {
            let count = sessions.as_array().map(Vec::len).unwrap_or_default();
            info!(count, "Sessions loaded");
            println!("{}", serde_json::to_string_pretty(&sessions)?);
            Ok(())
        }
        Err(e) => {
            warn!("Fetch failed: {}", e);
            Err(e.into())
        }
    }
}
