use std::env;

use clap::Parser;
use config::Config;
use dotenvy::dotenv;

use crm_contacts::ENV_PREFIX;
use crm_contacts::cli::Cli;
use crm_contacts::domain::types::PageSize;
use crm_contacts::models::config::ClientConfig;
use crm_contacts::repository::HttpRepository;

#[tokio::main]
async fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        // Add `./config/default.yaml`
        .add_source(config::File::with_name("config/default"))
        // Add environment-specific overrides
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        // Add settings from the environment (with a prefix of APP)
        .add_source(config::Environment::with_prefix(ENV_PREFIX))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            std::process::exit(1);
        }
    };

    let client_config = match settings.try_deserialize::<ClientConfig>() {
        Ok(client_config) => client_config,
        Err(err) => {
            log::error!("Error loading client config: {err}");
            std::process::exit(1);
        }
    };

    let page_size = match PageSize::new(client_config.default_page_size) {
        Ok(page_size) => page_size,
        Err(err) => {
            log::error!("Invalid default_page_size: {err}");
            std::process::exit(1);
        }
    };

    let repo = match HttpRepository::new(client_config) {
        Ok(repo) => repo,
        Err(err) => {
            log::error!("Failed to build HTTP client: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = cli.execute(&repo, page_size).await {
        log::error!("{err}");
        std::process::exit(1);
    }
}
