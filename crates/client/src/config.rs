use shared_types::ClientConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
#[cfg(not(target_arch = "wasm32"))]
const CONFIG_PATH: &str = "config.toml";

/// Resolve the client configuration once and store it in the global
/// `OnceLock`. Later calls return the stored value.
///
/// Native builds read `config.toml` and then `.env`/process variables. The
/// browser build has neither, so it takes the API URL baked in at compile
/// time via `GPDI_API_URL`.
pub fn load_config() -> &'static ClientConfig {
    CONFIG.get_or_init(resolve)
}

#[cfg(not(target_arch = "wasm32"))]
fn resolve() -> ClientConfig {
    use shared_types::ConfigFile;

    dotenvy::dotenv().ok();

    let file = match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => toml::from_str::<ConfigFile>(&contents).unwrap_or_else(|e| {
            tracing::warn!(path = CONFIG_PATH, error = %e, "Failed to parse config; using defaults");
            ConfigFile::default()
        }),
        Err(e) => {
            tracing::debug!(path = CONFIG_PATH, error = %e, "Config file not found; using defaults");
            ConfigFile::default()
        }
    };

    let config = ClientConfig::from(file).with_overrides(|key| std::env::var(key).ok());
    tracing::info!(
        api = %config.base_url(),
        timeout_secs = config.request_timeout_secs,
        "Client configuration loaded"
    );
    config
}

#[cfg(target_arch = "wasm32")]
fn resolve() -> ClientConfig {
    use shared_types::{ENV_API_URL, ENV_REQUEST_TIMEOUT_SECS};

    let config = ClientConfig::default().with_overrides(|key| match key {
        ENV_API_URL => option_env!("GPDI_API_URL").map(String::from),
        ENV_REQUEST_TIMEOUT_SECS => option_env!("GPDI_REQUEST_TIMEOUT_SECS").map(String::from),
        _ => None,
    });
    tracing::info!(api = %config.base_url(), "Client configuration loaded");
    config
}
