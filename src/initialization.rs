use std::env;
use std::fs;
use serde::Deserialize;
use crate::errors::UnrecoverableError;
use crate::logging::setup_logger;

#[derive(Deserialize, Clone)]
pub struct WebServer {
    pub bind_address: String,
    pub bind_port: u16,
}

#[derive(Deserialize, Clone)]
pub struct DataFiles {
    pub coordinates_file: String,
    pub farms_file: String,
    pub wave_grid_file: String,
    pub cache_dir: String,
    pub static_dir: String,
}

#[derive(Deserialize, Clone)]
pub struct Scripts {
    pub dir: String,
    pub python_bin: String,
}

#[derive(Deserialize, Clone)]
pub struct WeatherApi {
    pub api_url: String,
    pub api_key: String,
}

#[derive(Deserialize, Clone)]
pub struct Config {
    pub web_server: WebServer,
    pub files: DataFiles,
    pub scripts: Scripts,
    pub weather: WeatherApi,
}

/// Sets up logging and returns the configuration
///
/// The configuration file path is taken from the CONFIG_FILE environment
/// variable and defaults to config.toml in the working directory
pub fn config() -> Result<Config, UnrecoverableError> {
    setup_logger();

    let path = env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".to_string());
    let toml_str = fs::read_to_string(&path)
        .map_err(|e| UnrecoverableError(format!("unable to read {}: {}", path, e)))?;
    let config: Config = toml::from_str(&toml_str)?;

    Ok(config)
}
