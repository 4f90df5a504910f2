mod client_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod session_config;

#[cfg(test)]
mod tests;

pub use client_config::ClientConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use session_config::SessionConfig;

const CONFIG_DIR_ENV: &str = "YPG_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".ypg";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_STORAGE_DIR: &str = "storage";
const DEFAULT_LATENCY_MS: u64 = 500;
const MAX_LATENCY_MS: u64 = 10_000;

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
