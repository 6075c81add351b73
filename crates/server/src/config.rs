//! Server configuration loaded from the environment.
use std::env;
use std::path::PathBuf;

use results_store::StoreConfig;

/// Configuration for the HTTP server and the store it hosts.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// TCP port to bind.
    pub port: u16,
    /// Worker thread count; 0 keeps actix-web's default of one per core.
    pub workers: usize,
    /// Directory for `server.log`; stderr only when unset.
    pub log_dir: Option<PathBuf>,
    /// Wrap the store in the execution-time logging decorator.
    pub enable_store_timing: bool,
    pub store: StoreConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            workers: 0,
            log_dir: None,
            enable_store_timing: true,
            store: StoreConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SERVER_HOST` - Bind address (default: 127.0.0.1)
    /// - `SERVER_PORT` - Bind port (default: 8080)
    /// - `SERVER_WORKERS` - Worker threads, 0 for one per core (default: 0)
    /// - `LOG_DIR` - Directory for `server.log` (default: unset, stderr only)
    /// - `ENABLE_STORE_TIMING` - Log execution time of store calls (default: true)
    /// - `TOP_RESULTS_LIMIT` - See [`StoreConfig::from_env`]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(host) = env::var("SERVER_HOST")
            .ok()
            .filter(|host| !host.trim().is_empty())
        {
            config.host = host.trim().to_string();
        }

        if let Some(port) = read_env::<u16>("SERVER_PORT") {
            config.port = port;
        }

        if let Some(workers) = read_env::<usize>("SERVER_WORKERS") {
            config.workers = workers;
        }

        config.log_dir = env::var_os("LOG_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        if let Some(enabled) = read_env::<bool>("ENABLE_STORE_TIMING") {
            config.enable_store_timing = enabled;
        }

        config.store = StoreConfig::from_env();

        config
    }

    /// `host:port` pair for binding.
    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
