// Configuration module entry point
// Loads layered configuration: file -> environment -> defaults

mod types;

use std::net::SocketAddr;

// Re-export public types
pub use types::{Config, PerformanceConfig, ServerConfig, SiteConfig};

impl Config {
    /// Load configuration from specified file path (without extension)
    ///
    /// Every key has a programmatic default, so the server starts with no
    /// config file present. Environment variables with the `STATICD_` prefix
    /// override file values (e.g. `STATICD_SERVER__PORT=9000`).
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("STATICD").separator("__"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("site.root", ".")?
            .set_default("site.default_document", "index1.html")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from the default "config" file
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
