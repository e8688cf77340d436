//! Application settings and configuration structures.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server configuration (host, port)
    pub server: ServerSettings,

    /// Database configuration (MySQL)
    pub database: DatabaseSettings,

    /// Currency exchange API configuration
    pub currency_converter: CurrencyConverterSettings,

    /// Outbound HTTP client configuration
    pub http_client: HttpClientSettings,

    /// CORS configuration
    pub cors: CorsSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Server binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on
    pub port: u16,
}

/// MySQL database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections to maintain
    pub min_connections: u32,

    /// Connection acquire timeout in seconds
    pub acquire_timeout: u64,
}

/// Currency exchange API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyConverterSettings {
    /// Base URL of the exchange API
    pub base_url: String,

    /// Per-request timeout in milliseconds
    pub request_timeout_ms: u64,

    /// Value sent in the `x-rapidapi-key` header
    pub api_key: String,
}

/// Outbound HTTP client configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct HttpClientSettings {
    /// Overall client timeout in milliseconds
    pub timeout_ms: u64,
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Allowed origins, empty means any origin
    pub allowed_origins: Vec<String>,
}

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. config/default.toml (base configuration)
    /// 2. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 3. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// or if a timeout is zero.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        let builder = Self::defaults(&environment)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // APP__SERVER__PORT=8080 -> server.port = 8080
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option(
                "currency_converter.base_url",
                std::env::var("CURRENCY_CONVERTER_BASE_URL").ok(),
            )?
            .set_override_option(
                "currency_converter.api_key",
                std::env::var("CURRENCY_CONVERTER_X_API_KEY").ok(),
            )?;

        Self::from_builder(builder)
    }

    /// Built-in defaults, the lowest priority layer.
    fn defaults(
        environment: &str,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("environment", environment)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.acquire_timeout", 30)?
            .set_default(
                "currency_converter.base_url",
                "https://currency-exchange.p.rapidapi.com",
            )?
            .set_default("currency_converter.request_timeout_ms", 5000)?
            .set_default("currency_converter.api_key", "")?
            .set_default("http_client.timeout_ms", 5100)?
            .set_default("cors.allowed_origins", Vec::<String>::new())
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        builder
            .build()?
            .try_deserialize()
            .and_then(|settings: Self| {
                if settings.currency_converter.request_timeout_ms == 0 {
                    return Err(ConfigError::Message(
                        "currency_converter.request_timeout_ms must be greater than zero".into(),
                    ));
                }
                if settings.http_client.timeout_ms == 0 {
                    return Err(ConfigError::Message(
                        "http_client.timeout_ms must be greater than zero".into(),
                    ));
                }
                Ok(settings)
            })
    }

    /// Get the full server address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
