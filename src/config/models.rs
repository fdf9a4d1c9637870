//! Configuration data structures for the edgeserve bootstrap layer.
//!
//! Defines the schema for application settings: HTTP server binding,
//! CORS allow-lists, credential provisioning, and logging.

use serde::{Deserialize, Serialize};

/// The root configuration object for the application.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings (host, port).
    #[serde(default)]
    pub server: ServerConfig,

    /// CORS policy for the inner application.
    #[serde(default)]
    pub cors: CorsConfig,

    /// Credential provisioning settings.
    #[serde(default)]
    pub credentials: CredentialsConfig,

    /// Logging and observability settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the built-in HTTP server.
///
/// The defaults match the local development entry point: bind all
/// interfaces on port 8000.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The IP address or hostname the server should bind to.
    /// Default: `0.0.0.0`
    #[serde(default = "default_host")]
    pub host: String,

    /// The port number the server should listen on.
    /// Default: `8000`
    #[serde(default = "default_port")]
    pub port: u16,
}

/// CORS policy for the inner application.
///
/// The outer adapter always runs maximally permissive and takes no
/// configuration; only the inner allow-list is tunable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Origins allowed by the inner application, as exact matches.
    /// Default: the local frontend dev server and the deployed frontend.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

/// Settings for startup credential provisioning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Environment variable holding the JSON-encoded service account.
    /// Default: `GOOGLE_APPLICATION_CREDENTIALS_JSON`
    #[serde(default = "default_secret_env")]
    pub secret_env: String,

    /// Environment variable written to point at the provisioned file,
    /// read by credential-consuming SDKs.
    /// Default: `GOOGLE_APPLICATION_CREDENTIALS`
    #[serde(default = "default_pointer_env")]
    pub pointer_env: String,

    /// Path the credential artifact is written to.
    /// Default: `service_account.json`
    #[serde(default = "default_artifact_path")]
    pub artifact_path: String,

    /// Whether teardown removes the artifact and unsets the pointer.
    /// Default: `false` (the artifact outlives the process).
    #[serde(default)]
    pub cleanup_on_shutdown: bool,
}

/// Settings for application logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`pretty`, `json`).
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "https://your-frontend-project.vercel.app".to_string(),
    ]
}

fn default_secret_env() -> String {
    "GOOGLE_APPLICATION_CREDENTIALS_JSON".to_string()
}

fn default_pointer_env() -> String {
    "GOOGLE_APPLICATION_CREDENTIALS".to_string()
}

fn default_artifact_path() -> String {
    "service_account.json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            secret_env: default_secret_env(),
            pointer_env: default_pointer_env(),
            artifact_path: default_artifact_path(),
            cleanup_on_shutdown: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
