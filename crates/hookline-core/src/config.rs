//! Configuration types for hookline.
//!
//! [`Config::load`] layers, in order: the embedded defaults, an optional TOML
//! file, then `HOOKLINE__SECTION__KEY` environment variables.
//! [`Config::defaults`] returns the embedded defaults without touching the
//! filesystem or environment (useful in tests).

use crate::auth::TokenAuthenticator;
use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[server]
bind = "0.0.0.0:8080"
path = "/deploy"

[auth]
token_sha256 = ""

[sink]
path        = "../logs/message.log"
create_dirs = true

[labels]
ff_enable      = "Enable"
ff_disable     = "Disable"
ff_complicated = "It's complicated..."
"#;

/// File read when no `--config` path is given. Missing is fine.
pub const DEFAULT_CONFIG_FILE: &str = "hookline.toml";

const ENV_PREFIX: &str = "HOOKLINE";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub sink: SinkConfig,
    #[serde(default)]
    pub labels: ActionLabels,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Route the webhook is mounted on.
    #[serde(default = "default_path")]
    pub path: String,
}

fn default_bind() -> String { "0.0.0.0:8080".to_string() }
fn default_path() -> String { "/deploy".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            path: default_path(),
        }
    }
}

/// `[auth]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// Hex SHA-256 digest of the shared slash-command token.
    #[serde(default)]
    pub token_sha256: String,
}

impl AuthConfig {
    pub fn authenticator(&self) -> Result<TokenAuthenticator, ConfigError> {
        TokenAuthenticator::from_hex_digest(&self.token_sha256)
    }
}

/// `[sink]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SinkConfig {
    #[serde(default = "default_sink_path")]
    pub path: PathBuf,
    #[serde(default = "default_create_dirs")]
    pub create_dirs: bool,
}

fn default_sink_path() -> PathBuf { PathBuf::from("../logs/message.log") }
fn default_create_dirs() -> bool { true }

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            path: default_sink_path(),
            create_dirs: default_create_dirs(),
        }
    }
}

/// `[labels]` section: the `change_type` values a feature-flag message
/// may carry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActionLabels {
    #[serde(rename = "ff_enable", default = "default_enable")]
    pub enable: String,
    #[serde(rename = "ff_disable", default = "default_disable")]
    pub disable: String,
    /// Ambiguous change. Informational only: it renders the same as an
    /// unrecognised label, but is not reported as unrecognised.
    #[serde(rename = "ff_complicated", default = "default_complicated")]
    pub complicated: String,
}

fn default_enable() -> String { "Enable".to_string() }
fn default_disable() -> String { "Disable".to_string() }
fn default_complicated() -> String { "It's complicated...".to_string() }

impl ActionLabels {
    /// Whether `label` is one of the three configured action labels.
    pub fn is_known(&self, label: &str) -> bool {
        [&self.enable, &self.disable, &self.complicated]
            .iter()
            .any(|known| known.as_str() == label)
    }
}

impl Default for ActionLabels {
    fn default() -> Self {
        Self {
            enable: default_enable(),
            disable: default_disable(),
            complicated: default_complicated(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load configuration. An explicit `path` must exist; without one,
    /// [`DEFAULT_CONFIG_FILE`] is read if present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false),
        };

        let cfg = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(file)
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()?;
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
