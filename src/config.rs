use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use validator::{Validate, ValidationError};

use crate::core::RankingLimits;
use crate::models::Redirect;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub dataset: DatasetSettings,
    #[serde(default)]
    #[validate(nested)]
    pub ranking: RankingSettings,
    #[serde(default)]
    #[validate(nested)]
    pub pagination: PaginationSettings,
    #[serde(default)]
    pub redirect: RedirectSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 3000 }

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetSettings {
    #[serde(default = "default_dataset_path")]
    pub path: String,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self { path: default_dataset_path() }
    }
}

fn default_dataset_path() -> String { "data/centros_salud.json".to_string() }

#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_ranking_defaults"))]
pub struct RankingSettings {
    #[serde(default = "default_max_nearby")]
    #[validate(range(min = 1, max = 100))]
    pub max_nearby: usize,
    #[serde(default = "default_nearby")]
    #[validate(range(min = 1))]
    pub default_nearby: usize,
    #[serde(default = "default_max_alternatives")]
    #[validate(range(min = 1, max = 100))]
    pub max_alternatives: usize,
    #[serde(default = "default_alternatives")]
    #[validate(range(min = 1))]
    pub default_alternatives: usize,
    #[serde(default = "default_capability_keyword")]
    #[validate(length(min = 1))]
    pub capability_keyword: String,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            max_nearby: default_max_nearby(),
            default_nearby: default_nearby(),
            max_alternatives: default_max_alternatives(),
            default_alternatives: default_alternatives(),
            capability_keyword: default_capability_keyword(),
        }
    }
}

impl RankingSettings {
    pub fn limits(&self) -> RankingLimits {
        RankingLimits {
            max_nearby: self.max_nearby,
            max_alternatives: self.max_alternatives,
        }
    }
}

fn validate_ranking_defaults(ranking: &RankingSettings) -> Result<(), ValidationError> {
    if ranking.default_nearby > ranking.max_nearby
        || ranking.default_alternatives > ranking.max_alternatives
    {
        return Err(ValidationError::new("default_exceeds_max"));
    }
    Ok(())
}

fn default_max_nearby() -> usize { 10 }
fn default_nearby() -> usize { 3 }
fn default_max_alternatives() -> usize { 5 }
fn default_alternatives() -> usize { 3 }
fn default_capability_keyword() -> String { "odonto".to_string() }

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PaginationSettings {
    #[serde(default = "default_page_limit")]
    #[validate(range(min = 1))]
    pub default_limit: usize,
    #[serde(default = "default_max_page_limit")]
    #[validate(range(min = 1, max = 1000))]
    pub max_limit: usize,
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            default_limit: default_page_limit(),
            max_limit: default_max_page_limit(),
        }
    }
}

fn default_page_limit() -> usize { 10 }
fn default_max_page_limit() -> usize { 20 }

#[derive(Debug, Clone, Deserialize)]
pub struct RedirectSettings {
    #[serde(default = "default_redirect_message")]
    pub mensaje: String,
    #[serde(default = "default_redirect_title")]
    pub titulo: String,
    #[serde(default = "default_redirect_contact")]
    pub contacto: String,
    #[serde(default = "default_redirect_link")]
    pub link: String,
}

impl Default for RedirectSettings {
    fn default() -> Self {
        Self {
            mensaje: default_redirect_message(),
            titulo: default_redirect_title(),
            contacto: default_redirect_contact(),
            link: default_redirect_link(),
        }
    }
}

impl RedirectSettings {
    pub fn redirect(&self) -> Redirect {
        Redirect {
            titulo: self.titulo.clone(),
            contacto: self.contacto.clone(),
            link: self.link.clone(),
        }
    }
}

fn default_redirect_message() -> String {
    "Tu centro más cercano no ofrece odontología actualmente.".to_string()
}
fn default_redirect_title() -> String { "Servicio de Orientación Municipal (SOM)".to_string() }
fn default_redirect_contact() -> String { "0800-XXX-SOM".to_string() }
fn default_redirect_link() -> String { "https://cordoba.gob.ar/som".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with CENTROS__)
    /// 5. A bare `PORT` variable for `server.port`
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., CENTROS__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("CENTROS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_port_override(settings)?;

        Self::finish(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("CENTROS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Self::finish(settings)
    }

    fn finish(config: Config) -> Result<Self, ConfigError> {
        let settings: Settings = config.try_deserialize()?;
        settings
            .validate()
            .map_err(|e| ConfigError::Message(format!("Invalid configuration: {}", e)))?;
        Ok(settings)
    }
}

/// Hosting platforms hand the listen port over as `PORT`
fn apply_port_override(settings: Config) -> Result<Config, ConfigError> {
    match std::env::var("PORT") {
        Ok(port) => {
            let port: u16 = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::Message(format!("PORT is not a valid port: {}", port)))?;
            Config::builder()
                .add_source(settings)
                .set_override("server.port", i64::from(port))?
                .build()
        }
        Err(_) => Ok(settings),
    }
}
