// Runtime configuration read from the environment, with a `.env` file as an optional source.

use crate::application::swipe_log::SWIPE_LOG_KEY;
use crate::core::spot::model::FALLBACK_IMAGE_URL;
use std::path::PathBuf;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub const COLLECTION_VAR: &str = "KAMPUSPOT_COLLECTION";
pub const SWIPE_KEY_VAR: &str = "KAMPUSPOT_SWIPE_KEY";
pub const STORAGE_DIR_VAR: &str = "KAMPUSPOT_STORAGE_DIR";
pub const FALLBACK_IMAGE_VAR: &str = "KAMPUSPOT_FALLBACK_IMAGE";
pub const LOG_VAR: &str = "KAMPUSPOT_LOG";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must not be blank")]
    Blank(&'static str),

    #[error("{var} must be an http(s) URL, got {value}")]
    NotAUrl { var: &'static str, value: String },

    #[error("{var} is not a valid log filter: {reason}")]
    InvalidLogFilter { var: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub collection: String,
    pub swipe_key: String,
    pub storage_dir: PathBuf,
    pub fallback_image_url: String,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            collection: "spots".to_string(),
            swipe_key: SWIPE_LOG_KEY.to_string(),
            storage_dir: PathBuf::from(".kampuspot"),
            fallback_image_url: FALLBACK_IMAGE_URL.to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the config from any variable source. Unset variables take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Config::default();
        let read = |var: &'static str, default: String| -> Result<String, ConfigError> {
            match lookup(var) {
                None => Ok(default),
                Some(value) if value.trim().is_empty() => Err(ConfigError::Blank(var)),
                Some(value) => Ok(value.trim().to_string()),
            }
        };

        let fallback_image_url = read(FALLBACK_IMAGE_VAR, defaults.fallback_image_url)?;
        if !(fallback_image_url.starts_with("https://")
            || fallback_image_url.starts_with("http://"))
        {
            return Err(ConfigError::NotAUrl {
                var: FALLBACK_IMAGE_VAR,
                value: fallback_image_url,
            });
        }

        let log_filter = read(LOG_VAR, defaults.log_filter)?;
        EnvFilter::try_new(&log_filter).map_err(|err| ConfigError::InvalidLogFilter {
            var: LOG_VAR,
            reason: err.to_string(),
        })?;

        Ok(Self {
            collection: read(COLLECTION_VAR, defaults.collection)?,
            swipe_key: read(SWIPE_KEY_VAR, defaults.swipe_key)?,
            storage_dir: PathBuf::from(read(
                STORAGE_DIR_VAR,
                defaults.storage_dir.to_string_lossy().into_owned(),
            )?),
            fallback_image_url,
            log_filter,
        })
    }
}
