// Service configuration from `APP_`-prefixed environment variables.
//
// A `.env` file in the working directory is loaded first when present; real
// environment variables take precedence over it.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} has an invalid value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub history_path: PathBuf,
    pub feedback_path: PathBuf,
    pub stats_max_history: usize,
    pub feedback_cache_size: usize,
    pub reset_stats_on_start: bool,
    pub allow_origins: AllowedOrigins,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            history_path: PathBuf::from("data/prediction_history.jsonl"),
            feedback_path: PathBuf::from("data/feedback.jsonl"),
            stats_max_history: 100,
            feedback_cache_size: 200,
            reset_stats_on_start: false,
            allow_origins: AllowedOrigins::Any,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Some(error) = dotenv_problem(dotenvy::dotenv()) {
            tracing::warn!(%error, "ignoring unusable .env file");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            bind_addr: parsed(&lookup, "APP_BIND_ADDR")?.unwrap_or(defaults.bind_addr),
            history_path: lookup("APP_HISTORY_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.history_path),
            feedback_path: lookup("APP_FEEDBACK_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.feedback_path),
            stats_max_history: parsed(&lookup, "APP_STATS_MAX_HISTORY")?
                .unwrap_or(defaults.stats_max_history),
            feedback_cache_size: parsed(&lookup, "APP_FEEDBACK_CACHE_SIZE")?
                .unwrap_or(defaults.feedback_cache_size),
            reset_stats_on_start: parsed(&lookup, "APP_RESET_STATS_ON_START")?
                .unwrap_or(defaults.reset_stats_on_start),
            allow_origins: lookup("APP_ALLOW_ORIGINS")
                .map(|raw| origins(&raw))
                .unwrap_or(defaults.allow_origins),
        })
    }
}

fn parsed<T>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key)
        .map(|value| {
            value.trim().parse::<T>().map_err(|error| ConfigError::Invalid {
                key,
                reason: error.to_string(),
                value,
            })
        })
        .transpose()
}

/// A missing `.env` is normal; anything else is worth reporting.
fn dotenv_problem<T>(result: Result<T, dotenvy::Error>) -> Option<dotenvy::Error> {
    match result {
        Err(error) if !error.not_found() => Some(error),
        _ => None,
    }
}

fn origins(raw: &str) -> AllowedOrigins {
    let list: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect();
    if list.is_empty() || list.iter().any(|origin| origin == "*") {
        AllowedOrigins::Any
    } else {
        AllowedOrigins::List(list)
    }
}
