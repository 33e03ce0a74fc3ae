use std::{str::FromStr, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
/// Kept below the hosting platform's 300 second execution limit so the handler can
/// still answer with a timeout response.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 280;
const DEFAULT_UPLOAD_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_FILE_SIZE_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_MAX_BODY_BYTES: usize = 400 * 1024 * 1024;

pub struct Config {
    pub database_url: String,

    pub azure_connection_string: String,
    pub azure_container_name: String,

    pub bind_address: String,

    /// Wall-clock budget for one submission, multipart parsing included.
    pub request_timeout: Duration,
    /// Time limit for a single blob upload.
    pub upload_timeout: Duration,
    /// Largest file the uploader accepts.
    pub max_file_bytes: usize,
    /// Largest request body the router accepts.
    pub max_body_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and optional ones parsable
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is unset
    /// - `Err(ConfigError::InvalidEnvVar)` - A numeric variable could not be parsed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            database_url: required(&lookup, "DATABASE_URL")?,
            azure_connection_string: required(&lookup, "AZURE_STORAGE_CONNECTION_STRING")?,
            azure_container_name: required(&lookup, "AZURE_CONTAINER_NAME")?,
            bind_address: lookup("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            request_timeout: Duration::from_secs(parsed(
                &lookup,
                "REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?),
            upload_timeout: Duration::from_secs(parsed(
                &lookup,
                "UPLOAD_TIMEOUT_SECS",
                DEFAULT_UPLOAD_TIMEOUT_SECS,
            )?),
            max_file_bytes: parsed(&lookup, "MAX_FILE_SIZE_BYTES", DEFAULT_MAX_FILE_SIZE_BYTES)?,
            max_body_bytes: parsed(&lookup, "MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?,
        })
    }
}

fn required<F>(lookup: &F, name: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn parsed<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => {
            let result = value.trim().parse::<T>();
            result.map_err(|e| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                reason: e.to_string(),
                value,
            })
        }
    }
}
