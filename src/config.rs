//! Seeder configuration
//!
//! Only the binary's entry point reads the process environment (through
//! [`SeederConfig::from_env`]); everything downstream receives a built
//! [`SeederConfig`].

use std::fmt;

use reqwest::Url;
use thiserror::Error;

use crate::seeder::LookupPolicy;

pub const TRACKING_URI_ENV: &str = "MLFLOW_TRACKING_URI";
pub const TRACKING_TOKEN_ENV: &str = "MLFLOW_TRACKING_TOKEN";
pub const TRACKING_USERNAME_ENV: &str = "MLFLOW_TRACKING_USERNAME";
pub const TRACKING_PASSWORD_ENV: &str = "MLFLOW_TRACKING_PASSWORD";
pub const STRICT_LOOKUP_ENV: &str = "SEED_PROMPTS_STRICT_LOOKUP";

/// Local development tracking server
pub const DEFAULT_TRACKING_URI: &str = "http://localhost:5050";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid MLFLOW_TRACKING_URI '{uri}': {reason}")]
    InvalidTrackingUri { uri: String, reason: String },

    #[error("unsupported MLFLOW_TRACKING_URI scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),

    #[error("MLFLOW_TRACKING_USERNAME and MLFLOW_TRACKING_PASSWORD must be set together")]
    IncompleteBasicAuth,

    #[error("invalid value '{value}' for {var} (expected true/false)")]
    InvalidFlag { var: &'static str, value: String },
}

/// Credentials sent with every registry request
#[derive(Clone, PartialEq, Eq)]
pub enum TrackingCredentials {
    Token(String),
    Basic { username: String, password: String },
}

impl fmt::Debug for TrackingCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackingCredentials::Token(_) => f.write_str("Token(<redacted>)"),
            TrackingCredentials::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}

/// Everything the seeder needs to know about its environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeederConfig {
    pub tracking_uri: String,
    pub credentials: Option<TrackingCredentials>,
    pub lookup_policy: LookupPolicy,
}

impl Default for SeederConfig {
    fn default() -> Self {
        Self {
            tracking_uri: DEFAULT_TRACKING_URI.to_string(),
            credentials: None,
            lookup_policy: LookupPolicy::default(),
        }
    }
}

impl SeederConfig {
    /// Build configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    ///
    /// Empty values count as unset.
    ///
    /// # Example
    /// ```
    /// use prompt_seeder::config::{SeederConfig, DEFAULT_TRACKING_URI};
    ///
    /// let config = SeederConfig::from_lookup(|_| None).unwrap();
    /// assert_eq!(config.tracking_uri, DEFAULT_TRACKING_URI);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let tracking_uri = match var(TRACKING_URI_ENV) {
            Some(uri) => validate_tracking_uri(uri)?,
            None => DEFAULT_TRACKING_URI.to_string(),
        };

        let credentials = match (
            var(TRACKING_TOKEN_ENV),
            var(TRACKING_USERNAME_ENV),
            var(TRACKING_PASSWORD_ENV),
        ) {
            (Some(token), _, _) => Some(TrackingCredentials::Token(token)),
            (None, Some(username), Some(password)) => {
                Some(TrackingCredentials::Basic { username, password })
            }
            (None, None, None) => None,
            (None, _, _) => return Err(ConfigError::IncompleteBasicAuth),
        };

        let strict = var(STRICT_LOOKUP_ENV)
            .map(|value| parse_flag(STRICT_LOOKUP_ENV, &value))
            .transpose()?
            .unwrap_or(false);
        let lookup_policy = if strict {
            LookupPolicy::Strict
        } else {
            LookupPolicy::TreatErrorsAsAbsent
        };

        Ok(Self {
            tracking_uri,
            credentials,
            lookup_policy,
        })
    }
}

fn validate_tracking_uri(uri: String) -> Result<String, ConfigError> {
    let parsed = Url::parse(&uri).map_err(|e| ConfigError::InvalidTrackingUri {
        uri: uri.clone(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(uri),
        other => Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var,
            value: value.to_string(),
        }),
    }
}
