//! Responder configuration.
//!
//! Everything the responder needs to reach the completion endpoint is
//! passed in through [`ResponderConfig`] at construction. The API key is
//! the one exception that may stay in the environment: with
//! [`CredentialSource::Env`] it is looked up on every call, so rotating the
//! variable takes effect without rebuilding the client.

use serde::{Deserialize, Serialize};

use crate::error::ResponderError;

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/completions";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo-instruct";
pub const DEFAULT_MAX_TOKENS: u32 = 150;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_API_KEY_VAR: &str = "CHATLET_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponderConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default)]
    pub credentials: CredentialSource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CredentialSource {
    Inline { api_key: String },
    Env { var: String },
}

impl Default for CredentialSource {
    fn default() -> Self {
        CredentialSource::Env {
            var: DEFAULT_API_KEY_VAR.to_string(),
        }
    }
}

impl CredentialSource {
    /// Resolve the bearer token. Environment lookups happen here, at call
    /// time, rather than when the config is built.
    pub fn resolve(&self) -> Result<String, ResponderError> {
        match self {
            CredentialSource::Inline { api_key } if !api_key.is_empty() => Ok(api_key.clone()),
            CredentialSource::Inline { .. } => Err(ResponderError::MissingCredential {
                var: "<inline>".to_string(),
            }),
            CredentialSource::Env { var } => match std::env::var(var) {
                Ok(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
                _ => Err(ResponderError::MissingCredential { var: var.clone() }),
            },
        }
    }
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            credentials: CredentialSource::default(),
        }
    }
}

impl ResponderConfig {
    /// Defaults overlaid with `CHATLET_ENDPOINT`, `CHATLET_MODEL`,
    /// `CHATLET_MAX_TOKENS` and `CHATLET_TEMPERATURE` when set.
    pub fn from_env() -> Result<Self, ResponderError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`ResponderConfig::from_env`], reading variables through
    /// `lookup` instead of the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ResponderError> {
        let mut config = Self::default();

        if let Some(endpoint) = lookup("CHATLET_ENDPOINT") {
            config.endpoint = endpoint;
        }
        if let Some(model) = lookup("CHATLET_MODEL") {
            config.model = model;
        }
        if let Some(raw) = lookup("CHATLET_MAX_TOKENS") {
            config.max_tokens = raw.trim().parse().map_err(|_| {
                ResponderError::Config(format!("CHATLET_MAX_TOKENS is not a number: {raw}"))
            })?;
        }
        if let Some(raw) = lookup("CHATLET_TEMPERATURE") {
            config.temperature = raw.trim().parse().map_err(|_| {
                ResponderError::Config(format!("CHATLET_TEMPERATURE is not a number: {raw}"))
            })?;
        }

        Ok(config)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.credentials = CredentialSource::Inline {
            api_key: api_key.into(),
        };
        self
    }

    /// Describe the credential for logs without exposing it.
    pub fn credential_hint(&self) -> String {
        match &self.credentials {
            CredentialSource::Inline { api_key } => redacted_key_hint(api_key),
            CredentialSource::Env { var } => format!("env:{var}"),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

/// Keep the first and last four characters of a key, e.g. `sk-a...9xQz`.
pub fn redacted_key_hint(key: &str) -> String {
    if key.len() <= 8 || !key.is_ascii() {
        return "****".to_string();
    }
    let prefix = &key[..4];
    let suffix = &key[key.len() - 4..];
    format!("{prefix}...{suffix}")
}
