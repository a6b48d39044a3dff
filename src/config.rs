//! Client configuration: credentials, endpoint and transport settings

use std::fmt;
use serde::{Deserialize, Serialize};
use log::{debug, error};

pub const DEFAULT_BASE_URL: &str
  = "https://api.openai.com/v1";

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";
pub const ORGANIZATION_ENV: &str = "OPENAI_ORGANIZATION";
pub const TIMEOUT_SECS_ENV: &str = "OPENAI_TIMEOUT_SECS";

fn default_base_url() -> String
{   DEFAULT_BASE_URL.to_string()
}

/// Client configuration
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig
{   /// Bearer token sent with every request
    pub api_key: String
  , /// API base URL, `/chat/completions` is appended
    #[serde(default = "default_base_url")]
    pub base_url: String
  , /// Sent as the `OpenAI-Organization` header
    #[serde(default)]
    pub organization: Option<String>
  , /// Request timeout in seconds, none by default
    #[serde(default)]
    pub timeout_secs: Option<u64>
  , /// Log request and response bodies at debug level
    #[serde(default)]
    pub verbose: Option<bool>
}

/// `api_key` is masked so configs and clients can be logged
impl fmt::Debug for ClientConfig
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   f.debug_struct("ClientConfig")
          .field("api_key", &"***")
          .field("base_url", &self.base_url)
          .field("organization", &self.organization)
          .field("timeout_secs", &self.timeout_secs)
          .field("verbose", &self.verbose)
          .finish()
    }
}

impl ClientConfig
{   pub fn new(api_key: impl Into<String>) -> Self
    {   ClientConfig
        {   api_key: api_key.into()
          , base_url: default_base_url()
          , organization: None
          , timeout_secs: None
          , verbose: None
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self
    {   self.base_url = base_url.into();
        self
    }

    pub fn with_organization(
      mut self
    , organization: impl Into<String>
    ) -> Self
    {   self.organization = Some(organization.into());
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self
    {   self.timeout_secs = Some(secs);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self
    {   self.verbose = Some(verbose);
        self
    }

    /// Load from `OPENAI_API_KEY`, `OPENAI_BASE_URL`,
    /// `OPENAI_ORGANIZATION` and `OPENAI_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self, crate::error::Error>
    {   Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`ClientConfig::from_env`] with a custom variable source
    pub fn from_lookup<F>(lookup: F)
      -> Result<Self, crate::error::Error>
    where F: Fn(&str) -> Option<String>
    {   debug!("Loading client configuration from environment");
        let api_key = lookup(API_KEY_ENV)
          .ok_or_else(|| {
            error!("{} not set", API_KEY_ENV);
            crate::error::Error::MissingApiKey(
              API_KEY_ENV.to_string()
            )
          })?;

        let mut config = ClientConfig::new(api_key);
        if let Some(base_url) = lookup(BASE_URL_ENV)
        {   config.base_url = base_url;
        }
        config.organization = lookup(ORGANIZATION_ENV);
        if let Some(secs) = lookup(TIMEOUT_SECS_ENV)
        {   let secs = secs.trim().parse::<u64>()
              .map_err(|e| {
                error!("Bad {}: {}", TIMEOUT_SECS_ENV, e);
                crate::error::Error::InvalidConfiguration(
                  format!("{}: {}", TIMEOUT_SECS_ENV, e)
                )
              })?;
            config.timeout_secs = Some(secs);
        }

        config.check()?;
        Ok(config)
    }

    /// Parse a JSON configuration document
    pub fn from_json_str(json: &str)
      -> Result<Self, crate::error::Error>
    {   let config: ClientConfig = serde_json::from_str(json)
          .map_err(|e| {
            error!("Bad configuration JSON: {}", e);
            crate::error::Error::InvalidConfiguration(e.to_string())
          })?;
        config.check()?;
        Ok(config)
    }

    /// Reject configurations that can never produce a request
    pub fn check(&self) -> Result<(), crate::error::Error>
    {   if self.api_key.trim().is_empty()
        {   return Err(crate::error::Error::InvalidConfiguration(
              "api_key is empty".to_string()
            ));
        }
        if self.base_url.trim().is_empty()
        {   return Err(crate::error::Error::InvalidConfiguration(
              "base_url is empty".to_string()
            ));
        }
        Ok(())
    }

    /// Full URL of the chat completions endpoint
    pub fn chat_completions_url(&self) -> String
    {   format!(
          "{}/chat/completions",
          self.base_url.trim_end_matches('/')
        )
    }

    pub fn is_verbose(&self) -> bool
    {   self.verbose.unwrap_or(false)
    }
}
