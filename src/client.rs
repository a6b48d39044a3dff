use std::time::Duration;
use log::{debug, trace, warn, error, log, Level};
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::error::Error;
use crate::request::{ChatCompletionRequest, ChatMessage, ChatResponse};

const ORGANIZATION_HEADER: &str = "OpenAI-Organization";

/// Error envelope returned by the API on non-success statuses
#[derive(Debug, Deserialize)]
struct ApiErrorBody
{   error: ApiErrorDetail
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail
{   message: String
}

/// Pull the provider's message out of an error body,
/// falling back to the raw text
fn api_error_message(body: &str) -> String
{   serde_json::from_str::<ApiErrorBody>(body)
      .map(|b| b.error.message)
      .unwrap_or_else(|_| body.to_string())
}

/// Chat completion client.
///
/// Holds the configuration and a pooled `reqwest::Client`; cheap to
/// clone and safe to share. Each [`Client::send`] is one HTTP exchange,
/// dropping its future cancels the exchange.
#[derive(Debug, Clone)]
pub struct Client
{   config: ClientConfig
  , http_client: reqwest::Client
}

impl Client
{   pub fn new(config: ClientConfig) -> Result<Self, Error>
    {   debug!("Creating Client for: {}", config.base_url);
        config.check()?;

        let mut builder = reqwest::Client::builder()
          .user_agent(
            format!("chatgpt-rs/{}", env!("CARGO_PKG_VERSION"))
          );
        if let Some(secs) = config.timeout_secs
        {   builder = builder.timeout(Duration::from_secs(secs));
        }

        let http_client = builder.build()
          .map_err(|e| {
            error!("Failed to build HTTP client: {}", e);
            Error::Http(e)
          })?;

        Ok(Client
        {   config
          , http_client
        })
    }

    /// Client configured from `OPENAI_*` environment variables
    pub fn from_env() -> Result<Self, Error>
    {   Client::new(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig
    {   &self.config
    }

    /// Send one user message to the default model
    pub async fn simple_send(
      &self
    , message: impl Into<String>
    ) -> Result<ChatResponse, Error>
    {   let req = ChatCompletionRequest::new(
          crate::ChatGptModel::default()
        , vec![ChatMessage::user(message)]
        );
        self.send(&req).await
    }

    /// Validate, POST to `{base_url}/chat/completions` and decode.
    ///
    /// Validation errors are returned before any network I/O.
    /// Transport and decode failures are returned as
    /// `Error::Http` / `Error::Decode` wrapping the underlying error.
    pub async fn send(
      &self
    , req: &ChatCompletionRequest
    ) -> Result<ChatResponse, Error>
    {   debug!("send for model: {}", req.model);
        crate::validate::validate(req)?;

        if let Some(successor) = req.model.replacement()
        {   warn!(
              "Model {} is discontinued, use {} instead",
              req.model, successor
            );
        }
        if req.stream == Some(true)
        {   warn!("stream=true: event-stream bodies are not decoded");
        }

        let body_level = if self.config.is_verbose()
        {   Level::Debug
        } else
        {   Level::Trace
        };

        let body = serde_json::to_vec(req)
          .map_err(|e| {
            error!("Failed to encode request: {}", e);
            Error::Encode(e)
          })?;
        log!(body_level, "Request body: {}", String::from_utf8_lossy(&body));

        let url = self.config.chat_completions_url();
        let mut http_req = self.http_client
          .post(&url)
          .bearer_auth(&self.config.api_key)
          .header(reqwest::header::CONTENT_TYPE, "application/json")
          .body(body);
        if let Some(org) = &self.config.organization
        {   http_req = http_req.header(ORGANIZATION_HEADER, org);
        }

        let response = http_req
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            Error::Http(e)
          })?;

        let status = response.status();
        trace!("Response status from {}: {}", url, status);

        if !status.is_success()
        {   let error_text = response.text().await
              .unwrap_or_else(|e| {
                error!("Failed to read error body: {}", e);
                "Unknown error".to_string()
              });
            error!("API error {}: {}", status, error_text);
            return Err(Error::Api
            {   status: status.as_u16()
              , message: api_error_message(&error_text)
            });
        }

        let bytes = response.bytes()
          .await
          .map_err(|e| {
            error!("Failed to read response body: {}", e);
            Error::Http(e)
          })?;
        log!(body_level, "Response body: {}", String::from_utf8_lossy(&bytes));

        serde_json::from_slice::<ChatResponse>(&bytes)
          .map_err(|e| {
            error!("Decode error: {}", e);
            Error::Decode(e)
          })
    }
}
