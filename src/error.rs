use std::fmt;

/// Error type for chat completion calls.
/// Validation variants are returned before any network I/O.
#[derive(Debug)]
pub enum Error
{   /// Request has no messages
    NoMessages
  , /// Model is not one of the supported identifiers
    InvalidModel
  , /// A message carries a role other than user/system/assistant
    InvalidRole
  , /// Temperature outside [0, 2]
    InvalidTemperature
  , /// Presence penalty outside [-2, 2]
    InvalidPresencePenalty
  , /// Frequency penalty outside [-2, 2]
    InvalidFrequencyPenalty
  , /// Nucleus sampling mass outside [0, 1]
    InvalidTopP
  , /// API key is missing
    MissingApiKey(String)
  , /// Invalid configuration
    InvalidConfiguration(String)
  , /// Transport failure, as reported by reqwest
    Http(reqwest::Error)
  , /// Request could not be serialized
    Encode(serde_json::Error)
  , /// Response body did not match the response schema
    Decode(serde_json::Error)
  , /// API answered with a non-success status
    Api
    {   status: u16
      , message: String
    }
}

impl Error
{   /// True for the errors produced by request validation
    pub fn is_validation(&self) -> bool
    {   matches!(
          self,
          Error::NoMessages
            | Error::InvalidModel
            | Error::InvalidRole
            | Error::InvalidTemperature
            | Error::InvalidPresencePenalty
            | Error::InvalidFrequencyPenalty
            | Error::InvalidTopP
        )
    }
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::NoMessages => {
              write!(f, "no messages provided")
            }
          , Error::InvalidModel => {
              write!(f, "invalid model")
            }
          , Error::InvalidRole => {
              write!(f,
                "invalid role, only 'user', 'system' and \
                 'assistant' are allowed"
              )
            }
          , Error::InvalidTemperature => {
              write!(f,
                "invalid temperature, must be between 0 and 2"
              )
            }
          , Error::InvalidPresencePenalty => {
              write!(f,
                "invalid presence penalty, must be between -2 and 2"
              )
            }
          , Error::InvalidFrequencyPenalty => {
              write!(f,
                "invalid frequency penalty, must be between -2 and 2"
              )
            }
          , Error::InvalidTopP => {
              write!(f, "invalid top_p, must be between 0 and 1")
            }
          , Error::MissingApiKey(source) => {
              write!(f, "Missing API key: {}", source)
            }
          , Error::InvalidConfiguration(msg) => {
              write!(f, "Invalid configuration: {}", msg)
            }
          , Error::Http(e) => {
              write!(f, "HTTP error: {}", e)
            }
          , Error::Encode(e) => {
              write!(f, "Encode error: {}", e)
            }
          , Error::Decode(e) => {
              write!(f, "Decode error: {}", e)
            }
          , Error::Api { status, message } => {
              write!(f, "API error ({}): {}", status, message)
            }
        }
    }
}

impl std::error::Error for Error
{   fn source(&self)
      -> Option<&(dyn std::error::Error + 'static)>
    {   match self
        {   Error::Http(e) => Some(e)
          , Error::Encode(e) => Some(e)
          , Error::Decode(e) => Some(e)
          , _ => None
        }
    }
}

impl From<reqwest::Error> for Error
{   fn from(e: reqwest::Error) -> Self
    {   Error::Http(e)
    }
}
