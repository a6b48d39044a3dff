pub mod error;
pub mod config;
pub mod request;
pub mod validate;
pub mod client;
use serde::{Deserialize, Serialize};

pub use client::Client;
pub use config::ClientConfig;
pub use error::Error;
pub use request::
{   ChatCompletionRequest
  , ChatMessage
  , ChatResponse
  , ChatResponseChoice
  , ChatResponseUsage
  , FunctionFormat
  , ResponseFormat
  , ResponseFormatType
  , ServiceTier
  , StreamOptions
  , Tool
  , ToolChoice
  , ToolChoiceMode
};
pub use validate::validate;

/*

chatgpt is a small async client for OpenAI-style chat completion
endpoints: build a ChatCompletionRequest, validate it locally,
POST it to {base_url}/chat/completions and get a ChatResponse back.

chatgpt/
├── Cargo.toml
├── src/
│   ├── lib.rs          # Re-exports, model and role identifiers
│   ├── error.rs        # Error type (validation, transport, decode)
│   ├── config.rs       # Client configuration (key, base url, env)
│   ├── request.rs      # Request/response wire types
│   ├── validate.rs     # Client-side request validation
│   └── client.rs       # HTTP client and send operation
└── tests/              # Integration tests against a mock server

*/

/// CHATGPT STRUCTURES:

/// Every model identifier the client accepts.
/// Anything else is carried as `Unsupported` so it survives a
/// round trip and can be rejected by [`validate`].
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum ChatGptModel
{   #[default]
    Gpt35Turbo
  , /// Discontinued 2023-09-13, use `Gpt35Turbo_0613`
    Gpt35Turbo_0301
  , Gpt35Turbo_0613
  , Gpt35Turbo16k
  , Gpt35Turbo16k_0613
  , Gpt4
  , /// Discontinued 2023-09-13, use `Gpt4_0613`
    Gpt4_0314
  , Gpt4_0613
  , Gpt4_32k
  , /// Discontinued 2023-09-13, use `Gpt4_32k_0613`
    Gpt4_32k_0314
  , Gpt4_32k_0613
  , /// Identifier not in the supported list
    Unsupported(String)
}

/// All supported models, in the order they were published.
pub static SUPPORTED_MODELS: [ChatGptModel; 11] =
[   ChatGptModel::Gpt35Turbo
  , ChatGptModel::Gpt35Turbo_0301
  , ChatGptModel::Gpt35Turbo_0613
  , ChatGptModel::Gpt35Turbo16k
  , ChatGptModel::Gpt35Turbo16k_0613
  , ChatGptModel::Gpt4
  , ChatGptModel::Gpt4_0314
  , ChatGptModel::Gpt4_0613
  , ChatGptModel::Gpt4_32k
  , ChatGptModel::Gpt4_32k_0314
  , ChatGptModel::Gpt4_32k_0613
];

impl ChatGptModel
{   /// Wire identifier, e.g. "gpt-4-0613"
    pub fn as_str(&self) -> &str
    {   match self
        {   ChatGptModel::Gpt35Turbo => "gpt-3.5-turbo"
          , ChatGptModel::Gpt35Turbo_0301 => "gpt-3.5-turbo-0301"
          , ChatGptModel::Gpt35Turbo_0613 => "gpt-3.5-turbo-0613"
          , ChatGptModel::Gpt35Turbo16k => "gpt-3.5-turbo-16k"
          , ChatGptModel::Gpt35Turbo16k_0613 => "gpt-3.5-turbo-16k-0613"
          , ChatGptModel::Gpt4 => "gpt-4"
          , ChatGptModel::Gpt4_0314 => "gpt-4-0314"
          , ChatGptModel::Gpt4_0613 => "gpt-4-0613"
          , ChatGptModel::Gpt4_32k => "gpt-4-32k"
          , ChatGptModel::Gpt4_32k_0314 => "gpt-4-32k-0314"
          , ChatGptModel::Gpt4_32k_0613 => "gpt-4-32k-0613"
          , ChatGptModel::Unsupported(name) => name
        }
    }

    pub fn is_supported(&self) -> bool
    {   !matches!(self, ChatGptModel::Unsupported(_))
    }

    pub fn is_deprecated(&self) -> bool
    {   self.replacement().is_some()
    }

    /// Successor snapshot for a discontinued model
    pub fn replacement(&self) -> Option<ChatGptModel>
    {   match self
        {   ChatGptModel::Gpt35Turbo_0301 => {
              Some(ChatGptModel::Gpt35Turbo_0613)
            }
          , ChatGptModel::Gpt4_0314 => Some(ChatGptModel::Gpt4_0613)
          , ChatGptModel::Gpt4_32k_0314 => {
              Some(ChatGptModel::Gpt4_32k_0613)
            }
          , _ => None
        }
    }
}

impl From<&str> for ChatGptModel
{   fn from(name: &str) -> Self
    {   SUPPORTED_MODELS.iter()
          .find(|m| m.as_str() == name)
          .cloned()
          .unwrap_or_else(|| ChatGptModel::Unsupported(name.to_string()))
    }
}

impl From<String> for ChatGptModel
{   fn from(name: String) -> Self
    {   ChatGptModel::from(name.as_str())
    }
}

impl From<ChatGptModel> for String
{   fn from(model: ChatGptModel) -> Self
    {   match model
        {   ChatGptModel::Unsupported(name) => name
          , other => other.as_str().to_string()
        }
    }
}

impl std::fmt::Display for ChatGptModel
{   fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
      -> std::fmt::Result
    {   f.write_str(self.as_str())
    }
}

/// Author of a chat message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum Role
{   User
  , System
  , Assistant
  , /// Role string the API does not define
    Unknown(String)
}

impl Role
{   pub fn as_str(&self) -> &str
    {   match self
        {   Role::User => "user"
          , Role::System => "system"
          , Role::Assistant => "assistant"
          , Role::Unknown(role) => role
        }
    }

    pub fn is_known(&self) -> bool
    {   !matches!(self, Role::Unknown(_))
    }
}

impl From<&str> for Role
{   fn from(role: &str) -> Self
    {   match role
        {   "user" => Role::User
          , "system" => Role::System
          , "assistant" => Role::Assistant
          , other => Role::Unknown(other.to_string())
        }
    }
}

impl From<String> for Role
{   fn from(role: String) -> Self
    {   Role::from(role.as_str())
    }
}

impl From<Role> for String
{   fn from(role: Role) -> Self
    {   match role
        {   Role::Unknown(role) => role
          , other => other.as_str().to_string()
        }
    }
}

impl std::fmt::Display for Role
{   fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
      -> std::fmt::Result
    {   f.write_str(self.as_str())
    }
}
