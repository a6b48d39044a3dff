//! Chat completion request and response types

use serde::{Deserialize, Deserializer, Serialize};

/// `null` content (e.g. tool-call replies) reads as an empty string
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where D: Deserializer<'de>
{   Option::<String>::deserialize(deserializer)
      .map(Option::unwrap_or_default)
}

// ===== Messages =====

/// One turn of the conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage
{   pub role: crate::Role
  , #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String
}

impl ChatMessage
{   pub fn new(role: crate::Role, content: impl Into<String>) -> Self
    {   ChatMessage
        {   role
          , content: content.into()
        }
    }

    pub fn user(content: impl Into<String>) -> Self
    {   ChatMessage::new(crate::Role::User, content)
    }

    pub fn system(content: impl Into<String>) -> Self
    {   ChatMessage::new(crate::Role::System, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self
    {   ChatMessage::new(crate::Role::Assistant, content)
    }
}

// ===== Request =====

/// Body of `POST /chat/completions`.
///
/// Every optional field is left out of the JSON when `None`, so the
/// provider default applies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionRequest
{   /// ID of the model to use
    pub model: crate::ChatGptModel
  , /// Conversation so far, oldest first
    pub messages: Vec<ChatMessage>
  , /// Sampling temperature in [0, 2] (default 1).
    /// Alter this or `top_p`, not both.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>
  , /// Nucleus sampling probability mass (default 1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>
  , /// Number of choices to generate (default 1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<u32>
  , /// Upper bound on generated tokens (default: context remainder)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>
  , /// In [-2, 2] (default 0). Positive values favour new topics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f64>
  , /// In [-2, 2] (default 0). Positive values discourage repeats.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f64>
  , /// End-user identifier for abuse monitoring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>
  , /// Return log probabilities of output tokens (default false)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logprobs: Option<bool>
  , /// 0..=20 most likely tokens per position, needs `logprobs`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_logprobs: Option<u8>
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>
  , /// Best-effort deterministic sampling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub service_tier: Option<ServiceTier>
  , /// Ask for server-sent event deltas (default false)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>
  , /// Only meaningful with `stream`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_options: Option<StreamOptions>
  , /// Functions the model may call, 128 max
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<ToolChoice>
  , /// Allow parallel function calling (default true)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel_tool_calls: Option<bool>
}

impl ChatCompletionRequest
{   pub fn new(
      model: crate::ChatGptModel
    , messages: Vec<ChatMessage>
    ) -> Self
    {   ChatCompletionRequest
        {   model
          , messages
          , ..Default::default()
        }
    }

    pub fn with_message(mut self, message: ChatMessage) -> Self
    {   self.messages.push(message);
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self
    {   self.temperature = Some(temperature);
        self
    }

    pub fn with_top_p(mut self, top_p: f64) -> Self
    {   self.top_p = Some(top_p);
        self
    }

    pub fn with_n(mut self, n: u32) -> Self
    {   self.n = Some(n);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self
    {   self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_presence_penalty(mut self, penalty: f64) -> Self
    {   self.presence_penalty = Some(penalty);
        self
    }

    pub fn with_frequency_penalty(mut self, penalty: f64) -> Self
    {   self.frequency_penalty = Some(penalty);
        self
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self
    {   self.user = Some(user.into());
        self
    }

    pub fn with_seed(mut self, seed: i64) -> Self
    {   self.seed = Some(seed);
        self
    }

    pub fn with_response_format(
      mut self
    , kind: ResponseFormatType
    ) -> Self
    {   self.response_format = Some(ResponseFormat { kind });
        self
    }

    pub fn with_tools(mut self, tools: Vec<Tool>) -> Self
    {   self.tools = Some(tools);
        self
    }

    pub fn with_tool_choice(mut self, choice: ToolChoice) -> Self
    {   self.tool_choice = Some(choice);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormatType
{   /// Plain text (default)
    Text
  , /// JSON mode
    JsonObject
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseFormat
{   #[serde(rename = "type")]
    pub kind: ResponseFormatType
}

/// Latency tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceTier
{   /// Scale tier credits until exhausted
    Auto
  , /// Default tier, no latency guarantee
    Default
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamOptions
{   /// Stream one extra usage chunk before `[DONE]`
    pub include_usage: bool
}

// ===== Tools =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool
{   #[serde(rename = "type")]
    pub kind: String
  , pub function: FunctionFormat
}

impl Tool
{   /// A `function` tool
    pub fn function(
      name: impl Into<String>
    , description: impl Into<String>
    , parameters: serde_json::Value
    ) -> Self
    {   Tool
        {   kind: "function".to_string()
          , function: FunctionFormat
            {   name: name.into()
              , description: Some(description.into())
              , parameters: Some(parameters)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionFormat
{   pub name: String
  , #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>
  , /// JSON schema of the arguments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<serde_json::Value>
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolChoiceMode
{   /// Never call a tool
    None
  , /// Model decides
    Auto
  , /// Must call at least one tool
    Required
}

/// `tool_choice`: either a mode string or one forced tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolChoice
{   Mode(ToolChoiceMode)
  , Tool(Tool)
}

// ===== Response =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse
{   pub id: String
  , #[serde(default)]
    pub object: String
  , /// Unix seconds
    #[serde(default, alias = "created_at")]
    pub created: i64
  , #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>
  , #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_fingerprint: Option<String>
  , pub choices: Vec<ChatResponseChoice>
  , #[serde(default)]
    pub usage: ChatResponseUsage
}

impl ChatResponse
{   /// Text of the first choice, if any
    pub fn first_content(&self) -> Option<&str>
    {   self.choices.first()
          .map(|c| c.message.content.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponseChoice
{   pub index: u32
  , pub message: ChatMessage
  , /// "stop", "length", "tool_calls", ...
    #[serde(default)]
    pub finish_reason: Option<String>
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponseUsage
{   pub prompt_tokens: u32
  , pub completion_tokens: u32
  , pub total_tokens: u32
}
