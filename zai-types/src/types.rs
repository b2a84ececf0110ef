//! Core request, response, and streaming frame types.
//!
//! These types mirror the Z.ai GLM chat-completions wire format (an
//! OpenAI-compatible surface) and serialize/deserialize directly against it.

use serde::{Deserialize, Serialize};

/// The role of a message participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A system message.
    System,
    /// A human user.
    User,
    /// An AI assistant.
    Assistant,
}

/// One turn in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message author.
    pub role: Role,
    /// The text content. May be empty.
    pub content: String,
}

impl Message {
    /// Create a system message.
    ///
    /// # Example
    ///
    /// ```
    /// use zai_types::Message;
    /// let msg = Message::system("You are a helpful assistant.");
    /// ```
    #[must_use]
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: text.into(),
        }
    }

    /// Create a user message.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: text.into(),
        }
    }

    /// Create an assistant message.
    #[must_use]
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: text.into(),
        }
    }
}

/// A chat-completion request.
///
/// The `stream` field is always overwritten by the operation that sends the
/// request: the blocking call forces `false`, the streaming call forces
/// `true`, whatever the caller set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Model identifier (e.g. "glm-4").
    pub model: String,
    /// Conversation messages, oldest first.
    pub messages: Vec<Message>,
    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Maximum tokens to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Whether the response should be streamed. Set by the calling
    /// operation, never by the caller.
    #[serde(default)]
    pub stream: bool,
}

/// A full (non-streaming) chat-completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletion {
    /// Unique identifier for the completion.
    pub id: String,
    /// Object-kind tag (e.g. "chat.completion").
    #[serde(default)]
    pub object: String,
    /// Creation timestamp (unix seconds).
    #[serde(default)]
    pub created: i64,
    /// Model that generated the response.
    pub model: String,
    /// Response choices. May be empty; the first choice is the primary
    /// answer.
    pub choices: Vec<Choice>,
    /// Token usage statistics.
    #[serde(default)]
    pub usage: TokenUsage,
}

impl ChatCompletion {
    /// The text of the primary (first) choice, if any.
    #[must_use]
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}

/// A single choice in a full response.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// Index of this choice.
    pub index: u32,
    /// The generated message.
    pub message: Message,
    /// Why generation stopped, when the service reports it.
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Token usage statistics.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct TokenUsage {
    /// Number of tokens in the prompt.
    pub prompt_tokens: u64,
    /// Number of tokens in the completion.
    pub completion_tokens: u64,
    /// Total tokens used (prompt + completion).
    pub total_tokens: u64,
}

/// One decoded streaming frame (a single `data:` payload).
///
/// Represents an incremental update, not a full message.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamFrame {
    /// Unique identifier for the completion this frame belongs to.
    #[serde(default)]
    pub id: String,
    /// Object-kind tag (e.g. "chat.completion.chunk").
    #[serde(default)]
    pub object: String,
    /// Creation timestamp (unix seconds).
    #[serde(default)]
    pub created: i64,
    /// Model producing the stream.
    #[serde(default)]
    pub model: String,
    /// Incremental choices. The first choice is the primary answer.
    #[serde(default)]
    pub choices: Vec<DeltaChoice>,
}

/// A single choice within a streaming frame.
#[derive(Debug, Clone, Deserialize)]
pub struct DeltaChoice {
    /// Index of this choice.
    #[serde(default)]
    pub index: u32,
    /// The partial message for this frame.
    #[serde(default)]
    pub delta: Delta,
    /// Why generation stopped; present only on the final frame of a choice.
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// The partial message carried by one streaming frame.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Delta {
    /// Role, sent on the first frame of a choice.
    #[serde(default)]
    pub role: Option<Role>,
    /// Text increment. May be empty.
    #[serde(default)]
    pub content: String,
}
