use serde::{Deserialize, Serialize};

use super::tool::{ToolCall, ToolResult};

/// Role of a message participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// System instruction
    System,
    /// User message
    User,
    /// Assistant response
    Assistant,
    /// Results of tool invocations
    ToolResult,
}

/// Whether the provider finished the turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Generation stopped naturally
    Complete,
    /// Generation was cut short or is still streaming
    Incomplete,
}

/// Individual part within a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// Text content block
    Text {
        /// The text string
        content: String,
    },
}

impl ContentPart {
    /// Create a text part
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
        }
    }

    /// Text carried by this part, if any
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { content } => Some(content.as_str()),
        }
    }
}

/// One conversation turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Role of the message author
    pub role: Role,
    /// Ordered content parts
    #[serde(default)]
    pub content: Vec<ContentPart>,
    /// Tool calls requested by the assistant
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<ToolCall>,
    /// Tool outputs returned to the model
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_results: Vec<ToolResult>,
    /// Candidate position reported by the provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    /// Completion status reported by the provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl Message {
    fn new(role: Role) -> Self {
        Self {
            role,
            content: Vec::new(),
            tool_calls: Vec::new(),
            tool_results: Vec::new(),
            index: None,
            status: None,
        }
    }

    fn with_text(role: Role, text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentPart::text(text)],
            ..Self::new(role)
        }
    }

    /// Create a system instruction
    pub fn system(text: impl Into<String>) -> Self {
        Self::with_text(Role::System, text)
    }

    /// Create a user message
    pub fn user(text: impl Into<String>) -> Self {
        Self::with_text(Role::User, text)
    }

    /// Create a plain assistant reply
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::with_text(Role::Assistant, text)
    }

    /// Create an assistant turn that requests tool calls
    pub fn tool_calls(tool_calls: Vec<ToolCall>) -> Self {
        Self {
            tool_calls,
            ..Self::new(Role::Assistant)
        }
    }

    /// Create a turn carrying tool results
    pub fn tool_results(tool_results: Vec<ToolResult>) -> Self {
        Self {
            tool_results,
            ..Self::new(Role::ToolResult)
        }
    }

    /// Concatenated text of all content parts
    pub fn text(&self) -> String {
        self.content.iter().filter_map(ContentPart::as_text).collect()
    }
}

/// Partial assistant turn decoded from a streaming chunk
///
/// Successive deltas sharing an `index` belong to the same candidate and
/// are merged by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDelta {
    /// Role of the author, always assistant for decoded deltas
    pub role: Role,
    /// Text carried by this chunk
    #[serde(default)]
    pub content: String,
    /// Candidate position reported by the provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    /// Completion status of the candidate after this chunk
    pub status: Status,
}
