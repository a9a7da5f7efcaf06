use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tool invocation requested by the assistant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Identifier linking the call to its result
    pub call_id: String,
    /// Name of the function to call
    pub name: String,
    /// Call arguments
    pub arguments: ToolArguments,
}

impl ToolCall {
    /// Create a tool call whose arguments are already JSON-encoded
    pub fn new(call_id: impl Into<String>, name: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            call_id: call_id.into(),
            name: name.into(),
            arguments: ToolArguments::Encoded(arguments.into()),
        }
    }
}

/// Tool call arguments
///
/// Conversations built by callers store arguments as a JSON string, while
/// calls decoded from the provider keep the structured value it sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolArguments {
    /// JSON-encoded arguments
    Encoded(String),
    /// Structured arguments
    Native(Value),
}

impl ToolArguments {
    /// Structured form of the arguments
    ///
    /// # Errors
    ///
    /// Returns the parse error when encoded arguments are not valid JSON
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        match self {
            Self::Encoded(raw) => serde_json::from_str(raw),
            Self::Native(value) => Ok(value.clone()),
        }
    }
}

/// Result of a tool invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResult {
    /// ID of the tool call this result responds to
    pub tool_call_id: String,
    /// Name of the function that produced the result
    pub name: String,
    /// JSON-encoded output
    pub content: String,
}

impl ToolResult {
    /// Create a tool result from JSON-encoded output
    pub fn new(tool_call_id: impl Into<String>, name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Catalog entry describing a callable function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDeclaration {
    /// Function name
    pub name: String,
    /// Human-readable description
    #[serde(default)]
    pub description: String,
    /// JSON Schema for the function parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,
}
