//! Google Generative Language API wire format types

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

// -- Request types --

/// Google `generateContent` request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleRequest {
    /// Conversation contents
    pub contents: Vec<GoogleContent>,
    /// Generation configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GoogleGenerationConfig>,
    /// Tool definitions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<GoogleTool>>,
}

/// Google content object containing role and parts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoogleContent {
    /// Role ("user", "model" or "function")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Content parts
    #[serde(default)]
    pub parts: Vec<GooglePart>,
}

impl GoogleContent {
    /// Create a content object for `role`
    pub fn new(role: &str, parts: Vec<GooglePart>) -> Self {
        Self {
            role: Some(role.to_owned()),
            parts,
        }
    }
}

/// Individual part within a Google content object
///
/// Serialized as a single-key object named after the variant. Parts whose key
/// is not recognized are kept as `Other` so they survive a round trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GooglePart {
    /// Text content
    Text(String),
    /// Inline data (e.g. images)
    InlineData(GoogleInlineData),
    /// Function call from the model
    FunctionCall(GoogleFunctionCall),
    /// Function response from the user
    FunctionResponse(GoogleFunctionResponse),
    /// Any part this layer does not interpret
    #[serde(untagged)]
    Other(Map<String, Value>),
}

/// Loose view of a part used while deserializing
///
/// The provider attaches sibling metadata (e.g. `thoughtSignature`) next to
/// the discriminating key, which a plain externally tagged enum rejects.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPart {
    text: Option<String>,
    inline_data: Option<GoogleInlineData>,
    function_call: Option<GoogleFunctionCall>,
    function_response: Option<GoogleFunctionResponse>,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

impl From<RawPart> for GooglePart {
    fn from(raw: RawPart) -> Self {
        if let Some(call) = raw.function_call {
            Self::FunctionCall(call)
        } else if let Some(response) = raw.function_response {
            Self::FunctionResponse(response)
        } else if let Some(data) = raw.inline_data {
            Self::InlineData(data)
        } else if let Some(text) = raw.text {
            Self::Text(text)
        } else {
            Self::Other(raw.rest)
        }
    }
}

impl<'de> Deserialize<'de> for GooglePart {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawPart::deserialize(deserializer).map(Self::from)
    }
}

/// Inline binary data (images, etc.)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleInlineData {
    /// MIME type (e.g. "image/png")
    pub mime_type: String,
    /// Base64-encoded data
    pub data: String,
}

/// Function call from the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoogleFunctionCall {
    /// Call identifier, sent by newer models only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Function name
    pub name: String,
    /// Function arguments as JSON
    #[serde(default)]
    pub args: Value,
}

/// Function response from the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoogleFunctionResponse {
    /// Function name
    pub name: String,
    /// Response content as JSON
    pub response: Value,
}

/// Generation configuration parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleGenerationConfig {
    /// Sampling temperature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Nucleus sampling threshold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    /// Top-k sampling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    /// Maximum output tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    /// Stop sequences
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_sequences: Option<Vec<String>>,
    /// Candidate count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate_count: Option<u32>,
}

/// Google tool definition wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleTool {
    /// Function declarations
    pub function_declarations: Vec<GoogleFunctionDeclaration>,
}

/// Google function declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoogleFunctionDeclaration {
    /// Function name
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// JSON Schema for parameters
    pub parameters: Value,
}

// -- Response types --

/// Generated candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleCandidate {
    /// Generated content, missing when the candidate was blocked
    #[serde(default)]
    pub content: Option<GoogleContent>,
    /// Finish reason
    #[serde(default)]
    pub finish_reason: Option<String>,
    /// Candidate index
    #[serde(default)]
    pub index: Option<u32>,
}

// -- Error response --

/// Google error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleErrorResponse {
    /// Error details
    pub error: GoogleErrorDetail,
}

/// Google error detail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleErrorDetail {
    /// HTTP status code
    #[serde(default)]
    pub code: Option<Value>,
    /// Error message
    pub message: String,
    /// Error status string
    #[serde(default)]
    pub status: Option<Value>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn part_keeps_text_next_to_metadata() {
        let part: GooglePart = serde_json::from_value(json!({"text": "hi", "thoughtSignature": "abc"})).unwrap();
        assert_eq!(part, GooglePart::Text("hi".to_owned()));
    }

    #[test]
    fn unknown_part_is_preserved() {
        let raw = json!({"executableCode": {"language": "PYTHON", "code": "print(1)"}});
        let part: GooglePart = serde_json::from_value(raw.clone()).unwrap();

        assert!(matches!(part, GooglePart::Other(_)));
        assert_eq!(serde_json::to_value(&part).unwrap(), raw);
    }

    #[test]
    fn function_call_part_shape() {
        let part = GooglePart::FunctionCall(GoogleFunctionCall {
            id: None,
            name: "get_weather".to_owned(),
            args: json!({"city": "Oslo"}),
        });
        assert_eq!(
            serde_json::to_value(&part).unwrap(),
            json!({"functionCall": {"name": "get_weather", "args": {"city": "Oslo"}}})
        );
    }

    #[test]
    fn error_detail_accepts_any_code_and_status() {
        let response: GoogleErrorResponse =
            serde_json::from_value(json!({"error": {"code": "400", "message": "bad", "status": 400}})).unwrap();
        assert_eq!(response.error.message, "bad");
        assert_eq!(response.error.code, Some(json!("400")));
        assert_eq!(response.error.status, Some(json!(400)));
    }

    #[test]
    fn candidate_without_content() {
        let candidate: GoogleCandidate =
            serde_json::from_value(json!({"finishReason": "SAFETY", "index": 0})).unwrap();
        assert_eq!(candidate.content, None);
        assert_eq!(candidate.finish_reason.as_deref(), Some("SAFETY"));
    }
}
