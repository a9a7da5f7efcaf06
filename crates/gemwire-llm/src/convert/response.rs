//! Inbound: Google wire response -> canonical messages or deltas

use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use super::select::{PartKind, select_parts};
use crate::error::DecodeError;
use crate::protocol::google::{GoogleCandidate, GoogleContent, GoogleErrorResponse, GoogleFunctionCall, GooglePart};
use crate::types::{ContentPart, Message, MessageDelta, Role, Status, ToolArguments, ToolCall};

/// Finish reason marking a naturally completed candidate
const FINISH_STOP: &str = "STOP";

/// Role the provider uses for its own turns
const MODEL_ROLE: &str = "model";

/// Canonical shape a candidate decodes into
pub trait FromCandidate: Sized {
    /// Build from a candidate whose role has already been checked
    fn from_candidate(content: GoogleContent, status: Status, index: Option<u32>) -> Self;
}

impl FromCandidate for Message {
    fn from_candidate(content: GoogleContent, status: Status, index: Option<u32>) -> Self {
        let total = content.parts.len();
        let mut message = Self {
            role: Role::Assistant,
            content: Vec::new(),
            tool_calls: Vec::new(),
            tool_results: Vec::new(),
            index,
            status: Some(status),
        };

        for part in select_parts(content.parts, &[PartKind::Text, PartKind::FunctionCall]) {
            match part {
                GooglePart::Text(text) => message.content.push(ContentPart::text(text)),
                GooglePart::FunctionCall(call) => message.tool_calls.push(decode_tool_call(call)),
                _ => {}
            }
        }

        let kept = message.content.len() + message.tool_calls.len();
        if kept < total {
            tracing::debug!(dropped = total - kept, "ignoring unsupported candidate parts");
        }

        message
    }
}

impl FromCandidate for MessageDelta {
    fn from_candidate(content: GoogleContent, status: Status, index: Option<u32>) -> Self {
        let text = select_parts(&content.parts, &[PartKind::Text])
            .into_iter()
            .filter_map(|part| match part {
                GooglePart::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect();

        Self {
            role: Role::Assistant,
            content: text,
            index,
            status,
        }
    }
}

fn decode_tool_call(call: GoogleFunctionCall) -> ToolCall {
    let call_id = call
        .id
        .unwrap_or_else(|| format!("call_{}", Uuid::new_v4().simple()));

    ToolCall {
        call_id,
        name: call.name,
        arguments: ToolArguments::Native(call.args),
    }
}

/// Decode a raw response body
///
/// A body that is not JSON yields a single [`DecodeError::InvalidJson`].
pub fn decode_response<T: FromCandidate>(body: &[u8]) -> Vec<Result<T, DecodeError>> {
    match serde_json::from_slice::<Value>(body) {
        Ok(value) => decode_value(value),
        Err(e) => vec![Err(DecodeError::InvalidJson(e.to_string()))],
    }
}

/// Decode an already parsed response body
///
/// Returns one result per candidate, in candidate order, or a single error
/// when the body is a provider error or has no recognizable shape.
pub fn decode_value<T: FromCandidate>(value: Value) -> Vec<Result<T, DecodeError>> {
    if let Ok(GoogleErrorResponse { error }) = GoogleErrorResponse::deserialize(&value) {
        tracing::warn!(
            code = ?error.code,
            status = ?error.status,
            message = %error.message,
            "provider returned error"
        );
        return vec![Err(DecodeError::Provider(error.message))];
    }

    let Value::Object(mut body) = value else {
        return vec![Err(DecodeError::UnexpectedResponse)];
    };

    match body.remove("candidates") {
        Some(Value::Array(candidates)) => {
            tracing::debug!(candidates = candidates.len(), "decoding response");
            candidates.into_iter().map(decode_candidate::<T>).collect()
        }
        _ => vec![Err(DecodeError::UnexpectedResponse)],
    }
}

/// Decode a single candidate object
///
/// # Errors
///
/// Returns [`DecodeError::Validation`] when the content role is not the
/// model's, and [`DecodeError::MalformedCandidate`] when the object cannot be
/// read as a candidate.
pub fn decode_candidate<T: FromCandidate>(candidate: Value) -> Result<T, DecodeError> {
    if candidate.pointer("/content/role").and_then(Value::as_str) != Some(MODEL_ROLE) {
        return Err(DecodeError::Validation {
            field: "role",
            reason: "is invalid",
        });
    }

    let candidate: GoogleCandidate =
        serde_json::from_value(candidate).map_err(|e| DecodeError::MalformedCandidate(e.to_string()))?;

    let status = if candidate.finish_reason.as_deref() == Some(FINISH_STOP) {
        Status::Complete
    } else {
        Status::Incomplete
    };

    let content = candidate
        .content
        .ok_or_else(|| DecodeError::MalformedCandidate("missing content".to_owned()))?;

    Ok(T::from_candidate(content, status, candidate.index))
}
