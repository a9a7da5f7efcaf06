//! Outbound: canonical conversation -> Google wire request

use gemwire_config::GenerationConfig;
use serde_json::{Map, Value, json};

use super::select::{PartKind, select_parts};
use crate::protocol::google::{
    GoogleContent, GoogleFunctionCall, GoogleFunctionDeclaration, GoogleFunctionResponse, GoogleGenerationConfig,
    GooglePart, GoogleRequest, GoogleTool,
};
use crate::types::{Message, Role, ToolCall, ToolDeclaration, ToolResult};

/// Build a `generateContent` request
///
/// System messages expand into a user turn followed by an empty model turn,
/// since the API has no system role in `contents`. Every other message maps to
/// exactly one content entry.
pub fn encode_request(config: &GenerationConfig, messages: &[Message], tools: &[ToolDeclaration]) -> GoogleRequest {
    let contents = messages.iter().flat_map(encode_message).collect();

    let generation_config = (!config.is_empty()).then(|| GoogleGenerationConfig {
        temperature: config.temperature,
        top_p: config.top_p,
        top_k: config.top_k,
        max_output_tokens: config.max_output_tokens,
        stop_sequences: config.stop_sequences.clone(),
        candidate_count: config.candidate_count,
    });

    let tools = (!tools.is_empty()).then(|| {
        vec![GoogleTool {
            function_declarations: tools.iter().map(encode_declaration).collect(),
        }]
    });

    GoogleRequest {
        contents,
        generation_config,
        tools,
    }
}

/// Convert one canonical message into its wire content entries
pub fn encode_message(msg: &Message) -> Vec<GoogleContent> {
    match msg.role {
        Role::System => vec![
            GoogleContent::new("user", vec![GooglePart::Text(msg.text())]),
            GoogleContent::new("model", vec![GooglePart::Text(String::new())]),
        ],
        Role::User => vec![GoogleContent::new("user", text_parts(msg))],
        Role::Assistant if msg.tool_calls.is_empty() => vec![GoogleContent::new("model", text_parts(msg))],
        Role::Assistant => {
            if !msg.content.is_empty() {
                tracing::debug!(
                    tool_calls = msg.tool_calls.len(),
                    "assistant content dropped in favour of tool calls"
                );
            }
            let parts = msg.tool_calls.iter().map(encode_tool_call).collect();
            vec![GoogleContent::new("model", non_empty(parts))]
        }
        Role::ToolResult => {
            let parts = msg.tool_results.iter().map(encode_tool_result).collect();
            vec![GoogleContent::new("function", non_empty(parts))]
        }
    }
}

fn text_parts(msg: &Message) -> Vec<GooglePart> {
    let parts = select_parts(&msg.content, &[PartKind::Text])
        .into_iter()
        .filter_map(|part| part.as_text())
        .map(|text| GooglePart::Text(text.to_owned()))
        .collect();
    non_empty(parts)
}

/// The API rejects content entries without parts
fn non_empty(mut parts: Vec<GooglePart>) -> Vec<GooglePart> {
    if parts.is_empty() {
        parts.push(GooglePart::Text(String::new()));
    }
    parts
}

fn encode_tool_call(call: &ToolCall) -> GooglePart {
    let args = call.arguments.to_value().unwrap_or_else(|e| {
        tracing::warn!(
            call_id = %call.call_id,
            name = %call.name,
            error = %e,
            "tool call arguments are not valid JSON, sending empty object"
        );
        json!({})
    });

    GooglePart::FunctionCall(GoogleFunctionCall {
        id: None,
        name: call.name.clone(),
        args,
    })
}

fn encode_tool_result(result: &ToolResult) -> GooglePart {
    let response = serde_json::from_str(&result.content).unwrap_or_else(|e| {
        tracing::warn!(
            tool_call_id = %result.tool_call_id,
            name = %result.name,
            error = %e,
            "tool result is not valid JSON, wrapping raw text"
        );
        json!({"result": result.content})
    });

    GooglePart::FunctionResponse(GoogleFunctionResponse {
        name: result.name.clone(),
        response,
    })
}

fn encode_declaration(tool: &ToolDeclaration) -> GoogleFunctionDeclaration {
    GoogleFunctionDeclaration {
        name: tool.name.clone(),
        description: tool.description.clone(),
        parameters: encode_parameters(tool.parameters.as_ref()),
    }
}

/// Schemas that declare no properties still need an object type and an
/// explicit empty `properties` map for the API
fn encode_parameters(parameters: Option<&Value>) -> Value {
    let mut schema = match parameters {
        None | Some(Value::Null) => Map::new(),
        Some(Value::Object(schema)) => schema.clone(),
        Some(other) => return other.clone(),
    };

    let declares_properties = schema
        .get("properties")
        .and_then(Value::as_object)
        .is_some_and(|properties| !properties.is_empty());

    if !declares_properties {
        schema.entry("type").or_insert_with(|| json!("object"));
        schema.insert("properties".to_owned(), json!({}));
    }

    Value::Object(schema)
}
