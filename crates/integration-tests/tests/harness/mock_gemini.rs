//! Canned Gemini response bodies

use serde_json::{Value, json};

/// Successful reply with a single text candidate
pub fn text_reply(text: &str) -> Vec<u8> {
    body(&json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP",
            "index": 0
        }],
        "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 4, "totalTokenCount": 16}
    }))
}

/// Reply in which the model asks for one function call
pub fn function_call_reply(name: &str, args: &Value) -> Vec<u8> {
    body(&json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"functionCall": {"name": name, "args": args}}]},
            "finishReason": "STOP",
            "index": 0
        }]
    }))
}

/// One streamed chunk for candidate `index`
pub fn stream_chunk(index: u32, text: &str, finish_reason: Option<&str>) -> Vec<u8> {
    let mut candidate = json!({
        "content": {"role": "model", "parts": [{"text": text}]},
        "index": index
    });
    if let Some(reason) = finish_reason {
        candidate["finishReason"] = json!(reason);
    }
    body(&json!({"candidates": [candidate]}))
}

/// Provider error body
pub fn error_reply(code: u32, message: &str, status: &str) -> Vec<u8> {
    body(&json!({"error": {"code": code, "message": message, "status": status}}))
}

fn body(value: &Value) -> Vec<u8> {
    serde_json::to_vec(value).expect("canned body serializes")
}
