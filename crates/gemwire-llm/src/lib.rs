//! Translation between provider-neutral conversations and the Google Gemini
//! `generateContent` wire format
//!
//! Encoding turns canonical messages and a tool catalog into a request body.
//! Decoding turns a response body into canonical messages or streaming
//! deltas, one result per candidate. Everything here is pure: no I/O, no
//! shared state.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod convert;
pub mod error;
pub mod protocol;
pub mod types;

pub use convert::{PartKind, decode_response, decode_value, encode_request, select_parts};
pub use error::DecodeError;
pub use protocol::google::GoogleRequest;
pub use types::{ContentPart, Message, MessageDelta, Role, Status, ToolArguments, ToolCall, ToolDeclaration, ToolResult};
