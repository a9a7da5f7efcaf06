//! Provider-neutral conversation types
//!
//! The encoder consumes these and the decoder produces them. Nothing in here
//! knows about the Gemini wire format.

pub mod message;
pub mod tool;

pub use message::{ContentPart, Message, MessageDelta, Role, Status};
pub use tool::{ToolArguments, ToolCall, ToolDeclaration, ToolResult};
