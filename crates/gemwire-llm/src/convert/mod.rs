//! Bidirectional conversion between canonical types and the Gemini wire format
//!
//! `request` encodes conversations, `response` decodes replies, and `select`
//! holds the part filtering both directions share.

pub mod request;
pub mod response;
pub mod select;

pub use request::{encode_message, encode_request};
pub use response::{FromCandidate, decode_candidate, decode_response, decode_value};
pub use select::{PartKind, Tagged, select_parts};
