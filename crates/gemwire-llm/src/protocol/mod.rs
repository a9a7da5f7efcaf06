//! Wire format types for the Gemini API
//!
//! Pure serde structs matching the provider's JSON. They are only used at the
//! boundary and never leak into the canonical types.

pub mod google;
