mod harness;

use std::collections::BTreeMap;

use gemwire_llm::{DecodeError, MessageDelta, Status, decode_response};
use harness::mock_gemini;

/// Merge deltas by candidate index the way a streaming caller would
fn merge(chunks: &[Vec<u8>]) -> BTreeMap<Option<u32>, (String, Status)> {
    let mut merged: BTreeMap<Option<u32>, (String, Status)> = BTreeMap::new();

    for chunk in chunks {
        for delta in decode_response::<MessageDelta>(chunk) {
            let delta = delta.expect("chunk decodes");
            let entry = merged.entry(delta.index).or_insert_with(|| (String::new(), Status::Incomplete));
            entry.0.push_str(&delta.content);
            entry.1 = delta.status;
        }
    }

    merged
}

#[test]
fn chunks_accumulate_per_index() {
    let chunks = [
        mock_gemini::stream_chunk(0, "The quick ", None),
        mock_gemini::stream_chunk(1, "A slow ", None),
        mock_gemini::stream_chunk(0, "brown fox", Some("STOP")),
        mock_gemini::stream_chunk(1, "turtle", Some("MAX_TOKENS")),
    ];

    let merged = merge(&chunks);

    assert_eq!(merged[&Some(0)], ("The quick brown fox".to_owned(), Status::Complete));
    assert_eq!(merged[&Some(1)], ("A slow turtle".to_owned(), Status::Incomplete));
}

#[test]
fn mid_stream_chunks_are_incomplete() {
    let results = decode_response::<MessageDelta>(&mock_gemini::stream_chunk(0, "partial", None));
    assert_eq!(results[0].as_ref().unwrap().status, Status::Incomplete);
}

#[test]
fn error_chunk_in_stream() {
    let results = decode_response::<MessageDelta>(&mock_gemini::error_reply(500, "Internal error", "INTERNAL"));
    assert_eq!(results, vec![Err(DecodeError::Provider("Internal error".to_owned()))]);
}
