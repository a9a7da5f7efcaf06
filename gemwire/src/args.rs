use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Gemini wire translator
#[derive(Debug, Parser)]
#[command(name = "gemwire", about = "Translate conversations to and from the Gemini wire format")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "gemwire.toml", env = "GEMWIRE_CONFIG")]
    pub config: PathBuf,

    /// Log filter directive
    #[arg(long, global = true, default_value = "info", env = "GEMWIRE_LOG")]
    pub log_filter: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Encode a conversation into a `generateContent` request body
    Encode {
        /// JSON file holding an array of messages
        #[arg(short, long)]
        messages: PathBuf,

        /// JSON file holding an array of tool declarations
        #[arg(short, long)]
        tools: Option<PathBuf>,
    },

    /// Decode a response body into messages or deltas
    Decode {
        /// Response body file, `-` for stdin
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Decode as streaming deltas
        #[arg(long)]
        delta: bool,
    },

    /// Print the endpoint URL for the configured model
    Endpoint {
        /// Use the streaming endpoint
        #[arg(long)]
        stream: bool,
    },
}
