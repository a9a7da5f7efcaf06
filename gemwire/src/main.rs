mod args;

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use args::{Args, Command};
use clap::Parser;
use gemwire_config::Config;
use gemwire_llm::{DecodeError, Message, MessageDelta, ToolDeclaration, decode_response, encode_request};
use serde::Serialize;
use serde_json::{Value, json};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(&args.log_filter);

    let config = load_config(&args.config)?;

    let output = match args.command {
        Command::Encode { messages, tools } => {
            let messages: Vec<Message> = read_json(&messages)?;
            let tools: Vec<ToolDeclaration> = match tools {
                Some(path) => read_json(&path)?,
                None => Vec::new(),
            };

            tracing::info!(
                model = %config.gemini.model,
                messages = messages.len(),
                tools = tools.len(),
                "encoding conversation"
            );

            serde_json::to_value(encode_request(&config.gemini.generation, &messages, &tools))?
        }
        Command::Decode { input, delta } => {
            let body = read_input(&input)?;
            if delta {
                report(decode_response::<MessageDelta>(&body))?
            } else {
                report(decode_response::<Message>(&body))?
            }
        }
        Command::Endpoint { stream } => {
            let url = if stream {
                config.gemini.stream_generate_content_url()
            } else {
                config.gemini.generate_content_url()
            };
            Value::String(url)
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Install the stderr log subscriber
fn init_logging(filter: &str) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}

/// Load the config file, falling back to defaults when it does not exist
fn load_config(path: &Path) -> anyhow::Result<Config> {
    if path.exists() {
        return Config::load(path);
    }

    tracing::debug!(path = %path.display(), "config file not found, using defaults");
    Ok(Config::default())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_slice(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

fn read_input(path: &Path) -> anyhow::Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut body = Vec::new();
        std::io::stdin().read_to_end(&mut body).context("failed to read stdin")?;
        return Ok(body);
    }
    std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}

/// One output entry per decoded candidate
fn report<T: Serialize>(results: Vec<Result<T, DecodeError>>) -> anyhow::Result<Value> {
    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        tracing::warn!(failed, total = results.len(), "some results failed to decode");
    }

    let entries = results
        .into_iter()
        .map(|result| match result {
            Ok(decoded) => serde_json::to_value(decoded).map(|v| json!({"ok": v})),
            Err(e) => Ok(json!({"error": e.to_string()})),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Value::Array(entries))
}
