//! Configuration files for integration tests

use std::io::Write;

use gemwire_config::Config;
use tempfile::NamedTempFile;

/// Builder that writes a TOML config to disk and loads it back
pub struct ConfigFile {
    gemini: Vec<String>,
    generation: Vec<String>,
}

impl ConfigFile {
    /// Start from an empty file
    pub fn new() -> Self {
        Self {
            gemini: Vec::new(),
            generation: Vec::new(),
        }
    }

    /// Add a raw `key = value` line to `[gemini]`
    pub fn gemini(mut self, line: &str) -> Self {
        self.gemini.push(line.to_owned());
        self
    }

    /// Add a raw `key = value` line to `[gemini.generation]`
    pub fn generation(mut self, line: &str) -> Self {
        self.generation.push(line.to_owned());
        self
    }

    /// Write the file and load it through `Config::load`
    pub fn load(self) -> anyhow::Result<Config> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "[gemini]")?;
        for line in &self.gemini {
            writeln!(file, "{line}")?;
        }
        writeln!(file, "\n[gemini.generation]")?;
        for line in &self.generation {
            writeln!(file, "{line}")?;
        }
        file.flush()?;

        Config::load(file.path())
    }
}
