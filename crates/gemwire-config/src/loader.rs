use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let config = Self::from_toml(&raw)?;
        tracing::debug!(path = %path.display(), model = %config.gemini.model, "loaded configuration");

        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing, or validation fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let expanded = crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if an identifier is blank or a count is zero
    pub fn validate(&self) -> anyhow::Result<()> {
        let gemini = &self.gemini;

        if gemini.model.trim().is_empty() {
            anyhow::bail!("gemini.model must not be empty");
        }

        if gemini.api_version.as_deref().is_some_and(|v| v.trim().is_empty()) {
            anyhow::bail!("gemini.api_version must not be empty when set");
        }

        if gemini.generation.top_k == Some(0) {
            anyhow::bail!("gemini.generation.top_k must be positive");
        }

        if gemini.generation.candidate_count == Some(0) {
            anyhow::bail!("gemini.generation.candidate_count must be positive");
        }

        Ok(())
    }
}
