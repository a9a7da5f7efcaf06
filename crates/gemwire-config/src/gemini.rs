use serde::Deserialize;
use url::Url;

/// Default Generative Language API host
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Default API version path segment
pub const DEFAULT_API_VERSION: &str = "v1beta";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "gemini-pro";

/// Gemini provider settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiConfig {
    /// Model identifier (e.g. "gemini-1.5-pro")
    #[serde(default = "default_model")]
    pub model: String,
    /// API host override
    #[serde(default)]
    pub endpoint: Option<Url>,
    /// API version override (e.g. "v1")
    #[serde(default)]
    pub api_version: Option<String>,
    /// Sampling parameters copied into `generationConfig`
    #[serde(default)]
    pub generation: GenerationConfig,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            endpoint: None,
            api_version: None,
            generation: GenerationConfig::default(),
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_owned()
}

/// Generation parameters
///
/// Every field is optional and forwarded without transformation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationConfig {
    /// Sampling temperature
    #[serde(default)]
    pub temperature: Option<f64>,
    /// Nucleus sampling threshold
    #[serde(default)]
    pub top_p: Option<f64>,
    /// Top-k sampling
    #[serde(default)]
    pub top_k: Option<u32>,
    /// Maximum output tokens
    #[serde(default)]
    pub max_output_tokens: Option<u32>,
    /// Stop sequences
    #[serde(default)]
    pub stop_sequences: Option<Vec<String>>,
    /// Number of candidates to generate
    #[serde(default)]
    pub candidate_count: Option<u32>,
}

impl GenerationConfig {
    /// Whether no parameter is set
    pub const fn is_empty(&self) -> bool {
        self.temperature.is_none()
            && self.top_p.is_none()
            && self.top_k.is_none()
            && self.max_output_tokens.is_none()
            && self.stop_sequences.is_none()
            && self.candidate_count.is_none()
    }
}

impl GeminiConfig {
    /// API version in effect
    pub fn api_version(&self) -> &str {
        self.api_version.as_deref().unwrap_or(DEFAULT_API_VERSION)
    }

    /// `generateContent` URL for the configured model
    pub fn generate_content_url(&self) -> String {
        format!("{}:generateContent", self.model_url())
    }

    /// `streamGenerateContent` URL for the configured model, SSE framing
    pub fn stream_generate_content_url(&self) -> String {
        format!("{}:streamGenerateContent?alt=sse", self.model_url())
    }

    fn model_url(&self) -> String {
        let base = self
            .endpoint
            .as_ref()
            .map_or(DEFAULT_ENDPOINT, Url::as_str)
            .trim_end_matches('/');
        let version = self.api_version().trim_matches('/');
        format!("{base}/{version}/models/{}", self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve_public_endpoint() {
        let config = GeminiConfig::default();
        assert_eq!(
            config.generate_content_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent"
        );
    }

    #[test]
    fn overrides_are_used_verbatim() {
        let config = GeminiConfig {
            model: "gemini-1.5-flash".to_owned(),
            endpoint: Some(Url::parse("http://localhost:9000/proxy/").unwrap()),
            api_version: Some("v1".to_owned()),
            generation: GenerationConfig::default(),
        };
        assert_eq!(
            config.stream_generate_content_url(),
            "http://localhost:9000/proxy/v1/models/gemini-1.5-flash:streamGenerateContent?alt=sse"
        );
    }

    #[test]
    fn empty_generation_config() {
        assert!(GenerationConfig::default().is_empty());

        let config = GenerationConfig {
            top_k: Some(40),
            ..GenerationConfig::default()
        };
        assert!(!config.is_empty());
    }
}
