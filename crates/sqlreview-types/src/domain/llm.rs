use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::LlmConfigId;
use crate::Timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    Openai,
    Deepseek,
    Qwen,
    Ollama,
    Claude,
}

impl LlmProvider {
    pub const ALL: [LlmProvider; 5] = [
        LlmProvider::Openai,
        LlmProvider::Deepseek,
        LlmProvider::Qwen,
        LlmProvider::Ollama,
        LlmProvider::Claude,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LlmProvider::Openai => "openai",
            LlmProvider::Deepseek => "deepseek",
            LlmProvider::Qwen => "qwen",
            LlmProvider::Ollama => "ollama",
            LlmProvider::Claude => "claude",
        }
    }
}

impl fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LlmProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        LlmProvider::ALL
            .into_iter()
            .find(|p| p.as_str() == lowered)
            .ok_or_else(|| {
                format!(
                    "unknown provider '{}' (expected one of: openai, deepseek, qwen, ollama, claude)",
                    s
                )
            })
    }
}

/// AI model configuration as returned by the service (no API key).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmConfig {
    pub id: LlmConfigId,
    pub name: String,
    pub provider: LlmProvider,
    pub model_name: String,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub max_tokens: Option<u32>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

impl LlmConfig {
    pub fn label(&self) -> String {
        format!("{} ({}/{})", self.name, self.provider, self.model_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LlmConfigForm {
    pub name: String,
    pub provider: Option<LlmProvider>,
    pub model_name: String,
    /// Write-only, same rules as the connection password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    pub description: Option<String>,
}

impl LlmConfigForm {
    pub fn from_record(record: &LlmConfig) -> Self {
        Self {
            name: record.name.clone(),
            provider: Some(record.provider),
            model_name: record.model_name.clone(),
            api_key: None,
            base_url: record.base_url.clone(),
            temperature: record.temperature,
            max_tokens: record.max_tokens,
            description: record.description.clone(),
        }
    }

    pub fn without_secret(&self) -> Self {
        Self {
            api_key: None,
            ..self.clone()
        }
    }
}

/// Pick the config the server flags as default; the client never guesses one.
pub fn default_config(configs: &[LlmConfig]) -> Option<&LlmConfig> {
    configs.iter().find(|c| c.is_default)
}
