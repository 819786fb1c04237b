use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::content::DEFAULT_PROMPTS;
use crate::flow::Activity;
use crate::questions::PromptSet;

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("questions.prompts must contain at least one prompt")]
    EmptyPrompts,
    #[error("questions.prompts[{index}] is blank")]
    BlankPrompt { index: usize },
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub flow: FlowConfig,
    pub questions: QuestionsConfig,
    pub logging: LoggingConfig,
}

/// Presentation delays before the automatic transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    pub preparing_delay_ms: u64,
    pub analyzing_delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionsConfig {
    pub prompts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset. `None` picks by build profile.
    pub level: Option<String>,
    /// Also write logs to the platform log directory.
    pub file: bool,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            preparing_delay_ms: 2_500,
            analyzing_delay_ms: 4_000,
        }
    }
}

impl Default for QuestionsConfig {
    fn default() -> Self {
        Self {
            prompts: DEFAULT_PROMPTS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl FlowConfig {
    /// Delay that runs before the intent scheduled for `activity`.
    pub fn delay_for(&self, activity: Activity) -> Duration {
        match activity {
            Activity::Preparing => Duration::from_millis(self.preparing_delay_ms),
            Activity::Analyzing => Duration::from_millis(self.analyzing_delay_ms),
        }
    }
}

impl AppConfig {
    /// Parses and validates a TOML document. Missing keys take defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.questions.prompts.is_empty() {
            return Err(ConfigError::EmptyPrompts);
        }
        if let Some(index) = self
            .questions
            .prompts
            .iter()
            .position(|p| p.trim().is_empty())
        {
            return Err(ConfigError::BlankPrompt { index });
        }
        Ok(())
    }

    pub fn prompt_set(&self) -> PromptSet {
        PromptSet::new(self.questions.prompts.clone())
    }
}
