//! Configuration types.

use crate::error::ConfigError;
use crate::flows::FlowKind;

/// Environment variable names.
pub mod env_keys {
    pub const FLOW: &str = "INCLUSIVE_JOBS_FLOW";
    pub const GREETING: &str = "INCLUSIVE_JOBS_GREETING";
    pub const REPROMPT: &str = "INCLUSIVE_JOBS_REPROMPT";
    pub const CLOSING: &str = "INCLUSIVE_JOBS_CLOSING";
    pub const LANGUAGE: &str = "INCLUSIVE_JOBS_LANGUAGE";
}

/// Fixed texts the engine speaks around the flow's own prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationConfig {
    /// Spoken once before the first question.
    pub greeting: String,
    /// Spoken whenever an answer fails validation.
    pub reprompt: String,
    /// Spoken when the flow completes.
    pub closing: String,
    /// BCP 47 language tag of the flow texts.
    pub language: String,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            greeting: "Hello! I'm here to help you. Let's start our conversation.".to_string(),
            reprompt: "I didn't understand that. Could you please try again?".to_string(),
            closing: "Thank you! I have all the information I need. Let me process this for you."
                .to_string(),
            language: "en".to_string(),
        }
    }
}

impl ConversationConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset or blank keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let text = |key: &str, default: String| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
        };

        Self {
            greeting: text(env_keys::GREETING, defaults.greeting),
            reprompt: text(env_keys::REPROMPT, defaults.reprompt),
            closing: text(env_keys::CLOSING, defaults.closing),
            language: text(env_keys::LANGUAGE, defaults.language),
        }
    }
}

/// Settings for one run of the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub flow: FlowKind,
    pub conversation: ConversationConfig,
}

impl RunConfig {
    /// Read from the environment. `flow_arg` (the first CLI argument) wins
    /// over `INCLUSIVE_JOBS_FLOW`; with neither, the disability assessment runs.
    pub fn from_env(flow_arg: Option<String>) -> Result<Self, ConfigError> {
        Self::from_lookup(flow_arg, |key| std::env::var(key).ok())
    }

    pub fn from_lookup(
        flow_arg: Option<String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let flow = match flow_arg.or_else(|| lookup(env_keys::FLOW)) {
            Some(name) => name.parse()?,
            None => FlowKind::default(),
        };
        Ok(Self {
            flow,
            conversation: ConversationConfig::from_lookup(lookup),
        })
    }
}
