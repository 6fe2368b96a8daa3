#![warn(missing_docs)]
//! `editor-bridge-lang` - data-driven language registration config for the editor bridge.
//!
//! This crate does not depend on the backend or the session. It describes how the host should
//! register the bridged language: which id owns the diagnostics markers and which characters
//! trigger completion, signature help and on-type formatting.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Language id used when none is configured. Distinct from plain `"rust"` so it does not clash
/// with a host's built-in grammar of that name.
pub const DEFAULT_LANGUAGE_ID: &str = "ra-rust";

/// Errors produced while loading a [`LanguageConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The input was not valid JSON for a config.
    #[error("invalid language config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The language id was empty.
    #[error("language id must not be empty")]
    EmptyLanguageId,
    /// A trigger entry was not exactly one character.
    #[error("{field}: trigger {value:?} must be exactly one character")]
    InvalidTrigger {
        /// The offending config field.
        field: &'static str,
        /// The offending value.
        value: String,
    },
}

/// Registration config for one bridged language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageConfig {
    /// Host language id; also the owner of the diagnostics markers.
    pub language_id: String,
    /// Characters that open the completion widget.
    pub completion_trigger_characters: Vec<String>,
    /// Characters that open signature help.
    pub signature_help_trigger_characters: Vec<String>,
    /// Characters that request on-type formatting edits.
    pub on_type_formatting_trigger_characters: Vec<String>,
    /// Whether reference searches include the declaration when the host does not say.
    pub references_include_declaration: bool,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            language_id: DEFAULT_LANGUAGE_ID.to_string(),
            completion_trigger_characters: strings(&[".", ":", "="]),
            signature_help_trigger_characters: strings(&["(", ","]),
            on_type_formatting_trigger_characters: strings(&[".", "="]),
            references_include_declaration: true,
        }
    }
}

impl LanguageConfig {
    /// Default config with a custom language id.
    pub fn with_language_id(language_id: impl Into<String>) -> Self {
        Self {
            language_id: language_id.into(),
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the host registration relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.language_id.trim().is_empty() {
            return Err(ConfigError::EmptyLanguageId);
        }
        check_triggers(
            "completionTriggerCharacters",
            &self.completion_trigger_characters,
        )?;
        check_triggers(
            "signatureHelpTriggerCharacters",
            &self.signature_help_trigger_characters,
        )?;
        check_triggers(
            "onTypeFormattingTriggerCharacters",
            &self.on_type_formatting_trigger_characters,
        )
    }

    /// Returns `true` if `ch` should request on-type formatting.
    pub fn is_on_type_formatting_trigger(&self, ch: char) -> bool {
        contains_char(&self.on_type_formatting_trigger_characters, ch)
    }

    /// Returns `true` if `ch` should open the completion widget.
    pub fn is_completion_trigger(&self, ch: char) -> bool {
        contains_char(&self.completion_trigger_characters, ch)
    }

    /// Returns `true` if `ch` should open signature help.
    pub fn is_signature_help_trigger(&self, ch: char) -> bool {
        contains_char(&self.signature_help_trigger_characters, ch)
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn contains_char(triggers: &[String], ch: char) -> bool {
    triggers.iter().any(|t| t.chars().eq(std::iter::once(ch)))
}

fn check_triggers(field: &'static str, triggers: &[String]) -> Result<(), ConfigError> {
    match triggers.iter().find(|t| t.chars().count() != 1) {
        Some(bad) => Err(ConfigError::InvalidTrigger {
            field,
            value: bad.clone(),
        }),
        None => Ok(()),
    }
}
