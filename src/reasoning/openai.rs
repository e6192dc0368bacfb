//! OpenAI reasoning options (effort level + summary verbosity).
//!
//! Reasoning-capable models (o-series, gpt-5 naming) only surface reasoning
//! text when a summary mode is requested, so for those models the summary
//! defaults to the most verbose level even when unset. Other models get
//! options only when a setting is explicitly present.

use serde::Serialize;
use serde_json::Value;

use crate::classify;
use crate::env::{EnvSnapshot, keys};
use crate::error::ResolveError;

/// Closed set of reasoning effort levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasoningEffort {
    Minimal,
    Low,
    Medium,
    High,
}

impl ReasoningEffort {
    fn parse(raw: &str) -> Result<Self, ResolveError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "minimal" => Ok(Self::Minimal),
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ResolveError::ConfigurationError(format!(
                "{} must be one of minimal, low, medium, high (got '{raw}')",
                keys::OPENAI_REASONING_EFFORT
            ))),
        }
    }
}

/// Closed set of reasoning summary verbosity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasoningSummary {
    Auto,
    Detailed,
}

impl ReasoningSummary {
    fn parse(raw: &str) -> Result<Self, ResolveError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "detailed" => Ok(Self::Detailed),
            _ => Err(ResolveError::ConfigurationError(format!(
                "{} must be one of auto, detailed (got '{raw}')",
                keys::OPENAI_REASONING_SUMMARY
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct OpenAiReasoningOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    reasoning_effort: Option<ReasoningEffort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reasoning_summary: Option<ReasoningSummary>,
}

pub(crate) fn build(model_id: &str, env: &EnvSnapshot) -> Result<Option<Value>, ResolveError> {
    let mut options = OpenAiReasoningOptions {
        reasoning_effort: env
            .get(keys::OPENAI_REASONING_EFFORT)
            .map(ReasoningEffort::parse)
            .transpose()?,
        reasoning_summary: env
            .get(keys::OPENAI_REASONING_SUMMARY)
            .map(ReasoningSummary::parse)
            .transpose()?,
    };

    if classify::openai_reasoning_model(model_id) {
        options.reasoning_summary = options.reasoning_summary.or(Some(ReasoningSummary::Detailed));
    } else if options.reasoning_effort.is_none() && options.reasoning_summary.is_none() {
        return Ok(None);
    }

    let value = serde_json::to_value(&options).map_err(|e| {
        ResolveError::ConfigurationError(format!("failed to encode reasoning options: {e}"))
    })?;
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> EnvSnapshot {
        EnvSnapshot::from_iter(pairs.iter().copied())
    }

    #[test]
    fn reasoning_model_defaults_summary_to_detailed() {
        let options = build("o3", &EnvSnapshot::default()).unwrap().unwrap();
        assert_eq!(options["reasoningSummary"], "detailed");
        assert!(options.get("reasoningEffort").is_none());

        let options = build("gpt-5-codex", &EnvSnapshot::default()).unwrap().unwrap();
        assert_eq!(options["reasoningSummary"], "detailed");
    }

    #[test]
    fn explicit_summary_is_not_overridden() {
        let snapshot = env(&[(keys::OPENAI_REASONING_SUMMARY, "auto")]);
        let options = build("o4-mini", &snapshot).unwrap().unwrap();
        assert_eq!(options["reasoningSummary"], "auto");
    }

    #[test]
    fn non_reasoning_model_without_settings_builds_nothing() {
        assert!(build("gpt-4o", &EnvSnapshot::default()).unwrap().is_none());
    }

    #[test]
    fn non_reasoning_model_with_explicit_settings_attaches_them() {
        let snapshot = env(&[(keys::OPENAI_REASONING_EFFORT, "low")]);
        let options = build("gpt-4o", &snapshot).unwrap().unwrap();
        assert_eq!(options["reasoningEffort"], "low");
        assert!(options.get("reasoningSummary").is_none());
    }

    #[test]
    fn invalid_effort_is_a_configuration_error() {
        let snapshot = env(&[(keys::OPENAI_REASONING_EFFORT, "maximum")]);
        let err = build("o3", &snapshot).unwrap_err();
        assert!(matches!(err, ResolveError::ConfigurationError(_)));
        assert!(err.to_string().contains("minimal, low, medium, high"));
    }

    #[test]
    fn invalid_summary_is_a_configuration_error() {
        let snapshot = env(&[(keys::OPENAI_REASONING_SUMMARY, "verbose")]);
        assert!(build("o3", &snapshot).is_err());
    }
}
