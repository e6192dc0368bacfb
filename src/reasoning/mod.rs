//! Provider-specific reasoning option construction.
//!
//! Derives extended "thinking"/reasoning request options from environment
//! configuration and the target model identifier, keyed by provider family.
//! Providers without a documented extended-options surface produce nothing.
//!
//! Numeric and enum settings fail fast: a malformed or out-of-range value is
//! a `ConfigurationError`, never silently clamped or defaulted.

use std::ops::RangeInclusive;

use serde_json::{Value, json};

use crate::catalog::ProviderId;
use crate::env::EnvSnapshot;
use crate::error::ResolveError;

pub mod anthropic;
pub mod bedrock;
pub mod google;
pub mod openai;

/// Build the `provider_options` object for the selected provider, or `None`
/// when no relevant setting applies. The result is keyed by provider family
/// (`"openai"`, `"anthropic"`, `"google"`, `"bedrock"`) and passed through
/// verbatim to the transport layer.
pub fn build_provider_options(
    provider: ProviderId,
    model_id: &str,
    env: &EnvSnapshot,
) -> Result<Option<Value>, ResolveError> {
    let family = match provider {
        // Azure hosts OpenAI models; the options surface is OpenAI's.
        ProviderId::OpenAi | ProviderId::AzureOpenAi => {
            openai::build(model_id, env)?.map(|o| ("openai", o))
        }
        ProviderId::Anthropic => anthropic::build(model_id, env)?.map(|o| ("anthropic", o)),
        ProviderId::Google => google::build(model_id, env)?.map(|o| ("google", o)),
        ProviderId::Bedrock => bedrock::build(model_id, env)?.map(|o| ("bedrock", o)),
        ProviderId::OpenRouter
        | ProviderId::DeepSeek
        | ProviderId::Moonshot
        | ProviderId::Zhipu
        | ProviderId::SiliconFlow
        | ProviderId::Ollama => None,
    };

    let options = family.map(|(key, obj)| {
        tracing::trace!(provider = %provider, family = key, "built provider options");
        json!({ key: obj })
    });
    Ok(options)
}

/// Parse an integer setting bounded to an inclusive range. Absent settings
/// are `Ok(None)`; malformed or out-of-range values are hard errors.
pub(crate) fn int_setting(
    env: &EnvSnapshot,
    key: &str,
    range: RangeInclusive<i64>,
) -> Result<Option<i64>, ResolveError> {
    let Some(raw) = env.get(key) else {
        return Ok(None);
    };
    let value: i64 = raw.trim().parse().map_err(|_| {
        ResolveError::ConfigurationError(format!("{key} must be an integer (got '{raw}')"))
    })?;
    if !range.contains(&value) {
        return Err(ResolveError::ConfigurationError(format!(
            "{key} must be within {}..={} (got {value})",
            range.start(),
            range.end()
        )));
    }
    Ok(Some(value))
}

/// Parse a float setting bounded to `[min, max]`.
pub(crate) fn float_setting(
    env: &EnvSnapshot,
    key: &str,
    min: f64,
    max: f64,
) -> Result<Option<f64>, ResolveError> {
    let Some(raw) = env.get(key) else {
        return Ok(None);
    };
    let value: f64 = raw.trim().parse().map_err(|_| {
        ResolveError::ConfigurationError(format!("{key} must be a number (got '{raw}')"))
    })?;
    if !(min..=max).contains(&value) {
        return Err(ResolveError::ConfigurationError(format!(
            "{key} must be within {min}..={max} (got {value})"
        )));
    }
    Ok(Some(value))
}

/// Structural merge of two options objects. Nested objects merge
/// recursively; scalar keys from `extra` replace those in `base`. Used where
/// fixed feature flags and environment-derived reasoning fields must both
/// survive in one object.
pub(crate) fn deep_merge(base: &mut Value, extra: Value) {
    match (base, extra) {
        (Value::Object(base_map), Value::Object(extra_map)) => {
            for (key, value) in extra_map {
                match base_map.get_mut(&key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::keys;

    fn env(pairs: &[(&str, &str)]) -> EnvSnapshot {
        EnvSnapshot::from_iter(pairs.iter().copied())
    }

    #[test]
    fn int_setting_parses_and_bounds() {
        let snapshot = env(&[(keys::ANTHROPIC_THINKING_BUDGET, "2048")]);
        assert_eq!(
            int_setting(&snapshot, keys::ANTHROPIC_THINKING_BUDGET, 1024..=32000).unwrap(),
            Some(2048)
        );

        let snapshot = env(&[(keys::ANTHROPIC_THINKING_BUDGET, "999")]);
        let err = int_setting(&snapshot, keys::ANTHROPIC_THINKING_BUDGET, 1024..=32000)
            .unwrap_err()
            .to_string();
        assert!(err.contains("1024..=32000"));

        let snapshot = env(&[(keys::ANTHROPIC_THINKING_BUDGET, "lots")]);
        assert!(int_setting(&snapshot, keys::ANTHROPIC_THINKING_BUDGET, 1024..=32000).is_err());
    }

    #[test]
    fn float_setting_never_clamps() {
        let snapshot = env(&[(keys::GOOGLE_TOP_P, "1.5")]);
        let err = float_setting(&snapshot, keys::GOOGLE_TOP_P, 0.0, 1.0)
            .unwrap_err()
            .to_string();
        assert!(err.contains("0..=1"));

        let snapshot = env(&[(keys::GOOGLE_TOP_P, "0.9")]);
        assert_eq!(
            float_setting(&snapshot, keys::GOOGLE_TOP_P, 0.0, 1.0).unwrap(),
            Some(0.9)
        );
    }

    #[test]
    fn absent_settings_are_none() {
        let snapshot = EnvSnapshot::default();
        assert_eq!(int_setting(&snapshot, "MISSING", 0..=10).unwrap(), None);
        assert_eq!(float_setting(&snapshot, "MISSING", 0.0, 1.0).unwrap(), None);
    }

    #[test]
    fn deep_merge_preserves_both_sides() {
        let mut base = json!({
            "anthropicBeta": ["fine-grained-tool-streaming-2025-05-14"],
            "nested": {"a": 1}
        });
        deep_merge(
            &mut base,
            json!({"reasoningConfig": {"type": "enabled"}, "nested": {"b": 2}}),
        );
        assert_eq!(
            base["anthropicBeta"],
            json!(["fine-grained-tool-streaming-2025-05-14"])
        );
        assert_eq!(base["reasoningConfig"]["type"], "enabled");
        assert_eq!(base["nested"], json!({"a": 1, "b": 2}));
    }

    #[test]
    fn options_are_keyed_by_family() {
        let snapshot = env(&[(keys::OPENAI_REASONING_EFFORT, "high")]);
        let options = build_provider_options(ProviderId::OpenAi, "o3", &snapshot)
            .unwrap()
            .unwrap();
        assert!(options.get("openai").is_some());

        // Azure routes through the OpenAI family surface.
        let options = build_provider_options(ProviderId::AzureOpenAi, "o3", &snapshot)
            .unwrap()
            .unwrap();
        assert!(options.get("openai").is_some());
    }

    #[test]
    fn providers_without_options_surface_build_nothing() {
        let snapshot = env(&[(keys::OPENAI_REASONING_EFFORT, "high")]);
        for provider in [
            ProviderId::OpenRouter,
            ProviderId::DeepSeek,
            ProviderId::Moonshot,
            ProviderId::Zhipu,
            ProviderId::SiliconFlow,
            ProviderId::Ollama,
        ] {
            assert!(
                build_provider_options(provider, "deepseek-chat", &snapshot)
                    .unwrap()
                    .is_none()
            );
        }
    }
}
