//! Immutable environment configuration snapshot.
//!
//! The resolver never reads ambient process state from inside component
//! logic. Callers capture the environment once with [`EnvSnapshot::from_env`]
//! and pass it in; tests build snapshots explicitly with
//! [`EnvSnapshot::from_iter`] and stay parallel-safe.
//!
//! Empty values are treated as absent everywhere: an exported-but-blank
//! credential variable neither authenticates a provider nor triggers
//! auto-detection.

use std::collections::HashMap;

/// Well-known setting names consulted by the resolver.
///
/// Per-provider credential and base-URL variables live in the provider
/// catalog next to the provider they belong to; this module holds the
/// cross-provider and family-specific settings.
pub mod keys {
    /// Explicit provider selection (trusted, server-side).
    pub const PROVIDER: &str = "LLM_PROVIDER";
    /// Default model identifier when no per-request model is supplied.
    pub const MODEL: &str = "LLM_MODEL";

    /// Azure endpoint construction: full base URL, or the resource name the
    /// endpoint is derived from. One of the two is required.
    pub const AZURE_OPENAI_BASE_URL: &str = "AZURE_OPENAI_BASE_URL";
    pub const AZURE_OPENAI_RESOURCE_NAME: &str = "AZURE_OPENAI_RESOURCE_NAME";

    /// OpenAI reasoning family: effort level and summary verbosity.
    pub const OPENAI_REASONING_EFFORT: &str = "OPENAI_REASONING_EFFORT";
    pub const OPENAI_REASONING_SUMMARY: &str = "OPENAI_REASONING_SUMMARY";

    /// Anthropic extended thinking token budget.
    pub const ANTHROPIC_THINKING_BUDGET: &str = "ANTHROPIC_THINKING_BUDGET";

    /// Google thinking configuration (budget and level are mutually
    /// exclusive by model generation) and sampling passthrough.
    pub const GOOGLE_THINKING_BUDGET: &str = "GOOGLE_THINKING_BUDGET";
    pub const GOOGLE_THINKING_LEVEL: &str = "GOOGLE_THINKING_LEVEL";
    pub const GOOGLE_CANDIDATE_COUNT: &str = "GOOGLE_CANDIDATE_COUNT";
    pub const GOOGLE_TOP_K: &str = "GOOGLE_TOP_K";
    pub const GOOGLE_TOP_P: &str = "GOOGLE_TOP_P";

    /// Bedrock reasoning settings; which one applies depends on the hosted
    /// model sub-family, not on Bedrock itself.
    pub const BEDROCK_REASONING_BUDGET: &str = "BEDROCK_REASONING_BUDGET";
    pub const BEDROCK_REASONING_EFFORT: &str = "BEDROCK_REASONING_EFFORT";

    /// Explicit AWS credentials (fallback; the ambient chain is preferred).
    pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
    pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
    pub const AWS_SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";
    pub const AWS_REGION: &str = "AWS_REGION";
}

/// A read-only snapshot of environment configuration.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment. Blank values are dropped.
    pub fn from_env() -> Self {
        Self::from_iter(std::env::vars())
    }

    /// Build a snapshot from explicit pairs (test and embedding entry point).
    pub fn from_iter<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let vars = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(_, v)| !v.trim().is_empty())
            .collect();
        Self { vars }
    }

    /// Look up a setting. Returns `None` for unset or blank values.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Whether a setting is present (and non-empty).
    pub fn is_set(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_absent() {
        let env = EnvSnapshot::from_iter([
            ("OPENAI_API_KEY", "sk-test"),
            ("ANTHROPIC_API_KEY", ""),
            ("GEMINI_API_KEY", "   "),
        ]);
        assert_eq!(env.get("OPENAI_API_KEY"), Some("sk-test"));
        assert!(!env.is_set("ANTHROPIC_API_KEY"));
        assert!(!env.is_set("GEMINI_API_KEY"));
    }

    #[test]
    fn missing_keys_are_none() {
        let env = EnvSnapshot::default();
        assert_eq!(env.get(keys::PROVIDER), None);
        assert!(!env.is_set(keys::MODEL));
    }
}
