//! Bedrock-hosted model options.
//!
//! The reasoning shape follows the hosted model's family, not Bedrock
//! itself: Claude models take a token budget, gpt-oss models take an effort
//! level. Hosting the Claude family additionally always carries its fixed
//! beta feature flags; the structural merge keeps both the flags and any
//! environment-derived reasoning object.

use serde_json::{Value, json};

use crate::classify::{self, BedrockModelFamily};
use crate::env::{EnvSnapshot, keys};
use crate::error::ResolveError;

/// Beta flags required for fine-grained tool streaming on Claude models.
pub const CLAUDE_BETA_FLAGS: [&str; 1] = ["fine-grained-tool-streaming-2025-05-14"];

/// Budget bounds mirror the direct Anthropic surface.
pub const REASONING_BUDGET_MIN: i64 = 1024;
pub const REASONING_BUDGET_MAX: i64 = 32000;

fn parse_effort(raw: &str) -> Result<&'static str, ResolveError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "low" => Ok("low"),
        "medium" => Ok("medium"),
        "high" => Ok("high"),
        _ => Err(ResolveError::ConfigurationError(format!(
            "{} must be one of low, medium, high (got '{raw}')",
            keys::BEDROCK_REASONING_EFFORT
        ))),
    }
}

pub(crate) fn build(model_id: &str, env: &EnvSnapshot) -> Result<Option<Value>, ResolveError> {
    match classify::bedrock_model_family(model_id) {
        Some(BedrockModelFamily::Claude) => {
            let mut options = json!({ "anthropicBeta": CLAUDE_BETA_FLAGS });
            if let Some(tokens) = super::int_setting(
                env,
                keys::BEDROCK_REASONING_BUDGET,
                REASONING_BUDGET_MIN..=REASONING_BUDGET_MAX,
            )? {
                super::deep_merge(
                    &mut options,
                    json!({
                        "reasoningConfig": {
                            "type": "enabled",
                            "budgetTokens": tokens,
                        }
                    }),
                );
            }
            Ok(Some(options))
        }
        Some(BedrockModelFamily::GptOss) => {
            let effort = env
                .get(keys::BEDROCK_REASONING_EFFORT)
                .map(parse_effort)
                .transpose()?;
            Ok(effort.map(|level| json!({ "reasoningEffort": level })))
        }
        None => Ok(None),
    }
}
