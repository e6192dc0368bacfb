//! Anthropic extended-thinking options (token-budget style).

use serde_json::{Value, json};

use crate::classify;
use crate::env::{EnvSnapshot, keys};
use crate::error::ResolveError;

/// Documented inclusive bounds for the thinking token budget.
pub const THINKING_BUDGET_MIN: i64 = 1024;
pub const THINKING_BUDGET_MAX: i64 = 32000;

/// Builds `{"thinking": {"type": "enabled", "budgetTokens": n}}` when a
/// budget is configured and the model supports extended thinking. The budget
/// is validated whenever set, even for non-capable models.
pub(crate) fn build(model_id: &str, env: &EnvSnapshot) -> Result<Option<Value>, ResolveError> {
    let budget = super::int_setting(
        env,
        keys::ANTHROPIC_THINKING_BUDGET,
        THINKING_BUDGET_MIN..=THINKING_BUDGET_MAX,
    )?;

    match budget {
        Some(tokens) if classify::anthropic_thinking_model(model_id) => Ok(Some(json!({
            "thinking": {
                "type": "enabled",
                "budgetTokens": tokens,
            }
        }))),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> EnvSnapshot {
        EnvSnapshot::from_iter(pairs.iter().copied())
    }

    #[test]
    fn capable_model_with_budget_gets_thinking_object() {
        let snapshot = env(&[(keys::ANTHROPIC_THINKING_BUDGET, "4096")]);
        let options = build("claude-sonnet-4-20250514", &snapshot).unwrap().unwrap();
        assert_eq!(options["thinking"]["type"], "enabled");
        assert_eq!(options["thinking"]["budgetTokens"], 4096);
    }

    #[test]
    fn non_capable_model_builds_nothing() {
        let snapshot = env(&[(keys::ANTHROPIC_THINKING_BUDGET, "4096")]);
        assert!(build("claude-3-5-haiku-20241022", &snapshot).unwrap().is_none());
    }

    #[test]
    fn no_budget_builds_nothing() {
        assert!(
            build("claude-sonnet-4-20250514", &EnvSnapshot::default())
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn out_of_range_budget_is_a_hard_error() {
        let snapshot = env(&[(keys::ANTHROPIC_THINKING_BUDGET, "64000")]);
        let err = build("claude-sonnet-4-20250514", &snapshot).unwrap_err();
        assert!(err.to_string().contains("1024..=32000"));
    }
}
