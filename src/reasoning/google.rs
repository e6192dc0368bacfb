//! Google Gemini options: thinking configuration plus sampling passthrough.
//!
//! The thinking generation of the model decides which of the two mutually
//! exclusive wire fields applies: gemini-2.5 takes an integer
//! `thinkingBudget`, gemini-3 takes an enumerated `thinkingLevel`. Any
//! matching generation always gets `includeThoughts: true`, budget/level or
//! not. Sampling settings (candidate count, top-K, top-P) are an independent
//! concern merged into the same options object.

use serde_json::{Map, Value};

use crate::classify::{self, GoogleThinkingGeneration};
use crate::env::{EnvSnapshot, keys};
use crate::error::ResolveError;

/// Budget bounds; -1 requests dynamic budgeting.
pub const THINKING_BUDGET_MIN: i64 = -1;
pub const THINKING_BUDGET_MAX: i64 = 32768;

pub const CANDIDATE_COUNT_RANGE: std::ops::RangeInclusive<i64> = 1..=8;
pub const TOP_K_RANGE: std::ops::RangeInclusive<i64> = 1..=64;

fn parse_thinking_level(raw: &str) -> Result<&'static str, ResolveError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "low" => Ok("low"),
        "high" => Ok("high"),
        _ => Err(ResolveError::ConfigurationError(format!(
            "{} must be one of low, high (got '{raw}')",
            keys::GOOGLE_THINKING_LEVEL
        ))),
    }
}

pub(crate) fn build(model_id: &str, env: &EnvSnapshot) -> Result<Option<Value>, ResolveError> {
    let budget = super::int_setting(
        env,
        keys::GOOGLE_THINKING_BUDGET,
        THINKING_BUDGET_MIN..=THINKING_BUDGET_MAX,
    )?;
    let level = env
        .get(keys::GOOGLE_THINKING_LEVEL)
        .map(parse_thinking_level)
        .transpose()?;

    let mut options = Map::new();

    match classify::google_thinking_generation(model_id) {
        Some(GoogleThinkingGeneration::Budget) => {
            if level.is_some() {
                return Err(ResolveError::ConfigurationError(format!(
                    "{} does not apply to gemini-2.5 models; use {}",
                    keys::GOOGLE_THINKING_LEVEL,
                    keys::GOOGLE_THINKING_BUDGET
                )));
            }
            let mut thinking = Map::new();
            thinking.insert("includeThoughts".to_string(), Value::from(true));
            if let Some(tokens) = budget {
                thinking.insert("thinkingBudget".to_string(), Value::from(tokens));
            }
            options.insert("thinkingConfig".to_string(), Value::Object(thinking));
        }
        Some(GoogleThinkingGeneration::Level) => {
            if budget.is_some() {
                return Err(ResolveError::ConfigurationError(format!(
                    "{} does not apply to gemini-3 models; use {}",
                    keys::GOOGLE_THINKING_BUDGET,
                    keys::GOOGLE_THINKING_LEVEL
                )));
            }
            let mut thinking = Map::new();
            thinking.insert("includeThoughts".to_string(), Value::from(true));
            if let Some(level) = level {
                thinking.insert("thinkingLevel".to_string(), Value::from(level));
            }
            options.insert("thinkingConfig".to_string(), Value::Object(thinking));
        }
        // No matching generation: settings are validated above but never
        // attached.
        None => {}
    }

    if let Some(count) = super::int_setting(env, keys::GOOGLE_CANDIDATE_COUNT, CANDIDATE_COUNT_RANGE)? {
        options.insert("candidateCount".to_string(), Value::from(count));
    }
    if let Some(top_k) = super::int_setting(env, keys::GOOGLE_TOP_K, TOP_K_RANGE)? {
        options.insert("topK".to_string(), Value::from(top_k));
    }
    if let Some(top_p) = super::float_setting(env, keys::GOOGLE_TOP_P, 0.0, 1.0)? {
        options.insert("topP".to_string(), Value::from(top_p));
    }

    if options.is_empty() {
        Ok(None)
    } else {
        Ok(Some(Value::Object(options)))
    }
}
