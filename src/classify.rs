//! Model identifier classification.
//!
//! All naming-convention knowledge lives here: which identifiers denote
//! reasoning-capable models, which Gemini generation a model belongs to,
//! which family a Bedrock-hosted model comes from, and which models support
//! provider-side prompt caching. Classification is pure substring/prefix
//! matching over the identifier text; dispatch logic elsewhere only consumes
//! the closed variants returned here.

/// Gemini thinking configuration style, selected by model generation.
/// The two wire fields are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoogleThinkingGeneration {
    /// gemini-2.5 generation: integer `thinkingBudget`.
    Budget,
    /// gemini-3 generation: enumerated `thinkingLevel`.
    Level,
}

/// Model family hosted on Bedrock, for reasoning-option shape selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BedrockModelFamily {
    /// Anthropic Claude models: token-budget reasoning plus fixed beta flags.
    Claude,
    /// OpenAI open-weight models: effort-level reasoning.
    GptOss,
}

/// Whether an OpenAI model identifier denotes a reasoning-capable model
/// (o-series or gpt-5 naming).
pub fn openai_reasoning_model(model_id: &str) -> bool {
    let m = model_id.to_ascii_lowercase();
    m.starts_with("o1") || m.starts_with("o3") || m.starts_with("o4") || m.contains("gpt-5")
}

/// Whether a Claude model identifier supports extended thinking.
pub fn anthropic_thinking_model(model_id: &str) -> bool {
    let m = model_id.to_ascii_lowercase();
    m.contains("claude-3-7")
        || m.contains("claude-opus-4")
        || m.contains("claude-sonnet-4")
        || m.contains("claude-haiku-4")
}

/// Which Gemini thinking generation a model belongs to, if any.
pub fn google_thinking_generation(model_id: &str) -> Option<GoogleThinkingGeneration> {
    let m = model_id.to_ascii_lowercase();
    if m.contains("gemini-2.5") {
        Some(GoogleThinkingGeneration::Budget)
    } else if m.contains("gemini-3") {
        Some(GoogleThinkingGeneration::Level)
    } else {
        None
    }
}

/// Which well-known family a Bedrock model identifier indicates, if any.
/// Bedrock ids carry a vendor segment (e.g. `anthropic.claude-...`,
/// `openai.gpt-oss-...`), so substring matching is sufficient.
pub fn bedrock_model_family(model_id: &str) -> Option<BedrockModelFamily> {
    let m = model_id.to_ascii_lowercase();
    if m.contains("claude") {
        Some(BedrockModelFamily::Claude)
    } else if m.contains("gpt-oss") {
        Some(BedrockModelFamily::GptOss)
    } else {
        None
    }
}

/// Whether a model supports provider-side prompt caching.
///
/// A pure classification consumed by callers outside resolution proper; kept
/// here so the identifier patterns stay in one place.
pub fn supports_prompt_caching(model_id: &str) -> bool {
    let m = model_id.to_ascii_lowercase();
    m.contains("claude")
        || m.contains("gemini-2.5")
        || m.contains("gemini-3")
        || m.contains("gpt-4o")
        || m.contains("gpt-4.1")
        || m.contains("gpt-5")
        || m.starts_with("o1")
        || m.starts_with("o3")
        || m.starts_with("o4")
        || m.starts_with("deepseek-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openai_reasoning_patterns() {
        assert!(openai_reasoning_model("o3"));
        assert!(openai_reasoning_model("o4-mini"));
        assert!(openai_reasoning_model("gpt-5-codex"));
        assert!(!openai_reasoning_model("gpt-4o"));
        assert!(!openai_reasoning_model("gpt-4.1-mini"));
    }

    #[test]
    fn anthropic_thinking_patterns() {
        assert!(anthropic_thinking_model("claude-sonnet-4-20250514"));
        assert!(anthropic_thinking_model("claude-3-7-sonnet-20250219"));
        assert!(!anthropic_thinking_model("claude-3-5-haiku-20241022"));
    }

    #[test]
    fn google_generations() {
        assert_eq!(
            google_thinking_generation("gemini-2.5-pro"),
            Some(GoogleThinkingGeneration::Budget)
        );
        assert_eq!(
            google_thinking_generation("gemini-3-flash-preview"),
            Some(GoogleThinkingGeneration::Level)
        );
        assert_eq!(google_thinking_generation("gemini-1.5-pro"), None);
    }

    #[test]
    fn bedrock_families() {
        assert_eq!(
            bedrock_model_family("anthropic.claude-sonnet-4-20250514-v1:0"),
            Some(BedrockModelFamily::Claude)
        );
        assert_eq!(
            bedrock_model_family("openai.gpt-oss-120b-1:0"),
            Some(BedrockModelFamily::GptOss)
        );
        assert_eq!(bedrock_model_family("amazon.nova-pro-v1:0"), None);
    }

    #[test]
    fn prompt_caching_classification() {
        assert!(supports_prompt_caching("claude-sonnet-4-20250514"));
        assert!(supports_prompt_caching("gemini-2.5-flash"));
        assert!(supports_prompt_caching("gpt-4o-mini"));
        assert!(supports_prompt_caching("deepseek-chat"));
        assert!(!supports_prompt_caching("llama3.2"));
        assert!(!supports_prompt_caching("gemini-1.5-pro"));
    }
}
