//! Static provider catalog.
//!
//! The closed set of supported providers and their process-lifetime metadata:
//! which environment variable authenticates each provider server-side,
//! whether the provider may be selected by a client override, and the default
//! endpoint used when none is configured. All lookups are exhaustive matches
//! over [`ProviderId`] so adding a provider is flagged by the compiler at
//! every dispatch site.

use std::fmt;

/// Closed enumeration of supported providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    OpenAi,
    Anthropic,
    Google,
    AzureOpenAi,
    /// Amazon Bedrock; authenticates via the ambient IAM credential chain.
    Bedrock,
    OpenRouter,
    DeepSeek,
    Moonshot,
    Zhipu,
    SiliconFlow,
    /// Self-hosted local server, OpenAI-compatible by protocol shape.
    Ollama,
}

/// Every provider, in catalog order. Auto-detection iterates this list so
/// error messages stay deterministic.
pub const ALL_PROVIDERS: [ProviderId; 11] = [
    ProviderId::OpenAi,
    ProviderId::Anthropic,
    ProviderId::Google,
    ProviderId::AzureOpenAi,
    ProviderId::Bedrock,
    ProviderId::OpenRouter,
    ProviderId::DeepSeek,
    ProviderId::Moonshot,
    ProviderId::Zhipu,
    ProviderId::SiliconFlow,
    ProviderId::Ollama,
];

impl ProviderId {
    /// Canonical lowercase identifier.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Anthropic => "anthropic",
            Self::Google => "google",
            Self::AzureOpenAi => "azure",
            Self::Bedrock => "bedrock",
            Self::OpenRouter => "openrouter",
            Self::DeepSeek => "deepseek",
            Self::Moonshot => "moonshot",
            Self::Zhipu => "zhipu",
            Self::SiliconFlow => "siliconflow",
            Self::Ollama => "ollama",
        }
    }

    /// Parse a provider name (case-insensitive, common aliases accepted).
    /// Returns `None` for anything outside the catalog.
    pub fn parse(name: &str) -> Option<Self> {
        let normalized = name.trim().to_ascii_lowercase();
        let id = match normalized.as_str() {
            "openai" => Self::OpenAi,
            "anthropic" => Self::Anthropic,
            "google" | "gemini" => Self::Google,
            "azure" | "azure-openai" => Self::AzureOpenAi,
            "bedrock" | "amazon-bedrock" => Self::Bedrock,
            "openrouter" => Self::OpenRouter,
            "deepseek" => Self::DeepSeek,
            "moonshot" | "kimi" => Self::Moonshot,
            "zhipu" | "glm" => Self::Zhipu,
            "siliconflow" => Self::SiliconFlow,
            "ollama" => Self::Ollama,
            _ => return None,
        };
        Some(id)
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-provider static metadata.
#[derive(Debug, Clone, Copy)]
pub struct ProviderMetadata {
    /// Human-readable provider name for error messages.
    pub display_name: &'static str,
    /// Environment variable holding the server-side credential. `None` for
    /// providers that need no server credential (local, or IAM-backed).
    pub credential_env_var: Option<&'static str>,
    /// Environment variable overriding the default endpoint.
    pub base_url_env_var: Option<&'static str>,
    /// Default endpoint when neither an override nor the env var is set.
    pub default_base_url: Option<&'static str>,
    /// Whether a client override may select this provider.
    pub client_override_allowed: bool,
}

/// Metadata lookup. Exhaustive by construction.
pub const fn metadata(id: ProviderId) -> ProviderMetadata {
    match id {
        ProviderId::OpenAi => ProviderMetadata {
            display_name: "OpenAI",
            credential_env_var: Some("OPENAI_API_KEY"),
            base_url_env_var: Some("OPENAI_BASE_URL"),
            default_base_url: Some("https://api.openai.com/v1"),
            client_override_allowed: true,
        },
        ProviderId::Anthropic => ProviderMetadata {
            display_name: "Anthropic",
            credential_env_var: Some("ANTHROPIC_API_KEY"),
            base_url_env_var: Some("ANTHROPIC_BASE_URL"),
            default_base_url: Some("https://api.anthropic.com"),
            client_override_allowed: true,
        },
        ProviderId::Google => ProviderMetadata {
            display_name: "Google Gemini",
            credential_env_var: Some("GEMINI_API_KEY"),
            base_url_env_var: Some("GEMINI_BASE_URL"),
            default_base_url: Some("https://generativelanguage.googleapis.com/v1beta"),
            client_override_allowed: true,
        },
        // Azure needs endpoint construction settings a bare key+URL override
        // cannot supply, so client selection is disabled.
        ProviderId::AzureOpenAi => ProviderMetadata {
            display_name: "Azure OpenAI",
            credential_env_var: Some("AZURE_OPENAI_API_KEY"),
            base_url_env_var: Some("AZURE_OPENAI_BASE_URL"),
            default_base_url: None,
            client_override_allowed: false,
        },
        // Bedrock authenticates via the IAM chain, not an API key.
        ProviderId::Bedrock => ProviderMetadata {
            display_name: "Amazon Bedrock",
            credential_env_var: None,
            base_url_env_var: None,
            default_base_url: None,
            client_override_allowed: false,
        },
        ProviderId::OpenRouter => ProviderMetadata {
            display_name: "OpenRouter",
            credential_env_var: Some("OPENROUTER_API_KEY"),
            base_url_env_var: Some("OPENROUTER_BASE_URL"),
            default_base_url: Some("https://openrouter.ai/api/v1"),
            client_override_allowed: true,
        },
        ProviderId::DeepSeek => ProviderMetadata {
            display_name: "DeepSeek",
            credential_env_var: Some("DEEPSEEK_API_KEY"),
            base_url_env_var: Some("DEEPSEEK_BASE_URL"),
            default_base_url: Some("https://api.deepseek.com/v1"),
            client_override_allowed: true,
        },
        ProviderId::Moonshot => ProviderMetadata {
            display_name: "Moonshot",
            credential_env_var: Some("MOONSHOT_API_KEY"),
            base_url_env_var: Some("MOONSHOT_BASE_URL"),
            default_base_url: Some("https://api.moonshot.cn/v1"),
            client_override_allowed: true,
        },
        ProviderId::Zhipu => ProviderMetadata {
            display_name: "Zhipu",
            credential_env_var: Some("ZHIPU_API_KEY"),
            base_url_env_var: Some("ZHIPU_BASE_URL"),
            default_base_url: Some("https://open.bigmodel.cn/api/paas/v4"),
            client_override_allowed: true,
        },
        ProviderId::SiliconFlow => ProviderMetadata {
            display_name: "SiliconFlow",
            credential_env_var: Some("SILICONFLOW_API_KEY"),
            base_url_env_var: Some("SILICONFLOW_BASE_URL"),
            default_base_url: Some("https://api.siliconflow.cn/v1"),
            client_override_allowed: true,
        },
        ProviderId::Ollama => ProviderMetadata {
            display_name: "Ollama",
            credential_env_var: None,
            base_url_env_var: Some("OLLAMA_BASE_URL"),
            default_base_url: Some("http://localhost:11434/v1"),
            client_override_allowed: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrips_canonical_names() {
        for id in ALL_PROVIDERS {
            assert_eq!(ProviderId::parse(id.as_str()), Some(id));
        }
    }

    #[test]
    fn parse_accepts_aliases_and_case() {
        assert_eq!(ProviderId::parse("Gemini"), Some(ProviderId::Google));
        assert_eq!(ProviderId::parse("azure-openai"), Some(ProviderId::AzureOpenAi));
        assert_eq!(ProviderId::parse("amazon-bedrock"), Some(ProviderId::Bedrock));
        assert_eq!(ProviderId::parse("OPENAI"), Some(ProviderId::OpenAi));
        assert_eq!(ProviderId::parse("totally-unknown"), None);
    }

    #[test]
    fn credential_free_providers() {
        assert!(metadata(ProviderId::Bedrock).credential_env_var.is_none());
        assert!(metadata(ProviderId::Ollama).credential_env_var.is_none());
    }

    #[test]
    fn override_allowlist_excludes_server_configured_providers() {
        assert!(!metadata(ProviderId::AzureOpenAi).client_override_allowed);
        assert!(!metadata(ProviderId::Bedrock).client_override_allowed);
        for id in [ProviderId::OpenAi, ProviderId::Anthropic, ProviderId::Ollama] {
            assert!(metadata(id).client_override_allowed);
        }
    }
}
