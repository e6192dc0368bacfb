//! Client configuration construction.
//!
//! Turns a resolved provider + credential + endpoint + options into the
//! final [`ModelDescriptor`]. Native-SDK providers, OpenAI-compatible
//! providers, and the IAM-credentialed provider each have their own
//! construction path; the OpenAI-compatible path is a single generic
//! constructor shared by every protocol-identical provider.
//!
//! Construction is per-call: every resolution builds a fresh configuration
//! value and HTTP client, so there is no shared default client to mutate.
//! Nothing here performs network I/O; issuing requests is the transport
//! collaborator's job.

use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use crate::catalog::{self, ProviderId};
use crate::env::{EnvSnapshot, keys};
use crate::error::ResolveError;
use crate::types::ClientOverrides;

/// Anthropic wire protocol version sent with every request.
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Fine-grained tool streaming requires an explicit opt-in header on every
/// direct Anthropic request.
pub const ANTHROPIC_BETA_HEADER: &str = "fine-grained-tool-streaming-2025-05-14";

/// Azure OpenAI API version pinned by this crate.
pub const AZURE_API_VERSION: &str = "2024-10-21";

const DEFAULT_BEDROCK_REGION: &str = "us-east-1";

/// Resolution output: everything the transport layer needs to issue
/// requests against the selected provider.
#[derive(Debug, Clone)]
pub struct ModelDescriptor {
    /// The configured client reference.
    pub model: ModelReference,
    /// Provider-specific request options, keyed by provider family; passed
    /// through verbatim.
    pub provider_options: Option<Value>,
    /// Extra request headers; passed through verbatim.
    pub headers: Option<HashMap<String, String>>,
    /// Always non-empty on success.
    pub model_id: String,
}

impl ModelDescriptor {
    pub fn provider(&self) -> ProviderId {
        self.model.provider()
    }
}

/// Configured client, one variant per construction path.
#[derive(Debug, Clone)]
pub enum ModelReference {
    OpenAi(OpenAiClientConfig),
    Anthropic(AnthropicClientConfig),
    Google(GoogleClientConfig),
    AzureOpenAi(AzureOpenAiClientConfig),
    /// Generic path for every provider that is OpenAI-compatible by
    /// protocol shape.
    OpenAiCompatible(OpenAiCompatibleClientConfig),
    Bedrock(BedrockClientConfig),
}

impl ModelReference {
    pub fn provider(&self) -> ProviderId {
        match self {
            Self::OpenAi(_) => ProviderId::OpenAi,
            Self::Anthropic(_) => ProviderId::Anthropic,
            Self::Google(_) => ProviderId::Google,
            Self::AzureOpenAi(_) => ProviderId::AzureOpenAi,
            Self::OpenAiCompatible(config) => config.provider,
            Self::Bedrock(_) => ProviderId::Bedrock,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OpenAiClientConfig {
    pub base_url: String,
    pub api_key: SecretString,
    /// HTTP client with auth headers pre-installed.
    pub http: reqwest::Client,
}

#[derive(Debug, Clone)]
pub struct AnthropicClientConfig {
    pub base_url: String,
    pub api_key: SecretString,
    pub http: reqwest::Client,
}

#[derive(Debug, Clone)]
pub struct GoogleClientConfig {
    pub base_url: String,
    pub api_key: SecretString,
    pub http: reqwest::Client,
}

#[derive(Debug, Clone)]
pub struct AzureOpenAiClientConfig {
    /// Endpoint, typically `https://{resource}.openai.azure.com`.
    pub endpoint: String,
    pub api_version: String,
    pub api_key: SecretString,
    pub http: reqwest::Client,
}

#[derive(Debug, Clone)]
pub struct OpenAiCompatibleClientConfig {
    pub provider: ProviderId,
    pub base_url: String,
    /// Optional: the local provider needs no credential.
    pub api_key: Option<SecretString>,
    pub http: reqwest::Client,
}

/// How Bedrock credentials are obtained.
#[derive(Debug, Clone)]
pub enum CredentialSource {
    /// Resolve through the ambient IAM provider chain (instance profile,
    /// SSO, shared config).
    AmbientChain,
    /// Explicit keys from the environment snapshot.
    Explicit {
        access_key_id: String,
        secret_access_key: SecretString,
        session_token: Option<SecretString>,
    },
}

#[derive(Debug, Clone)]
pub struct BedrockClientConfig {
    pub region: String,
    pub credentials: CredentialSource,
}

/// Build the final descriptor for the resolved provider.
pub(crate) fn build_descriptor(
    provider: ProviderId,
    model_id: String,
    env: &EnvSnapshot,
    overrides: &ClientOverrides,
    provider_options: Option<Value>,
) -> Result<ModelDescriptor, ResolveError> {
    tracing::debug!(provider = %provider, model = %model_id, "building client configuration");

    let mut headers: Option<HashMap<String, String>> = None;

    let model = match provider {
        ProviderId::OpenAi => {
            let base_url = required_base_url(provider, env, overrides)?;
            let api_key = required_api_key(provider, env, overrides)?;
            let http = http_client_with_headers(&[(
                "authorization",
                &format!("Bearer {}", api_key.expose_secret()),
            )])?;
            ModelReference::OpenAi(OpenAiClientConfig { base_url, api_key, http })
        }
        ProviderId::Anthropic => {
            let base_url = required_base_url(provider, env, overrides)?;
            let api_key = required_api_key(provider, env, overrides)?;
            let http = http_client_with_headers(&[
                ("x-api-key", api_key.expose_secret()),
                ("anthropic-version", ANTHROPIC_VERSION),
            ])?;
            headers = Some(HashMap::from([(
                "anthropic-beta".to_string(),
                ANTHROPIC_BETA_HEADER.to_string(),
            )]));
            ModelReference::Anthropic(AnthropicClientConfig { base_url, api_key, http })
        }
        ProviderId::Google => {
            let base_url = required_base_url(provider, env, overrides)?;
            let api_key = required_api_key(provider, env, overrides)?;
            let http =
                http_client_with_headers(&[("x-goog-api-key", api_key.expose_secret())])?;
            ModelReference::Google(GoogleClientConfig { base_url, api_key, http })
        }
        ProviderId::AzureOpenAi => {
            let endpoint = azure_endpoint(env, overrides)?;
            let api_key = required_api_key(provider, env, overrides)?;
            let http = http_client_with_headers(&[("api-key", api_key.expose_secret())])?;
            ModelReference::AzureOpenAi(AzureOpenAiClientConfig {
                endpoint,
                api_version: AZURE_API_VERSION.to_string(),
                api_key,
                http,
            })
        }
        ProviderId::OpenRouter
        | ProviderId::DeepSeek
        | ProviderId::Moonshot
        | ProviderId::Zhipu
        | ProviderId::SiliconFlow
        | ProviderId::Ollama => openai_compatible_reference(provider, env, overrides)?,
        // Bedrock resolves credentials via the IAM chain and ignores
        // apiKey/baseUrl overrides entirely.
        ProviderId::Bedrock => ModelReference::Bedrock(bedrock_config(env)),
    };

    Ok(ModelDescriptor {
        model,
        provider_options,
        headers,
        model_id,
    })
}

/// The single constructor shared by all OpenAI-compatible providers,
/// parameterized only by credential and endpoint.
fn openai_compatible_reference(
    provider: ProviderId,
    env: &EnvSnapshot,
    overrides: &ClientOverrides,
) -> Result<ModelReference, ResolveError> {
    let base_url = required_base_url(provider, env, overrides)?;
    let api_key = resolve_api_key(provider, env, overrides);

    let meta = catalog::metadata(provider);
    if api_key.is_none()
        && let Some(var) = meta.credential_env_var
    {
        // Unreachable through resolve() (the validator runs first); kept for
        // direct factory callers.
        return Err(ResolveError::CredentialError(format!(
            "{var} is not set; it is required for {}",
            meta.display_name
        )));
    }

    let http = match &api_key {
        Some(key) => http_client_with_headers(&[(
            "authorization",
            &format!("Bearer {}", key.expose_secret()),
        )])?,
        None => http_client_with_headers(&[])?,
    };

    Ok(ModelReference::OpenAiCompatible(OpenAiCompatibleClientConfig {
        provider,
        base_url,
        api_key,
        http,
    }))
}

fn bedrock_config(env: &EnvSnapshot) -> BedrockClientConfig {
    let region = env
        .get(keys::AWS_REGION)
        .unwrap_or(DEFAULT_BEDROCK_REGION)
        .to_string();
    let credentials = match (env.get(keys::AWS_ACCESS_KEY_ID), env.get(keys::AWS_SECRET_ACCESS_KEY)) {
        (Some(access_key_id), Some(secret_access_key)) => CredentialSource::Explicit {
            access_key_id: access_key_id.to_string(),
            secret_access_key: SecretString::from(secret_access_key.to_string()),
            session_token: env
                .get(keys::AWS_SESSION_TOKEN)
                .map(|token| SecretString::from(token.to_string())),
        },
        _ => CredentialSource::AmbientChain,
    };
    BedrockClientConfig { region, credentials }
}

/// Per-field endpoint precedence: override, then env var, then catalog
/// default.
fn resolve_base_url(
    provider: ProviderId,
    env: &EnvSnapshot,
    overrides: &ClientOverrides,
) -> Result<Option<String>, ResolveError> {
    let meta = catalog::metadata(provider);
    let url = overrides
        .base_url
        .clone()
        .or_else(|| meta.base_url_env_var.and_then(|key| env.get(key)).map(str::to_owned))
        .or_else(|| meta.default_base_url.map(str::to_owned));
    if let Some(ref url) = url {
        validate_base_url(url)?;
    }
    Ok(url)
}

fn required_base_url(
    provider: ProviderId,
    env: &EnvSnapshot,
    overrides: &ClientOverrides,
) -> Result<String, ResolveError> {
    resolve_base_url(provider, env, overrides)?.ok_or_else(|| {
        ResolveError::ConfigurationError(format!(
            "no endpoint configured for {}",
            catalog::metadata(provider).display_name
        ))
    })
}

/// Per-field credential precedence: override, then env var.
fn resolve_api_key(
    provider: ProviderId,
    env: &EnvSnapshot,
    overrides: &ClientOverrides,
) -> Option<SecretString> {
    overrides.api_key.clone().or_else(|| {
        catalog::metadata(provider)
            .credential_env_var
            .and_then(|key| env.get(key))
            .map(|value| SecretString::from(value.to_string()))
    })
}

fn required_api_key(
    provider: ProviderId,
    env: &EnvSnapshot,
    overrides: &ClientOverrides,
) -> Result<SecretString, ResolveError> {
    let meta = catalog::metadata(provider);
    resolve_api_key(provider, env, overrides).ok_or_else(|| {
        ResolveError::CredentialError(match meta.credential_env_var {
            Some(var) => format!("{var} is not set; it is required for {}", meta.display_name),
            None => format!("no credential available for {}", meta.display_name),
        })
    })
}

/// Azure endpoint construction: base URL setting wins, otherwise the
/// endpoint is derived from the resource name.
fn azure_endpoint(env: &EnvSnapshot, overrides: &ClientOverrides) -> Result<String, ResolveError> {
    if let Some(url) = resolve_base_url(ProviderId::AzureOpenAi, env, overrides)? {
        return Ok(url);
    }
    match env.get(keys::AZURE_OPENAI_RESOURCE_NAME) {
        Some(resource) => Ok(format!("https://{resource}.openai.azure.com")),
        None => Err(ResolveError::CredentialError(format!(
            "Azure OpenAI requires {} or {} to construct an endpoint",
            keys::AZURE_OPENAI_BASE_URL,
            keys::AZURE_OPENAI_RESOURCE_NAME
        ))),
    }
}

fn validate_base_url(url: &str) -> Result<(), ResolveError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ResolveError::ConfigurationError(format!(
            "base URL must start with http:// or https:// (got '{url}')"
        )));
    }
    Ok(())
}

/// Build an HTTP client with the given default headers. Credential-bearing
/// values are marked sensitive so they never appear in HTTP traces.
fn http_client_with_headers(pairs: &[(&str, &str)]) -> Result<reqwest::Client, ResolveError> {
    let mut headers = HeaderMap::new();
    for (name, value) in pairs {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            ResolveError::ConfigurationError(format!("invalid header name '{name}': {e}"))
        })?;
        let mut header_value = HeaderValue::from_str(value).map_err(|e| {
            ResolveError::ConfigurationError(format!("invalid header value for '{name}': {e}"))
        })?;
        header_value.set_sensitive(true);
        headers.insert(header_name, header_value);
    }
    reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .map_err(|e| ResolveError::ConfigurationError(format!("failed to build HTTP client: {e}")))
}
