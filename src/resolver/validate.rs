//! Credential and structural validation for the selected provider.
//!
//! Client-override calls are exempt: the client supplies its own credential
//! and is solely responsible for its validity — the server cannot and must
//! not gatekeep it.

use crate::catalog::{self, ProviderId};
use crate::env::{EnvSnapshot, keys};
use crate::error::ResolveError;
use crate::types::ClientOverrides;

use super::select::Selection;

pub(crate) fn validate_credentials(
    selection: Selection,
    env: &EnvSnapshot,
    overrides: &ClientOverrides,
) -> Result<(), ResolveError> {
    if matches!(selection, Selection::Override(_)) {
        return Ok(());
    }

    let provider = selection.provider();
    let meta = catalog::metadata(provider);

    // A client-supplied key satisfies the requirement on env/auto-selected
    // paths too; the factory prefers it per field.
    let has_client_key = overrides.api_key.is_some();

    if let Some(var) = meta.credential_env_var
        && !env.is_set(var)
        && !has_client_key
    {
        return Err(ResolveError::CredentialError(format!(
            "{var} is not set; it is required for {}",
            meta.display_name
        )));
    }

    // Azure's endpoint requirement is structural, independent of the key.
    if provider == ProviderId::AzureOpenAi
        && !env.is_set(keys::AZURE_OPENAI_BASE_URL)
        && !env.is_set(keys::AZURE_OPENAI_RESOURCE_NAME)
        && overrides.base_url.is_none()
    {
        return Err(ResolveError::CredentialError(format!(
            "Azure OpenAI requires {} or {} to construct an endpoint",
            keys::AZURE_OPENAI_BASE_URL,
            keys::AZURE_OPENAI_RESOURCE_NAME
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> EnvSnapshot {
        EnvSnapshot::from_iter(pairs.iter().copied())
    }

    #[test]
    fn missing_required_variable_names_it() {
        for (provider, var) in [
            (ProviderId::OpenAi, "OPENAI_API_KEY"),
            (ProviderId::Anthropic, "ANTHROPIC_API_KEY"),
            (ProviderId::Google, "GEMINI_API_KEY"),
            (ProviderId::DeepSeek, "DEEPSEEK_API_KEY"),
            (ProviderId::OpenRouter, "OPENROUTER_API_KEY"),
        ] {
            let err = validate_credentials(
                Selection::Environment(provider),
                &EnvSnapshot::default(),
                &ClientOverrides::default(),
            )
            .unwrap_err();
            assert!(matches!(err, ResolveError::CredentialError(_)));
            assert!(err.to_string().contains(var), "{err} should name {var}");
        }
    }

    #[test]
    fn override_selection_skips_server_validation() {
        validate_credentials(
            Selection::Override(ProviderId::OpenAi),
            &EnvSnapshot::default(),
            &ClientOverrides::new().with_provider("openai").with_api_key("sk"),
        )
        .unwrap();
    }

    #[test]
    fn client_key_satisfies_env_selected_provider() {
        validate_credentials(
            Selection::Environment(ProviderId::OpenAi),
            &EnvSnapshot::default(),
            &ClientOverrides::new().with_api_key("sk-user"),
        )
        .unwrap();
    }

    #[test]
    fn credential_free_providers_validate_without_keys() {
        for provider in [ProviderId::Bedrock, ProviderId::Ollama] {
            validate_credentials(
                Selection::Environment(provider),
                &EnvSnapshot::default(),
                &ClientOverrides::default(),
            )
            .unwrap();
        }
    }

    #[test]
    fn azure_structural_requirement_is_independent_of_the_key() {
        let snapshot = env(&[("AZURE_OPENAI_API_KEY", "az")]);
        let err = validate_credentials(
            Selection::Environment(ProviderId::AzureOpenAi),
            &snapshot,
            &ClientOverrides::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ResolveError::CredentialError(_)));
        assert!(err.to_string().contains("AZURE_OPENAI_BASE_URL"));
        assert!(err.to_string().contains("AZURE_OPENAI_RESOURCE_NAME"));

        let snapshot = env(&[
            ("AZURE_OPENAI_API_KEY", "az"),
            ("AZURE_OPENAI_BASE_URL", "https://acme.openai.azure.com"),
        ]);
        validate_credentials(
            Selection::Environment(ProviderId::AzureOpenAi),
            &snapshot,
            &ClientOverrides::default(),
        )
        .unwrap();
    }
}
