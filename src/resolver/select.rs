//! Provider selection.
//!
//! Fixed precedence chain, first match wins: client override, explicit
//! environment selection, credential auto-detection. Auto-detection is
//! fail-closed: zero or many configured credential sources is reported as a
//! configuration problem, never guessed around.

use crate::catalog::{self, ALL_PROVIDERS, ProviderId};
use crate::env::{EnvSnapshot, keys};
use crate::error::ResolveError;
use crate::types::ClientOverrides;

/// How the governing provider was chosen. Exactly one selection governs any
/// resolution call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Client override: provider name and credential both client-supplied.
    Override(ProviderId),
    /// Explicit server-side selection via the provider setting.
    Environment(ProviderId),
    /// Exactly one provider had a configured credential.
    Detected(ProviderId),
}

impl Selection {
    pub fn provider(self) -> ProviderId {
        match self {
            Self::Override(id) | Self::Environment(id) | Self::Detected(id) => id,
        }
    }
}

pub(crate) fn select_provider(
    env: &EnvSnapshot,
    overrides: &ClientOverrides,
) -> Result<Selection, ResolveError> {
    // 1. Client override: requires both a provider name and a credential.
    if let (Some(name), Some(_)) = (&overrides.provider, &overrides.api_key) {
        let id = ProviderId::parse(name).ok_or_else(|| {
            ResolveError::UnsupportedProviderError(format!("unknown provider '{name}'"))
        })?;
        if !catalog::metadata(id).client_override_allowed {
            return Err(ResolveError::UnsupportedProviderError(format!(
                "provider '{id}' is not enabled for client-supplied configuration"
            )));
        }
        return Ok(Selection::Override(id));
    }

    // 2. Explicit environment selection: trusted, no allow-list applied.
    if let Some(name) = env.get(keys::PROVIDER) {
        let id = ProviderId::parse(name).ok_or_else(|| {
            ResolveError::UnsupportedProviderError(format!(
                "unknown provider '{name}' in {}",
                keys::PROVIDER
            ))
        })?;
        return Ok(Selection::Environment(id));
    }

    // 3. Auto-detection over configured credentials.
    let configured: Vec<ProviderId> = ALL_PROVIDERS
        .into_iter()
        .filter(|&id| credential_configured(id, env))
        .collect();

    match configured.as_slice() {
        [single] => Ok(Selection::Detected(*single)),
        [] => {
            let vars: Vec<&str> = ALL_PROVIDERS
                .into_iter()
                .filter_map(|id| catalog::metadata(id).credential_env_var)
                .collect();
            Err(ResolveError::NoProviderConfiguredError(format!(
                "no provider credential found; set one of {} (or set {})",
                vars.join(", "),
                keys::PROVIDER
            )))
        }
        many => {
            let names: Vec<&str> = many.iter().map(|id| id.as_str()).collect();
            Err(ResolveError::AmbiguousProviderError(format!(
                "multiple providers are configured ({}); set {} to select one",
                names.join(", "),
                keys::PROVIDER
            )))
        }
    }
}

/// Whether a provider qualifies for auto-detection: its credential variable
/// is present, and (for Azure) an endpoint-construction setting exists too.
fn credential_configured(id: ProviderId, env: &EnvSnapshot) -> bool {
    let Some(var) = catalog::metadata(id).credential_env_var else {
        // Credential-free providers (local, IAM-backed) never auto-detect.
        return false;
    };
    if !env.is_set(var) {
        return false;
    }
    if id == ProviderId::AzureOpenAi {
        return env.is_set(keys::AZURE_OPENAI_BASE_URL)
            || env.is_set(keys::AZURE_OPENAI_RESOURCE_NAME);
    }
    true
}
