//! Resolution entry point.
//!
//! `resolve` is a pure function of its two inputs: the environment snapshot
//! and the per-request overrides. No internal state, no caching, no I/O.
//! Control flow: security gate → provider selection → credential validation
//! → reasoning options → client factory.

mod select;
mod validate;

pub use select::Selection;

use crate::env::{EnvSnapshot, keys};
use crate::error::ResolveError;
use crate::factory::{self, ModelDescriptor};
use crate::reasoning;
use crate::types::ClientOverrides;

/// Resolve a provider and build its client configuration.
///
/// Errors are never recovered or retried here; there is no fallback
/// provider.
pub fn resolve(
    env: &EnvSnapshot,
    overrides: &ClientOverrides,
) -> Result<ModelDescriptor, ResolveError> {
    // The gate runs before any credential lookup.
    enforce_override_gate(overrides)?;

    let selection = select::select_provider(env, overrides)?;
    let provider = selection.provider();
    tracing::debug!(provider = %provider, selection = ?selection, "provider selected");

    validate::validate_credentials(selection, env, overrides)?;

    let model_id = overrides
        .model_id
        .clone()
        .filter(|id| !id.trim().is_empty())
        .or_else(|| env.get(keys::MODEL).map(str::to_owned))
        .ok_or_else(|| {
            ResolveError::ConfigurationError(format!(
                "no model identifier configured; set {} or supply one per request",
                keys::MODEL
            ))
        })?;

    let provider_options = reasoning::build_provider_options(provider, &model_id, env)?;
    factory::build_descriptor(provider, model_id, env, overrides, provider_options)
}

/// Anti-SSRF gate: a custom endpoint may only be honored together with a
/// client-supplied credential. Otherwise the server's own stored credential
/// would be sent to a caller-chosen host.
fn enforce_override_gate(overrides: &ClientOverrides) -> Result<(), ResolveError> {
    if overrides.base_url.is_some() && overrides.api_key.is_none() {
        return Err(ResolveError::SecurityError(
            "a custom base URL requires a client-supplied API key; refusing to pair the \
             server credential with a caller-chosen endpoint"
                .to_string(),
        ));
    }
    Ok(())
}
