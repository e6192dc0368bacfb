//! Error types for provider resolution.
//!
//! Every failure the resolver can produce is a `ResolveError`. Errors are
//! raised synchronously and propagate unmodified to the caller; nothing is
//! retried and there is no fallback provider. Messages are written to drive
//! the fix directly: they name the missing variable, list the configured
//! providers, or state the valid range.

use thiserror::Error;

/// Errors produced while resolving a provider and building its client
/// configuration.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A custom endpoint override arrived without a client-supplied
    /// credential. Honoring it would pair the server's own stored credential
    /// with a caller-chosen host.
    #[error("Security error: {0}")]
    SecurityError(String),

    /// Provider name is unknown, or a client override named a provider that
    /// is not enabled for client selection.
    #[error("Unsupported provider: {0}")]
    UnsupportedProviderError(String),

    /// Auto-detection found no provider with a configured credential.
    #[error("No provider configured: {0}")]
    NoProviderConfiguredError(String),

    /// Auto-detection found more than one configured provider and no
    /// explicit selection to break the tie.
    #[error("Ambiguous provider configuration: {0}")]
    AmbiguousProviderError(String),

    /// A required credential variable or endpoint-construction setting is
    /// missing for the selected provider.
    #[error("Credential error: {0}")]
    CredentialError(String),

    /// A setting is malformed: non-numeric where a number is required,
    /// outside its documented range, not in a closed enum set, or the model
    /// identifier is missing entirely.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}
