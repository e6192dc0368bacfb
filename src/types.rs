//! Request-scoped override types.

use secrecy::SecretString;

/// Untrusted, per-request configuration supplied by the calling client.
///
/// All fields are independently optional. A `base_url` without an `api_key`
/// is rejected by the security gate before anything else runs; credentials
/// are held as [`SecretString`] so they never leak through `Debug` output or
/// logs.
#[derive(Debug, Clone, Default)]
pub struct ClientOverrides {
    /// Provider name; restricted to the client-enabled subset of the catalog.
    pub provider: Option<String>,
    /// Custom endpoint; only honored together with a client credential.
    pub base_url: Option<String>,
    /// Client-supplied credential, used in place of the server's.
    pub api_key: Option<SecretString>,
    /// Per-request model identifier.
    pub model_id: Option<String>,
}

impl ClientOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }
}
