//! # modelgate
//!
//! Provider resolution and client configuration for LLM APIs.
//!
//! Given a layered set of configuration sources — an immutable environment
//! snapshot and optional per-request client overrides — `modelgate` decides
//! which provider governs a call, enforces the credential-exfiltration gate,
//! validates credentials and endpoints, derives provider-specific reasoning
//! options from the model identifier, and builds the final client
//! configuration. It performs no network I/O and holds no state: every
//! resolution is a pure function of its inputs.
//!
//! ```rust
//! use modelgate::{ClientOverrides, EnvSnapshot, resolve};
//!
//! let env = EnvSnapshot::from_iter([
//!     ("ANTHROPIC_API_KEY", "sk-ant-..."),
//!     ("LLM_MODEL", "claude-sonnet-4-20250514"),
//! ]);
//! let descriptor = resolve(&env, &ClientOverrides::default()).unwrap();
//! assert_eq!(descriptor.model_id, "claude-sonnet-4-20250514");
//! ```

#![deny(unsafe_code)]

pub mod catalog;
pub mod classify;
pub mod env;
pub mod error;
pub mod factory;
pub mod reasoning;
pub mod resolver;
pub mod types;

pub use catalog::{ALL_PROVIDERS, ProviderId, ProviderMetadata, metadata};
pub use classify::supports_prompt_caching;
pub use env::EnvSnapshot;
pub use error::ResolveError;
pub use factory::{
    AnthropicClientConfig, AzureOpenAiClientConfig, BedrockClientConfig, CredentialSource,
    GoogleClientConfig, ModelDescriptor, ModelReference, OpenAiClientConfig,
    OpenAiCompatibleClientConfig,
};
pub use resolver::{Selection, resolve};
pub use types::ClientOverrides;
