use async_trait::async_trait;
use thiserror::Error;

use crate::domain::prompt::{PromptAlias, PromptDefinition, PromptUri, PromptVersion};

/// Errors surfaced by a prompt registry backend
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("registry request failed: {0}")]
    Transport(String),

    #[error("registry returned {status} ({error_code}): {message}")]
    Api {
        status: u16,
        error_code: String,
        message: String,
    },

    #[error("unexpected registry response: {0}")]
    InvalidResponse(String),

    #[error("'{0}' exists in the registry but is not a prompt")]
    NotAPrompt(String),
}

/// Repository trait for the external prompt registry
///
/// The registry owns versioning, storage and alias resolution. Callers
/// only read entries, append versions and move aliases.
#[async_trait]
pub trait PromptRegistry: Send + Sync {
    /// Load the version a URI points at
    ///
    /// Returns `Ok(None)` only when the registry reports the prompt, version
    /// or alias does not exist. Every other failure is an `Err`.
    async fn load(&self, uri: &PromptUri) -> Result<Option<PromptVersion>, RegistryError>;

    /// Register a new version of the definition, creating the prompt if needed
    async fn register(&self, definition: &PromptDefinition) -> Result<PromptVersion, RegistryError>;

    /// Point an alias at an existing version
    async fn set_alias(
        &self,
        name: &str,
        alias: &PromptAlias,
        version: u64,
    ) -> Result<(), RegistryError>;
}
