use thiserror::Error;

use crate::domain::repositories::RegistryError;

/// Errors that abort a seeding run
///
/// Definitions handled before the failure stay in the registry; nothing
/// is rolled back.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to look up prompt '{name}'")]
    Lookup {
        name: String,
        #[source]
        source: RegistryError,
    },

    #[error("failed to register prompt '{name}'")]
    Registration {
        name: String,
        #[source]
        source: RegistryError,
    },

    #[error("failed to set alias '{alias}' on prompt '{name}' v{version}")]
    Alias {
        name: String,
        alias: String,
        version: u64,
        #[source]
        source: RegistryError,
    },
}

pub type SeedResult<T> = Result<T, SeedError>;
