// Repository interfaces (ports)
// Infrastructure adapters implement these; the seeder depends only on them

pub mod prompt_registry;

pub use prompt_registry::{PromptRegistry, RegistryError};
