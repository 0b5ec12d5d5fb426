// Prompt domain module
// Contains prompt definitions, registry entries, value objects and the
// per-definition seeding state

pub mod definition;
pub mod state;
pub mod value_objects;
pub mod version;

// Re-export main types for convenience
pub use definition::PromptDefinition;
pub use state::SeedState;
pub use value_objects::{PromptAlias, PromptUri, PromptUriTarget};
pub use version::PromptVersion;
