// Registry implementations
// Adapters that implement the domain PromptRegistry port

pub mod mlflow_prompt_registry;
mod wire;

pub use mlflow_prompt_registry::MlflowPromptRegistry;
