// Starter prompt catalog
//
// The desired registry state. Names must be unique; nothing enforces it
// beyond the test below.

use crate::domain::prompt::PromptDefinition;

/// All starter prompts, in seeding order
pub fn starter_prompts() -> Vec<PromptDefinition> {
    vec![assistant(), summarizer()]
}

pub fn assistant() -> PromptDefinition {
    PromptDefinition::new(
        "assistant",
        "You are a helpful AI assistant. Respond clearly and concisely.\n\n\
         User: {{ message }}\nAssistant:",
        "Initial general assistant prompt",
    )
    .with_tag("use_case", "general")
}

pub fn summarizer() -> PromptDefinition {
    PromptDefinition::new(
        "summarizer",
        "Summarize the following text in {{ num_sentences }} sentences. \
         Be factual and concise.\n\n\
         Text: {{ text }}\n\nSummary:",
        "Initial summarization prompt",
    )
    .with_tag("use_case", "summarization")
}
