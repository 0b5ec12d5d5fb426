use std::collections::BTreeMap;

/// A prompt the seeder wants to exist in the registry
///
/// The template's `{{ variable }}` markers are left untouched; they are
/// interpreted by whoever loads the prompt later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptDefinition {
    /// Registry key
    pub name: String,
    pub template: String,
    /// Attached to the created version as its description
    pub commit_message: String,
    pub tags: BTreeMap<String, String>,
}

impl PromptDefinition {
    /// Creates a definition without tags
    ///
    /// # Example
    /// ```
    /// use prompt_seeder::domain::prompt::PromptDefinition;
    ///
    /// let definition = PromptDefinition::new("greeter", "Hello {{ name }}", "Initial greeter")
    ///     .with_tag("use_case", "demo");
    /// assert_eq!(definition.tags.get("use_case").map(String::as_str), Some("demo"));
    /// ```
    pub fn new(
        name: impl Into<String>,
        template: impl Into<String>,
        commit_message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
            commit_message: commit_message.into(),
            tags: BTreeMap::new(),
        }
    }

    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }
}
