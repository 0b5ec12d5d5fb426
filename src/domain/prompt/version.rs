use std::collections::BTreeMap;

/// A prompt version as stored in the registry
///
/// Versions are immutable once created; only aliases move between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptVersion {
    pub name: String,
    pub version: u64,
    pub template: String,
    pub commit_message: Option<String>,
    /// User tags only, registry bookkeeping tags are stripped
    pub tags: BTreeMap<String, String>,
    pub aliases: Vec<String>,
}

impl PromptVersion {
    pub fn has_alias(&self, alias: &str) -> bool {
        self.aliases.iter().any(|a| a == alias)
    }
}
