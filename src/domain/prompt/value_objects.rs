use std::fmt;
use std::str::FromStr;

/// URI scheme used by the registry to address prompts
pub const PROMPT_URI_SCHEME: &str = "prompts:/";

/// Alias value object: a mutable named pointer to one prompt version
///
/// # Invariants
/// - Non-empty, ASCII alphanumerics, `_` or `-` only
/// - Not `latest`, which the registry reserves
/// - Not of the form `v<digits>`, which would shadow version references
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PromptAlias(String);

impl PromptAlias {
    pub const PRODUCTION: &'static str = "production";

    /// Creates a new alias
    ///
    /// # Example
    /// ```
    /// use prompt_seeder::domain::prompt::PromptAlias;
    ///
    /// let alias = PromptAlias::new("staging").expect("valid alias");
    /// assert_eq!(alias.as_str(), "staging");
    /// assert!(PromptAlias::new("latest").is_err());
    /// ```
    pub fn new(alias: impl Into<String>) -> Result<Self, String> {
        let alias = alias.into();
        if Self::is_valid(&alias) {
            Ok(PromptAlias(alias))
        } else {
            Err(format!("Invalid alias: '{}'", alias))
        }
    }

    /// The alias every seeded prompt version is published under
    pub fn production() -> Self {
        PromptAlias(Self::PRODUCTION.to_string())
    }

    fn is_valid(alias: &str) -> bool {
        let charset_ok = !alias.is_empty()
            && alias
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        let looks_like_version = alias.len() > 1
            && alias.starts_with(['v', 'V'])
            && alias[1..].chars().all(|c| c.is_ascii_digit());

        charset_ok && !alias.eq_ignore_ascii_case("latest") && !looks_like_version
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PromptAlias {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a [`PromptUri`] points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptUriTarget {
    Version(u64),
    Alias(PromptAlias),
}

/// Reference to one prompt version: `prompts:/<name>/<version>` or
/// `prompts:/<name>@<alias>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptUri {
    pub name: String,
    pub target: PromptUriTarget,
}

impl PromptUri {
    pub fn version(name: impl Into<String>, version: u64) -> Self {
        Self {
            name: name.into(),
            target: PromptUriTarget::Version(version),
        }
    }

    pub fn alias(name: impl Into<String>, alias: PromptAlias) -> Self {
        Self {
            name: name.into(),
            target: PromptUriTarget::Alias(alias),
        }
    }
}

impl fmt::Display for PromptUri {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.target {
            PromptUriTarget::Version(v) => write!(f, "{}{}/{}", PROMPT_URI_SCHEME, self.name, v),
            PromptUriTarget::Alias(a) => write!(f, "{}{}@{}", PROMPT_URI_SCHEME, self.name, a),
        }
    }
}

impl FromStr for PromptUri {
    type Err = String;

    /// Parses a prompt reference
    ///
    /// # Example
    /// ```
    /// use prompt_seeder::domain::prompt::{PromptUri, PromptUriTarget};
    ///
    /// let uri: PromptUri = "prompts:/assistant/1".parse().unwrap();
    /// assert_eq!(uri.name, "assistant");
    /// assert_eq!(uri.target, PromptUriTarget::Version(1));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix(PROMPT_URI_SCHEME)
            .ok_or_else(|| format!("Invalid prompt URI '{}': expected '{}' prefix", s, PROMPT_URI_SCHEME))?;

        if let Some((name, alias)) = rest.split_once('@') {
            if name.is_empty() || name.contains('/') {
                return Err(format!("Invalid prompt URI '{}': bad prompt name", s));
            }
            let alias = PromptAlias::new(alias).map_err(|e| format!("Invalid prompt URI '{}': {}", s, e))?;
            return Ok(Self::alias(name, alias));
        }

        let (name, version) = rest
            .split_once('/')
            .ok_or_else(|| format!("Invalid prompt URI '{}': missing version or alias", s))?;
        if name.is_empty() {
            return Err(format!("Invalid prompt URI '{}': bad prompt name", s));
        }
        let version = version
            .parse::<u64>()
            .ok()
            .filter(|v| *v > 0)
            .ok_or_else(|| format!("Invalid prompt URI '{}': version must be a positive integer", s))?;

        Ok(Self::version(name, version))
    }
}
