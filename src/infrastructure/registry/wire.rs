// MLflow REST payloads
//
// Prompts are registered models tagged as prompts; each prompt version is a
// model version whose template lives in a tag.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::prompt::{PromptDefinition, PromptVersion};
use crate::domain::repositories::RegistryError;

pub const IS_PROMPT_TAG_KEY: &str = "mlflow.prompt.is_prompt";
pub const PROMPT_TEXT_TAG_KEY: &str = "mlflow.prompt.text";
pub const PROMPT_TYPE_TAG_KEY: &str = "_mlflow_prompt_type";
pub const PROMPT_TYPE_TEXT: &str = "text";
/// Prompt versions have no artifact; the registry still requires a source
pub const PROMPT_SOURCE: &str = "dummy-source";

pub const RESOURCE_DOES_NOT_EXIST: &str = "RESOURCE_DOES_NOT_EXIST";
pub const RESOURCE_ALREADY_EXISTS: &str = "RESOURCE_ALREADY_EXISTS";

#[derive(Debug, Serialize)]
pub struct Tag<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

#[derive(Debug, Serialize)]
pub struct CreateRegisteredModelRequest<'a> {
    pub name: &'a str,
    pub tags: Vec<Tag<'a>>,
}

impl<'a> CreateRegisteredModelRequest<'a> {
    pub fn prompt(name: &'a str) -> Self {
        Self {
            name,
            tags: vec![Tag {
                key: IS_PROMPT_TAG_KEY,
                value: "true",
            }],
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateModelVersionRequest<'a> {
    pub name: &'a str,
    pub source: &'a str,
    pub description: &'a str,
    pub tags: Vec<Tag<'a>>,
}

impl<'a> From<&'a PromptDefinition> for CreateModelVersionRequest<'a> {
    fn from(definition: &'a PromptDefinition) -> Self {
        let mut tags = vec![
            Tag {
                key: IS_PROMPT_TAG_KEY,
                value: "true",
            },
            Tag {
                key: PROMPT_TEXT_TAG_KEY,
                value: &definition.template,
            },
            Tag {
                key: PROMPT_TYPE_TAG_KEY,
                value: PROMPT_TYPE_TEXT,
            },
        ];
        tags.extend(definition.tags.iter().map(|(key, value)| Tag { key, value }));

        Self {
            name: &definition.name,
            source: PROMPT_SOURCE,
            description: &definition.commit_message,
            tags,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SetAliasRequest<'a> {
    pub name: &'a str,
    pub alias: &'a str,
    pub version: String,
}

#[derive(Debug, Deserialize)]
pub struct ModelVersionResponse {
    pub model_version: ModelVersion,
}

#[derive(Debug, Deserialize)]
pub struct ModelVersion {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<OwnedTag>,
    #[serde(default)]
    pub aliases: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RegisteredModelResponse {
    pub registered_model: RegisteredModel,
}

#[derive(Debug, Deserialize)]
pub struct RegisteredModel {
    #[serde(default)]
    pub tags: Vec<OwnedTag>,
}

impl RegisteredModel {
    pub fn is_prompt(&self) -> bool {
        self.tags
            .iter()
            .any(|t| t.key == IS_PROMPT_TAG_KEY && t.value == "true")
    }
}

#[derive(Debug, Deserialize)]
pub struct OwnedTag {
    pub key: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error_code: String,
    #[serde(default)]
    pub message: String,
}

fn is_reserved_tag(key: &str) -> bool {
    key.starts_with("mlflow.") || key.starts_with("_mlflow")
}

impl TryFrom<ModelVersion> for PromptVersion {
    type Error = RegistryError;

    fn try_from(mv: ModelVersion) -> Result<Self, Self::Error> {
        let mut tags: BTreeMap<String, String> =
            mv.tags.into_iter().map(|t| (t.key, t.value)).collect();

        if tags.get(IS_PROMPT_TAG_KEY).map(String::as_str) != Some("true") {
            return Err(RegistryError::NotAPrompt(mv.name));
        }
        let template = tags.remove(PROMPT_TEXT_TAG_KEY).ok_or_else(|| {
            RegistryError::InvalidResponse(format!(
                "prompt '{}' v{} has no template",
                mv.name, mv.version
            ))
        })?;
        let version = mv.version.parse::<u64>().map_err(|_| {
            RegistryError::InvalidResponse(format!(
                "prompt '{}' has non-numeric version '{}'",
                mv.name, mv.version
            ))
        })?;
        tags.retain(|key, _| !is_reserved_tag(key));

        Ok(PromptVersion {
            name: mv.name,
            version,
            template,
            commit_message: mv.description.filter(|d| !d.is_empty()),
            tags,
            aliases: mv.aliases,
        })
    }
}
