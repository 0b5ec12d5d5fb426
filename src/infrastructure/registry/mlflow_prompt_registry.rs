use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use tracing::debug;

use crate::config::TrackingCredentials;
use crate::domain::prompt::{PromptAlias, PromptDefinition, PromptUri, PromptUriTarget, PromptVersion};
use crate::domain::repositories::{PromptRegistry, RegistryError};

use super::wire::{
    CreateModelVersionRequest, CreateRegisteredModelRequest, ErrorBody, ModelVersionResponse,
    RegisteredModelResponse, SetAliasRequest, RESOURCE_ALREADY_EXISTS, RESOURCE_DOES_NOT_EXIST,
};

const API_PREFIX: &str = "api/2.0/mlflow";

/// MLflow tracking server implementation of PromptRegistry
#[derive(Debug, Clone)]
pub struct MlflowPromptRegistry {
    base_url: String,
    credentials: Option<TrackingCredentials>,
    http_client: Client,
}

impl MlflowPromptRegistry {
    /// Creates a registry client for the given tracking URI
    pub fn new(
        tracking_uri: &str,
        credentials: Option<TrackingCredentials>,
    ) -> Result<Self, RegistryError> {
        let http_client = Client::builder()
            .build()
            .map_err(|e| RegistryError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: tracking_uri.trim_end_matches('/').to_string(),
            credentials,
            http_client,
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}/{}", self.base_url, API_PREFIX, endpoint)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.credentials {
            Some(TrackingCredentials::Token(token)) => request.bearer_auth(token),
            Some(TrackingCredentials::Basic { username, password }) => {
                request.basic_auth(username, Some(password))
            }
            None => request,
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T, RegistryError> {
        debug!(endpoint, ?query, "GET");
        let request = self.http_client.get(self.url(endpoint)).query(query);
        self.send(request).await
    }

    async fn post<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, RegistryError> {
        debug!(endpoint, "POST");
        let request = self.http_client.post(self.url(endpoint)).json(body);
        self.send(request).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, RegistryError> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| RegistryError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RegistryError::Transport(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            let error: ErrorBody = serde_json::from_str(&body).unwrap_or_else(|_| ErrorBody {
                message: body.clone(),
                ..ErrorBody::default()
            });
            return Err(RegistryError::Api {
                status: status.as_u16(),
                error_code: error.error_code,
                message: error.message,
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| RegistryError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }

    async fn create_prompt_if_missing(&self, name: &str) -> Result<(), RegistryError> {
        let created: Result<IgnoredAny, _> = self
            .post(
                "registered-models/create",
                &CreateRegisteredModelRequest::prompt(name),
            )
            .await;

        match created {
            Ok(_) => Ok(()),
            Err(RegistryError::Api { ref error_code, .. }) if error_code == RESOURCE_ALREADY_EXISTS => {
                self.ensure_is_prompt(name).await?;
                debug!(name, "Prompt already registered, appending version");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// The name may belong to an ordinary model; never append prompt versions to one
    async fn ensure_is_prompt(&self, name: &str) -> Result<(), RegistryError> {
        let existing: RegisteredModelResponse = self
            .get("registered-models/get", &[("name", name)])
            .await?;

        if existing.registered_model.is_prompt() {
            Ok(())
        } else {
            Err(RegistryError::NotAPrompt(name.to_string()))
        }
    }
}

fn is_not_found(error: &RegistryError) -> bool {
    matches!(
        error,
        RegistryError::Api { status: 404, .. }
    ) || matches!(
        error,
        RegistryError::Api { error_code, .. } if error_code == RESOURCE_DOES_NOT_EXIST
    )
}

#[async_trait]
impl PromptRegistry for MlflowPromptRegistry {
    #[tracing::instrument(skip(self, uri), fields(uri = %uri))]
    async fn load(&self, uri: &PromptUri) -> Result<Option<PromptVersion>, RegistryError> {
        let response: Result<ModelVersionResponse, _> = match &uri.target {
            PromptUriTarget::Version(version) => {
                let version = version.to_string();
                self.get(
                    "model-versions/get",
                    &[("name", uri.name.as_str()), ("version", version.as_str())],
                )
                .await
            }
            PromptUriTarget::Alias(alias) => {
                self.get(
                    "registered-models/alias",
                    &[("name", uri.name.as_str()), ("alias", alias.as_str())],
                )
                .await
            }
        };

        match response {
            Ok(found) => PromptVersion::try_from(found.model_version).map(Some),
            Err(e) if is_not_found(&e) => Ok(None),
            Err(e) => Err(e),
        }
    }

    #[tracing::instrument(skip(self, definition), fields(prompt = %definition.name))]
    async fn register(&self, definition: &PromptDefinition) -> Result<PromptVersion, RegistryError> {
        self.create_prompt_if_missing(&definition.name).await?;

        let created: ModelVersionResponse = self
            .post(
                "model-versions/create",
                &CreateModelVersionRequest::from(definition),
            )
            .await?;

        PromptVersion::try_from(created.model_version)
    }

    #[tracing::instrument(skip(self))]
    async fn set_alias(
        &self,
        name: &str,
        alias: &PromptAlias,
        version: u64,
    ) -> Result<(), RegistryError> {
        let _: IgnoredAny = self
            .post(
                "registered-models/alias",
                &SetAliasRequest {
                    name,
                    alias: alias.as_str(),
                    version: version.to_string(),
                },
            )
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slash() {
        let registry = MlflowPromptRegistry::new("http://localhost:5050/", None).unwrap();
        assert_eq!(
            registry.url("model-versions/get"),
            "http://localhost:5050/api/2.0/mlflow/model-versions/get"
        );
    }

    #[test]
    fn url_keeps_path_prefix() {
        let registry = MlflowPromptRegistry::new("https://example.com/mlflow", None).unwrap();
        assert_eq!(
            registry.url("registered-models/alias"),
            "https://example.com/mlflow/api/2.0/mlflow/registered-models/alias"
        );
    }

    #[test]
    fn not_found_detection() {
        let by_status = RegistryError::Api {
            status: 404,
            error_code: String::new(),
            message: String::new(),
        };
        let by_code = RegistryError::Api {
            status: 400,
            error_code: RESOURCE_DOES_NOT_EXIST.to_string(),
            message: String::new(),
        };
        let server_error = RegistryError::Api {
            status: 500,
            error_code: "INTERNAL_ERROR".to_string(),
            message: String::new(),
        };

        assert!(is_not_found(&by_status));
        assert!(is_not_found(&by_code));
        assert!(!is_not_found(&server_error));
        assert!(!is_not_found(&RegistryError::Transport("refused".to_string())));
    }
}
