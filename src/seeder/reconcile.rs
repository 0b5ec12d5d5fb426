use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::prompt::{PromptAlias, PromptDefinition, PromptUri, SeedState};
use crate::domain::repositories::PromptRegistry;

use super::errors::{SeedError, SeedResult};
use super::report::{SeedEntry, SeedReport};
use super::reporter::SeedReporter;

/// Version probed to decide whether a prompt exists
const PROBE_VERSION: u64 = 1;

/// How a failed existence lookup is interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LookupPolicy {
    /// Any lookup error counts as "absent" and the prompt is (re)created
    #[default]
    TreatErrorsAsAbsent,
    /// Only a real not-found counts as absent; other errors abort the run
    Strict,
}

/// Idempotently reconciles prompt definitions against a registry
pub struct Seeder {
    registry: Arc<dyn PromptRegistry>,
    reporter: Arc<dyn SeedReporter>,
    lookup_policy: LookupPolicy,
    alias: PromptAlias,
}

impl Seeder {
    pub fn new(registry: Arc<dyn PromptRegistry>, reporter: Arc<dyn SeedReporter>) -> Self {
        Self {
            registry,
            reporter,
            lookup_policy: LookupPolicy::default(),
            alias: PromptAlias::production(),
        }
    }

    pub fn with_lookup_policy(mut self, policy: LookupPolicy) -> Self {
        self.lookup_policy = policy;
        self
    }

    /// Check whether the first version of `name` exists
    ///
    /// Under [`LookupPolicy::TreatErrorsAsAbsent`] this never fails: a
    /// transient error looks the same as a missing prompt.
    #[tracing::instrument(skip(self))]
    pub async fn exists_in_registry(&self, name: &str) -> SeedResult<bool> {
        let uri = PromptUri::version(name, PROBE_VERSION);

        match self.registry.load(&uri).await {
            Ok(found) => Ok(found.is_some()),
            Err(e) => match self.lookup_policy {
                LookupPolicy::TreatErrorsAsAbsent => {
                    debug!(%uri, error = %e, "Lookup failed, treating prompt as absent");
                    Ok(false)
                }
                LookupPolicy::Strict => Err(SeedError::Lookup {
                    name: name.to_string(),
                    source: e,
                }),
            },
        }
    }

    /// Ensure every definition exists in the registry with the alias set
    ///
    /// Processes definitions in order and stops at the first registration
    /// or alias failure.
    pub async fn reconcile(&self, definitions: &[PromptDefinition]) -> SeedResult<SeedReport> {
        let mut report = SeedReport::default();

        for definition in definitions {
            let entry = self.reconcile_one(definition).await?;
            report.entries.push(entry);
        }

        info!(
            created = report.created().count(),
            skipped = report.skipped().count(),
            "Seeding complete"
        );
        self.reporter.on_complete(&report);

        Ok(report)
    }

    #[tracing::instrument(skip(self, definition), fields(prompt = %definition.name))]
    async fn reconcile_one(&self, definition: &PromptDefinition) -> SeedResult<SeedEntry> {
        let name = definition.name.as_str();
        let mut entry = SeedEntry::new(name);

        if self.exists_in_registry(name).await? {
            info!("Prompt already exists, skipping");
            entry.advance(SeedState::Present);
            self.reporter.on_skip(name);
            return Ok(entry);
        }

        let created = self
            .registry
            .register(definition)
            .await
            .map_err(|e| SeedError::Registration {
                name: name.to_string(),
                source: e,
            })?;
        info!(version = created.version, "Registered prompt");
        entry.advance(SeedState::Created);
        entry.version = Some(created.version);
        self.reporter.on_created(name, created.version);

        self.registry
            .set_alias(name, &self.alias, created.version)
            .await
            .map_err(|e| SeedError::Alias {
                name: name.to_string(),
                alias: self.alias.to_string(),
                version: created.version,
                source: e,
            })?;
        info!(alias = %self.alias, version = created.version, "Alias set");
        entry.advance(SeedState::Aliased);
        self.reporter.on_alias(name, &self.alias, created.version);

        Ok(entry)
    }
}
