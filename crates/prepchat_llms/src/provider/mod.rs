//! Provider trait and registry.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::types::{ModelRequest, ProviderResponse};

/// Opaque handle to a configured safety filter. The core never inspects the
/// values; they ride along to the provider call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardrailConfig {
    pub identifier: String,
    pub version: String,
}

impl GuardrailConfig {
    pub fn new(identifier: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            version: version.into(),
        }
    }
}

/// A model endpoint that can answer one assembled request.
#[async_trait]
pub trait Provider: Send + Sync {
    fn provider_id(&self) -> &str;

    /// Issue one blocking model call. `guardrail` selects the filtered call
    /// path; `None` is the direct path. A rejected guardrail configuration
    /// surfaces as [`Error::GuardrailUnavailable`] so the driver can fall
    /// back to the direct path.
    async fn generate(
        &self,
        request: &ModelRequest,
        guardrail: Option<&GuardrailConfig>,
    ) -> Result<ProviderResponse>;
}

/// Registry of provider implementations, keyed by provider ID.
#[derive(Default, Clone)]
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn Provider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider under the given ID. Returns `self` for chaining.
    pub fn register<P: Provider + 'static>(mut self, id: impl Into<String>, provider: P) -> Self {
        self.providers.insert(id.into(), Arc::new(provider));
        self
    }

    /// Look up a provider by ID.
    pub fn get_provider(&self, id: &str) -> Result<Arc<dyn Provider>> {
        self.providers
            .get(id)
            .cloned()
            .ok_or_else(|| Error::ProviderNotFound(id.to_string()))
    }

    /// List all registered provider IDs.
    pub fn list_providers(&self) -> Vec<String> {
        self.providers.keys().cloned().collect()
    }
}
