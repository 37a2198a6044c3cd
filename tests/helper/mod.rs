//! Shared stubs for the bridge end-to-end tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use context_bridge::bridge::{
    BridgeParam, BridgeRegistration, CapabilityTable, ContextItem, HostError, ResolveError,
};
use context_bridge::host::{
    BackendChannel, ConsumerExtension, ContextResolver, ExtensionHost, ProviderApi,
    ResolverRegistration,
};

/// Backend stub that records every call and replies with canned items.
#[derive(Default)]
pub struct RecordingBackend {
    pub calls: Mutex<Vec<BridgeParam>>,
    items: Vec<ContextItem>,
}

impl RecordingBackend {
    pub fn with_items(items: Vec<ContextItem>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            items,
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl BackendChannel for RecordingBackend {
    async fn resolve_context(
        &self,
        params: BridgeParam,
        _token: CancellationToken,
    ) -> Result<Vec<ContextItem>, ResolveError> {
        self.calls.lock().unwrap().push(params);
        Ok(self.items.clone())
    }
}

/// Backend stub that never answers until its token is cancelled.
#[derive(Default)]
pub struct HangingBackend {
    pub calls: AtomicUsize,
}

#[async_trait]
impl BackendChannel for HangingBackend {
    async fn resolve_context(
        &self,
        _params: BridgeParam,
        token: CancellationToken,
    ) -> Result<Vec<ContextItem>, ResolveError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        token.cancelled().await;
        Err(ResolveError::Cancelled)
    }
}

/// Provider API stub remembering what was registered into it.
#[derive(Default)]
pub struct RecordingProviderApi {
    registered: Mutex<Option<ResolverRegistration>>,
}

impl RecordingProviderApi {
    pub fn registration(&self) -> Option<(String, Vec<String>)> {
        self.registered.lock().unwrap().as_ref().map(|r| {
            (
                r.id.clone(),
                r.selector.iter().map(|s| s.language.clone()).collect(),
            )
        })
    }

    pub fn resolver(&self) -> Option<Arc<dyn ContextResolver>> {
        self.registered
            .lock()
            .unwrap()
            .as_ref()
            .map(|r| Arc::clone(&r.resolver))
    }
}

impl ProviderApi for RecordingProviderApi {
    fn register_resolver(
        &self,
        registration: ResolverRegistration,
    ) -> Result<BridgeRegistration, HostError> {
        let handle = BridgeRegistration::new(registration.id.clone());
        *self.registered.lock().unwrap() = Some(registration);
        Ok(handle)
    }
}

/// Consumer extension stub exposing a "v1" provider API.
pub struct StubConsumer {
    api: Arc<RecordingProviderApi>,
    api_version: String,
    fail_activation: bool,
}

impl StubConsumer {
    pub fn new(api: Arc<RecordingProviderApi>) -> Self {
        Self {
            api,
            api_version: "v1".to_string(),
            fail_activation: false,
        }
    }

    pub fn with_api_version(mut self, version: &str) -> Self {
        self.api_version = version.to_string();
        self
    }

    pub fn failing_activation(mut self) -> Self {
        self.fail_activation = true;
        self
    }
}

#[async_trait]
impl ConsumerExtension for StubConsumer {
    async fn activate(&self) -> Result<(), HostError> {
        if self.fail_activation {
            Err(HostError::new("consumer activation blew up"))
        } else {
            Ok(())
        }
    }

    fn provider_api(&self, version: &str) -> Option<Arc<dyn ProviderApi>> {
        (version == self.api_version).then(|| self.api.clone() as Arc<dyn ProviderApi>)
    }
}

/// Extension host stub with an optional consumer and a fixed
/// capability table.
pub struct StubHost {
    consumer: Option<Arc<dyn ConsumerExtension>>,
    capabilities: CapabilityTable,
}

impl StubHost {
    pub fn new(
        consumer: Option<Arc<dyn ConsumerExtension>>,
        capabilities: CapabilityTable,
    ) -> Self {
        Self {
            consumer,
            capabilities,
        }
    }
}

#[async_trait]
impl ExtensionHost for StubHost {
    fn extension(&self, id: &str) -> Option<Arc<dyn ConsumerExtension>> {
        if id == context_bridge::config::CONSUMER_EXTENSION_ID {
            self.consumer.clone()
        } else {
            None
        }
    }

    async fn activate_backend(&self) -> Result<CapabilityTable, HostError> {
        Ok(self.capabilities.clone())
    }
}

/// Capability table declaring `context/resolveContext` at `version`.
pub fn capabilities(version: &str) -> CapabilityTable {
    [(
        context_bridge::config::RESOLVE_CONTEXT_METHOD.to_string(),
        version.to_string(),
    )]
    .into_iter()
    .collect()
}
