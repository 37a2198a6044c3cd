//! Traits at the external seams of the bridge.
//!
//! The host editor, the consumer extension and the backend transport
//! are collaborators, not part of this crate; everything the bridge
//! needs from them is captured here.

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::bridge::error::{HostError, ResolveError};
use crate::bridge::types::{
    BridgeParam, BridgeRegistration, CapabilityTable, ContextItem, ResolveRequest,
};

/// Host-editor view of installed extensions.
#[async_trait]
pub trait ExtensionHost: Send + Sync {
    /// Looks up an installed extension by identifier. `None` when the
    /// extension is simply not installed.
    fn extension(&self, id: &str) -> Option<Arc<dyn ConsumerExtension>>;

    /// Activates the backend's companion extension and returns the
    /// capability table it exports.
    async fn activate_backend(&self) -> Result<CapabilityTable, HostError>;
}

/// The consumer (completion assistant) extension.
#[async_trait]
pub trait ConsumerExtension: Send + Sync {
    async fn activate(&self) -> Result<(), HostError>;

    /// The consumer's versioned provider API. `None` when this version
    /// is unknown to the installed consumer.
    fn provider_api(&self, version: &str) -> Option<Arc<dyn ProviderApi>>;
}

/// Consumer-runtime surface the bridge registers its resolver into.
pub trait ProviderApi: Send + Sync {
    fn register_resolver(
        &self,
        registration: ResolverRegistration,
    ) -> Result<BridgeRegistration, HostError>;
}

/// Resolver callback contract the consumer runtime invokes, possibly
/// concurrently, once per in-flight completion.
#[async_trait]
pub trait ContextResolver: Send + Sync {
    async fn resolve(
        &self,
        request: ResolveRequest,
        token: CancellationToken,
    ) -> Result<Vec<ContextItem>, ResolveError>;
}

/// The one logical remote call to the backend language service.
///
/// Cancelling `token` is expected to abort the call backend-side; the
/// bridge adds no timeout or retry of its own.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BackendChannel: Send + Sync {
    async fn resolve_context(
        &self,
        params: BridgeParam,
        token: CancellationToken,
    ) -> Result<Vec<ContextItem>, ResolveError>;
}

/// Scopes the resolver to documents of one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSelector {
    pub language: String,
}

/// Everything the consumer needs to wire the resolver in.
pub struct ResolverRegistration {
    pub id: String,
    pub selector: Vec<DocumentSelector>,
    pub resolver: Arc<dyn ContextResolver>,
}
