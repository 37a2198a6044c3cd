//! The resolver callback handed to the consumer runtime.

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::bridge::error::ResolveError;
use crate::bridge::translate::translate;
use crate::bridge::types::{ContextItem, ResolveRequest};
use crate::document::DocumentStore;
use crate::host::{BackendChannel, ContextResolver};

/// Answers one resolve request by translating it and forwarding it to
/// the backend.
///
/// Each invocation is stateless over its own request; concurrent
/// invocations share only the immutable store and channel handles, so
/// no locking happens here.
pub struct BridgeResolver {
    store: Arc<DocumentStore>,
    backend: Arc<dyn BackendChannel>,
}

impl BridgeResolver {
    pub fn new(store: Arc<DocumentStore>, backend: Arc<dyn BackendChannel>) -> Self {
        Self { store, backend }
    }
}

#[async_trait]
impl ContextResolver for BridgeResolver {
    async fn resolve(
        &self,
        request: ResolveRequest,
        token: CancellationToken,
    ) -> Result<Vec<ContextItem>, ResolveError> {
        // A stale document is a normal outcome, answered without
        // contacting the backend.
        let Some(params) = translate(&self.store, &request) else {
            return Ok(Vec::new());
        };

        debug!(
            completion_id = %params.completion_id,
            path = %params.document_identifier.path,
            "forwarding resolve to backend"
        );
        self.backend.resolve_context(params, token).await
    }
}
