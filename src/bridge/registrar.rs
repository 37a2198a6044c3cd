//! One-time startup sequence wiring the resolver into the consumer.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::bridge::error::RegistrationError;
use crate::bridge::resolver::BridgeResolver;
use crate::bridge::types::BridgeRegistration;
use crate::config::{
    CONSUMER_EXTENSION_ID, PROVIDER_API_VERSION, RESOLVE_CONTEXT_METHOD, SOURCE_LANGUAGE,
    SUPPORTED_PROTOCOL_VERSION,
};
use crate::document::DocumentStore;
use crate::host::{BackendChannel, DocumentSelector, ExtensionHost, ResolverRegistration};

/// Progress of the registration sequence.
///
/// `Aborted` is reachable from every non-terminal state; the state
/// reached before aborting is what the log line reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrarState {
    Idle,
    ConsumerActivating,
    ConsumerApiObtained,
    BackendActivating,
    CapabilityChecked,
    Registered,
    Aborted,
}

/// Drives the startup sequence: activate the consumer, obtain its
/// provider API, activate the backend companion, check the capability
/// table, register the resolver.
///
/// Runs once per process. Every failure path lands in `Aborted` with
/// nothing partially registered and no retry; the integration is then
/// simply absent for the rest of the process lifetime.
pub struct BridgeRegistrar {
    host: Arc<dyn ExtensionHost>,
    store: Arc<DocumentStore>,
    backend: Arc<dyn BackendChannel>,
    state: RegistrarState,
}

impl BridgeRegistrar {
    pub fn new(
        host: Arc<dyn ExtensionHost>,
        store: Arc<DocumentStore>,
        backend: Arc<dyn BackendChannel>,
    ) -> Self {
        Self {
            host,
            store,
            backend,
            state: RegistrarState::Idle,
        }
    }

    pub fn state(&self) -> RegistrarState {
        self.state
    }

    /// Runs the sequence to completion.
    ///
    /// `None` covers both the expected "integration not present"
    /// outcomes and unexpected activation failures; the two are told
    /// apart only by log level. Nothing here ever panics the host.
    pub async fn register(&mut self) -> Option<BridgeRegistration> {
        match self.try_register().await {
            Ok(registration) => {
                self.state = RegistrarState::Registered;
                info!(
                    provider_id = registration.provider_id(),
                    "context bridge registered"
                );
                Some(registration)
            }
            Err(err) => {
                let reached = self.state;
                self.state = RegistrarState::Aborted;
                if err.is_unavailable() {
                    debug!(state = ?reached, "context bridge unavailable: {err}");
                } else {
                    error!(state = ?reached, "context bridge registration failed: {err}");
                }
                None
            }
        }
    }

    async fn try_register(&mut self) -> Result<BridgeRegistration, RegistrationError> {
        self.state = RegistrarState::ConsumerActivating;
        let consumer = self
            .host
            .extension(CONSUMER_EXTENSION_ID)
            .ok_or(RegistrationError::ConsumerUnavailable)?;
        consumer.activate().await?;

        self.state = RegistrarState::ConsumerApiObtained;
        let api = consumer.provider_api(PROVIDER_API_VERSION).ok_or_else(|| {
            RegistrationError::ProviderApiUnavailable(PROVIDER_API_VERSION.to_string())
        })?;

        self.state = RegistrarState::BackendActivating;
        let capabilities = self.host.activate_backend().await?;

        self.state = RegistrarState::CapabilityChecked;
        if !capabilities.supports(RESOLVE_CONTEXT_METHOD, SUPPORTED_PROTOCOL_VERSION) {
            return Err(RegistrationError::CapabilityUnsupported {
                method: RESOLVE_CONTEXT_METHOD.to_string(),
                expected: SUPPORTED_PROTOCOL_VERSION.to_string(),
                found: capabilities
                    .version_of(RESOLVE_CONTEXT_METHOD)
                    .map(str::to_string),
            });
        }

        let resolver = Arc::new(BridgeResolver::new(
            Arc::clone(&self.store),
            Arc::clone(&self.backend),
        ));
        let registration = api.register_resolver(ResolverRegistration {
            id: CONSUMER_EXTENSION_ID.to_string(),
            selector: vec![DocumentSelector {
                language: SOURCE_LANGUAGE.to_string(),
            }],
            resolver,
        })?;

        Ok(registration)
    }
}
