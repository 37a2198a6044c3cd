//! Types crossing the bridge in either direction.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_lsp::lsp_types::{Position, Url};

/// Editor-agnostic reference to a spot in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentReference {
    pub uri: Url,
    pub byte_offset: usize,
}

/// One consumer-initiated ask for context, borrowed by the bridge only
/// long enough to translate it.
#[derive(Debug, Clone)]
pub struct ResolveRequest {
    pub document: DocumentReference,
    /// Correlates this ask with one in-flight completion.
    pub completion_id: String,
    /// Advisory budget forwarded to the backend; not enforced locally.
    pub time_budget_millis: u64,
}

/// Document identifier in the backend's local-filesystem form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentIdentifier {
    pub path: String,
}

/// Parameters of the forwarded `context/resolveContext` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeParam {
    pub document_identifier: DocumentIdentifier,
    pub position: Position,
    pub completion_id: String,
    pub time_budget_millis: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension_data: Option<Value>,
}

/// One unit of semantic information returned by the backend.
///
/// The shape is owned by the backend and the consumer; the bridge
/// passes it through unmodified and in the order received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextItem(pub Value);

/// Snapshot of the backend's declared bridging capabilities.
///
/// Exposed once by the backend's companion extension at activation;
/// never refreshed afterwards.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct CapabilityTable {
    methods: HashMap<String, String>,
}

impl CapabilityTable {
    pub fn new(methods: HashMap<String, String>) -> Self {
        Self { methods }
    }

    /// Version string the backend declared for `method`, if any.
    pub fn version_of(&self, method: &str) -> Option<&str> {
        self.methods.get(method).map(|v| v.as_str())
    }
}

impl FromIterator<(String, String)> for CapabilityTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            methods: iter.into_iter().collect(),
        }
    }
}

/// Handle proving the resolver is registered with the consumer runtime.
///
/// Created at most once per process; its release is managed by the
/// surrounding extension context, not by the bridge.
#[derive(Debug)]
pub struct BridgeRegistration {
    provider_id: String,
}

impl BridgeRegistration {
    pub fn new(provider_id: impl Into<String>) -> Self {
        Self {
            provider_id: provider_id.into(),
        }
    }

    pub fn provider_id(&self) -> &str {
        &self.provider_id
    }
}
