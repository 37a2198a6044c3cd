//! Resolve-request to backend-parameter translation.

use tower_lsp::lsp_types::Url;
use tracing::debug;

use crate::bridge::types::{BridgeParam, DocumentIdentifier, ResolveRequest};
use crate::document::DocumentStore;

/// Converts a resolve request into the backend's parameter shape.
///
/// Returns `None` when the referenced document is no longer open; the
/// caller answers with an empty result instead of contacting the
/// backend. The position is computed from the document snapshot as it
/// is right now, with no version check against the snapshot the
/// consumer computed its offset from.
pub fn translate(store: &DocumentStore, request: &ResolveRequest) -> Option<BridgeParam> {
    let Some(document) = store.locate(&request.document.uri) else {
        debug!(uri = %request.document.uri, "document not open, nothing to resolve");
        return None;
    };

    let position = document.offset_to_position(request.document.byte_offset);

    Some(BridgeParam {
        document_identifier: DocumentIdentifier {
            path: local_path(document.uri()),
        },
        position,
        completion_id: request.completion_id.clone(),
        time_budget_millis: request.time_budget_millis,
        extension_data: None,
    })
}

/// Local-filesystem form of the URI. Non-file URIs keep their path
/// part as-is.
fn local_path(uri: &Url) -> String {
    uri.to_file_path()
        .map(|path| path.to_string_lossy().into_owned())
        .unwrap_or_else(|_| uri.path().to_string())
}
