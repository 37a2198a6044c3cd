//! Open-document tracking and lookup.

use std::sync::{Arc, RwLock};

use dashmap::DashMap;
use tower_lsp::lsp_types::{Position, Url};

use crate::document::text::LineIndex;

/// Snapshot of one open document the bridge can read at resolve time.
#[derive(Debug)]
pub struct Document {
    uri: Url,
    line_index: LineIndex,
}

impl Document {
    pub fn new(uri: Url, source: String) -> Self {
        Self {
            uri,
            line_index: LineIndex::new(source),
        }
    }

    pub fn uri(&self) -> &Url {
        &self.uri
    }

    pub fn source(&self) -> &str {
        self.line_index.source()
    }

    /// Position of `byte_offset` under this document's own conversion
    /// semantics. Out-of-range offsets clamp to the document end.
    pub fn offset_to_position(&self, byte_offset: usize) -> Position {
        self.line_index.offset_to_position(byte_offset)
    }
}

/// Tracks currently open documents and which one is active.
///
/// The host feeds state in through `open`/`close`/`set_active`; the
/// bridge only ever reads via `locate`.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: DashMap<Url, Arc<Document>>,
    active: RwLock<Option<Url>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens or replaces a document snapshot.
    pub fn open(&self, uri: Url, source: String) -> Arc<Document> {
        let document = Arc::new(Document::new(uri.clone(), source));
        self.documents.insert(uri, Arc::clone(&document));
        document
    }

    pub fn close(&self, uri: &Url) {
        self.documents.remove(uri);
        let mut active = self.active.write().unwrap_or_else(|e| e.into_inner());
        if active.as_ref() == Some(uri) {
            *active = None;
        }
    }

    /// Marks the document the editor currently focuses, if any.
    pub fn set_active(&self, uri: Option<Url>) {
        let mut active = self.active.write().unwrap_or_else(|e| e.into_inner());
        *active = uri;
    }

    /// Finds the open document with exactly this URI.
    ///
    /// The active document is checked first; otherwise all tracked
    /// documents are searched. `None` means the document was closed in
    /// the meantime, which callers treat as a normal outcome.
    pub fn locate(&self, uri: &Url) -> Option<Arc<Document>> {
        let active = self.active.read().unwrap_or_else(|e| e.into_inner());
        if active.as_ref() == Some(uri) {
            if let Some(document) = self.documents.get(uri) {
                return Some(Arc::clone(&document));
            }
        }
        drop(active);

        self.documents
            .iter()
            .find(|entry| entry.key() == uri)
            .map(|entry| Arc::clone(entry.value()))
    }
}
