//! Document layer
//! - store.rs: Document snapshots and the open-document store
//! - text.rs: Byte-offset to line/character conversion

pub mod store;
pub mod text;

pub use store::{Document, DocumentStore};
pub use text::LineIndex;
