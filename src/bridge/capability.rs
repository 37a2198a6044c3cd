//! Capability negotiation against the backend's declared table.

use crate::bridge::types::CapabilityTable;

impl CapabilityTable {
    /// Whether the backend declared exactly `expected` for `method`.
    ///
    /// The bridging parameter shape may change incompatibly between
    /// protocol versions, so negotiation is exact-match only: a missing
    /// entry, an older version and a newer version are all unsupported.
    pub fn supports(&self, method: &str, expected: &str) -> bool {
        self.version_of(method) == Some(expected)
    }
}
