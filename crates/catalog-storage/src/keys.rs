//! Storage key constants.

/// Keys persisted by the client.
pub struct StorageKeys;

impl StorageKeys {
    /// Bearer token of the admin session
    pub const TOKEN: &'static str = "_token";

    /// Last category filter selected on the listing
    pub const LAST_TAG: &'static str = "tag";
}
