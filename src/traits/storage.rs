//! Durable key-value storage trait.
//!
//! The application persists two values between runs: the logged-in
//! username and the last profile the operator looked at. Both live behind
//! this trait so the session and profile logic can be tested without
//! touching the file system.

use crate::error::StoreError;

/// Well-known storage keys.
pub mod keys {
    /// Username of the authenticated operator.
    pub const USER: &str = "user";
    /// JSON payload of the most recently viewed profile.
    pub const LAST_PROFILE: &str = "lastProfile";
}

/// Trait for durable string key-value storage.
///
/// Values survive process restarts. There is no expiry and no encryption.
pub trait KeyValueStore: Send + Sync {
    /// Read a value. `Ok(None)` when the key was never written or was removed.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value, overwriting any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a value. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
