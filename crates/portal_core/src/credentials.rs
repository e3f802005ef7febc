//! Remembered login credentials.
//!
//! Credentials are stored as plaintext strings under `<role>_pass`, the same
//! layout the browser portal used. Nothing here hashes or encrypts them.

use shared::{domain::Role, PortalError, PortalResult};
use storage::{credential_key, KeyValueStore};
use tracing::warn;

pub fn remember(store: &mut dyn KeyValueStore, role: Role, credential: &str) -> PortalResult<()> {
    let key = credential_key(role);
    warn!(role = role.code(), "storing remembered credential in plaintext");
    store
        .set_string(&key, credential.to_string())
        .map_err(|err| PortalError::StorageWrite {
            key,
            message: err.to_string(),
        })
}

pub fn saved(store: &dyn KeyValueStore, role: Role) -> PortalResult<Option<String>> {
    let key = credential_key(role);
    store.get_string(&key).map_err(|err| PortalError::StorageRead {
        key,
        message: err.to_string(),
    })
}

pub fn forget(store: &mut dyn KeyValueStore, role: Role) -> PortalResult<()> {
    let key = credential_key(role);
    store.remove(&key).map_err(|err| PortalError::StorageWrite {
        key,
        message: err.to_string(),
    })
}
