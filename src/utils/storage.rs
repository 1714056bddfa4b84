//! Session persistence in `localStorage`.

use alfdocs_core::models::Session;
use alfdocs_core::{SessionStore, StorageError};

use crate::config::SessionKeys;
use crate::utils::dom;

/// Keeps the ticket and username under two `localStorage` keys, so the
/// session survives reloads.
#[derive(Clone, Debug)]
pub struct LocalStorageStore {
    keys: SessionKeys,
}

impl LocalStorageStore {
    pub fn new(keys: SessionKeys) -> Self {
        Self { keys }
    }
}

impl SessionStore for LocalStorageStore {
    fn get(&self) -> Session {
        let Some(storage) = dom::local_storage() else {
            return Session::default();
        };
        Session {
            ticket: storage.get_item(&self.keys.ticket_key).ok().flatten(),
            username: storage.get_item(&self.keys.user_key).ok().flatten(),
        }
    }

    fn set(&self, ticket: &str, username: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        write_pair(
            |key, value| storage.set_item(key, value).is_ok(),
            |key| {
                let _ = storage.remove_item(key);
            },
            (&self.keys.ticket_key, ticket),
            (&self.keys.user_key, username),
        )
    }

    fn clear(&self) {
        if let Some(storage) = dom::local_storage() {
            let _ = storage.remove_item(&self.keys.ticket_key);
            let _ = storage.remove_item(&self.keys.user_key);
        }
    }
}

/// Writes both entries or neither: a failed second write removes the first.
fn write_pair(
    mut set: impl FnMut(&str, &str) -> bool,
    mut remove: impl FnMut(&str),
    first: (&str, &str),
    second: (&str, &str),
) -> Result<(), StorageError> {
    if !set(first.0, first.1) {
        return Err(StorageError::WriteFailed);
    }
    if !set(second.0, second.1) {
        remove(first.0);
        return Err(StorageError::WriteFailed);
    }
    Ok(())
}


#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn store() -> LocalStorageStore {
        LocalStorageStore::new(SessionKeys {
            ticket_key: "test_alf_ticket".to_string(),
            user_key: "test_alf_user".to_string(),
        })
    }

    #[wasm_bindgen_test]
    fn test_round_trip_and_clear() {
        let store = store();
        store.clear();
        assert_eq!(store.get(), Session::default());

        store.set("TICKET_w", "ana").unwrap();
        assert_eq!(store.get(), Session::new("TICKET_w", "ana"));

        store.clear();
        assert!(!store.get().is_signed_in());
    }
}
