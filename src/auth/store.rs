//! Credential persistence.
//!
//! The credential is kept as a raw string under one fixed localStorage key,
//! surviving reloads until logout removes it or a new login overwrites it.
//! Storage is abstracted behind a small trait so the token helpers and the
//! route guard can run against an in-memory store in native tests. Requires
//! a browser environment for the real store.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

/// localStorage key holding the raw credential string. No wrapper structure.
pub const CREDENTIAL_KEY: &str = "jwt_token";

/// Durable key-value storage for the session credential.
pub trait CredentialStore {
    /// The stored credential, if any.
    fn get(&self) -> Option<String>;

    /// Persist `credential`, overwriting any prior value. No validation.
    fn set(&self, credential: &str);

    /// Remove the stored credential. A no-op when nothing is stored.
    fn remove(&self);
}

/// Store backed by the browser's `localStorage`.
///
/// Outside a browser (SSR, native tests) reads are empty and writes are
/// dropped, so session checks fail closed.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl CredentialStore for BrowserStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let window = web_sys::window()?;
            match window.local_storage() {
                Ok(Some(storage)) => storage.get_item(CREDENTIAL_KEY).ok().flatten(),
                _ => None,
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set(&self, credential: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(CREDENTIAL_KEY, credential);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credential;
        }
    }

    fn remove(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.remove_item(CREDENTIAL_KEY);
                }
            }
        }
    }
}

/// In-memory store for unit tests and non-browser callers.
#[derive(Debug, Default)]
pub struct MemoryStore(std::cell::RefCell<Option<String>>);

impl CredentialStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn set(&self, credential: &str) {
        *self.0.borrow_mut() = Some(credential.to_owned());
    }

    fn remove(&self) {
        *self.0.borrow_mut() = None;
    }
}
