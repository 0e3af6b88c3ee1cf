use api::error::{Error, Result};
use api::store::{KeyValueStore, MemoryStore};
use std::rc::Rc;

/// `window.localStorage`, or an in-memory map where there is none
/// (server rendering, private mode, native targets).
pub struct BrowserStorage {
    #[cfg(target_arch = "wasm32")]
    local: Option<web_sys::Storage>,
    fallback: MemoryStore,
}

impl BrowserStorage {
    pub fn open() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let local = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
            if local.is_none() {
                tracing::warn!("storage: localStorage unavailable, using memory");
            }
            Self {
                local,
                fallback: MemoryStore::new(),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        Self {
            fallback: MemoryStore::new(),
        }
    }

    pub fn is_persistent(&self) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            self.local.is_some()
        }

        #[cfg(not(target_arch = "wasm32"))]
        false
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        if let Some(local) = &self.local {
            return local.get_item(key).ok().flatten();
        }
        self.fallback.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        #[cfg(target_arch = "wasm32")]
        if let Some(local) = &self.local {
            // Quota errors surface here.
            return local.set_item(key, value).map_err(|e| Error::Storage {
                key: key.to_string(),
                message: format!("{e:?}"),
            });
        }
        self.fallback.set(key, value).map_err(|e| match e {
            Error::Storage { .. } => e,
            other => Error::Storage {
                key: key.to_string(),
                message: other.to_string(),
            },
        })
    }

    fn remove(&self, key: &str) {
        #[cfg(target_arch = "wasm32")]
        if let Some(local) = &self.local {
            let _ = local.remove_item(key);
            return;
        }
        self.fallback.remove(key);
    }
}

/// Cheaply clonable handle shared through context.
#[derive(Clone)]
pub struct SharedStore(Rc<BrowserStorage>);

impl SharedStore {
    pub fn open() -> Self {
        Self(Rc::new(BrowserStorage::open()))
    }

    pub fn get(&self) -> &dyn KeyValueStore {
        self.0.as_ref()
    }

    pub fn is_persistent(&self) -> bool {
        self.0.is_persistent()
    }
}

impl PartialEq for SharedStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use api::store::{keys, load_json, save_json};

    #[test]
    fn native_build_falls_back_to_memory() {
        let store = SharedStore::open();
        assert!(!store.is_persistent());
        save_json(store.get(), keys::SAVED_WORDS, &vec!["hola"]).unwrap();
        let words: Vec<String> = load_json(store.get(), keys::SAVED_WORDS);
        assert_eq!(words, vec!["hola".to_string()]);
        store.get().remove(keys::SAVED_WORDS);
        assert!(store.get().get(keys::SAVED_WORDS).is_none());
    }

    #[test]
    fn clones_share_the_same_backing_store() {
        let a = SharedStore::open();
        let b = a.clone();
        a.get().set(keys::LAST_SYNC, "1").unwrap();
        assert_eq!(b.get().get(keys::LAST_SYNC).as_deref(), Some("1"));
        assert!(a == b);
        assert!(a != SharedStore::open());
    }
}
