use std::marker::PhantomData;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::error;

use crate::error::StoreError;
use crate::kv::Kv;

/// Whole-collection JSON persistence over a single key-value slot.
///
/// Every mutation in the app is "mutate in memory, write the whole sequence
/// back", so the contract is deliberately blunt: `save` overwrites the slot,
/// `load` returns whatever is there. Failures never escape the store — a
/// failed write is logged and dropped, a missing or unreadable slot reads as
/// empty.
pub struct DocumentStore<T> {
    kv: Arc<dyn Kv>,
    key: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Serialize + DeserializeOwned> DocumentStore<T> {
    pub fn new(kv: Arc<dyn Kv>, key: &'static str) -> Self {
        Self {
            kv,
            key,
            _marker: PhantomData,
        }
    }

    /// Storage slot this store reads and writes.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Serialize `items` and overwrite the slot. Best-effort: any failure is
    /// logged and swallowed.
    pub fn save(&self, items: &[T]) {
        if let Err(e) = self.try_save(items) {
            error!("Error saving {}: {}", self.key, e);
        }
    }

    /// Read the whole collection. An absent slot reads as empty; so does a
    /// corrupt one, after logging. Individual records are not validated.
    pub fn load(&self) -> Vec<T> {
        match self.try_load() {
            Ok(items) => items,
            Err(e) => {
                error!("Error loading {}: {}", self.key, e);
                Vec::new()
            }
        }
    }

    fn try_save(&self, items: &[T]) -> Result<(), StoreError> {
        let json = serde_json::to_string(items)?;
        self.kv.set(self.key, &json)?;
        Ok(())
    }

    fn try_load(&self) -> Result<Vec<T>, StoreError> {
        match self.kv.get(self.key)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }
}
