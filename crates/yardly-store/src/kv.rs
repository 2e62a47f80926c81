use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::KvError;

/// The durable key-value capability the stores depend on: string keys to
/// string values, last write wins.
pub trait Kv: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, KvError>;
    fn set(&self, key: &str, value: &str) -> Result<(), KvError>;
}

/// In-memory backend for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryKv {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Kv for MemoryKv {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        let entries = self.entries.lock().map_err(|_| KvError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        let mut entries = self.entries.lock().map_err(|_| KvError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_last_set_value() {
        let kv = MemoryKv::new();
        assert_eq!(kv.get("posts").unwrap(), None);

        kv.set("posts", "[]").unwrap();
        kv.set("posts", "[1]").unwrap();
        assert_eq!(kv.get("posts").unwrap().as_deref(), Some("[1]"));
    }
}
