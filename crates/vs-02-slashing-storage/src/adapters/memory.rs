use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::domain::errors::KVStoreError;
use crate::ports::outbound::KeyValueStore;

/// In-memory key-value store for tests and snapshots.
///
/// Ordered so `list` returns keys lexicographically, matching RocksDB.
#[derive(Default)]
pub struct InMemoryKVStore {
    data: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl InMemoryKVStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

impl KeyValueStore for InMemoryKVStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KVStoreError> {
        Ok(self.data.read().get(key).cloned())
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<(), KVStoreError> {
        self.data.write().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), KVStoreError> {
        self.data.write().remove(key);
        Ok(())
    }

    fn list(&self, prefix: &str) -> Result<Vec<String>, KVStoreError> {
        let data = self.data.read();
        let keys = data
            .range(prefix.to_string()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, _)| key.clone())
            .collect();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_kv_store() {
        let store = InMemoryKVStore::new();

        store.put("key1", b"value1").unwrap();
        store.put("key2", b"value2").unwrap();

        assert_eq!(store.get("key1").unwrap(), Some(b"value1".to_vec()));
        assert_eq!(store.get("key2").unwrap(), Some(b"value2".to_vec()));
        assert_eq!(store.get("key3").unwrap(), None);

        store.delete("key1").unwrap();
        assert_eq!(store.get("key1").unwrap(), None);
        // Absent keys delete cleanly.
        store.delete("key1").unwrap();
    }

    #[test]
    fn test_list_by_prefix() {
        let store = InMemoryKVStore::new();
        store.put("wallet", b"w").unwrap();
        store.put("wallet/accounts/b", b"2").unwrap();
        store.put("wallet/accounts/a", b"1").unwrap();
        store.put("wallet/other", b"x").unwrap();

        assert_eq!(
            store.list("wallet/accounts/").unwrap(),
            vec!["wallet/accounts/a".to_string(), "wallet/accounts/b".to_string()]
        );
        assert_eq!(store.list("wallet").unwrap().len(), 4);
        assert!(store.list("slashing/").unwrap().is_empty());
    }
}
