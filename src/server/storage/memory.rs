use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;

use crate::server::{error::storage::StorageError, storage::ObjectStorage};

/// In-memory storage for tests.
#[derive(Default)]
pub struct MemoryStorage {
    objects: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(&self) -> Vec<String> {
        self.objects.lock().unwrap().keys().cloned().collect()
    }
}

#[async_trait]
impl ObjectStorage for MemoryStorage {
    async fn put(&self, key: &str, bytes: Vec<u8>, _content_type: &str) -> Result<String, StorageError> {
        self.objects.lock().unwrap().insert(key.to_string(), bytes);
        Ok(format!("https://storage.test/{}", key))
    }
}
