use async_trait::async_trait;
use serde_json::Value;
use sled::{Db, Tree};
use std::sync::Mutex;

use crate::error::GistResult;

const TREE_NAME: &str = "plugin_data";
const DATA_KEY: &str = "ai-summary";

/// The host's persistent storage for one extension's data blob.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns `None` when nothing was ever saved.
    fn load_data(&self) -> GistResult<Option<Value>>;
    async fn save_data(&self, data: &Value) -> GistResult<()>;
}

#[derive(Clone)]
pub struct SledStore {
    tree: Tree,
}

impl SledStore {
    pub fn new(db: &Db) -> sled::Result<Self> {
        let tree = db.open_tree(TREE_NAME)?;
        Ok(Self { tree })
    }
}

#[async_trait]
impl KeyValueStore for SledStore {
    fn load_data(&self) -> GistResult<Option<Value>> {
        match self.tree.get(DATA_KEY)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn save_data(&self, data: &Value) -> GistResult<()> {
        let bytes = serde_json::to_vec(data)?;
        self.tree.insert(DATA_KEY, bytes)?;
        let tree = self.tree.clone();
        tokio::task::spawn_blocking(move || tree.flush()).await??;
        Ok(())
    }
}

/// In-process store, used when no database is available and in tests.
#[derive(Default)]
pub struct MemoryStore {
    data: Mutex<Option<Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: Value) -> Self {
        Self {
            data: Mutex::new(Some(data)),
        }
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    fn load_data(&self) -> GistResult<Option<Value>> {
        let guard = self.data.lock().unwrap_or_else(|e| e.into_inner());
        Ok(guard.clone())
    }

    async fn save_data(&self, data: &Value) -> GistResult<()> {
        let mut guard = self.data.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Some(data.clone());
        Ok(())
    }
}
