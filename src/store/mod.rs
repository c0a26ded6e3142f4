//! Whole-value document storage behind a key/value interface.

use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::InMemoryStore;

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// `Ok(None)` when nothing has been stored under `key` yet.
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Replaces the whole value stored under `key`.
    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to access `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("`{}` does not contain valid JSON", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("`{}` does not contain a JSON object", path.display())]
    NotAnObject { path: PathBuf },
    #[error("Failed to encode the document")]
    Encode(#[from] serde_json::Error),
}
