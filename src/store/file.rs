use super::{DocumentStore, StoreError};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::{ffi::OsString, io::ErrorKind, path::PathBuf};
use tokio::{fs, sync::Mutex};

/// A single JSON object on disk holding one entry per key, e.g.
/// `{"deals": [...], "emails": [...]}`.
///
/// Writes go to a sibling temporary file that is then renamed over the
/// document, so readers never observe a half-written file.
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    async fn read_document(&self) -> Result<Option<Map<String, Value>>, StoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(self.io_error(source)),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        match serde_json::from_slice(&bytes) {
            Ok(Value::Object(document)) => Ok(Some(document)),
            Ok(_) => Err(StoreError::NotAnObject {
                path: self.path.clone(),
            }),
            Err(source) => Err(StoreError::Malformed {
                path: self.path.clone(),
                source,
            }),
        }
    }

    async fn write_document(&self, document: &Map<String, Value>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| self.io_error(source))?;
        }

        let bytes = serde_json::to_vec_pretty(document)?;
        let temporary = self.temporary_path();

        fs::write(&temporary, bytes)
            .await
            .map_err(|source| self.io_error(source))?;
        fs::rename(&temporary, &self.path)
            .await
            .map_err(|source| self.io_error(source))
    }

    fn temporary_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    #[tracing::instrument(name = "Reading document key", skip(self))]
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self
            .read_document()
            .await?
            .and_then(|mut document| document.remove(key)))
    }

    /// Refuses to overwrite a file that exists but is not a JSON object, so
    /// unreadable data is never silently replaced.
    #[tracing::instrument(name = "Writing document key", skip(self, value))]
    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut document = self.read_document().await?.unwrap_or_default();
        document.insert(key.to_owned(), value);

        self.write_document(&document).await
    }
}
