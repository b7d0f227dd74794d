//! Persisted client state storage
//!
//! File-backed key/value persistence for the session token and the admin
//! flag. Each key is stored as an individual file under the configured
//! state directory, giving every key a single writer.

use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;
use crate::config::StorageConfig;
use crate::utils::errors::Result;

/// File-backed state storage
#[derive(Debug, Clone)]
pub struct StateStorage {
    dir: PathBuf,
}

impl StateStorage {
    /// Create a new state storage instance
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            dir: PathBuf::from(&config.dir),
        }
    }

    /// Load the value persisted under a key, if any
    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.key_path(key)).await {
            Ok(value) => {
                debug!(key = key, "Loaded persisted state value");
                Ok(Some(value))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Persist a value under a key, replacing any previous value
    pub async fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).await?;
        fs::write(self.key_path(key), value).await?;
        debug!(key = key, "Persisted state value");
        Ok(())
    }

    /// Remove the value persisted under a key; removing an absent key is a no-op
    pub async fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.key_path(key)).await {
            Ok(()) => {
                debug!(key = key, "Removed persisted state value");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Check whether a key has a persisted value
    pub async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.is_some())
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}
