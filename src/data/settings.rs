//! Per-guild settings document store.
//!
//! One JSON file per guild identifier under the configured directory. A
//! document is a free-form JSON mapping with no enforced schema; absence is
//! equivalent to an empty mapping. Writes replace the document wholesale.
//!
//! There is no locking: two concurrent writes to the same guild race
//! last-writer-wins, relying only on the filesystem's own atomicity. Callers
//! that need stronger guarantees must layer them on top of this interface.

use std::io::ErrorKind;
use std::path::PathBuf;

use serde_json::{Map, Value};
use tokio::fs;

use crate::error::AppError;

#[derive(Clone)]
pub struct SettingsStore {
    dir: PathBuf,
}

impl SettingsStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates the document directory if it does not exist yet.
    pub async fn init(&self) -> Result<(), std::io::Error> {
        fs::create_dir_all(&self.dir).await
    }

    /// Reads the stored mapping for a guild.
    ///
    /// # Returns
    /// - `Ok(mapping)` - The stored document, or an empty mapping if none exists
    /// - `Err(AppError::IoErr(_))` - Underlying storage failure
    /// - `Err(AppError::JsonErr(_))` - Stored document is not valid JSON
    pub async fn read(&self, guild_id: u64) -> Result<Map<String, Value>, AppError> {
        match fs::read(self.document_path(guild_id)).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Map::new()),
            Err(err) => Err(err.into()),
        }
    }

    /// Replaces the entire stored mapping for a guild, creating the document
    /// if absent. No merge with prior content, no size limit.
    pub async fn write(
        &self,
        guild_id: u64,
        document: &Map<String, Value>,
    ) -> Result<(), AppError> {
        let bytes = serde_json::to_vec_pretty(document)?;
        fs::write(self.document_path(guild_id), bytes).await?;
        Ok(())
    }

    fn document_path(&self, guild_id: u64) -> PathBuf {
        self.dir.join(format!("{guild_id}.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store_in(dir: &tempfile::TempDir) -> SettingsStore {
        SettingsStore::new(dir.path())
    }

    fn mapping(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected a JSON object, got {other}"),
        }
    }

    /// Reading immediately after writing returns exactly the written document.
    #[tokio::test]
    async fn read_after_write_round_trips() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let store = store_in(&dir);

        let document = mapping(json!({
            "prefix": "!",
            "welcome": { "enabled": true, "channel": "123" },
            "blocked_words": ["a", "b"],
        }));

        store.write(123, &document).await?;
        let read_back = store.read(123).await?;

        assert_eq!(read_back, document);
        Ok(())
    }

    /// A guild that was never written reads as an empty mapping, not an error.
    #[tokio::test]
    async fn read_unwritten_guild_returns_empty_mapping() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let store = store_in(&dir);

        let read_back = store.read(999).await?;

        assert!(read_back.is_empty());
        Ok(())
    }

    /// A second write replaces the document wholesale; keys from the first
    /// write do not survive.
    #[tokio::test]
    async fn write_replaces_document_without_merging() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let store = store_in(&dir);

        store
            .write(123, &mapping(json!({ "prefix": "!", "language": "en" })))
            .await?;
        store
            .write(123, &mapping(json!({ "prefix": "?" })))
            .await?;

        let read_back = store.read(123).await?;

        assert_eq!(read_back, mapping(json!({ "prefix": "?" })));
        assert!(!read_back.contains_key("language"));
        Ok(())
    }

    /// Documents are stored per guild identifier and do not bleed into each
    /// other.
    #[tokio::test]
    async fn documents_are_scoped_per_guild() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let store = store_in(&dir);

        store
            .write(1, &mapping(json!({ "prefix": "!" })))
            .await?;
        store
            .write(2, &mapping(json!({ "prefix": "$" })))
            .await?;

        assert_eq!(store.read(1).await?, mapping(json!({ "prefix": "!" })));
        assert_eq!(store.read(2).await?, mapping(json!({ "prefix": "$" })));
        Ok(())
    }

    /// An empty mapping is a valid document and round-trips as empty.
    #[tokio::test]
    async fn empty_document_round_trips() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let store = store_in(&dir);

        store.write(123, &Map::new()).await?;

        assert!(store.read(123).await?.is_empty());
        Ok(())
    }
}
