use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{DevServicesError, Result};
use crate::models::CapturedService;

pub struct CapturedStateStore {
    state_file_path: PathBuf,
}

impl CapturedStateStore {
    pub fn new(state_directory: &Path) -> Self {
        Self {
            state_file_path: state_directory.join("devservices-state.json"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.state_file_path
    }

    /// The captured server, or `None` when nothing has been recorded yet.
    pub async fn load(&self) -> Result<Option<CapturedService>> {
        let json = match tokio::fs::read_to_string(&self.state_file_path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(DevServicesError::State(format!(
                    "failed to read state file: {e}"
                )))
            }
        };
        let captured: CapturedService = serde_json::from_str(&json)?;
        Ok(Some(captured))
    }

    pub async fn save(&self, captured: &CapturedService) -> Result<()> {
        if let Some(parent) = self.state_file_path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                DevServicesError::State(format!("failed to create state dir: {e}"))
            })?;
        }
        let json = serde_json::to_string_pretty(captured)?;
        tokio::fs::write(&self.state_file_path, json)
            .await
            .map_err(|e| DevServicesError::State(format!("failed to write state file: {e}")))?;
        Ok(())
    }

    pub async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.state_file_path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DevServicesError::State(format!(
                "failed to remove state file: {e}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DevServicesConfig;

    fn captured() -> CapturedService {
        CapturedService::new(
            DevServicesConfig::default()
                .with_port(Some(11222))
                .with_cache("c1", "DIST_SYNC"),
            Some("container-1".into()),
        )
    }

    #[tokio::test]
    async fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = CapturedStateStore::new(dir.path());

        let original = captured();
        store.save(&original).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded, original);
        assert_eq!(loaded.config.caches().len(), 1);
    }

    #[tokio::test]
    async fn load_missing_file_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = CapturedStateStore::new(dir.path());
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn load_corrupt_file_returns_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = CapturedStateStore::new(dir.path());
        tokio::fs::write(store.path(), "{not json").await.unwrap();
        assert!(matches!(
            store.load().await,
            Err(DevServicesError::Json(_))
        ));
    }

    #[tokio::test]
    async fn save_creates_state_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = CapturedStateStore::new(&dir.path().join("nested").join(".devservices"));
        store.save(&captured()).await.unwrap();
        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = CapturedStateStore::new(dir.path());
        store.save(&captured()).await.unwrap();
        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn state_uses_camel_case() {
        let dir = tempfile::tempdir().unwrap();
        let store = CapturedStateStore::new(dir.path());
        store.save(&captured()).await.unwrap();

        let json = tokio::fs::read_to_string(dir.path().join("devservices-state.json"))
            .await
            .unwrap();
        assert!(json.contains("\"instanceId\""));
        assert!(json.contains("\"startedAt\""));
        assert!(json.contains("\"service-name\""));
        assert!(!json.contains("\"instance_id\""));
        assert!(!json.contains("\"started_at\""));
    }
}
