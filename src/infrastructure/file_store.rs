//! JSON-file-backed developer repository

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

use super::repositories::{DeveloperRepository, position_of};
use crate::application::errors::RepositoryError;
use crate::domain::{Developer, DeveloperId, DeveloperPatch, NewDeveloper};

/// Repository persisting the whole roster as one pretty-printed JSON array.
///
/// Writes go to a temporary sibling file which is then renamed over the
/// target, so readers never observe a half-written roster. The write lock is
/// held for the whole write, which serializes mutations.
pub struct FileDeveloperRepository {
    path: PathBuf,
    developers: RwLock<Vec<Developer>>,
}

impl FileDeveloperRepository {
    /// Open the roster at `path`. A missing or empty file is an empty roster.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, RepositoryError> {
        let path = path.into();
        let developers = Self::read_roster(&path).await?;
        info!(
            path = %path.display(),
            count = developers.len(),
            "Loaded developer roster"
        );
        Ok(Self {
            path,
            developers: RwLock::new(developers),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_roster(path: &Path) -> Result<Vec<Developer>, RepositoryError> {
        match fs::read(path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(Vec::new()),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                error!(path = %path.display(), "Failed to parse developer roster: {}", e);
                RepositoryError::Json(e)
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(RepositoryError::Io(e)),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "developers.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Atomically replace the roster file
    async fn persist(&self, developers: &[Developer]) -> Result<(), RepositoryError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(developers)?;
        let temp_path = self.temp_path();

        fs::write(&temp_path, content).await.map_err(|e| {
            error!("Failed to write temporary roster file: {}", e);
            RepositoryError::Io(e)
        })?;
        fs::rename(&temp_path, &self.path).await.map_err(|e| {
            error!("Failed to rename roster file: {}", e);
            RepositoryError::Io(e)
        })?;

        debug!(path = %self.path.display(), count = developers.len(), "Persisted roster");
        Ok(())
    }
}

#[async_trait]
impl DeveloperRepository for FileDeveloperRepository {
    async fn find_all(&self) -> Result<Vec<Developer>, RepositoryError> {
        Ok(self.developers.read().await.clone())
    }

    async fn find_by_id(&self, id: &DeveloperId) -> Result<Option<Developer>, RepositoryError> {
        let developers = self.developers.read().await;
        Ok(position_of(&developers, id).map(|i| developers[i].clone()))
    }

    async fn create(&self, developer: NewDeveloper) -> Result<Developer, RepositoryError> {
        let mut developers = self.developers.write().await;
        let developer = Developer::from_new(DeveloperId::generate(), developer);

        let mut next = developers.clone();
        next.push(developer.clone());
        self.persist(&next).await?;
        *developers = next;

        Ok(developer)
    }

    async fn update(
        &self,
        id: &DeveloperId,
        patch: DeveloperPatch,
    ) -> Result<Developer, RepositoryError> {
        let mut developers = self.developers.write().await;
        let index = position_of(&developers, id).ok_or_else(|| RepositoryError::NotFound {
            id: id.to_string(),
        })?;

        let mut next = developers.clone();
        next[index].apply(patch);
        self.persist(&next).await?;
        let updated = next[index].clone();
        *developers = next;

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Skills;
    use tempfile::TempDir;

    fn sample_new(name: &str) -> NewDeveloper {
        NewDeveloper {
            name: name.to_string(),
            position: "Designer".to_string(),
            location: "Lisbon".to_string(),
            experience_years: 2,
            image_url: "https://example.com/b.png".to_string(),
            skills: Skills {
                communicative: 60,
                efficient: 61,
                immaculate: 62,
                problemsolver: 63,
                timely: 64,
                tinker: 65,
            },
        }
    }

    #[tokio::test]
    async fn test_missing_file_is_empty_roster() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileDeveloperRepository::open(temp_dir.path().join("devs.json"))
            .await
            .unwrap();
        assert!(repo.find_all().await.unwrap().is_empty());
        assert_eq!(repo.path(), temp_dir.path().join("devs.json").as_path());
    }

    #[tokio::test]
    async fn test_records_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("devs.json");

        let created = {
            let repo = FileDeveloperRepository::open(&path).await.unwrap();
            let created = repo.create(sample_new("Linus")).await.unwrap();
            repo.update(
                &created.id,
                DeveloperPatch {
                    position: Some("Maintainer".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
        };

        let reopened = FileDeveloperRepository::open(&path).await.unwrap();
        let found = reopened.find_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(found, created);
        assert_eq!(found.position, "Maintainer");
        assert!(!reopened.temp_path().exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("devs.json");
        std::fs::write(&path, "{not json").unwrap();

        let result = FileDeveloperRepository::open(&path).await;
        assert!(matches!(result, Err(RepositoryError::Json(_))));
    }

    #[tokio::test]
    async fn test_update_unknown_id_leaves_file_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("devs.json");
        let repo = FileDeveloperRepository::open(&path).await.unwrap();

        let result = repo
            .update(&DeveloperId::new("ghost").unwrap(), DeveloperPatch::default())
            .await;

        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
        assert!(!path.exists());
    }
}
