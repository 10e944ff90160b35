//! Repository implementations

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::application::errors::RepositoryError;
use crate::domain::{Developer, DeveloperId, DeveloperPatch, NewDeveloper};

/// Repository trait for developer record access
#[async_trait]
pub trait DeveloperRepository: Send + Sync {
    /// Every stored developer, in insertion order
    async fn find_all(&self) -> Result<Vec<Developer>, RepositoryError>;

    async fn find_by_id(&self, id: &DeveloperId) -> Result<Option<Developer>, RepositoryError>;

    /// Store a new developer under a freshly generated id
    async fn create(&self, developer: NewDeveloper) -> Result<Developer, RepositoryError>;

    async fn update(
        &self,
        id: &DeveloperId,
        patch: DeveloperPatch,
    ) -> Result<Developer, RepositoryError>;
}

/// Process-local repository, lost on restart
#[derive(Default)]
pub struct InMemoryDeveloperRepository {
    developers: RwLock<Vec<Developer>>,
}

impl InMemoryDeveloperRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with existing records
    pub fn with_developers(developers: Vec<Developer>) -> Self {
        Self {
            developers: RwLock::new(developers),
        }
    }
}

#[async_trait]
impl DeveloperRepository for InMemoryDeveloperRepository {
    async fn find_all(&self) -> Result<Vec<Developer>, RepositoryError> {
        Ok(self.developers.read().await.clone())
    }

    async fn find_by_id(&self, id: &DeveloperId) -> Result<Option<Developer>, RepositoryError> {
        let developers = self.developers.read().await;
        Ok(developers.iter().find(|d| &d.id == id).cloned())
    }

    async fn create(&self, developer: NewDeveloper) -> Result<Developer, RepositoryError> {
        let developer = Developer::from_new(DeveloperId::generate(), developer);
        self.developers.write().await.push(developer.clone());
        debug!(id = %developer.id, "Stored developer in memory");
        Ok(developer)
    }

    async fn update(
        &self,
        id: &DeveloperId,
        patch: DeveloperPatch,
    ) -> Result<Developer, RepositoryError> {
        let mut developers = self.developers.write().await;
        let developer = developers
            .iter_mut()
            .find(|d| &d.id == id)
            .ok_or_else(|| RepositoryError::NotFound {
                id: id.to_string(),
            })?;
        developer.apply(patch);
        Ok(developer.clone())
    }
}

/// Locate a record by id for in-place replacement
pub(crate) fn position_of(developers: &[Developer], id: &DeveloperId) -> Option<usize> {
    developers.iter().position(|d| &d.id == id)
}
