//! Application services implementation

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::errors::ApplicationError;
use crate::domain::{Developer, DeveloperId, DeveloperPatch, NewDeveloper};
use crate::infrastructure::DeveloperRepository;

/// Service for reading and mutating the developer roster
#[async_trait]
pub trait DeveloperService: Send + Sync {
    async fn list_developers(&self) -> Result<Vec<Developer>, ApplicationError>;

    async fn get_developer(&self, id: &DeveloperId)
    -> Result<Option<Developer>, ApplicationError>;

    async fn add_developer(&self, developer: NewDeveloper) -> Result<Developer, ApplicationError>;

    async fn edit_developer(
        &self,
        id: &DeveloperId,
        patch: DeveloperPatch,
    ) -> Result<Developer, ApplicationError>;
}

/// Validating passthrough to a [`DeveloperRepository`]
pub struct DeveloperServiceImpl {
    repository: Arc<dyn DeveloperRepository>,
}

impl DeveloperServiceImpl {
    pub fn new(repository: Arc<dyn DeveloperRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl DeveloperService for DeveloperServiceImpl {
    async fn list_developers(&self) -> Result<Vec<Developer>, ApplicationError> {
        let developers = self.repository.find_all().await?;
        debug!(count = developers.len(), "Listed developers");
        Ok(developers)
    }

    async fn get_developer(
        &self,
        id: &DeveloperId,
    ) -> Result<Option<Developer>, ApplicationError> {
        Ok(self.repository.find_by_id(id).await?)
    }

    #[instrument(skip_all, fields(name = %developer.name))]
    async fn add_developer(&self, developer: NewDeveloper) -> Result<Developer, ApplicationError> {
        let developer = developer.validate()?;
        let created = self.repository.create(developer).await.map_err(|e| {
            warn!(error = %e, "Store rejected new developer");
            ApplicationError::StoreRejected(e)
        })?;
        info!(id = %created.id, "Developer added");
        Ok(created)
    }

    #[instrument(skip_all, fields(id = %id))]
    async fn edit_developer(
        &self,
        id: &DeveloperId,
        patch: DeveloperPatch,
    ) -> Result<Developer, ApplicationError> {
        let patch = patch.validate()?;
        let updated = self.repository.update(id, patch).await.map_err(|e| {
            warn!(error = %e, "Store rejected developer update");
            ApplicationError::StoreRejected(e)
        })?;
        info!("Developer updated");
        Ok(updated)
    }
}
