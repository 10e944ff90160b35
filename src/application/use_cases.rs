//! Use cases representing application workflows

use std::sync::Arc;

use super::errors::ApplicationError;
use super::services::DeveloperService;
use super::submissions::DeveloperSubmission;
use crate::domain::{Developer, DeveloperId};
use crate::forms::FormNode;

/// Create a developer from a submitted add form
pub struct SubmitAddDeveloper {
    service: Arc<dyn DeveloperService>,
}

impl SubmitAddDeveloper {
    pub fn new(service: Arc<dyn DeveloperService>) -> Self {
        Self { service }
    }

    pub async fn execute(&self, form: &FormNode) -> Result<Developer, ApplicationError> {
        let developer = DeveloperSubmission::from_form(form).into_new_developer()?;
        self.service.add_developer(developer).await
    }
}

/// Apply a submitted edit form to an existing developer
pub struct SubmitEditDeveloper {
    service: Arc<dyn DeveloperService>,
}

impl SubmitEditDeveloper {
    pub fn new(service: Arc<dyn DeveloperService>) -> Self {
        Self { service }
    }

    pub async fn execute(
        &self,
        id: &DeveloperId,
        form: &FormNode,
    ) -> Result<Developer, ApplicationError> {
        let submission = DeveloperSubmission::from_form(form);
        ensure_same_id(id, submission.id())?;
        self.service
            .edit_developer(id, submission.into_patch()?)
            .await
    }
}

/// A body that echoes an id must echo the one it is addressed to
pub fn ensure_same_id(path_id: &DeveloperId, body_id: Option<&str>) -> Result<(), ApplicationError> {
    match body_id.map(str::trim) {
        Some(body_id) if !body_id.is_empty() && body_id != path_id.as_str() => {
            Err(ApplicationError::IdMismatch {
                path_id: path_id.to_string(),
                body_id: body_id.to_string(),
            })
        }
        _ => Ok(()),
    }
}
