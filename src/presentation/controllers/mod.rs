//! HTTP controllers for handling requests

use std::sync::Arc;

use crate::application::DeveloperService;

pub mod developers;
pub mod health;
pub mod pages;

pub use developers::*;
pub use health::*;
pub use pages::*;

/// Application state containing services
#[derive(Clone)]
pub struct AppState {
    pub developer_service: Arc<dyn DeveloperService>,
}

impl AppState {
    pub fn new(developer_service: Arc<dyn DeveloperService>) -> Self {
        Self { developer_service }
    }
}
