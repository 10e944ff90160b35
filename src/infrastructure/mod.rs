//! Infrastructure Layer - External concerns and implementations
//!
//! This module handles the record store and the HTTP client for the REST API.

pub mod api_client;
pub mod file_store;
pub mod repositories;

pub use api_client::{ClientError, DevelopersClient};
pub use file_store::FileDeveloperRepository;
pub use repositories::{DeveloperRepository, InMemoryDeveloperRepository};
