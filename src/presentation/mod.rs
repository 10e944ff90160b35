//! Presentation Layer - Web API, HTML pages and HTTP handling
//!
//! This module contains the Axum web server setup, controllers, views and API models.

pub mod controllers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod views;


pub use controllers::*;
pub use middleware::*;
pub use models::*;
pub use routes::*;
