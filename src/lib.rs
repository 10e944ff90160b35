//! Devroster - a developer roster with a REST API and server-rendered forms
//!
//! The crate follows a layered layout: `domain` holds the developer record and
//! its rules, `application` the services and form-submission use cases,
//! `infrastructure` the record stores and the HTTP client, and `presentation`
//! the axum routes, handlers and HTML views. `forms` folds flat urlencoded
//! submissions into nested trees.

pub mod application;
pub mod config;
pub mod domain;
pub mod forms;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

pub use config::Config;
pub use logging::init_tracing;
pub use presentation::{AppState, create_app, create_router};
