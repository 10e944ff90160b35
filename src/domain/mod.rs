//! Domain Layer - Core entities and value objects
//!
//! This module contains the developer record, its embedded skill ratings and
//! the validation rules every stored record satisfies.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use value_objects::*;
