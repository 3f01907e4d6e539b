//! In-memory catalog of authors, magazines and the articles linking them.
//!
//! [`Catalog`] owns every registry and keeps each article listed under
//! exactly its current author and magazine.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::Catalog;
pub use domain::errors::{DomainError, DomainResult};
