// src/application/catalog/mod.rs
mod create;
mod queries;
mod service;
mod update;

pub use service::Catalog;
