pub mod catalog;
pub mod ports;

pub use catalog::Catalog;
