pub mod entity;
pub mod value_objects;

pub use entity::{Author, AuthorUpdate};
pub use value_objects::{AuthorId, AuthorName};
