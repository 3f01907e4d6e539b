pub mod article_set;
pub mod entity;
pub mod value_objects;

pub use article_set::ArticleSet;
pub use entity::{Article, ArticleUpdate};
pub use value_objects::{ArticleId, ArticleTitle};
