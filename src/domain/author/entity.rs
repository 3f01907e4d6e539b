// src/domain/author/entity.rs
use crate::domain::article::ArticleSet;
use crate::domain::author::value_objects::{AuthorId, AuthorName};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub(crate) id: AuthorId,
    pub(crate) name: AuthorName,
    pub(crate) articles: ArticleSet,
}

impl Author {
    pub(crate) fn new(id: AuthorId, name: AuthorName) -> Self {
        Self {
            id,
            name,
            articles: ArticleSet::new(),
        }
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &AuthorName {
        &self.name
    }

    /// Back-reference list of the articles currently credited to this author.
    pub fn articles(&self) -> &ArticleSet {
        &self.articles
    }
}

/// Field changes requested for an author. Names are fixed at creation, so
/// the only thing an update can carry is a rejected rename.
#[derive(Debug, Clone)]
pub struct AuthorUpdate {
    pub id: AuthorId,
    pub name: Option<String>,
}

impl AuthorUpdate {
    pub fn new(id: AuthorId) -> Self {
        Self { id, name: None }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
