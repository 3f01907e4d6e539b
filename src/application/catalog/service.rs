// src/application/catalog/service.rs
use std::sync::Arc;

use crate::{
    application::ports::ClockPort,
    config::CatalogConfig,
    domain::{
        article::{Article, ArticleId, ArticleSet},
        author::{Author, AuthorId},
        errors::{DomainError, DomainResult},
        magazine::{Magazine, MagazineId},
    },
};

/// Owner of the author, magazine and article registries.
///
/// Every link between an article and its owners goes through this type, so
/// the back-reference lists on authors and magazines always agree with the
/// article's own author and magazine ids. Registries keep creation order and
/// ids are never reissued, not even after [`Catalog::clear`].
pub struct Catalog {
    pub(super) authors: Vec<Author>,
    pub(super) magazines: Vec<Magazine>,
    pub(super) articles: Vec<Article>,
    // Number of ids of each kind retired by earlier clears.
    pub(super) author_base: usize,
    pub(super) magazine_base: usize,
    pub(super) article_base: usize,
    pub(super) clock: Arc<ClockPort>,
    pub(super) contributor_threshold: usize,
}

impl Catalog {
    pub fn new(clock: Arc<ClockPort>) -> Self {
        Self::with_config(clock, &CatalogConfig::default())
    }

    pub fn with_config(clock: Arc<ClockPort>, config: &CatalogConfig) -> Self {
        Self {
            authors: Vec::new(),
            magazines: Vec::new(),
            articles: Vec::new(),
            author_base: 0,
            magazine_base: 0,
            article_base: 0,
            clock,
            contributor_threshold: config.contributor_threshold(),
        }
    }

    pub fn author(&self, id: AuthorId) -> DomainResult<&Author> {
        self.author_index(id).map(|index| &self.authors[index])
    }

    pub fn magazine(&self, id: MagazineId) -> DomainResult<&Magazine> {
        self.magazine_index(id).map(|index| &self.magazines[index])
    }

    pub fn article(&self, id: ArticleId) -> DomainResult<&Article> {
        self.article_index(id).map(|index| &self.articles[index])
    }

    pub fn authors(&self) -> impl Iterator<Item = &Author> {
        self.authors.iter()
    }

    /// Magazines in registry order, which is also the tie-break order of
    /// [`Catalog::top_publisher`].
    pub fn magazines(&self) -> impl Iterator<Item = &Magazine> {
        self.magazines.iter()
    }

    pub fn articles(&self) -> impl Iterator<Item = &Article> {
        self.articles.iter()
    }

    pub fn contributor_threshold(&self) -> usize {
        self.contributor_threshold
    }

    /// Drops every author, magazine and article. Ids handed out before the
    /// call resolve to `NotFound` afterwards; new entities get fresh ids.
    pub fn clear(&mut self) {
        tracing::debug!(
            authors = self.authors.len(),
            magazines = self.magazines.len(),
            articles = self.articles.len(),
            "catalog cleared"
        );
        self.author_base += self.authors.len();
        self.magazine_base += self.magazines.len();
        self.article_base += self.articles.len();
        self.authors.clear();
        self.magazines.clear();
        self.articles.clear();
    }

    pub(super) fn next_author_id(&self) -> AuthorId {
        AuthorId::from_index(self.author_base + self.authors.len())
    }

    pub(super) fn next_magazine_id(&self) -> MagazineId {
        MagazineId::from_index(self.magazine_base + self.magazines.len())
    }

    pub(super) fn next_article_id(&self) -> ArticleId {
        ArticleId::from_index(self.article_base + self.articles.len())
    }

    pub(super) fn author_index(&self, id: AuthorId) -> DomainResult<usize> {
        id.index()
            .and_then(|index| index.checked_sub(self.author_base))
            .filter(|index| *index < self.authors.len())
            .ok_or_else(|| DomainError::NotFound(format!("{id} is not registered")))
    }

    pub(super) fn magazine_index(&self, id: MagazineId) -> DomainResult<usize> {
        id.index()
            .and_then(|index| index.checked_sub(self.magazine_base))
            .filter(|index| *index < self.magazines.len())
            .ok_or_else(|| DomainError::NotFound(format!("{id} is not registered")))
    }

    pub(super) fn article_index(&self, id: ArticleId) -> DomainResult<usize> {
        id.index()
            .and_then(|index| index.checked_sub(self.article_base))
            .filter(|index| *index < self.articles.len())
            .ok_or_else(|| DomainError::NotFound(format!("{id} is not registered")))
    }

    /// Resolves an author given as a link target. Unknown ids are a
    /// validation failure here, not a lookup miss.
    pub(super) fn linkable_author(&self, id: AuthorId) -> DomainResult<usize> {
        self.author_index(id)
            .map_err(|_| DomainError::Validation(format!("{id} is not a registered author")))
    }

    pub(super) fn linkable_magazine(&self, id: MagazineId) -> DomainResult<usize> {
        self.magazine_index(id)
            .map_err(|_| DomainError::Validation(format!("{id} is not a registered magazine")))
    }

    pub(super) fn resolve(&self, set: &ArticleSet) -> Vec<&Article> {
        set.iter()
            .filter_map(|id| self.article_index(id).ok().map(|index| &self.articles[index]))
            .collect()
    }
}
