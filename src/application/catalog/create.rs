// src/application/catalog/create.rs
use super::Catalog;
use crate::domain::{
    article::{Article, ArticleId, ArticleTitle},
    author::{Author, AuthorId, AuthorName},
    errors::DomainResult,
    magazine::{Category, Magazine, MagazineId, MagazineName},
};

impl Catalog {
    pub fn create_author(&mut self, name: impl Into<String>) -> DomainResult<AuthorId> {
        let name = AuthorName::new(name)?;
        let id = self.next_author_id();
        tracing::debug!(author = %id, name = %name, "author created");
        self.authors.push(Author::new(id, name));
        Ok(id)
    }

    pub fn create_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> DomainResult<MagazineId> {
        let name = MagazineName::new(name)?;
        let category = Category::new(category)?;
        let id = self.next_magazine_id();
        tracing::debug!(magazine = %id, name = %name, category = %category, "magazine created");
        self.magazines.push(Magazine::new(id, name, category));
        Ok(id)
    }

    /// Registers a new article and links it into both owners' back-reference
    /// lists. Nothing is stored unless the title and both owners check out.
    pub fn create_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> DomainResult<ArticleId> {
        let title = ArticleTitle::new(title)?;
        let author_index = self.linkable_author(author)?;
        let magazine_index = self.linkable_magazine(magazine)?;

        let id = self.next_article_id();
        let now = self.clock.now();
        tracing::debug!(article = %id, %author, %magazine, title = %title, "article created");

        self.articles
            .push(Article::new(id, title, author, magazine, now));
        self.authors[author_index].articles.insert(id);
        self.magazines[magazine_index].articles.insert(id);
        Ok(id)
    }

    /// Author-side shorthand for [`Catalog::create_article`].
    pub fn add_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> DomainResult<ArticleId> {
        self.create_article(author, magazine, title)
    }
}
