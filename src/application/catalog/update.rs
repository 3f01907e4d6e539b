// src/application/catalog/update.rs
use chrono::{DateTime, Utc};

use super::Catalog;
use crate::domain::{
    article::{ArticleId, ArticleUpdate},
    author::{AuthorId, AuthorUpdate},
    errors::{DomainError, DomainResult},
    magazine::{Category, MagazineId, MagazineName, MagazineUpdate},
};

impl Catalog {
    /// Applies an article update. Every requested change is validated before
    /// any of them is written, so a failed update leaves all links as they were.
    pub fn update_article(&mut self, update: ArticleUpdate) -> DomainResult<()> {
        let ArticleUpdate {
            id,
            title,
            author,
            magazine,
        } = update;
        let article_index = self.article_index(id)?;

        if title.is_some() {
            tracing::warn!(article = %id, "rejected title change");
            return Err(DomainError::ImmutableField("title"));
        }

        let author_target = author
            .map(|author| self.linkable_author(author).map(|index| (author, index)))
            .transpose()?;
        let magazine_target = magazine
            .map(|magazine| self.linkable_magazine(magazine).map(|index| (magazine, index)))
            .transpose()?;

        let now = self.clock.now();
        if let Some((author, index)) = author_target {
            self.move_to_author(article_index, author, index, now);
        }
        if let Some((magazine, index)) = magazine_target {
            self.move_to_magazine(article_index, magazine, index, now);
        }
        Ok(())
    }

    pub fn set_article_author(&mut self, article: ArticleId, author: AuthorId) -> DomainResult<()> {
        self.update_article(ArticleUpdate::new(article).with_author(author))
    }

    pub fn set_article_magazine(
        &mut self,
        article: ArticleId,
        magazine: MagazineId,
    ) -> DomainResult<()> {
        self.update_article(ArticleUpdate::new(article).with_magazine(magazine))
    }

    pub fn update_author(&mut self, update: AuthorUpdate) -> DomainResult<()> {
        self.author_index(update.id)?;
        if update.name.is_some() {
            tracing::warn!(author = %update.id, "rejected name change");
            return Err(DomainError::ImmutableField("name"));
        }
        Ok(())
    }

    pub fn update_magazine(&mut self, update: MagazineUpdate) -> DomainResult<()> {
        let index = self.magazine_index(update.id)?;
        let name = update.name.map(MagazineName::new).transpose()?;
        let category = update.category.map(Category::new).transpose()?;

        let magazine = &mut self.magazines[index];
        if let Some(name) = name {
            tracing::debug!(magazine = %update.id, from = %magazine.name, to = %name, "magazine renamed");
            magazine.rename(name);
        }
        if let Some(category) = category {
            tracing::debug!(magazine = %update.id, category = %category, "magazine recategorised");
            magazine.set_category(category);
        }
        Ok(())
    }

    pub fn rename_magazine(
        &mut self,
        magazine: MagazineId,
        name: impl Into<String>,
    ) -> DomainResult<()> {
        self.update_magazine(MagazineUpdate::new(magazine).with_name(name))
    }

    pub fn set_magazine_category(
        &mut self,
        magazine: MagazineId,
        category: impl Into<String>,
    ) -> DomainResult<()> {
        self.update_magazine(MagazineUpdate::new(magazine).with_category(category))
    }

    // Indices must already be validated by the caller.
    fn move_to_author(
        &mut self,
        article_index: usize,
        author: AuthorId,
        author_index: usize,
        now: DateTime<Utc>,
    ) {
        let previous = self.articles[article_index].author_id;
        if let Ok(owner) = self.author_index(previous) {
            self.authors[owner].articles.remove(self.articles[article_index].id);
        }
        let article = &mut self.articles[article_index];
        article.set_author(author, now);
        self.authors[author_index].articles.insert(article.id);
        tracing::debug!(article = %article.id, from = %previous, to = %author, "article author reassigned");
    }

    fn move_to_magazine(
        &mut self,
        article_index: usize,
        magazine: MagazineId,
        magazine_index: usize,
        now: DateTime<Utc>,
    ) {
        let previous = self.articles[article_index].magazine_id;
        if let Ok(owner) = self.magazine_index(previous) {
            self.magazines[owner].articles.remove(self.articles[article_index].id);
        }
        let article = &mut self.articles[article_index];
        article.set_magazine(magazine, now);
        self.magazines[magazine_index].articles.insert(article.id);
        tracing::debug!(article = %article.id, from = %previous, to = %magazine, "article magazine reassigned");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{DateTime, Utc};

    use super::*;
    use crate::application::ports::time::Clock;

    struct StaticClock(DateTime<Utc>);

    impl Clock for StaticClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(Arc::new(StaticClock(Utc::now())))
    }

    #[test]
    fn failed_update_changes_nothing() {
        let mut catalog = catalog();
        let ada = catalog.create_author("Ada").unwrap();
        let grace = catalog.create_author("Grace").unwrap();
        let weekly = catalog.create_magazine("Tech Weekly", "Tech").unwrap();
        let article = catalog.add_article(ada, weekly, "Rust vs C++").unwrap();

        let bogus = MagazineId::new(99).unwrap();
        let err = catalog
            .update_article(
                ArticleUpdate::new(article)
                    .with_author(grace)
                    .with_magazine(bogus),
            )
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(catalog.article(article).unwrap().author_id(), ada);
        assert!(catalog.author(ada).unwrap().articles().contains(article));
        assert!(catalog.author(grace).unwrap().articles().is_empty());
    }

    #[test]
    fn title_change_is_rejected_before_reassignment() {
        let mut catalog = catalog();
        let ada = catalog.create_author("Ada").unwrap();
        let grace = catalog.create_author("Grace").unwrap();
        let weekly = catalog.create_magazine("Tech Weekly", "Tech").unwrap();
        let article = catalog.add_article(ada, weekly, "Rust vs C++").unwrap();

        let err = catalog
            .update_article(
                ArticleUpdate::new(article)
                    .with_title("Another Title")
                    .with_author(grace),
            )
            .unwrap_err();

        assert_eq!(err, DomainError::ImmutableField("title"));
        assert_eq!(catalog.article(article).unwrap().title().as_str(), "Rust vs C++");
        assert_eq!(catalog.article(article).unwrap().author_id(), ada);
    }

    #[test]
    fn magazine_update_validates_both_fields_first() {
        let mut catalog = catalog();
        let weekly = catalog.create_magazine("Tech Weekly", "Tech").unwrap();

        let err = catalog
            .update_magazine(MagazineUpdate::new(weekly).with_name("Byte").with_category(""))
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(catalog.magazine(weekly).unwrap().name().as_str(), "Tech Weekly");
    }

    #[test]
    fn unknown_article_is_not_found() {
        let mut catalog = catalog();
        let ada = catalog.create_author("Ada").unwrap();
        let err = catalog
            .set_article_author(ArticleId::new(1).unwrap(), ada)
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }
}
