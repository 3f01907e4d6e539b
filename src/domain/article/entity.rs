// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleTitle};
use crate::domain::author::AuthorId;
use crate::domain::magazine::MagazineId;
use chrono::{DateTime, Utc};

/// A single piece linking one author to one magazine.
///
/// The title is fixed at construction. Author and magazine are reassigned
/// only through the catalog, which keeps both owners' back-reference lists in
/// step with these fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub(crate) id: ArticleId,
    pub(crate) title: ArticleTitle,
    pub(crate) author_id: AuthorId,
    pub(crate) magazine_id: MagazineId,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

impl Article {
    pub(crate) fn new(
        id: ArticleId,
        title: ArticleTitle,
        author_id: AuthorId,
        magazine_id: MagazineId,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            author_id,
            magazine_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn title(&self) -> &ArticleTitle {
        &self.title
    }

    pub fn author_id(&self) -> AuthorId {
        self.author_id
    }

    pub fn magazine_id(&self) -> MagazineId {
        self.magazine_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub(crate) fn set_author(&mut self, author_id: AuthorId, now: DateTime<Utc>) {
        self.author_id = author_id;
        self.updated_at = now;
    }

    pub(crate) fn set_magazine(&mut self, magazine_id: MagazineId, now: DateTime<Utc>) {
        self.magazine_id = magazine_id;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<String>,
    pub author: Option<AuthorId>,
    pub magazine: Option<MagazineId>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId) -> Self {
        Self {
            id,
            title: None,
            author: None,
            magazine: None,
        }
    }

    /// Titles are immutable; an update carrying one is rejected as a whole.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: AuthorId) -> Self {
        self.author = Some(author);
        self
    }

    pub fn with_magazine(mut self, magazine: MagazineId) -> Self {
        self.magazine = Some(magazine);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_article() -> Article {
        Article::new(
            ArticleId::new(1).unwrap(),
            ArticleTitle::new("Rust vs C++").unwrap(),
            AuthorId::new(1).unwrap(),
            MagazineId::new(1).unwrap(),
            Utc::now(),
        )
    }

    #[test]
    fn new_article_has_matching_timestamps() {
        let article = sample_article();
        assert_eq!(article.created_at(), article.updated_at());
        assert_eq!(article.title().as_str(), "Rust vs C++");
    }

    #[test]
    fn set_author_touches_updated_at() {
        let mut article = sample_article();
        let later = article.created_at() + Duration::seconds(10);
        article.set_author(AuthorId::new(2).unwrap(), later);
        assert_eq!(article.author_id(), AuthorId::new(2).unwrap());
        assert_eq!(article.updated_at(), later);
        assert!(article.created_at() < later);
    }

    #[test]
    fn set_magazine_touches_updated_at() {
        let mut article = sample_article();
        let later = article.created_at() + Duration::seconds(5);
        article.set_magazine(MagazineId::new(9).unwrap(), later);
        assert_eq!(article.magazine_id(), MagazineId::new(9).unwrap());
        assert_eq!(article.updated_at(), later);
    }

    #[test]
    fn update_builder_tracks_fields() {
        let update = ArticleUpdate::new(ArticleId::new(1).unwrap())
            .with_author(AuthorId::new(3).unwrap());
        assert_eq!(update.author, Some(AuthorId::new(3).unwrap()));
        assert!(update.title.is_none());
        assert!(update.magazine.is_none());
    }
}
