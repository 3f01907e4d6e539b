// src/domain/magazine/entity.rs
use crate::domain::article::ArticleSet;
use crate::domain::magazine::value_objects::{Category, MagazineId, MagazineName};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Magazine {
    pub(crate) id: MagazineId,
    pub(crate) name: MagazineName,
    pub(crate) category: Category,
    pub(crate) articles: ArticleSet,
}

impl Magazine {
    pub(crate) fn new(id: MagazineId, name: MagazineName, category: Category) -> Self {
        Self {
            id,
            name,
            category,
            articles: ArticleSet::new(),
        }
    }

    pub fn id(&self) -> MagazineId {
        self.id
    }

    pub fn name(&self) -> &MagazineName {
        &self.name
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn articles(&self) -> &ArticleSet {
        &self.articles
    }

    pub(crate) fn rename(&mut self, name: MagazineName) {
        self.name = name;
    }

    pub(crate) fn set_category(&mut self, category: Category) {
        self.category = category;
    }
}

#[derive(Debug, Clone)]
pub struct MagazineUpdate {
    pub id: MagazineId,
    pub name: Option<String>,
    pub category: Option<String>,
}

impl MagazineUpdate {
    pub fn new(id: MagazineId) -> Self {
        Self {
            id,
            name: None,
            category: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}
