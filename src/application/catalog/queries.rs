// src/application/catalog/queries.rs
use std::collections::{HashMap, HashSet};

use super::Catalog;
use crate::domain::{
    article::Article,
    author::{Author, AuthorId},
    errors::DomainResult,
    magazine::{Magazine, MagazineId},
};

impl Catalog {
    /// Articles credited to `author`, in the order they were linked.
    pub fn articles_by_author(&self, author: AuthorId) -> DomainResult<Vec<&Article>> {
        let author = self.author(author)?;
        Ok(self.resolve(author.articles()))
    }

    /// Distinct magazines the author has written for.
    pub fn magazines_for_author(&self, author: AuthorId) -> DomainResult<Vec<&Magazine>> {
        let mut seen = HashSet::new();
        Ok(self
            .articles_by_author(author)?
            .into_iter()
            .filter(|article| seen.insert(article.magazine_id))
            .filter_map(|article| self.magazine(article.magazine_id).ok())
            .collect())
    }

    /// Distinct categories of the author's magazines, or `None` when the
    /// author has no articles at all.
    pub fn topic_areas(&self, author: AuthorId) -> DomainResult<Option<Vec<&str>>> {
        if self.author(author)?.articles().is_empty() {
            return Ok(None);
        }
        let mut seen = HashSet::new();
        let categories: Vec<&str> = self
            .magazines_for_author(author)?
            .into_iter()
            .map(|magazine| magazine.category().as_str())
            .filter(|category| seen.insert(*category))
            .collect();
        Ok(Some(categories))
    }

    pub fn articles_in_magazine(&self, magazine: MagazineId) -> DomainResult<Vec<&Article>> {
        let magazine = self.magazine(magazine)?;
        Ok(self.resolve(magazine.articles()))
    }

    /// Distinct authors who have written for `magazine`.
    pub fn contributors(&self, magazine: MagazineId) -> DomainResult<Vec<&Author>> {
        let mut seen = HashSet::new();
        Ok(self
            .articles_in_magazine(magazine)?
            .into_iter()
            .filter(|article| seen.insert(article.author_id))
            .filter_map(|article| self.author(article.author_id).ok())
            .collect())
    }

    pub fn article_titles(&self, magazine: MagazineId) -> DomainResult<Option<Vec<&str>>> {
        let titles: Vec<&str> = self
            .articles_in_magazine(magazine)?
            .into_iter()
            .map(|article| article.title().as_str())
            .collect();
        Ok((!titles.is_empty()).then_some(titles))
    }

    /// Authors with more than the contributor threshold of articles in
    /// `magazine`, ordered by their first article there. `None` when nobody
    /// qualifies.
    pub fn contributing_authors(&self, magazine: MagazineId) -> DomainResult<Option<Vec<&Author>>> {
        let mut order = Vec::new();
        let mut counts: HashMap<AuthorId, usize> = HashMap::new();
        for article in self.articles_in_magazine(magazine)? {
            let count = counts.entry(article.author_id).or_insert(0);
            if *count == 0 {
                order.push(article.author_id);
            }
            *count += 1;
        }

        let qualifying: Vec<&Author> = order
            .into_iter()
            .filter(|author| counts[author] > self.contributor_threshold)
            .filter_map(|author| self.author(author).ok())
            .collect();
        Ok((!qualifying.is_empty()).then_some(qualifying))
    }

    /// The magazine with the most articles across the whole catalog. Ties go
    /// to the earliest registered magazine; `None` when no magazine has any
    /// articles.
    pub fn top_publisher(&self) -> Option<&Magazine> {
        self.magazines
            .iter()
            .filter(|magazine| !magazine.articles().is_empty())
            .reduce(|best, candidate| {
                if candidate.articles().len() > best.articles().len() {
                    candidate
                } else {
                    best
                }
            })
    }
}
