use crate::domain::article::value_objects::ArticleId;

/// Ordered, duplicate-free list of the articles linked to an owner.
///
/// Authors and magazines each hold one of these as their back-reference list.
/// `insert` and `remove` report whether they changed anything, so callers can
/// check the membership invariant instead of assuming it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleSet(Vec<ArticleId>);

impl ArticleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `id`. Returns `false` without touching the list when already present.
    pub fn insert(&mut self, id: ArticleId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.0.push(id);
        true
    }

    /// Removes `id`. Returns `false` when it was not a member.
    pub fn remove(&mut self, id: ArticleId) -> bool {
        match self.0.iter().position(|member| *member == id) {
            Some(pos) => {
                self.0.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: ArticleId) -> bool {
        self.0.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = ArticleId> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
