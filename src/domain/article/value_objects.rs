use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const TITLE_MIN_CHARS: usize = 5;
pub const TITLE_MAX_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Self(i64::try_from(index).map_or(i64::MAX, |i| i + 1))
    }

    pub(crate) fn index(self) -> Option<usize> {
        self.0
            .checked_sub(1)
            .and_then(|index| usize::try_from(index).ok())
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "article#{}", self.0)
    }
}

/// Article headline, between 5 and 50 characters inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let len = value.chars().count();
        if !(TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&len) {
            return Err(DomainError::Validation(format!(
                "title must be between {TITLE_MIN_CHARS} and {TITLE_MAX_CHARS} characters, got {len}"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_accepts_bounds() {
        assert_eq!(ArticleTitle::new("Rusty").unwrap().as_str(), "Rusty");
        let longest = "x".repeat(TITLE_MAX_CHARS);
        assert_eq!(ArticleTitle::new(longest.clone()).unwrap().as_str(), longest);
    }

    #[test]
    fn title_rejects_out_of_range() {
        assert!(ArticleTitle::new("Rust").unwrap_err().is_validation());
        assert!(ArticleTitle::new("").unwrap_err().is_validation());
        assert!(
            ArticleTitle::new("x".repeat(TITLE_MAX_CHARS + 1))
                .unwrap_err()
                .is_validation()
        );
    }

    #[test]
    fn title_counts_characters_not_bytes() {
        // five characters, ten bytes
        assert!(ArticleTitle::new("ééééé").is_ok());
    }

    #[test]
    fn id_must_be_positive() {
        assert!(ArticleId::new(0).is_err());
        assert_eq!(ArticleId::new(3).unwrap().index(), Some(2));
        assert_eq!(ArticleId::from_index(0), ArticleId(1));
    }
}
