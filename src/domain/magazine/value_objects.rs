// src/domain/magazine/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MagazineId(pub i64);

impl MagazineId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "magazine id must be positive".into(),
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

impl From<MagazineId> for i64 {
    fn from(value: MagazineId) -> Self {
        value.0
    }
}

impl fmt::Display for MagazineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "magazine#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MagazineName(String);

impl MagazineName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let len = value.chars().count();
        if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len) {
            return Err(DomainError::Validation(format!(
                "magazine name must be between {NAME_MIN_CHARS} and {NAME_MAX_CHARS} characters, got {len}"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MagazineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category(String);

impl Category {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("category cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_length_bounds() {
        assert!(MagazineName::new("A").is_err());
        assert!(MagazineName::new("AB").is_ok());
        assert!(MagazineName::new("Sixteen Chars!!!").is_ok());
        assert!(MagazineName::new("Seventeen Chars!!").is_err());
    }

    #[test]
    fn category_rejects_empty() {
        assert!(Category::new("").unwrap_err().is_validation());
        assert_eq!(Category::new("Tech").unwrap().to_string(), "Tech");
    }
}
