use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Opaque identifier assigned by the backend when a recipe is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecipeId(String);

impl RecipeId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("recipe id cannot be empty".into()));
        }
        if value.chars().any(|c| c.is_whitespace() || c == '/') {
            return Err(DomainError::Validation(format!(
                "recipe id contains forbidden characters: {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<RecipeId> for String {
    fn from(value: RecipeId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeTitle(String);

impl RecipeTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::InvalidTitle("title cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<RecipeTitle> for String {
    fn from(value: RecipeTitle) -> Self {
        value.0
    }
}

/// Persisted URL token of a recipe.
///
/// Only lowercase ASCII letters, digits, `_` and `-` are accepted, which is
/// exactly the alphabet produced by [`slugify`](super::slug::slugify).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecipeSlug(String);

impl RecipeSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        let valid = value
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_');
        if !valid {
            return Err(DomainError::Validation(format!(
                "slug is not url-safe: {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<RecipeSlug> for String {
    fn from(value: RecipeSlug) -> Self {
        value.0
    }
}
