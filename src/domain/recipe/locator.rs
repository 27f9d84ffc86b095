use crate::domain::errors::DomainResult;
use crate::domain::recipe::value_objects::{RecipeId, RecipeSlug};

/// How an incoming request addresses a recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeLocator {
    /// Legacy `?id=` links.
    ByIdentifier(RecipeId),
    BySlug(RecipeSlug),
}

impl RecipeLocator {
    pub fn identifier(value: impl Into<String>) -> DomainResult<Self> {
        RecipeId::new(value).map(Self::ByIdentifier)
    }

    pub fn slug(value: impl Into<String>) -> DomainResult<Self> {
        RecipeSlug::new(value).map(Self::BySlug)
    }

    /// Classify a path segment. Anything that is a valid slug is looked up
    /// as one first; other values can only be identifiers.
    pub fn from_path_segment(segment: &str) -> DomainResult<Self> {
        Self::slug(segment).or_else(|_| Self::identifier(segment))
    }
}
