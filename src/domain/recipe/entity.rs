// src/domain/recipe/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::recipe::value_objects::{RecipeId, RecipeSlug, RecipeTitle};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: RecipeTitle,
    pub slug: Option<RecipeSlug>,
    pub category: Option<String>,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Replace the editable content. The slug is left untouched so links
    /// shared under the previous title keep working.
    pub fn edit(
        &mut self,
        title: Option<RecipeTitle>,
        category: Option<Option<String>>,
        images: Option<Vec<String>>,
        now: DateTime<Utc>,
    ) {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(images) = images {
            self.images = images;
        }
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub title: RecipeTitle,
    pub slug: RecipeSlug,
    pub category: Option<String>,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct RecipeUpdate {
    pub id: RecipeId,
    pub title: Option<RecipeTitle>,
    pub category: Option<Option<String>>,
    pub images: Option<Vec<String>>,
    pub updated_at: DateTime<Utc>,
}

impl RecipeUpdate {
    pub fn new(id: RecipeId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            category: None,
            images: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: RecipeTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = Some(images);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.category.is_none() && self.images.is_none()
    }
}

/// A recipe as stored by the backend, before validation.
///
/// Bulk reads hand these out so that one malformed record can be skipped
/// without failing the whole read.
#[derive(Debug, Clone, Default)]
pub struct RecipeDocument {
    pub id: String,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub category: Option<String>,
    pub images: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<RecipeDocument> for Recipe {
    type Error = DomainError;

    fn try_from(doc: RecipeDocument) -> DomainResult<Self> {
        let id = RecipeId::new(doc.id)?;
        let title = RecipeTitle::new(doc.title.unwrap_or_default())?;
        let slug = doc
            .slug
            .filter(|s| !s.is_empty())
            .map(RecipeSlug::new)
            .transpose()?;
        // Old rows may lack timestamps.
        let created_at = doc
            .created_at
            .or(doc.updated_at)
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);

        Ok(Self {
            id,
            title,
            slug,
            category: doc.category.filter(|c| !c.trim().is_empty()),
            images: doc.images,
            created_at,
            updated_at: doc.updated_at.unwrap_or(created_at),
        })
    }
}
