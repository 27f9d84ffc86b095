use crate::domain::recipe::{Recipe, RecipeLink, RecipeUrlBuilder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeDto {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    /// Canonical public path of the recipe.
    pub path: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RecipeDto {
    pub fn from_recipe(recipe: Recipe, urls: &RecipeUrlBuilder) -> Self {
        let path = urls.build_url(&RecipeLink::from(&recipe));
        Self {
            id: recipe.id.into(),
            title: recipe.title.into(),
            slug: recipe.slug.map(Into::into),
            category: recipe.category,
            images: recipe.images,
            path,
            created_at: recipe.created_at,
            updated_at: recipe.updated_at,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackfillReport {
    pub assigned: usize,
    pub unchanged: usize,
    pub failed: usize,
}
