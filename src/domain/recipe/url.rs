// src/domain/recipe/url.rs
//! Canonical public paths for recipes.

use crate::domain::recipe::entity::Recipe;
use crate::domain::recipe::slug::slugify;

/// The fields a public path can be derived from. Any of them may be missing
/// on legacy records.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecipeLink<'a> {
    pub id: Option<&'a str>,
    pub slug: Option<&'a str>,
    pub title: Option<&'a str>,
}

impl<'a> From<&'a Recipe> for RecipeLink<'a> {
    fn from(recipe: &'a Recipe) -> Self {
        Self {
            id: Some(recipe.id.as_str()),
            slug: recipe.slug.as_ref().map(|s| s.as_str()),
            title: Some(recipe.title.as_str()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecipeUrlBuilder {
    records_path: String,
    site_url: String,
}

impl RecipeUrlBuilder {
    pub fn new(records_path: &str, site_url: &str) -> Self {
        Self {
            records_path: format!("/{}", records_path.trim_matches('/')),
            site_url: site_url.trim_end_matches('/').to_string(),
        }
    }

    /// Listing page, e.g. `/recipes`.
    pub fn listing_path(&self) -> &str {
        &self.records_path
    }

    /// Canonical path of a recipe; first match wins: persisted slug, slug
    /// derived from the title, legacy `?id=` form, listing page.
    pub fn build_url(&self, link: &RecipeLink<'_>) -> String {
        if let Some(slug) = link.slug.filter(|s| !s.is_empty()) {
            return self.slug_path(slug);
        }

        if let Some(title) = link.title.filter(|t| !t.is_empty()) {
            let derived = slugify(title);
            if !derived.is_empty() {
                return self.slug_path(&derived);
            }
        }

        if let Some(id) = link.id.filter(|i| !i.is_empty()) {
            return self.legacy_path(id);
        }

        self.records_path.clone()
    }

    /// Path used by static exports: the persisted slug, or the identifier
    /// itself when the record has none.
    pub fn export_path(&self, id: &str, slug: Option<&str>) -> String {
        self.slug_path(slug.filter(|s| !s.is_empty()).unwrap_or(id))
    }

    pub fn legacy_path(&self, id: &str) -> String {
        // serializing a single string pair cannot fail
        let query = serde_urlencoded::to_string(&[("id", id)][..]).unwrap_or_default();
        format!("{}?{query}", self.records_path)
    }

    pub fn absolute(&self, path: &str) -> String {
        format!("{}{path}", self.site_url)
    }

    fn slug_path(&self, slug: &str) -> String {
        format!("{}/{slug}", self.records_path)
    }
}
