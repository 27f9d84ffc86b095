use crate::domain::errors::DomainResult;
use crate::domain::recipe::entity::{NewRecipe, Recipe, RecipeDocument, RecipeUpdate};
use crate::domain::recipe::value_objects::{RecipeId, RecipeSlug};
use async_trait::async_trait;

#[async_trait]
pub trait RecipeWriteRepository: Send + Sync {
    /// Persist a new recipe. Fails with `DomainError::SlugCollision` when
    /// another recipe already holds `recipe.slug`.
    async fn insert(&self, recipe: NewRecipe) -> DomainResult<Recipe>;
    async fn update(&self, update: RecipeUpdate) -> DomainResult<Recipe>;
    /// Conditionally store `slug` on a recipe that has none yet.
    ///
    /// Returns the stored recipe; when it already had a slug, that slug is
    /// kept and returned unchanged. Fails with `DomainError::SlugCollision`
    /// when another recipe holds `slug`.
    async fn assign_slug(&self, id: &RecipeId, slug: &RecipeSlug) -> DomainResult<Recipe>;
    async fn delete(&self, id: &RecipeId) -> DomainResult<()>;
}

#[async_trait]
pub trait RecipeReadRepository: Send + Sync {
    async fn find_by_id(&self, id: &RecipeId) -> DomainResult<Option<Recipe>>;
    async fn find_by_slug(&self, slug: &RecipeSlug) -> DomainResult<Option<Recipe>>;
    /// Whether any stored record holds `slug`, valid or not.
    async fn slug_exists(&self, slug: &RecipeSlug) -> DomainResult<bool>;
    async fn list_documents(&self) -> DomainResult<Vec<RecipeDocument>>;
}
