// src/application/queries/recipes/get_by_key.rs
use super::RecipeQueryService;
use crate::{
    application::{
        dto::RecipeDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::recipe::{Recipe, RecipeId, RecipeLocator, RecipeSlug, slugify},
};

/// Lookup of `/<records-path>/<key>`, where `key` is normally a slug but
/// may be the identifier of a recipe without one, or the title-derived
/// path listed for it.
pub struct GetRecipeByKeyQuery {
    pub key: String,
}

#[derive(Debug, Clone)]
pub enum RecipeLookup {
    Found(RecipeDto),
    /// The key named a recipe that has a different canonical path.
    Redirect { location: String },
}

impl RecipeQueryService {
    pub async fn get_recipe_by_key(
        &self,
        query: GetRecipeByKeyQuery,
    ) -> ApplicationResult<RecipeLookup> {
        let locator = RecipeLocator::from_path_segment(&query.key)
            .map_err(|_| ApplicationError::not_found("recipe not found"))?;

        let by_slug = match &locator {
            RecipeLocator::BySlug(slug) => self.read_repo.find_by_slug(slug).await?,
            RecipeLocator::ByIdentifier(_) => None,
        };
        if let Some(recipe) = by_slug {
            return Ok(RecipeLookup::Found(RecipeDto::from_recipe(recipe, &self.urls)));
        }

        let (id, derived) = match locator {
            RecipeLocator::ByIdentifier(id) => (id, None),
            RecipeLocator::BySlug(slug) => (RecipeId::new(slug.as_str())?, Some(slug)),
        };
        if let Some(recipe) = self.read_repo.find_by_id(&id).await? {
            return Ok(self.lookup_result(recipe));
        }

        let recipe = match derived {
            Some(slug) => self.find_slugless_by_title(&slug).await?,
            None => None,
        };
        recipe
            .map(|recipe| RecipeLookup::Found(RecipeDto::from_recipe(recipe, &self.urls)))
            .ok_or_else(|| ApplicationError::not_found("recipe not found"))
    }

    /// Oldest valid record without a slug whose title slugifies to `slug`.
    async fn find_slugless_by_title(
        &self,
        slug: &RecipeSlug,
    ) -> ApplicationResult<Option<Recipe>> {
        let documents = self.read_repo.list_documents().await?;
        Ok(documents
            .into_iter()
            .filter(|doc| doc.slug.as_deref().is_none_or(str::is_empty))
            .filter(|doc| doc.title.as_deref().is_some_and(|t| slugify(t) == slug.as_str()))
            .filter_map(|doc| Recipe::try_from(doc).ok())
            .min_by_key(|recipe| (recipe.created_at, recipe.id.to_string())))
    }

    fn lookup_result(&self, recipe: Recipe) -> RecipeLookup {
        match &recipe.slug {
            Some(slug) => RecipeLookup::Redirect {
                location: self.urls.export_path(recipe.id.as_str(), Some(slug.as_str())),
            },
            None => RecipeLookup::Found(RecipeDto::from_recipe(recipe, &self.urls)),
        }
    }
}
