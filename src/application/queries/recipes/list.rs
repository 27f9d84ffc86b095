use super::RecipeQueryService;
use crate::{
    application::{dto::RecipeDto, error::ApplicationResult},
    domain::recipe::Recipe,
};

impl RecipeQueryService {
    /// All recipes, newest first. Records that fail validation are left out
    /// of the listing instead of failing it.
    pub async fn list_recipes(&self) -> ApplicationResult<Vec<RecipeDto>> {
        let documents = self.read_repo.list_documents().await?;

        let mut recipes: Vec<Recipe> = documents
            .into_iter()
            .filter_map(|document| {
                let id = document.id.clone();
                Recipe::try_from(document)
                    .inspect_err(|err| tracing::warn!(id = %id, error = %err, "unlisted recipe"))
                    .ok()
            })
            .collect();
        recipes.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(recipes
            .into_iter()
            .map(|recipe| RecipeDto::from_recipe(recipe, &self.urls))
            .collect())
    }
}
