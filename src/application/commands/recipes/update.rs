use super::RecipeCommandService;
use crate::{
    application::{
        dto::RecipeDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::recipe::{RecipeId, RecipeTitle, RecipeUpdate},
};

/// Edit the content of a recipe. There is deliberately no way to pass a
/// slug: it is fixed once assigned.
pub struct UpdateRecipeCommand {
    pub id: String,
    pub title: Option<String>,
    /// `Some("")` clears the category.
    pub category: Option<String>,
    pub images: Option<Vec<String>>,
}

impl RecipeCommandService {
    pub async fn update_recipe(
        &self,
        command: UpdateRecipeCommand,
    ) -> ApplicationResult<RecipeDto> {
        let UpdateRecipeCommand {
            id,
            title,
            category,
            images,
        } = command;

        let id = RecipeId::new(id)?;
        let recipe = self
            .read_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("recipe not found"))?;

        let title = title.map(RecipeTitle::new).transpose()?;
        let category = category.map(|c| {
            let trimmed = c.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        });

        let now = self.clock.now();
        let mut update = RecipeUpdate::new(id, now);
        if let Some(title) = title {
            update = update.with_title(title);
        }
        if let Some(category) = category {
            update = update.with_category(category);
        }
        if let Some(images) = images {
            update = update.with_images(images);
        }

        if update.is_empty() {
            return Ok(RecipeDto::from_recipe(recipe, &self.urls));
        }

        let updated = self.write_repo.update(update).await?;
        tracing::info!(id = %updated.id, "recipe updated");
        Ok(RecipeDto::from_recipe(updated, &self.urls))
    }
}
