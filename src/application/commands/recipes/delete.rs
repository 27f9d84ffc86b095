use super::RecipeCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::recipe::RecipeId,
};

pub struct DeleteRecipeCommand {
    pub id: String,
}

impl RecipeCommandService {
    pub async fn delete_recipe(&self, command: DeleteRecipeCommand) -> ApplicationResult<()> {
        let id = RecipeId::new(command.id)?;
        let recipe = self
            .read_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("recipe not found"))?;

        self.write_repo.delete(&recipe.id).await?;
        tracing::info!(id = %recipe.id, "recipe deleted");
        Ok(())
    }
}
