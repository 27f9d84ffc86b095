// src/application/commands/recipes/create.rs
use std::sync::Arc;

use super::RecipeCommandService;
use crate::{
    application::{dto::RecipeDto, error::ApplicationResult},
    domain::recipe::{NewRecipe, RecipeTitle},
};

pub struct CreateRecipeCommand {
    pub title: String,
    pub category: Option<String>,
    pub images: Vec<String>,
}

impl CreateRecipeCommand {
    pub fn builder() -> CreateRecipeCommandBuilder {
        CreateRecipeCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateRecipeCommandBuilder {
    title: Option<String>,
    category: Option<String>,
    images: Vec<String>,
}

impl CreateRecipeCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.images.push(url.into());
        self
    }

    pub fn build(self) -> Result<CreateRecipeCommand, &'static str> {
        Ok(CreateRecipeCommand {
            title: self.title.ok_or("title is required")?,
            category: self.category,
            images: self.images,
        })
    }
}

impl RecipeCommandService {
    /// Create a recipe under a freshly reserved, unique slug.
    pub async fn create_recipe(
        &self,
        command: CreateRecipeCommand,
    ) -> ApplicationResult<RecipeDto> {
        let CreateRecipeCommand {
            title,
            category,
            images,
        } = command;

        let title = RecipeTitle::new(title)?;
        let category = category.filter(|c| !c.trim().is_empty());
        let now = self.clock.now();

        let created = self
            .slug_service
            .reserve(&title, |slug| {
                let repo = Arc::clone(&self.write_repo);
                let new_recipe = NewRecipe {
                    title: title.clone(),
                    slug,
                    category: category.clone(),
                    images: images.clone(),
                    created_at: now,
                    updated_at: now,
                };
                async move { repo.insert(new_recipe).await }
            })
            .await?;

        tracing::info!(
            id = %created.id,
            slug = created.slug.as_ref().map(|s| s.as_str()).unwrap_or_default(),
            "recipe created"
        );
        self.notifier.recipe_created(&created).await;

        Ok(RecipeDto::from_recipe(created, &self.urls))
    }
}
