// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::recipes::{ModerationNotifier, RecipeCommandService},
        ports::{mailer::TransactionalMailer, time::Clock, util::SlugGenerator},
        queries::recipes::RecipeQueryService,
    },
    domain::recipe::{
        RecipeReadRepository, RecipeUrlBuilder, RecipeWriteRepository,
        services::RecipeSlugService,
    },
};

/// Settings the services need besides their collaborators.
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub urls: RecipeUrlBuilder,
    pub max_slug_attempts: u32,
    pub moderation_email: Option<String>,
}

pub struct ApplicationServices {
    pub recipe_commands: Arc<RecipeCommandService>,
    pub recipe_queries: Arc<RecipeQueryService>,
    urls: RecipeUrlBuilder,
}

impl ApplicationServices {
    pub fn new(
        recipe_write_repo: Arc<dyn RecipeWriteRepository>,
        recipe_read_repo: Arc<dyn RecipeReadRepository>,
        mailer: Arc<dyn TransactionalMailer>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        settings: ServiceSettings,
    ) -> Self {
        let ServiceSettings {
            urls,
            max_slug_attempts,
            moderation_email,
        } = settings;

        let slug_service = Arc::new(RecipeSlugService::new(
            Arc::clone(&recipe_read_repo),
            Arc::clone(&slugger),
            max_slug_attempts,
        ));

        let notifier = ModerationNotifier::new(Arc::clone(&mailer), moderation_email, urls.clone());

        let recipe_commands = Arc::new(RecipeCommandService::new(
            Arc::clone(&recipe_write_repo),
            Arc::clone(&recipe_read_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
            notifier,
            urls.clone(),
        ));

        let recipe_queries = Arc::new(RecipeQueryService::new(
            Arc::clone(&recipe_read_repo),
            urls.clone(),
        ));

        Self {
            recipe_commands,
            recipe_queries,
            urls,
        }
    }

    pub fn urls(&self) -> &RecipeUrlBuilder {
        &self.urls
    }
}
