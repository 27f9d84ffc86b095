// src/application/commands/recipes/service.rs
use std::sync::Arc;

use super::notify::ModerationNotifier;
use crate::{
    application::ports::time::Clock,
    domain::recipe::{
        RecipeReadRepository, RecipeUrlBuilder, RecipeWriteRepository,
        services::RecipeSlugService,
    },
};

pub struct RecipeCommandService {
    pub(super) write_repo: Arc<dyn RecipeWriteRepository>,
    pub(super) read_repo: Arc<dyn RecipeReadRepository>,
    pub(super) slug_service: Arc<RecipeSlugService>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) notifier: ModerationNotifier,
    pub(super) urls: RecipeUrlBuilder,
}

impl RecipeCommandService {
    pub fn new(
        write_repo: Arc<dyn RecipeWriteRepository>,
        read_repo: Arc<dyn RecipeReadRepository>,
        slug_service: Arc<RecipeSlugService>,
        clock: Arc<dyn Clock>,
        notifier: ModerationNotifier,
        urls: RecipeUrlBuilder,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            clock,
            notifier,
            urls,
        }
    }
}
