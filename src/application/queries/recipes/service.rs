use std::sync::Arc;

use crate::domain::recipe::{RecipeReadRepository, RecipeUrlBuilder};

pub struct RecipeQueryService {
    pub(super) read_repo: Arc<dyn RecipeReadRepository>,
    pub(super) urls: RecipeUrlBuilder,
}

impl RecipeQueryService {
    pub fn new(read_repo: Arc<dyn RecipeReadRepository>, urls: RecipeUrlBuilder) -> Self {
        Self { read_repo, urls }
    }

    pub fn urls(&self) -> &RecipeUrlBuilder {
        &self.urls
    }
}
