// src/domain/recipe/services/mod.rs
use std::future::Future;
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::recipe::entity::Recipe;
use crate::domain::recipe::repository::{RecipeReadRepository, RecipeWriteRepository};
use crate::domain::recipe::value_objects::{RecipeSlug, RecipeTitle};

pub const DEFAULT_MAX_SLUG_ATTEMPTS: u32 = 20;

/// Domain service responsible for producing unique slugs for recipes.
pub struct RecipeSlugService {
    read_repo: Arc<dyn RecipeReadRepository>,
    generator: Arc<dyn SlugGenerator>,
    max_attempts: u32,
}

impl RecipeSlugService {
    pub fn new(
        read_repo: Arc<dyn RecipeReadRepository>,
        generator: Arc<dyn SlugGenerator>,
        max_attempts: u32,
    ) -> Self {
        Self {
            read_repo,
            generator,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Find the first free slug among `base`, `base-2`, `base-3`, ...
    pub async fn resolve_slug(&self, title: &RecipeTitle) -> DomainResult<RecipeSlug> {
        let base = self.base_slug(title)?;

        for attempt in 1..=self.max_attempts {
            let candidate = if attempt == 1 {
                base.clone()
            } else {
                format!("{base}-{attempt}")
            };
            let slug = RecipeSlug::new(candidate)?;
            if !self.read_repo.slug_exists(&slug).await? {
                return Ok(slug);
            }
            tracing::debug!(slug = %slug, "slug taken, trying next candidate");
        }

        Err(DomainError::SlugCollisionExhausted {
            base,
            attempts: self.max_attempts,
        })
    }

    /// Resolve a slug and hand it to `write`, which must store it atomically
    /// and fail with `DomainError::SlugCollision` if it lost a race for it.
    /// Lost races restart resolution, within the same attempt budget.
    pub async fn reserve<T, F, Fut>(&self, title: &RecipeTitle, mut write: F) -> DomainResult<T>
    where
        F: FnMut(RecipeSlug) -> Fut + Send,
        Fut: Future<Output = DomainResult<T>> + Send,
    {
        let mut lost_races = 0u32;
        loop {
            let slug = self.resolve_slug(title).await?;
            match write(slug).await {
                Err(DomainError::SlugCollision(taken)) => {
                    lost_races += 1;
                    tracing::warn!(slug = %taken, lost_races, "slug reserved concurrently");
                    if lost_races >= self.max_attempts {
                        return Err(DomainError::SlugCollisionExhausted {
                            base: self.base_slug(title)?,
                            attempts: lost_races,
                        });
                    }
                }
                other => return other,
            }
        }
    }

    /// Give `recipe` a slug unless it already has one. The write only lands
    /// on records that are still slugless, so concurrent runs cannot
    /// overwrite each other.
    pub async fn assign_slug(
        &self,
        write_repo: &Arc<dyn RecipeWriteRepository>,
        recipe: &Recipe,
    ) -> DomainResult<Recipe> {
        if recipe.slug.is_some() {
            return Ok(recipe.clone());
        }

        self.reserve(&recipe.title, |slug| {
            let repo = Arc::clone(write_repo);
            let id = recipe.id.clone();
            async move { repo.assign_slug(&id, &slug).await }
        })
        .await
    }

    fn base_slug(&self, title: &RecipeTitle) -> DomainResult<String> {
        let base = self.generator.slugify(title.as_str());
        if base.is_empty() {
            return Err(DomainError::InvalidTitle(format!(
                "`{title}` has no characters usable in a slug"
            )));
        }
        Ok(base)
    }
}
