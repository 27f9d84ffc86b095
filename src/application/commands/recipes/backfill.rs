// src/application/commands/recipes/backfill.rs
use super::RecipeCommandService;
use crate::{
    application::{dto::BackfillReport, error::ApplicationResult},
    domain::recipe::Recipe,
};

impl RecipeCommandService {
    /// Give every recipe without a slug its own one. Recipes that already
    /// carry a slug are never touched, so the pass can be rerun safely.
    pub async fn backfill_slugs(&self) -> ApplicationResult<BackfillReport> {
        let documents = self.read_repo.list_documents().await?;
        let mut report = BackfillReport::default();

        for document in documents {
            if document.slug.as_deref().is_some_and(|s| !s.is_empty()) {
                report.unchanged += 1;
                continue;
            }

            let id = document.id.clone();
            let recipe = match Recipe::try_from(document) {
                Ok(recipe) => recipe,
                Err(err) => {
                    tracing::warn!(id = %id, error = %err, "skipping malformed recipe");
                    report.failed += 1;
                    continue;
                }
            };

            match self.slug_service.assign_slug(&self.write_repo, &recipe).await {
                Ok(stored) => {
                    tracing::info!(
                        id = %stored.id,
                        slug = stored.slug.as_ref().map(|s| s.as_str()).unwrap_or_default(),
                        "slug assigned"
                    );
                    report.assigned += 1;
                }
                Err(err) => {
                    tracing::warn!(id = %recipe.id, error = %err, "slug assignment failed");
                    report.failed += 1;
                }
            }
        }

        tracing::info!(
            assigned = report.assigned,
            unchanged = report.unchanged,
            failed = report.failed,
            "slug backfill finished"
        );
        Ok(report)
    }
}
