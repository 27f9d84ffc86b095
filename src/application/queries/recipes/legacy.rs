// src/application/queries/recipes/legacy.rs
use super::RecipeQueryService;
use crate::domain::errors::DomainError;
use crate::domain::recipe::{RecipeId, RecipeLocator};

/// Terminal state of a legacy `?id=` request.
///
/// `Received -> Resolving -> Found -> Redirect`, or `NotFound`, or
/// `Fallback` when the backend could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LegacyResolution {
    Redirect { location: String },
    NotFound,
    /// Backend failure: serve the identifier-keyed view as is.
    Fallback { id: String, path: String },
}

impl RecipeQueryService {
    /// Map a legacy identifier onto the slug-keyed canonical path.
    ///
    /// The target never carries an `id` query, so following it cannot lead
    /// back here.
    pub async fn resolve_legacy(&self, identifier: &str) -> LegacyResolution {
        let Ok(RecipeLocator::ByIdentifier(id)) = RecipeLocator::identifier(identifier) else {
            tracing::debug!(identifier, "malformed legacy identifier");
            return LegacyResolution::NotFound;
        };

        tracing::debug!(id = %id, "resolving legacy identifier");
        match self.read_repo.find_by_id(&id).await {
            Ok(Some(recipe)) => {
                let location = self
                    .urls
                    .export_path(recipe.id.as_str(), recipe.slug.as_ref().map(|s| s.as_str()));
                tracing::info!(id = %id, location = %location, "legacy url redirected");
                LegacyResolution::Redirect { location }
            }
            Ok(None) => LegacyResolution::NotFound,
            Err(DomainError::BackendUnavailable(err)) => {
                tracing::error!(id = %id, error = %err, "legacy url resolution failed");
                self.fallback(&id)
            }
            // The record exists but cannot be rendered anywhere.
            Err(err) => {
                tracing::warn!(id = %id, error = %err, "legacy url names an invalid record");
                LegacyResolution::NotFound
            }
        }
    }

    fn fallback(&self, id: &RecipeId) -> LegacyResolution {
        LegacyResolution::Fallback {
            id: id.to_string(),
            path: self.urls.legacy_path(id.as_str()),
        }
    }
}
