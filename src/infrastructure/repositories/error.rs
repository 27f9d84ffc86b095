use crate::domain::{errors::DomainError, recipe::RecipeSlug};

const IDX_RECIPE_SLUG: &str = "recipes_slug_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if db_err.constraint() == Some(IDX_RECIPE_SLUG) {
                return DomainError::SlugCollision("slug already exists".into());
            }
            if db_err.code().as_deref() == Some("23505") {
                return DomainError::SlugCollision("unique constraint violated".into());
            }
            DomainError::BackendUnavailable(db_err.message().to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("recipe not found".into()),
        _ => DomainError::BackendUnavailable(err.to_string()),
    }
}

/// Like [`map_sqlx`], naming the slug in collision errors.
pub fn map_sqlx_for_slug(slug: &RecipeSlug) -> impl Fn(sqlx::Error) -> DomainError + '_ {
    move |err| match map_sqlx(err) {
        DomainError::SlugCollision(_) => DomainError::SlugCollision(slug.to_string()),
        other => other,
    }
}
