// src/infrastructure/repositories/postgres_recipe.rs
use super::error::{map_sqlx, map_sqlx_for_slug};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::recipe::{
    NewRecipe, Recipe, RecipeDocument, RecipeId, RecipeReadRepository, RecipeSlug, RecipeUpdate,
    RecipeWriteRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const RECIPE_COLUMNS: &str = "id, title, slug, category, images, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresRecipeWriteRepository {
    pool: PgPool,
}

impl PostgresRecipeWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresRecipeReadRepository {
    pool: PgPool,
}

impl PostgresRecipeReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RecipeRow {
    id: String,
    title: Option<String>,
    slug: Option<String>,
    category: Option<String>,
    images: Vec<String>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl From<RecipeRow> for RecipeDocument {
    fn from(row: RecipeRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            slug: row.slug,
            category: row.category,
            images: row.images,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn into_recipe(row: RecipeRow) -> DomainResult<Recipe> {
    Recipe::try_from(RecipeDocument::from(row))
}

async fn fetch_by_id(pool: &PgPool, id: &RecipeId) -> DomainResult<Option<Recipe>> {
    let row = sqlx::query_as::<_, RecipeRow>(&format!(
        "SELECT {RECIPE_COLUMNS} FROM recipes WHERE id = $1"
    ))
    .bind(id.as_str())
    .fetch_optional(pool)
    .await
    .map_err(map_sqlx)?;

    row.map(into_recipe).transpose()
}

#[async_trait]
impl RecipeWriteRepository for PostgresRecipeWriteRepository {
    async fn insert(&self, recipe: NewRecipe) -> DomainResult<Recipe> {
        let NewRecipe {
            title,
            slug,
            category,
            images,
            created_at,
            updated_at,
        } = recipe;
        let id = uuid::Uuid::new_v4().simple().to_string();

        let row = sqlx::query_as::<_, RecipeRow>(&format!(
            "INSERT INTO recipes (id, title, slug, category, images, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {RECIPE_COLUMNS}"
        ))
        .bind(&id)
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(category)
        .bind(images)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_for_slug(&slug))?;

        into_recipe(row)
    }

    async fn update(&self, update: RecipeUpdate) -> DomainResult<Recipe> {
        let RecipeUpdate {
            id,
            title,
            category,
            images,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE recipes SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            let title_str: String = title.into();
            builder.push(", title = ");
            builder.push_bind(title_str);
        }

        if let Some(category) = category {
            builder.push(", category = ");
            builder.push_bind(category);
        }

        if let Some(images) = images {
            builder.push(", images = ");
            builder.push_bind(images);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(id.as_str().to_string());
        builder.push(" RETURNING ");
        builder.push(RECIPE_COLUMNS);

        let row = builder
            .build_query_as::<RecipeRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound(format!("recipe {id} not found")))?;

        into_recipe(row)
    }

    async fn assign_slug(&self, id: &RecipeId, slug: &RecipeSlug) -> DomainResult<Recipe> {
        let row = sqlx::query_as::<_, RecipeRow>(&format!(
            "UPDATE recipes SET slug = $2, updated_at = NOW()
             WHERE id = $1 AND (slug IS NULL OR slug = '')
             RETURNING {RECIPE_COLUMNS}"
        ))
        .bind(id.as_str())
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_for_slug(slug))?;

        match row {
            Some(row) => into_recipe(row),
            // Either the recipe is gone or it got a slug in the meantime.
            None => fetch_by_id(&self.pool, id)
                .await?
                .ok_or_else(|| DomainError::NotFound(format!("recipe {id} not found"))),
        }
    }

    async fn delete(&self, id: &RecipeId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("recipe {id} not found")));
        }
        Ok(())
    }
}

#[async_trait]
impl RecipeReadRepository for PostgresRecipeReadRepository {
    async fn find_by_id(&self, id: &RecipeId) -> DomainResult<Option<Recipe>> {
        fetch_by_id(&self.pool, id).await
    }

    async fn find_by_slug(&self, slug: &RecipeSlug) -> DomainResult<Option<Recipe>> {
        let row = sqlx::query_as::<_, RecipeRow>(&format!(
            "SELECT {RECIPE_COLUMNS} FROM recipes WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(into_recipe).transpose()
    }

    async fn slug_exists(&self, slug: &RecipeSlug) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM recipes WHERE slug = $1)")
            .bind(slug.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn list_documents(&self) -> DomainResult<Vec<RecipeDocument>> {
        let rows = sqlx::query_as::<_, RecipeRow>(&format!(
            "SELECT {RECIPE_COLUMNS} FROM recipes ORDER BY created_at NULLS FIRST, id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(RecipeDocument::from).collect())
    }
}
