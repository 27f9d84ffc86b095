// src/infrastructure/backend.rs
use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    domain::recipe::{RecipeReadRepository, RecipeWriteRepository},
    infrastructure::{
        database,
        repositories::{PostgresRecipeReadRepository, PostgresRecipeWriteRepository},
    },
};

/// Connection to the recipe store, shared by the server and the batch jobs.
#[derive(Clone)]
pub struct Backend {
    pool: PgPool,
}

impl Backend {
    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        let pool = database::init_pool(database_url).await?;
        tracing::debug!("database pool ready");
        Ok(Self { pool })
    }

    pub async fn migrate(&self) -> anyhow::Result<()> {
        database::run_migrations(&self.pool).await?;
        Ok(())
    }

    pub fn recipe_read_repo(&self) -> Arc<dyn RecipeReadRepository> {
        Arc::new(PostgresRecipeReadRepository::new(self.pool.clone()))
    }

    pub fn recipe_write_repo(&self) -> Arc<dyn RecipeWriteRepository> {
        Arc::new(PostgresRecipeWriteRepository::new(self.pool.clone()))
    }

    /// Close every pooled connection. Jobs call this on success and on
    /// failure alike.
    pub async fn shutdown(self) {
        self.pool.close().await;
        tracing::debug!("database pool closed");
    }
}
