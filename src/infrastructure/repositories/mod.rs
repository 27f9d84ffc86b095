// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_recipe;

pub use error::map_sqlx;
pub use postgres_recipe::{PostgresRecipeReadRepository, PostgresRecipeWriteRepository};
