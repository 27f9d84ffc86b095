// src/application/queries/recipes/mod.rs
mod get_by_key;
mod legacy;
mod list;
mod service;

pub use get_by_key::{GetRecipeByKeyQuery, RecipeLookup};
pub use legacy::LegacyResolution;
pub use service::RecipeQueryService;
