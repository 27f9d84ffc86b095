// src/application/commands/recipes/mod.rs
mod backfill;
mod create;
mod delete;
mod notify;
mod service;
mod update;

pub use create::{CreateRecipeCommand, CreateRecipeCommandBuilder};
pub use delete::DeleteRecipeCommand;
pub use notify::ModerationNotifier;
pub use service::RecipeCommandService;
pub use update::UpdateRecipeCommand;
