pub mod recipes;

pub use recipes::{BackfillReport, RecipeDto};
