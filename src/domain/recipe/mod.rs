pub mod entity;
pub mod locator;
pub mod repository;
pub mod services;
pub mod slug;
pub mod url;
pub mod value_objects;

pub use entity::{NewRecipe, Recipe, RecipeDocument, RecipeUpdate};
pub use locator::RecipeLocator;
pub use repository::{RecipeReadRepository, RecipeWriteRepository};
pub use slug::slugify;
pub use url::{RecipeLink, RecipeUrlBuilder};
pub use value_objects::{RecipeId, RecipeSlug, RecipeTitle};
