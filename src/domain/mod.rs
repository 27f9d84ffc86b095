pub mod errors;
pub mod recipe;
