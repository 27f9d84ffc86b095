// src/application/ports/util.rs
/// Title to slug conversion used when new slugs are resolved.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
