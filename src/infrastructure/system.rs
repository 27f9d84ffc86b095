// src/infrastructure/system.rs
use chrono::{DateTime, Utc};

use crate::application::ports::{time::Clock, util::SlugGenerator};
use crate::domain::recipe::slugify;

/// Wall clock.
#[derive(Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Slugs persisted in production; see [`slugify`].
#[derive(Default, Clone, Copy)]
pub struct RecipeSlugGenerator;

impl SlugGenerator for RecipeSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}
