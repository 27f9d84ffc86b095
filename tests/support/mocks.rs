// tests/support/mocks.rs
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use recipebook_core::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::{
        mailer::{EmailMessage, TransactionalMailer},
        site_writer::SiteWriter,
        time::Clock,
    },
};
use recipebook_core::domain::errors::{DomainError, DomainResult};
use recipebook_core::domain::recipe::{
    NewRecipe, Recipe, RecipeDocument, RecipeId, RecipeReadRepository, RecipeSlug, RecipeUpdate,
    RecipeWriteRepository,
};

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/// A stored recipe document, for seeding.
pub fn doc(id: &str, title: &str, slug: Option<&str>) -> RecipeDocument {
    RecipeDocument {
        id: id.into(),
        title: Some(title.into()),
        slug: slug.map(Into::into),
        category: None,
        images: vec![],
        created_at: Some(fixed_now()),
        updated_at: Some(fixed_now()),
    }
}

/// Recipe store backed by a vector of raw documents, so malformed records
/// can be seeded next to valid ones.
#[derive(Default)]
pub struct InMemoryRecipeRepo {
    docs: Mutex<Vec<RecipeDocument>>,
    next_id: Mutex<u32>,
    /// Slugs another writer grabs right before our next write of them.
    stolen: Mutex<Vec<String>>,
}

impl InMemoryRecipeRepo {
    pub fn with_docs(docs: Vec<RecipeDocument>) -> Self {
        Self {
            docs: Mutex::new(docs),
            ..Self::default()
        }
    }

    pub fn steal_slug(&self, slug: &str) {
        self.stolen.lock().unwrap().push(slug.into());
    }

    pub fn docs(&self) -> Vec<RecipeDocument> {
        self.docs.lock().unwrap().clone()
    }

    pub fn get(&self, id: &str) -> Option<RecipeDocument> {
        self.docs.lock().unwrap().iter().find(|d| d.id == id).cloned()
    }

    /// Slugs in use, with how many records carry each.
    pub fn slug_counts(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for slug in self.docs().into_iter().filter_map(|d| d.slug) {
            *counts.entry(slug).or_insert(0) += 1;
        }
        counts
    }

    fn slug_taken(docs: &[RecipeDocument], slug: &str) -> bool {
        docs.iter().any(|d| d.slug.as_deref() == Some(slug))
    }

    /// Simulates a concurrent writer winning the race for `slug`.
    fn take_if_stolen(&self, docs: &mut Vec<RecipeDocument>, slug: &str) -> bool {
        let mut stolen = self.stolen.lock().unwrap();
        let Some(pos) = stolen.iter().position(|s| s == slug) else {
            return false;
        };
        stolen.remove(pos);
        docs.push(doc(&format!("racer-{slug}"), "Racer", Some(slug)));
        true
    }
}

fn store(docs: &mut [RecipeDocument], recipe: &Recipe) {
    if let Some(existing) = docs.iter_mut().find(|d| d.id == recipe.id.as_str()) {
        *existing = RecipeDocument {
            id: recipe.id.to_string(),
            title: Some(recipe.title.to_string()),
            slug: recipe.slug.as_ref().map(|s| s.to_string()),
            category: recipe.category.clone(),
            images: recipe.images.clone(),
            created_at: Some(recipe.created_at),
            updated_at: Some(recipe.updated_at),
        };
    }
}

#[async_trait]
impl RecipeWriteRepository for InMemoryRecipeRepo {
    async fn insert(&self, recipe: NewRecipe) -> DomainResult<Recipe> {
        let mut docs = self.docs.lock().unwrap();
        let slug = recipe.slug.as_str();
        if self.take_if_stolen(&mut docs, slug) || Self::slug_taken(&docs, slug) {
            return Err(DomainError::SlugCollision(slug.into()));
        }

        let id = {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            format!("rec{next}")
        };
        let document = RecipeDocument {
            id,
            title: Some(recipe.title.to_string()),
            slug: Some(slug.into()),
            category: recipe.category,
            images: recipe.images,
            created_at: Some(recipe.created_at),
            updated_at: Some(recipe.updated_at),
        };
        docs.push(document.clone());
        Recipe::try_from(document)
    }

    async fn update(&self, update: RecipeUpdate) -> DomainResult<Recipe> {
        let mut docs = self.docs.lock().unwrap();
        let document = docs
            .iter()
            .find(|d| d.id == update.id.as_str())
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("recipe {} not found", update.id)))?;

        let mut recipe = Recipe::try_from(document)?;
        recipe.edit(update.title, update.category, update.images, update.updated_at);
        store(&mut docs, &recipe);
        Ok(recipe)
    }

    async fn assign_slug(&self, id: &RecipeId, slug: &RecipeSlug) -> DomainResult<Recipe> {
        let mut docs = self.docs.lock().unwrap();
        let document = docs
            .iter()
            .find(|d| d.id == id.as_str())
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("recipe {id} not found")))?;
        let mut recipe = Recipe::try_from(document)?;
        if recipe.slug.is_some() {
            return Ok(recipe);
        }

        if self.take_if_stolen(&mut docs, slug.as_str()) || Self::slug_taken(&docs, slug.as_str()) {
            return Err(DomainError::SlugCollision(slug.to_string()));
        }
        recipe.slug = Some(slug.clone());
        recipe.updated_at = fixed_now();
        store(&mut docs, &recipe);
        Ok(recipe)
    }

    async fn delete(&self, id: &RecipeId) -> DomainResult<()> {
        let mut docs = self.docs.lock().unwrap();
        let before = docs.len();
        docs.retain(|d| d.id != id.as_str());
        if docs.len() == before {
            return Err(DomainError::NotFound(format!("recipe {id} not found")));
        }
        Ok(())
    }
}

#[async_trait]
impl RecipeReadRepository for InMemoryRecipeRepo {
    async fn find_by_id(&self, id: &RecipeId) -> DomainResult<Option<Recipe>> {
        self.get(id.as_str()).map(Recipe::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &RecipeSlug) -> DomainResult<Option<Recipe>> {
        let found = self
            .docs()
            .into_iter()
            .find(|d| d.slug.as_deref() == Some(slug.as_str()));
        found.map(Recipe::try_from).transpose()
    }

    async fn slug_exists(&self, slug: &RecipeSlug) -> DomainResult<bool> {
        Ok(Self::slug_taken(&self.docs(), slug.as_str()))
    }

    async fn list_documents(&self) -> DomainResult<Vec<RecipeDocument>> {
        Ok(self.docs())
    }
}

/// Every read fails as if the database were down.
pub struct UnavailableRepo;

#[async_trait]
impl RecipeReadRepository for UnavailableRepo {
    async fn find_by_id(&self, _id: &RecipeId) -> DomainResult<Option<Recipe>> {
        Err(DomainError::BackendUnavailable("connection refused".into()))
    }

    async fn find_by_slug(&self, _slug: &RecipeSlug) -> DomainResult<Option<Recipe>> {
        Err(DomainError::BackendUnavailable("connection refused".into()))
    }

    async fn slug_exists(&self, _slug: &RecipeSlug) -> DomainResult<bool> {
        Err(DomainError::BackendUnavailable("connection refused".into()))
    }

    async fn list_documents(&self) -> DomainResult<Vec<RecipeDocument>> {
        Err(DomainError::BackendUnavailable("connection refused".into()))
    }
}

/// Bulk reads that take longer than any test timeout.
pub struct SlowRepo;

#[async_trait]
impl RecipeReadRepository for SlowRepo {
    async fn find_by_id(&self, _id: &RecipeId) -> DomainResult<Option<Recipe>> {
        Ok(None)
    }

    async fn find_by_slug(&self, _slug: &RecipeSlug) -> DomainResult<Option<Recipe>> {
        Ok(None)
    }

    async fn slug_exists(&self, _slug: &RecipeSlug) -> DomainResult<bool> {
        Ok(false)
    }

    async fn list_documents(&self) -> DomainResult<Vec<RecipeDocument>> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(vec![])
    }
}

#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<EmailMessage>>,
    pub fail: bool,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl TransactionalMailer for RecordingMailer {
    async fn send(&self, message: EmailMessage) -> ApplicationResult<()> {
        if self.fail {
            return Err(ApplicationError::infrastructure("mail api returned 500"));
        }
        self.sent.lock().unwrap().push(message);
        Ok(())
    }
}

/// Keeps written files in memory; names listed in `reject` fail to write.
#[derive(Default)]
pub struct MemorySiteWriter {
    pub files: Mutex<HashMap<String, String>>,
    pub reject: Vec<String>,
}

impl MemorySiteWriter {
    pub fn file(&self, name: &str) -> Option<String> {
        self.files.lock().unwrap().get(name).cloned()
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.files.lock().unwrap().keys().cloned().collect();
        names.sort();
        names
    }
}

#[async_trait]
impl SiteWriter for MemorySiteWriter {
    async fn write(&self, name: &str, contents: &str) -> ApplicationResult<()> {
        if self.reject.iter().any(|r| r == name) {
            return Err(ApplicationError::infrastructure(format!("disk full: {name}")));
        }
        self.files
            .lock()
            .unwrap()
            .insert(name.into(), contents.into());
        Ok(())
    }
}
