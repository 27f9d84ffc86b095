// tests/support/helpers.rs
use std::sync::Arc;

use axum::body;
use axum::http::StatusCode;
use recipebook_core::application::{
    ports::{mailer::TransactionalMailer, time::Clock, util::SlugGenerator},
    services::{ApplicationServices, ServiceSettings},
};
use recipebook_core::domain::recipe::{
    RecipeReadRepository, RecipeUrlBuilder, RecipeWriteRepository,
};
use recipebook_core::infrastructure::system::RecipeSlugGenerator;
use recipebook_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;

use super::mocks::{FixedClock, InMemoryRecipeRepo, RecordingMailer};

pub const ADMIN_TOKEN: &str = "test-admin-token";
pub const MODERATOR: &str = "moderation@example.org";

pub fn urls() -> RecipeUrlBuilder {
    RecipeUrlBuilder::new("recipes", "https://example.org")
}

pub fn settings(max_slug_attempts: u32) -> ServiceSettings {
    ServiceSettings {
        urls: urls(),
        max_slug_attempts,
        moderation_email: Some(MODERATOR.into()),
    }
}

pub fn build_services_with(
    repo: Arc<InMemoryRecipeRepo>,
    mailer: Arc<RecordingMailer>,
    max_slug_attempts: u32,
) -> Arc<ApplicationServices> {
    let write: Arc<dyn RecipeWriteRepository> = repo.clone();
    let read: Arc<dyn RecipeReadRepository> = repo;
    let mailer: Arc<dyn TransactionalMailer> = mailer;
    let clock: Arc<dyn Clock> = Arc::new(FixedClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(RecipeSlugGenerator);

    Arc::new(ApplicationServices::new(
        write,
        read,
        mailer,
        clock,
        slugger,
        settings(max_slug_attempts),
    ))
}

pub fn build_services(repo: Arc<InMemoryRecipeRepo>) -> Arc<ApplicationServices> {
    build_services_with(repo, Arc::new(RecordingMailer::default()), 20)
}

pub fn make_test_router(repo: Arc<InMemoryRecipeRepo>) -> axum::Router {
    build_router(HttpState {
        services: build_services(repo),
        admin_token: Some(ADMIN_TOKEN.into()),
    })
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

pub async fn to_json(resp: axum::response::Response) -> (StatusCode, Value) {
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}
