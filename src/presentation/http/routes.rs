// src/presentation/http/routes.rs
use crate::presentation::http::controllers::recipes;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::Method,
    routing::{get, patch, post},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    let listing = state.services.urls().listing_path().to_string();

    Router::new()
        .route("/health", get(health))
        .route(&listing, get(recipes::list_recipes))
        .route(&format!("{listing}/{{key}}"), get(recipes::get_recipe))
        .route("/api/v1/recipes", post(recipes::create_recipe))
        .route("/api/v1/recipes/backfill", post(recipes::backfill_slugs))
        .route(
            "/api/v1/recipes/{id}",
            patch(recipes::update_recipe).delete(recipes::delete_recipe),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
