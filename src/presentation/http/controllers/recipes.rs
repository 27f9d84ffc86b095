// src/presentation/http/controllers/recipes.rs
use crate::application::{
    commands::recipes::{CreateRecipeCommand, DeleteRecipeCommand, UpdateRecipeCommand},
    dto::{BackfillReport, RecipeDto},
    queries::recipes::{GetRecipeByKeyQuery, LegacyResolution, RecipeLookup},
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::AdminAccess;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct ListingParams {
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateRecipeRequest {
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRecipeRequest {
    pub title: Option<String>,
    pub category: Option<String>,
    pub images: Option<Vec<String>>,
}

/// Listing page. A legacy `?id=` query is answered with a single permanent
/// redirect to the slug-keyed page.
pub async fn list_recipes(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ListingParams>,
) -> HttpResult<Response> {
    if let Some(id) = params.id {
        return Ok(legacy_response(
            state.services.recipe_queries.resolve_legacy(&id).await,
        ));
    }

    let recipes = state
        .services
        .recipe_queries
        .list_recipes()
        .await
        .into_http()?;
    Ok(Json(recipes).into_response())
}

fn legacy_response(resolution: LegacyResolution) -> Response {
    match resolution {
        LegacyResolution::Redirect { location } => Redirect::permanent(&location).into_response(),
        LegacyResolution::NotFound => {
            HttpError::new(StatusCode::NOT_FOUND, "recipe not found").into_response()
        }
        LegacyResolution::Fallback { id, path } => {
            Json(json!({ "id": id, "path": path, "fallback": true })).into_response()
        }
    }
}

pub async fn get_recipe(
    Extension(state): Extension<HttpState>,
    Path(key): Path<String>,
) -> HttpResult<Response> {
    let lookup = state
        .services
        .recipe_queries
        .get_recipe_by_key(GetRecipeByKeyQuery { key })
        .await
        .into_http()?;

    Ok(match lookup {
        RecipeLookup::Found(recipe) => Json(recipe).into_response(),
        RecipeLookup::Redirect { location } => Redirect::permanent(&location).into_response(),
    })
}

pub async fn create_recipe(
    Extension(state): Extension<HttpState>,
    _admin: AdminAccess,
    Json(payload): Json<CreateRecipeRequest>,
) -> HttpResult<(StatusCode, Json<RecipeDto>)> {
    let command = CreateRecipeCommand {
        title: payload.title,
        category: payload.category,
        images: payload.images,
    };

    state
        .services
        .recipe_commands
        .create_recipe(command)
        .await
        .into_http()
        .map(|recipe| (StatusCode::CREATED, Json(recipe)))
}

pub async fn update_recipe(
    Extension(state): Extension<HttpState>,
    _admin: AdminAccess,
    Path(id): Path<String>,
    Json(payload): Json<UpdateRecipeRequest>,
) -> HttpResult<Json<RecipeDto>> {
    let command = UpdateRecipeCommand {
        id,
        title: payload.title,
        category: payload.category,
        images: payload.images,
    };

    state
        .services
        .recipe_commands
        .update_recipe(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_recipe(
    Extension(state): Extension<HttpState>,
    _admin: AdminAccess,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .recipe_commands
        .delete_recipe(DeleteRecipeCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn backfill_slugs(
    Extension(state): Extension<HttpState>,
    _admin: AdminAccess,
) -> HttpResult<Json<BackfillReport>> {
    state
        .services
        .recipe_commands
        .backfill_slugs()
        .await
        .into_http()
        .map(Json)
}
