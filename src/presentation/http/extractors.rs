// src/presentation/http/extractors.rs
use crate::{application::error::ApplicationError, presentation::http::state::HttpState};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// Proof that the request carried the admin API token.
#[derive(Debug, Clone, Copy)]
pub struct AdminAccess;

impl<S> FromRequestParts<S> for AdminAccess
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::Infrastructure(
                    "application state missing".into(),
                ))
            })?;

        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::Unauthorized(
                    "missing Authorization header".into(),
                ))
            })?;

        match app_state.admin_token.as_deref() {
            Some(expected) if expected == header.token() => Ok(Self),
            Some(_) => Err(HttpError::from_error(ApplicationError::Unauthorized(
                "invalid admin token".into(),
            ))),
            None => {
                tracing::warn!("admin request rejected: no admin token configured");
                Err(HttpError::from_error(ApplicationError::Unauthorized(
                    "admin api disabled".into(),
                )))
            }
        }
    }
}
