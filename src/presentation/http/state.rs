// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Shared secret for the admin API. `None` rejects every admin request.
    pub admin_token: Option<Arc<str>>,
}
