// src/application/export/mod.rs
//! Static files generated from the recipe collection.
//!
//! - **Sitemap**: one `<url>` per recipe plus the fixed site routes.
//! - **Share pages**: one HTML document per recipe carrying Open Graph and
//!   Twitter Card tags, redirecting browsers to the canonical page.
//!
//! Both read the whole collection once, skip records that cannot be
//! exported and overwrite their output on every run.

pub mod share_pages;
pub mod sitemap;

use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        errors::DomainError,
        recipe::{RecipeDocument, RecipeReadRepository},
    },
};

pub use share_pages::SharePageGenerator;
pub use sitemap::SitemapGenerator;

#[derive(Debug, Clone)]
pub struct ExportSettings {
    /// Upper bound on files written concurrently.
    pub concurrency: usize,
    /// Budget for the bulk read of the collection.
    pub read_timeout: Duration,
    pub site_name: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            concurrency: 8,
            read_timeout: Duration::from_secs(120),
            site_name: "Recipes".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub written: usize,
    pub skipped: usize,
}

/// Read every recipe document. A timeout is reported as a backend failure
/// so the job can simply be rerun.
pub(crate) async fn load_documents(
    read_repo: &Arc<dyn RecipeReadRepository>,
    read_timeout: Duration,
) -> ApplicationResult<Vec<RecipeDocument>> {
    match tokio::time::timeout(read_timeout, read_repo.list_documents()).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(ApplicationError::Domain(DomainError::BackendUnavailable(
            format!("bulk read timed out after {}s", read_timeout.as_secs()),
        ))),
    }
}

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut escaped = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
