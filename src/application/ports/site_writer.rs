// src/application/ports/site_writer.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

/// Destination of statically generated files.
#[async_trait]
pub trait SiteWriter: Send + Sync {
    /// Write (or fully overwrite) `name` with `contents`, creating the
    /// output directory when it does not exist yet.
    async fn write(&self, name: &str, contents: &str) -> ApplicationResult<()>;
}
