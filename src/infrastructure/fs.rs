// src/infrastructure/fs.rs
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::site_writer::SiteWriter,
};

/// Writes generated files into one output directory.
#[derive(Debug, Clone)]
pub struct FsSiteWriter {
    root: PathBuf,
}

impl FsSiteWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl SiteWriter for FsSiteWriter {
    async fn write(&self, name: &str, contents: &str) -> ApplicationResult<()> {
        let mut components = Path::new(name).components();
        if !matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        ) {
            return Err(ApplicationError::validation(format!(
                "output file name must be a plain file name: {name}"
            )));
        }

        tokio::fs::create_dir_all(&self.root).await.map_err(|err| {
            ApplicationError::infrastructure(format!(
                "failed to create {}: {err}",
                self.root.display()
            ))
        })?;

        let path = self.root.join(name);
        tokio::fs::write(&path, contents).await.map_err(|err| {
            ApplicationError::infrastructure(format!("failed to write {}: {err}", path.display()))
        })?;

        tracing::debug!(path = %path.display(), "file written");
        Ok(())
    }
}
