//! Writes `<EXPORT_DIR>/<SITEMAP_FILE>` from the current recipe collection.

use std::sync::Arc;

use anyhow::Result;
use recipebook_core::{
    application::export::SitemapGenerator, config::AppConfig, infrastructure::backend::Backend,
    infrastructure::fs::FsSiteWriter, telemetry::init_tracing,
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!(error = %err, "sitemap generation failed");
        eprintln!("sitemap generation failed: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let backend = Backend::connect(config.database_url()).await?;

    let generator = SitemapGenerator::new(
        backend.recipe_read_repo(),
        Arc::new(FsSiteWriter::new(config.export_dir())),
        config.urls(),
        config.export_settings(),
        config.sitemap_file(),
    );
    let result = generator.generate().await;
    backend.shutdown().await;

    let report = result?;
    println!(
        "sitemap written to {}: {} recipes, {} skipped",
        config.export_dir().join(config.sitemap_file()).display(),
        report.written,
        report.skipped
    );
    Ok(())
}
