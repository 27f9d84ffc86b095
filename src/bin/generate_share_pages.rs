//! Writes one share page per recipe into `<SHARE_DIR>`.

use std::sync::Arc;

use anyhow::Result;
use recipebook_core::{
    application::export::SharePageGenerator, config::AppConfig, infrastructure::backend::Backend,
    infrastructure::fs::FsSiteWriter, telemetry::init_tracing,
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!(error = %err, "share page generation failed");
        eprintln!("share page generation failed: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let backend = Backend::connect(config.database_url()).await?;

    let generator = SharePageGenerator::new(
        backend.recipe_read_repo(),
        Arc::new(FsSiteWriter::new(config.share_dir())),
        config.urls(),
        config.export_settings(),
    );
    let result = generator.generate().await;
    backend.shutdown().await;

    let report = result?;
    println!(
        "share pages written to {}: {} written, {} skipped",
        config.share_dir().display(),
        report.written,
        report.skipped
    );
    Ok(())
}
