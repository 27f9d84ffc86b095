//! Assigns a slug to every recipe that has none. Safe to rerun.

use anyhow::Result;
use recipebook_core::{
    bootstrap, config::AppConfig, infrastructure::backend::Backend, telemetry::init_tracing,
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!(error = %err, "slug backfill failed");
        eprintln!("slug backfill failed: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let backend = Backend::connect(config.database_url()).await?;
    backend.migrate().await?;

    let result = match bootstrap::services(&config, &backend) {
        Ok(services) => services.recipe_commands.backfill_slugs().await.map_err(Into::into),
        Err(err) => Err(err),
    };
    backend.shutdown().await;

    let report = result?;
    println!(
        "slug backfill: {} assigned, {} unchanged, {} failed",
        report.assigned, report.unchanged, report.failed
    );
    Ok(())
}
