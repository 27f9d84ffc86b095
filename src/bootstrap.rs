// src/bootstrap.rs
//! Wiring shared by the server and the batch binaries.

use std::sync::Arc;

use crate::application::{
    ports::{mailer::TransactionalMailer, time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use crate::config::AppConfig;
use crate::infrastructure::{
    backend::Backend,
    mail::{HttpMailer, LogMailer},
    system::{RecipeSlugGenerator, SystemClock},
};

pub fn mailer(config: &AppConfig) -> anyhow::Result<Arc<dyn TransactionalMailer>> {
    Ok(match config.mail() {
        Some(mail) => Arc::new(HttpMailer::new(&mail.api_url, &mail.api_key, &mail.from)?),
        None => {
            tracing::info!("MAIL_API_URL, MAIL_API_KEY or MAIL_FROM unset: emails are only logged");
            Arc::new(LogMailer)
        }
    })
}

pub fn services(config: &AppConfig, backend: &Backend) -> anyhow::Result<Arc<ApplicationServices>> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(RecipeSlugGenerator);

    Ok(Arc::new(ApplicationServices::new(
        backend.recipe_write_repo(),
        backend.recipe_read_repo(),
        mailer(config)?,
        clock,
        slugger,
        config.service_settings(),
    )))
}
