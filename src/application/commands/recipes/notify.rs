// src/application/commands/recipes/notify.rs
use std::sync::Arc;

use crate::{
    application::{
        export::escape_html,
        ports::mailer::{EmailMessage, TransactionalMailer},
    },
    domain::recipe::{Recipe, RecipeLink, RecipeUrlBuilder},
};

/// Tells the moderators about new recipes. Delivery problems are logged
/// and never fail the operation that triggered the notice.
#[derive(Clone)]
pub struct ModerationNotifier {
    mailer: Arc<dyn TransactionalMailer>,
    recipient: Option<String>,
    urls: RecipeUrlBuilder,
}

impl ModerationNotifier {
    pub fn new(
        mailer: Arc<dyn TransactionalMailer>,
        recipient: Option<String>,
        urls: RecipeUrlBuilder,
    ) -> Self {
        Self {
            mailer,
            recipient,
            urls,
        }
    }

    pub async fn recipe_created(&self, recipe: &Recipe) {
        let Some(recipient) = &self.recipient else {
            return;
        };

        let url = self.urls.absolute(&self.urls.build_url(&RecipeLink::from(recipe)));
        let message = EmailMessage {
            to: recipient.clone(),
            subject: format!("New recipe to review: {}", recipe.title),
            html: format!(
                "<p>A new recipe was published: <strong>{}</strong>.</p>\
                 <p><a href=\"{}\">{}</a></p>",
                escape_html(recipe.title.as_str()),
                escape_html(&url),
                escape_html(&url),
            ),
        };

        if let Err(err) = self.mailer.send(message).await {
            tracing::warn!(id = %recipe.id, error = %err, "moderation notice not sent");
        }
    }
}
