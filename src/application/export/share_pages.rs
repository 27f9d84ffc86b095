// src/application/export/share_pages.rs
//! Static share pages.
//!
//! Social networks do not run client code, so every recipe gets a small
//! HTML document carrying its Open Graph / Twitter Card tags. Browsers that
//! open it are sent on to the canonical page.

use std::sync::Arc;

use futures::{StreamExt, stream};

use super::{ExportReport, ExportSettings, escape_html, load_documents};
use crate::{
    application::{error::ApplicationResult, ports::site_writer::SiteWriter},
    domain::{
        errors::DomainResult,
        recipe::{
            RecipeDocument, RecipeId, RecipeReadRepository, RecipeSlug, RecipeTitle,
            RecipeUrlBuilder,
        },
    },
};

/// Everything a share page shows about one recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePage {
    /// `<slug or id>.html`
    pub file_name: String,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    /// Absolute canonical URL.
    pub url: String,
}

impl SharePage {
    pub fn render(&self, site_name: &str) -> String {
        let title = escape_html(&self.title);
        let description = escape_html(&self.description);
        let url = escape_html(&self.url);
        let site_name = escape_html(site_name);

        let mut meta = vec![
            format!(r#"<meta name="description" content="{description}">"#),
            format!(r#"<link rel="canonical" href="{url}">"#),
            r#"<meta property="og:type" content="article">"#.to_string(),
            format!(r#"<meta property="og:site_name" content="{site_name}">"#),
            format!(r#"<meta property="og:title" content="{title}">"#),
            format!(r#"<meta property="og:description" content="{description}">"#),
            format!(r#"<meta property="og:url" content="{url}">"#),
        ];
        let card = if let Some(image) = &self.image {
            let image = escape_html(image);
            meta.push(format!(r#"<meta property="og:image" content="{image}">"#));
            meta.push(format!(r#"<meta name="twitter:image" content="{image}">"#));
            "summary_large_image"
        } else {
            "summary"
        };
        meta.push(format!(r#"<meta name="twitter:card" content="{card}">"#));
        meta.push(format!(r#"<meta name="twitter:title" content="{title}">"#));
        meta.push(format!(
            r#"<meta name="twitter:description" content="{description}">"#
        ));

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {site_name}</title>
{meta}
<script>window.location.replace({target});</script>
</head>
<body>
<p><a href="{url}">{title}</a></p>
</body>
</html>
"#,
            meta = meta.join("\n"),
            target = js_string(&self.url),
        )
    }
}

pub struct SharePageGenerator {
    read_repo: Arc<dyn RecipeReadRepository>,
    writer: Arc<dyn SiteWriter>,
    urls: RecipeUrlBuilder,
    settings: ExportSettings,
}

impl SharePageGenerator {
    pub fn new(
        read_repo: Arc<dyn RecipeReadRepository>,
        writer: Arc<dyn SiteWriter>,
        urls: RecipeUrlBuilder,
        settings: ExportSettings,
    ) -> Self {
        Self {
            read_repo,
            writer,
            urls,
            settings,
        }
    }

    pub async fn generate(&self) -> ApplicationResult<ExportReport> {
        let documents = load_documents(&self.read_repo, self.settings.read_timeout).await?;
        let mut report = ExportReport::default();

        let mut pages = Vec::with_capacity(documents.len());
        for document in documents {
            let id = document.id.clone();
            match self.share_page(document) {
                Ok(page) => pages.push(page),
                Err(err) => {
                    tracing::warn!(id = %id, error = %err, "no share page for recipe");
                    report.skipped += 1;
                }
            }
        }

        let site_name = self.settings.site_name.as_str();
        let results: Vec<(String, ApplicationResult<()>)> = stream::iter(pages)
            .map(|page| {
                let writer = Arc::clone(&self.writer);
                async move {
                    let html = page.render(site_name);
                    let result = writer.write(&page.file_name, &html).await;
                    (page.file_name, result)
                }
            })
            .buffer_unordered(self.settings.concurrency.max(1))
            .collect()
            .await;

        for (file_name, result) in results {
            match result {
                Ok(()) => report.written += 1,
                Err(err) => {
                    tracing::warn!(file = %file_name, error = %err, "share page not written");
                    report.skipped += 1;
                }
            }
        }

        tracing::info!(
            written = report.written,
            skipped = report.skipped,
            "share pages generated"
        );
        Ok(report)
    }

    pub fn share_page(&self, document: RecipeDocument) -> DomainResult<SharePage> {
        let id = RecipeId::new(document.id)?;
        let title = RecipeTitle::new(document.title.unwrap_or_default())?;
        let slug = document
            .slug
            .filter(|s| !s.is_empty())
            .map(RecipeSlug::new)
            .transpose()?;
        let key = slug.as_ref().map_or(id.as_str(), |s| s.as_str());

        let path = self.urls.export_path(id.as_str(), Some(key));
        Ok(SharePage {
            file_name: format!("{key}.html"),
            description: describe(title.as_str(), document.category.as_deref()),
            title: title.into(),
            image: document.images.into_iter().find(|i| !i.trim().is_empty()),
            url: self.urls.absolute(&path),
        })
    }
}

fn describe(title: &str, category: Option<&str>) -> String {
    match category.map(str::trim).filter(|c| !c.is_empty()) {
        Some(category) => format!("Discover our {} recipe: {title}", category.to_lowercase()),
        None => format!("Discover our recipe: {title}"),
    }
}

/// JSON string literal that is also safe inside a `<script>` element.
fn js_string(value: &str) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| String::from("\"/\""))
        .replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(image: Option<&str>) -> SharePage {
        SharePage {
            file_name: "tarte-aux-pommes.html".into(),
            title: "Tarte aux pommes".into(),
            description: "Discover our dessert recipe: Tarte aux pommes".into(),
            image: image.map(Into::into),
            url: "https://example.org/recipes/tarte-aux-pommes".into(),
        }
    }

    #[test]
    fn describe_with_and_without_category() {
        assert_eq!(
            describe("Quiche", Some("Plat")),
            "Discover our plat recipe: Quiche"
        );
        assert_eq!(describe("Quiche", Some("  ")), "Discover our recipe: Quiche");
        assert_eq!(describe("Quiche", None), "Discover our recipe: Quiche");
    }

    #[test]
    fn render_includes_meta_and_redirect() {
        let html = page(Some("https://cdn.example.org/a.jpg")).render("Recipes");
        assert!(html.contains(r#"<meta property="og:title" content="Tarte aux pommes">"#));
        assert!(html.contains(
            r#"<meta property="og:image" content="https://cdn.example.org/a.jpg">"#
        ));
        assert!(html.contains(r#"<meta name="twitter:card" content="summary_large_image">"#));
        assert!(html.contains(
            r#"window.location.replace("https://example.org/recipes/tarte-aux-pommes");"#
        ));
    }

    #[test]
    fn render_without_image_uses_summary_card() {
        let html = page(None).render("Recipes");
        assert!(!html.contains("og:image"));
        assert!(html.contains(r#"<meta name="twitter:card" content="summary">"#));
    }

    #[test]
    fn render_escapes_title() {
        let mut page = page(None);
        page.title = r#"Fish & "chips""#.into();
        let html = page.render("Recipes");
        assert!(html.contains("Fish &amp; &quot;chips&quot;"));
        assert!(!html.contains(r#"Fish & "chips""#));
    }

    #[test]
    fn js_string_cannot_close_script() {
        assert_eq!(js_string("a</script>"), r#""a<\/script>""#);
    }
}
