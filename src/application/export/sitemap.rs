//! Sitemap generation.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.org/recipes/tarte-aux-pommes</loc>
//!     <lastmod>2024-01-01</lastmod>
//!     <changefreq>weekly</changefreq>
//!     <priority>0.8</priority>
//!   </url>
//! </urlset>
//! ```

use std::fmt::Display;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

use super::{ExportReport, ExportSettings, load_documents};
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::site_writer::SiteWriter,
    },
    domain::{
        errors::DomainResult,
        recipe::{RecipeDocument, RecipeId, RecipeReadRepository, RecipeSlug, RecipeUrlBuilder},
    },
};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const RECIPE_PRIORITY: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl ChangeFreq {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapUrl {
    pub loc: String,
    pub lastmod: Option<DateTime<Utc>>,
    pub changefreq: ChangeFreq,
    pub priority: f32,
}

pub struct SitemapGenerator {
    read_repo: Arc<dyn RecipeReadRepository>,
    writer: Arc<dyn SiteWriter>,
    urls: RecipeUrlBuilder,
    settings: ExportSettings,
    file_name: String,
}

impl SitemapGenerator {
    pub fn new(
        read_repo: Arc<dyn RecipeReadRepository>,
        writer: Arc<dyn SiteWriter>,
        urls: RecipeUrlBuilder,
        settings: ExportSettings,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            read_repo,
            writer,
            urls,
            settings,
            file_name: file_name.into(),
        }
    }

    pub async fn generate(&self) -> ApplicationResult<ExportReport> {
        let documents = load_documents(&self.read_repo, self.settings.read_timeout).await?;
        let mut report = ExportReport::default();

        let mut entries = self.static_routes();
        for document in documents {
            let id = document.id.clone();
            match self.recipe_url(document) {
                Ok(url) => {
                    entries.push(url);
                    report.written += 1;
                }
                Err(err) => {
                    tracing::warn!(id = %id, error = %err, "recipe left out of sitemap");
                    report.skipped += 1;
                }
            }
        }

        let xml = render_sitemap(&entries)?;
        self.writer.write(&self.file_name, &xml).await?;
        tracing::info!(
            file = %self.file_name,
            recipes = report.written,
            skipped = report.skipped,
            "sitemap written"
        );
        Ok(report)
    }

    fn recipe_url(&self, document: RecipeDocument) -> DomainResult<SitemapUrl> {
        let id = RecipeId::new(document.id)?;
        let slug = document
            .slug
            .filter(|s| !s.is_empty())
            .map(RecipeSlug::new)
            .transpose()?;
        let path = self
            .urls
            .export_path(id.as_str(), slug.as_ref().map(|s| s.as_str()));

        Ok(SitemapUrl {
            loc: self.urls.absolute(&path),
            lastmod: document.updated_at.or(document.created_at),
            changefreq: ChangeFreq::Weekly,
            priority: RECIPE_PRIORITY,
        })
    }

    fn static_routes(&self) -> Vec<SitemapUrl> {
        let route = |path: &str, changefreq, priority| SitemapUrl {
            loc: self.urls.absolute(path),
            lastmod: None,
            changefreq,
            priority,
        };

        vec![
            route("/", ChangeFreq::Daily, 1.0),
            route(self.urls.listing_path(), ChangeFreq::Daily, 0.9),
            route("/submit", ChangeFreq::Monthly, 0.5),
            route("/about", ChangeFreq::Yearly, 0.3),
        ]
    }
}

pub fn render_sitemap(entries: &[SitemapUrl]) -> ApplicationResult<String> {
    let mut writer = Writer::new_with_indent(Vec::with_capacity(4096), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(xml_error)?;
    writer
        .write_event(Event::Start(
            BytesStart::new("urlset").with_attributes([("xmlns", SITEMAP_NS)]),
        ))
        .map_err(xml_error)?;

    for entry in entries {
        writer
            .write_event(Event::Start(BytesStart::new("url")))
            .map_err(xml_error)?;
        write_text_element(&mut writer, "loc", &entry.loc)?;
        if let Some(lastmod) = entry.lastmod {
            write_text_element(&mut writer, "lastmod", &lastmod.format("%Y-%m-%d").to_string())?;
        }
        write_text_element(&mut writer, "changefreq", entry.changefreq.as_str())?;
        write_text_element(&mut writer, "priority", &format!("{:.1}", entry.priority))?;
        writer
            .write_event(Event::End(BytesEnd::new("url")))
            .map_err(xml_error)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("urlset")))
        .map_err(xml_error)?;

    let mut xml = String::from_utf8(writer.into_inner()).map_err(xml_error)?;
    xml.push('\n');
    Ok(xml)
}

fn write_text_element(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    text: &str,
) -> ApplicationResult<()> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(xml_error)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(xml_error)?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(xml_error)?;
    Ok(())
}

fn xml_error(err: impl Display) -> ApplicationError {
    ApplicationError::infrastructure(format!("failed to render sitemap: {err}"))
}
