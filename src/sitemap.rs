//! Sitemap 0.9 generation for the site publishing the transforms.
//!
//! The route list is fixed: the home page, one page per registered transform
//! under `/tools/`, the static sections, any extra route from the
//! configuration and finally the blog posts.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use serde::Serialize;
use strum_macros::Display;
use tera::{Context, Tera};
use url::Url;

use crate::config::{BlogEntry, SitemapConfig};
use crate::constants::sitemap::{BLOG_PREFIX, SECTIONS, TOOLS_PREFIX, XMLNS};
use crate::debug;
use crate::error::*;
use crate::transforms::TransformRegistry;

const TEMPLATE_NAME: &str = "sitemap";

static TEMPLATE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="{{ xmlns }}">
{%- for url in urls %}
  <url>
    <loc>{{ url.loc }}</loc>
    <lastmod>{{ url.lastmod }}</lastmod>
    <changefreq>{{ url.changefreq }}</changefreq>
    <priority>{{ url.priority }}</priority>
  </url>
{%- endfor %}
</urlset>
"#;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ChangeFreq {
    Daily,
    Weekly,
    Monthly,
}

/// A single `<url>` entry of the sitemap
#[derive(Debug, Clone, PartialEq)]
pub struct UrlEntry {
    pub loc: String,
    pub lastmod: NaiveDate,
    pub changefreq: ChangeFreq,
    pub priority: f32,
}

/// Rendering view of an entry with every field already formatted and escaped
#[derive(Serialize)]
struct UrlView {
    loc: String,
    lastmod: String,
    changefreq: String,
    priority: String,
}

impl From<&UrlEntry> for UrlView {
    fn from(entry: &UrlEntry) -> Self {
        UrlView {
            loc: html_escape::encode_quoted_attribute(&entry.loc).into_owned(),
            lastmod: entry.lastmod.format(DATE_FORMAT).to_string(),
            changefreq: entry.changefreq.to_string(),
            priority: format!("{:.1}", entry.priority),
        }
    }
}

pub struct SitemapGenerator {
    base_url: String,
    output: PathBuf,
    tools: Vec<&'static str>,
    routes: Vec<String>,
    blog: Vec<BlogEntry>,
}

impl SitemapGenerator {
    /// Creates the generator for the transforms available in the given registry.
    ///
    /// # Errors
    /// * `SitemapError` - If the base URL is not an absolute http(s) URL
    /// * `InterpolationError` - If the output path cannot be expanded
    pub fn new(config: &SitemapConfig, registry: &TransformRegistry) -> Result<Self> {
        let output = shellexpand::full(&config.output).map_err(|e| Error::InterpolationError {
            location: ConfigType::SITEMAP,
            cause: e.to_string(),
        })?;

        Ok(SitemapGenerator {
            base_url: validate_base_url(&config.base_url)?,
            output: PathBuf::from(output.as_ref()),
            tools: registry.entries().map(|entry| entry.name).collect(),
            routes: config.routes.clone(),
            blog: config.blog.clone(),
        })
    }

    pub fn output(&self) -> &PathBuf {
        &self.output
    }

    /// Builds the list of unique entries, dating undated ones with `today`
    pub fn urls(&self, today: NaiveDate) -> Result<Vec<UrlEntry>> {
        let mut entries = vec![self.entry("/", today, ChangeFreq::Daily, 1.0)];

        for tool in &self.tools {
            let path = format!("/{}/{}", TOOLS_PREFIX, tool);
            entries.push(self.entry(&path, today, ChangeFreq::Weekly, 0.8));
        }
        for route in SECTIONS.iter().map(|s| s.to_string()).chain(self.routes.clone()) {
            let path = format!("/{}", route.trim_start_matches('/'));
            entries.push(self.entry(&path, today, ChangeFreq::Weekly, 0.8));
        }
        for post in &self.blog {
            let slug = post.slug.trim_matches('/');
            if slug.is_empty() {
                return Err(Error::SitemapError("blog entry with an empty slug".to_string()));
            }
            let lastmod = match &post.lastmod {
                Some(date) => NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|e| {
                    Error::SitemapError(format!(
                        "invalid lastmod \"{}\" for blog entry \"{}\" ({})",
                        date, slug, e
                    ))
                })?,
                None => today,
            };
            let path = format!("/{}/{}", BLOG_PREFIX, urlencoding::encode(slug));
            entries.push(self.entry(&path, lastmod, ChangeFreq::Monthly, 0.7));
        }

        let mut seen = HashSet::new();
        entries.retain(|entry| seen.insert(entry.loc.clone()));
        Ok(entries)
    }

    /// Renders the sitemap document
    pub fn render(&self, today: NaiveDate) -> Result<String> {
        let views: Vec<UrlView> = self.urls(today)?.iter().map(UrlView::from).collect();

        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)?;

        let mut context = Context::new();
        context.insert("xmlns", XMLNS);
        context.insert("urls", &views);

        Ok(tera.render(TEMPLATE_NAME, &context)?)
    }

    /// Writes the sitemap to the configured output, creating the missing directories.
    ///
    /// # Returns
    /// The path of the written file.
    pub fn write(&self) -> Result<PathBuf> {
        self.write_on(Local::now().date_naive())
    }

    pub fn write_on(&self, today: NaiveDate) -> Result<PathBuf> {
        let document = self.render(today)?;
        if let Some(parent) = self.output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        debug!(
            "Writing sitemap ({} bytes) to {}",
            document.len(),
            self.output.display()
        );
        fs::write(&self.output, document)?;
        Ok(self.output.clone())
    }

    fn entry(&self, path: &str, lastmod: NaiveDate, changefreq: ChangeFreq, priority: f32) -> UrlEntry {
        UrlEntry {
            loc: format!("{}{}", self.base_url, path),
            lastmod,
            changefreq,
            priority,
        }
    }
}

/// Checks the base URL is an absolute http(s) URL without query nor fragment.
///
/// # Returns
/// The URL without its trailing slash.
fn validate_base_url(base_url: &str) -> Result<String> {
    let url = Url::parse(base_url.trim())
        .map_err(|e| Error::SitemapError(format!("invalid base URL \"{}\" ({})", base_url, e)))?;

    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(Error::SitemapError(format!(
            "base URL \"{}\" must be an absolute http(s) URL",
            base_url
        )));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(Error::SitemapError(format!(
            "base URL \"{}\" cannot have a query or a fragment",
            base_url
        )));
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}
