//! HTML content extraction
//!
//! Turns raw page content into plain text plus the outbound links to follow.
//! Text comes from `<p>` elements; links come from `<a href>` resolved
//! against the page URL, restricted to http/https.

use scraper::{Html, Selector};
use thiserror::Error;
use url::Url;

/// Errors raised while extracting content from a fetched page
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Malformed content: {0}")]
    Malformed(String),
}

/// Plain text and outbound links derived from one page
///
/// Owned by the worker processing the page and discarded afterwards.
#[derive(Debug, Clone)]
pub struct ExtractedContent {
    /// Concatenated paragraph text
    pub text: String,

    /// Outbound links in document order, already absolute and http/https
    pub links: Vec<Url>,
}

/// Turns raw content into text and outbound links
pub trait ContentExtractor: Send + Sync {
    /// Extracts content from `html`, resolving links against `base_url`
    fn extract(&self, html: &str, base_url: &Url) -> Result<ExtractedContent, ExtractError>;
}

/// scraper-backed extractor for HTML pages
#[derive(Debug, Default)]
pub struct HtmlExtractor;

impl HtmlExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl ContentExtractor for HtmlExtractor {
    fn extract(&self, html: &str, base_url: &Url) -> Result<ExtractedContent, ExtractError> {
        let document = Html::parse_document(html);

        Ok(ExtractedContent {
            text: extract_text(&document),
            links: extract_links(&document, base_url),
        })
    }
}

/// Joins the text of all `<p>` elements with single spaces
fn extract_text(document: &Html) -> String {
    let mut paragraphs = Vec::new();

    if let Ok(p_selector) = Selector::parse("p") {
        for element in document.select(&p_selector) {
            let text = element.text().collect::<String>();
            let text = text.trim();
            if !text.is_empty() {
                paragraphs.push(text.to_string());
            }
        }
    }

    paragraphs.join(" ")
}

/// Collects crawlable links from `<a href>` elements in document order
fn extract_links(document: &Html, base_url: &Url) -> Vec<Url> {
    let mut links = Vec::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(absolute_url) = resolve_link(href, base_url) {
                    links.push(absolute_url);
                }
            }
        }
    }

    links
}

/// Resolves a link href to an absolute URL and validates it
///
/// Returns None if the link should be excluded:
/// - javascript:, mailto:, tel: schemes
/// - data: URIs
/// - fragment-only links
/// - Invalid URLs
/// - Non-HTTP(S) URLs after resolution
fn resolve_link(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    if href.starts_with('#') {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute_url) => {
            if absolute_url.scheme() == "http" || absolute_url.scheme() == "https" {
                Some(absolute_url)
            } else {
                None
            }
        }
        Err(_) => None,
    }
}
