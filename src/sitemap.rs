use quick_xml::Reader;
use quick_xml::events::Event;
use reqwest::Client;

use crate::error::{Result, ScrapeError};
use crate::fetch;

pub const SITEMAP_URL: &str = "https://www.coursera.org/sitemap~www~courses.xml";

pub async fn fetch_course_urls(client: &Client, sitemap_url: &str) -> Result<Vec<String>> {
    let body = fetch::fetch_text(client, sitemap_url).await?;
    parse_course_urls(&body)
}

/// Collects every text node that carries a secure-scheme URL, in document
/// order. The `<url><loc>` nesting is not modeled; text at any depth
/// qualifies as long as it is non-empty and contains `https://`.
pub fn parse_course_urls(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut urls = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Text(text)) => {
                let text = text
                    .unescape()
                    .map_err(|err| ScrapeError::SitemapXml(err.to_string()))?;
                if !text.is_empty() && text.contains("https://") {
                    urls.push(text.into_owned());
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => return Err(ScrapeError::SitemapXml(err.to_string())),
        }
    }

    Ok(urls)
}
