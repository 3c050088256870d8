use rand::Rng;
use reqwest::Client;
use scraper::Html;
use tracing::{debug, info};

use crate::cli::{self, Cli};
use crate::error::{Result, ScrapeError};
use crate::extract::{self, CourseRecord};
use crate::fetch;
use crate::report;
use crate::sample::{self, SAMPLE_SIZE};
use crate::sitemap::{self, SITEMAP_URL};

pub async fn run(cli: Cli) -> Result<()> {
    let output_path = cli::resolve_output_path(&cli)?;
    let client = Client::new();
    let mut rng = rand::rng();

    let records = collect_records(&client, SITEMAP_URL, SAMPLE_SIZE, &mut rng).await?;
    report::write_report(&output_path, &records)?;
    info!("report written to {output_path}");

    Ok(())
}

/// Fetches the sitemap, samples `count` course pages and extracts one record
/// per page, strictly in sequence. Any fetch or sitemap-parse failure aborts
/// the collection; per-field extraction never does.
pub async fn collect_records<R: Rng>(
    client: &Client,
    sitemap_url: &str,
    count: usize,
    rng: &mut R,
) -> Result<Vec<CourseRecord>> {
    info!("fetching course sitemap: {sitemap_url}");
    let courses = sitemap::fetch_course_urls(client, sitemap_url).await?;
    info!("sitemap lists {} course pages", courses.len());

    if courses.len() < 2 {
        return Err(ScrapeError::EmptySitemap);
    }

    let sampled = sample::sample_course_urls(rng, &courses, count);
    let mut records = Vec::with_capacity(sampled.len());
    for url in &sampled {
        debug!("fetching course page: {url}");
        let html = fetch::fetch_text(client, url).await?;
        let record = {
            let doc = Html::parse_document(&html);
            extract::course_info(&doc)
        };
        debug!(?record, "extracted");
        records.push(record);
    }

    Ok(records)
}
