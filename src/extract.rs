use scraper::{Html, Selector};
use serde_json::Value;

/// Metadata scraped from a single course page. Every field is best-effort;
/// a page with none of the expected markup still produces a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseRecord {
    pub name: Option<String>,
    pub lang: Option<String>,
    pub rating: Option<String>,
    pub start: Option<String>,
    pub len: usize,
}

/// Runs all five extractors against one parsed page. The extractors are
/// independent; a field that cannot be read leaves the others untouched.
pub fn course_info(doc: &Html) -> CourseRecord {
    CourseRecord {
        name: extract_name(doc),
        lang: extract_language(doc),
        rating: extract_rating(doc),
        start: extract_start_date(doc),
        len: count_weeks(doc),
    }
}

pub fn extract_name(doc: &Html) -> Option<String> {
    let raw = linked_data_text(doc)?;
    if !raw.contains("\"name\"") {
        return None;
    }
    let data: Value = serde_json::from_str(&raw).ok()?;
    data.get("name")?.as_str().map(str::to_string)
}

pub fn extract_language(doc: &Html) -> Option<String> {
    let selector = match Selector::parse(".language-info") {
        Ok(s) => s,
        Err(_) => return None,
    };

    doc.select(&selector)
        .next()
        .map(|el| normalize_text(&el.text().collect::<String>()))
}

pub fn extract_rating(doc: &Html) -> Option<String> {
    // Class-token match on both tokens; partial names like `ratings-text-sm`
    // must not qualify.
    let selector = match Selector::parse("div.ratings-text.bt3-visible-xs") {
        Ok(s) => s,
        Err(_) => return None,
    };

    doc.select(&selector)
        .next()
        .map(|el| normalize_text(&el.text().collect::<String>()))
}

pub fn extract_start_date(doc: &Html) -> Option<String> {
    let raw = linked_data_text(doc)?;
    if !raw.contains("\"startDate\"") {
        return None;
    }
    let data: Value = serde_json::from_str(&raw).ok()?;
    data.get("hasCourseInstance")?
        .get(0)?
        .get("startDate")?
        .as_str()
        .map(str::to_string)
}

pub fn count_weeks(doc: &Html) -> usize {
    match Selector::parse(".week") {
        Ok(selector) => doc.select(&selector).count(),
        Err(_) => 0,
    }
}

/// Raw text of the first structured linked-data script on the page, if any.
/// Name and start date both read from this one block.
fn linked_data_text(doc: &Html) -> Option<String> {
    let selector = match Selector::parse("script[type=\"application/ld+json\"]") {
        Ok(s) => s,
        Err(_) => return None,
    };

    doc.select(&selector)
        .next()
        .map(|el| el.text().collect::<String>())
}

fn normalize_text(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}
