use httpmock::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use reqwest::Client;
use tempfile::TempDir;

use coursetab::{ScrapeError, collect_records, report};

const COURSE_PAGE: &str = "<html><head>\
    <script type=\"application/ld+json\">\
    {\"name\":\"Intro to X\",\"hasCourseInstance\":[{\"startDate\":\"2021-05-01\"}]}\
    </script>\
    </head><body>\
    <div class=\"language-info\">English</div>\
    <div class=\"ratings-text bt3-visible-xs\">4.8</div>\
    <div class=\"week\">1</div><div class=\"week\">2</div><div class=\"week\">3</div>\
    </body></html>";

// The mock server only speaks plain HTTP, so each course URL carries an
// https:// mirror in its query string to pass the sitemap's secure-scheme
// filter. The filter matches a substring, not a prefix.
fn sitemap_body(server: &MockServer, count: usize) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?><urlset>");
    for i in 0..count {
        let loc = server.url(format!("/course/{i}?mirror=https://www.coursera.org"));
        xml.push_str(&format!("<url><loc>{}</loc></url>", loc.replace('&', "&amp;")));
    }
    xml.push_str("</urlset>");
    xml
}

#[tokio::test]
async fn collects_one_record_per_sampled_course() {
    let server = MockServer::start();
    let sitemap = sitemap_body(&server, 20);
    server.mock(|when, then| {
        when.method(GET).path("/sitemap.xml");
        then.status(200)
            .header("Content-Type", "application/xml")
            .body(&sitemap);
    });
    for i in 0..20 {
        server.mock(|when, then| {
            when.method(GET).path(format!("/course/{i}"));
            then.status(200)
                .header("Content-Type", "text/html")
                .body(COURSE_PAGE);
        });
    }

    let client = Client::new();
    let mut rng = StdRng::seed_from_u64(42);
    let records = collect_records(&client, &server.url("/sitemap.xml"), 19, &mut rng)
        .await
        .unwrap();

    assert_eq!(records.len(), 19);
    for record in &records {
        assert_eq!(record.name.as_deref(), Some("Intro to X"));
        assert_eq!(record.lang.as_deref(), Some("English"));
        assert_eq!(record.start.as_deref(), Some("2021-05-01"));
        assert_eq!(record.rating.as_deref(), Some("4.8"));
        assert_eq!(record.len, 3);
    }

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("courses.xlsx");
    report::write_report(path.to_str().unwrap(), &records).unwrap();
    assert!(path.exists());
}

#[tokio::test]
async fn failed_sitemap_fetch_writes_nothing() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/sitemap.xml");
        then.status(500);
    });

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("courses.xlsx");

    let client = Client::new();
    let mut rng = StdRng::seed_from_u64(42);
    let result = collect_records(&client, &server.url("/sitemap.xml"), 19, &mut rng).await;

    match result {
        Err(ScrapeError::Fetch { .. }) => {}
        other => panic!("expected a fetch error, got {other:?}"),
    }
    assert!(!path.exists());
}

#[tokio::test]
async fn one_unreachable_course_page_aborts_the_run() {
    let server = MockServer::start();
    let sitemap = sitemap_body(&server, 3);
    server.mock(|when, then| {
        when.method(GET).path("/sitemap.xml");
        then.status(200).body(&sitemap);
    });
    for i in 0..3 {
        server.mock(|when, then| {
            when.method(GET).path(format!("/course/{i}"));
            then.status(404);
        });
    }

    let client = Client::new();
    let mut rng = StdRng::seed_from_u64(42);
    let result = collect_records(&client, &server.url("/sitemap.xml"), 19, &mut rng).await;

    assert!(matches!(result, Err(ScrapeError::Fetch { .. })));
}

#[tokio::test]
async fn a_sub_minimum_sitemap_fails_fast() {
    let server = MockServer::start();
    let sitemap = sitemap_body(&server, 1);
    server.mock(|when, then| {
        when.method(GET).path("/sitemap.xml");
        then.status(200).body(&sitemap);
    });

    let client = Client::new();
    let mut rng = StdRng::seed_from_u64(42);
    let result = collect_records(&client, &server.url("/sitemap.xml"), 19, &mut rng).await;

    assert!(matches!(result, Err(ScrapeError::EmptySitemap)));
}
