use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("request for {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("sitemap is not well-formed XML: {0}")]
    SitemapXml(String),

    #[error("sitemap lists fewer than two course URLs")]
    EmptySitemap,

    #[error("failed to write workbook: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
